#![forbid(unsafe_code)]

//! The delegated input dispatcher.
//!
//! One [`InputDispatcher`] instance lives for the whole application. Click
//! dispatch walks the target's ancestor chain: the overlay backdrop dismisses
//! the topmost popup, the first navigable anchor opens its room, and the
//! first recognized button runs its action. Keydown dispatch runs a gate
//! chain: in-progress typing is never intercepted, the focused room gets
//! first refusal through its hook, modifier chords are left to the browser,
//! and bare arrow keys move panel focus.
//!
//! # Invariants
//!
//! 1. A consumed outcome means no other handler may act on the event;
//!    an unconsumed outcome leaves native behavior untouched.
//! 2. Unrecognized button names are a no-op that does not consume.
//! 3. Arrow-key focus moves do not consume (native scrolling, if any,
//!    proceeds) but do set the one-way `arrow_keys_used` flag.

use panekit_core::{AnchorOrigin, Key, Modifiers, RoomId, StoreRequest};
use panekit_router::{LinkTarget, ServerContext, classify};

use crate::element::{ClickContext, ElementRef, FocusedControl};

/// Result of dispatching one click.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClickOutcome {
    pub requests: Vec<StoreRequest>,
    /// Whether the event was claimed (stop propagation + prevent default).
    pub consumed: bool,
}

impl ClickOutcome {
    /// Leave the event entirely to the browser.
    #[must_use]
    pub fn pass() -> Self {
        Self::default()
    }

    fn claim(request: StoreRequest) -> Self {
        Self {
            requests: vec![request],
            consumed: true,
        }
    }
}

/// Result of dispatching one keydown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    pub requests: Vec<StoreRequest>,
    pub consumed: bool,
}

impl KeyOutcome {
    #[must_use]
    pub fn pass() -> Self {
        Self::default()
    }
}

/// First-refusal response from the focused room's input hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HookVerdict {
    /// The room did not handle the event; global shortcuts may run.
    #[default]
    Pass,
    /// The room claims the event; consume it and do nothing else.
    Suppress,
}

/// A keydown event, flattened for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyContext {
    pub key: Key,
    pub modifiers: Modifiers,
    pub focus: FocusedControl,
}

impl KeyContext {
    #[must_use]
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
            focus: FocusedControl::Other,
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_focus(mut self, focus: FocusedControl) -> Self {
        self.focus = focus;
        self
    }
}

/// The application-lifetime delegated dispatcher.
#[derive(Debug)]
pub struct InputDispatcher {
    server: ServerContext,
    arrow_keys_used: bool,
}

impl InputDispatcher {
    /// Create the dispatcher for the deployment it serves.
    #[must_use]
    pub fn new(server: ServerContext) -> Self {
        Self {
            server,
            arrow_keys_used: false,
        }
    }

    /// One-way flag: whether arrow-key panel navigation has ever been used.
    #[must_use]
    pub fn arrow_keys_used(&self) -> bool {
        self.arrow_keys_used
    }

    /// Dispatch a click against the target's ancestor chain.
    pub fn dispatch_click(&self, ctx: &ClickContext) -> ClickOutcome {
        if ctx.target_is_backdrop() {
            tracing::debug!("backdrop click dismisses topmost popup");
            return ClickOutcome::claim(StoreRequest::ClosePopup);
        }

        for (index, elem) in ctx.chain.iter().enumerate() {
            match elem {
                ElementRef::Anchor { host, pathname } => {
                    let link = LinkTarget::new(host.clone(), pathname.clone());
                    if let Some(id) = classify(&link, &self.server) {
                        tracing::debug!(roomid = %id, "anchor click opens room");
                        return ClickOutcome::claim(StoreRequest::Join {
                            id,
                            side: None,
                            origin: Some(AnchorOrigin(index)),
                        });
                    }
                    // Not in-app navigation; keep walking.
                }
                ElementRef::Button { name, value } => {
                    if let Some(outcome) = self.button_action(name, value, index) {
                        return outcome;
                    }
                    // Unrecognized button: native behavior proceeds.
                }
                ElementRef::OverlayBackdrop | ElementRef::Other => {}
            }
        }
        ClickOutcome::pass()
    }

    /// The fixed button `name` → action table.
    ///
    /// Out-of-grammar `value` strings are never treated as room ids; the
    /// button then behaves like an unrecognized one.
    fn button_action(&self, name: &str, value: &str, index: usize) -> Option<ClickOutcome> {
        match name {
            "closeRoom" => {
                let id = RoomId::parse(value).ok()?;
                tracing::debug!(roomid = %id, "close button leaves room");
                Some(ClickOutcome::claim(StoreRequest::Leave { id }))
            }
            "joinRoom" => {
                let id = RoomId::parse(value).ok()?;
                tracing::debug!(roomid = %id, "join button opens room");
                Some(ClickOutcome::claim(StoreRequest::Join {
                    id,
                    side: None,
                    origin: Some(AnchorOrigin(index)),
                }))
            }
            _ => None,
        }
    }

    /// Dispatch a keydown through the gate chain.
    ///
    /// `room_hook` is the focused room's input hook; it is only consulted
    /// when the event is not in-progress typing.
    pub fn dispatch_keydown(
        &mut self,
        ctx: &KeyContext,
        room_hook: impl FnOnce(&KeyContext) -> HookVerdict,
    ) -> KeyOutcome {
        if ctx.focus.captures_typing() {
            return KeyOutcome::pass();
        }

        if room_hook(ctx) == HookVerdict::Suppress {
            tracing::trace!(key = ?ctx.key, "focused room suppressed keydown");
            return KeyOutcome {
                requests: Vec::new(),
                consumed: true,
            };
        }

        if ctx.modifiers.any() {
            return KeyOutcome::pass();
        }

        match ctx.key {
            Key::ArrowLeft => {
                self.arrow_keys_used = true;
                KeyOutcome {
                    requests: vec![StoreRequest::FocusLeft],
                    consumed: false,
                }
            }
            Key::ArrowRight => {
                self.arrow_keys_used = true;
                KeyOutcome {
                    requests: vec![StoreRequest::FocusRight],
                    consumed: false,
                }
            }
            _ => KeyOutcome::pass(),
        }
    }
}
