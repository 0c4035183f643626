#![forbid(unsafe_code)]

//! The assembled shell: one router, one dispatcher, one lifetime.
//!
//! [`Shell`] is the object the embedding constructs at startup and wires to
//! the browser: apply the startup requests, register the capturing
//! click/keydown listeners, subscribe-and-run against the layout store, and
//! listen for `popstate`/`hashchange`. Every method is a thin forward; the
//! shell exists so the embedding holds a single long-lived value with the
//! same lifecycle the listeners have.

use panekit_core::{LayoutView, StoreRequest};
use panekit_input::{ClickContext, ClickOutcome, HookVerdict, InputDispatcher, KeyContext, KeyOutcome};
use panekit_router::{HistoryOp, InitialUrl, NavigationRouter, RouterMode, ServerContext};

/// The application shell.
#[derive(Debug)]
pub struct Shell {
    router: NavigationRouter,
    dispatcher: InputDispatcher,
}

impl Shell {
    /// Build the shell from the initial URL and deployment context.
    ///
    /// Returns the startup store requests (the initial room join, when the
    /// routing mode wants one) for the embedding to apply before its first
    /// layout reconciliation.
    pub fn new(url: &InitialUrl, server: ServerContext) -> (Self, Vec<StoreRequest>) {
        let (router, startup) = NavigationRouter::new(url);
        let shell = Self {
            router,
            dispatcher: InputDispatcher::new(server),
        };
        (shell, startup)
    }

    /// The routing mode fixed at startup.
    #[must_use]
    pub fn router_mode(&self) -> RouterMode {
        self.router.mode()
    }

    /// Forward a layout-store change notification.
    pub fn layout_changed(&mut self, view: &LayoutView) -> Option<HistoryOp> {
        self.router.layout_changed(view)
    }

    /// Forward a `popstate` event.
    #[must_use]
    pub fn history_popped(&self, pathname: &str, state: Option<&str>) -> Vec<StoreRequest> {
        self.router.history_popped(pathname, state)
    }

    /// Forward a `hashchange` event.
    #[must_use]
    pub fn hash_changed(&self, hash: &str) -> Vec<StoreRequest> {
        self.router.hash_changed(hash)
    }

    /// Forward a captured click.
    pub fn click(&self, ctx: &ClickContext) -> ClickOutcome {
        self.dispatcher.dispatch_click(ctx)
    }

    /// Forward a captured keydown.
    pub fn keydown(
        &mut self,
        ctx: &KeyContext,
        room_hook: impl FnOnce(&KeyContext) -> HookVerdict,
    ) -> KeyOutcome {
        self.dispatcher.dispatch_keydown(ctx, room_hook)
    }

    /// Whether arrow-key panel navigation has ever been used.
    #[must_use]
    pub fn arrow_keys_used(&self) -> bool {
        self.dispatcher.arrow_keys_used()
    }
}
