#![forbid(unsafe_code)]

//! Normalized keyboard event types.
//!
//! The embedding translates raw browser key events into these before handing
//! them to the dispatcher, so shortcut logic is testable without a DOM.

use bitflags::bitflags;

/// Key identity for a keydown event.
///
/// Only keys the shell dispatches on are distinguished; everything else is
/// carried as [`Key::Other`] so the dispatcher can still offer it to the
/// focused room's hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Enter,
    Escape,
    Char(char),
    /// Any key the shell has no global binding for.
    Other,
}

bitflags! {
    /// Modifier keys held during an event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const NONE  = 0;
        const CTRL  = 1 << 0;
        const ALT   = 1 << 1;
        const META  = 1 << 2;
        const SHIFT = 1 << 3;
    }
}

impl Modifiers {
    /// Whether any modifier is held.
    #[must_use]
    pub const fn any(self) -> bool {
        !self.is_empty()
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}
