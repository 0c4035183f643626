#![forbid(unsafe_code)]

//! Input: delegated click and keydown dispatch.
//!
//! # Role in panekit
//! The browser attaches exactly one capturing listener per event type for the
//! application's lifetime. Instead of handing the dispatcher a live DOM, the
//! embedding synthesizes the event into plain data (the ancestor chain of
//! the click target, or the key/modifier/focus context of a keydown) and
//! [`InputDispatcher`] turns it into layout-store requests plus a consumed
//! flag. A consumed outcome maps to `preventDefault` +
//! `stopImmediatePropagation` at the boundary; an unconsumed one leaves
//! native behavior alone.

pub mod dispatch;
pub mod element;

pub use dispatch::{ClickOutcome, HookVerdict, InputDispatcher, KeyContext, KeyOutcome};
pub use element::{ClickContext, ElementRef, FocusedControl};
