#![forbid(unsafe_code)]

//! Core: room model, identifiers, input events, and store commands.
//!
//! # Role in panekit
//! `panekit-core` is the vocabulary layer. It owns the types every other
//! crate speaks: grammar-checked room identifiers, the read-only layout
//! snapshot the shell receives from the layout store, normalized key events,
//! and the command enum the shell issues back toward the store.
//!
//! # How it fits in the system
//! The router (`panekit-router`) and dispatcher (`panekit-input`) consume
//! [`LayoutView`] snapshots and produce [`StoreRequest`] commands; the host
//! (`panekit-host`) composes frames from the same snapshot. Nothing in this
//! crate touches a browser: the embedding applies commands to the real
//! layout store and feeds fresh snapshots back in.

pub mod key;
pub mod request;
pub mod room;
pub mod roomid;

pub use key::{Key, Modifiers};
pub use request::{AnchorOrigin, StoreRequest};
pub use room::{LayoutView, NotifyState, Room, RoomSide};
pub use roomid::{RoomId, RoomIdError};
