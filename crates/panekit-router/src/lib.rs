#![forbid(unsafe_code)]

//! Router: browser-navigation synchronization for the panel layout.
//!
//! # Role in panekit
//! `panekit-router` keeps two independently mutable sources of truth
//! consistent: the browser's URL/history state and the layout store's room
//! arrangement. It is a command-returning state machine: it consumes layout
//! change notifications and genuine navigation events, and returns
//! [`HistoryOp`] / [`panekit_core::StoreRequest`] commands for the embedding
//! to apply. Because the router never applies its own commands, a history
//! write it requests can never re-enter it, and loop freedom is structural
//! rather than guarded.
//!
//! # Primary responsibilities
//! - **NavSnapshot**: the `left..right` serialization round-tripped through
//!   history entries.
//! - **LinkClassifier**: deciding whether an anchor is in-app navigation.
//! - **NavigationRouter**: the path/hash/inert mode state machine.

pub mod classify;
pub mod router;
pub mod snapshot;

pub use classify::{FIRST_PARTY_HOSTS, LinkTarget, PRODUCTION_SERVER_ID, ServerContext, classify};
pub use router::{HistoryOp, InitialUrl, NavigationRouter, RouterMode};
pub use snapshot::{NavSnapshot, SNAPSHOT_SEPARATOR};
