#![forbid(unsafe_code)]

//! Host: top-level frame composition.
//!
//! # Role in panekit
//! `panekit-host` assembles what the embedding actually renders: for every
//! room the layout store knows, a resolved panel placement and a renderer
//! picked from the [`RoomTypeRegistry`]; the header tab strip as a plain view
//! model; the popup overlay stack in z-order. [`compose`] is a pure function
//! of the layout snapshot and the registry.
//!
//! The theme mirror lives here too: the one place the shell writes document
//! styling, behind an injected [`StyleSink`]. [`Shell`] bundles the router
//! and dispatcher for embeddings that want a single entry point.

pub mod frame;
pub mod header;
pub mod registry;
pub mod shell;
pub mod theme;

pub use frame::{Frame, PanelPlacement, PopupPlacement, compose};
pub use header::{HeaderModel, RIGHT_TABS_INSET, TabEntry, TabIcon, USERBAR_BUTTONS, header_model};
pub use registry::RoomTypeRegistry;
pub use shell::Shell;
pub use theme::{DARK_CLASS, StyleSink, ThemeMirror};
