#![forbid(unsafe_code)]

//! Layout: position descriptors, the box-style resolver, and standard panel
//! placements.
//!
//! # Role in panekit
//! `panekit-layout` is the geometry layer. A [`PanelPosition`] declares a
//! panel's location as CSS-like edge insets; [`resolve`] turns it into an
//! absolute [`BoxStyle`] deterministically. Split panels abut each other
//! pixel-exactly at the split boundary, so the mapping is exact: the resolver
//! reserves a one-pixel seam on the horizontal axis for the adjoining
//! panel's border.
//!
//! # Failure Modes
//! A descriptor whose active edges imply a negative size is a programming
//! error in the caller, not user input, and resolves to
//! [`PositionError::InvalidRange`] rather than a clamped box.

pub mod placement;
pub mod position;

pub use placement::{
    HEADER_BAND_HEIGHT, PANEL_TOP, POPUP_MAX_WIDTH, header_position, panel_position,
};
pub use position::{Axis, BoxDisplay, BoxStyle, Inset, PanelPosition, PositionError, resolve};
