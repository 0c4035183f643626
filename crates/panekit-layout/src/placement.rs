#![forbid(unsafe_code)]

//! Standard panel placements for the shell frame.
//!
//! The frame is a fixed-height header band with content panels below it.
//! Single-panel mode gives the focused room the full body; split mode divides
//! the body at the left panel's pixel width.

use panekit_core::{LayoutView, RoomId};

use crate::position::PanelPosition;

/// Height of the header band, in pixels.
pub const HEADER_BAND_HEIGHT: i32 = 50;

/// Top inset for content panels (clears the header band).
pub const PANEL_TOP: i32 = 56;

/// Style hint for popup panels: maximum width in pixels.
pub const POPUP_MAX_WIDTH: i32 = 480;

/// Placement of the header band.
#[must_use]
pub const fn header_position() -> PanelPosition {
    PanelPosition::new().bottom(HEADER_BAND_HEIGHT)
}

/// Placement of a non-popup room, or `None` when it is not on screen.
///
/// Single-panel mode: only the focused room is placed. Split mode: the left
/// room takes everything left of the split boundary, the right room
/// everything right of it.
#[must_use]
pub fn panel_position(view: &LayoutView, id: &RoomId) -> Option<PanelPosition> {
    if !view.is_split() {
        return (&view.focused == id).then(|| PanelPosition::new().top(PANEL_TOP));
    }
    if &view.left == id {
        return Some(PanelPosition::new().top(PANEL_TOP).right(view.left_room_width));
    }
    if view.right.as_ref() == Some(id) {
        return Some(PanelPosition::new().top(PANEL_TOP).left(view.left_room_width));
    }
    None
}
