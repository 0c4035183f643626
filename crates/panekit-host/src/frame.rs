#![forbid(unsafe_code)]

//! Frame composition: layout snapshot → renderable placements.
//!
//! Composition is stateless. Every non-popup room gets a placement (hidden
//! rooms resolve to `display: none` so their panel state survives
//! off-screen); popups are composed separately, each wrapped in an overlay
//! entry, stacked in store order with the last entry topmost.
//!
//! # Failure Modes
//! A geometry range violation aborts composition (it signals an internal
//! inconsistency between layout state and placement logic, not user input).

use panekit_core::{LayoutView, Room};
use panekit_layout::{
    BoxStyle, POPUP_MAX_WIDTH, PositionError, header_position, panel_position, resolve,
};

use crate::registry::RoomTypeRegistry;

/// One non-popup room, placed.
#[derive(Debug)]
pub struct PanelPlacement<'a, R> {
    pub room: &'a Room,
    pub renderer: &'a R,
    pub style: BoxStyle,
}

/// One popup, wrapped in its overlay backdrop.
#[derive(Debug)]
pub struct PopupPlacement<'a, R> {
    pub room: &'a Room,
    pub renderer: &'a R,
    /// Style hint: popups are content-sized up to this width.
    pub max_width: i32,
}

/// The composed frame for one layout snapshot.
#[derive(Debug)]
pub struct Frame<'a, R> {
    pub header_style: BoxStyle,
    pub panels: Vec<PanelPlacement<'a, R>>,
    /// Overlay stack, bottom first; the last entry is topmost.
    pub popups: Vec<PopupPlacement<'a, R>>,
}

/// Compose the frame for a layout snapshot.
pub fn compose<'a, R>(
    view: &'a LayoutView,
    registry: &'a RoomTypeRegistry<R>,
) -> Result<Frame<'a, R>, PositionError> {
    let header_style = resolve(Some(&header_position()))?;

    let mut panels = Vec::new();
    for room in view.rooms.iter().filter(|room| !room.is_popup()) {
        let position = panel_position(view, &room.id);
        let style = resolve(position.as_ref())?;
        panels.push(PanelPlacement {
            room,
            renderer: registry.renderer_for(&room.room_type),
            style,
        });
    }

    let mut popups = Vec::new();
    for id in &view.popups {
        let Some(room) = view.room(id) else {
            tracing::debug!(roomid = %id, "popup id unknown to the store, skipped");
            continue;
        };
        popups.push(PopupPlacement {
            room,
            renderer: registry.renderer_for(&room.room_type),
            max_width: POPUP_MAX_WIDTH,
        });
    }

    Ok(Frame {
        header_style,
        panels,
        popups,
    })
}
