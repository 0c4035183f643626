#![forbid(unsafe_code)]

//! Commands the shell issues toward the layout store.
//!
//! The shell never mutates the layout store directly. The router and
//! dispatcher return [`StoreRequest`] values and the embedding applies them
//! through the store's own request API. This keeps the
//! URL-changed/layout-changed synchronization loops structurally incapable
//! of re-entering each other: a handler's only output is a command list.

use crate::room::RoomSide;
use crate::roomid::RoomId;

/// Where on screen a join request originated.
///
/// Index into the ancestor chain the click dispatcher walked; the embedding
/// maps it back to a concrete element so the opened panel can animate from
/// its trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorOrigin(pub usize);

/// A single layout-store mutation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreRequest {
    /// Join (open or focus) a room, optionally docking it to a side.
    Join {
        id: RoomId,
        side: Option<RoomSide>,
        origin: Option<AnchorOrigin>,
    },
    /// Leave (close) a room.
    Leave { id: RoomId },
    /// Move focus to the left panel's room.
    FocusLeft,
    /// Move focus to the right panel's room.
    FocusRight,
    /// Open a room on top of the popup overlay stack.
    OpenPopup { id: RoomId },
    /// Dismiss the topmost popup.
    ClosePopup,
}

impl StoreRequest {
    /// Join a room with no side preference or animation origin.
    #[must_use]
    pub fn join(id: RoomId) -> Self {
        Self::Join {
            id,
            side: None,
            origin: None,
        }
    }

    /// Join a room docked to a specific side.
    #[must_use]
    pub fn join_side(id: RoomId, side: RoomSide) -> Self {
        Self::Join {
            id,
            side: Some(side),
            origin: None,
        }
    }

    /// Open a room as a popup.
    #[must_use]
    pub fn open_popup(id: RoomId) -> Self {
        Self::OpenPopup { id }
    }
}
