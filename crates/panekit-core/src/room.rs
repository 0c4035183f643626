#![forbid(unsafe_code)]

//! Room and layout snapshot model.
//!
//! These are plain-data views of state owned by the external layout store.
//! The shell reads them and issues [`crate::StoreRequest`] commands; it never
//! mutates them. A [`LayoutView`] is a consistent post-mutation snapshot:
//! within one event tick every consumer observes the same view.

use serde::{Deserialize, Serialize};

use crate::roomid::RoomId;

/// Which panel region a room is docked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomSide {
    Left,
    Right,
    Popup,
}

/// Attention level a room is requesting in the tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyState {
    /// No pending notification.
    #[default]
    Quiet,
    /// Low-priority activity (highlight without urgency).
    Subtle,
    /// Urgent notification.
    Urgent,
}

/// Read-only view of one room.
///
/// Owned by the layout store; the shell reads `id`, `room_type`, `title`,
/// and `side` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    /// Tag resolved against the room-type registry.
    pub room_type: String,
    pub title: String,
    /// `None` for rooms not currently docked anywhere.
    pub side: Option<RoomSide>,
    pub notify: NotifyState,
}

impl Room {
    /// Convenience constructor for a quiet, undocked room.
    #[must_use]
    pub fn new(id: RoomId, room_type: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            room_type: room_type.into(),
            title: title.into(),
            side: None,
            notify: NotifyState::Quiet,
        }
    }

    #[must_use]
    pub fn with_side(mut self, side: RoomSide) -> Self {
        self.side = Some(side);
        self
    }

    #[must_use]
    pub fn is_popup(&self) -> bool {
        self.side == Some(RoomSide::Popup)
    }
}

/// Snapshot of the layout store's current state.
///
/// `left_room_width == 0` means single-panel mode; a positive width means
/// split mode with that many pixels allotted to the left panel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutView {
    /// Currently focused room.
    pub focused: RoomId,
    /// Room docked to the left panel.
    pub left: RoomId,
    /// Room docked to the right panel, when split mode is active.
    pub right: Option<RoomId>,
    /// Pixel width of the left panel; 0 disables split mode.
    pub left_room_width: i32,
    /// Tab order for left-side rooms.
    pub left_list: Vec<RoomId>,
    /// Tab order for right-side rooms.
    pub right_list: Vec<RoomId>,
    /// Popup stack, bottom first; the last entry is topmost.
    pub popups: Vec<RoomId>,
    /// All rooms known to the store, in store order.
    pub rooms: Vec<Room>,
}

impl LayoutView {
    /// Look up a room by id.
    #[must_use]
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| &room.id == id)
    }

    /// The focused room, when the store still knows it.
    #[must_use]
    pub fn focused_room(&self) -> Option<&Room> {
        self.room(&self.focused)
    }

    /// Whether split mode is active.
    #[must_use]
    pub fn is_split(&self) -> bool {
        self.left_room_width > 0
    }

    /// Whether a room currently occupies a visible panel.
    ///
    /// Single-panel mode shows only the focused room; split mode shows the
    /// left and right rooms.
    #[must_use]
    pub fn is_visible(&self, id: &RoomId) -> bool {
        if self.is_split() {
            &self.left == id || self.right.as_ref() == Some(id)
        } else {
            &self.focused == id
        }
    }
}
