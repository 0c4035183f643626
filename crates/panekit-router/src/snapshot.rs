#![forbid(unsafe_code)]

//! Serialized navigation state for history entries.
//!
//! A [`NavSnapshot`] is the only state round-tripped through the browser
//! history mechanism: a single room id, or `left..right` when split view is
//! active. Room ids cannot contain `.`, so the two-character separator is
//! unambiguous and encode/decode are inverses for all valid snapshots.

use std::fmt;

use panekit_core::{LayoutView, RoomId};
use serde::{Deserialize, Serialize};

/// Separator between the left and right room ids in a split snapshot.
pub const SNAPSHOT_SEPARATOR: &str = "..";

/// Navigation state associated with one history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSnapshot {
    pub left: RoomId,
    pub right: Option<RoomId>,
}

impl NavSnapshot {
    /// Snapshot of a single visible room.
    #[must_use]
    pub fn single(id: RoomId) -> Self {
        Self {
            left: id,
            right: None,
        }
    }

    /// Snapshot of an active split view.
    #[must_use]
    pub fn split(left: RoomId, right: RoomId) -> Self {
        Self {
            left,
            right: Some(right),
        }
    }

    /// The snapshot describing a layout view.
    ///
    /// Split mode encodes the left/right pair; single-panel mode encodes the
    /// focused room. A split view with no right room (the store never
    /// produces one, but the type allows it) falls back to the single form.
    #[must_use]
    pub fn of_view(view: &LayoutView) -> Self {
        match (&view.right, view.is_split()) {
            (Some(right), true) => Self::split(view.left.clone(), right.clone()),
            _ => Self::single(view.focused.clone()),
        }
    }

    /// Serialize to the history-state string.
    #[must_use]
    pub fn encode(&self) -> String {
        match &self.right {
            Some(right) => format!("{}{SNAPSHOT_SEPARATOR}{}", self.left, right),
            None => self.left.to_string(),
        }
    }

    /// Parse a history-state string.
    ///
    /// Returns `None` when either side fails the room-id grammar. An empty
    /// right side (`"lobby.."`) decodes as a single-room snapshot.
    #[must_use]
    pub fn decode(raw: &str) -> Option<Self> {
        match raw.split_once(SNAPSHOT_SEPARATOR) {
            Some((left, right)) => {
                let left = RoomId::parse(left).ok()?;
                if right.is_empty() {
                    return Some(Self::single(left));
                }
                let right = RoomId::parse(right).ok()?;
                Some(Self::split(left, right))
            }
            None => RoomId::parse(raw).ok().map(Self::single),
        }
    }

    /// Whether this snapshot describes a split view.
    #[must_use]
    pub fn is_split(&self) -> bool {
        self.right.is_some()
    }
}

impl fmt::Display for NavSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
