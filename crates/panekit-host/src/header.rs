#![forbid(unsafe_code)]

//! Header tab strip view model.
//!
//! The header band shows one tab per docked room: the left-side list, then
//! the right-side list horizontally offset to start at the split boundary.
//! This module derives a plain view model; what the tabs look like is the
//! renderer's business.

use panekit_core::{LayoutView, NotifyState, Room, RoomId};

/// Inset of the tab strip inside the header; the right-side list starts at
/// `left_room_width - RIGHT_TABS_INSET`.
pub const RIGHT_TABS_INSET: i32 = 144;

/// Fixed userbar buttons, as `(name, value)` pairs for the button action
/// table.
pub const USERBAR_BUTTONS: &[(&str, &str)] = &[("joinRoom", "volume"), ("joinRoom", "options")];

/// Icon shown on a room tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabIcon {
    Home,
    Teambuilder,
    Ladder,
    Battles,
    /// The "add room" tab.
    Plus,
    Chat,
    /// Generic document tab.
    Document,
    /// A short text label (battle format, or a bracketed title tag).
    Text(String),
}

/// One tab in the strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabEntry {
    pub id: RoomId,
    pub icon: TabIcon,
    pub title: String,
    /// Whether the tab shows a close button.
    pub closable: bool,
    /// Whether the room currently occupies a visible panel.
    pub current: bool,
    pub notify: NotifyState,
    /// In-app href for the tab's anchor.
    pub href: String,
}

/// The derived header state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderModel {
    pub left_tabs: Vec<TabEntry>,
    pub right_tabs: Vec<TabEntry>,
    /// Horizontal offset of the right-side list, pixels from the strip start.
    pub right_tabs_offset: i32,
}

/// Derive the header model from a layout snapshot.
///
/// Room ids the store no longer knows contribute no tab.
#[must_use]
pub fn header_model(view: &LayoutView) -> HeaderModel {
    let tabs = |ids: &[RoomId]| {
        ids.iter()
            .filter_map(|id| view.room(id).map(|room| tab_entry(view, room)))
            .collect()
    };
    HeaderModel {
        left_tabs: tabs(&view.left_list),
        right_tabs: tabs(&view.right_list),
        right_tabs_offset: view.left_room_width - RIGHT_TABS_INSET,
    }
}

fn tab_entry(view: &LayoutView, room: &Room) -> TabEntry {
    let (icon, title) = icon_and_title(room);
    TabEntry {
        id: room.id.clone(),
        icon,
        title,
        closable: !(room.id.is_home() || room.id.as_str() == "rooms"),
        current: view.is_visible(&room.id),
        notify: room.notify,
        href: format!("/{}", room.id),
    }
}

fn icon_and_title(room: &Room) -> (TabIcon, String) {
    match room.room_type.as_str() {
        "" | "mainmenu" => (TabIcon::Home, room.title.clone()),
        "teambuilder" => (TabIcon::Teambuilder, room.title.clone()),
        "ladder" => (TabIcon::Ladder, room.title.clone()),
        "battles" => (TabIcon::Battles, room.title.clone()),
        // The "add room" tab is icon-only.
        "rooms" => (TabIcon::Plus, String::new()),
        "chat" => (TabIcon::Chat, room.title.clone()),
        "battle" => {
            let icon = match battle_format_label(&room.id) {
                Some(label) => TabIcon::Text(label),
                None => TabIcon::Document,
            };
            let title = if room.title.is_empty() {
                "(empty room)".to_owned()
            } else {
                room.title.clone()
            };
            (icon, title)
        }
        _ => bracketed_tag(&room.title)
            .map(|(tag, rest)| (TabIcon::Text(tag), rest))
            .unwrap_or_else(|| (TabIcon::Document, room.title.clone())),
    }
}

/// Format label for a battle tab, from the room id.
///
/// `battle-gen9ou-12345` carries its format as the chunk before the battle
/// number; single-chunk ids only label uploaded replays.
fn battle_format_label(id: &RoomId) -> Option<String> {
    let rest = id.as_str().strip_prefix("battle-").unwrap_or(id.as_str());
    let chunks: Vec<&str> = rest.split('-').collect();
    if chunks.len() <= 1 {
        return (chunks.first() == Some(&"uploadedreplay")).then(|| "Uploaded Replay".to_owned());
    }
    Some(chunks[chunks.len() - 2].to_owned())
}

/// Split a `[Tag] Title` string into its icon tag and remaining title.
fn bracketed_tag(title: &str) -> Option<(String, String)> {
    let rest = title.strip_prefix('[')?;
    let close = rest.find(']')?;
    if close == 0 {
        return None;
    }
    Some((rest[..close].to_owned(), rest[close + 1..].to_owned()))
}
