//! End-to-end path-mode flow: initial load, split, focus, back navigation.
//!
//! Simulates the embedding: requests returned by the router are applied to a
//! toy layout store, and every store change is reconciled back through the
//! router, mirroring the subscribe-and-run wiring of a real host.

use panekit_core::{LayoutView, Room, RoomId, RoomSide, StoreRequest};
use panekit_router::{HistoryOp, InitialUrl, NavSnapshot, NavigationRouter, RouterMode};
use pretty_assertions::assert_eq;

fn id(raw: &str) -> RoomId {
    RoomId::parse(raw).unwrap()
}

/// Minimal layout store: applies join requests the way the real store does
/// for this flow (first room left, second right with a split width).
#[derive(Default)]
struct ToyStore {
    view: LayoutView,
}

impl ToyStore {
    fn apply(&mut self, request: &StoreRequest) {
        match request {
            StoreRequest::Join { id, side, .. } => {
                if let Some(room) = self.view.rooms.iter_mut().find(|room| &room.id == id) {
                    // An explicit side re-docks an already-open room.
                    if side.is_some() {
                        room.side = *side;
                    }
                } else {
                    let side = side.or({
                        if self.view.rooms.is_empty() {
                            Some(RoomSide::Left)
                        } else {
                            Some(RoomSide::Right)
                        }
                    });
                    let mut room = Room::new(id.clone(), "chat", id.as_str());
                    room.side = side;
                    self.view.rooms.push(room);
                }
                match self.view.rooms.iter().find(|room| &room.id == id).map(|r| r.side) {
                    Some(Some(RoomSide::Right)) => {
                        self.view.right = Some(id.clone());
                        self.view.left_room_width = 620;
                    }
                    _ => self.view.left = id.clone(),
                }
                self.view.focused = id.clone();
            }
            StoreRequest::Leave { id } => {
                self.view.rooms.retain(|room| &room.id != id);
                if self.view.right.as_ref() == Some(id) {
                    self.view.right = None;
                    self.view.left_room_width = 0;
                }
                self.view.focused = self.view.left.clone();
            }
            StoreRequest::FocusLeft => self.view.focused = self.view.left.clone(),
            StoreRequest::FocusRight => {
                if let Some(right) = &self.view.right {
                    self.view.focused = right.clone();
                }
            }
            StoreRequest::OpenPopup { id } => self.view.popups.push(id.clone()),
            StoreRequest::ClosePopup => {
                self.view.popups.pop();
            }
        }
    }
}

#[test]
fn loading_lobby_then_splitting_then_focusing() {
    let mut store = ToyStore::default();
    let (mut router, initial) = NavigationRouter::new(&InitialUrl::new("/lobby", ""));
    assert_eq!(router.mode(), RouterMode::Path);

    // Initial join lands in the store; subscribe-and-run reconciles once.
    for request in &initial {
        store.apply(request);
    }
    assert_eq!(store.view.focused, id("lobby"));
    let op = router.layout_changed(&store.view);
    assert_eq!(
        op,
        Some(HistoryOp::Replace {
            path: "/lobby".into(),
            title: "lobby".into(),
            state: "lobby".into(),
        })
    );

    // Joining teambuilder activates split mode: shape changed, so the
    // history entry is rewritten rather than pushed.
    store.apply(&StoreRequest::join(id("teambuilder")));
    let op = router.layout_changed(&store.view);
    assert_eq!(
        op,
        Some(HistoryOp::Replace {
            path: "/teambuilder".into(),
            title: "teambuilder".into(),
            state: "lobby..teambuilder".into(),
        })
    );

    // Focusing back and forth inside the same shape is a real navigation:
    // each focus change pushes, preserving the split snapshot.
    store.apply(&StoreRequest::FocusLeft);
    let op = router.layout_changed(&store.view);
    let Some(HistoryOp::Push { path, state, .. }) = op else {
        panic!("expected a push, got {op:?}");
    };
    assert_eq!(path, "/lobby");
    assert_eq!(
        NavSnapshot::decode(&state),
        Some(NavSnapshot::split(id("lobby"), id("teambuilder")))
    );

    // Reconciling the unchanged layout again issues nothing.
    assert_eq!(router.layout_changed(&store.view), None);
}

#[test]
fn back_navigation_restores_the_split_pair() {
    let mut store = ToyStore::default();
    let (router, initial) = NavigationRouter::new(&InitialUrl::new("/teambuilder", ""));
    for request in &initial {
        store.apply(request);
    }

    // The user pressed back to an entry whose state was a split snapshot.
    let requests = router.history_popped("/lobby", Some("lobby..teambuilder"));
    for request in &requests {
        store.apply(request);
    }

    assert_eq!(store.view.left, id("lobby"));
    assert_eq!(store.view.right, Some(id("teambuilder")));
    assert_eq!(store.view.focused, id("lobby"));
}

#[test]
fn malformed_popstate_path_is_a_silent_no_op() {
    let (router, _) = NavigationRouter::new(&InitialUrl::new("/lobby", ""));
    assert!(router.history_popped("/Wat?!", None).is_empty());
}
