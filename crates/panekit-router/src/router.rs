#![forbid(unsafe_code)]

//! The navigation router state machine.
//!
//! One [`NavigationRouter`] exists for the application's lifetime. Its mode
//! is chosen once from the initial URL shape and never re-evaluated:
//!
//! - **Path mode** when the initial path (minus the leading slash) is a
//!   non-empty room id. Layout changes are mirrored into history entries;
//!   `popstate` events are decoded back into join requests.
//! - **Hash mode** when the path instead looks like a plain HTML document.
//!   The focused room id is mirrored into the URL hash; `hashchange` events
//!   are decoded into join requests. An invalid initial hash disables
//!   routing entirely (nothing is worth mirroring against a URL the app
//!   did not produce).
//! - **Inert** otherwise: no commands, ever.
//!
//! # Invariants
//!
//! 1. The router only ever returns commands; it performs no I/O, so a
//!    history write it requests cannot synchronously re-enter it.
//! 2. Reconciling a layout state whose focused id and snapshot both match
//!    the last reconciliation returns no command (no redundant entries).
//! 3. Candidate ids from paths, hashes, and history state are
//!    grammar-checked before any join request is issued; failures are
//!    silent no-ops.

use panekit_core::{LayoutView, RoomId, RoomSide, StoreRequest};

use crate::snapshot::NavSnapshot;

/// Routing mode, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterMode {
    /// URL path carries the room id; history entries carry snapshots.
    Path,
    /// URL hash carries the room id; no push/replace distinction exists.
    Hash,
    /// No subscriptions, no listeners, no commands.
    Inert,
}

/// The initial URL shape the router is constructed from.
///
/// `pathname` carries its leading slash and `hash` its leading `#`, as the
/// browser reports them; both may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InitialUrl {
    pub pathname: String,
    pub hash: String,
}

impl InitialUrl {
    #[must_use]
    pub fn new(pathname: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            hash: hash.into(),
        }
    }
}

/// A browser-history mutation the embedding must apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryOp {
    /// Add a history entry (a discrete navigation the user can undo).
    Push {
        path: String,
        title: String,
        state: String,
    },
    /// Rewrite the current entry in place (shape changed, no new stop).
    Replace {
        path: String,
        title: String,
        state: String,
    },
    /// Assign the location hash (`""` clears it).
    SetHash { hash: String },
}

/// Finite-state router synchronizing browser navigation with the layout.
#[derive(Debug)]
pub struct NavigationRouter {
    mode: RouterMode,
    /// Focused room id at the last reconciliation.
    last_roomid: RoomId,
    /// Encoded snapshot at the last reconciliation.
    last_snapshot: String,
}

impl NavigationRouter {
    /// Build the router from the initial URL and return it together with the
    /// store requests the chosen mode wants applied immediately.
    ///
    /// The embedding applies the requests, then wires the router into the
    /// layout store's subscribe-and-run mechanism (so [`Self::layout_changed`]
    /// runs once right away) and into `popstate`/`hashchange`.
    pub fn new(url: &InitialUrl) -> (Self, Vec<StoreRequest>) {
        let (mode, initial) = Self::select_mode(url);
        tracing::debug!(?mode, pathname = %url.pathname, "navigation router constructed");
        let router = Self {
            mode,
            last_roomid: RoomId::home(),
            last_snapshot: String::new(),
        };
        let requests = initial.map(StoreRequest::join).into_iter().collect();
        (router, requests)
    }

    /// The mode fixed at construction.
    #[must_use]
    pub fn mode(&self) -> RouterMode {
        self.mode
    }

    fn select_mode(url: &InitialUrl) -> (RouterMode, Option<RoomId>) {
        let path = url.pathname.strip_prefix('/').unwrap_or(&url.pathname);
        if !path.is_empty() && RoomId::is_valid(path) {
            let id = RoomId::parse(path).ok();
            return (RouterMode::Path, id);
        }
        if url.pathname.ends_with(".html") {
            let hash = url.hash.strip_prefix('#').unwrap_or(&url.hash);
            if hash.is_empty() {
                return (RouterMode::Hash, None);
            }
            return match RoomId::parse(hash) {
                Ok(id) => (RouterMode::Hash, Some(id)),
                // A present-but-invalid hash disables hash routing outright.
                Err(_) => (RouterMode::Inert, None),
            };
        }
        (RouterMode::Inert, None)
    }

    /// Reconcile a layout-store change into an optional history mutation.
    ///
    /// Path mode: no-op when nothing changed; push when only the focused id
    /// changed (same panel shape, a discrete navigation); replace when the
    /// shape itself changed. Hash mode: always a hash assignment. Inert:
    /// nothing.
    pub fn layout_changed(&mut self, view: &LayoutView) -> Option<HistoryOp> {
        match self.mode {
            RouterMode::Inert => None,
            RouterMode::Hash => {
                let id = &view.focused;
                let hash = if id.is_home() {
                    String::new()
                } else {
                    format!("#{id}")
                };
                tracing::trace!(roomid = %id, "mirroring focused room into hash");
                Some(HistoryOp::SetHash { hash })
            }
            RouterMode::Path => {
                let roomid = view.focused.clone();
                let snapshot = NavSnapshot::of_view(view).encode();
                if roomid == self.last_roomid && snapshot == self.last_snapshot {
                    return None;
                }
                let path = format!("/{roomid}");
                let title = view
                    .focused_room()
                    .map(|room| room.title.clone())
                    .unwrap_or_default();
                let op = if snapshot == self.last_snapshot {
                    tracing::debug!(path = %path, state = %snapshot, "push history entry");
                    HistoryOp::Push {
                        path,
                        title,
                        state: snapshot.clone(),
                    }
                } else {
                    tracing::debug!(path = %path, state = %snapshot, "replace history entry");
                    HistoryOp::Replace {
                        path,
                        title,
                        state: snapshot.clone(),
                    }
                };
                self.last_roomid = roomid;
                self.last_snapshot = snapshot;
                Some(op)
            }
        }
    }

    /// Handle a `popstate` event (path mode only).
    ///
    /// The associated state string, when present and decodable, re-joins the
    /// left/right pair into their sides first; the path id is joined last so
    /// it ends up focused. A malformed path contributes nothing.
    #[must_use]
    pub fn history_popped(&self, pathname: &str, state: Option<&str>) -> Vec<StoreRequest> {
        if self.mode != RouterMode::Path {
            return Vec::new();
        }
        let mut requests = Vec::new();
        if let Some(snapshot) = state.and_then(NavSnapshot::decode) {
            requests.push(StoreRequest::join_side(snapshot.left, RoomSide::Left));
            if let Some(right) = snapshot.right {
                requests.push(StoreRequest::join_side(right, RoomSide::Right));
            }
        }
        let path = pathname.strip_prefix('/').unwrap_or(pathname);
        if let Ok(id) = RoomId::parse(path) {
            tracing::debug!(roomid = %id, "popstate join");
            requests.push(StoreRequest::join(id));
        }
        requests
    }

    /// Handle a `hashchange` event (hash mode only).
    ///
    /// An empty hash joins the home room; an out-of-grammar hash is ignored.
    #[must_use]
    pub fn hash_changed(&self, hash: &str) -> Vec<StoreRequest> {
        if self.mode != RouterMode::Hash {
            return Vec::new();
        }
        let candidate = hash.strip_prefix('#').unwrap_or(hash);
        match RoomId::parse(candidate) {
            Ok(id) => {
                tracing::debug!(roomid = %id, "hashchange join");
                vec![StoreRequest::join(id)]
            }
            Err(_) => Vec::new(),
        }
    }
}
