#![forbid(unsafe_code)]

//! Link classification: which anchors count as in-app navigation.
//!
//! An anchor is navigable when its host is first-party for the current
//! deployment, its path (minus the leading slash) is inside the room-id
//! grammar, and the path is not one of the reserved marketing/support pages
//! that must fall through to normal browser navigation.

use panekit_core::RoomId;

/// Server id of the production multi-tenant deployment.
pub const PRODUCTION_SERVER_ID: &str = "showdown";

/// Hosts the production deployment treats as first-party.
pub const FIRST_PARTY_HOSTS: &[&str] = &["play.pokemonshowdown.com", "psim.us"];

/// Deployment context links are classified against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerContext {
    /// Identifier of the server this client is connected to.
    pub server_id: String,
    /// Host of the page the client is served from.
    pub page_host: String,
}

impl ServerContext {
    #[must_use]
    pub fn new(server_id: impl Into<String>, page_host: impl Into<String>) -> Self {
        Self {
            server_id: server_id.into(),
            page_host: page_host.into(),
        }
    }

    /// Whether this is the production multi-tenant deployment.
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.server_id == PRODUCTION_SERVER_ID
    }
}

/// The parts of an anchor element the classifier reads.
///
/// `host` is empty for same-document relative links; `pathname` carries its
/// leading slash, as the DOM reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub host: String,
    pub pathname: String,
}

impl LinkTarget {
    #[must_use]
    pub fn new(host: impl Into<String>, pathname: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            pathname: pathname.into(),
        }
    }
}

/// Classify an anchor: `Some(room id)` when it should be captured as in-app
/// navigation, `None` when it must fall through to the browser.
#[must_use]
pub fn classify(link: &LinkTarget, ctx: &ServerContext) -> Option<RoomId> {
    if ctx.is_production() {
        if !link.host.is_empty() && !FIRST_PARTY_HOSTS.contains(&link.host.as_str()) {
            return None;
        }
    } else if link.host != ctx.page_host {
        return None;
    }

    let path = link.pathname.strip_prefix('/').unwrap_or(&link.pathname);
    let id = RoomId::parse(path).ok()?;
    if is_reserved_path(id.as_str()) {
        return None;
    }
    Some(id)
}

/// Reserved marketing/support paths that are never captured as rooms.
#[must_use]
pub fn is_reserved_path(path: &str) -> bool {
    matches!(
        path,
        "appeal"
            | "appeals"
            | "roomsuggestion"
            | "roomsuggestions"
            | "roomssuggestion"
            | "roomssuggestions"
            | "suggestion"
            | "suggestions"
            | "adminrequest"
            | "adminrequests"
            | "bug"
            | "bugs"
            | "bugreport"
            | "bugreports"
            | "rule"
            | "rules"
            | "faq"
            | "credit"
            | "credits"
            | "news"
            | "privacy"
            | "contact"
            | "dex"
            | "insecure"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn production() -> ServerContext {
        ServerContext::new("showdown", "play.pokemonshowdown.com")
    }

    fn third_party() -> ServerContext {
        ServerContext::new("azure", "example.psim.test")
    }

    #[test]
    fn relative_link_is_navigable_in_production() {
        let id = classify(&LinkTarget::new("", "/battle-gen9ou-12345"), &production());
        assert_eq!(id, Some(RoomId::parse("battle-gen9ou-12345").unwrap()));
    }

    #[test]
    fn first_party_hosts_are_allowed_in_production() {
        for host in FIRST_PARTY_HOSTS {
            assert!(classify(&LinkTarget::new(*host, "/lobby"), &production()).is_some());
        }
    }

    #[test]
    fn cross_origin_is_rejected_in_production() {
        assert_eq!(
            classify(&LinkTarget::new("evil.example.com", "/lobby"), &production()),
            None
        );
    }

    #[test]
    fn other_deployments_require_exact_page_host() {
        let ctx = third_party();
        assert!(classify(&LinkTarget::new("example.psim.test", "/lobby"), &ctx).is_some());
        assert_eq!(classify(&LinkTarget::new("", "/lobby"), &ctx), None);
        assert_eq!(
            classify(&LinkTarget::new("play.pokemonshowdown.com", "/lobby"), &ctx),
            None
        );
    }

    #[test]
    fn out_of_grammar_path_is_not_navigable() {
        assert_eq!(classify(&LinkTarget::new("", "/Lobby"), &production()), None);
        assert_eq!(
            classify(&LinkTarget::new("", "/view/replay"), &production()),
            None
        );
    }

    #[test]
    fn reserved_paths_fall_through() {
        for path in ["rules", "faq", "bugs", "privacy", "contact", "roomssuggestions"] {
            assert_eq!(
                classify(&LinkTarget::new("", &format!("/{path}")), &production()),
                None,
                "{path} should be reserved"
            );
        }
    }

    #[test]
    fn reserved_set_covers_singular_and_plural() {
        assert!(is_reserved_path("appeal"));
        assert!(is_reserved_path("appeals"));
        assert!(is_reserved_path("bugreport"));
        assert!(is_reserved_path("bugreports"));
        assert!(!is_reserved_path("lobby"));
        assert!(!is_reserved_path("bugged-room"));
    }

    #[test]
    fn empty_path_is_the_home_room() {
        let id = classify(&LinkTarget::new("", "/"), &production());
        assert_eq!(id, Some(RoomId::home()));
    }
}
