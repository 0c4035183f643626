//! Delegated capture over realistic ancestor chains.

use panekit_core::{AnchorOrigin, RoomId, StoreRequest};
use panekit_input::{ClickContext, ElementRef, InputDispatcher};
use panekit_router::ServerContext;
use pretty_assertions::assert_eq;

fn id(raw: &str) -> RoomId {
    RoomId::parse(raw).unwrap()
}

#[test]
fn header_tab_click_walks_up_to_the_anchor() {
    // Click lands on the <span> inside the tab's anchor inside the tab list.
    let dispatcher = InputDispatcher::new(ServerContext::new("showdown", "play.pokemonshowdown.com"));
    let ctx = ClickContext::new(vec![
        ElementRef::Other,                            // span
        ElementRef::anchor("", "/battle-gen9ou-777"), // a.roomtab
        ElementRef::Other,                            // li
        ElementRef::Other,                            // ul
    ]);
    let outcome = dispatcher.dispatch_click(&ctx);
    assert_eq!(
        outcome.requests,
        vec![StoreRequest::Join {
            id: id("battle-gen9ou-777"),
            side: None,
            origin: Some(AnchorOrigin(1)),
        }]
    );
    assert!(outcome.consumed);
}

#[test]
fn close_button_inside_tab_wins_over_outer_anchor() {
    let dispatcher = InputDispatcher::new(ServerContext::new("showdown", "play.pokemonshowdown.com"));
    let ctx = ClickContext::new(vec![
        ElementRef::Other, // the icon inside the close button
        ElementRef::button("closeRoom", "lobby"),
        ElementRef::anchor("", "/lobby"),
    ]);
    let outcome = dispatcher.dispatch_click(&ctx);
    assert_eq!(outcome.requests, vec![StoreRequest::Leave { id: id("lobby") }]);
}

#[test]
fn self_hosted_deployment_matches_page_host_only() {
    let dispatcher = InputDispatcher::new(ServerContext::new("local", "client.example.org"));

    let same_host = ClickContext::new(vec![ElementRef::anchor("client.example.org", "/lobby")]);
    assert!(dispatcher.dispatch_click(&same_host).consumed);

    // First-party production hosts mean nothing off production.
    let production_host =
        ClickContext::new(vec![ElementRef::anchor("play.pokemonshowdown.com", "/lobby")]);
    assert!(!dispatcher.dispatch_click(&production_host).consumed);
}

#[test]
fn reserved_page_link_reaches_the_browser() {
    let dispatcher = InputDispatcher::new(ServerContext::new("showdown", "play.pokemonshowdown.com"));
    let ctx = ClickContext::new(vec![
        ElementRef::Other,
        ElementRef::anchor("", "/privacy"),
        ElementRef::Other,
    ]);
    let outcome = dispatcher.dispatch_click(&ctx);
    assert!(outcome.requests.is_empty());
    assert!(!outcome.consumed);
}
