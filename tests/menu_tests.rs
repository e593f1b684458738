// Host-side tests for navigation menu state and in-page link handling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod behavior {
    pub mod menu {
        include!("../src/behavior/menu.rs");
    }
}

use behavior::menu::*;
use constants::{ICON_CLOSED_CLASS, ICON_OPEN_CLASS};

#[test]
fn menu_starts_closed_with_bars_icon() {
    let state = MenuState::default();
    assert!(!state.is_open());
    assert_eq!(state.icon_classes(), (ICON_CLOSED_CLASS, ICON_OPEN_CLASS));
}

#[test]
fn toggling_twice_restores_state_and_icon() {
    for open in [false, true] {
        let start = MenuState::from_open(open);
        let once = start.toggled();
        assert_ne!(once.is_open(), start.is_open());
        assert_ne!(once.icon_classes(), start.icon_classes());

        let twice = once.toggled();
        assert_eq!(twice, start);
        assert_eq!(twice.icon_classes(), start.icon_classes());
    }
}

#[test]
fn open_menu_shows_times_icon() {
    let (add, remove) = MenuState::from_open(true).icon_classes();
    assert_eq!(add, "fa-times");
    assert_eq!(remove, "fa-bars");
}

#[test]
fn closing_is_idempotent() {
    let open = MenuState::from_open(true);
    assert!(!open.closed().is_open());
    assert_eq!(open.closed().closed(), open.closed());
    assert_eq!(MenuState::default().closed(), MenuState::default());
}

#[test]
fn parse_fragment_extracts_id() {
    assert_eq!(parse_fragment("#about"), Some(Fragment::Id("about")));
    assert_eq!(parse_fragment("#contact-me"), Some(Fragment::Id("contact-me")));
}

#[test]
fn parse_fragment_bare_hash_is_empty() {
    assert_eq!(parse_fragment("#"), Some(Fragment::Empty));
}

#[test]
fn parse_fragment_ignores_other_links() {
    assert_eq!(parse_fragment("/projects"), None);
    assert_eq!(parse_fragment("https://example.com/#x"), None);
    assert_eq!(parse_fragment(""), None);
}

#[test]
fn anchor_with_existing_target_scrolls_and_closes_menu() {
    let outcome = anchor_click(true, true);
    assert!(outcome.prevent_default);
    assert!(outcome.scroll);
    assert!(outcome.close_menu);
}

#[test]
fn anchor_with_missing_target_only_prevents_default() {
    for menu_present in [false, true] {
        let outcome = anchor_click(false, menu_present);
        assert!(outcome.prevent_default);
        assert!(!outcome.scroll);
        assert!(!outcome.close_menu);
    }
}

#[test]
fn anchor_without_menu_markup_still_scrolls() {
    let outcome = anchor_click(true, false);
    assert!(outcome.scroll);
    assert!(!outcome.close_menu);
}
