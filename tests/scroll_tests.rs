// Host-side tests for scroll-driven effects.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod behavior {
    pub mod scroll {
        include!("../src/behavior/scroll.rs");
    }
}

use behavior::scroll::*;
use constants::*;

#[test]
fn navbar_is_transparent_up_to_threshold() {
    assert_eq!(navbar_background(0.0, NAVBAR_SCROLL_THRESHOLD), NAVBAR_BG_TOP);
    assert_eq!(navbar_background(99.5, NAVBAR_SCROLL_THRESHOLD), NAVBAR_BG_TOP);
    assert_eq!(navbar_background(100.0, NAVBAR_SCROLL_THRESHOLD), NAVBAR_BG_TOP);
}

#[test]
fn navbar_is_opaque_past_threshold() {
    assert_eq!(navbar_background(101.0, NAVBAR_SCROLL_THRESHOLD), NAVBAR_BG_SCROLLED);
    assert_eq!(navbar_background(100.01, NAVBAR_SCROLL_THRESHOLD), NAVBAR_BG_SCROLLED);
    assert_eq!(navbar_background(5000.0, NAVBAR_SCROLL_THRESHOLD), NAVBAR_BG_SCROLLED);
}

#[test]
fn navbar_has_no_hysteresis() {
    // Scrolling back up crosses the same boundary.
    let down = navbar_background(150.0, NAVBAR_SCROLL_THRESHOLD);
    let up = navbar_background(100.0, NAVBAR_SCROLL_THRESHOLD);
    assert_eq!(down, NAVBAR_BG_SCROLLED);
    assert_eq!(up, NAVBAR_BG_TOP);
}

#[test]
fn parallax_moves_at_half_speed() {
    assert_eq!(parallax_offset(0.0, PARALLAX_SPEED), 0.0);
    assert_eq!(parallax_offset(200.0, PARALLAX_SPEED), 100.0);
    assert_eq!(parallax_offset(25.0, PARALLAX_SPEED), 12.5);
}

#[test]
fn parallax_transform_formats_like_css() {
    assert_eq!(parallax_transform(100.0, PARALLAX_SPEED), "translateY(50px)");
    assert_eq!(parallax_transform(25.0, PARALLAX_SPEED), "translateY(12.5px)");
    assert_eq!(parallax_transform(0.0, PARALLAX_SPEED), "translateY(0px)");
}

#[test]
fn parallax_is_unbounded() {
    assert_eq!(parallax_transform(1_000_000.0, PARALLAX_SPEED), "translateY(500000px)");
}

#[test]
fn visibility_reveals_once_under_repeated_toggles() {
    let mut set = VisibilitySet::new();
    let mut reveals = 0;
    for intersecting in [false, true, false, true, true, false, true] {
        if set.record("card", intersecting) {
            reveals += 1;
        }
    }
    assert_eq!(reveals, 1);
    assert!(set.is_visible(&"card"));
}

#[test]
fn visibility_ignores_non_intersecting_reports() {
    let mut set = VisibilitySet::new();
    assert!(!set.record(1usize, false));
    assert!(!set.record(1usize, false));
    assert!(!set.is_visible(&1));
    assert!(set.is_empty());
}

#[test]
fn visibility_tracks_elements_independently() {
    let mut set = VisibilitySet::new();
    assert!(set.record(0usize, true));
    assert!(set.record(1usize, true));
    assert!(!set.record(0usize, true));
    assert!(!set.record(0usize, false));
    assert_eq!(set.len(), 2);
    assert!(set.is_visible(&0));
}
