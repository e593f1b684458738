use crate::constants::{NAVBAR_BG_SCROLLED, NAVBAR_BG_TOP};
use std::collections::HashSet;
use std::hash::Hash;

/// Navbar background for a scroll offset. Strictly above `threshold` is opaque.
#[inline]
pub fn navbar_background(scroll_y: f64, threshold: f64) -> &'static str {
    if scroll_y > threshold {
        NAVBAR_BG_SCROLLED
    } else {
        NAVBAR_BG_TOP
    }
}

#[inline]
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

#[inline]
pub fn parallax_transform(scroll_y: f64, speed: f64) -> String {
    format!("translateY({}px)", parallax_offset(scroll_y, speed))
}

/// Elements that have been revealed at least once.
///
/// Reveals are one-way: leaving the viewport does not remove membership, and
/// only the first intersecting report for a key yields `true`.
#[derive(Debug)]
pub struct VisibilitySet<K> {
    revealed: HashSet<K>,
}

impl<K: Eq + Hash> Default for VisibilitySet<K> {
    fn default() -> Self {
        Self {
            revealed: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> VisibilitySet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an intersection report; returns `true` when `key` becomes visible.
    pub fn record(&mut self, key: K, is_intersecting: bool) -> bool {
        is_intersecting && self.revealed.insert(key)
    }

    #[cfg(test)]
    pub fn is_visible(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}
