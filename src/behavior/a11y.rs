use crate::constants::KEYBOARD_NAV_KEY;

/// Stylesheet injected when the user asks the OS for reduced motion.
pub const REDUCED_MOTION_CSS: &str = "
*, *::before, *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
    scroll-behavior: auto !important;
}
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerChange {
    Add,
    Remove,
}

/// Keyboard-navigation marker change for a key press, if any.
#[inline]
pub fn keyboard_nav_on_key(key: &str) -> Option<MarkerChange> {
    (key == KEYBOARD_NAV_KEY).then_some(MarkerChange::Add)
}

/// Any mouse press leaves keyboard-navigation mode.
#[inline]
pub fn keyboard_nav_on_mouse_down() -> MarkerChange {
    MarkerChange::Remove
}

/// Style override to install at startup. Evaluated once; later preference
/// changes are not observed.
#[inline]
pub fn reduced_motion_override(prefers_reduced_motion: bool) -> Option<&'static str> {
    prefers_reduced_motion.then_some(REDUCED_MOTION_CSS)
}
