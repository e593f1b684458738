use crate::constants::{
    CARD_HOVER_TRANSFORM, CARD_REST_TRANSFORM, CURSOR_PRESSED_TRANSFORM,
    CURSOR_RELEASED_TRANSFORM,
};

/// Size and placement of a ripple inside its button, in CSS pixels relative to
/// the button's offset origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    pub diameter: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// Centre a circle covering the button's larger side on the click point.
    pub fn at_click(
        client_x: f64,
        client_y: f64,
        offset_left: f64,
        offset_top: f64,
        width: f64,
        height: f64,
    ) -> Self {
        let diameter = width.max(height);
        let radius = diameter / 2.0;
        Self {
            diameter,
            left: client_x - offset_left - radius,
            top: client_y - offset_top - radius,
        }
    }

    /// `(property, value)` pairs for the ripple's inline style.
    pub fn style_properties(&self) -> [(&'static str, String); 4] {
        [
            ("width", px(self.diameter)),
            ("height", px(self.diameter)),
            ("left", px(self.left)),
            ("top", px(self.top)),
        ]
    }
}

/// How many `.ripple` children to remove before a new ripple is appended.
/// Every existing one goes, so a button never holds more than one.
#[inline]
pub fn ripples_to_remove(existing: usize) -> usize {
    existing
}

#[inline]
pub fn px(v: f64) -> String {
    format!("{}px", v)
}

#[inline]
pub fn card_transform(hovered: bool) -> &'static str {
    if hovered {
        CARD_HOVER_TRANSFORM
    } else {
        CARD_REST_TRANSFORM
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CursorPosition {
    pub x: f64,
    pub y: f64,
}

impl CursorPosition {
    /// Top-left of the indicator so that it sits `offset` px up-left of the pointer.
    #[inline]
    pub fn from_pointer(client_x: f64, client_y: f64, offset: f64) -> Self {
        Self {
            x: client_x - offset,
            y: client_y - offset,
        }
    }
}

#[inline]
pub fn cursor_transform(pressed: bool) -> &'static str {
    if pressed {
        CURSOR_PRESSED_TRANSFORM
    } else {
        CURSOR_RELEASED_TRANSFORM
    }
}

#[inline]
pub fn cursor_opacity(inside_viewport: bool) -> &'static str {
    if inside_viewport {
        "1"
    } else {
        "0"
    }
}
