use crate::constants::*;

/// Timings and thresholds the page controller is built from.
///
/// `Default` mirrors `constants.rs`; the markup contract (ids, classes) stays
/// in constants since the stylesheet depends on those names.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub navbar_threshold: f64,
    pub parallax_speed: f64,
    pub fade_in_threshold: f64,
    pub fade_in_root_margin: String,
    pub entrance_threshold: f64,
    pub entrance_root_margin: String,
    pub subtitle_type_speed_ms: u32,
    pub subtitle_start_delay_ms: u32,
    pub floating_count: usize,
    pub cursor_offset_px: f64,
    pub scroll_debounce_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            navbar_threshold: NAVBAR_SCROLL_THRESHOLD,
            parallax_speed: PARALLAX_SPEED,
            fade_in_threshold: FADE_IN_THRESHOLD,
            fade_in_root_margin: FADE_IN_ROOT_MARGIN.to_string(),
            entrance_threshold: ENTRANCE_THRESHOLD,
            entrance_root_margin: ENTRANCE_ROOT_MARGIN.to_string(),
            subtitle_type_speed_ms: SUBTITLE_TYPE_SPEED_MS,
            subtitle_start_delay_ms: SUBTITLE_START_DELAY_MS,
            floating_count: FLOATING_ELEMENT_COUNT,
            cursor_offset_px: CURSOR_OFFSET_PX,
            scroll_debounce_ms: SCROLL_DEBOUNCE_MS,
        }
    }
}

impl PageConfig {
    /// Observer thresholds are fractions of the element's area.
    pub fn is_valid(&self) -> bool {
        let fraction = 0.0..=1.0;
        fraction.contains(&self.fade_in_threshold)
            && fraction.contains(&self.entrance_threshold)
            && self.navbar_threshold >= 0.0
            && self.parallax_speed.is_finite()
    }
}
