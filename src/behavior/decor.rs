use crate::constants::{
    CARD_ENTRANCE_CLASS, CARD_STAGGER_MAX_SECS, FLOATING_DELAY_MAX_SECS,
    FLOATING_DURATION_MIN_SECS, FLOATING_DURATION_SPAN_SECS, SKILL_ENTRANCE_CLASS,
    SKILL_STAGGER_MAX_SECS,
};
use rand::Rng;

/// Randomised placement and timing of one decorative floating element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingStyle {
    pub top_pct: f64,
    pub left_pct: f64,
    pub delay_secs: f64,
    pub duration_secs: f64,
}

impl FloatingStyle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            top_pct: rng.gen::<f64>() * 100.0,
            left_pct: rng.gen::<f64>() * 100.0,
            delay_secs: rng.gen::<f64>() * FLOATING_DELAY_MAX_SECS,
            duration_secs: rng.gen::<f64>() * FLOATING_DURATION_SPAN_SECS
                + FLOATING_DURATION_MIN_SECS,
        }
    }

    pub fn style_properties(&self) -> [(&'static str, String); 4] {
        [
            ("top", format!("{}%", self.top_pct)),
            ("left", format!("{}%", self.left_pct)),
            ("animation-delay", secs(self.delay_secs)),
            ("animation-duration", secs(self.duration_secs)),
        ]
    }
}

pub fn floating_styles<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<FloatingStyle> {
    (0..count).map(|_| FloatingStyle::random(rng)).collect()
}

/// Entrance animation applied when an element first scrolls into view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub marker: &'static str,
    pub max_delay_secs: f64,
}

/// Entrances for an element, by its class membership. Skill items come first
/// so a card that is also a skill item ends with the card's delay.
pub fn entrances_for(is_skill_item: bool, is_project_card: bool) -> Vec<Entrance> {
    let mut out = Vec::with_capacity(2);
    if is_skill_item {
        out.push(Entrance {
            marker: SKILL_ENTRANCE_CLASS,
            max_delay_secs: SKILL_STAGGER_MAX_SECS,
        });
    }
    if is_project_card {
        out.push(Entrance {
            marker: CARD_ENTRANCE_CLASS,
            max_delay_secs: CARD_STAGGER_MAX_SECS,
        });
    }
    out
}

#[inline]
pub fn stagger_delay<R: Rng + ?Sized>(rng: &mut R, max_secs: f64) -> f64 {
    rng.gen::<f64>() * max_secs
}

#[inline]
pub fn secs(v: f64) -> String {
    format!("{}s", v)
}
