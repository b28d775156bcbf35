use crate::config::{REVEAL_OFFSET_PX, REVEAL_TRANSITION};

pub const REVEAL_SELECTOR: &str = ".section-title, .section-subtitle";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Waiting,
    /// Start style applied, confirmation timer pending.
    Armed,
    Shown,
    /// Became hidden before the confirmation fired; stays at the start style.
    Held,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStep {
    /// Apply the start style, stop observing, arm the confirmation timer.
    Prepare,
    Show,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: String,
    pub transition: Option<&'static str>,
}

impl RevealPhase {
    pub fn intersect(&mut self, is_intersecting: bool, hidden: bool) -> Option<RevealStep> {
        if !is_intersecting || hidden || *self != RevealPhase::Waiting {
            return None;
        }
        *self = RevealPhase::Armed;
        Some(RevealStep::Prepare)
    }

    pub fn confirm(&mut self, hidden: bool) -> Option<RevealStep> {
        if *self != RevealPhase::Armed {
            return None;
        }
        if hidden {
            *self = RevealPhase::Held;
            return None;
        }
        *self = RevealPhase::Shown;
        Some(RevealStep::Show)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, RevealPhase::Shown | RevealPhase::Held)
    }
}

pub fn start_style() -> RevealStyle {
    RevealStyle {
        opacity: "0",
        transform: translate_y(REVEAL_OFFSET_PX),
        transition: Some(REVEAL_TRANSITION),
    }
}

pub fn shown_style() -> RevealStyle {
    RevealStyle {
        opacity: "1",
        transform: translate_y(0.0),
        transition: None,
    }
}

pub fn translate_y(px: f32) -> String {
    if px == 0.0 {
        "translateY(0)".to_string()
    } else {
        format!("translateY({px}px)")
    }
}
