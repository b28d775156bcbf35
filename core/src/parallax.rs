//! Pointer-driven hero motion.
//!
//! Two trackers with the same shape: a target set by input, a current value
//! eased toward it once per animation frame. [`BackdropTracker`] stops asking
//! for frames once it is released and back at rest; [`TiltTracker`] suspends
//! after a run of idle frames and wakes on the next input.

use crate::config::{
    BACKDROP_DEFAULT_SPEED, BACKDROP_FOLLOW_FACTOR, BACKDROP_GRADIENT_SIZE_PCT,
    BACKDROP_RETURN_FACTOR, BACKDROP_SETTLE_EPSILON, TILT_FOLLOW_FACTOR, TILT_GLOW_MAX,
    TILT_GLOW_PER_UNIT, TILT_IDLE_EPSILON, TILT_IDLE_FRAMES, TILT_MAX_DEG, TILT_SCALE_PER_UNIT,
};
use crate::theme::Theme;

pub const DEPTH_SPEEDS: &[(&str, f32)] = &[
    ("shape-1", 0.15),
    ("shape-2", 0.12),
    ("shape-3", 0.18),
    ("shape-4", 0.10),
    ("shape-5", 0.14),
    ("shape-6", 0.16),
    ("chart-1", 0.20),
    ("chart-2", 0.22),
    ("chart-3", 0.19),
];

const DEPTH_PREFIXES: &[&str] = &["shape-", "chart-"];

pub fn lerp(start: f32, end: f32, factor: f32) -> f32 {
    start + (end - start) * factor
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn center(&self) -> (f32, f32) {
        (self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// Offset from the center in [-1, 1] per axis; `None` for an empty rect.
    pub fn normalized_offset(&self, x: f32, y: f32) -> Option<(f32, f32)> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        let (cx, cy) = self.center();
        let nx = (x - cx) / (self.width * 0.5);
        let ny = (y - cy) / (self.height * 0.5);
        Some((nx.clamp(-1.0, 1.0), ny.clamp(-1.0, 1.0)))
    }

    pub fn percent_position(&self, x: f32, y: f32) -> Option<(f32, f32)> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some((
            (x - self.left) / self.width * 100.0,
            (y - self.top) / self.height * 100.0,
        ))
    }
}

/// First `shape-N`/`chart-N` class in a class list.
pub fn depth_class<'a>(classes: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    classes
        .into_iter()
        .find(|class| DEPTH_PREFIXES.iter().any(|prefix| class.starts_with(prefix)))
}

pub fn depth_speed(class: &str) -> f32 {
    DEPTH_SPEEDS
        .iter()
        .find(|(name, _)| *name == class)
        .map(|(_, speed)| *speed)
        .unwrap_or(BACKDROP_DEFAULT_SPEED)
}

pub fn translate(offset: (f32, f32), speed: f32) -> String {
    format!("translate({}px, {}px)", offset.0 * speed, offset.1 * speed)
}

pub const TRANSLATE_REST: &str = "translate(0px, 0px)";

pub fn water_gradient(percent_x: f32, percent_y: f32, theme: Theme) -> String {
    let (o1, o2, o3) = if theme.is_dark() {
        (0.15, 0.10, 0.08)
    } else {
        (0.10, 0.07, 0.05)
    };
    format!(
        "radial-gradient(circle {BACKDROP_GRADIENT_SIZE_PCT}% at {percent_x}% {percent_y}%, \
         rgba(102, 126, 234, {o1}) 0%, rgba(118, 75, 162, {o2}) 30%, \
         rgba(102, 126, 234, {o3}) 60%, transparent 100%)"
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackdropFrame {
    pub offset: (f32, f32),
    /// Loop is done; elements snap to rest and no further frame is requested.
    pub settled: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BackdropTracker {
    target: (f32, f32),
    current: (f32, f32),
    hovering: bool,
    running: bool,
}

impl BackdropTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> (f32, f32) {
        self.target
    }

    pub fn current(&self) -> (f32, f32) {
        self.current
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Aims at a normalized offset; returns true when the frame loop must be started.
    pub fn aim(&mut self, normalized: (f32, f32), scale_px: f32) -> bool {
        self.target = (normalized.0 * scale_px, normalized.1 * scale_px);
        self.hovering = true;
        self.wake()
    }

    /// Pointer left or touch ended; returns true when the frame loop must be started.
    pub fn release(&mut self) -> bool {
        self.hovering = false;
        self.target = (0.0, 0.0);
        self.wake()
    }

    fn wake(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    pub fn step(&mut self) -> BackdropFrame {
        let factor = if self.hovering {
            BACKDROP_FOLLOW_FACTOR
        } else {
            BACKDROP_RETURN_FACTOR
        };
        self.current = (
            lerp(self.current.0, self.target.0, factor),
            lerp(self.current.1, self.target.1, factor),
        );
        let at_rest = self.current.0.abs() <= BACKDROP_SETTLE_EPSILON
            && self.current.1.abs() <= BACKDROP_SETTLE_EPSILON;
        if !self.hovering && at_rest {
            self.current = (0.0, 0.0);
            self.running = false;
            return BackdropFrame {
                offset: self.current,
                settled: true,
            };
        }
        BackdropFrame {
            offset: self.current,
            settled: false,
        }
    }

    /// Forgets all motion; used when the effect is torn down mid-flight.
    pub fn halt(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltFrame {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub scale: f32,
    pub glow: f32,
}

impl TiltFrame {
    pub fn from_offset(x: f32, y: f32) -> Self {
        let distance = (x * x + y * y).sqrt();
        Self {
            rotate_x: y * TILT_MAX_DEG,
            rotate_y: x * -TILT_MAX_DEG,
            scale: 1.0 + distance * TILT_SCALE_PER_UNIT,
            glow: (distance * TILT_GLOW_PER_UNIT).min(TILT_GLOW_MAX),
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) scale({})",
            self.rotate_x, self.rotate_y, self.scale
        )
    }

    pub fn filter(&self) -> String {
        format!(
            "drop-shadow(0 0 {}px rgba(102, 126, 234, {}))",
            10.0 + self.glow * 20.0,
            0.3 + self.glow * 0.2
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltStep {
    pub frame: TiltFrame,
    pub keep_running: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TiltTracker {
    target: (f32, f32),
    current: (f32, f32),
    idle_frames: u32,
    running: bool,
}

impl TiltTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> (f32, f32) {
        self.current
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns true when the frame loop must be (re)started.
    pub fn aim(&mut self, normalized: (f32, f32)) -> bool {
        self.target = normalized;
        self.wake()
    }

    pub fn release(&mut self) -> bool {
        self.target = (0.0, 0.0);
        self.wake()
    }

    /// Marks the loop running without new input, e.g. for the first frame at mount.
    pub fn wake(&mut self) -> bool {
        self.idle_frames = 0;
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    pub fn step(&mut self) -> TiltStep {
        let next = (
            lerp(self.current.0, self.target.0, TILT_FOLLOW_FACTOR),
            lerp(self.current.1, self.target.1, TILT_FOLLOW_FACTOR),
        );
        let moved = (next.0 - self.current.0)
            .abs()
            .max((next.1 - self.current.1).abs());
        let gap = (self.target.0 - next.0)
            .abs()
            .max((self.target.1 - next.1).abs());
        self.current = next;
        if moved < TILT_IDLE_EPSILON && gap < TILT_IDLE_EPSILON {
            self.idle_frames += 1;
        } else {
            self.idle_frames = 0;
        }
        if self.idle_frames >= TILT_IDLE_FRAMES {
            self.current = self.target;
            self.idle_frames = 0;
            self.running = false;
        }
        TiltStep {
            frame: TiltFrame::from_offset(self.current.0, self.current.1),
            keep_running: self.running,
        }
    }

    pub fn halt(&mut self) {
        self.idle_frames = 0;
        self.running = false;
    }
}
