pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";

pub const MENU_CLOSE_AFTER_SCROLL_MS: u32 = 300;

pub const FILTER_ALL: &str = "all";
pub const FILTER_STAGGER_MS: u32 = 50;
pub const FILTER_ENTRANCE_OFFSET_PX: f32 = 20.0;
pub const FILTER_TRANSITION: &str = "opacity 0.4s ease, transform 0.4s ease";

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_CONFIRM_DELAY_MS: u32 = 100;
pub const REVEAL_OFFSET_PX: f32 = 20.0;
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

pub const NAVBAR_ELEVATE_AFTER_PX: f64 = 50.0;

pub const BACKDROP_POINTER_SCALE_PX: f32 = 30.0;
pub const BACKDROP_TOUCH_SCALE_PX: f32 = 20.0;
pub const BACKDROP_FOLLOW_FACTOR: f32 = 0.05;
pub const BACKDROP_RETURN_FACTOR: f32 = 0.08;
pub const BACKDROP_SETTLE_EPSILON: f32 = 0.1;
pub const BACKDROP_DEFAULT_SPEED: f32 = 0.15;
pub const BACKDROP_GRADIENT_SIZE_PCT: f32 = 40.0;

pub const TILT_FOLLOW_FACTOR: f32 = 0.1;
pub const TILT_MAX_DEG: f32 = 5.0;
pub const TILT_SCALE_PER_UNIT: f32 = 0.02;
pub const TILT_GLOW_PER_UNIT: f32 = 0.3;
pub const TILT_GLOW_MAX: f32 = 0.5;
pub const TILT_IDLE_EPSILON: f32 = 1.0e-4;
pub const TILT_IDLE_FRAMES: u32 = 30;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionMode {
    #[default]
    Full,
    Off,
}

impl MotionMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "full" | "on" => Some(MotionMode::Full),
            "off" | "reduced" | "none" => Some(MotionMode::Off),
            _ => None,
        }
    }

    pub fn parallax_enabled(self) -> bool {
        matches!(self, MotionMode::Full)
    }
}

/// Page-level switches read at boot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageConfig {
    pub motion: MotionMode,
    pub verbose: bool,
}

impl PageConfig {
    /// Builds a config from raw query values; anything unrecognised keeps the default.
    pub fn from_query(motion: Option<&str>, debug: Option<&str>) -> Self {
        let motion = motion.and_then(MotionMode::parse).unwrap_or_default();
        let verbose = debug.map(parse_flag).unwrap_or(false);
        Self { motion, verbose }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_defaults_when_absent() {
        assert_eq!(PageConfig::from_query(None, None), PageConfig::default());
    }

    #[test]
    fn motion_off_aliases() {
        for raw in ["off", "reduced", "NONE", " off "] {
            let config = PageConfig::from_query(Some(raw), None);
            assert!(!config.motion.parallax_enabled(), "{raw}");
        }
    }

    #[test]
    fn unknown_motion_keeps_default() {
        let config = PageConfig::from_query(Some("sideways"), Some("0"));
        assert_eq!(config.motion, MotionMode::Full);
        assert!(!config.verbose);
    }

    #[test]
    fn bare_debug_flag_enables_verbose() {
        assert!(PageConfig::from_query(None, Some("")).verbose);
        assert!(PageConfig::from_query(None, Some("true")).verbose);
    }
}
