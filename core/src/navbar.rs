use crate::config::NAVBAR_ELEVATE_AFTER_PX;
use crate::theme::Theme;

pub const SHADOW_BASELINE: &str = "0 4px 24px rgba(0, 0, 0, 0.06)";
pub const SHADOW_ELEVATED_LIGHT: &str = "0 4px 24px rgba(0, 0, 0, 0.08)";
pub const SHADOW_ELEVATED_DARK: &str = "0 4px 24px rgba(0, 0, 0, 0.4)";

pub fn is_elevated(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_ELEVATE_AFTER_PX
}

pub fn navbar_shadow(scroll_y: f64, theme: Theme) -> &'static str {
    if !is_elevated(scroll_y) {
        return SHADOW_BASELINE;
    }
    match theme {
        Theme::Light => SHADOW_ELEVATED_LIGHT,
        Theme::Dark => SHADOW_ELEVATED_DARK,
    }
}
