pub mod config;
pub mod filter;
pub mod menu;
pub mod navbar;
pub mod parallax;
pub mod reveal;
pub mod theme;

pub use config::{MotionMode, PageConfig};
pub use filter::{Entrance, FilterBoard, FilterBoardError, FilterOutcome, FilterTag};
pub use menu::{
    classify_href, should_close_on_click, LinkTarget, MenuClasses, MenuState, ProtectedRegions,
    Region,
};
pub use navbar::navbar_shadow;
pub use parallax::{BackdropFrame, BackdropTracker, Rect, TiltFrame, TiltStep, TiltTracker};
pub use reveal::{RevealPhase, RevealStep, RevealStyle};
pub use theme::{load_theme, save_theme, MemoryStore, ParseThemeError, PreferenceStore, Theme};
