use gloo::events::{EventListener, EventListenerOptions};
use web_sys::{Document, Element, Window};

use folio_core::{navbar_shadow, Theme};

use crate::dom;
use crate::error::MountError;
use crate::theme_store::current_theme;

pub const NAVBAR_SELECTOR: &str = ".navbar";

pub struct NavbarShadow {
    _listener: EventListener,
}

impl NavbarShadow {
    pub fn mount(document: &Document) -> Result<Self, MountError> {
        let navbar = dom::require(document, NAVBAR_SELECTOR)?;
        let window = dom::window()?;
        let listener = {
            let navbar = navbar.clone();
            let document = document.clone();
            let scroller = window.clone();
            EventListener::new_with_options(
                &window,
                "scroll",
                EventListenerOptions::default(),
                move |_event| {
                    apply(&navbar, scroll_offset(&scroller), current_theme(&document));
                },
            )
        };
        apply(&navbar, scroll_offset(&window), current_theme(document));
        Ok(Self {
            _listener: listener,
        })
    }
}

/// Re-evaluates the shadow right away, e.g. after a theme change.
pub fn refresh_shadow(document: &Document, theme: Theme) {
    let (Some(navbar), Some(window)) = (dom::query(document, NAVBAR_SELECTOR), web_sys::window())
    else {
        return;
    };
    apply(&navbar, scroll_offset(&window), theme);
}

fn apply(navbar: &Element, scroll_y: f64, theme: Theme) {
    dom::set_style(navbar, "box-shadow", navbar_shadow(scroll_y, theme));
}

fn scroll_offset(window: &Window) -> f64 {
    window.page_y_offset().unwrap_or(0.0)
}
