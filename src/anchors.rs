use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use web_sys::{Document, Event};

use folio_core::{classify_href, LinkTarget};

use crate::dom;
use crate::menu::NAV_LINKS_SELECTOR;

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Smooth scrolling for in-page links outside the nav; the menu handles its own.
pub struct AnchorScroll {
    _listeners: Vec<EventListener>,
}

impl AnchorScroll {
    pub fn mount(document: &Document) -> Self {
        let listeners = dom::query_all(document, ANCHOR_SELECTOR)
            .into_iter()
            .filter(|anchor| anchor.closest(NAV_LINKS_SELECTOR).ok().flatten().is_none())
            .map(|anchor| {
                let document = document.clone();
                let target = anchor.clone();
                EventListener::new_with_options(
                    &anchor,
                    "click",
                    EventListenerOptions {
                        phase: EventListenerPhase::Bubble,
                        passive: false,
                    },
                    move |event: &Event| {
                        let href = target.get_attribute("href");
                        let LinkTarget::Anchor(fragment) = classify_href(href.as_deref()) else {
                            return;
                        };
                        event.prevent_default();
                        dom::scroll_to_fragment(&document, fragment);
                    },
                )
            })
            .collect::<Vec<_>>();
        trace!("anchors: wired", listeners.len() as u32);
        Self {
            _listeners: listeners,
        }
    }
}
