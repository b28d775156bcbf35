#[cfg(target_arch = "wasm32")]
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::console;
#[cfg(target_arch = "wasm32")]
use gloo::events::EventListener;
use web_sys::Document;

use folio_core::PageConfig;

use crate::anchors::AnchorScroll;
#[cfg(target_arch = "wasm32")]
use crate::app_config::load_page_config;
use crate::backdrop::BackdropParallax;
#[cfg(target_arch = "wasm32")]
use crate::dom;
use crate::error::MountError;
use crate::filter::FilterController;
#[cfg(target_arch = "wasm32")]
use crate::logging;
use crate::menu::MenuController;
use crate::name_tilt::NameTilt;
use crate::navbar::NavbarShadow;
use crate::reveal::ScrollReveal;
use crate::theme_store::{restore_theme, ThemeToggle};

#[cfg(target_arch = "wasm32")]
thread_local! {
    static MOUNTED: Cell<bool> = Cell::new(false);
    static PAGE: RefCell<Option<Page>> = RefCell::new(None);
    static READY_LISTENER: RefCell<Option<EventListener>> = RefCell::new(None);
}

/// Every controller that mounted; absent ones had missing markup.
#[derive(Default)]
pub struct Page {
    pub theme_toggle: Option<ThemeToggle>,
    pub navbar: Option<NavbarShadow>,
    pub menu: Option<Rc<MenuController>>,
    pub filter: Option<Rc<FilterController>>,
    pub reveal: Option<ScrollReveal>,
    pub anchors: Option<AnchorScroll>,
    pub backdrop: Option<Rc<BackdropParallax>>,
    pub name_tilt: Option<Rc<NameTilt>>,
}

/// Entry point: mounts once the document has been parsed.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    let config = load_page_config();
    logging::set_verbose(config.verbose);
    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            console::error!("folio: cannot start", err.to_string());
            return;
        }
    };
    if document.ready_state() != "loading" {
        mount_once(&document, config);
        return;
    }
    let target = document.clone();
    let listener = EventListener::once(&target, "DOMContentLoaded", move |_event| {
        mount_once(&document, config);
    });
    READY_LISTENER.with(|slot| {
        *slot.borrow_mut() = Some(listener);
    });
}

/// Outside the browser there is no page to mount.
#[cfg(not(target_arch = "wasm32"))]
pub fn start() {}

#[cfg(target_arch = "wasm32")]
fn mount_once(document: &Document, config: PageConfig) {
    let already_mounted = MOUNTED.with(|flag| flag.replace(true));
    if already_mounted {
        return;
    }
    let page = mount_page(document, config);
    PAGE.with(|slot| {
        *slot.borrow_mut() = Some(page);
    });
    trace!("folio: ready");
}

/// Mounts every controller against `document`. Theme is restored first so
/// later readers of the root attribute see the persisted value.
pub fn mount_page(document: &Document, config: PageConfig) -> Page {
    if let Err(err) = restore_theme(document) {
        report("theme", &err);
    }
    let mut page = Page {
        theme_toggle: settle("theme toggle", ThemeToggle::mount(document)),
        navbar: settle("navbar", NavbarShadow::mount(document)),
        menu: settle("menu", MenuController::mount(document)),
        filter: settle("project filters", FilterController::mount(document)),
        reveal: settle("reveal", ScrollReveal::mount(document)),
        anchors: Some(AnchorScroll::mount(document)),
        ..Page::default()
    };
    if config.motion.parallax_enabled() {
        page.backdrop = settle("backdrop", BackdropParallax::mount(document));
        page.name_tilt = settle("name tilt", NameTilt::mount(document));
    } else {
        trace!("folio: motion off, parallax skipped");
    }
    page
}

fn settle<T>(component: &'static str, result: Result<T, MountError>) -> Option<T> {
    match result {
        Ok(mounted) => Some(mounted),
        Err(err) => {
            report(component, &err);
            None
        }
    }
}

fn report(component: &'static str, err: &MountError) {
    if err.is_missing_markup() {
        console::warn!(component, "skipped:", err.to_string());
    } else {
        console::error!(component, "failed:", err.to_string());
    }
}
