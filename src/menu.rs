use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, Node};

use folio_core::config::MENU_CLOSE_AFTER_SCROLL_MS;
use folio_core::menu::{CLASS_ACTIVE, CLASS_MENU_OPEN, CLASS_MOBILE_MENU};
use folio_core::{
    classify_href, should_close_on_click, LinkTarget, MenuClasses, MenuState, ProtectedRegions,
    Region,
};

use crate::dom;
use crate::error::MountError;
use crate::filter::FILTER_BUTTON_SELECTOR;

pub const MENU_TOGGLE_SELECTOR: &str = ".menu-toggle";
pub const NAV_LINKS_SELECTOR: &str = ".nav-links";

const CAPTURE: EventListenerOptions = EventListenerOptions {
    phase: EventListenerPhase::Capture,
    passive: false,
};

const BUBBLE: EventListenerOptions = EventListenerOptions {
    phase: EventListenerPhase::Bubble,
    passive: false,
};

/// Mobile navigation: toggle button, link list and body scroll lock.
pub struct MenuController {
    document: Document,
    toggle: Element,
    list: Element,
    links: Vec<Element>,
    body: HtmlElement,
    protected: ProtectedRegions,
    state: RefCell<MenuState>,
    pending_close: RefCell<Option<Timeout>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl MenuController {
    pub fn mount(document: &Document) -> Result<Rc<Self>, MountError> {
        let toggle = dom::require(document, MENU_TOGGLE_SELECTOR)?;
        let list = dom::require(document, NAV_LINKS_SELECTOR)?;
        let body = dom::body(document)?;
        let links = dom::query_all_in(&list, "a");
        let state = MenuState::from_markup(
            dom::has_class(&list, CLASS_ACTIVE),
            dom::has_class(&list, CLASS_MOBILE_MENU),
        );
        let controller = Rc::new(Self {
            document: document.clone(),
            toggle,
            list,
            links,
            body,
            protected: ProtectedRegions::menu_default(),
            state: RefCell::new(state),
            pending_close: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });
        controller.install_listeners();
        trace!("menu: mounted", controller.links.len() as u32);
        Ok(controller)
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }

    pub fn toggle(&self) {
        let classes = self.state.borrow_mut().toggle();
        self.render(classes);
    }

    pub fn close(&self) {
        let classes = self.state.borrow_mut().close();
        self.render(classes);
    }

    /// Removes every listener and pending timer; the markup keeps its last state.
    pub fn detach(&self) {
        self.listeners.borrow_mut().clear();
        self.pending_close.borrow_mut().take();
    }

    fn render(&self, classes: MenuClasses) {
        dom::set_class(&self.toggle, CLASS_ACTIVE, classes.toggle_active);
        dom::set_class(&self.list, CLASS_MOBILE_MENU, classes.list_mobile);
        dom::set_class(&self.list, CLASS_ACTIVE, classes.list_active);
        dom::set_class(&self.body, CLASS_MENU_OPEN, classes.body_menu_open);
        let _ = self.body.style().set_property("overflow", classes.body_overflow);
    }

    fn schedule_close(self: &Rc<Self>) {
        let controller = Rc::clone(self);
        let timeout = Timeout::new(MENU_CLOSE_AFTER_SCROLL_MS, move || {
            controller.close();
        });
        // Replacing a pending timer cancels it; the newer one closes the menu anyway.
        *self.pending_close.borrow_mut() = Some(timeout);
    }

    fn on_link_click(self: &Rc<Self>, link: &Element, event: &Event) {
        event.stop_propagation();
        let href = link.get_attribute("href");
        match classify_href(href.as_deref()) {
            LinkTarget::Anchor(fragment) => {
                event.prevent_default();
                if !dom::scroll_to_fragment(&self.document, fragment) {
                    trace!("menu: anchor target missing", href.unwrap_or_default());
                }
                self.schedule_close();
            }
            LinkTarget::Navigate => self.close(),
        }
    }

    fn regions_hit(&self, target: &Node) -> Vec<Region> {
        let mut hits = Vec::new();
        if self.toggle.contains(Some(target)) {
            hits.push(Region::Toggle);
        }
        if self.list.contains(Some(target)) {
            hits.push(Region::LinkList);
        }
        if self.links.iter().any(|link| link.contains(Some(target))) {
            hits.push(Region::Link);
        }
        let element = match target.dyn_ref::<Element>() {
            Some(element) => Some(element.clone()),
            None => target.parent_element(),
        };
        let on_filter = element
            .and_then(|element| element.closest(FILTER_BUTTON_SELECTOR).ok().flatten())
            .is_some();
        if on_filter {
            hits.push(Region::FilterButton);
        }
        hits
    }

    fn on_document_click(&self, event: &Event) {
        if !self.is_open() {
            return;
        }
        let Some(target) = event.target().and_then(|target| target.dyn_into::<Node>().ok()) else {
            return;
        };
        let hits = self.regions_hit(&target);
        if should_close_on_click(&self.state.borrow(), &self.protected, &hits) {
            trace!("menu: closing on outside click");
            self.close();
        }
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();

        let controller = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &self.toggle,
            "click",
            BUBBLE,
            move |event: &Event| {
                event.stop_propagation();
                controller.toggle();
            },
        ));

        for link in &self.links {
            let controller = Rc::clone(self);
            let target = link.clone();
            listeners.push(EventListener::new_with_options(
                link,
                "click",
                CAPTURE,
                move |event: &Event| {
                    controller.on_link_click(&target, event);
                },
            ));
        }

        let controller = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &self.document,
            "click",
            CAPTURE,
            move |event: &Event| {
                controller.on_document_click(event);
            },
        ));

        *self.listeners.borrow_mut() = listeners;
    }
}
