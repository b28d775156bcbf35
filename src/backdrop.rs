use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::render::{request_animation_frame, AnimationFrame};
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, MutationObserver, MutationObserverInit};

use folio_core::config::{BACKDROP_POINTER_SCALE_PX, BACKDROP_TOUCH_SCALE_PX, THEME_ATTRIBUTE};
use folio_core::parallax::{depth_class, depth_speed, translate, water_gradient, TRANSLATE_REST};
use folio_core::{BackdropTracker, Theme};

use crate::dom;
use crate::error::MountError;
use crate::input::{layout_rect, PointerSource};
use crate::theme_store::current_theme;

pub const HERO_SELECTOR: &str = ".hero";
pub const ILLUSTRATIONS_SELECTOR: &str = ".hero-background-illustrations";
pub const LAYER_SELECTOR: &str = ".illustration-shape, .illustration-chart";
pub const WATER_BACKGROUND_ID: &str = "heroWaterBackground";

struct Layer {
    element: Element,
    speed: f32,
}

struct ThemeWatch {
    observer: MutationObserver,
    _callback: Closure<dyn FnMut(Array, MutationObserver)>,
}

/// Illustration layers drifting with the pointer, plus a gradient that follows it.
pub struct BackdropParallax {
    document: Document,
    hero: Element,
    layers: Vec<Layer>,
    water: Option<Element>,
    gradient: RefCell<Option<String>>,
    tracker: RefCell<BackdropTracker>,
    frame: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
    theme_watch: RefCell<Option<ThemeWatch>>,
}

impl BackdropParallax {
    pub fn mount(document: &Document) -> Result<Rc<Self>, MountError> {
        let hero = dom::require(document, HERO_SELECTOR)?;
        let illustrations = dom::require(document, ILLUSTRATIONS_SELECTOR)?;
        let layers = dom::query_all_in(&illustrations, LAYER_SELECTOR)
            .into_iter()
            .filter_map(|element| {
                let class_name = element.class_name();
                let speed = depth_speed(depth_class(class_name.split_whitespace())?);
                Some(Layer { element, speed })
            })
            .collect();
        let water = document.get_element_by_id(WATER_BACKGROUND_ID);
        if water.is_none() {
            trace!("backdrop: no water background, gradient disabled");
        }
        let backdrop = Rc::new(Self {
            document: document.clone(),
            hero,
            layers,
            water,
            gradient: RefCell::new(None),
            tracker: RefCell::new(BackdropTracker::new()),
            frame: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
            theme_watch: RefCell::new(None),
        });
        backdrop.start()?;
        Ok(backdrop)
    }

    pub fn is_running(&self) -> bool {
        self.tracker.borrow().is_running()
    }

    pub fn offset(&self) -> (f32, f32) {
        self.tracker.borrow().current()
    }

    /// Offset the layers are easing toward, in pixels.
    pub fn target(&self) -> (f32, f32) {
        self.tracker.borrow().target()
    }

    /// Gradient last written to the water background, if any.
    pub fn painted_gradient(&self) -> Option<String> {
        self.gradient.borrow().clone()
    }

    pub fn start(self: &Rc<Self>) -> Result<(), MountError> {
        if !self.listeners.borrow().is_empty() {
            return Ok(());
        }
        let mut listeners = Vec::new();
        for (source, scale) in [
            (PointerSource::Mouse, BACKDROP_POINTER_SCALE_PX),
            (PointerSource::Touch, BACKDROP_TOUCH_SCALE_PX),
        ] {
            let backdrop = Rc::clone(self);
            listeners.push(EventListener::new_with_options(
                &self.hero,
                source.move_event(),
                EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: true,
                },
                move |event: &Event| {
                    if let Some((x, y)) = source.point(event) {
                        backdrop.pointer_at(x, y, scale);
                    }
                },
            ));
            let backdrop = Rc::clone(self);
            listeners.push(EventListener::new(
                &self.hero,
                source.end_event(),
                move |_event: &Event| {
                    backdrop.release();
                },
            ));
        }
        *self.listeners.borrow_mut() = listeners;
        if self.water.is_some() {
            *self.theme_watch.borrow_mut() = Some(self.watch_theme()?);
        }
        Ok(())
    }

    /// Detaches input, cancels the loop and puts every layer back at rest.
    pub fn stop(&self) {
        self.listeners.borrow_mut().clear();
        if let Some(watch) = self.theme_watch.borrow_mut().take() {
            watch.observer.disconnect();
        }
        self.frame.borrow_mut().take();
        self.tracker.borrow_mut().halt();
        self.paint_layers((0.0, 0.0), true);
    }

    fn watch_theme(self: &Rc<Self>) -> Result<ThemeWatch, MountError> {
        let backdrop = Rc::clone(self);
        let callback = Closure::<dyn FnMut(Array, MutationObserver)>::new(
            move |_records: Array, _observer: MutationObserver| {
                backdrop.center_water();
            },
        );
        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
        let init = MutationObserverInit::new();
        init.set_attributes(true);
        let filter = Array::of1(&JsValue::from_str(THEME_ATTRIBUTE));
        init.set_attribute_filter(&filter);
        let root = dom::root(&self.document)?;
        observer.observe_with_options(&root, &init)?;
        Ok(ThemeWatch {
            observer,
            _callback: callback,
        })
    }

    fn pointer_at(self: &Rc<Self>, x: f32, y: f32, scale: f32) {
        let rect = layout_rect(&self.hero);
        let Some(normalized) = rect.normalized_offset(x, y) else {
            return;
        };
        let wake = self.tracker.borrow_mut().aim(normalized, scale);
        self.paint_water(x, y, current_theme(&self.document));
        if wake {
            self.request_frame();
        }
    }

    fn release(self: &Rc<Self>) {
        let wake = self.tracker.borrow_mut().release();
        self.center_water();
        if wake {
            self.request_frame();
        }
    }

    fn request_frame(self: &Rc<Self>) {
        let backdrop = Rc::clone(self);
        let handle = request_animation_frame(move |_timestamp| {
            backdrop.on_frame();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(self: &Rc<Self>) {
        self.frame.borrow_mut().take();
        let frame = self.tracker.borrow_mut().step();
        self.paint_layers(frame.offset, frame.settled);
        if !frame.settled {
            self.request_frame();
        }
    }

    fn paint_layers(&self, offset: (f32, f32), at_rest: bool) {
        for layer in &self.layers {
            if at_rest {
                dom::set_style(&layer.element, "transform", TRANSLATE_REST);
            } else {
                dom::set_style(&layer.element, "transform", &translate(offset, layer.speed));
            }
        }
    }

    fn paint_water(&self, x: f32, y: f32, theme: Theme) {
        let Some(water) = self.water.as_ref() else {
            return;
        };
        let Some((percent_x, percent_y)) = layout_rect(&self.hero).percent_position(x, y) else {
            return;
        };
        let gradient = water_gradient(percent_x, percent_y, theme);
        if self.gradient.borrow().as_deref() == Some(gradient.as_str()) {
            return;
        }
        dom::set_style(water, "background", &gradient);
        *self.gradient.borrow_mut() = Some(gradient);
    }

    fn center_water(&self) {
        let (x, y) = layout_rect(&self.hero).center();
        self.paint_water(x, y, current_theme(&self.document));
    }
}
