use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::render::{request_animation_frame, AnimationFrame};
use web_sys::{Document, Element, Event};

use folio_core::{TiltFrame, TiltTracker};

use crate::backdrop::HERO_SELECTOR;
use crate::dom;
use crate::error::MountError;
use crate::input::{layout_rect, PointerSource};

pub const HERO_NAME_SELECTOR: &str = ".hero-name-gradient";

/// 3D tilt and glow on the hero name, easing toward the pointer.
///
/// The frame loop suspends once the name has been at rest for a while and
/// resumes on the next pointer input.
pub struct NameTilt {
    hero: Element,
    name: Element,
    tracker: RefCell<TiltTracker>,
    frame: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl NameTilt {
    pub fn mount(document: &Document) -> Result<Rc<Self>, MountError> {
        let hero = dom::require(document, HERO_SELECTOR)?;
        let name = dom::require(document, HERO_NAME_SELECTOR)?;
        let tilt = Rc::new(Self {
            hero,
            name,
            tracker: RefCell::new(TiltTracker::new()),
            frame: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });
        tilt.start();
        Ok(tilt)
    }

    pub fn is_running(&self) -> bool {
        self.tracker.borrow().is_running()
    }

    pub fn start(self: &Rc<Self>) {
        if !self.listeners.borrow().is_empty() {
            return;
        }
        let mut listeners = Vec::new();
        for source in [PointerSource::Mouse, PointerSource::Touch] {
            let tilt = Rc::clone(self);
            listeners.push(EventListener::new_with_options(
                &self.hero,
                source.move_event(),
                EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: true,
                },
                move |event: &Event| {
                    if let Some((x, y)) = source.point(event) {
                        tilt.aim(x, y);
                    }
                },
            ));
            let tilt = Rc::clone(self);
            listeners.push(EventListener::new(
                &self.hero,
                source.end_event(),
                move |_event: &Event| {
                    let wake = tilt.tracker.borrow_mut().release();
                    if wake {
                        tilt.request_frame();
                    }
                },
            ));
        }
        *self.listeners.borrow_mut() = listeners;
        if self.tracker.borrow_mut().wake() {
            self.request_frame();
        }
    }

    pub fn stop(&self) {
        self.listeners.borrow_mut().clear();
        self.frame.borrow_mut().take();
        self.tracker.borrow_mut().halt();
    }

    fn aim(self: &Rc<Self>, x: f32, y: f32) {
        let Some(normalized) = layout_rect(&self.hero).normalized_offset(x, y) else {
            return;
        };
        let wake = self.tracker.borrow_mut().aim(normalized);
        if wake {
            self.request_frame();
        }
    }

    fn request_frame(self: &Rc<Self>) {
        let tilt = Rc::clone(self);
        let handle = request_animation_frame(move |_timestamp| {
            tilt.on_frame();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(self: &Rc<Self>) {
        self.frame.borrow_mut().take();
        let step = self.tracker.borrow_mut().step();
        self.paint(&step.frame);
        if step.keep_running {
            self.request_frame();
        }
    }

    fn paint(&self, frame: &TiltFrame) {
        dom::set_style(&self.name, "transform", &frame.transform());
        dom::set_style(&self.name, "filter", &frame.filter());
    }
}
