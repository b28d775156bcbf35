use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use folio_core::config::{REVEAL_CONFIRM_DELAY_MS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use folio_core::filter::CLASS_HIDDEN;
use folio_core::reveal::{shown_style, start_style, REVEAL_SELECTOR};
use folio_core::{RevealPhase, RevealStep, RevealStyle};

use crate::dom;
use crate::error::MountError;

struct RevealTargets {
    elements: Vec<Element>,
    phases: RefCell<Vec<RevealPhase>>,
    timers: RefCell<Vec<Timeout>>,
}

/// One-shot fade-in for section headings as they scroll into view.
pub struct ScrollReveal {
    observer: IntersectionObserver,
    targets: Rc<RevealTargets>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ScrollReveal {
    pub fn mount(document: &Document) -> Result<Self, MountError> {
        let elements = dom::query_all(document, REVEAL_SELECTOR);
        if elements.is_empty() {
            return Err(MountError::missing(REVEAL_SELECTOR));
        }
        let targets = Rc::new(RevealTargets {
            phases: RefCell::new(vec![RevealPhase::default(); elements.len()]),
            elements,
            timers: RefCell::new(Vec::new()),
        });
        let callback = {
            let targets = Rc::clone(&targets);
            Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        on_entry(&targets, &observer, &entry);
                    }
                },
            )
        };
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        init.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for element in &targets.elements {
            observer.observe(element);
        }
        trace!("reveal: observing", targets.elements.len() as u32);
        Ok(Self {
            observer,
            targets,
            _callback: callback,
        })
    }

    pub fn phases(&self) -> Vec<RevealPhase> {
        self.targets.phases.borrow().clone()
    }
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        self.observer.disconnect();
        self.targets.timers.borrow_mut().clear();
    }
}

fn on_entry(
    targets: &Rc<RevealTargets>,
    observer: &IntersectionObserver,
    entry: &IntersectionObserverEntry,
) {
    let element = entry.target();
    let Some(index) = targets.elements.iter().position(|candidate| *candidate == element) else {
        return;
    };
    let hidden = dom::has_class(&element, CLASS_HIDDEN);
    let step = targets.phases.borrow_mut()[index].intersect(entry.is_intersecting(), hidden);
    if step != Some(RevealStep::Prepare) {
        return;
    }
    apply_style(&element, &start_style());
    observer.unobserve(&element);
    let pending = Rc::clone(targets);
    let timer = Timeout::new(REVEAL_CONFIRM_DELAY_MS, move || {
        let hidden = dom::has_class(&pending.elements[index], CLASS_HIDDEN);
        let step = pending.phases.borrow_mut()[index].confirm(hidden);
        if step == Some(RevealStep::Show) {
            apply_style(&pending.elements[index], &shown_style());
        }
    });
    targets.timers.borrow_mut().push(timer);
}

fn apply_style(element: &Element, style: &RevealStyle) {
    if let Some(transition) = style.transition {
        dom::set_style(element, "transition", transition);
    }
    dom::set_style(element, "opacity", style.opacity);
    dom::set_style(element, "transform", &style.transform);
}
