use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use web_sys::{Document, Element, Event};

use folio_core::config::{FILTER_ENTRANCE_OFFSET_PX, FILTER_TRANSITION};
use folio_core::filter::CLASS_HIDDEN;
use folio_core::menu::CLASS_ACTIVE;
use folio_core::reveal::translate_y;
use folio_core::{Entrance, FilterBoard, FilterBoardError, FilterOutcome, FilterTag};

use crate::dom;
use crate::error::MountError;

pub const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";

/// Project gallery filter: one active button, cards shown by category.
pub struct FilterController {
    buttons: Vec<Element>,
    cards: Vec<Element>,
    board: RefCell<FilterBoard>,
    entrance_frame: RefCell<Option<AnimationFrame>>,
    stagger: RefCell<Vec<Timeout>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl FilterController {
    pub fn mount(document: &Document) -> Result<Rc<Self>, MountError> {
        let buttons = dom::query_all(document, FILTER_BUTTON_SELECTOR);
        let cards = dom::query_all(document, PROJECT_CARD_SELECTOR);
        let tags = buttons
            .iter()
            .map(|button| button.get_attribute("data-filter").map(|tag| FilterTag::parse(&tag)))
            .collect();
        let categories = cards
            .iter()
            .map(|card| card.get_attribute("data-category"))
            .collect();
        let marked: Vec<bool> = buttons
            .iter()
            .map(|button| dom::has_class(button, CLASS_ACTIVE))
            .collect();
        let board = FilterBoard::new(tags, categories, &marked).map_err(|err| match err {
            FilterBoardError::NoButtons => MountError::missing(FILTER_BUTTON_SELECTOR),
            FilterBoardError::NoCards => MountError::missing(PROJECT_CARD_SELECTOR),
        })?;
        let controller = Rc::new(Self {
            buttons,
            cards,
            board: RefCell::new(board),
            entrance_frame: RefCell::new(None),
            stagger: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
        });
        controller.mark_active(controller.board.borrow().active_button());
        controller.install_listeners();
        trace!(
            "project filters: mounted",
            controller.buttons.len() as u32,
            controller.cards.len() as u32
        );
        Ok(controller)
    }

    pub fn active_tag(&self) -> Option<FilterTag> {
        self.board.borrow().active_tag().cloned()
    }

    pub fn apply_filter(self: &Rc<Self>, tag: &FilterTag) {
        let outcome = self.board.borrow_mut().apply(tag);
        self.render(outcome);
    }

    pub fn select(self: &Rc<Self>, index: usize) {
        let outcome = self.board.borrow_mut().select_button(index);
        let Some(outcome) = outcome else {
            console::warn!("project filters: button has no data-filter attribute");
            return;
        };
        if let Some(tag) = self.active_tag() {
            trace!("project filters: selected", tag.to_string());
        }
        self.render(outcome);
    }

    /// Drops listeners and any entrance still in flight.
    pub fn detach(&self) {
        self.listeners.borrow_mut().clear();
        self.cancel_entrance();
    }

    fn mark_active(&self, active: usize) {
        for (index, button) in self.buttons.iter().enumerate() {
            dom::set_class(button, CLASS_ACTIVE, index == active);
        }
    }

    fn render(self: &Rc<Self>, outcome: FilterOutcome) {
        for card in &self.cards {
            dom::set_class(card, CLASS_HIDDEN, true);
            dom::set_style(card, "display", "none");
        }
        for (card, visible) in self.cards.iter().zip(&outcome.visible) {
            if *visible {
                dom::set_class(card, CLASS_HIDDEN, false);
                dom::set_style(card, "display", "");
            }
        }
        self.mark_active(outcome.active_button);
        self.schedule_entrance(outcome.entrances);
    }

    fn cancel_entrance(&self) {
        self.entrance_frame.borrow_mut().take();
        self.stagger.borrow_mut().clear();
    }

    fn schedule_entrance(self: &Rc<Self>, entrances: Vec<Entrance>) {
        self.cancel_entrance();
        if entrances.is_empty() {
            return;
        }
        let controller = Rc::clone(self);
        let handle = request_animation_frame(move |_timestamp| {
            controller.run_entrance(&entrances);
        });
        *self.entrance_frame.borrow_mut() = Some(handle);
    }

    fn run_entrance(&self, entrances: &[Entrance]) {
        let start = translate_y(FILTER_ENTRANCE_OFFSET_PX);
        let mut timers = Vec::with_capacity(entrances.len());
        for entrance in entrances {
            let Some(card) = self.cards.get(entrance.card) else {
                continue;
            };
            dom::set_style(card, "transition", FILTER_TRANSITION);
            dom::set_style(card, "opacity", "0");
            dom::set_style(card, "transform", &start);
            let card = card.clone();
            timers.push(Timeout::new(entrance.delay_ms, move || {
                dom::set_style(&card, "opacity", "1");
                dom::set_style(&card, "transform", &translate_y(0.0));
            }));
        }
        *self.stagger.borrow_mut() = timers;
    }

    fn install_listeners(self: &Rc<Self>) {
        let listeners = self
            .buttons
            .iter()
            .enumerate()
            .map(|(index, button)| {
                let controller = Rc::clone(self);
                EventListener::new_with_options(
                    button,
                    "click",
                    EventListenerOptions {
                        phase: EventListenerPhase::Bubble,
                        passive: false,
                    },
                    move |event: &Event| {
                        event.prevent_default();
                        event.stop_propagation();
                        event.stop_immediate_propagation();
                        controller.select(index);
                    },
                )
            })
            .collect();
        *self.listeners.borrow_mut() = listeners;
    }
}
