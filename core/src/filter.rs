use std::fmt;

use crate::config::{FILTER_ALL, FILTER_STAGGER_MS};

pub const CLASS_HIDDEN: &str = "hidden";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FilterTag {
    All,
    Category(String),
}

impl FilterTag {
    pub fn parse(value: &str) -> Self {
        if value == FILTER_ALL {
            FilterTag::All
        } else {
            FilterTag::Category(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterTag::All => FILTER_ALL,
            FilterTag::Category(category) => category,
        }
    }

    /// Cards without a category are only shown under "all".
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            FilterTag::All => true,
            FilterTag::Category(tag) => category == Some(tag.as_str()),
        }
    }
}

impl fmt::Display for FilterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entrance {
    pub card: usize,
    pub delay_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOutcome {
    pub visible: Vec<bool>,
    pub active_button: usize,
    pub entrances: Vec<Entrance>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterBoardError {
    NoButtons,
    NoCards,
}

impl fmt::Display for FilterBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterBoardError::NoButtons => f.write_str("no filter buttons found"),
            FilterBoardError::NoCards => f.write_str("no project cards found"),
        }
    }
}

impl std::error::Error for FilterBoardError {}

/// Active button and card visibility for one gallery.
///
/// Exactly one button is active for the lifetime of the board.
#[derive(Clone, Debug)]
pub struct FilterBoard {
    buttons: Vec<Option<FilterTag>>,
    cards: Vec<Option<String>>,
    active: usize,
    visible: Vec<bool>,
}

impl FilterBoard {
    /// `marked_active` mirrors which buttons carry the active class in markup.
    pub fn new(
        buttons: Vec<Option<FilterTag>>,
        cards: Vec<Option<String>>,
        marked_active: &[bool],
    ) -> Result<Self, FilterBoardError> {
        if buttons.is_empty() {
            return Err(FilterBoardError::NoButtons);
        }
        if cards.is_empty() {
            return Err(FilterBoardError::NoCards);
        }
        let active = marked_active
            .iter()
            .take(buttons.len())
            .position(|marked| *marked)
            .or_else(|| {
                buttons
                    .iter()
                    .position(|tag| matches!(tag, Some(FilterTag::All)))
            })
            .unwrap_or(0);
        let visible = vec![true; cards.len()];
        Ok(Self {
            buttons,
            cards,
            active,
            visible,
        })
    }

    pub fn active_button(&self) -> usize {
        self.active
    }

    pub fn active_tag(&self) -> Option<&FilterTag> {
        self.buttons.get(self.active).and_then(Option::as_ref)
    }

    pub fn visible(&self) -> &[bool] {
        &self.visible
    }

    pub fn button_tag(&self, index: usize) -> Option<&FilterTag> {
        self.buttons.get(index).and_then(Option::as_ref)
    }

    /// Handles a button press; `None` when the button carries no tag.
    /// The pressed button becomes active even when another shares its tag.
    pub fn select_button(&mut self, index: usize) -> Option<FilterOutcome> {
        let tag = self.button_tag(index)?.clone();
        self.active = index;
        Some(self.show_matching(&tag))
    }

    /// Filters by tag; the first button carrying it becomes active.
    pub fn apply(&mut self, tag: &FilterTag) -> FilterOutcome {
        if let Some(index) = self.button_for(tag) {
            self.active = index;
        }
        self.show_matching(tag)
    }

    fn button_for(&self, tag: &FilterTag) -> Option<usize> {
        self.buttons
            .iter()
            .position(|button| button.as_ref() == Some(tag))
    }

    fn show_matching(&mut self, tag: &FilterTag) -> FilterOutcome {
        for (visible, category) in self.visible.iter_mut().zip(&self.cards) {
            *visible = tag.matches(category.as_deref());
        }
        let entrances = self
            .visible
            .iter()
            .enumerate()
            .filter(|(_, visible)| **visible)
            .enumerate()
            .map(|(order, (card, _))| Entrance {
                card,
                delay_ms: stagger_delay_ms(order),
            })
            .collect();
        FilterOutcome {
            visible: self.visible.clone(),
            active_button: self.active,
            entrances,
        }
    }
}

pub fn stagger_delay_ms(order: usize) -> u32 {
    u32::try_from(order)
        .unwrap_or(u32::MAX)
        .saturating_mul(FILTER_STAGGER_MS)
}
