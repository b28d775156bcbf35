//! Mobile navigation state.
//!
//! The toggle, link list and body classes are a projection of [`MenuState`];
//! the web layer never flips one of them on its own.

pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_MOBILE_MENU: &str = "mobile-menu";
pub const CLASS_MENU_OPEN: &str = "menu-open";
pub const OVERFLOW_LOCKED: &str = "hidden";
pub const OVERFLOW_FREE: &str = "";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
    mobile: bool,
}

/// Class and style membership the three collaborating elements must carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuClasses {
    pub toggle_active: bool,
    pub list_active: bool,
    pub list_mobile: bool,
    pub body_menu_open: bool,
    pub body_overflow: &'static str,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds state from markup; the list's `active` class is authoritative.
    pub fn from_markup(list_active: bool, list_mobile: bool) -> Self {
        Self {
            open: list_active,
            mobile: list_mobile,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> MenuClasses {
        self.open = !self.open;
        self.mobile = true;
        self.classes()
    }

    pub fn close(&mut self) -> MenuClasses {
        self.open = false;
        self.mobile = false;
        self.classes()
    }

    pub fn classes(&self) -> MenuClasses {
        MenuClasses {
            toggle_active: self.open,
            list_active: self.open,
            list_mobile: self.mobile,
            body_menu_open: self.open,
            body_overflow: if self.open {
                OVERFLOW_LOCKED
            } else {
                OVERFLOW_FREE
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Toggle,
    LinkList,
    Link,
    FilterButton,
}

/// Regions whose clicks never count as "outside" the menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtectedRegions {
    regions: Vec<Region>,
}

impl ProtectedRegions {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    pub fn menu_default() -> Self {
        Self::new(vec![
            Region::Toggle,
            Region::LinkList,
            Region::Link,
            Region::FilterButton,
        ])
    }

    pub fn protects(&self, hits: &[Region]) -> bool {
        hits.iter().any(|hit| self.regions.contains(hit))
    }
}

impl Default for ProtectedRegions {
    fn default() -> Self {
        Self::menu_default()
    }
}

pub fn should_close_on_click(state: &MenuState, protected: &ProtectedRegions, hits: &[Region]) -> bool {
    state.is_open() && !protected.protects(hits)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// In-page fragment; `None` for a bare `#`.
    Anchor(Option<&'a str>),
    Navigate,
}

pub fn classify_href(href: Option<&str>) -> LinkTarget<'_> {
    let Some(href) = href else {
        return LinkTarget::Navigate;
    };
    let Some(fragment) = href.strip_prefix('#') else {
        return LinkTarget::Navigate;
    };
    if fragment.is_empty() {
        LinkTarget::Anchor(None)
    } else {
        LinkTarget::Anchor(Some(fragment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_marks_list_mobile_once() {
        let mut state = MenuState::new();
        assert!(!state.classes().list_mobile);
        state.toggle();
        state.toggle();
        assert!(state.classes().list_mobile);
        assert!(!state.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = MenuState::new();
        state.toggle();
        let first = state.close();
        let second = state.close();
        assert_eq!(first, second);
        assert_eq!(first.body_overflow, OVERFLOW_FREE);
    }

    #[test]
    fn hrefs_classify() {
        assert_eq!(classify_href(Some("#work")), LinkTarget::Anchor(Some("work")));
        assert_eq!(classify_href(Some("#")), LinkTarget::Anchor(None));
        assert_eq!(classify_href(Some("/blog")), LinkTarget::Navigate);
        assert_eq!(classify_href(Some("https://x.dev/#a")), LinkTarget::Navigate);
        assert_eq!(classify_href(None), LinkTarget::Navigate);
    }

    #[test]
    fn closed_menu_ignores_outside_clicks() {
        let state = MenuState::new();
        assert!(!should_close_on_click(&state, &ProtectedRegions::default(), &[]));
    }
}
