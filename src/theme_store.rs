use gloo::console;
use gloo::events::EventListener;
use web_sys::{Document, Storage};

use folio_core::config::THEME_ATTRIBUTE;
use folio_core::{load_theme, save_theme, PreferenceStore, Theme};

use crate::dom;
use crate::error::{js_err, MountError};
use crate::navbar;

pub const THEME_TOGGLE_ID: &str = "themeToggle";

/// `localStorage`, or nothing when the browser refuses access.
#[derive(Clone, Debug, Default)]
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), String> {
        let Some(storage) = self.storage.as_ref() else {
            return Err("storage unavailable".to_string());
        };
        storage.set_item(key, value).map_err(js_err)
    }
}

pub fn get_theme() -> Theme {
    load_theme(&LocalStore::open())
}

/// Theme currently reflected on the root element.
pub fn current_theme(document: &Document) -> Theme {
    let value = document
        .document_element()
        .and_then(|root| root.get_attribute(THEME_ATTRIBUTE));
    Theme::from_attribute(value.as_deref())
}

pub fn apply_theme(document: &Document, theme: Theme) -> Result<(), MountError> {
    let root = dom::root(document)?;
    root.set_attribute(THEME_ATTRIBUTE, theme.as_str())?;
    Ok(())
}

pub fn set_theme(document: &Document, store: &mut impl PreferenceStore, theme: Theme) {
    if let Err(err) = apply_theme(document, theme) {
        console::warn!("theme: could not apply", theme.as_str(), err.to_string());
    }
    if let Err(err) = save_theme(store, theme) {
        console::warn!("theme: preference not saved", err);
    }
}

/// Applies the persisted preference to the root; runs before anything reads the theme.
pub fn restore_theme(document: &Document) -> Result<Theme, MountError> {
    let theme = get_theme();
    apply_theme(document, theme)?;
    trace!("theme: restored", theme.as_str());
    Ok(theme)
}

pub struct ThemeToggle {
    _listener: EventListener,
}

impl ThemeToggle {
    pub fn mount(document: &Document) -> Result<Self, MountError> {
        let button = dom::require_id(document, THEME_TOGGLE_ID)?;
        let document = document.clone();
        let listener = EventListener::new(&button, "click", move |_event| {
            let next = current_theme(&document).toggled();
            let mut store = LocalStore::open();
            set_theme(&document, &mut store, next);
            navbar::refresh_shadow(&document, next);
            trace!("theme: toggled", next.as_str());
        });
        Ok(Self {
            _listener: listener,
        })
    }
}
