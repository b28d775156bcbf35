use std::fmt;

use wasm_bindgen::{JsCast, JsValue};

/// Why a controller could not be wired up. None of these are fatal to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    MissingElement { selector: &'static str },
    Unavailable(&'static str),
    Js(String),
}

impl MountError {
    pub fn missing(selector: &'static str) -> Self {
        MountError::MissingElement { selector }
    }

    /// Missing markup is expected on some pages and only warrants a warning.
    pub fn is_missing_markup(&self) -> bool {
        matches!(self, MountError::MissingElement { .. })
    }
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountError::MissingElement { selector } => write!(f, "no element matches `{selector}`"),
            MountError::Unavailable(what) => write!(f, "{what} is not available"),
            MountError::Js(message) => write!(f, "browser error: {message}"),
        }
    }
}

impl std::error::Error for MountError {}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        MountError::Js(js_err(value))
    }
}

pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Some(error) = error.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}
