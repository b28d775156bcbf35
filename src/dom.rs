use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, NodeList, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

use crate::error::MountError;

pub(crate) fn window() -> Result<Window, MountError> {
    web_sys::window().ok_or(MountError::Unavailable("window"))
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn document() -> Result<Document, MountError> {
    window()?
        .document()
        .ok_or(MountError::Unavailable("document"))
}

pub(crate) fn body(document: &Document) -> Result<HtmlElement, MountError> {
    document.body().ok_or(MountError::Unavailable("document body"))
}

pub(crate) fn root(document: &Document) -> Result<Element, MountError> {
    document
        .document_element()
        .ok_or(MountError::Unavailable("document element"))
}

pub(crate) fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub(crate) fn require(document: &Document, selector: &'static str) -> Result<Element, MountError> {
    query(document, selector).ok_or(MountError::missing(selector))
}

pub(crate) fn require_id(document: &Document, id: &'static str) -> Result<Element, MountError> {
    document
        .get_element_by_id(id)
        .ok_or(MountError::missing(id))
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

pub(crate) fn query_all_in(parent: &Element, selector: &str) -> Vec<Element> {
    parent
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let _ = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

pub(crate) fn set_style(element: &Element, property: &str, value: &str) {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let _ = element.style().set_property(property, value);
}

/// Smooth-scrolls to `#fragment`; a bare `#` or an unknown id is a no-op.
pub(crate) fn scroll_to_fragment(document: &Document, fragment: Option<&str>) -> bool {
    let Some(target) = fragment.and_then(|id| document.get_element_by_id(id)) else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}
