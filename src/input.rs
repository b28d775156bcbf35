use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, TouchEvent};

use folio_core::Rect;

/// Viewport-relative layout box of `element`.
pub(crate) fn layout_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}

pub(crate) fn mouse_point(event: &Event) -> Option<(f32, f32)> {
    let event = event.dyn_ref::<MouseEvent>()?;
    Some((event.client_x() as f32, event.client_y() as f32))
}

/// Client position of the first active touch.
pub(crate) fn first_touch_point(event: &Event) -> Option<(f32, f32)> {
    let event = event.dyn_ref::<TouchEvent>()?;
    let touch = event.touches().get(0)?;
    Some((touch.client_x() as f32, touch.client_y() as f32))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PointerSource {
    Mouse,
    Touch,
}

impl PointerSource {
    pub(crate) fn point(self, event: &Event) -> Option<(f32, f32)> {
        match self {
            PointerSource::Mouse => mouse_point(event),
            PointerSource::Touch => first_touch_point(event),
        }
    }

    pub(crate) fn move_event(self) -> &'static str {
        match self {
            PointerSource::Mouse => "mousemove",
            PointerSource::Touch => "touchmove",
        }
    }

    pub(crate) fn end_event(self) -> &'static str {
        match self {
            PointerSource::Mouse => "mouseleave",
            PointerSource::Touch => "touchend",
        }
    }
}
