//! Small window and document queries.

use folio_core::{Rect, Viewport};
use wasm_bindgen::JsValue;

fn js_number(value: Result<JsValue, JsValue>) -> Option<f64> {
    value.ok().and_then(|v| v.as_f64())
}

/// Current window size, or the default viewport outside a browser window.
pub fn window_viewport() -> Viewport {
    let Some(window) = web_sys::window() else {
        return Viewport::default();
    };
    match (js_number(window.inner_width()), js_number(window.inner_height())) {
        (Some(width), Some(height)) => Viewport::new(width, height),
        _ => Viewport::default(),
    }
}

/// Vertical scroll offset in pixels.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Total scrollable document height.
pub fn document_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map_or(0.0, |e| f64::from(e.scroll_height()))
}

/// Milliseconds since page load.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or_else(js_sys::Date::now, |p| p.now())
}

/// `navigator.hardwareConcurrency`, when reported.
pub fn hardware_concurrency() -> Option<u32> {
    let cores = web_sys::window()?.navigator().hardware_concurrency();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    (cores >= 1.0).then_some(cores as u32)
}

pub fn device_pixel_ratio() -> f64 {
    web_sys::window().map_or(1.0, |w| w.device_pixel_ratio())
}

pub fn dom_rect(element: &web_sys::Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Smoothly scrolls the element with `id` into view.
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        tracing::warn!(id, "scroll target not found");
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
