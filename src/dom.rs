use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up an element by id. Missing or non-HTML elements yield `None`.
#[inline]
pub fn html_element(document: &web::Document, element_id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_class(el: &web::HtmlElement, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

/// Current vertical scroll offset in CSS pixels.
#[inline]
pub fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

#[inline]
pub fn scroll_to_y(window: &web::Window, y: f32) {
    window.scroll_to_with_x_and_y(0.0, y as f64);
}

/// Stop the browser from restoring an old offset on reload; the page has
/// to start at the top while the scroll lock holds.
pub fn disable_scroll_restoration(window: &web::Window) {
    if let Ok(history) = window.history() {
        _ = history.set_scroll_restoration(web::ScrollRestoration::Manual);
    }
}
