use crate::input;
use glam::Vec2;
use reveal_core::{AppStore, CursorVariant, CustomCursor, Scene, SignalWriter};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub clock: input::Clock,
    pub scene: Rc<RefCell<Scene>>,
    pub cursor: Rc<RefCell<CustomCursor>>,
    pub store: Rc<RefCell<AppStore>>,
}

/// `pointer` is the only writer of the pointer signal; it moves into the
/// pointermove handler.
pub fn wire_input_handlers(w: InputWiring, pointer: SignalWriter<Vec2>) {
    wire_pointermove(&w, pointer);
    wire_pointerdown(&w);
    wire_pointerup(&w);
}

/// Store the cursor variant and mirror it onto the custom cursor and the
/// canvas' native cursor. Click wins until the button is released.
fn apply_variant(w: &InputWiring, variant: CursorVariant, now: f64) {
    if !w.store.borrow_mut().set_cursor_variant(variant) {
        return;
    }
    w.cursor.borrow_mut().set_variant(variant, now);
    let native = if variant == CursorVariant::Default {
        ""
    } else {
        "pointer"
    };
    _ = w.canvas.style().set_property("cursor", native);
}

fn hover_variant(w: &InputWiring, ndc: Vec2) -> CursorVariant {
    let viewport = input::canvas_viewport(&w.canvas);
    if w.scene.borrow().ember_hit(&viewport, ndc) {
        CursorVariant::Hover
    } else {
        CursorVariant::Default
    }
}

fn wire_pointermove(w: &InputWiring, pointer: SignalWriter<Vec2>) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let now = w.clock.now();
        let ndc = input::pointer_canvas_ndc(&ev, &w.canvas);
        pointer.set(ndc);
        w.cursor
            .borrow_mut()
            .on_pointer_move(input::pointer_client_px(&ev), now);

        if w.store.borrow().state().cursor_variant != CursorVariant::Click {
            let variant = hover_variant(&w, ndc);
            apply_variant(&w, variant, now);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let now = w.clock.now();
        let ndc = input::pointer_canvas_ndc(&ev, &w.canvas);
        apply_variant(&w, CursorVariant::Click, now);

        let viewport = input::canvas_viewport(&w.canvas);
        w.scene.borrow_mut().press(&viewport, ndc);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let now = w.clock.now();
        let ndc = input::pointer_canvas_ndc(&ev, &w.canvas);

        let viewport = input::canvas_viewport(&w.canvas);
        if w.scene.borrow_mut().release(&viewport, ndc, now) {
            log::info!("[mouse] ember clicked at ({:.2},{:.2})", ndc.x, ndc.y);
        }

        let variant = hover_variant(&w, ndc);
        apply_variant(&w, variant, now);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
