use crate::dom;
use crate::input::Clock;
use reveal_core::{Scene, SignalWriter};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Publish the page offset on every scroll event. `scroll` is the only
/// writer of the scroll signal.
pub fn wire_scroll(window: &web::Window, scroll: SignalWriter<f32>) {
    scroll.set(dom::scroll_y(window));
    let wnd = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        scroll.set(dom::scroll_y(&wnd));
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Swallow wheel and touch scrolling while the scene holds the scroll lock.
/// The frame loop also snaps the offset back, this just avoids the jitter.
pub fn wire_scroll_lock(window: &web::Window, scene: Rc<RefCell<Scene>>, clock: Clock) {
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    for event in ["wheel", "touchmove"] {
        let scene = scene.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if scene.borrow().director().scroll_locked(clock.now()) {
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        closure.forget();
    }
}
