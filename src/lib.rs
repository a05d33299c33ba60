#![cfg(target_arch = "wasm32")]
use glam::Vec2;
use reveal_core::{signal, AppStore, CustomCursor, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Freeze every running animation when the page goes away.
fn wire_teardown(
    window: &web::Window,
    scene: Rc<RefCell<Scene>>,
    cursor: Rc<RefCell<CustomCursor>>,
) {
    let closure = Closure::wrap(Box::new(move || {
        scene.borrow_mut().teardown();
        cursor.borrow_mut().cancel();
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("reveal-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);
    dom::disable_scroll_restoration(&window);

    let clock = input::Clock::start();
    let scene = Rc::new(RefCell::new(Scene::landing()));
    let store = Rc::new(RefCell::new(AppStore::new()));
    let cursor = Rc::new(RefCell::new(CustomCursor::new()));
    let (pointer_tx, pointer_rx) = signal(Vec2::ZERO);
    let (scroll_tx, scroll_rx) = signal(0.0_f32);

    events::wire_scroll(&window, scroll_tx);
    events::wire_scroll_lock(&window, scene.clone(), clock);
    events::wire_input_handlers(
        events::InputWiring {
            canvas: canvas.clone(),
            clock,
            scene: scene.clone(),
            cursor: cursor.clone(),
            store: store.clone(),
        },
        pointer_tx,
    );
    events::wire_menu_toggle(&document, store.clone());
    wire_teardown(&window, scene.clone(), cursor.clone());

    // Textures stream in while the GPU comes up; the frame loop uploads them
    let asset_slots = Rc::new(RefCell::new(assets::AssetSlots::new()));
    assets::spawn_loads(&window, &asset_slots);

    // A missing WebGPU leaves the overlay and scroll choreography running
    let dust_capacity = scene.borrow().dust().particles().len();
    let gpu = frame::init_gpu(&canvas, dust_capacity).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        window: window.clone(),
        canvas: canvas.clone(),
        clock,
        scene,
        store,
        cursor,
        pointer: pointer_rx,
        scroll: scroll_rx,
        overlay: overlay::OverlayElements::find(&document),
        assets: asset_slots,
        gpu,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
