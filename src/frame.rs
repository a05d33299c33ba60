use crate::assets::{Asset, AssetSlots};
use crate::dom;
use crate::input;
use crate::overlay::OverlayElements;
use crate::render;
use glam::Vec2;
use reveal_core::{AppStore, CustomCursor, Scene, SignalReader};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Offsets closer than this to the lock anchor are left alone
const SCROLL_SNAP_TOLERANCE_PX: f32 = 0.5;

pub struct FrameContext {
    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub clock: input::Clock,

    pub scene: Rc<RefCell<Scene>>,
    pub store: Rc<RefCell<AppStore>>,
    pub cursor: Rc<RefCell<CustomCursor>>,
    pub pointer: SignalReader<Vec2>,
    pub scroll: SignalReader<f32>,

    pub overlay: OverlayElements,
    pub assets: Rc<RefCell<AssetSlots>>,
    pub gpu: Option<render::GpuState>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.now();
        let viewport = input::canvas_viewport(&self.canvas);

        self.take_loaded_assets();

        let frame = self.scene.borrow_mut().update(
            now,
            self.pointer.get(),
            self.scroll.get(),
            viewport,
        );

        if let Some(anchor) = frame.scroll_override {
            if (dom::scroll_y(&self.window) - anchor).abs() > SCROLL_SNAP_TOLERANCE_PX {
                dom::scroll_to_y(&self.window, anchor);
            }
        }

        let cursor = self.cursor.borrow_mut().update(now);
        let state = self.store.borrow().state();
        self.overlay.apply(&frame.overlay, &cursor, state);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let scene = self.scene.borrow();
            match g.render(&frame, scene.dust().particles(), &viewport) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }

    /// Hand freshly decoded textures to the GPU and the scene, and clear the
    /// loading flag once every request has settled.
    fn take_loaded_assets(&mut self) {
        let (decoded, settled) = {
            let mut slots = self.assets.borrow_mut();
            (slots.take_decoded(), slots.all_settled())
        };
        for (asset, bitmap) in decoded {
            let aspect = bitmap.width() as f32 / bitmap.height().max(1) as f32;
            match asset {
                Asset::StatueLeft => self.scene.borrow_mut().set_image_aspect(true, aspect),
                Asset::StatueRight => self.scene.borrow_mut().set_image_aspect(false, aspect),
                _ => {}
            }
            if let Some(g) = &mut self.gpu {
                g.upload_texture(asset, &bitmap);
            }
            bitmap.close();
        }
        if settled && self.store.borrow_mut().set_loading(false) {
            log::info!("[assets] all requests settled");
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement, dust_capacity: usize) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, dust_capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
