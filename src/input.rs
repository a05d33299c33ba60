use glam::Vec2;
use instant::Instant;
use reveal_core::{pointer_ndc, Viewport};
use web_sys as web;

/// Monotonic frame clock shared by the event handlers and the RAF loop, so
/// activation times and cue times live on one timeline.
#[derive(Clone, Copy)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Seconds since the page started.
    pub fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Pointer position in CSS pixels relative to the viewport.
#[inline]
pub fn pointer_client_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Pointer position in canvas NDC ([-1, 1], +y up).
#[inline]
pub fn pointer_canvas_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    pointer_ndc(x_css, y_css, rect.width() as f32, rect.height() as f32)
}

#[inline]
pub fn canvas_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    Viewport::from_pixels(canvas.width(), canvas.height())
}
