//! Camera and viewport maths shared by layout, picking and rendering.
//!
//! Layout is always re-derived from the current [`Viewport`]; nothing caches
//! world-space sizes across a resize, so resizing back restores every
//! position exactly.

use crate::constants::{CAMERA_FOV_DEG, CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Visible world-space extent of the `z = 0` plane plus the backing pixel size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

impl Viewport {
    pub fn from_pixels(pixel_width: u32, pixel_height: u32) -> Self {
        let pw = pixel_width.max(1);
        let ph = pixel_height.max(1);
        let size = visible_size_at(0.0, pw as f32 / ph as f32);
        Self {
            width: size.x,
            height: size.y,
            pixel_width: pw,
            pixel_height: ph,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.pixel_width as f32 / self.pixel_height as f32
    }

    pub fn camera(&self) -> Camera {
        Camera::landing(self.aspect())
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_pixels(1280, 720)
    }
}

fn visible_size_at(z: f32, aspect: f32) -> Vec2 {
    let distance = (CAMERA_Z - z).max(CAMERA_ZNEAR);
    let height = 2.0 * (CAMERA_FOV_DEG.to_radians() * 0.5).tan() * distance;
    Vec2::new(height * aspect, height)
}

/// Right-handed perspective camera looking down -Z at the origin.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn landing(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through a point given in normalized device coordinates.
    pub fn ndc_ray(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let rd = (p1 - self.eye).normalize();
        (self.eye, rd)
    }
}

/// Canvas-relative CSS pixel position to NDC (x right, y up), clamped to
/// [-1, 1]. A zero-sized canvas maps everything to the centre.
pub fn pointer_ndc(x_css: f32, y_css: f32, width_css: f32, height_css: f32) -> Vec2 {
    if width_css <= 0.0 || height_css <= 0.0 {
        return Vec2::ZERO;
    }
    let nx = (x_css / width_css) * 2.0 - 1.0;
    let ny = 1.0 - (y_css / height_css) * 2.0;
    Vec2::new(nx.clamp(-1.0, 1.0), ny.clamp(-1.0, 1.0))
}

/// Intersection of a ray with the plane `z = plane_z` in front of the origin.
pub fn ray_plane_z(origin: Vec3, dir: Vec3, plane_z: f32) -> Option<Vec3> {
    if dir.z.abs() < 1e-6 {
        return None;
    }
    let t = (plane_z - origin.z) / dir.z;
    (t >= 0.0).then(|| origin + dir * t)
}

/// Whether an axis-aligned square of side `size` centred at `center` on the
/// plane `center.z` is hit by the pointer at `ndc`.
pub fn hits_square(camera: &Camera, ndc: Vec2, center: Vec3, size: f32) -> bool {
    let (ro, rd) = camera.ndc_ray(ndc);
    match ray_plane_z(ro, rd, center.z) {
        Some(p) => {
            let half = size * 0.5;
            (p.x - center.x).abs() <= half && (p.y - center.y).abs() <= half
        }
        None => false,
    }
}
