use super::helpers;
use crate::constants::{DUST_RGB, EMBER_COLD_RGB, EMBER_HOT_RGB, FRAME_RGB, HALO_RGB};
use glam::{Mat4, Vec2, Vec3};
use reveal_core::burn::{
    PAPER_BURN_EDGE, PAPER_BURN_FIRE, PAPER_BURN_NOISE_SCALE, SCROLL_BURN_EDGE, SCROLL_BURN_FIRE,
    SCROLL_BURN_NOISE_SCALE, WHITE_PAPER_CHAR, WHITE_PAPER_EDGE, WHITE_PAPER_FIRE,
};
use reveal_core::constants::{EMBER_SIZE, FRAME_EMISSIVE};
use reveal_core::{
    Bar, BackgroundState, EmberState, FrameState, ImageState, MouseLightState, ScrollBurnState,
};

/// Per-draw uniform block; mirrors `struct Quad` in quad.wgsl.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct QuadUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    a: [f32; 4],
    b: [f32; 4],
    c: [f32; 4],
    d: [f32; 4],
}

impl QuadUniforms {
    fn new(view_proj: Mat4, model: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            a: [0.0; 4],
            b: [0.0; 4],
            c: [0.0; 4],
            d: [0.0; 4],
        }
    }
}

#[inline]
fn placement(center: Vec3, size: Vec2) -> Mat4 {
    Mat4::from_translation(center) * Mat4::from_scale(size.extend(1.0))
}

#[inline]
fn rgb_w(rgb: Vec3, w: f32) -> [f32; 4] {
    [rgb.x, rgb.y, rgb.z, w]
}

pub(crate) fn pack_background(view_proj: Mat4, s: &BackgroundState) -> QuadUniforms {
    let mut u = QuadUniforms::new(view_proj, placement(s.position, s.size));
    u.a = [s.progress, s.time, 0.0, 0.0];
    u.c = rgb_w(PAPER_BURN_FIRE, PAPER_BURN_EDGE);
    u.d = [0.0, 0.0, 0.0, PAPER_BURN_NOISE_SCALE];
    u
}

pub(crate) fn pack_image(view_proj: Mat4, s: &ImageState) -> QuadUniforms {
    let mut u = QuadUniforms::new(view_proj, placement(s.world_position(), s.size * s.scale));
    u.a = [s.opacity, 0.0, 0.0, 0.0];
    u.b = [0.0, 0.0, s.feather, 0.0];
    u
}

pub(crate) fn pack_bar(view_proj: Mat4, frame: &FrameState, bar: &Bar) -> QuadUniforms {
    let mut u = QuadUniforms::new(
        view_proj,
        placement(frame.position + bar.center.extend(0.0), bar.size),
    );
    u.a = [frame.opacity, 0.0, 0.0, 0.0];
    u.c = rgb_w(Vec3::from(FRAME_RGB) * (1.0 + FRAME_EMISSIVE), 0.0);
    u
}

pub(crate) fn pack_ember(view_proj: Mat4, s: &EmberState) -> QuadUniforms {
    let mut u = QuadUniforms::new(
        view_proj,
        placement(s.position, Vec2::splat(EMBER_SIZE * s.scale)),
    );
    u.a = [s.opacity, s.time, s.intensity, s.pulse];
    u.c = rgb_w(Vec3::from(EMBER_HOT_RGB), 0.0);
    u.d = rgb_w(Vec3::from(EMBER_COLD_RGB), 0.0);
    u
}

pub(crate) fn pack_halo(view_proj: Mat4, s: &MouseLightState) -> QuadUniforms {
    let mut u = QuadUniforms::new(view_proj, placement(s.position, Vec2::splat(s.size)));
    u.a = [1.0, 0.0, 0.0, 0.0];
    u.c = rgb_w(Vec3::from(HALO_RGB), 0.0);
    u
}

pub(crate) fn pack_night_sky(view_proj: Mat4, s: &ScrollBurnState) -> QuadUniforms {
    let mut u = QuadUniforms::new(view_proj, placement(Vec3::new(0.0, 0.0, s.z), s.size));
    u.a = [s.progress, s.time, 0.0, 0.0];
    u.b = [s.mouse.x, s.mouse.y, 0.0, 0.0];
    u.c = rgb_w(SCROLL_BURN_FIRE, SCROLL_BURN_EDGE);
    u.d = [0.0, 0.0, 0.0, SCROLL_BURN_NOISE_SCALE];
    u
}

pub(crate) fn pack_white_paper(view_proj: Mat4, s: &ScrollBurnState) -> QuadUniforms {
    let mut u = QuadUniforms::new(view_proj, placement(Vec3::new(0.0, 0.0, s.z), s.size));
    u.a = [s.progress, s.time, 0.0, 0.0];
    u.c = rgb_w(WHITE_PAPER_FIRE, WHITE_PAPER_EDGE);
    u.d = rgb_w(WHITE_PAPER_CHAR, 0.0);
    u
}

pub(crate) fn pack_dust(view_proj: Mat4, size: f32, opacity: f32) -> QuadUniforms {
    let mut u = QuadUniforms::new(view_proj, Mat4::IDENTITY);
    u.a = [opacity, 0.0, 0.0, 0.0];
    u.b = [0.0, 0.0, size, 0.0];
    u.c = rgb_w(Vec3::from(DUST_RGB), 0.0);
    u
}

/// One uniform buffer plus the bind group pairing it with a texture.
pub(crate) struct QuadSlot {
    label: &'static str,
    buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

impl QuadSlot {
    pub(crate) fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
        label: &'static str,
    ) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<QuadUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = bind(device, layout, &buffer, view, sampler, label);
        Self {
            label,
            buffer,
            bind_group,
        }
    }

    /// Point the slot at a different texture (a freshly loaded asset).
    pub(crate) fn rebind(
        &mut self,
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
    ) {
        self.bind_group = bind(device, layout, &self.buffer, view, sampler, self.label);
    }

    pub(crate) fn write(&self, queue: &wgpu::Queue, uniforms: &QuadUniforms) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(uniforms));
    }
}

fn bind(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    buffer: &wgpu::Buffer,
    view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
    label: &str,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

const DUST_ATTRIBS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

pub(crate) struct QuadPipelines {
    pub(crate) bgl: wgpu::BindGroupLayout,
    pub(crate) paper_burn: wgpu::RenderPipeline,
    pub(crate) scroll_burn: wgpu::RenderPipeline,
    pub(crate) white_paper: wgpu::RenderPipeline,
    pub(crate) feathered: wgpu::RenderPipeline,
    pub(crate) solid: wgpu::RenderPipeline,
    pub(crate) ember: wgpu::RenderPipeline,
    pub(crate) halo: wgpu::RenderPipeline,
    pub(crate) dust: wgpu::RenderPipeline,
}

impl QuadPipelines {
    pub(crate) fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let burn_src = format!("{}\n{}", reveal_core::QUAD_WGSL, reveal_core::BURN_WGSL);
        let sprites_src = format!("{}\n{}", reveal_core::QUAD_WGSL, reveal_core::SPRITES_WGSL);
        let burn_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("burn_shader"),
            source: wgpu::ShaderSource::Wgsl(burn_src.into()),
        });
        let sprites_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sprites_shader"),
            source: wgpu::ShaderSource::Wgsl(sprites_src.into()),
        });

        let both = wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT;
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("quad_bgl"),
            entries: &[
                helpers::uniform_entry(0, both),
                helpers::texture_entry(1, wgpu::ShaderStages::FRAGMENT),
                helpers::sampler_entry(2, wgpu::ShaderStages::FRAGMENT),
            ],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("quad_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let alpha = wgpu::BlendState::ALPHA_BLENDING;
        let quad = |shader: &wgpu::ShaderModule, vs: &str, fs: &str, blend| {
            helpers::make_quad_pipeline(device, &layout, shader, vs, fs, &[], format, blend)
        };
        let dust_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 3]>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &DUST_ATTRIBS,
        };

        Self {
            paper_burn: quad(&burn_shader, "vs_paper_burn", "fs_paper_burn", alpha),
            scroll_burn: quad(&burn_shader, "vs_quad", "fs_scroll_burn", alpha),
            white_paper: quad(&burn_shader, "vs_quad", "fs_white_paper", alpha),
            feathered: quad(&sprites_shader, "vs_quad", "fs_feathered", alpha),
            solid: quad(&sprites_shader, "vs_quad", "fs_solid", alpha),
            ember: quad(&sprites_shader, "vs_quad", "fs_ember", helpers::ADDITIVE),
            halo: quad(&sprites_shader, "vs_quad", "fs_halo", helpers::ADDITIVE),
            dust: helpers::make_quad_pipeline(
                device,
                &layout,
                &sprites_shader,
                "vs_dust",
                "fs_dust",
                &[dust_layout],
                format,
                helpers::ADDITIVE,
            ),
            bgl,
        }
    }
}
