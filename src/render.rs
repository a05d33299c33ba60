mod helpers;
mod post;
mod quads;
mod targets;

use crate::assets::Asset;
use crate::constants::{BLOOM_STRENGTH, BLOOM_THRESHOLD, CLEAR_RGB, PAPER_GRID_VERTICES, QUAD_VERTICES};
use post::{PostBindGroups, PostResources, PostUniforms};
use quads::{QuadPipelines, QuadSlot, QuadUniforms};
use reveal_core::constants::PROGRESS_EPSILON;
use reveal_core::{Particle, SceneFrame, Viewport};
use targets::{RenderTargets, HDR_FORMAT};
use web_sys as web;

struct LoadedTexture {
    #[allow(dead_code)]
    texture: wgpu::Texture,
    view: wgpu::TextureView,
}

/// Uniform slots for everything the scene draws, in draw order.
struct SceneSlots {
    background: QuadSlot,
    bars: [QuadSlot; 8],
    left_image: QuadSlot,
    right_image: QuadSlot,
    night_sky: QuadSlot,
    dust: QuadSlot,
    ember: QuadSlot,
    halo: QuadSlot,
    white_paper: QuadSlot,
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    post: PostResources,
    post_groups: PostBindGroups,

    quads: QuadPipelines,
    slots: SceneSlots,
    #[allow(dead_code)]
    fallback: LoadedTexture,
    textures: fnv::FnvHashMap<Asset, LoadedTexture>,
    dust_buffer: wgpu::Buffer,
    dust_capacity: usize,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, dust_capacity: usize) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height);
        let linear_sampler = helpers::linear_sampler(&device, "linear_sampler");

        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(reveal_core::POST_WGSL.into()),
        });
        let post = post::create_post_resources(&device, &post_shader, HDR_FORMAT, format);
        let post_groups = PostBindGroups::new(&device, &post, &targets, &linear_sampler);

        let quads = QuadPipelines::new(&device, HDR_FORMAT);

        // Untextured draws and not-yet-loaded assets sample a 1x1 white texel
        let (fallback_tex, fallback_view) = helpers::create_color_texture(
            &device,
            "fallback_tex",
            1,
            1,
            wgpu::TextureFormat::Rgba8UnormSrgb,
            wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        );
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &fallback_tex,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &[255u8; 4],
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4),
                rows_per_image: Some(1),
            },
            wgpu::Extent3d {
                width: 1,
                height: 1,
                depth_or_array_layers: 1,
            },
        );

        let slot = |label: &'static str| {
            QuadSlot::new(&device, &quads.bgl, &fallback_view, &linear_sampler, label)
        };
        let slots = SceneSlots {
            background: slot("background"),
            bars: std::array::from_fn(|_| slot("frame_bar")),
            left_image: slot("left_image"),
            right_image: slot("right_image"),
            night_sky: slot("night_sky"),
            dust: slot("dust"),
            ember: slot("ember"),
            halo: slot("halo"),
            white_paper: slot("white_paper"),
        };

        let dust_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("dust_instances"),
            size: (dust_capacity.max(1) * std::mem::size_of::<[f32; 3]>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        log::info!("[gpu] ready {}x{} format={:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            linear_sampler,
            post,
            post_groups,
            quads,
            slots,
            fallback: LoadedTexture {
                texture: fallback_tex,
                view: fallback_view,
            },
            textures: fnv::FnvHashMap::default(),
            dust_buffer,
            dust_capacity: dust_capacity.max(1),
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_RGB[0],
                g: CLEAR_RGB[1],
                b: CLEAR_RGB[2],
                a: 1.0,
            },
        })
    }

    /// Copy a decoded bitmap into a GPU texture and bind it to the draw
    /// that uses it.
    pub fn upload_texture(&mut self, asset: Asset, bitmap: &web::ImageBitmap) {
        let size = wgpu::Extent3d {
            width: bitmap.width().max(1),
            height: bitmap.height().max(1),
            depth_or_array_layers: 1,
        };
        let (texture, view) = helpers::create_color_texture(
            &self.device,
            asset.url(),
            size.width,
            size.height,
            wgpu::TextureFormat::Rgba8UnormSrgb,
            wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST
                | wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        self.queue.copy_external_image_to_texture(
            &wgpu::CopyExternalImageSourceInfo {
                source: wgpu::ExternalImageSource::ImageBitmap(bitmap.clone()),
                origin: wgpu::Origin2d::ZERO,
                flip_y: false,
            },
            wgpu::CopyExternalImageDestInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
                color_space: wgpu::PredefinedColorSpace::Srgb,
                premultiplied_alpha: false,
            },
            size,
        );
        let slot = match asset {
            Asset::RevealBg => &mut self.slots.background,
            Asset::StatueLeft => &mut self.slots.left_image,
            Asset::StatueRight => &mut self.slots.right_image,
            Asset::NightSky => &mut self.slots.night_sky,
            Asset::OldPaper => &mut self.slots.white_paper,
        };
        slot.rebind(&self.device, &self.quads.bgl, &view, &self.linear_sampler);
        self.textures.insert(asset, LoadedTexture { texture, view });
    }

    fn has_texture(&self, asset: Asset) -> bool {
        self.textures.contains_key(&asset)
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
            self.post_groups =
                PostBindGroups::new(&self.device, &self.post, &self.targets, &self.linear_sampler);
        }
    }

    /// Reconfigure after the surface was lost or went stale.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(
        &mut self,
        frame: &SceneFrame,
        particles: &[Particle],
        viewport: &Viewport,
    ) -> Result<(), wgpu::SurfaceError> {
        let surface_tex = self.surface.get_current_texture()?;
        let view = surface_tex
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let view_proj = viewport.camera().view_proj();

        // Pack every visible draw first, then record them in order.
        let mut draws: smallvec::SmallVec<[(&QuadSlot, &wgpu::RenderPipeline, u32); 16]> =
            smallvec::SmallVec::new();

        let bg = &frame.background;
        if bg.progress > PROGRESS_EPSILON && self.has_texture(Asset::RevealBg) {
            self.slots
                .background
                .write(&self.queue, &quads::pack_background(view_proj, bg));
            draws.push((&self.slots.background, &self.quads.paper_burn, PAPER_GRID_VERTICES));
        }
        if frame.frame.opacity > 0.0 {
            for (slot, bar) in self.slots.bars.iter().zip(frame.frame.bars().iter()) {
                slot.write(&self.queue, &quads::pack_bar(view_proj, &frame.frame, bar));
                draws.push((slot, &self.quads.solid, QUAD_VERTICES));
            }
        }
        for (state, slot, asset) in [
            (&frame.left_image, &self.slots.left_image, Asset::StatueLeft),
            (&frame.right_image, &self.slots.right_image, Asset::StatueRight),
        ] {
            if state.opacity > 0.0 && self.has_texture(asset) {
                slot.write(&self.queue, &quads::pack_image(view_proj, state));
                draws.push((slot, &self.quads.feathered, QUAD_VERTICES));
            }
        }
        if frame.night_sky.progress > PROGRESS_EPSILON && self.has_texture(Asset::NightSky) {
            self.slots
                .night_sky
                .write(&self.queue, &quads::pack_night_sky(view_proj, &frame.night_sky));
            draws.push((&self.slots.night_sky, &self.quads.scroll_burn, QUAD_VERTICES));
        }
        let dust_count = particles.len().min(self.dust_capacity);
        let draw_dust = frame.dust_opacity > 0.0 && dust_count > 0;
        if draw_dust {
            let centres: Vec<[f32; 3]> = particles[..dust_count]
                .iter()
                .map(|p| p.position.to_array())
                .collect();
            self.queue
                .write_buffer(&self.dust_buffer, 0, bytemuck::cast_slice(&centres));
            self.slots.dust.write(
                &self.queue,
                &quads::pack_dust(view_proj, frame.dust_size, frame.dust_opacity),
            );
        }
        if frame.ember.opacity > 0.0 {
            self.slots
                .ember
                .write(&self.queue, &quads::pack_ember(view_proj, &frame.ember));
        }
        self.slots
            .halo
            .write(&self.queue, &quads::pack_halo(view_proj, &frame.mouse_light));
        let draw_white_paper =
            frame.white_paper.progress > PROGRESS_EPSILON && self.has_texture(Asset::OldPaper);
        if draw_white_paper {
            self.slots
                .white_paper
                .write(&self.queue, &quads::pack_white_paper(view_proj, &frame.white_paper));
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            for (slot, pipeline, vertices) in &draws {
                rpass.set_pipeline(pipeline);
                rpass.set_bind_group(0, &slot.bind_group, &[]);
                rpass.draw(0..*vertices, 0..1);
            }
            if draw_dust {
                rpass.set_pipeline(&self.quads.dust);
                rpass.set_bind_group(0, &self.slots.dust.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.dust_buffer.slice(..));
                rpass.draw(0..QUAD_VERTICES, 0..dust_count as u32);
            }
            if frame.ember.opacity > 0.0 {
                rpass.set_pipeline(&self.quads.ember);
                rpass.set_bind_group(0, &self.slots.ember.bind_group, &[]);
                rpass.draw(0..QUAD_VERTICES, 0..1);
            }
            rpass.set_pipeline(&self.quads.halo);
            rpass.set_bind_group(0, &self.slots.halo.bind_group, &[]);
            rpass.draw(0..QUAD_VERTICES, 0..1);
            if draw_white_paper {
                rpass.set_pipeline(&self.quads.white_paper);
                rpass.set_bind_group(0, &self.slots.white_paper.bind_group, &[]);
                rpass.draw(0..QUAD_VERTICES, 0..1);
            }
        }

        let time = frame.background.time;
        let post_at = |resolution: [f32; 2], blur_dir: [f32; 2]| PostUniforms {
            resolution,
            time,
            _pad: 0.0,
            blur_dir,
            bloom_strength: BLOOM_STRENGTH,
            threshold: BLOOM_THRESHOLD,
        };
        let bloom_res = [
            self.targets.bloom_width as f32,
            self.targets.bloom_height as f32,
        ];
        self.queue.write_buffer(
            &self.post.main_uniforms,
            0,
            bytemuck::bytes_of(&post_at(bloom_res, [0.0, 0.0])),
        );
        self.queue.write_buffer(
            &self.post.blur_h_uniforms,
            0,
            bytemuck::bytes_of(&post_at(bloom_res, [1.0, 0.0])),
        );
        self.queue.write_buffer(
            &self.post.blur_v_uniforms,
            0,
            bytemuck::bytes_of(&post_at(bloom_res, [0.0, 1.0])),
        );

        // Bright pass: hdr -> bloom_a
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.bright_pipeline,
            &self.post_groups.hdr,
            None,
        );
        // Blur horizontal: bloom_a -> bloom_b
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.post_groups.from_bloom_a,
            None,
        );
        // Blur vertical: bloom_b -> bloom_a
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.post_groups.from_bloom_b,
            None,
        );
        // Composite to swapchain
        post::blit(
            &mut encoder,
            "composite",
            &view,
            self.clear_color,
            &self.post.composite_pipeline,
            &self.post_groups.hdr,
            Some(&self.post_groups.bloom_a_only),
        );

        self.queue.submit(Some(encoder.finish()));
        surface_tex.present();
        Ok(())
    }
}
