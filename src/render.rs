use crate::constants::{BLOOM_STRENGTH, BLOOM_THRESHOLD, CLEAR_COLOR};
use crate::core::{Camera, ImageId, Layer, Scene};
use glam::Vec3;
use web_sys as web;

mod helpers;
mod particles;
mod photos;
mod post;
mod targets;
mod textures;

use particles::ParticleResources;
use photos::PhotoResources;
use post::{PostBindGroups, PostResources, PostUniforms};
use targets::{RenderTargets, HDR_FORMAT};
use textures::PhotoTextures;

// Drawn before the photos, then fireworks on top.
const BACK_LAYERS: [Layer; 4] = [Layer::Stars, Layer::Foliage, Layer::Ornaments, Layer::Snow];
const FRONT_LAYERS: [Layer; 1] = [Layer::Fireworks];

/// Matches `Camera` in `particles.wgsl` and `photos.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct CameraUniform {
    view_proj: [[f32; 4]; 4],
    right: [f32; 4],
    up: [f32; 4],
    // x = time
    params: [f32; 4],
}

impl CameraUniform {
    fn new(camera: &Camera, time: f32) -> Self {
        let rot = camera.orientation();
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            right: (rot * Vec3::X).extend(0.0).to_array(),
            up: (rot * Vec3::Y).extend(0.0).to_array(),
            params: [time, 0.0, 0.0, 0.0],
        }
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    post: PostResources,
    post_groups: PostBindGroups,

    camera_buffer: wgpu::Buffer,
    camera_bg: wgpu::BindGroup,
    particles: ParticleResources,
    photos: PhotoResources,
    textures: PhotoTextures,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, slot_count: usize) -> anyhow::Result<Self> {
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
                    // default limits avoid passing unknown fields to older WebGPU impls
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
        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
        });
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let post = post::create_post_resources(&device, &post_shader, HDR_FORMAT, format);
        let post_groups = post::create_bind_groups(&device, &post, &linear_sampler, &targets);

        let camera_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("camera_bgl"),
            entries: &[helpers::uniform_entry(0, wgpu::ShaderStages::VERTEX)],
        });
        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("camera_uniforms"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let camera_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera_bg"),
            layout: &camera_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let particles = ParticleResources::new(&device, &camera_bgl, HDR_FORMAT);
        let textures = PhotoTextures::new(&device, &queue);
        let photos = PhotoResources::new(&device, &camera_bgl, &textures, HDR_FORMAT, slot_count);
        log::info!("[render] WebGPU ready {}x{} ({:?})", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            linear_sampler,
            post,
            post_groups,
            camera_buffer,
            camera_bg,
            particles,
            photos,
            textures,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
            time_accum: 0.0,
        })
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
            self.post_groups = post::create_bind_groups(
                &self.device,
                &self.post,
                &self.linear_sampler,
                &self.targets,
            );
        }
    }

    /// Re-applies the surface configuration after `Lost`/`Outdated`.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn add_photo(&mut self, id: ImageId, bitmap: &web::ImageBitmap) {
        self.textures
            .insert_bitmap(&self.device, &self.queue, id, bitmap);
    }

    pub fn remove_photo(&mut self, id: ImageId) {
        if self.textures.remove(id) {
            log::debug!("[render] released photo {:?}", id);
        }
    }

    pub fn render(&mut self, dt_sec: f32, scene: &mut Scene) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        self.particles.sync(&self.device, &self.queue, scene);
        self.photos.sync(&self.queue, scene);
        let cam = CameraUniform::new(scene.camera(), self.time_accum);
        self.queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&cam));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
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
            self.particles
                .draw(&mut rpass, &self.camera_bg, &BACK_LAYERS);
            self.photos
                .draw(&mut rpass, &self.camera_bg, &self.textures, scene);
            self.particles
                .draw(&mut rpass, &self.camera_bg, &FRONT_LAYERS);
        }

        let uniforms = |blur_dir: [f32; 2]| PostUniforms {
            resolution: [self.width as f32 / 2.0, self.height as f32 / 2.0],
            time: self.time_accum,
            ambient: 0.0,
            blur_dir,
            bloom_strength: BLOOM_STRENGTH,
            threshold: BLOOM_THRESHOLD,
        };
        post::write_post_uniforms(&self.queue, &self.post.uniform_main, uniforms([0.0, 0.0]));
        post::write_post_uniforms(&self.queue, &self.post.uniform_blur_h, uniforms([1.0, 0.0]));
        post::write_post_uniforms(&self.queue, &self.post.uniform_blur_v, uniforms([0.0, 1.0]));

        // bright pass -> bloom_a
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.bright_pipeline,
            &self.post_groups.from_hdr,
            None,
        );
        // blur horizontal bloom_a -> bloom_b
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.post_groups.from_bloom_a,
            None,
        );
        // blur vertical bloom_b -> bloom_a
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.post_groups.from_bloom_b,
            None,
        );
        // composite to swapchain
        post::blit(
            &mut encoder,
            "composite",
            &view,
            self.clear_color,
            &self.post.composite_pipeline,
            &self.post_groups.from_hdr,
            Some(&self.post_groups.bloom_a_only),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
