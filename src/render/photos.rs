use super::helpers::{create_instance_buffer, make_instanced_pipeline};
use super::textures::PhotoTextures;
use crate::core::{PhotoInstance, Scene};
use wgpu;

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
    0 => Float32x4,
    1 => Float32x4,
    2 => Float32x4,
    3 => Float32x4,
    4 => Float32x4,
];

pub(crate) struct PhotoResources {
    pipeline: wgpu::RenderPipeline,
    instances: wgpu::Buffer,
    count: u32,
    /// Slot indices far to near, refreshed every sync.
    order: Vec<u32>,
}

impl PhotoResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        camera_bgl: &wgpu::BindGroupLayout,
        textures: &PhotoTextures,
        color_format: wgpu::TextureFormat,
        slot_count: usize,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("photos_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::PHOTOS_WGSL.into()),
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("photos_pl"),
            bind_group_layouts: &[camera_bgl, textures.layout()],
            push_constant_ranges: &[],
        });
        let pipeline = make_instanced_pipeline(
            device,
            "photos",
            &layout,
            &shader,
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<PhotoInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &INSTANCE_ATTRS,
            },
            color_format,
            wgpu::BlendState::ALPHA_BLENDING,
        );
        let instances = create_instance_buffer(
            device,
            "photo_instances",
            (slot_count * std::mem::size_of::<PhotoInstance>()) as u64,
        );
        Self {
            pipeline,
            instances,
            count: 0,
            order: Vec::with_capacity(slot_count),
        }
    }

    pub(crate) fn sync(&mut self, queue: &wgpu::Queue, scene: &mut Scene) {
        if let Some(data) = scene.photo_buffer_mut().take_dirty() {
            queue.write_buffer(&self.instances, 0, bytemuck::cast_slice(data));
            self.count = data.len() as u32;
        }
        // no depth buffer: draw far slots first so near ones overlap them
        let eye = scene.camera().eye;
        let slots = scene.slots().slots();
        self.order.clear();
        self.order.extend(0..slots.len() as u32);
        self.order.sort_by(|&a, &b| {
            let da = slots[a as usize].position.distance_squared(eye);
            let db = slots[b as usize].position.distance_squared(eye);
            db.total_cmp(&da)
        });
    }

    pub(crate) fn draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        camera_bg: &wgpu::BindGroup,
        textures: &PhotoTextures,
        scene: &Scene,
    ) {
        if self.count == 0 {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, camera_bg, &[]);
        pass.set_vertex_buffer(0, self.instances.slice(..));
        for &slot in self.order.iter().filter(|&&s| s < self.count) {
            pass.set_bind_group(1, textures.bind_group(scene.image_for_slot(slot as usize)), &[]);
            pass.draw(0..6, slot..slot + 1);
        }
    }
}
