use super::helpers::{create_instance_buffer, make_instanced_pipeline, ADDITIVE_BLENDING};
use crate::constants::MIN_INSTANCE_CAPACITY;
use crate::core::{Layer, ParticleInstance, Scene};
use wgpu;

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
    0 => Float32x3,
    1 => Float32,
    2 => Float32x4,
    3 => Float32,
    4 => Uint32,
];

fn instance_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<ParticleInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &INSTANCE_ATTRS,
    }
}

struct LayerGpu {
    layer: Layer,
    buffer: wgpu::Buffer,
    capacity: usize,
    count: u32,
}

/// Sprite pipelines plus one growable instance buffer per layer.
pub(crate) struct ParticleResources {
    additive: wgpu::RenderPipeline,
    alpha: wgpu::RenderPipeline,
    layers: Vec<LayerGpu>,
}

impl ParticleResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        camera_bgl: &wgpu::BindGroupLayout,
        color_format: wgpu::TextureFormat,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particles_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::PARTICLES_WGSL.into()),
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("particles_pl"),
            bind_group_layouts: &[camera_bgl],
            push_constant_ranges: &[],
        });
        let additive = make_instanced_pipeline(
            device,
            "particles_additive",
            &layout,
            &shader,
            instance_layout(),
            color_format,
            ADDITIVE_BLENDING,
        );
        let alpha = make_instanced_pipeline(
            device,
            "particles_alpha",
            &layout,
            &shader,
            instance_layout(),
            color_format,
            wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING,
        );
        let layers = Layer::ALL
            .iter()
            .map(|&layer| LayerGpu {
                layer,
                buffer: create_instance_buffer(
                    device,
                    "particle_instances",
                    (MIN_INSTANCE_CAPACITY * std::mem::size_of::<ParticleInstance>()) as u64,
                ),
                capacity: MIN_INSTANCE_CAPACITY,
                count: 0,
            })
            .collect();
        Self {
            additive,
            alpha,
            layers,
        }
    }

    /// Uploads every layer the scene rewrote since the last call.
    pub(crate) fn sync(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, scene: &mut Scene) {
        for gpu in &mut self.layers {
            let Some(data) = scene.layer_buffer_mut(gpu.layer).take_dirty() else {
                continue;
            };
            if data.len() > gpu.capacity {
                let capacity = data.len().next_power_of_two().max(MIN_INSTANCE_CAPACITY);
                gpu.buffer = create_instance_buffer(
                    device,
                    "particle_instances",
                    (capacity * std::mem::size_of::<ParticleInstance>()) as u64,
                );
                gpu.capacity = capacity;
                log::debug!("[render] {:?} buffer grown to {}", gpu.layer, capacity);
            }
            if !data.is_empty() {
                queue.write_buffer(&gpu.buffer, 0, bytemuck::cast_slice(data));
            }
            gpu.count = data.len() as u32;
        }
    }

    pub(crate) fn draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        camera_bg: &wgpu::BindGroup,
        layers: &[Layer],
    ) {
        for gpu in self.layers.iter().filter(|l| layers.contains(&l.layer)) {
            if gpu.count == 0 {
                continue;
            }
            let pipeline = match gpu.layer {
                Layer::Ornaments => &self.alpha,
                _ => &self.additive,
            };
            pass.set_pipeline(pipeline);
            pass.set_bind_group(0, camera_bg, &[]);
            pass.set_vertex_buffer(0, gpu.buffer.slice(..));
            pass.draw(0..6, 0..gpu.count);
        }
    }
}
