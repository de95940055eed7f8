use super::helpers::{make_post_pipeline, sampler_entry, texture_bind_group, texture_entry, uniform_entry};
use super::targets::RenderTargets;
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    pub(crate) resolution: [f32; 2],
    pub(crate) time: f32,
    pub(crate) ambient: f32,
    pub(crate) blur_dir: [f32; 2],
    pub(crate) bloom_strength: f32,
    pub(crate) threshold: f32,
}

pub(crate) struct PostResources {
    pub(crate) bgl0: wgpu::BindGroupLayout, // tex+sampler+uniform
    pub(crate) bgl1: wgpu::BindGroupLayout, // tex+sampler
    // one buffer per blur direction: queued writes all land before submit
    pub(crate) uniform_main: wgpu::Buffer,
    pub(crate) uniform_blur_h: wgpu::Buffer,
    pub(crate) uniform_blur_v: wgpu::Buffer,
    pub(crate) bright_pipeline: wgpu::RenderPipeline,
    pub(crate) blur_pipeline: wgpu::RenderPipeline,
    pub(crate) composite_pipeline: wgpu::RenderPipeline,
}

/// Bind groups over the current render targets; rebuilt on resize.
pub(crate) struct PostBindGroups {
    pub(crate) from_hdr: wgpu::BindGroup,
    pub(crate) from_bloom_a: wgpu::BindGroup,
    pub(crate) from_bloom_b: wgpu::BindGroup,
    pub(crate) bloom_a_only: wgpu::BindGroup,
}

pub(crate) fn create_post_resources(
    device: &wgpu::Device,
    post_shader: &wgpu::ShaderModule,
    bloom_format: wgpu::TextureFormat,
    swap_format: wgpu::TextureFormat,
) -> PostResources {
    let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl0"),
        entries: &[
            texture_entry(0),
            sampler_entry(1),
            uniform_entry(2, wgpu::ShaderStages::FRAGMENT),
        ],
    });
    let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl1"),
        entries: &[texture_entry(0), sampler_entry(1)],
    });
    let uniform = |label: &str| {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<PostUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    };
    let pl_bright_blur = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_0"),
        bind_group_layouts: &[&bgl0],
        push_constant_ranges: &[],
    });
    let pl_composite = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_comp"),
        bind_group_layouts: &[&bgl0, &bgl1],
        push_constant_ranges: &[],
    });
    let bright_pipeline = make_post_pipeline(
        device,
        &pl_bright_blur,
        post_shader,
        "fs_bright",
        bloom_format,
        None,
    );
    let blur_pipeline = make_post_pipeline(
        device,
        &pl_bright_blur,
        post_shader,
        "fs_blur",
        bloom_format,
        None,
    );
    let composite_pipeline = make_post_pipeline(
        device,
        &pl_composite,
        post_shader,
        "fs_composite",
        swap_format,
        Some(wgpu::BlendState::REPLACE),
    );

    PostResources {
        bgl0,
        bgl1,
        uniform_main: uniform("post_uniforms"),
        uniform_blur_h: uniform("post_uniforms_blur_h"),
        uniform_blur_v: uniform("post_uniforms_blur_v"),
        bright_pipeline,
        blur_pipeline,
        composite_pipeline,
    }
}

pub(crate) fn create_bind_groups(
    device: &wgpu::Device,
    post: &PostResources,
    sampler: &wgpu::Sampler,
    targets: &RenderTargets,
) -> PostBindGroups {
    let with_uniforms = |label: &str, view: &wgpu::TextureView, uniforms: &wgpu::Buffer| {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &post.bgl0,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: uniforms.as_entire_binding(),
                },
            ],
        })
    };
    PostBindGroups {
        from_hdr: with_uniforms("bg_hdr", &targets.hdr_view, &post.uniform_main),
        from_bloom_a: with_uniforms("bg_from_bloom_a", &targets.bloom_a_view, &post.uniform_blur_h),
        from_bloom_b: with_uniforms("bg_from_bloom_b", &targets.bloom_b_view, &post.uniform_blur_v),
        bloom_a_only: texture_bind_group(
            device,
            "bg_bloom_a_only",
            &post.bgl1,
            &targets.bloom_a_view,
            sampler,
        ),
    }
}

#[inline]
pub(crate) fn write_post_uniforms(
    queue: &wgpu::Queue,
    buffer: &wgpu::Buffer,
    uniforms: PostUniforms,
) {
    queue.write_buffer(buffer, 0, bytemuck::bytes_of(&uniforms));
}

pub(crate) fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    clear: wgpu::Color,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
    bg1: Option<&wgpu::BindGroup>,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg0, &[]);
    if let Some(g1) = bg1 {
        r.set_bind_group(1, g1, &[]);
    }
    r.draw(0..3, 0..1);
}
