pub(crate) const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

/// Offscreen colour targets: the full-resolution HDR scene and two
/// half-resolution bloom ping-pong textures.
pub(crate) struct RenderTargets {
    _hdr_tex: wgpu::Texture,
    pub(crate) hdr_view: wgpu::TextureView,
    _bloom_a: wgpu::Texture,
    pub(crate) bloom_a_view: wgpu::TextureView,
    _bloom_b: wgpu::Texture,
    pub(crate) bloom_b_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (bw, bh) = bloom_size(width, height);
        let (_hdr_tex, hdr_view) = hdr_target(device, "hdr_tex", width, height);
        let (_bloom_a, bloom_a_view) = hdr_target(device, "bloom_a", bw, bh);
        let (_bloom_b, bloom_b_view) = hdr_target(device, "bloom_b", bw, bh);
        Self {
            _hdr_tex,
            hdr_view,
            _bloom_a,
            bloom_a_view,
            _bloom_b,
            bloom_b_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height);
    }
}

fn hdr_target(
    device: &wgpu::Device,
    label: &str,
    width: u32,
    height: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: HDR_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        view_formats: &[],
    });
    let view = tex.create_view(&Default::default());
    (tex, view)
}

/// Bloom runs at half resolution.
#[inline]
pub(crate) fn bloom_size(width: u32, height: u32) -> (u32, u32) {
    ((width.max(1) / 2).max(1), (height.max(1) / 2).max(1))
}
