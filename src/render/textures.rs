use super::helpers::{sampler_entry, texture_bind_group, texture_entry};
use crate::constants::PLACEHOLDER_RGBA;
use crate::core::ImageId;
use fnv::FnvHashMap;
use web_sys as web;
use wgpu;

const PHOTO_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// Photo textures keyed by image id, with a placeholder for slots whose
/// image is missing or still decoding.
pub(crate) struct PhotoTextures {
    layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    _placeholder: wgpu::Texture,
    placeholder_bg: wgpu::BindGroup,
    loaded: FnvHashMap<ImageId, (wgpu::Texture, wgpu::BindGroup)>,
}

impl PhotoTextures {
    pub(crate) fn new(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("photo_tex_bgl"),
            entries: &[texture_entry(0), sampler_entry(1)],
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("photo_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let size = wgpu::Extent3d {
            width: 1,
            height: 1,
            depth_or_array_layers: 1,
        };
        let placeholder = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("photo_placeholder"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: PHOTO_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &placeholder,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &PLACEHOLDER_RGBA,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4),
                rows_per_image: Some(1),
            },
            size,
        );
        let view = placeholder.create_view(&wgpu::TextureViewDescriptor::default());
        let placeholder_bg =
            texture_bind_group(device, "photo_placeholder_bg", &layout, &view, &sampler);
        Self {
            layout,
            sampler,
            _placeholder: placeholder,
            placeholder_bg,
            loaded: FnvHashMap::default(),
        }
    }

    pub(crate) fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    pub(crate) fn insert_bitmap(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        id: ImageId,
        bitmap: &web::ImageBitmap,
    ) {
        let size = wgpu::Extent3d {
            width: bitmap.width().max(1),
            height: bitmap.height().max(1),
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("photo"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: PHOTO_FORMAT,
            // external copies need RENDER_ATTACHMENT on the destination
            usage: wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST
                | wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        queue.copy_external_image_to_texture(
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
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bg = texture_bind_group(device, "photo_bg", &self.layout, &view, &self.sampler);
        if let Some((old, _)) = self.loaded.insert(id, (texture, bg)) {
            old.destroy();
        }
        log::info!("[render] photo {:?} ready ({}x{})", id, size.width, size.height);
    }

    pub(crate) fn remove(&mut self, id: ImageId) -> bool {
        match self.loaded.remove(&id) {
            Some((texture, _)) => {
                texture.destroy();
                true
            }
            None => false,
        }
    }

    /// Texture bind group for a slot; the placeholder until its image loads.
    pub(crate) fn bind_group(&self, id: Option<ImageId>) -> &wgpu::BindGroup {
        id.and_then(|id| self.loaded.get(&id))
            .map(|(_, bg)| bg)
            .unwrap_or(&self.placeholder_bg)
    }
}
