use std::path::Path;

use anyhow::{Context, Result};

/// Decoded RGBA8 image data ready for upload
#[derive(Debug, Clone)]
pub struct TextureData {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl TextureData {
    /// 1x1 opaque white, the fallback for submeshes without a diffuse texture
    pub fn white() -> Self {
        Self {
            pixels: vec![255; 4],
            width: 1,
            height: 1,
        }
    }
}

/// Load and decode an image file to RGBA8.
///
/// The image is flipped vertically: OBJ texture coordinates have their
/// origin at the bottom left, wgpu textures at the top left.
pub fn load_texture_file(path: impl AsRef<Path>) -> Result<TextureData> {
    let path = path.as_ref();
    let img = image::open(path)
        .with_context(|| format!("Failed to decode texture: {:?}", path))?
        .flipv();

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(TextureData {
        pixels: rgba.into_raw(),
        width,
        height,
    })
}

/// Upload decoded image data to an sRGB GPU texture and return its view
pub fn create_gpu_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    data: &TextureData,
    label: &str,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: data.width,
            height: data.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::COPY_DST | wgpu::TextureUsages::TEXTURE_BINDING,
        view_formats: &[],
    });

    queue.write_texture(
        texture.as_image_copy(),
        &data.pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * data.width),
            rows_per_image: Some(data.height),
        },
        wgpu::Extent3d {
            width: data.width,
            height: data.height,
            depth_or_array_layers: 1,
        },
    );

    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
