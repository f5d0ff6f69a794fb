use std::borrow::Cow;

use crate::ImageInfo;
use crate::ImageView;
use crate::PixelFormat;

/// A GPU texture ready to be used with the rendering pipeline.
pub struct GpuImage {
	name: String,
	info: ImageInfo,
	bind_group: wgpu::BindGroup,
	_texture: wgpu::Texture,
	_sampler: wgpu::Sampler,
}

impl GpuImage {
	/// Create a [`GpuImage`] from an image buffer.
	///
	/// The pixel data is converted to tightly packed RGBA and uploaded through the queue.
	pub fn from_image(
		name: String,
		device: &wgpu::Device,
		queue: &wgpu::Queue,
		bind_group_layout: &wgpu::BindGroupLayout,
		image: &ImageView,
	) -> Self {
		let info = image.info();
		let data = rgba8_pixel_data(image);

		let size = wgpu::Extent3d {
			width: info.width,
			height: info.height,
			depth_or_array_layers: 1,
		};

		let texture = device.create_texture(&wgpu::TextureDescriptor {
			label: Some(&name),
			size,
			mip_level_count: 1,
			sample_count: 1,
			dimension: wgpu::TextureDimension::D2,
			format: wgpu::TextureFormat::Rgba8UnormSrgb,
			usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
			view_formats: &[],
		});

		queue.write_texture(
			wgpu::ImageCopyTexture {
				texture: &texture,
				mip_level: 0,
				origin: wgpu::Origin3d::ZERO,
				aspect: wgpu::TextureAspect::All,
			},
			&data,
			wgpu::ImageDataLayout {
				offset: 0,
				bytes_per_row: Some(4 * info.width),
				rows_per_image: Some(info.height),
			},
			size,
		);

		let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
			label: Some(&format!("{}_sampler", name)),
			address_mode_u: wgpu::AddressMode::ClampToEdge,
			address_mode_v: wgpu::AddressMode::ClampToEdge,
			address_mode_w: wgpu::AddressMode::ClampToEdge,
			mag_filter: wgpu::FilterMode::Linear,
			min_filter: wgpu::FilterMode::Linear,
			mipmap_filter: wgpu::FilterMode::Nearest,
			..Default::default()
		});

		let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
			label: Some(&format!("{}_bind_group", name)),
			layout: bind_group_layout,
			entries: &[
				wgpu::BindGroupEntry {
					binding: 0,
					resource: wgpu::BindingResource::TextureView(&texture.create_view(&Default::default())),
				},
				wgpu::BindGroupEntry {
					binding: 1,
					resource: wgpu::BindingResource::Sampler(&sampler),
				},
			],
		});

		Self {
			name,
			info,
			bind_group,
			_texture: texture,
			_sampler: sampler,
		}
	}

	/// Get the name of the image.
	#[allow(unused)]
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Get the image info.
	pub fn info(&self) -> &ImageInfo {
		&self.info
	}

	/// Get the bind group that should be used to render the image with the rendering pipeline.
	pub fn bind_group(&self) -> &wgpu::BindGroup {
		&self.bind_group
	}
}

/// Get the pixel data of an image as tightly packed RGBA.
///
/// Tightly packed RGBA input is passed through without copying.
/// Other formats are expanded row by row, honoring the strides of the view.
pub fn rgba8_pixel_data<'a>(image: &'a ImageView<'_>) -> Cow<'a, [u8]> {
	let info = image.info();
	let data = image.data();

	let stride_x = info.stride_x as usize;
	let stride_y = info.stride_y as usize;
	let width = info.width as usize;
	let height = info.height as usize;

	if info.pixel_format == PixelFormat::Rgba8 && stride_x == 4 && stride_y == 4 * width {
		return Cow::Borrowed(data);
	}

	let mut output = Vec::with_capacity(width * height * 4);
	for y in 0..height {
		let row = &data[y * stride_y..];
		for x in 0..width {
			let pixel = &row[x * stride_x..];
			match info.pixel_format {
				PixelFormat::Mono8 => output.extend_from_slice(&[pixel[0], pixel[0], pixel[0], 255]),
				PixelFormat::MonoAlpha8 => output.extend_from_slice(&[pixel[0], pixel[0], pixel[0], pixel[1]]),
				PixelFormat::Rgb8 => output.extend_from_slice(&[pixel[0], pixel[1], pixel[2], 255]),
				PixelFormat::Rgba8 => output.extend_from_slice(&[pixel[0], pixel[1], pixel[2], pixel[3]]),
			}
		}
	}
	Cow::Owned(output)
}

#[cfg(test)]
mod test {
	use super::*;
	use assert2::assert;

	#[test]
	fn packed_rgba_is_borrowed() {
		let data = [1, 2, 3, 4, 5, 6, 7, 8];
		let image = ImageView::new(ImageInfo::rgba8(2, 1), &data);
		let converted = rgba8_pixel_data(&image);
		assert!(matches!(converted, Cow::Borrowed(_)));
		assert!(*converted == data);
	}

	#[test]
	fn rgb_is_expanded_with_opaque_alpha() {
		let data = [1, 2, 3, 4, 5, 6];
		let image = ImageView::new(ImageInfo::rgb8(2, 1), &data);
		let converted = rgba8_pixel_data(&image);
		assert!(*converted == [1, 2, 3, 255, 4, 5, 6, 255]);
	}

	#[test]
	fn mono_is_replicated_over_rgb() {
		let data = [7, 9];
		let image = ImageView::new(ImageInfo::mono8(1, 2), &data);
		let converted = rgba8_pixel_data(&image);
		assert!(*converted == [7, 7, 7, 255, 9, 9, 9, 255]);
	}

	#[test]
	fn mono_alpha_keeps_alpha() {
		let data = [7, 128];
		let image = ImageView::new(ImageInfo::mono_alpha8(1, 1), &data);
		let converted = rgba8_pixel_data(&image);
		assert!(*converted == [7, 7, 7, 128]);
	}

	#[test]
	fn row_padding_is_skipped() {
		// Two RGB pixels per row with two bytes of padding at the end of each row.
		let data = [1, 2, 3, 4, 5, 6, 0, 0, 7, 8, 9, 10, 11, 12, 0, 0];
		let mut info = ImageInfo::rgb8(2, 2);
		info.stride_y = 8;
		let image = ImageView::new(info, &data);
		let converted = rgba8_pixel_data(&image);
		assert!(*converted == [1, 2, 3, 255, 4, 5, 6, 255, 7, 8, 9, 255, 10, 11, 12, 255]);
	}
}
