use crate::ImageInfo;
use crate::PixelFormat;
use crate::error::ImageDataError;
use crate::error::UnsupportedColorType;

/// Trait for borrowing image data from a struct.
pub trait AsImageView {
	/// Get an image view for the object.
	fn as_image_view(&self) -> Result<ImageView, ImageDataError>;
}

/// Get the image info of an object that implements [`AsImageView`].
pub fn image_info(image: &impl AsImageView) -> Result<ImageInfo, ImageDataError> {
	Ok(image.as_image_view()?.info())
}

/// Borrowed view of image data.
#[derive(Debug, Copy, Clone)]
pub struct ImageView<'a> {
	info: ImageInfo,
	data: &'a [u8],
}

impl<'a> ImageView<'a> {
	/// Create a new image view from image information and a data slice.
	pub fn new(info: ImageInfo, data: &'a [u8]) -> Self {
		Self { info, data }
	}

	/// Get the image information.
	pub fn info(&self) -> ImageInfo {
		self.info
	}

	/// Get the image data as byte slice.
	pub fn data(&self) -> &[u8] {
		self.data
	}
}

impl<'a> AsImageView for ImageView<'a> {
	fn as_image_view(&self) -> Result<ImageView, ImageDataError> {
		Ok(*self)
	}
}

/// Image backed by a `Box<[u8]>`.
#[derive(Debug, Clone)]
pub struct BoxImage {
	info: ImageInfo,
	data: Box<[u8]>,
}

impl BoxImage {
	/// Create a new image from image information and a boxed slice.
	pub fn new(info: ImageInfo, data: Box<[u8]>) -> Self {
		Self { info, data }
	}

	/// Get a non-owning view of the image data.
	pub fn as_view(&self) -> ImageView {
		ImageView::new(self.info, &self.data)
	}

	/// Get the image information.
	pub fn info(&self) -> ImageInfo {
		self.info
	}

	/// Get the image data as byte slice.
	pub fn data(&self) -> &[u8] {
		&self.data
	}
}

impl AsImageView for BoxImage {
	fn as_image_view(&self) -> Result<ImageView, ImageDataError> {
		Ok(self.as_view())
	}
}

impl From<ImageView<'_>> for BoxImage {
	fn from(other: ImageView) -> Self {
		Self {
			info: other.info,
			data: other.data.into(),
		}
	}
}

impl AsImageView for image::DynamicImage {
	fn as_image_view(&self) -> Result<ImageView, ImageDataError> {
		let info = dynamic_image_info(self)?;
		Ok(ImageView::new(info, self.as_bytes()))
	}
}

impl AsImageView for image::GrayImage {
	fn as_image_view(&self) -> Result<ImageView, ImageDataError> {
		Ok(ImageView::new(ImageInfo::mono8(self.width(), self.height()), self.as_raw()))
	}
}

impl AsImageView for image::GrayAlphaImage {
	fn as_image_view(&self) -> Result<ImageView, ImageDataError> {
		Ok(ImageView::new(ImageInfo::mono_alpha8(self.width(), self.height()), self.as_raw()))
	}
}

impl AsImageView for image::RgbImage {
	fn as_image_view(&self) -> Result<ImageView, ImageDataError> {
		Ok(ImageView::new(ImageInfo::rgb8(self.width(), self.height()), self.as_raw()))
	}
}

impl AsImageView for image::RgbaImage {
	fn as_image_view(&self) -> Result<ImageView, ImageDataError> {
		Ok(ImageView::new(ImageInfo::rgba8(self.width(), self.height()), self.as_raw()))
	}
}

/// Extract the [`ImageInfo`] from an [`image::DynamicImage`].
fn dynamic_image_info(image: &image::DynamicImage) -> Result<ImageInfo, ImageDataError> {
	let pixel_format = match image.color() {
		image::ColorType::L8    => PixelFormat::Mono8,
		image::ColorType::La8   => PixelFormat::MonoAlpha8,
		image::ColorType::Rgb8  => PixelFormat::Rgb8,
		image::ColorType::Rgba8 => PixelFormat::Rgba8,
		other => return Err(UnsupportedColorType { color_type: format!("{:?}", other) }.into()),
	};

	use image::GenericImageView;
	let (width, height) = image.dimensions();
	Ok(ImageInfo::new(pixel_format, width, height))
}

#[cfg(test)]
mod test {
	use super::*;
	use assert2::assert;
	use assert2::let_assert;

	#[test]
	fn rgb_buffer_as_image_view() {
		let buffer = image::RgbImage::from_pixel(4, 2, image::Rgb([1, 2, 3]));
		let_assert!(Ok(view) = buffer.as_image_view());
		assert!(view.info() == ImageInfo::rgb8(4, 2));
		assert!(view.data().len() == 4 * 2 * 3);
	}

	#[test]
	fn dynamic_image_as_image_view() {
		let buffer = image::GrayImage::from_pixel(3, 5, image::Luma([7]));
		let image = image::DynamicImage::ImageLuma8(buffer);
		let_assert!(Ok(view) = image.as_image_view());
		assert!(view.info().pixel_format == PixelFormat::Mono8);
		assert!(view.info().width == 3);
		assert!(view.info().height == 5);
	}

	#[test]
	fn sixteen_bit_images_are_rejected() {
		let buffer = image::ImageBuffer::<image::Rgb<u16>, _>::new(2, 2);
		let image = image::DynamicImage::ImageRgb16(buffer);
		let_assert!(Err(ImageDataError::UnsupportedColorType(error)) = image.as_image_view());
		assert!(error.color_type == "Rgb16");
	}

	#[test]
	fn box_image_round_trip() {
		let info = ImageInfo::mono8(2, 2);
		let image = BoxImage::new(info, Box::new([0, 1, 2, 3]));
		let_assert!(Ok(view) = image.as_image_view());
		assert!(view.info() == info);
		assert!(view.data() == [0, 1, 2, 3]);
	}
}
