//! Error types for the crate.

use crate::WindowId;

/// An error that can occur while loading the track diagram from disk.
#[derive(Debug)]
pub struct LoadImageError {
	/// The path of the image that failed to load.
	pub path: std::path::PathBuf,

	/// The error reported by the image library.
	pub error: image::ImageError,
}

/// An error that can occur while determining the pixel data of an image.
#[derive(Debug, Clone)]
pub enum ImageDataError {
	/// The image has a color type that can not be displayed.
	UnsupportedColorType(UnsupportedColorType),
}

/// The image has a color type that can not be displayed.
#[derive(Debug, Clone)]
pub struct UnsupportedColorType {
	/// The color type of the image.
	pub color_type: String,
}

/// An error that can occur while initializing the GPU state.
#[derive(Debug)]
pub enum GetDeviceError {
	/// No suitable video adapter was found.
	NoSuitableAdapterFound(NoSuitableAdapterFound),

	/// No suitable device was found on the selected adapter.
	NoSuitableDeviceFound(wgpu::RequestDeviceError),
}

/// No suitable video adapter was found.
#[derive(Debug, Clone)]
pub struct NoSuitableAdapterFound;

/// An error that can occur while creating a window.
#[derive(Debug)]
pub enum CreateWindowError {
	/// The underlying call to the OS failed.
	Os(winit::error::OsError),

	/// No render surface could be created for the window.
	CreateSurface(wgpu::CreateSurfaceError),
}

/// The window ID is not valid.
#[derive(Debug, Clone)]
pub struct InvalidWindowId {
	/// The offending window ID.
	pub window_id: WindowId,
}

/// An error that can occur while setting the image of a window.
#[derive(Debug)]
pub enum SetImageError {
	/// The window ID is not valid.
	InvalidWindowId(InvalidWindowId),

	/// The pixel data of the image could not be determined.
	ImageDataError(ImageDataError),
}

impl From<UnsupportedColorType> for ImageDataError {
	fn from(other: UnsupportedColorType) -> Self {
		Self::UnsupportedColorType(other)
	}
}

impl From<NoSuitableAdapterFound> for GetDeviceError {
	fn from(other: NoSuitableAdapterFound) -> Self {
		Self::NoSuitableAdapterFound(other)
	}
}

impl From<wgpu::RequestDeviceError> for GetDeviceError {
	fn from(other: wgpu::RequestDeviceError) -> Self {
		Self::NoSuitableDeviceFound(other)
	}
}

impl From<winit::error::OsError> for CreateWindowError {
	fn from(other: winit::error::OsError) -> Self {
		Self::Os(other)
	}
}

impl From<wgpu::CreateSurfaceError> for CreateWindowError {
	fn from(other: wgpu::CreateSurfaceError) -> Self {
		Self::CreateSurface(other)
	}
}

impl From<InvalidWindowId> for SetImageError {
	fn from(other: InvalidWindowId) -> Self {
		Self::InvalidWindowId(other)
	}
}

impl From<ImageDataError> for SetImageError {
	fn from(other: ImageDataError) -> Self {
		Self::ImageDataError(other)
	}
}

impl std::error::Error for LoadImageError {}
impl std::error::Error for ImageDataError {}
impl std::error::Error for UnsupportedColorType {}
impl std::error::Error for GetDeviceError {}
impl std::error::Error for NoSuitableAdapterFound {}
impl std::error::Error for CreateWindowError {}
impl std::error::Error for InvalidWindowId {}
impl std::error::Error for SetImageError {}

impl std::fmt::Display for LoadImageError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "failed to load image from {:?}: {}", self.path, self.error)
	}
}

impl std::fmt::Display for ImageDataError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::UnsupportedColorType(e) => e.fmt(f),
		}
	}
}

impl std::fmt::Display for UnsupportedColorType {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "unsupported color type: {}", self.color_type)
	}
}

impl std::fmt::Display for GetDeviceError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::NoSuitableAdapterFound(e) => e.fmt(f),
			Self::NoSuitableDeviceFound(e) => write!(f, "no suitable device found: {}", e),
		}
	}
}

impl std::fmt::Display for NoSuitableAdapterFound {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "no suitable video adapter found")
	}
}

impl std::fmt::Display for CreateWindowError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Os(e) => write!(f, "failed to create window: {}", e),
			Self::CreateSurface(e) => write!(f, "failed to create render surface for window: {}", e),
		}
	}
}

impl std::fmt::Display for InvalidWindowId {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "invalid window ID: {:?}", self.window_id)
	}
}

impl std::fmt::Display for SetImageError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::InvalidWindowId(e) => e.fmt(f),
			Self::ImageDataError(e) => e.fmt(f),
		}
	}
}
