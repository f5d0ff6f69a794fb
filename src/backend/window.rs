use crate::Color;
use crate::WindowId;
use crate::backend::util::GpuImage;

/// A window displaying an image.
pub struct Window {
	/// The winit window.
	pub(crate) window: winit::window::Window,

	/// The window options.
	pub(crate) options: WindowOptions,

	/// The wgpu surface to render to.
	pub(crate) surface: wgpu::Surface,

	/// The configuration of the surface.
	pub(crate) surface_config: wgpu::SurfaceConfiguration,

	/// The image to display (if any).
	pub(crate) image: Option<GpuImage>,
}

impl Window {
	/// Get the window ID.
	pub fn id(&self) -> WindowId {
		self.window.id()
	}
}

/// Options for creating a new window.
#[derive(Debug, Clone)]
pub struct WindowOptions {
	/// The background color for the window.
	pub background_color: Color,

	/// The initial size of the window in pixel.
	///
	/// This may be ignored by a window manager.
	pub size: Option<[u32; 2]>,

	/// If true allow the window to be resized.
	///
	/// This may be ignored by a window manager.
	pub resizable: bool,
}

impl Default for WindowOptions {
	fn default() -> Self {
		Self {
			background_color: Color::BLACK,
			size: None,
			resizable: true,
		}
	}
}

impl WindowOptions {
	/// Set the background color of the window.
	///
	/// This function consumes and returns `self` to allow daisy chaining.
	pub fn set_background_color(mut self, background_color: Color) -> Self {
		self.background_color = background_color;
		self
	}

	/// Set the initial size of the window.
	///
	/// This property may be ignored by a window manager.
	///
	/// This function consumes and returns `self` to allow daisy chaining.
	pub fn set_size(mut self, size: [u32; 2]) -> Self {
		self.size = Some(size);
		self
	}

	/// Make the window resizable or not.
	///
	/// This property may be ignored by a window manager.
	///
	/// This function consumes and returns `self` to allow daisy chaining.
	pub fn set_resizable(mut self, resizable: bool) -> Self {
		self.resizable = resizable;
		self
	}
}
