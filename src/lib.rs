//! Show a railway track diagram in a desktop window.
//!
//! On startup the diagram is decoded from a fixed path,
//! scaled to a fixed size and attached to a window.
//! The window stays open until the user closes it,
//! at which point the process exits.
//!
//! All window system and GPU state of the process is owned by a single [`Context`] object,
//! created once at startup.
//! The context must be created and used from the main thread,
//! and [`Context::run`] hands control to the event loop of the window system and never returns.
//!
//! # Example
//!
//! ```no_run
//! use track_display::Context;
//! use track_display::WindowOptions;
//! use track_display::track;
//!
//! fn main() -> Result<(), String> {
//! 	let image = track::load_track_image(track::TRACK_IMAGE_PATH)
//! 		.map_err(|e| e.to_string())?;
//!
//! 	let mut context = Context::new(track_display::wgpu::TextureFormat::Bgra8UnormSrgb)
//! 		.map_err(|e| e.to_string())?;
//!
//! 	let options = WindowOptions::default()
//! 		.set_size(track::DISPLAY_SIZE)
//! 		.set_resizable(false);
//! 	let window = context.create_window(track::WINDOW_TITLE, options)
//! 		.map_err(|e| e.to_string())?;
//! 	context.set_window_image(window, "spoor", &image)
//! 		.map_err(|e| e.to_string())?;
//!
//! 	context.run();
//! }
//! ```

mod backend;
mod color;
pub mod error;
mod image;
mod image_info;
pub mod track;

pub use self::backend::Context;
pub use self::backend::Window;
pub use self::backend::WindowOptions;
pub use self::color::Color;
pub use self::image::AsImageView;
pub use self::image::BoxImage;
pub use self::image::ImageView;
pub use self::image::image_info;
pub use self::image_info::ImageInfo;
pub use self::image_info::PixelFormat;

/// Re-export of the `wgpu` crate.
pub use wgpu;

/// Re-export of the `winit` crate.
pub use winit;

/// Identifier of a window.
pub use winit::window::WindowId;
