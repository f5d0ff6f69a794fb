//! The track diagram shown by the display window.

use std::path::Path;

use crate::error::LoadImageError;

/// The path of the track diagram image.
pub const TRACK_IMAGE_PATH: &str = "/img/spoor.png";

/// The size at which the diagram is displayed, in pixels.
pub const DISPLAY_SIZE: [u32; 2] = [800, 400];

/// The title of the display window.
pub const WINDOW_TITLE: &str = "Affichage de la voie ferrée";

/// Load the track diagram from disk and scale it to [`DISPLAY_SIZE`].
///
/// The diagram is stretched to the exact display size,
/// the aspect ratio of the source file is not preserved.
///
/// There is no fallback for a missing or undecodable file.
/// The caller is expected to propagate the error and terminate.
pub fn load_track_image(path: impl AsRef<Path>) -> Result<image::RgbaImage, LoadImageError> {
	let path = path.as_ref();
	let image = image::open(path).map_err(|error| LoadImageError { path: path.into(), error })?;
	let image = image.resize_exact(DISPLAY_SIZE[0], DISPLAY_SIZE[1], image::imageops::FilterType::CatmullRom);
	Ok(image.to_rgba8())
}

#[cfg(test)]
mod test {
	use super::*;
	use assert2::assert;
	use assert2::let_assert;

	fn test_path(name: &str) -> std::path::PathBuf {
		std::env::temp_dir().join(format!("track-display-{}-{}.png", name, std::process::id()))
	}

	#[test]
	fn loaded_image_has_display_size() {
		let path = test_path("valid");
		let source = image::RgbaImage::from_pixel(37, 123, image::Rgba([255, 0, 0, 255]));
		let_assert!(Ok(()) = source.save(&path));

		let_assert!(Ok(image) = load_track_image(&path));
		assert!(image.width() == DISPLAY_SIZE[0]);
		assert!(image.height() == DISPLAY_SIZE[1]);

		let _ = std::fs::remove_file(&path);
	}

	#[test]
	fn missing_file_reports_the_path() {
		let path = test_path("missing");
		let_assert!(Err(error) = load_track_image(&path));
		assert!(error.path == path);
		assert!(error.to_string().contains("missing"));
	}

	#[test]
	fn corrupt_file_is_an_error() {
		let path = test_path("corrupt");
		let_assert!(Ok(()) = std::fs::write(&path, b"not actually a png"));
		let_assert!(Err(error) = load_track_image(&path));
		assert!(error.path == path);
		let _ = std::fs::remove_file(&path);
	}
}
