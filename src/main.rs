use track_display::Context;
use track_display::WindowOptions;
use track_display::track;

fn main() -> Result<(), String> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	// The diagram is decoded and scaled before any window exists.
	let image = track::load_track_image(track::TRACK_IMAGE_PATH)
		.map_err(|e| e.to_string())?;
	log::info!("loaded track diagram from {:?}", track::TRACK_IMAGE_PATH);

	let mut context = Context::new(wgpu::TextureFormat::Bgra8UnormSrgb)
		.map_err(|e| format!("failed to initialize graphics context: {}", e))?;

	let options = WindowOptions::default()
		.set_size(track::DISPLAY_SIZE)
		.set_resizable(false);
	let window = context.create_window(track::WINDOW_TITLE, options)
		.map_err(|e| e.to_string())?;
	context.set_window_image(window, "spoor", &image)
		.map_err(|e| e.to_string())?;

	log::info!("showing track diagram at {}x{}", track::DISPLAY_SIZE[0], track::DISPLAY_SIZE[1]);
	context.run();
}
