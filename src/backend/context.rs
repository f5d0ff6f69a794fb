use crate::AsImageView;
use crate::WindowId;
use crate::WindowOptions;
use crate::backend::util::GpuImage;
use crate::backend::window::Window;
use crate::error::CreateWindowError;
use crate::error::GetDeviceError;
use crate::error::InvalidWindowId;
use crate::error::NoSuitableAdapterFound;
use crate::error::SetImageError;

/// Internal shorthand type-alias for the correct [`winit::event_loop::EventLoop`].
///
/// Not for use in public APIs.
type EventLoop = winit::event_loop::EventLoop<()>;

impl From<crate::Color> for wgpu::Color {
	fn from(other: crate::Color) -> Self {
		Self {
			r: other.red,
			g: other.green,
			b: other.blue,
			a: other.alpha,
		}
	}
}

/// The application context managing all windows and the main event loop.
///
/// All window system and GPU state of the process is owned by this object.
/// It is created once at startup and consumed by [`run`](Self::run),
/// which hands control to the event loop and only returns by exiting the process.
pub struct Context {
	/// The wgpu instance to create surfaces with.
	instance: wgpu::Instance,

	/// The event loop to use.
	///
	/// Running the event loop consumes it,
	/// so from that point on this field is `None`.
	event_loop: Option<EventLoop>,

	/// The wgpu device to use.
	device: wgpu::Device,

	/// The wgpu command queue to use.
	queue: wgpu::Queue,

	/// The texture format used for window surfaces.
	surface_format: wgpu::TextureFormat,

	/// The bind group layout for the image specific bindings.
	image_bind_group_layout: wgpu::BindGroupLayout,

	/// The render pipeline to use for windows.
	window_pipeline: wgpu::RenderPipeline,

	/// The windows.
	windows: Vec<Window>,
}

impl Context {
	/// Create a new application context.
	///
	/// The context must be created and used from the main thread,
	/// and the [`run`](Self::run) function never returns,
	/// so a process can only ever run one context.
	pub fn new(surface_format: wgpu::TextureFormat) -> Result<Self, GetDeviceError> {
		let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
		let event_loop = EventLoop::new();

		let (device, queue) = futures::executor::block_on(get_device(&instance))?;

		let image_bind_group_layout = create_image_bind_group_layout(&device);

		let shader = device.create_shader_module(wgpu::include_wgsl!("../../shaders/shader.wgsl"));

		let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
			label: Some("track-display-pipeline-layout"),
			bind_group_layouts: &[&image_bind_group_layout],
			push_constant_ranges: &[],
		});

		let window_pipeline = create_render_pipeline(&device, &pipeline_layout, &shader, surface_format);

		Ok(Self {
			instance,
			event_loop: Some(event_loop),
			device,
			queue,
			surface_format,
			image_bind_group_layout,
			window_pipeline,
			windows: Vec::new(),
		})
	}

	/// Create a new window.
	pub fn create_window(&mut self, title: impl Into<String>, options: WindowOptions) -> Result<WindowId, CreateWindowError> {
		let event_loop = self.event_loop.as_ref().unwrap();

		let mut window = winit::window::WindowBuilder::new()
			.with_title(title)
			.with_resizable(options.resizable);

		if let Some(size) = options.size {
			let size = winit::dpi::LogicalSize::new(size[0], size[1]);
			window = window.with_inner_size(size);
		}

		let window = window.build(event_loop)?;

		let surface = unsafe { self.instance.create_surface(&window) }?;

		let size = window.inner_size();
		let surface_config = wgpu::SurfaceConfiguration {
			usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
			format: self.surface_format,
			width: size.width,
			height: size.height,
			present_mode: wgpu::PresentMode::AutoVsync,
			alpha_mode: wgpu::CompositeAlphaMode::Auto,
			view_formats: Vec::new(),
		};
		surface.configure(&self.device, &surface_config);

		let window = Window {
			window,
			options,
			surface,
			surface_config,
			image: None,
		};

		let window_id = window.id();
		self.windows.push(window);
		Ok(window_id)
	}

	/// Destroy a window.
	fn destroy_window(&mut self, window_id: WindowId) -> Result<(), InvalidWindowId> {
		let index = self.windows.iter().position(|w| w.id() == window_id)
			.ok_or(InvalidWindowId { window_id })?;
		self.windows.remove(index);
		Ok(())
	}

	/// Set the image to be displayed on a window.
	///
	/// This replaces the previously displayed image, if any,
	/// and schedules a redraw of the window.
	pub fn set_window_image(&mut self, window_id: WindowId, name: impl Into<String>, image: &impl AsImageView) -> Result<(), SetImageError> {
		let window = self.windows.iter_mut()
			.find(|w| w.id() == window_id)
			.ok_or(InvalidWindowId { window_id })?;

		let image = image.as_image_view()?;
		let name = name.into();
		log::debug!("attaching image {:?} to window {:?}", name, window_id);

		let texture = GpuImage::from_image(name, &self.device, &self.queue, &self.image_bind_group_layout, &image);
		window.image = Some(texture);
		window.window.request_redraw();
		Ok(())
	}

	/// Resize the surface of a window.
	fn resize_window(&mut self, window_id: WindowId, new_size: winit::dpi::PhysicalSize<u32>) -> Result<(), InvalidWindowId> {
		let window = self.windows
			.iter_mut()
			.find(|w| w.id() == window_id)
			.ok_or(InvalidWindowId { window_id })?;

		// A zero sized surface can not be configured. The window is
		// minimized, a redraw will follow when it is restored.
		if new_size.width == 0 || new_size.height == 0 {
			return Ok(());
		}

		window.surface_config.width = new_size.width;
		window.surface_config.height = new_size.height;
		window.surface.configure(&self.device, &window.surface_config);
		Ok(())
	}

	/// Render the contents of a window.
	fn render_window(&mut self, window_id: WindowId) -> Result<(), InvalidWindowId> {
		let window = self.windows.iter_mut()
			.find(|w| w.id() == window_id)
			.ok_or(InvalidWindowId { window_id })?;

		let image = match &window.image {
			Some(x) => x,
			None => return Ok(()),
		};

		let frame = window.surface
			.get_current_texture()
			.expect("Failed to acquire next swap chain texture");

		let mut encoder = self.device.create_command_encoder(&Default::default());
		render_pass(&mut encoder, &self.window_pipeline, image, window.options.background_color, &frame.texture.create_view(&Default::default()));
		self.queue.submit(std::iter::once(encoder.finish()));
		frame.present();
		Ok(())
	}

	/// Run the event loop of the context.
	///
	/// This function must be run from the main thread and never returns.
	/// The process exits with status 0 once the last window is closed.
	pub fn run(mut self) -> ! {
		let event_loop = self.event_loop.take().unwrap();
		event_loop.run(move |event, _event_loop, control_flow| {
			*control_flow = winit::event_loop::ControlFlow::Wait;

			let initial_window_count = self.windows.len();
			self.handle_event(event);

			// Closing the last window terminates the process.
			if self.windows.is_empty() && initial_window_count > 0 {
				log::debug!("last window closed, exiting");
				std::process::exit(0);
			}
		});
	}

	/// Handle an event from the event loop.
	fn handle_event(&mut self, event: winit::event::Event<'_, ()>) {
		use winit::event::Event;
		use winit::event::WindowEvent;

		match event {
			Event::WindowEvent { window_id, event: WindowEvent::Resized(new_size) } => {
				let _ = self.resize_window(window_id, new_size);
			},
			Event::WindowEvent { window_id, event: WindowEvent::ScaleFactorChanged { new_inner_size, .. } } => {
				let _ = self.resize_window(window_id, *new_inner_size);
			},
			Event::WindowEvent { window_id, event: WindowEvent::CloseRequested } => {
				let _ = self.destroy_window(window_id);
			},
			Event::RedrawRequested(window_id) => {
				if let Err(error) = self.render_window(window_id) {
					log::error!("failed to render window contents: {}", error);
				}
			},
			_ => {},
		}
	}
}

/// Get a wgpu device to use.
async fn get_device(instance: &wgpu::Instance) -> Result<(wgpu::Device, wgpu::Queue), GetDeviceError> {
	// Find a suitable display adapter.
	let adapter = instance.request_adapter(&wgpu::RequestAdapterOptions {
		power_preference: wgpu::PowerPreference::default(),
		force_fallback_adapter: false,
		compatible_surface: None,
	}).await;

	let adapter = adapter.ok_or(NoSuitableAdapterFound)?;

	// Create the logical device and command queue.
	let (device, queue) = adapter.request_device(
		&wgpu::DeviceDescriptor {
			label: Some("track-display-device"),
			features: wgpu::Features::empty(),
			limits: wgpu::Limits::default(),
		},
		None,
	).await?;

	Ok((device, queue))
}

/// Create the bind group layout for the image specific bindings.
fn create_image_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
	device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
		label: Some("image_bind_group_layout"),
		entries: &[
			wgpu::BindGroupLayoutEntry {
				binding: 0,
				visibility: wgpu::ShaderStages::FRAGMENT,
				count: None,
				ty: wgpu::BindingType::Texture {
					sample_type: wgpu::TextureSampleType::Float { filterable: true },
					view_dimension: wgpu::TextureViewDimension::D2,
					multisampled: false,
				},
			},
			wgpu::BindGroupLayoutEntry {
				binding: 1,
				visibility: wgpu::ShaderStages::FRAGMENT,
				count: None,
				ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
			},
		],
	})
}

/// Create a render pipeline with the specified device, layout, shader and surface format.
fn create_render_pipeline(
	device: &wgpu::Device,
	layout: &wgpu::PipelineLayout,
	shader: &wgpu::ShaderModule,
	surface_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
	device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
		label: Some("track-display-pipeline"),
		layout: Some(layout),
		vertex: wgpu::VertexState {
			module: shader,
			entry_point: "vs_main",
			buffers: &[],
		},
		fragment: Some(wgpu::FragmentState {
			module: shader,
			entry_point: "fs_main",
			targets: &[Some(wgpu::ColorTargetState {
				format: surface_format,
				blend: Some(wgpu::BlendState::ALPHA_BLENDING),
				write_mask: wgpu::ColorWrites::ALL,
			})],
		}),
		primitive: wgpu::PrimitiveState::default(),
		depth_stencil: None,
		multisample: wgpu::MultisampleState::default(),
		multiview: None,
	})
}

/// Perform a render pass of an image.
fn render_pass(
	encoder: &mut wgpu::CommandEncoder,
	render_pipeline: &wgpu::RenderPipeline,
	image: &GpuImage,
	background_color: crate::Color,
	target: &wgpu::TextureView,
) {
	let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
		label: Some("track-display-render-pass"),
		color_attachments: &[Some(wgpu::RenderPassColorAttachment {
			view: target,
			resolve_target: None,
			ops: wgpu::Operations {
				load: wgpu::LoadOp::Clear(background_color.into()),
				store: true,
			},
		})],
		depth_stencil_attachment: None,
	});

	render_pass.set_pipeline(render_pipeline);
	render_pass.set_bind_group(0, image.bind_group(), &[]);
	render_pass.draw(0..6, 0..1);
	drop(render_pass);
}
