mod gpu_image;

pub use gpu_image::GpuImage;
pub use gpu_image::rgba8_pixel_data;
