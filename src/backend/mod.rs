pub mod context;
pub mod util;
pub mod window;

pub use context::Context;
pub use window::Window;
pub use window::WindowOptions;
