pub mod camera;
pub mod constants;
pub mod content;
pub mod css;
pub mod driver;
pub mod fade;
pub mod mesh;
pub mod params;
pub mod progress;
pub mod reveal;
pub mod smoothing;
pub mod timeline;
pub mod tween;

pub use camera::*;
pub use content::*;
pub use driver::*;
pub use progress::*;

// Shaders bundled as string constants
pub static CHAIR_WGSL: &str = include_str!("../../shaders/chair.wgsl");
