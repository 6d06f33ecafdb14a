/// Web-side presentation constants.
///
/// Motion tuning shared with host tests lives in `core/constants.rs`; these
/// only concern how the page is drawn.
// Clear colour behind the chair; matches the white hero background.
pub const CLEAR_COLOR: [f64; 4] = [1.0, 1.0, 1.0, 1.0];

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

// DOM ids the frame loop looks up
pub const PAGE_ROOT_ID: &str = "page-root";
pub const HERO_ID: &str = "hero";
pub const HERO_CANVAS_ID: &str = "hero-canvas";
pub const HERO_CSS_STAGE_ID: &str = "hero-css";
pub const HERO_CAPTION_ID: &str = "hero-caption";

// Query parameter that overrides the configured hero variant
pub const VARIANT_QUERY_KEY: &str = "hero";
