// Shared motion/scene tuning constants used by the hero driver.
// These are the defaults behind `content/page.toml`; the file may override them.

use std::f32::consts::TAU;

// Scroll → rotation
pub const FULL_TURN_RAD: f32 = TAU; // one full turn over the hero scroll
pub const FULL_TURN_DEG: f32 = 360.0;

// Pose smoothing
pub const DEFAULT_DAMPING: f32 = 0.1; // fraction of the remaining distance covered per frame

// Hero title / nav fade as the hero leaves the viewport
pub const HERO_FADE_START: f32 = 0.55;
pub const HERO_FADE_END: f32 = 0.95;
pub const HERO_MAX_OFFSET_PX: f32 = 120.0;

// Side text blocks
pub const BLOCK_VISIBLE_WINDOW: f32 = 0.15; // |progress - appear_at| below this shows the block
pub const BLOCK_SLIDE_PX: f32 = 50.0;
pub const BLOCK_TWEEN_SEC: f32 = 0.6;

// Caption strip
pub const CAPTION_FADE_OUT_SEC: f64 = 0.25; // hide phase, also the swap delay
pub const CAPTION_FADE_IN_SEC: f64 = 0.35;

// CSS hero
pub const CSS_PERSPECTIVE_PX: f32 = 900.0;
pub const CSS_BACKFACE_SHADE: f32 = 0.25; // darkening as the SVG's back turns to the viewer

// Hero title intro
pub const INTRO_DELAY_SEC: f32 = 0.2;
pub const INTRO_DURATION_SEC: f32 = 1.0;
pub const INTRO_OFFSET_PX: f32 = 20.0;

// Camera
pub const CAMERA_EYE: [f32; 3] = [0.0, 0.0, 3.0];
pub const CAMERA_FOV_DEG: f32 = 40.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Orbit interaction
pub const ORBIT_RAD_PER_PX: f32 = 0.005;
pub const ORBIT_PITCH_LIMIT_RAD: f32 = 85.0 * std::f32::consts::PI / 180.0;

// Model placement
pub const MODEL_OFFSET: [f32; 3] = [0.0, -0.5, 0.0];
pub const MODEL_SCALE: f32 = 1.3;

// Lights (relative intensities fed to the shader)
pub const AMBIENT_INTENSITY: f32 = 0.45;
pub const DIRECTIONAL_INTENSITY: f32 = 0.75;
pub const DIRECTIONAL_POSITION: [f32; 3] = [5.0, 5.0, 5.0];

// Chair palette
pub const CHAIR_PINK: [f32; 3] = [0.96, 0.62, 0.75];
pub const CHAIR_PINK_DEEP: [f32; 3] = [0.86, 0.40, 0.58];
pub const CHAIR_FRAME: [f32; 3] = [0.78, 0.79, 0.82];
pub const CHAIR_DARK: [f32; 3] = [0.22, 0.22, 0.25];
