//! CSS transform strings for the SVG hero.

use super::constants::{CSS_BACKFACE_SHADE, CSS_PERSPECTIVE_PX};

/// `perspective() rotateY()` for the chair at `degrees` of spin.
pub fn rotation_transform(degrees: f32) -> String {
    format!(
        "perspective({:.0}px) rotateY({:.2}deg)",
        CSS_PERSPECTIVE_PX, degrees
    )
}

/// Brightness for the SVG so its back reads darker than its front.
pub fn backface_brightness(degrees: f32) -> f32 {
    let facing = degrees.to_radians().cos().abs();
    1.0 - CSS_BACKFACE_SHADE * (1.0 - facing)
}
