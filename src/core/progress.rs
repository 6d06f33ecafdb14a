//! Scroll progress of a reference element through the viewport.
//!
//! Progress is a normalized value in `[0, 1]`: 0 while the element sits at or
//! below its starting position, 1 once it has fully scrolled past the top of
//! the viewport. Inputs are never rejected; anything out of range is clamped
//! and degenerate geometry (zero-height viewport, NaN) reads as 0.

use serde::Deserialize;

/// Bounding box of the reference element, in CSS pixels relative to the
/// viewport (the shape of `getBoundingClientRect`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementBox {
    pub top: f32,
    pub bottom: f32,
    pub height: f32,
}

impl ElementBox {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self {
            top,
            bottom,
            height: (bottom - top).max(0.0),
        }
    }

    /// True when any part of the box overlaps a viewport of the given height.
    pub fn intersects_viewport(&self, viewport_height: f32) -> bool {
        self.top < viewport_height && self.bottom > 0.0
    }
}

/// Which normalization to apply to the element's bottom edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressFormula {
    /// `1 - bottom / (height + viewport)`: counts the whole trip from the
    /// element's top entering the viewport to its bottom leaving it.
    #[default]
    Travel,
    /// `1 - bottom / viewport`: counts only the element's bottom edge moving
    /// up through the viewport.
    Exit,
}

/// Compute scroll progress in `[0, 1]` for `element` in a viewport of
/// `viewport_height` pixels.
pub fn scroll_progress(formula: ProgressFormula, element: ElementBox, viewport_height: f32) -> f32 {
    let span = match formula {
        ProgressFormula::Travel => element.height + viewport_height,
        ProgressFormula::Exit => viewport_height,
    };
    if !(span.is_finite() && span > 0.0) || !element.bottom.is_finite() {
        return 0.0;
    }
    clamp01(1.0 - element.bottom / span)
}

/// Clamp into `[0, 1]`, mapping NaN to 0.
#[inline]
pub fn clamp01(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}
