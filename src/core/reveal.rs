//! Scroll-linked reveal animations for hero side blocks and page sections.

use serde::Deserialize;

use super::constants::{BLOCK_SLIDE_PX, BLOCK_TWEEN_SEC, BLOCK_VISIBLE_WINDOW};
use super::progress::ElementBox;
use super::tween::{ease_out_cubic, lerp, Tween};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    /// Horizontal offset a hidden block rests at, in px.
    pub fn hidden_offset_px(self) -> f32 {
        match self {
            Side::Left => -BLOCK_SLIDE_PX,
            Side::Right => BLOCK_SLIDE_PX,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// A hero text block that shows while progress is near `appear_at`.
#[derive(Clone, Debug)]
pub struct SideBlock {
    pub side: Side,
    pub appear_at: f32,
    opacity: Tween,
    offset_x: Tween,
    // still moving as of the previous update
    moving: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockFrame {
    pub opacity: f32,
    pub offset_x_px: f32,
    /// False once the block has settled and its final values were already
    /// reported; callers can skip the style writes.
    pub changed: bool,
}

impl SideBlock {
    pub fn new(side: Side, appear_at: f32) -> Self {
        Self {
            side,
            appear_at,
            opacity: Tween::at_rest(0.0, BLOCK_TWEEN_SEC),
            offset_x: Tween::at_rest(side.hidden_offset_px(), BLOCK_TWEEN_SEC),
            moving: true,
        }
    }

    pub fn is_visible_at(&self, progress: f32) -> bool {
        (progress - self.appear_at).abs() < BLOCK_VISIBLE_WINDOW
    }

    /// Retarget from the latest progress and sample the displayed values.
    pub fn update(&mut self, progress: f32, now: f64) -> BlockFrame {
        let (opacity, offset) = if self.is_visible_at(progress) {
            (1.0, 0.0)
        } else {
            (0.0, self.side.hidden_offset_px())
        };
        self.opacity.retarget(opacity, now);
        self.offset_x.retarget(offset, now);
        let settled = self.opacity.is_settled(now) && self.offset_x.is_settled(now);
        let changed = self.moving || !settled;
        self.moving = !settled;
        BlockFrame {
            opacity: self.opacity.sample(now),
            offset_x_px: self.offset_x.sample(now),
            changed,
        }
    }
}

/// Appearance of an element revealed once when it first enters the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub delay_sec: f32,
    pub duration_sec: f32,
    pub from_offset_y_px: f32,
    pub from_scale: f32,
}

impl RevealStyle {
    pub const HEADING: Self = Self::rise(0.0, 0.8, 20.0);
    pub const CARD: Self = Self::rise(0.0, 0.6, 30.0);
    pub const SPEC_ROW: Self = Self::rise(0.0, 0.5, 10.0);

    pub const fn rise(delay_sec: f32, duration_sec: f32, from_offset_y_px: f32) -> Self {
        Self {
            delay_sec,
            duration_sec,
            from_offset_y_px,
            from_scale: 1.0,
        }
    }

    pub const fn grow(delay_sec: f32, duration_sec: f32, from_scale: f32) -> Self {
        Self {
            delay_sec,
            duration_sec,
            from_offset_y_px: 0.0,
            from_scale,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealFrame {
    pub opacity: f32,
    pub offset_y_px: f32,
    pub scale: f32,
}

/// Plays a [`RevealStyle`] the first time the element intersects the viewport.
/// Once triggered it never reverts.
#[derive(Clone, Debug)]
pub struct ViewReveal {
    style: RevealStyle,
    triggered_at: Option<f64>,
}

impl ViewReveal {
    pub fn new(style: RevealStyle) -> Self {
        Self {
            style,
            triggered_at: None,
        }
    }

    /// Start the reveal now, regardless of geometry (used for the hero intro).
    pub fn trigger(&mut self, now: f64) {
        self.triggered_at.get_or_insert(now);
    }

    pub fn observe(&mut self, element: ElementBox, viewport_height: f32, now: f64) {
        if self.triggered_at.is_none() && element.intersects_viewport(viewport_height) {
            self.triggered_at = Some(now);
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered_at.is_some()
    }

    pub fn is_finished(&self, now: f64) -> bool {
        match self.triggered_at {
            Some(t0) => {
                now - t0 >= (self.style.delay_sec + self.style.duration_sec) as f64
            }
            None => false,
        }
    }

    pub fn sample(&self, now: f64) -> RevealFrame {
        let t = match self.triggered_at {
            None => 0.0,
            Some(t0) => {
                let elapsed = (now - t0) as f32 - self.style.delay_sec;
                if self.style.duration_sec <= 0.0 {
                    if elapsed >= 0.0 {
                        1.0
                    } else {
                        0.0
                    }
                } else {
                    (elapsed / self.style.duration_sec).clamp(0.0, 1.0)
                }
            }
        };
        let e = ease_out_cubic(t);
        RevealFrame {
            opacity: e,
            offset_y_px: lerp(self.style.from_offset_y_px, 0.0, e),
            scale: lerp(self.style.from_scale, 1.0, e),
        }
    }
}
