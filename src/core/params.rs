use super::constants::{
    FULL_TURN_DEG, FULL_TURN_RAD, HERO_FADE_END, HERO_FADE_START, HERO_MAX_OFFSET_PX,
};
use super::progress::clamp01;

/// Rotation over one full turn, in radians (3D hero).
#[inline]
pub fn rotation_radians(progress: f32) -> f32 {
    clamp01(progress) * FULL_TURN_RAD
}

/// Rotation over one full turn, in degrees (CSS hero).
#[inline]
pub fn rotation_degrees(progress: f32) -> f32 {
    clamp01(progress) * FULL_TURN_DEG
}

/// Partition `[0, 1]` into `buckets` equal ranges and return the one holding
/// `progress`. Progress 1.0 lands in the last bucket. `None` when there are no
/// buckets to choose from.
#[inline]
pub fn bucket_index(progress: f32, buckets: usize) -> Option<usize> {
    if buckets == 0 {
        return None;
    }
    let idx = (clamp01(progress) * buckets as f32).floor() as usize;
    Some(idx.min(buckets - 1))
}

/// 0 below `start`, 1 above `end`, linear in between.
#[inline]
pub fn linear_step(start: f32, end: f32, x: f32) -> f32 {
    if end <= start {
        return if x < start { 0.0 } else { 1.0 };
    }
    clamp01((x - start) / (end - start))
}

/// Ranges used to map progress onto fade/offset parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamRanges {
    pub fade_start: f32,
    pub fade_end: f32,
    pub max_offset_px: f32,
}

impl Default for ParamRanges {
    fn default() -> Self {
        Self {
            fade_start: HERO_FADE_START,
            fade_end: HERO_FADE_END,
            max_offset_px: HERO_MAX_OFFSET_PX,
        }
    }
}

/// Presentation parameters derived from a single progress value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationParams {
    pub rotation_rad: f32,
    pub rotation_deg: f32,
    pub opacity: f32,
    pub offset_px: f32,
}

impl AnimationParams {
    pub fn from_progress(progress: f32, ranges: &ParamRanges) -> Self {
        let p = clamp01(progress);
        Self {
            rotation_rad: rotation_radians(p),
            rotation_deg: rotation_degrees(p),
            opacity: 1.0 - linear_step(ranges.fade_start, ranges.fade_end, p),
            offset_px: p * ranges.max_offset_px,
        }
    }
}
