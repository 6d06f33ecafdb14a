//! Keyframe timeline whose playhead is driven by scroll progress ("scrub").
//!
//! Tweens are laid out like a sequencer: each starts where the previous one
//! ended unless it names an absolute `at` time. Every tween animates a subset
//! of the x/y/z components of the object's position or rotation. Sampling maps
//! progress `[0, 1]` onto `[0, total_duration]`.

use glam::Vec3;
use serde::Deserialize;

use super::progress::clamp01;
use super::tween::{ease_out_quad, lerp};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TweenTarget {
    Position,
    Rotation,
}

fn default_duration() -> f32 {
    1.0
}

/// One tween as written in `content/page.toml`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TweenSpec {
    pub target: TweenTarget,
    #[serde(default)]
    pub x: Option<f32>,
    #[serde(default)]
    pub y: Option<f32>,
    #[serde(default)]
    pub z: Option<f32>,
    #[serde(default = "default_duration")]
    pub duration: f32,
    /// Absolute start time; sequential placement when absent.
    #[serde(default)]
    pub at: Option<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Segment {
    start: f32,
    end: f32,
    from: f32,
    to: f32,
}

impl Segment {
    fn value_at(&self, t: f32) -> f32 {
        if t >= self.end || self.end <= self.start {
            return self.to;
        }
        let u = (t - self.start) / (self.end - self.start);
        lerp(self.from, self.to, ease_out_quad(u))
    }
}

/// Sampled object pose.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Vec3,
}

// position.x, .y, .z, rotation.x, .y, .z
const CHANNELS: usize = 6;

#[derive(Clone, Debug, Default)]
pub struct ScrubTimeline {
    channels: [Vec<Segment>; CHANNELS],
    base: [f32; CHANNELS],
    total: f32,
}

impl ScrubTimeline {
    pub fn new(base: Pose, tweens: &[TweenSpec]) -> Self {
        let base = [
            base.position.x,
            base.position.y,
            base.position.z,
            base.rotation.x,
            base.rotation.y,
            base.rotation.z,
        ];
        let mut timeline = Self {
            channels: Default::default(),
            base,
            total: 0.0,
        };

        let mut cursor = 0.0_f32;
        let mut placed: Vec<(usize, f32, f32, f32)> = Vec::new();
        for spec in tweens {
            let duration = spec.duration.max(0.0);
            let start = spec.at.unwrap_or(cursor).max(0.0);
            let end = start + duration;
            cursor = end;
            timeline.total = timeline.total.max(end);

            let offset = match spec.target {
                TweenTarget::Position => 0,
                TweenTarget::Rotation => 3,
            };
            for (axis, value) in [spec.x, spec.y, spec.z].into_iter().enumerate() {
                if let Some(v) = value {
                    placed.push((offset + axis, start, end, v));
                }
            }
        }

        // Chain start values in start-time order per channel.
        placed.sort_by(|a, b| a.1.total_cmp(&b.1));
        for (channel, start, end, to) in placed {
            let segments = &mut timeline.channels[channel];
            let from = segments.last().map(|s| s.to).unwrap_or(base[channel]);
            segments.push(Segment {
                start,
                end,
                from,
                to,
            });
        }
        timeline
    }

    pub fn total_duration(&self) -> f32 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.channels.iter().all(Vec::is_empty)
    }

    pub fn sample(&self, progress: f32) -> Pose {
        let t = clamp01(progress) * self.total;
        let v: [f32; CHANNELS] = std::array::from_fn(|c| self.sample_channel(c, t));
        Pose {
            position: Vec3::new(v[0], v[1], v[2]),
            rotation: Vec3::new(v[3], v[4], v[5]),
        }
    }

    fn sample_channel(&self, channel: usize, t: f32) -> f32 {
        let segments = &self.channels[channel];
        match segments.iter().rev().find(|s| s.start <= t) {
            Some(segment) => segment.value_at(t),
            None => self.base[channel],
        }
    }
}
