//! Per-frame hero state shared by both presentation backends.
//!
//! The driver turns the latest scroll progress into everything the hero needs
//! for one frame: title/nav fade, smoothed 3D pose, CSS rotation, caption fade
//! events and side block positions. Backends only apply the result.

use glam::Vec3;

use super::constants::{CAPTION_FADE_IN_SEC, CAPTION_FADE_OUT_SEC};
use super::content::{Hero, HeroSettings};
use super::fade::{CaptionFader, FadeEvent};
use super::params::{bucket_index, rotation_radians, AnimationParams, ParamRanges};
use super::progress::clamp01;
use super::reveal::{BlockFrame, SideBlock};
use super::smoothing::Smoothed;
use super::timeline::{Pose, ScrubTimeline};

#[derive(Clone, Debug, PartialEq)]
pub struct HeroFrame {
    pub progress: f32,
    pub params: AnimationParams,
    /// Smoothed model pose (canvas backend).
    pub pose: Pose,
    pub caption_event: Option<FadeEvent>,
    pub caption_opacity: f32,
    pub blocks: Vec<BlockFrame>,
}

pub struct HeroDriver {
    ranges: ParamRanges,
    timeline: ScrubTimeline,
    rotation: Smoothed<Vec3>,
    position: Smoothed<Vec3>,
    caption_count: usize,
    fader: CaptionFader,
    blocks: Vec<SideBlock>,
}

impl HeroDriver {
    pub fn new(hero: &Hero, initial_progress: f32) -> Self {
        let settings: &HeroSettings = &hero.settings;
        let timeline = ScrubTimeline::new(Pose::default(), &settings.timeline);
        let target = pose_target(&timeline, initial_progress);
        let caption_count = hero.captions.len();
        let first_caption = bucket_index(initial_progress, caption_count).unwrap_or(0);
        Self {
            ranges: ParamRanges::default(),
            timeline,
            rotation: Smoothed::new(target.rotation, settings.damping),
            position: Smoothed::new(target.position, settings.damping),
            caption_count,
            fader: CaptionFader::new(first_caption, CAPTION_FADE_OUT_SEC, CAPTION_FADE_IN_SEC),
            blocks: hero
                .blocks
                .iter()
                .map(|b| SideBlock::new(b.side, b.appear_at))
                .collect(),
        }
    }

    /// Caption slide shown when the page first renders.
    pub fn initial_caption(&self) -> usize {
        self.fader.shown_index()
    }

    pub fn update(&mut self, progress: f32, now: f64) -> HeroFrame {
        let progress = clamp01(progress);
        let target = pose_target(&self.timeline, progress);
        let pose = Pose {
            position: self.position.step(target.position),
            rotation: self.rotation.step(target.rotation),
        };

        let mut caption_event = None;
        if let Some(index) = bucket_index(progress, self.caption_count) {
            caption_event = self.fader.set_index(index, now);
        }
        // a hide requested this frame takes priority over a timed swap
        if caption_event.is_none() {
            caption_event = self.fader.tick(now);
        }

        HeroFrame {
            progress,
            params: AnimationParams::from_progress(progress, &self.ranges),
            pose,
            caption_event,
            caption_opacity: self.fader.opacity(now),
            blocks: self
                .blocks
                .iter_mut()
                .map(|b| b.update(progress, now))
                .collect(),
        }
    }
}

/// Timeline pose with the scroll spin added around Y.
pub fn pose_target(timeline: &ScrubTimeline, progress: f32) -> Pose {
    let mut pose = timeline.sample(progress);
    pose.rotation.y += rotation_radians(progress);
    pose
}
