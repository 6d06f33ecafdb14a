//! Page copy and hero settings.
//!
//! Everything shown on the page is loaded from `content/page.toml`, which is
//! embedded in the binary. Settings missing from the file fall back to the
//! defaults in `constants.rs`; values that would break the animation are
//! rejected by [`PageContent::validate`].

use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

use super::constants::{
    CAMERA_EYE, CAMERA_FOV_DEG, DEFAULT_DAMPING, MODEL_OFFSET, MODEL_SCALE,
};
use super::progress::ProgressFormula;
use super::reveal::Side;
use super::timeline::TweenSpec;

pub static PAGE_TOML: &str = include_str!("../../content/page.toml");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse page content: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("damping must be in (0, 1], got {0}")]
    InvalidDamping(f32),
    #[error("field of view must be in (0, 180) degrees, got {0}")]
    InvalidFov(f32),
    #[error("text block {index} appears at {value}, outside [0, 1]")]
    AppearAtOutOfRange { index: usize, value: f32 },
    #[error("unknown hero variant {0:?} (expected \"canvas\" or \"css\")")]
    UnknownVariant(String),
}

/// Which presentation backend renders the hero product.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroVariant {
    /// WebGPU scene with lights and a smoothed, scroll-driven rotation.
    #[default]
    Canvas,
    /// Inline SVG rotated with a CSS perspective transform.
    Css,
}

impl FromStr for HeroVariant {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "canvas" | "3d" => Ok(HeroVariant::Canvas),
            "css" | "svg" => Ok(HeroVariant::Css),
            other => Err(ContentError::UnknownVariant(other.to_string())),
        }
    }
}

fn default_damping() -> f32 {
    DEFAULT_DAMPING
}

fn default_fov() -> f32 {
    CAMERA_FOV_DEG
}

fn default_camera_position() -> [f32; 3] {
    CAMERA_EYE
}

fn default_model_offset() -> [f32; 3] {
    MODEL_OFFSET
}

fn default_model_scale() -> f32 {
    MODEL_SCALE
}

fn default_preorder_id() -> String {
    "preorder".to_string()
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HeroSettings {
    #[serde(default)]
    pub variant: HeroVariant,
    #[serde(default)]
    pub progress: ProgressFormula,
    #[serde(default = "default_damping")]
    pub damping: f32,
    /// Let pointer drags orbit the camera around the model.
    #[serde(default)]
    pub orbit: bool,
    #[serde(default = "default_fov")]
    pub fov_deg: f32,
    #[serde(default = "default_camera_position")]
    pub camera_position: [f32; 3],
    #[serde(default = "default_model_offset")]
    pub model_offset: [f32; 3],
    #[serde(default = "default_model_scale")]
    pub model_scale: f32,
    #[serde(default)]
    pub timeline: Vec<TweenSpec>,
}

impl Default for HeroSettings {
    fn default() -> Self {
        Self {
            variant: HeroVariant::default(),
            progress: ProgressFormula::default(),
            damping: DEFAULT_DAMPING,
            orbit: false,
            fov_deg: CAMERA_FOV_DEG,
            camera_position: CAMERA_EYE,
            model_offset: MODEL_OFFSET,
            model_scale: MODEL_SCALE,
            timeline: Vec::new(),
        }
    }
}

/// Hero text block; `\n` in `text` becomes a line break.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub side: Side,
    pub appear_at: f32,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavLink {
    pub label: String,
    /// Id of the section the button scrolls to.
    #[serde(default)]
    pub section: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Hero {
    pub title: String,
    #[serde(default)]
    pub captions: Vec<String>,
    #[serde(default)]
    pub blocks: Vec<TextBlock>,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub settings: HeroSettings,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    /// SVG path data drawn in a 24x24 stroked icon.
    #[serde(default)]
    pub icon: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SpecRow {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PreOrder {
    #[serde(default = "default_preorder_id")]
    pub id: String,
    pub heading: String,
    pub button: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Footer {
    pub brand: String,
    #[serde(default)]
    pub links: Vec<FooterLink>,
    #[serde(default)]
    pub credit: Option<String>,
    #[serde(default)]
    pub credit_link: Option<FooterLink>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Section {
    pub id: String,
    pub heading: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PageContent {
    pub hero: Hero,
    pub features_section: Section,
    #[serde(default)]
    pub features: Vec<Feature>,
    pub gallery_section: Section,
    #[serde(default)]
    pub gallery: Vec<GalleryImage>,
    pub specs_section: Section,
    #[serde(default)]
    pub specs: Vec<SpecRow>,
    pub preorder: PreOrder,
    pub footer: Footer,
}

impl PageContent {
    pub fn parse(src: &str) -> Result<Self, ContentError> {
        let content: PageContent = toml::from_str(src)?;
        content.validate()?;
        Ok(content)
    }

    /// The page shipped with the binary.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::parse(PAGE_TOML)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        let s = &self.hero.settings;
        if !(s.damping > 0.0 && s.damping <= 1.0) {
            return Err(ContentError::InvalidDamping(s.damping));
        }
        if !(s.fov_deg > 0.0 && s.fov_deg < 180.0) {
            return Err(ContentError::InvalidFov(s.fov_deg));
        }
        for (index, block) in self.hero.blocks.iter().enumerate() {
            if !(0.0..=1.0).contains(&block.appear_at) {
                return Err(ContentError::AppearAtOutOfRange {
                    index,
                    value: block.appear_at,
                });
            }
        }
        Ok(())
    }
}
