// Host-side tests for the bundled page content and the hero driver built on it.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod hero_core;

use hero_core::constants::DEFAULT_DAMPING;
use hero_core::driver::{pose_target, HeroDriver};
use hero_core::fade::FadeEvent;
use hero_core::params::rotation_radians;
use hero_core::progress::ProgressFormula;
use hero_core::reveal::Side;
use hero_core::timeline::{Pose, ScrubTimeline};
use hero_core::{ContentError, Hero, HeroVariant, PageContent};

fn minimal(settings: &str, blocks: &str) -> String {
    format!(
        r#"
[hero]
title = "Chair"
captions = ["a", "b", "c", "d"]
{blocks}

[hero.settings]
{settings}

[features_section]
id = "features"
heading = "Features"

[gallery_section]
id = "gallery"
heading = "Gallery"

[specs_section]
id = "specs"
heading = "Specs"

[preorder]
heading = "Get yours"
button = "Pre-Order"

[footer]
brand = "Chair Co"
"#
    )
}

fn bundled_hero() -> Hero {
    PageContent::bundled().expect("bundled content parses").hero
}

#[test]
fn bundled_content_parses() {
    let page = PageContent::bundled().unwrap();
    assert_eq!(page.hero.title, "All-new Pink Ergo");
    assert_eq!(page.hero.captions.len(), 4);
    assert_eq!(page.hero.blocks.len(), 4);
    assert_eq!(page.hero.blocks[0].side, Side::Left);
    assert_eq!(page.hero.blocks[1].side, Side::Right);
    assert!(page.hero.blocks[0].text.contains('\n'));
    assert_eq!(page.hero.nav.len(), 3);
    assert_eq!(page.features.len(), 3);
    assert_eq!(page.gallery.len(), 3);
    assert_eq!(page.specs.len(), 6);
    assert_eq!(page.preorder.id, "preorder");

    let s = &page.hero.settings;
    assert_eq!(s.variant, HeroVariant::Canvas);
    assert_eq!(s.progress, ProgressFormula::Travel);
    assert_eq!(s.timeline.len(), 3);
}

#[test]
fn nav_targets_exist_on_the_page() {
    let page = PageContent::bundled().unwrap();
    let ids = [
        page.features_section.id.as_str(),
        page.gallery_section.id.as_str(),
        page.specs_section.id.as_str(),
        page.preorder.id.as_str(),
    ];
    for link in &page.hero.nav {
        if let Some(section) = &link.section {
            assert!(ids.contains(&section.as_str()), "dangling nav target {}", section);
        }
    }
}

#[test]
fn missing_settings_fall_back_to_defaults() {
    let page = PageContent::parse(&minimal("", "")).unwrap();
    let s = &page.hero.settings;
    assert_eq!(s.damping, DEFAULT_DAMPING);
    assert_eq!(s.variant, HeroVariant::Canvas);
    assert!(!s.orbit);
    assert!(s.timeline.is_empty());
    assert!(page.features.is_empty());
}

#[test]
fn settings_are_read_from_toml() {
    let src = minimal(
        "variant = \"css\"\nprogress = \"exit\"\ndamping = 0.25\norbit = true",
        "",
    );
    let s = PageContent::parse(&src).unwrap().hero.settings;
    assert_eq!(s.variant, HeroVariant::Css);
    assert_eq!(s.progress, ProgressFormula::Exit);
    assert_eq!(s.damping, 0.25);
    assert!(s.orbit);
}

#[test]
fn invalid_values_are_rejected() {
    let err = PageContent::parse(&minimal("damping = 0.0", "")).unwrap_err();
    assert!(matches!(err, ContentError::InvalidDamping(_)));

    let err = PageContent::parse(&minimal("fov_deg = 190.0", "")).unwrap_err();
    assert!(matches!(err, ContentError::InvalidFov(_)));

    let blocks = "[[hero.blocks]]\nappear_at = 1.5\ntext = \"x\"";
    let err = PageContent::parse(&minimal("", blocks)).unwrap_err();
    assert!(matches!(
        err,
        ContentError::AppearAtOutOfRange { index: 0, .. }
    ));

    let err = PageContent::parse("[hero").unwrap_err();
    assert!(matches!(err, ContentError::Parse(_)));
}

#[test]
fn hero_variant_from_query_value() {
    assert_eq!("canvas".parse::<HeroVariant>().unwrap(), HeroVariant::Canvas);
    assert_eq!("3D".parse::<HeroVariant>().unwrap(), HeroVariant::Canvas);
    assert_eq!(" css ".parse::<HeroVariant>().unwrap(), HeroVariant::Css);
    assert_eq!("svg".parse::<HeroVariant>().unwrap(), HeroVariant::Css);
    let err = "webgl".parse::<HeroVariant>().unwrap_err();
    assert!(matches!(err, ContentError::UnknownVariant(ref v) if v == "webgl"));
}

#[test]
fn driver_starts_on_the_caption_for_initial_progress() {
    let hero = bundled_hero();
    assert_eq!(HeroDriver::new(&hero, 0.0).initial_caption(), 0);
    assert_eq!(HeroDriver::new(&hero, 0.6).initial_caption(), 2);
    assert_eq!(HeroDriver::new(&hero, 1.0).initial_caption(), 3);
}

#[test]
fn driver_smooths_rotation_toward_scroll_target() {
    let hero = bundled_hero();
    let mut driver = HeroDriver::new(&hero, 0.0);
    let rest = driver.update(0.0, 0.0);
    assert_eq!(rest.pose.rotation.y, 0.0);
    assert_eq!(rest.caption_event, None);
    assert_eq!(rest.blocks.len(), hero.blocks.len());

    let frame = driver.update(0.3, 0.1);
    let expected = DEFAULT_DAMPING * rotation_radians(0.3);
    assert!((frame.pose.rotation.y - expected).abs() < 1e-5);
    assert!((frame.params.rotation_deg - 108.0).abs() < 1e-3);
}

#[test]
fn driver_swaps_captions_across_buckets() {
    let hero = bundled_hero();
    let mut driver = HeroDriver::new(&hero, 0.0);
    driver.update(0.0, 0.0);

    let hide = driver.update(0.3, 1.0);
    assert_eq!(hide.caption_event, Some(FadeEvent::Hide));
    assert_eq!(hide.caption_opacity, 1.0);

    let mid = driver.update(0.3, 1.1);
    assert_eq!(mid.caption_event, None);
    assert!(mid.caption_opacity < 1.0);

    let show = driver.update(0.3, 1.3);
    assert_eq!(show.caption_event, Some(FadeEvent::Show(1)));
}

#[test]
fn full_damping_tracks_the_target_exactly() {
    let mut hero = bundled_hero();
    hero.settings.damping = 1.0;
    let timeline = ScrubTimeline::new(Pose::default(), &hero.settings.timeline);
    let mut driver = HeroDriver::new(&hero, 0.0);
    let frame = driver.update(0.42, 0.0);
    assert_eq!(frame.pose, pose_target(&timeline, 0.42));
}

#[test]
fn scrolled_past_hero_hides_title_and_blocks() {
    let hero = bundled_hero();
    let mut driver = HeroDriver::new(&hero, 1.0);
    driver.update(1.0, 0.0);
    let frame = driver.update(1.0, 5.0);
    assert_eq!(frame.params.opacity, 0.0);
    // only the last block (appear_at 0.9) is near the end of the scroll
    let visible = frame.blocks.iter().filter(|b| b.opacity > 0.5).count();
    assert_eq!(visible, 1);
}
