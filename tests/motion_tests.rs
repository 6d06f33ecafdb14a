// Host-side tests for the time-based motion primitives: smoothing, tweens,
// caption fades and one-shot reveals.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod hero_core;

use glam::Vec3;
use hero_core::fade::{CaptionFader, FadeEvent, FadePhase};
use hero_core::progress::ElementBox;
use hero_core::css;
use hero_core::params::rotation_degrees;
use hero_core::reveal::{RevealStyle, Side, SideBlock, ViewReveal};
use hero_core::smoothing::Smoothed;
use hero_core::tween::{ease_out_cubic, ease_out_quad, Tween};
use std::f32::consts::PI;

#[test]
fn smoothing_covers_damping_fraction_per_step() {
    let mut s = Smoothed::new(0.0_f32, 0.1);
    let v = s.step(PI);
    assert!((v - 0.1 * PI).abs() < 1e-6);
    assert_eq!(s.current(), v);
}

#[test]
fn smoothing_converges_without_overshoot() {
    let target = 2.0_f32;
    let mut s = Smoothed::new(0.0_f32, 0.1);
    let mut last = 0.0;
    for _ in 0..300 {
        let v = s.step(target);
        assert!(v >= last && v <= target);
        last = v;
    }
    assert!((last - target).abs() < 1e-4);
}

#[test]
fn smoothing_works_on_vectors() {
    let mut s = Smoothed::new(Vec3::ZERO, 0.5);
    let v = s.step(Vec3::new(2.0, -4.0, 1.0));
    assert!((v - Vec3::new(1.0, -2.0, 0.5)).length() < 1e-6);
}

#[test]
fn smoothing_damping_is_clamped() {
    assert_eq!(Smoothed::new(0.0_f32, 0.0).damping(), f32::EPSILON);
    assert_eq!(Smoothed::new(0.0_f32, f32::NAN).damping(), f32::EPSILON);
    assert_eq!(Smoothed::new(0.0_f32, 3.0).damping(), 1.0);

    let mut snap = Smoothed::new(0.0_f32, 1.0);
    assert_eq!(snap.step(5.0), 5.0);
}

#[test]
fn easing_curves_hit_endpoints() {
    for ease in [ease_out_cubic, ease_out_quad] {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(1.0), 1.0);
        assert_eq!(ease(2.0), 1.0);
        assert!(ease(0.5) > 0.5);
    }
}

#[test]
fn tween_eases_to_target() {
    let mut t = Tween::at_rest(0.0, 0.6);
    assert_eq!(t.sample(10.0), 0.0);
    t.retarget(1.0, 1.0);
    assert_eq!(t.sample(1.0), 0.0);
    let mid = t.sample(1.3);
    assert!(mid > 0.5 && mid < 1.0);
    assert_eq!(t.sample(1.6), 1.0);
    assert!(!t.is_settled(1.3));
    assert!(t.is_settled(2.0));
}

#[test]
fn tween_retarget_mid_flight_does_not_jump() {
    let mut t = Tween::at_rest(0.0, 1.0);
    t.retarget(10.0, 0.0);
    let before = t.sample(0.4);
    t.retarget(-5.0, 0.4);
    assert!((t.sample(0.4) - before).abs() < 1e-5);
    assert!((t.sample(1.4) + 5.0).abs() < 1e-5);
}

#[test]
fn tween_retarget_to_same_value_keeps_timing() {
    let mut t = Tween::at_rest(0.0, 1.0);
    t.retarget(1.0, 0.0);
    t.retarget(1.0, 0.5);
    assert_eq!(t.sample(1.0), 1.0);
}

#[test]
fn caption_fader_hides_then_shows_next() {
    let mut f = CaptionFader::new(0, 0.25, 0.35);
    assert_eq!(f.set_index(0, 0.0), None);
    assert_eq!(f.opacity(0.0), 1.0);

    assert_eq!(f.set_index(1, 1.0), Some(FadeEvent::Hide));
    assert_eq!(f.shown_index(), 0);
    assert_eq!(f.opacity(1.0), 1.0);
    assert_eq!(f.tick(1.1), None);

    assert_eq!(f.tick(1.25), Some(FadeEvent::Show(1)));
    assert_eq!(f.shown_index(), 1);
    assert_eq!(f.opacity(1.25), 0.0);

    assert_eq!(f.tick(1.3), None);
    assert_eq!(f.tick(1.7), None);
    assert_eq!(f.phase(), FadePhase::Visible { index: 1 });
    assert_eq!(f.opacity(1.7), 1.0);
}

#[test]
fn caption_fader_retargets_while_hiding() {
    let mut f = CaptionFader::new(0, 0.25, 0.35);
    assert_eq!(f.set_index(1, 0.0), Some(FadeEvent::Hide));
    // crossing another bucket mid-fade only changes what comes next
    assert_eq!(f.set_index(2, 0.1), None);
    assert_eq!(
        f.phase(),
        FadePhase::Hiding {
            shown: 0,
            next: 2,
            since: 0.0,
            from: 1.0
        }
    );
    assert_eq!(f.tick(0.3), Some(FadeEvent::Show(2)));
}

#[test]
fn caption_fader_interrupts_fade_in() {
    let mut f = CaptionFader::new(0, 0.25, 0.35);
    f.set_index(1, 0.0);
    assert_eq!(f.tick(0.5), Some(FadeEvent::Show(1)));
    assert_eq!(f.set_index(3, 0.6), Some(FadeEvent::Hide));
    assert_eq!(f.shown_index(), 1);
    assert_eq!(f.tick(1.0), Some(FadeEvent::Show(3)));
}

#[test]
fn caption_opacity_stays_continuous_when_fade_in_is_cut_short() {
    let mut f = CaptionFader::new(0, 0.25, 0.35);
    f.set_index(1, 0.0);
    assert_eq!(f.tick(0.25), Some(FadeEvent::Show(1)));

    let before = f.opacity(0.30);
    assert!(before > 0.0 && before < 1.0);
    assert_eq!(f.set_index(2, 0.30), Some(FadeEvent::Hide));
    let after = f.opacity(0.30);
    assert!((after - before).abs() < 1e-6, "jumped from {} to {}", before, after);

    // and keeps falling from there
    let later = f.opacity(0.40);
    assert!(later < after);
    assert_eq!(f.opacity(0.55), 0.0);
}

#[test]
fn side_block_visibility_window() {
    let block = SideBlock::new(Side::Left, 0.4);
    assert!(block.is_visible_at(0.4));
    assert!(block.is_visible_at(0.3));
    assert!(block.is_visible_at(0.5));
    assert!(!block.is_visible_at(0.2));
    assert!(!block.is_visible_at(0.6));
}

#[test]
fn side_block_slides_in_and_out() {
    let mut block = SideBlock::new(Side::Left, 0.4);
    let hidden = block.update(0.0, 0.0);
    assert_eq!(hidden.opacity, 0.0);
    assert_eq!(hidden.offset_x_px, -50.0);

    block.update(0.4, 1.0);
    let shown = block.update(0.4, 2.0);
    assert_eq!(shown.opacity, 1.0);
    assert_eq!(shown.offset_x_px, 0.0);

    let leaving = block.update(0.9, 3.0);
    assert_eq!(leaving.opacity, 1.0);
    let gone = block.update(0.9, 4.0);
    assert_eq!(gone.opacity, 0.0);
    assert_eq!(gone.offset_x_px, -50.0);

    let mut right = SideBlock::new(Side::Right, 0.9);
    assert_eq!(right.update(0.0, 0.0).offset_x_px, 50.0);
}

#[test]
fn view_reveal_triggers_once_on_intersection() {
    let vh = 800.0;
    let mut r = ViewReveal::new(RevealStyle::CARD);
    r.observe(ElementBox::new(900.0, 1200.0), vh, 0.5);
    assert!(!r.is_triggered());
    assert_eq!(r.sample(0.5).opacity, 0.0);
    assert_eq!(r.sample(0.5).offset_y_px, 30.0);

    r.observe(ElementBox::new(700.0, 1000.0), vh, 1.0);
    assert!(r.is_triggered());
    assert_eq!(r.sample(1.0).opacity, 0.0);

    // leaving the viewport again never reverts the reveal
    r.observe(ElementBox::new(-900.0, -600.0), vh, 1.5);
    let done = r.sample(2.0);
    assert_eq!(done.opacity, 1.0);
    assert_eq!(done.offset_y_px, 0.0);
    assert!(r.is_finished(2.0));
}

#[test]
fn view_reveal_honours_delay_and_scale() {
    let mut r = ViewReveal::new(RevealStyle::grow(0.4, 0.7, 0.95));
    r.trigger(0.0);
    r.trigger(5.0);
    let waiting = r.sample(0.3);
    assert_eq!(waiting.opacity, 0.0);
    assert!((waiting.scale - 0.95).abs() < 1e-6);
    assert!(!r.is_finished(1.0));
    let done = r.sample(1.2);
    assert_eq!(done.scale, 1.0);
    assert!(r.is_finished(1.2));
}

#[test]
fn settled_blocks_report_final_values_once() {
    let mut block = SideBlock::new(Side::Right, 0.4);
    assert!(block.update(0.0, 0.0).changed);
    // the frame that settles still reports, later ones do not
    assert!(block.update(0.0, 1.0).changed);
    assert!(!block.update(0.0, 1.5).changed);

    assert!(block.update(0.4, 2.0).changed);
    assert!(block.update(0.4, 2.3).changed);
    let landed = block.update(0.4, 3.0);
    assert!(landed.changed);
    assert_eq!(landed.opacity, 1.0);
    assert!(!block.update(0.4, 3.5).changed);

    assert!(block.update(0.9, 4.0).changed);
}

#[test]
fn css_rotation_follows_progress() {
    assert_eq!(
        css::rotation_transform(rotation_degrees(0.5)),
        "perspective(900px) rotateY(180.00deg)"
    );
    assert_eq!(
        css::rotation_transform(rotation_degrees(0.0)),
        "perspective(900px) rotateY(0.00deg)"
    );
}

#[test]
fn css_backface_is_darker_than_front() {
    assert!((css::backface_brightness(0.0) - 1.0).abs() < 1e-6);
    assert!((css::backface_brightness(180.0) - 1.0).abs() < 1e-5);
    let side_on = css::backface_brightness(90.0);
    assert!((side_on - 0.75).abs() < 1e-5);
    assert!(css::backface_brightness(45.0) > side_on);
}
