// Host-side tests for the 3D hero math: scrubbed timeline, camera, orbit,
// model placement and the procedural chair mesh.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod hero_core;

use glam::{Vec3, Vec4};
use hero_core::camera::{Camera, ModelPlacement, Orbit};
use hero_core::constants::ORBIT_PITCH_LIMIT_RAD;
use hero_core::mesh::{build_chair, ChairMesh, BASE_LEG_COUNT};
use hero_core::timeline::{Pose, ScrubTimeline, TweenSpec, TweenTarget};
use std::f32::consts::FRAC_PI_2;

fn tween(target: TweenTarget, z: Option<f32>, x: Option<f32>, duration: f32, at: Option<f32>) -> TweenSpec {
    TweenSpec {
        target,
        x,
        y: None,
        z,
        duration,
        at,
    }
}

fn bundled_like_timeline() -> ScrubTimeline {
    ScrubTimeline::new(
        Pose::default(),
        &[
            tween(TweenTarget::Position, Some(0.35), None, 1.0, None),
            tween(TweenTarget::Position, Some(0.0), None, 1.0, None),
            tween(TweenTarget::Rotation, None, Some(0.12), 2.0, Some(0.0)),
        ],
    )
}

#[test]
fn timeline_places_tweens_sequentially() {
    let tl = bundled_like_timeline();
    assert!(!tl.is_empty());
    assert_eq!(tl.total_duration(), 2.0);
}

#[test]
fn timeline_samples_follow_the_playhead() {
    let tl = bundled_like_timeline();
    assert_eq!(tl.sample(0.0), Pose::default());

    // halfway: first position tween done, rotation tween halfway (ease-out quad)
    let mid = tl.sample(0.5);
    assert!((mid.position.z - 0.35).abs() < 1e-6);
    assert!((mid.rotation.x - 0.09).abs() < 1e-6);

    let end = tl.sample(1.0);
    assert!(end.position.z.abs() < 1e-6);
    assert!((end.rotation.x - 0.12).abs() < 1e-6);
    assert_eq!(end.rotation.y, 0.0);
    assert_eq!(tl.sample(3.0), end);
}

#[test]
fn timeline_chains_segments_in_start_order() {
    // written out of order: the tween at t=1 starts from where the t=0 one ends
    let tl = ScrubTimeline::new(
        Pose::default(),
        &[
            tween(TweenTarget::Position, Some(5.0), None, 1.0, Some(1.0)),
            tween(TweenTarget::Position, Some(2.0), None, 1.0, Some(0.0)),
        ],
    );
    assert!((tl.sample(0.5).position.z - 2.0).abs() < 1e-6);
    assert!((tl.sample(1.0).position.z - 5.0).abs() < 1e-6);
}

#[test]
fn empty_timeline_holds_the_base_pose() {
    let base = Pose {
        position: Vec3::new(0.0, 1.0, 0.0),
        rotation: Vec3::ZERO,
    };
    let tl = ScrubTimeline::new(base, &[]);
    assert!(tl.is_empty());
    assert_eq!(tl.total_duration(), 0.0);
    assert_eq!(tl.sample(0.7), base);
}

#[test]
fn camera_projects_target_to_center() {
    let mut cam = Camera::default();
    cam.set_viewport(1600, 800);
    assert_eq!(cam.aspect, 2.0);
    cam.set_viewport(0, 800);
    assert_eq!(cam.aspect, 2.0);

    let clip = cam.view_projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(clip.w > 0.0);
    assert!((clip.x / clip.w).abs() < 1e-6);
    assert!((clip.y / clip.w).abs() < 1e-6);
    let depth = clip.z / clip.w;
    assert!((0.0..=1.0).contains(&depth));
}

#[test]
fn orbit_ignores_moves_without_a_drag() {
    let mut orbit = Orbit::default();
    orbit.drag_to(300.0, 300.0);
    assert_eq!(orbit.yaw, 0.0);
    assert_eq!(orbit.eye(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO), Vec3::new(0.0, 0.0, 3.0));
}

#[test]
fn orbit_drag_rotates_and_keeps_distance() {
    let mut orbit = Orbit::default();
    orbit.begin_drag(0.0, 0.0);
    assert!(orbit.is_dragging());
    orbit.drag_to(100.0, 0.0);
    assert!((orbit.yaw + 0.5).abs() < 1e-6);

    let eye = orbit.eye(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO);
    assert!((eye.length() - 3.0).abs() < 1e-5);
    assert!(eye.x < 0.0);

    orbit.drag_to(100.0, 1.0e6);
    assert_eq!(orbit.pitch, ORBIT_PITCH_LIMIT_RAD);
    orbit.end_drag();
    assert!(!orbit.is_dragging());
}

#[test]
fn placement_scales_offsets_and_spins() {
    let placement = ModelPlacement {
        offset: Vec3::new(0.0, -0.5, 0.0),
        scale: 1.3,
    };
    let m = placement.matrix(&Pose::default());
    let p = m.transform_point3(Vec3::X);
    assert!((p - Vec3::new(1.3, -0.5, 0.0)).length() < 1e-6);

    let spun = Pose {
        position: Vec3::new(0.0, 0.0, 0.35),
        rotation: Vec3::new(0.0, FRAC_PI_2, 0.0),
    };
    let p = placement.matrix(&spun).transform_point3(Vec3::X);
    assert!((p - Vec3::new(0.0, -0.5, 0.35 - 1.3)).length() < 1e-5);
}

#[test]
fn chair_mesh_is_well_formed() {
    let mesh = build_chair();
    assert!(!mesh.vertices.is_empty());
    assert!(mesh.vertices.len() < u16::MAX as usize);
    assert_eq!(mesh.indices.len() % 3, 0);
    assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    for v in &mesh.vertices {
        let n = Vec3::from(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-4);
    }
    // every part is a box of twelve triangles; the base alone has two per leg
    assert_eq!(mesh.triangle_count() % 12, 0);
    assert!(mesh.triangle_count() >= BASE_LEG_COUNT * 2 * 12);
}

#[test]
fn chair_mesh_fits_the_default_framing() {
    let (lo, hi) = build_chair().bounds();
    assert!(lo.y > -0.6 && hi.y < 1.0);
    assert!(lo.x > -0.5 && hi.x < 0.5);
    // roughly symmetric left to right
    assert!((lo.x + hi.x).abs() < 1e-3);
}

#[test]
fn boxes_wind_counter_clockwise_from_outside() {
    let mut mesh = ChairMesh::default();
    mesh.push_box(glam::Mat4::IDENTITY, Vec3::new(1.0, 2.0, 0.5), [1.0, 1.0, 1.0]);
    assert_eq!(mesh.triangle_count(), 12);
    for tri in mesh.indices.chunks(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.vertices[i as usize]);
        let face = (Vec3::from(b.position) - Vec3::from(a.position))
            .cross(Vec3::from(c.position) - Vec3::from(a.position));
        assert!(face.dot(Vec3::from(a.normal)) > 0.0);
    }
}
