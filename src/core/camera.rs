//! Hero camera and the optional drag-to-orbit interaction.
//!
//! These types avoid platform APIs so the math runs in host tests; the web
//! frontend turns them into the uniform matrices.

use glam::{EulerRot, Mat4, Quat, Vec3};

use super::constants::{
    CAMERA_EYE, CAMERA_FOV_DEG, CAMERA_ZFAR, CAMERA_ZNEAR, ORBIT_PITCH_LIMIT_RAD,
    ORBIT_RAD_PER_PX,
};
use super::timeline::Pose;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::from(CAMERA_EYE),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect.max(1e-3), self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

/// Yaw/pitch orbit around the camera target, fed by pointer drags.
#[derive(Clone, Copy, Debug, Default)]
pub struct Orbit {
    pub yaw: f32,
    pub pitch: f32,
    dragging: bool,
    last: [f32; 2],
}

impl Orbit {
    pub fn begin_drag(&mut self, x: f32, y: f32) {
        self.dragging = true;
        self.last = [x, y];
    }

    pub fn drag_to(&mut self, x: f32, y: f32) {
        if !self.dragging {
            return;
        }
        let dx = x - self.last[0];
        let dy = y - self.last[1];
        self.last = [x, y];
        self.yaw -= dx * ORBIT_RAD_PER_PX;
        self.pitch = (self.pitch + dy * ORBIT_RAD_PER_PX)
            .clamp(-ORBIT_PITCH_LIMIT_RAD, ORBIT_PITCH_LIMIT_RAD);
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Eye position orbiting `target` at the distance of `base_eye`.
    pub fn eye(&self, base_eye: Vec3, target: Vec3) -> Vec3 {
        let radius = (base_eye - target).length();
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        target + Vec3::new(radius * cp * sy, radius * sp, radius * cp * cy)
    }
}

/// Where the chair sits in the world before the animated pose is applied.
#[derive(Clone, Copy, Debug)]
pub struct ModelPlacement {
    pub offset: Vec3,
    pub scale: f32,
}

impl ModelPlacement {
    pub fn matrix(&self, pose: &Pose) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::YXZ,
            pose.rotation.y,
            pose.rotation.x,
            pose.rotation.z,
        );
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            rotation,
            self.offset + pose.position,
        )
    }
}
