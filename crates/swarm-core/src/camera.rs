//! Camera framing for the particle scene.
//!
//! Platform-independent; the web frontend builds its view/projection
//! uniforms from this.

use crate::config::Viewport;
use glam::{Mat4, Vec3};

const BASE_FOV_DEG: f32 = 45.0;
const PORTRAIT_FOV_BOOST: f32 = 1.5;
const PORTRAIT_DISTANCE_BOOST: f32 = 1.2;
const MIN_DISTANCE: f32 = 100.0;

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

impl Camera {
    /// Frame the text plane so one world unit is roughly one CSS pixel.
    ///
    /// Portrait viewports widen the field of view and pull back a little so
    /// long words still fit.
    pub fn for_viewport(viewport: Viewport) -> Self {
        let vp = viewport.clamped();
        let aspect = vp.width / vp.height;
        let portrait = vp.is_portrait();
        let fov_deg = if portrait {
            BASE_FOV_DEG * PORTRAIT_FOV_BOOST
        } else {
            BASE_FOV_DEG
        };
        let distance = (vp.height / 2.0
            * if portrait {
                PORTRAIT_DISTANCE_BOOST
            } else {
                1.0
            })
        .max(MIN_DISTANCE);
        Self {
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: fov_deg.to_radians(),
            znear: 1.0,
            zfar: 10_000.0,
        }
    }

    /// Orbit the eye around the target's Y axis by `degrees`.
    pub fn swayed(&self, degrees: f32) -> Self {
        let rot = glam::Quat::from_rotation_y(degrees.to_radians());
        let mut cam = self.clone();
        cam.eye = self.target + rot * (self.eye - self.target);
        cam
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
