use crate::{
    config::CameraConfig,
    math::{
        quaternion::{LookAt, Quat},
        vec::Vec3,
    },
    ray::Ray,
};

/// Pinhole camera looking down its local -Z axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view, in degrees
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub rotation: Quat,
}

impl PerspectiveCamera {
    pub fn new(fov_y_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y_deg,
            aspect,
            near,
            far,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        let mut camera = Self::new(config.fov_y_deg, config.aspect, config.near, config.far);
        camera.position = config.position;
        camera.look_at(config.look_at);
        camera
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.rotation = LookAt {
            eye: self.position,
            target,
            up: Vec3::Y,
        }
        .into();
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * -Vec3::Z
    }

    /// Ray through the viewport point `(vx, vy)`, both in `[-1, 1]`, `vy` pointing up.
    ///
    /// The ray only covers the depth range between the near and far planes.
    pub fn ray(&self, vx: f32, vy: f32) -> Ray {
        let h = (self.fov_y_deg.to_radians() / 2.0).tan();
        let local = Vec3::new(vx * h * self.aspect, vy * h, -1.0);
        // Depth is measured along the view axis, `local` has a depth of exactly 1
        let len = local.length();

        Ray::new_with_range(
            self.position,
            self.rotation * local,
            self.near * len..self.far * len,
        )
    }
}
