use glam::{Mat3, Vec3};

pub use glam::Quat;

use super::float::FloatAsExt;

/// Orientation of an object at `eye` whose -Z axis faces `target`, with `up` as the
/// preferred up direction.
pub struct LookAt {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl From<LookAt> for Quat {
    fn from(this: LookAt) -> Self {
        let mut backward = this.eye - this.target;
        if backward.length_squared().into_non_zero(0.0).is_none() {
            backward = Vec3::Z;
        }
        let mut backward = backward.normalize();

        // `up` and the view direction are parallel: nudge the direction so that a basis exists
        if this.up.cross(backward).length_squared().into_non_zero(0.0).is_none() {
            if this.up.z.abs() == 1.0 {
                backward.x += 0.0001;
            } else {
                backward.z += 0.0001;
            }
            backward = backward.normalize();
        }

        let right = this.up.cross(backward).normalize();
        let up = backward.cross(right);

        Quat::from_mat3(&Mat3::from_cols(right, up, backward)).normalize()
    }
}
