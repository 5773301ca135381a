use glam::Vec3;

use crate::math::bounds::Bounds;

/// Axis aligned box centered on its local origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxGeometry {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl BoxGeometry {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub fn cube(size: f32) -> Self {
        Self::new(size, size, size)
    }

    pub fn size(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth)
    }

    /// Bounds of the box once its center is moved to `position`
    pub fn bounding_box(&self, position: Vec3) -> Bounds {
        Bounds::centered(position, self.size())
    }
}
