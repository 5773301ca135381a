use std::ops::{Range, RangeInclusive};

use super::math::vec::Vec3;

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub bounds: (f32, f32),
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
            bounds: (0.0, f32::INFINITY),
        }
    }

    pub fn new_with_range(origin: Vec3, direction: Vec3, range: Range<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
            bounds: (range.start, range.end),
        }
    }

    pub fn range(&self) -> RangeInclusive<f32> {
        self.bounds.0..=self.bounds.1
    }

    /// Same ray, cut at `t`
    pub fn clipped(self, t: f32) -> Self {
        Self {
            bounds: (self.bounds.0, t.min(self.bounds.1)),
            ..self
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}
