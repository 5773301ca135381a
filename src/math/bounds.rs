use glam::Vec3;

use crate::ray::Ray;

use super::{
    float::FloatAsExt,
    vec::{axis, unit_axis},
};

/// Axis Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub origin: Vec3,
    /// Should have all coordinates >= 0
    pub diag: Vec3,
}

/// A point where a ray crosses the surface of a [Bounds]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub t: f32,
    /// Outward normal of the crossed face
    pub normal: Vec3,
}

/// Where the supporting line of a ray enters and leaves a [Bounds].
///
/// `t` values are not clipped to the ray range and may be negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    pub enter: Face,
    pub exit: Face,
}

impl Bounds {
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        let origin = a.min(b);
        let end = a.max(b);

        Self {
            origin,
            diag: end - origin,
        }
    }

    pub fn centered(center: Vec3, size: Vec3) -> Self {
        Self::from_points(center - size / 2.0, center + size / 2.0)
    }

    pub fn end(&self) -> Vec3 {
        self.origin + self.diag
    }

    pub fn center(&self) -> Vec3 {
        self.origin + self.diag / 2.0
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::from_points(self.origin.min(other.origin), self.end().max(other.end()))
    }

    /// Slab test against the whole line supporting `ray`
    pub fn ray_crossing(&self, ray: &Ray) -> Option<Crossing> {
        let end = self.end();
        let mut enter = (f32::NEG_INFINITY, 0);
        let mut exit = (f32::INFINITY, 0);

        for a in 0..3 {
            let origin = axis(ray.origin, a);
            let (low, high) = (axis(self.origin, a), axis(end, a));

            let Some(direction) = axis(ray.direction, a).into_non_zero(f32::EPSILON) else {
                // Parallel to the slab: either always inside or never
                if origin < low || origin > high {
                    return None;
                }
                continue;
            };

            let t_low = (low - origin) / direction;
            let t_high = (high - origin) / direction;
            let (t_near, t_far) = if t_low < t_high {
                (t_low, t_high)
            } else {
                (t_high, t_low)
            };

            if t_near > enter.0 {
                enter = (t_near, a);
            }
            if t_far < exit.0 {
                exit = (t_far, a);
            }
        }

        if enter.0 > exit.0 {
            return None;
        }

        let sign = |a: usize| axis(ray.direction, a).signum();
        Some(Crossing {
            enter: Face {
                t: enter.0,
                normal: -sign(enter.1) * unit_axis(enter.1),
            },
            exit: Face {
                t: exit.0,
                normal: sign(exit.1) * unit_axis(exit.1),
            },
        })
    }

    /// Whether some part of `ray`, within its range, lies inside the box
    pub fn ray_overlaps(&self, ray: &Ray) -> bool {
        let (start, end) = ray.bounds;
        self.ray_crossing(ray)
            .map_or(false, |c| c.exit.t >= start && c.enter.t <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Bounds {
        Bounds::centered(Vec3::ZERO, Vec3::ONE)
    }

    #[test]
    fn centered_box() {
        let b = Bounds::centered(Vec3::new(1.0, 0.0, 0.0), Vec3::splat(2.0));
        assert_eq!(b.origin, Vec3::new(0.0, -1.0, -1.0));
        assert_eq!(b.end(), Vec3::new(2.0, 1.0, 1.0));
        assert_eq!(b.center(), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn crossing_from_outside() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z);
        let crossing = unit_box().ray_crossing(&ray).unwrap();
        assert!((crossing.enter.t - 4.5).abs() < 1e-5);
        assert!((crossing.exit.t - 5.5).abs() < 1e-5);
        assert_eq!(crossing.enter.normal, Vec3::Z);
        assert_eq!(crossing.exit.normal, -Vec3::Z);
    }

    #[test]
    fn crossing_from_inside() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        let crossing = unit_box().ray_crossing(&ray).unwrap();
        assert!(crossing.enter.t < 0.0);
        assert!((crossing.exit.t - 0.5).abs() < 1e-5);
        assert_eq!(crossing.exit.normal, Vec3::Y);
    }

    #[test]
    fn parallel_miss() {
        let ray = Ray::new(Vec3::new(0.0, 2.0, 5.0), -Vec3::Z);
        assert!(unit_box().ray_crossing(&ray).is_none());
        assert!(!unit_box().ray_overlaps(&ray));
    }

    #[test]
    fn overlap_respects_range() {
        let ray = Ray::new_with_range(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z, 0.0..1.0);
        assert!(!unit_box().ray_overlaps(&ray));
    }

    #[test]
    fn union() {
        let a = Bounds::centered(Vec3::ZERO, Vec3::ONE);
        let b = Bounds::centered(Vec3::X, Vec3::ONE);
        let u = a.union(&b);
        assert_eq!(u.origin, Vec3::splat(-0.5));
        assert_eq!(u.end(), Vec3::new(1.5, 0.5, 0.5));
    }
}
