use std::sync::Arc;

use glam::Vec3;

use crate::{
    geometry::BoxGeometry,
    material::{MaterialDescriptor, Side},
    math::{bounds::Bounds, vec::Vec3SameDirExt},
    ray::Ray,
};

/// A geometry placed in the world with a material
#[derive(Debug, Clone)]
pub struct Mesh {
    pub label: Option<String>,
    pub geometry: Arc<BoxGeometry>,
    pub material: Arc<MaterialDescriptor>,
    pub position: Vec3,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub t: f32,
    pub position: Vec3,
    /// Shading normal, always facing the incoming ray
    pub normal: Vec3,
    /// Whether the ray entered the mesh at this point
    pub front_face: bool,
}

impl Mesh {
    pub fn new(geometry: Arc<BoxGeometry>, material: Arc<MaterialDescriptor>) -> Self {
        Self {
            label: None,
            geometry,
            material,
            position: Vec3::ZERO,
            cast_shadow: false,
            receive_shadow: false,
        }
    }

    pub fn bounding_box(&self) -> Bounds {
        self.geometry.bounding_box(self.position)
    }

    /// Nearest face hit within the ray range, among the faces the material draws
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let crossing = self.bounding_box().ray_crossing(ray)?;
        let range = ray.range();

        let (face, front_face) = match self.material.material.side() {
            Side::Front => (crossing.enter, true),
            Side::Back => (crossing.exit, false),
            Side::Double if range.contains(&crossing.enter.t) => (crossing.enter, true),
            Side::Double => (crossing.exit, false),
        };

        if !range.contains(&face.t) {
            return None;
        }

        Some(Intersection {
            t: face.t,
            position: ray.at(face.t),
            normal: face.normal.same_direction(-ray.direction),
            front_face,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Phong;

    fn mesh(side: Side) -> Mesh {
        Mesh::new(
            Arc::new(BoxGeometry::cube(2.0)),
            Arc::new(MaterialDescriptor::new("test", Phong::new(0xffffff, side))),
        )
    }

    #[test]
    fn front_side_hit_from_outside() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z);
        let hit = mesh(Side::Front).intersect(&ray).unwrap();
        assert!((hit.t - 4.0).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::Z);
        assert!(hit.front_face);
    }

    #[test]
    fn front_side_invisible_from_inside() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(mesh(Side::Front).intersect(&ray).is_none());
    }

    #[test]
    fn back_side_seen_from_inside() {
        let ray = Ray::new(Vec3::ZERO, -Vec3::Y);
        let hit = mesh(Side::Back).intersect(&ray).unwrap();
        assert!((hit.t - 1.0).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::Y);
        assert!(!hit.front_face);
    }

    #[test]
    fn back_side_through_from_outside() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z);
        let hit = mesh(Side::Back).intersect(&ray).unwrap();
        assert!((hit.t - 6.0).abs() < 1e-5);
    }

    #[test]
    fn double_side_takes_nearest() {
        let outside = Ray::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z);
        assert!((mesh(Side::Double).intersect(&outside).unwrap().t - 4.0).abs() < 1e-5);

        let inside = Ray::new(Vec3::ZERO, Vec3::X);
        let hit = mesh(Side::Double).intersect(&inside).unwrap();
        assert!((hit.t - 1.0).abs() < 1e-5);
        assert_eq!(hit.normal, -Vec3::X);
    }

    #[test]
    fn out_of_range() {
        let ray = Ray::new_with_range(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z, 0.0..3.0);
        assert!(mesh(Side::Double).intersect(&ray).is_none());
    }
}
