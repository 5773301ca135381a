use std::cmp::Ordering;

use glam::Vec3;

use crate::{
    math::bounds::Bounds,
    ray::Ray,
    scene::{Intersection, Mesh},
};

/// Bounding volume hierarchy over the meshes of a scene, rebuilt for each frame
pub struct BVH<'a> {
    bounding_box: Bounds,
    node: BVHNode<'a>,
}

enum BVHNode<'a> {
    Node(Box<BVH<'a>>, Box<BVH<'a>>),
    Leaf(&'a Mesh),
}

impl<'a> BVH<'a> {
    pub fn new(meshes: Vec<&'a Mesh>) -> Option<Self> {
        (!meshes.is_empty()).then(|| Self::build(meshes))
    }

    fn build(mut meshes: Vec<&'a Mesh>) -> Self {
        // A Top down implementation
        if meshes.len() == 1 {
            let mesh = meshes[0];
            return Self {
                bounding_box: mesh.bounding_box(),
                node: BVHNode::Leaf(mesh),
            };
        }

        let bounding_box = meshes
            .iter()
            .map(|m| m.bounding_box())
            .reduce(|a, b| a.union(&b))
            .unwrap_or(Bounds {
                origin: Vec3::ZERO,
                diag: Vec3::ZERO,
            });

        // Sort by main axis
        let Vec3 { x, y, z } = bounding_box.diag;
        let main_axis: fn(Vec3) -> f32 = if x >= y && x >= z {
            |v| v.x
        } else if y >= z {
            |v| v.y
        } else {
            |v| v.z
        };

        meshes.sort_by(|a, b| {
            let a = main_axis(a.bounding_box().center());
            let b = main_axis(b.bounding_box().center());
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        });

        // Take half of it in a node, the other half in the other node
        let second_batch = meshes.split_off(meshes.len() / 2);
        let first_batch = meshes;

        Self {
            bounding_box,
            node: BVHNode::Node(
                Box::new(Self::build(first_batch)),
                Box::new(Self::build(second_batch)),
            ),
        }
    }

    pub fn bounding_box(&self) -> Bounds {
        self.bounding_box
    }

    /// Nearest hit among the meshes accepted by `filter`
    pub fn intersect<F>(&self, ray: Ray, filter: &F) -> Option<(&'a Mesh, Intersection)>
    where
        F: Fn(&Mesh) -> bool,
    {
        if !self.bounding_box.ray_overlaps(&ray) {
            return None;
        }

        match &self.node {
            BVHNode::Node(a, b) => match a.intersect(ray, filter) {
                Some(record) => b.intersect(ray.clipped(record.1.t), filter).or(Some(record)),
                None => b.intersect(ray, filter),
            },
            BVHNode::Leaf(mesh) => {
                if !filter(*mesh) {
                    return None;
                }
                mesh.intersect(&ray).map(|hit| (*mesh, hit))
            }
        }
    }

    /// Whether any mesh accepted by `filter` is hit
    pub fn occluded<F>(&self, ray: Ray, filter: &F) -> bool
    where
        F: Fn(&Mesh) -> bool,
    {
        if !self.bounding_box.ray_overlaps(&ray) {
            return false;
        }

        match &self.node {
            BVHNode::Node(a, b) => a.occluded(ray, filter) || b.occluded(ray, filter),
            BVHNode::Leaf(mesh) => filter(*mesh) && mesh.intersect(&ray).is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        geometry::BoxGeometry,
        material::{MaterialDescriptor, Phong, Side},
    };

    fn row() -> Vec<Mesh> {
        let geometry = Arc::new(BoxGeometry::cube(1.0));
        let material = Arc::new(MaterialDescriptor::new(
            "test",
            Phong::new(0xffffff, Side::Front),
        ));
        (0..5)
            .map(|i| {
                let mut mesh = Mesh::new(geometry.clone(), material.clone());
                mesh.position = Vec3::new(0.0, 0.0, -3.0 * i as f32);
                mesh.cast_shadow = i % 2 == 1;
                mesh
            })
            .collect()
    }

    #[test]
    fn empty() {
        assert!(BVH::new(vec![]).is_none());
    }

    #[test]
    fn bounds_cover_all() {
        let meshes = row();
        let bvh = BVH::new(meshes.iter().collect()).unwrap();
        assert_eq!(bvh.bounding_box().origin, Vec3::new(-0.5, -0.5, -12.5));
        assert_eq!(bvh.bounding_box().end(), Vec3::splat(0.5));
    }

    #[test]
    fn nearest_hit_wins() {
        let meshes = row();
        let bvh = BVH::new(meshes.iter().collect()).unwrap();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z);

        let (mesh, hit) = bvh.intersect(ray, &|_| true).unwrap();
        assert!(std::ptr::eq(mesh, &meshes[0]));
        assert!((hit.t - 4.5).abs() < 1e-5);
    }

    #[test]
    fn filter_skips_meshes() {
        let meshes = row();
        let bvh = BVH::new(meshes.iter().collect()).unwrap();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z);

        let (mesh, _) = bvh.intersect(ray, &|m| m.cast_shadow).unwrap();
        assert!(std::ptr::eq(mesh, &meshes[1]));
    }

    #[test]
    fn occlusion() {
        let meshes = row();
        let bvh = BVH::new(meshes.iter().collect()).unwrap();

        let blocked = Ray::new_with_range(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z, 0.0..20.0);
        assert!(bvh.occluded(blocked, &|_| true));

        let short = Ray::new_with_range(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z, 0.0..4.0);
        assert!(!bvh.occluded(short, &|_| true));

        let aside = Ray::new(Vec3::new(3.0, 0.0, 5.0), -Vec3::Z);
        assert!(!bvh.occluded(aside, &|_| true));
    }
}
