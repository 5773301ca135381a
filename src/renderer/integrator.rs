use std::f32::consts::PI;

use glam::Vec3;

use crate::{light::PointLight, ray::Ray, scene::Mesh};

use super::bvh::BVH;

/// Offset keeping secondary rays from hitting the surface they leave
const SURFACE_EPSILON: f32 = 1e-4;

/// What an integrator sees of the scene during one frame
pub struct SceneView<'a> {
    pub objects: Option<BVH<'a>>,
    pub lights: Vec<PointLight>,
    pub shadows: bool,
    pub clear_color: Vec3,
}

pub trait Integrator: Send + Sync {
    /// Linear radiance coming back along `ray`
    fn ray_cast(&self, scene: &SceneView, ray: Ray, depth: u32) -> Vec3;
}

pub struct WhittedIntegrator {
    pub max_depth: u32,
}

impl WhittedIntegrator {
    fn occluded(&self, scene: &SceneView, origin: Vec3, light: &PointLight) -> bool {
        let Some(objects) = &scene.objects else { return false };
        let to_light = light.position - origin;
        let distance = to_light.length();
        if distance <= 2.0 * SURFACE_EPSILON {
            return false;
        }

        let shadow_ray = Ray::new_with_range(
            origin,
            to_light,
            SURFACE_EPSILON..distance - SURFACE_EPSILON,
        );
        objects.occluded(shadow_ray, &|m: &Mesh| m.cast_shadow)
    }
}

impl Integrator for WhittedIntegrator {
    fn ray_cast(&self, scene: &SceneView, ray: Ray, depth: u32) -> Vec3 {
        if depth >= self.max_depth {
            return Vec3::ZERO;
        }

        let Some(objects) = &scene.objects else { return scene.clear_color };
        let Some((mesh, hit)) = objects.intersect(ray, &|_| true) else {
            return scene.clear_color;
        };

        let material = &mesh.material.material;
        let view = -ray.direction;

        let mut color = Vec3::ZERO;
        for light in &scene.lights {
            let light_dir = (light.position - hit.position).normalize_or_zero();
            let n_dot_l = hit.normal.dot(light_dir);
            if n_dot_l <= 0.0 {
                continue;
            }

            // cast shadow ray to check light visibility
            if scene.shadows
                && light.cast_shadow
                && mesh.receive_shadow
                && self.occluded(scene, hit.position, light)
            {
                continue;
            }

            let irradiance = n_dot_l * light.irradiance(hit.position);

            let diffuse = 'diffuse: {
                let Some(albedo) = material.diffuse() else { break 'diffuse Vec3::ZERO };
                albedo / PI
            };

            let specular = 'specular: {
                let Some((specular_color, shininess)) = material.specular() else {
                    break 'specular Vec3::ZERO;
                };
                let half = (light_dir + view).normalize_or_zero();
                let n_dot_h = hit.normal.dot(half).max(0.0);
                // Blinn-Phong distribution with the implicit visibility term of 1/4
                let distribution = (shininess * 0.5 + 1.0) / PI * n_dot_h.powf(shininess);
                0.25 * distribution * specular_color
            };

            color += irradiance * (diffuse + specular);
        }

        let transmission = 'transmission: {
            let Some(transmission) = material.transmission() else { break 'transmission None };
            let through = Ray::new_with_range(
                hit.position,
                ray.direction,
                SURFACE_EPSILON..f32::INFINITY,
            );
            Some((transmission, self.ray_cast(scene, through, depth + 1)))
        };

        match transmission {
            Some((t, behind)) => (1.0 - t) * color + t * behind,
            None => color,
        }
    }
}
