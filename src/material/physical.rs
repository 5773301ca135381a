use glam::Vec3;

use crate::{
    color::{self, Color},
    config::MaterialConfig,
    math::vec::RgbAsVec3Ext,
};

use super::{Material, Side};

/// Reflectance at normal incidence of a dielectric with an index of refraction of 1.5
const DIELECTRIC_F0: f32 = 0.04;

/// Rough dielectric that may let part of the light through
pub struct Physical {
    pub color: Color,
    pub transparent: bool,
    pub side: Side,
    pub transmission: f32,
    pub roughness: f32,
}

impl Physical {
    pub fn from_config(config: &MaterialConfig) -> Self {
        Self {
            color: color::from_hex(config.color),
            transparent: config.transparent,
            side: config.side,
            transmission: config.transmission.clamp(0.0, 1.0),
            roughness: config.roughness.clamp(0.0, 1.0),
        }
    }

    /// Blinn-Phong exponent matching a GGX lobe of the same roughness
    pub fn shininess(&self) -> f32 {
        let alpha = (self.roughness * self.roughness).max(1e-3);
        2.0 / (alpha * alpha) - 2.0
    }
}

impl Material for Physical {
    fn side(&self) -> Side {
        self.side
    }

    fn diffuse(&self) -> Option<Vec3> {
        Some(self.color.vec())
    }

    fn specular(&self) -> Option<(Vec3, f32)> {
        Some((Vec3::splat(DIELECTRIC_F0), self.shininess()))
    }

    fn transmission(&self) -> Option<f32> {
        (self.transmission > 0.0).then_some(self.transmission)
    }

    fn transparent(&self) -> bool {
        self.transparent
    }
}
