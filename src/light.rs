use glam::Vec3;

use crate::{
    color::{self, Color},
    config::PointLightConfig,
    math::vec::RgbAsVec3Ext,
};

/// Light radiating from a single point in every direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub color: Color,
    pub intensity: f32,
    /// Range of the light, 0 for unbounded
    pub distance: f32,
    pub decay: f32,
    pub position: Vec3,
    pub cast_shadow: bool,
}

impl PointLight {
    pub fn new(config: &PointLightConfig) -> Self {
        Self {
            color: color::from_hex(config.color),
            intensity: config.intensity,
            distance: config.distance,
            decay: config.decay,
            position: config.position,
            cast_shadow: config.cast_shadow,
        }
    }

    /// Falloff of the light at distance `d`
    pub fn attenuation(&self, d: f32) -> f32 {
        let falloff = 1.0 / d.powf(self.decay).max(0.01);
        if self.distance > 0.0 {
            let ratio = (d / self.distance).powi(4);
            let window = (1.0 - ratio).clamp(0.0, 1.0);
            falloff * window * window
        } else {
            falloff
        }
    }

    /// Radiance reaching `point`, before any cosine term
    pub fn irradiance(&self, point: Vec3) -> Vec3 {
        let d = self.position.distance(point);
        self.intensity * self.attenuation(d) * self.color.vec()
    }
}
