use glam::Vec3;

use crate::{
    color::{self, Color},
    math::vec::RgbAsVec3Ext,
};

use super::{Material, Side};

/// Lambert diffuse with a Blinn-Phong highlight
pub struct Phong {
    pub albedo: Color,
    pub specular: Color,
    pub shininess: f32,
    pub side: Side,
}

impl Phong {
    pub const DEFAULT_SPECULAR: u32 = 0x111111;
    pub const DEFAULT_SHININESS: f32 = 30.0;

    pub fn new(hex: u32, side: Side) -> Self {
        Self {
            albedo: color::from_hex(hex),
            specular: color::from_hex(Self::DEFAULT_SPECULAR),
            shininess: Self::DEFAULT_SHININESS,
            side,
        }
    }
}

impl Material for Phong {
    fn side(&self) -> Side {
        self.side
    }

    fn diffuse(&self) -> Option<Vec3> {
        Some(self.albedo.vec())
    }

    fn specular(&self) -> Option<(Vec3, f32)> {
        Some((self.specular.vec(), self.shininess))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_back_side() {
        let phong = Phong::new(0xffffff, Side::Back);
        assert_eq!(phong.side(), Side::Back);
        assert_eq!(phong.diffuse(), Some(Vec3::ONE));
        assert!(phong.transmission().is_none());
        assert!(!phong.transparent());

        let (specular, shininess) = phong.specular().unwrap();
        assert!(specular.x > 0.0 && specular.x < 0.01);
        assert_eq!(shininess, 30.0);
    }
}
