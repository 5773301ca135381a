pub use glam::Vec3;
use image::Rgb;

pub trait RgbAsVec3Ext {
    fn vec(&self) -> Vec3;
}

impl RgbAsVec3Ext for Rgb<f32> {
    fn vec(&self) -> Vec3 {
        Vec3::from_array(self.0)
    }
}

pub trait Vec3AsRgbExt {
    fn rgb(&self) -> Rgb<f32>;
}

impl Vec3AsRgbExt for Vec3 {
    fn rgb(&self) -> Rgb<f32> {
        Rgb(self.to_array())
    }
}

pub trait Vec3SameDirExt {
    fn same_direction(self, other: Self) -> Self;
}

impl Vec3SameDirExt for Vec3 {
    /// Return self if self and other are pointing in the same general direction (self.dot(other) > 0.0) else, returns -self
    fn same_direction(self, other: Self) -> Self {
        if self.dot(other) > 0.0 {
            self
        } else {
            -self
        }
    }
}

/// Access a vector component by axis index (0 = x, 1 = y, 2 = z)
pub fn axis(v: Vec3, axis: usize) -> f32 {
    v.to_array()[axis]
}

/// Unit vector along the given axis index
pub fn unit_axis(axis: usize) -> Vec3 {
    let mut arr = [0.0; 3];
    arr[axis] = 1.0;
    Vec3::from_array(arr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_direction() {
        assert_eq!(Vec3::X.same_direction(Vec3::new(1.0, 1.0, 0.0)), Vec3::X);
        assert_eq!(Vec3::X.same_direction(Vec3::new(-1.0, 1.0, 0.0)), -Vec3::X);
    }

    #[test]
    fn axes() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!([axis(v, 0), axis(v, 1), axis(v, 2)], [1.0, 2.0, 3.0]);
        assert_eq!(unit_axis(1), Vec3::Y);
    }
}
