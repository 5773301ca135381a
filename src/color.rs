use image::Rgb;

use crate::math::vec::{RgbAsVec3Ext, Vec3, Vec3AsRgbExt};

/// Linear RGB color, as used by the shading code.
pub type Color = Rgb<f32>;

/// Decode a `0xRRGGBB` sRGB value into linear RGB.
pub fn from_hex(hex: u32) -> Color {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    Rgb([channel(16), channel(8), channel(0)].map(srgb_to_linear))
}

pub fn clamp(color: Color) -> Color {
    color.vec().clamp(Vec3::ZERO, Vec3::ONE).rgb()
}

/// Encode a linear color into an 8 bit sRGB pixel
pub fn to_srgb8(color: Color) -> Rgb<u8> {
    Rgb(clamp(color)
        .0
        .map(|c| (linear_to_srgb(c) * 255.0 + 0.5) as u8))
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}
