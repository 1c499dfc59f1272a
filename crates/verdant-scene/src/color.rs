//! Colour space helpers.

use glam::Vec3;

/// Convert an sRGB-encoded colour in `[0, 1]` to linear RGB.
pub fn srgb_to_linear(srgb: Vec3) -> Vec3 {
    fn channel(c: f32) -> f32 {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    Vec3::new(channel(srgb.x), channel(srgb.y), channel(srgb.z))
}

/// Linear RGB from 8-bit sRGB channel values.
pub fn srgb8(rgb: [u8; 3]) -> Vec3 {
    srgb_to_linear(Vec3::new(rgb[0] as f32, rgb[1] as f32, rgb[2] as f32) / 255.0)
}
