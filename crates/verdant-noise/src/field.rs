//! Continuous pseudo-random scalar field over 3D space.
//!
//! The field is a fixed-seed Perlin gradient noise. Vector-valued variants
//! decorrelate their components by sampling the same field at points shifted
//! by fixed offsets.

use std::sync::LazyLock;

use glam::{Vec2, Vec3};
use noise::{NoiseFn, Perlin};

/// Offsets applied to the input point for each component of [`noise2`].
pub const NOISE2_OFFSETS: [Vec3; 2] = [Vec3::new(0.0, 0.0, 0.0), Vec3::new(3.0, 7.0, 11.0)];

/// Offsets applied to the input point for each component of [`noise3`].
pub const NOISE3_OFFSETS: [Vec3; 3] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(3.0, 7.0, 11.0),
    Vec3::new(13.0, 17.0, 19.0),
];

const DEFAULT_FIELD_SEED: u32 = 0;

static DEFAULT_FIELD: LazyLock<NoiseField> = LazyLock::new(NoiseField::default);

/// A deterministic gradient noise field.
///
/// Identical input always yields identical output; the field carries no
/// mutable state after construction.
#[derive(Clone, Debug)]
pub struct NoiseField {
    perlin: Perlin,
}

impl NoiseField {
    /// Create a field from a permutation seed.
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }

    /// Sample the scalar field. The range is approximately `[-1, 1]`.
    pub fn sample(&self, p: Vec3) -> f32 {
        self.perlin.get([p.x as f64, p.y as f64, p.z as f64]) as f32
    }

    /// Sample two approximately independent components.
    pub fn sample2(&self, p: Vec3) -> Vec2 {
        Vec2::new(
            self.sample(p + NOISE2_OFFSETS[0]),
            self.sample(p + NOISE2_OFFSETS[1]),
        )
    }

    /// Sample three approximately independent components.
    pub fn sample3(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            self.sample(p + NOISE3_OFFSETS[0]),
            self.sample(p + NOISE3_OFFSETS[1]),
            self.sample(p + NOISE3_OFFSETS[2]),
        )
    }
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD_SEED)
    }
}

/// Sample the shared default field.
#[inline]
pub fn noise(p: Vec3) -> f32 {
    DEFAULT_FIELD.sample(p)
}

/// Two-component noise from the shared default field.
#[inline]
pub fn noise2(p: Vec3) -> Vec2 {
    DEFAULT_FIELD.sample2(p)
}

/// Three-component noise from the shared default field.
#[inline]
pub fn noise3(p: Vec3) -> Vec3 {
    DEFAULT_FIELD.sample3(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_same_value() {
        let p = Vec3::new(0.37, 1.91, -4.2);
        assert_eq!(noise(p), noise(p), "noise must be a pure function");
        assert_eq!(noise3(p), noise3(p), "noise3 must be a pure function");
    }

    #[test]
    fn test_default_field_matches_free_functions() {
        let field = NoiseField::default();
        let p = Vec3::new(12.5, -3.25, 0.75);
        assert_eq!(field.sample(p), noise(p));
        assert_eq!(field.sample2(p), noise2(p));
        assert_eq!(field.sample3(p), noise3(p));
    }

    #[test]
    fn test_vector_components_use_offsets() {
        let p = Vec3::new(0.4, 0.8, 1.6);
        let v2 = noise2(p);
        assert_eq!(v2.x, noise(p));
        assert_eq!(v2.y, noise(p + Vec3::new(3.0, 7.0, 11.0)));

        let v3 = noise3(p);
        assert_eq!(v3.x, noise(p));
        assert_eq!(v3.y, noise(p + Vec3::new(3.0, 7.0, 11.0)));
        assert_eq!(v3.z, noise(p + Vec3::new(13.0, 17.0, 19.0)));
    }

    #[test]
    fn test_components_are_decorrelated() {
        let mut differing = 0;
        for i in 0..64 {
            let p = Vec3::new(i as f32 * 0.173, i as f32 * 0.291, i as f32 * 0.047);
            let v = noise3(p);
            if (v.x - v.y).abs() > 1e-4 && (v.y - v.z).abs() > 1e-4 {
                differing += 1;
            }
        }
        assert!(
            differing > 48,
            "noise3 components should rarely coincide, only {differing}/64 differed"
        );
    }

    #[test]
    fn test_field_is_continuous() {
        let step = 1e-3;
        for i in 0..2_000 {
            let p = Vec3::new(i as f32 * 0.01, 0.5, 0.25);
            let delta = (noise(p + Vec3::X * step) - noise(p)).abs();
            assert!(delta < 0.05, "jump of {delta} at {p}");
        }
    }
}
