//! Multi-octave fractal combinators over a [`NoiseField`].
//!
//! Every combinator sums `octaves + 1` terms, `i = 0..=octaves`, where term
//! `i` samples the field at frequency `2^i` and is weighted by `2^-i`. An
//! octave count of zero therefore still yields one contribution.

use glam::Vec3;

use crate::field::{NoiseField, noise};

/// The three octave summation schemes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fractal {
    /// Fractal Brownian motion: signed, smooth.
    Fbm,
    /// Sum of absolute values: non-negative, sharper creases.
    Turbulence,
    /// Squared inverted absolute value: crests along noise zero-crossings.
    Ridge,
}

impl Fractal {
    /// Map one raw noise sample to this scheme's per-octave term.
    #[inline]
    pub fn term(self, n: f32) -> f32 {
        match self {
            Self::Fbm => n,
            Self::Turbulence => n.abs(),
            Self::Ridge => {
                let inv = 1.0 - n.abs();
                inv * inv / 2.0
            }
        }
    }

    /// Evaluate the combinator against an explicit field.
    pub fn sample_with(self, field: &NoiseField, p: Vec3, octaves: u32) -> f32 {
        accumulate(|q| field.sample(q), self, p, octaves)
    }

    /// Evaluate the combinator against the shared default field.
    pub fn sample(self, p: Vec3, octaves: u32) -> f32 {
        accumulate(noise, self, p, octaves)
    }
}

fn accumulate(source: impl Fn(Vec3) -> f32, kind: Fractal, p: Vec3, octaves: u32) -> f32 {
    let mut total = 0.0;
    let mut frequency = 1.0_f32;
    let mut amplitude = 1.0_f32;

    for _ in 0..=octaves {
        total += amplitude * kind.term(source(p * frequency));
        frequency *= 2.0;
        amplitude *= 0.5;
    }

    total
}

/// Fractal Brownian motion over the default field.
#[inline]
pub fn fbm(p: Vec3, octaves: u32) -> f32 {
    Fractal::Fbm.sample(p, octaves)
}

/// Turbulence over the default field. Never negative.
#[inline]
pub fn turbulence(p: Vec3, octaves: u32) -> f32 {
    Fractal::Turbulence.sample(p, octaves)
}

/// Ridged noise over the default field. Never negative.
#[inline]
pub fn ridge(p: Vec3, octaves: u32) -> f32 {
    Fractal::Ridge.sample(p, octaves)
}
