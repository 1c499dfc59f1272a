//! Procedural noise: a deterministic gradient noise field and the fractal
//! octave combinators (fBm, turbulence, ridge) built on top of it.

mod field;
mod fractal;

pub use field::{NOISE2_OFFSETS, NOISE3_OFFSETS, NoiseField, noise, noise2, noise3};
pub use fractal::{Fractal, fbm, ridge, turbulence};
