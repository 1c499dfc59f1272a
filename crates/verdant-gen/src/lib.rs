//! Procedural geometry generators that enrich an existing scene: terrain
//! relief, turbulent displacement, grown hair strands, and scattered
//! instanced grass.
//!
//! Every generator consumes an explicitly passed [`RandomStream`] (where it
//! needs randomness) so runs are reproducible for a given seed.

mod displacement;
mod error;
mod grass;
mod hair;
mod policy;
mod rng;
mod sampler;
mod terrain;

pub use displacement::{DisplacementParams, apply_displacement, displacement_color, make_displacement};
pub use error::GenError;
pub use grass::{GrassParams, make_grass, scatter_frame};
pub use hair::{HairParams, grow_strand, grow_strands, make_hair};
pub use policy::RatioPolicy;
pub use rng::{RandomStream, derive_stream_seed};
pub use sampler::{SurfaceSamples, sample_surface};
pub use terrain::{TerrainParams, apply_terrain, make_terrain, terrain_color};
