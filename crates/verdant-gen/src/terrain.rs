//! Ridged terrain relief with radial falloff and banded colouring.

use glam::Vec3;
use tracing::info;
use verdant_noise::ridge;
use verdant_scene::{Mesh, ObjectId, Scene, srgb8};

use crate::error::{GenError, require_finite, require_positive};
use crate::policy::RatioPolicy;

/// Upper bound, in percent of `height`, of the bottom colour band.
const BOTTOM_BAND_PERCENT: f32 = 30.0;
/// Upper bound, in percent of `height`, of the middle colour band.
const MIDDLE_BAND_PERCENT: f32 = 60.0;

/// Terrain generator parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainParams {
    /// Radius at which the radial falloff reaches zero.
    pub size: f32,
    /// Centre of the radial falloff.
    pub center: Vec3,
    /// Maximum displacement along the normal.
    pub height: f32,
    /// Frequency multiplier applied to positions before sampling noise.
    pub scale: f32,
    /// Octave count passed to [`ridge`].
    pub octaves: u32,
    /// Colour for vertices up to 30% of `height`.
    pub bottom: Vec3,
    /// Colour for vertices up to 60% of `height`.
    pub middle: Vec3,
    /// Colour above 60% of `height`.
    pub top: Vec3,
    /// Treatment of the falloff beyond `size`, where it turns negative.
    pub falloff: RatioPolicy,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            size: 0.1,
            center: Vec3::ZERO,
            height: 0.1,
            scale: 10.0,
            octaves: 8,
            bottom: srgb8([154, 205, 50]),
            middle: srgb8([205, 133, 63]),
            top: srgb8([240, 255, 255]),
            falloff: RatioPolicy::Extrapolate,
        }
    }
}

impl TerrainParams {
    fn validate(&self) -> Result<(), GenError> {
        require_positive("size", self.size)?;
        require_positive("height", self.height)?;
        require_finite("scale", self.scale)?;
        if !self.center.is_finite() {
            return Err(GenError::InvalidParameter {
                name: "center",
                reason: format!("must be finite, got {}", self.center),
            });
        }
        Ok(())
    }
}

/// Colour band for a vertex at `percent` of the configured height.
/// Band boundaries belong to the lower band.
pub fn terrain_color(percent: f32, params: &TerrainParams) -> Vec3 {
    if percent <= BOTTOM_BAND_PERCENT {
        params.bottom
    } else if percent <= MIDDLE_BAND_PERCENT {
        params.middle
    } else {
        params.top
    }
}

/// Displace every vertex of `mesh` along its normal by ridged noise scaled by
/// a radial falloff, colour it by height band, then recompute normals.
///
/// The colour array is replaced so it always holds one entry per vertex.
pub fn apply_terrain(mesh: &mut Mesh, params: &TerrainParams) -> Result<(), GenError> {
    params.validate()?;
    if mesh.normals.len() != mesh.positions.len() {
        return Err(GenError::MissingAttribute("normals"));
    }
    mesh.validate_topology()?;

    let mut colors = Vec::with_capacity(mesh.positions.len());
    for (position, normal) in mesh.positions.iter_mut().zip(&mesh.normals) {
        let p = *position;
        let falloff = params
            .falloff
            .apply(1.0 - (p - params.center).length() / params.size);
        *position += params.height * ridge(p * params.scale, params.octaves) * falloff * *normal;

        let percent = position.y / params.height * 100.0;
        colors.push(terrain_color(percent, params));
    }
    mesh.colors = colors;
    mesh.recompute_normals();
    Ok(())
}

/// Run the terrain generator on the mesh of `object`.
pub fn make_terrain(
    scene: &mut Scene,
    object: ObjectId,
    params: &TerrainParams,
) -> Result<(), GenError> {
    let shape = scene.object_shape(object)?;
    let mesh = scene.shape_mut(shape);
    apply_terrain(mesh, params)?;
    info!(
        object = %scene.object(object).name,
        vertices = scene.shape(shape).len(),
        octaves = params.octaves,
        "Generated terrain"
    );
    Ok(())
}
