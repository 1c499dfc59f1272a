//! Turbulent surface displacement coloured by displacement magnitude.

use glam::Vec3;
use tracing::info;
use verdant_noise::turbulence;
use verdant_scene::shape::interpolate_line;
use verdant_scene::{Mesh, ObjectId, Scene, srgb8};

use crate::error::{GenError, require_finite, require_positive};
use crate::policy::RatioPolicy;

/// Displacement generator parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplacementParams {
    /// Displacement amplitude along the normal.
    pub height: f32,
    /// Frequency multiplier applied to positions before sampling noise.
    pub scale: f32,
    /// Octave count passed to [`turbulence`].
    pub octaves: u32,
    /// Colour of undisplaced vertices.
    pub bottom: Vec3,
    /// Colour of vertices displaced by exactly `height`.
    pub top: Vec3,
    /// Treatment of magnitudes above `height`.
    pub magnitude: RatioPolicy,
}

impl Default for DisplacementParams {
    fn default() -> Self {
        Self {
            height: 0.02,
            scale: 50.0,
            octaves: 8,
            bottom: srgb8([64, 224, 208]),
            top: srgb8([244, 164, 96]),
            magnitude: RatioPolicy::Extrapolate,
        }
    }
}

/// Colour for a normalized displacement magnitude `t`.
pub fn displacement_color(t: f32, params: &DisplacementParams) -> Vec3 {
    interpolate_line(params.bottom, params.top, params.magnitude.apply(t))
}

/// Displace every vertex of `mesh` along its normal by turbulence, colour it
/// by `|displacement| / height`, then recompute normals.
///
/// The colour array is replaced so it always holds one entry per vertex.
pub fn apply_displacement(mesh: &mut Mesh, params: &DisplacementParams) -> Result<(), GenError> {
    require_positive("height", params.height)?;
    require_finite("scale", params.scale)?;
    if mesh.normals.len() != mesh.positions.len() {
        return Err(GenError::MissingAttribute("normals"));
    }
    mesh.validate_topology()?;

    let mut colors = Vec::with_capacity(mesh.positions.len());
    for (position, normal) in mesh.positions.iter_mut().zip(&mesh.normals) {
        let p0 = *position;
        *position += *normal * params.height * turbulence(p0 * params.scale, params.octaves);
        let t = position.distance(p0) / params.height;
        colors.push(displacement_color(t, params));
    }
    mesh.colors = colors;
    mesh.recompute_normals();
    Ok(())
}

/// Run the displacement generator on the mesh of `object`.
pub fn make_displacement(
    scene: &mut Scene,
    object: ObjectId,
    params: &DisplacementParams,
) -> Result<(), GenError> {
    let shape = scene.object_shape(object)?;
    apply_displacement(scene.shape_mut(shape), params)?;
    info!(
        object = %scene.object(object).name,
        vertices = scene.shape(shape).len(),
        octaves = params.octaves,
        "Generated displacement"
    );
    Ok(())
}
