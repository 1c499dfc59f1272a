//! Hair strands grown outward from sampled surface points.
//!
//! Each strand starts at a sampled point, advances along the current growth
//! direction in equal steps, is perturbed by vector noise and pulled down by
//! gravity, and is coloured from `bottom` at the root to `top` at the tip.

use glam::Vec3;
use tracing::{debug, info};
use verdant_noise::noise3;
use verdant_scene::shape::{compute_tangents, interpolate_line};
use verdant_scene::{Mesh, ObjectId, Scene, ShapeId, srgb8};

use crate::error::{GenError, require_finite, require_positive};
use crate::rng::RandomStream;
use crate::sampler::{SurfaceSamples, sample_surface};

/// Strand generator parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct HairParams {
    /// Number of strands.
    pub count: usize,
    /// Segments per strand.
    pub steps: u32,
    /// Nominal strand length.
    pub length: f32,
    /// Frequency multiplier applied to positions before sampling noise.
    pub scale: f32,
    /// Amplitude of the per-step noise perturbation.
    pub strength: f32,
    /// Downward (-Y) offset applied at every step.
    pub gravity: f32,
    /// Root colour.
    pub bottom: Vec3,
    /// Tip colour.
    pub top: Vec3,
    /// Line radius recorded for every strand vertex.
    pub thickness: f32,
    /// Append the sampled roots to the base mesh.
    pub extend_base: bool,
}

impl Default for HairParams {
    fn default() -> Self {
        Self {
            count: 100_000,
            steps: 1,
            length: 0.02,
            scale: 250.0,
            strength: 0.01,
            gravity: 0.0,
            bottom: srgb8([25, 25, 25]),
            top: srgb8([244, 164, 96]),
            thickness: 0.0001,
            extend_base: true,
        }
    }
}

impl HairParams {
    fn validate(&self) -> Result<(), GenError> {
        if self.steps == 0 {
            return Err(GenError::InvalidParameter {
                name: "steps",
                reason: "must be at least 1".to_string(),
            });
        }
        require_positive("length", self.length)?;
        require_finite("scale", self.scale)?;
        require_finite("strength", self.strength)?;
        require_finite("gravity", self.gravity)?;
        require_finite("thickness", self.thickness)?;
        Ok(())
    }
}

/// Grow one strand from `root` along `normal`.
///
/// Returns `steps + 1` positions and their colours. The last colour is
/// always exactly `top`.
pub fn grow_strand(root: Vec3, normal: Vec3, params: &HairParams) -> (Vec<Vec3>, Vec<Vec3>) {
    let vertex_count = params.steps as usize + 1;
    let mut positions = Vec::with_capacity(vertex_count);
    let mut colors = Vec::with_capacity(vertex_count);
    positions.push(root);
    colors.push(params.bottom);

    let step_length = params.length / params.steps as f32;
    let mut position = root;
    let mut direction = normal;
    for _ in 0..params.steps {
        let previous = position;
        position += direction * step_length + noise3(position * params.scale) * params.strength;
        position.y -= params.gravity;

        if let Some(next) = (position - previous).try_normalize() {
            direction = next;
        }
        positions.push(position);
        colors.push(interpolate_line(
            params.bottom,
            params.top,
            position.distance(root) / params.length,
        ));
    }

    if let Some(tip) = colors.last_mut() {
        *tip = params.top;
    }
    (positions, colors)
}

/// Build a line mesh with one strand per sample.
///
/// Tangents are stored per vertex with `w = 1`.
pub fn grow_strands(samples: &SurfaceSamples, params: &HairParams) -> Result<Mesh, GenError> {
    params.validate()?;

    let mut mesh = Mesh::default();
    for (root, normal) in samples.positions.iter().zip(&samples.normals) {
        let (positions, colors) = grow_strand(*root, *normal, params);
        mesh.add_polyline(&positions, &colors, params.thickness);
    }
    mesh.tangents = compute_tangents(&mesh.lines, &mesh.positions)
        .into_iter()
        .map(|t| t.extend(1.0))
        .collect();

    debug!(
        strands = samples.len(),
        vertices = mesh.len(),
        segments = mesh.lines.len(),
        "Grew strands"
    );
    Ok(mesh)
}

/// Grow hair on the surface of `base` and give `hair` a new line mesh
/// holding the strands.
///
/// With [`HairParams::extend_base`] set, the sampled roots are appended to
/// the base mesh as well.
pub fn make_hair(
    scene: &mut Scene,
    base: ObjectId,
    hair: ObjectId,
    params: &HairParams,
    rng: &mut RandomStream,
) -> Result<ShapeId, GenError> {
    params.validate()?;
    let base_shape = scene.object_shape(base)?;

    let samples = sample_surface(scene.shape(base_shape), params.count, rng)?;
    if params.extend_base {
        samples.append_to(scene.shape_mut(base_shape));
    }

    let strands = grow_strands(&samples, params)?;
    let segments = strands.lines.len();
    let shape = scene.add_shape(strands);
    scene.object_mut(hair).shape = Some(shape);

    info!(
        base = %scene.object(base).name,
        hair = %scene.object(hair).name,
        strands = samples.len(),
        segments,
        "Generated hair"
    );
    Ok(shape)
}
