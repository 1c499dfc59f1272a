//! Area-weighted surface sampling.
//!
//! Triangles are picked with probability proportional to their area and a
//! point is drawn uniformly inside the chosen triangle, so the resulting
//! point set has uniform density over the surface.

use std::ops::Range;

use glam::{Vec2, Vec3};
use tracing::debug;
use verdant_scene::Mesh;
use verdant_scene::shape::{
    interpolate_triangle, sample_triangles, sample_triangles_cdf, triangle_normal,
};

use crate::error::GenError;
use crate::rng::RandomStream;

/// Points drawn from a mesh surface, independent of the source mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurfaceSamples {
    /// Interpolated positions.
    pub positions: Vec<Vec3>,
    /// Interpolated, re-normalized normals.
    pub normals: Vec<Vec3>,
    /// Interpolated texcoords, or the raw barycentric coordinates when the
    /// source mesh has none.
    pub texcoords: Vec<Vec2>,
    /// Index of the source triangle of each sample, counting explicit
    /// triangles first and then split quads.
    pub elements: Vec<usize>,
}

impl SurfaceSamples {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Merge the samples into `mesh` as free-standing vertices and return
    /// the index range they occupy.
    pub fn append_to(&self, mesh: &mut Mesh) -> Range<usize> {
        mesh.append_points(&self.positions, &self.normals, &self.texcoords)
    }
}

/// Draw `count` area-weighted points from the surface of `mesh`.
///
/// Quads are split into triangle pairs. Normals fall back to the geometric
/// face normal when the mesh has no per-vertex normals.
pub fn sample_surface(
    mesh: &Mesh,
    count: usize,
    rng: &mut RandomStream,
) -> Result<SurfaceSamples, GenError> {
    mesh.validate_topology()?;
    let triangles = mesh.surface_triangles();
    let vertex_count = mesh.positions.len();

    let cdf = sample_triangles_cdf(&triangles, &mesh.positions);
    let total_area = cdf.last().copied().unwrap_or(0.0);
    if !(total_area.is_finite() && total_area > 0.0) {
        return Err(GenError::DegenerateSurface);
    }

    let has_normals = mesh.normals.len() == vertex_count;
    let has_texcoords = mesh.texcoords.len() == vertex_count;

    let mut samples = SurfaceSamples {
        positions: Vec::with_capacity(count),
        normals: Vec::with_capacity(count),
        texcoords: Vec::with_capacity(count),
        elements: Vec::with_capacity(count),
    };

    for _ in 0..count {
        let r = rng.next_f32();
        let uv = rng.next_vec2();
        let (element, bary) = sample_triangles(&cdf, r, uv);
        let [a, b, c] = triangles[element].map(|i| i as usize);

        let (pa, pb, pc) = (mesh.positions[a], mesh.positions[b], mesh.positions[c]);
        samples.positions.push(interpolate_triangle(pa, pb, pc, bary));

        let normal = if has_normals {
            interpolate_triangle(mesh.normals[a], mesh.normals[b], mesh.normals[c], bary)
                .normalize_or_zero()
        } else {
            triangle_normal(pa, pb, pc)
        };
        samples.normals.push(normal);

        samples.texcoords.push(if has_texcoords {
            interpolate_triangle(mesh.texcoords[a], mesh.texcoords[b], mesh.texcoords[c], bary)
        } else {
            bary
        });
        samples.elements.push(element);
    }

    debug!(
        count,
        triangles = triangles.len(),
        total_area,
        "Sampled surface"
    );
    Ok(samples)
}
