//! Indexed mesh with parallel per-vertex attribute arrays.

use std::ops::Range;

use glam::{Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::shape;

/// Colour used to pad a populated colour array when vertices are appended
/// without colour information.
pub const DEFAULT_COLOR: Vec3 = Vec3::ONE;

/// A surface (triangles/quads) or strand (lines) mesh.
///
/// Every optional attribute array is either empty or exactly as long as
/// `positions`. Operations on this type keep that invariant.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mesh {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Unit vertex normals.
    pub normals: Vec<Vec3>,
    /// Texture coordinates.
    pub texcoords: Vec<Vec2>,
    /// Linear RGB vertex colours.
    pub colors: Vec<Vec3>,
    /// Per-vertex thickness for line primitives.
    pub radius: Vec<f32>,
    /// Per-vertex tangents; `w` carries handedness.
    pub tangents: Vec<Vec4>,
    /// Triangle index triples.
    pub triangles: Vec<[u32; 3]>,
    /// Quad index quadruples.
    pub quads: Vec<[u32; 4]>,
    /// Line segment index pairs.
    pub lines: Vec<[u32; 2]>,
}

impl Mesh {
    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the mesh has no vertices.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns `true` if every populated attribute array matches the vertex count.
    pub fn attributes_consistent(&self) -> bool {
        let n = self.positions.len();
        let ok = |len: usize| len == 0 || len == n;
        ok(self.normals.len())
            && ok(self.texcoords.len())
            && ok(self.colors.len())
            && ok(self.radius.len())
            && ok(self.tangents.len())
    }

    /// Check that every triangle, quad and line index addresses an existing vertex.
    pub fn validate_topology(&self) -> Result<(), SceneError> {
        let vertices = self.positions.len();
        let check = |kind: &'static str, element: usize, indices: &[u32]| {
            match indices.iter().find(|&&index| index as usize >= vertices) {
                Some(&index) => Err(SceneError::InvalidTopology {
                    kind,
                    element,
                    index,
                    vertices,
                }),
                None => Ok(()),
            }
        };

        for (element, triangle) in self.triangles.iter().enumerate() {
            check("triangle", element, triangle.as_slice())?;
        }
        for (element, quad) in self.quads.iter().enumerate() {
            check("quad", element, quad.as_slice())?;
        }
        for (element, line) in self.lines.iter().enumerate() {
            check("line", element, line.as_slice())?;
        }
        Ok(())
    }

    /// All surface faces as triangles: explicit triangles followed by split quads.
    pub fn surface_triangles(&self) -> Vec<[u32; 3]> {
        let mut triangles = self.triangles.clone();
        triangles.extend(shape::quads_to_triangles(&self.quads));
        triangles
    }

    /// Recompute vertex normals from the current positions and face topology.
    pub fn recompute_normals(&mut self) {
        self.normals = shape::compute_normals(&self.triangles, &self.quads, &self.positions);
    }

    /// Append free-standing points and return the index range they occupy.
    ///
    /// Normals and texcoords are appended only when the mesh already carries
    /// them (or is empty). Populated colour, radius and tangent arrays are
    /// padded with defaults so the attribute invariant holds.
    pub fn append_points(
        &mut self,
        positions: &[Vec3],
        normals: &[Vec3],
        texcoords: &[Vec2],
    ) -> Range<usize> {
        let start = self.positions.len();
        let added = positions.len();
        let tracks = |len: usize| len == start;

        if tracks(self.normals.len()) {
            self.normals.extend_from_slice(normals);
            self.normals.resize(start + added, Vec3::Y);
        }
        if tracks(self.texcoords.len()) {
            self.texcoords.extend_from_slice(texcoords);
            self.texcoords.resize(start + added, Vec2::ZERO);
        }
        if start > 0 && tracks(self.colors.len()) {
            self.colors.resize(start + added, DEFAULT_COLOR);
        }
        if start > 0 && tracks(self.radius.len()) {
            self.radius.resize(start + added, 0.0);
        }
        if start > 0 && tracks(self.tangents.len()) {
            self.tangents.resize(start + added, Vec4::ZERO);
        }
        self.positions.extend_from_slice(positions);

        start..start + added
    }

    /// Append a poly-line strand: positions, colours, a constant radius, and
    /// one line segment per consecutive vertex pair.
    pub fn add_polyline(&mut self, positions: &[Vec3], colors: &[Vec3], thickness: f32) {
        let offset = self.positions.len() as u32;
        self.positions.extend_from_slice(positions);
        self.colors.extend_from_slice(colors);
        self.radius.extend(std::iter::repeat_n(thickness, positions.len()));
        for idx in 1..positions.len() as u32 {
            self.lines.push([offset + idx - 1, offset + idx]);
        }
    }
}
