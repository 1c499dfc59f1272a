//! Low-level mesh utilities: topology conversion, normal and tangent
//! estimation, and area-weighted triangle sampling.

use std::ops::{Add, Mul};

use glam::{Vec2, Vec3};

/// Split quads into triangle pairs.
///
/// A quad whose last two indices coincide is a degenerate triangle stored as
/// a quad and yields a single triangle.
pub fn quads_to_triangles(quads: &[[u32; 4]]) -> Vec<[u32; 3]> {
    let mut triangles = Vec::with_capacity(quads.len() * 2);
    for &[a, b, c, d] in quads {
        if c == d {
            triangles.push([a, b, d]);
        } else {
            triangles.push([a, b, d]);
            triangles.push([c, d, b]);
        }
    }
    triangles
}

/// Area of the triangle `(p0, p1, p2)`.
#[inline]
pub fn triangle_area(p0: Vec3, p1: Vec3, p2: Vec3) -> f32 {
    (p1 - p0).cross(p2 - p0).length() / 2.0
}

/// Unit normal of the triangle `(p0, p1, p2)` with counter-clockwise winding.
/// Zero for degenerate triangles.
#[inline]
pub fn triangle_normal(p0: Vec3, p1: Vec3, p2: Vec3) -> Vec3 {
    (p1 - p0).cross(p2 - p0).normalize_or_zero()
}

/// Barycentric interpolation with weights `(1 - u - v, u, v)`.
#[inline]
pub fn interpolate_triangle<T>(a: T, b: T, c: T, uv: Vec2) -> T
where
    T: Copy + Add<Output = T> + Mul<f32, Output = T>,
{
    a * (1.0 - uv.x - uv.y) + b * uv.x + c * uv.y
}

/// Linear interpolation between `a` and `b`. `t` is not clamped.
#[inline]
pub fn interpolate_line<T>(a: T, b: T, t: f32) -> T
where
    T: Copy + Add<Output = T> + Mul<f32, Output = T>,
{
    a * (1.0 - t) + b * t
}

/// Per-vertex normals from triangle and quad topology.
///
/// Face normals are accumulated unnormalized, so each face contributes in
/// proportion to its area. Vertices referenced by no face get a zero normal.
pub fn compute_normals(triangles: &[[u32; 3]], quads: &[[u32; 4]], positions: &[Vec3]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    let mut accumulate = |[a, b, c]: [u32; 3]| {
        let (a, b, c) = (a as usize, b as usize, c as usize);
        let n = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += n;
        normals[b] += n;
        normals[c] += n;
    };

    for &triangle in triangles {
        accumulate(triangle);
    }
    for triangle in quads_to_triangles(quads) {
        accumulate(triangle);
    }

    for n in &mut normals {
        *n = n.normalize_or_zero();
    }
    normals
}

/// Per-vertex tangents of poly-lines: the normalized sum of the directions
/// of every segment touching the vertex.
pub fn compute_tangents(lines: &[[u32; 2]], positions: &[Vec3]) -> Vec<Vec3> {
    let mut tangents = vec![Vec3::ZERO; positions.len()];
    for &[a, b] in lines {
        let (a, b) = (a as usize, b as usize);
        let dir = (positions[b] - positions[a]).normalize_or_zero();
        tangents[a] += dir;
        tangents[b] += dir;
    }
    for t in &mut tangents {
        *t = t.normalize_or_zero();
    }
    tangents
}

/// Cumulative area distribution over triangles. The last entry is the total
/// surface area.
pub fn sample_triangles_cdf(triangles: &[[u32; 3]], positions: &[Vec3]) -> Vec<f32> {
    let mut total = 0.0;
    triangles
        .iter()
        .map(|&[a, b, c]| {
            total += triangle_area(
                positions[a as usize],
                positions[b as usize],
                positions[c as usize],
            );
            total
        })
        .collect()
}

/// Pick a triangle from `cdf` with the uniform scalar `r` and map the uniform
/// point `uv` into barycentric coordinates uniformly covering that triangle.
///
/// `cdf` must be non-empty with a positive total.
pub fn sample_triangles(cdf: &[f32], r: f32, uv: Vec2) -> (usize, Vec2) {
    let total = cdf[cdf.len() - 1];
    let target = r.clamp(0.0, 1.0) * total;
    let element = cdf.partition_point(|&c| c <= target).min(cdf.len() - 1);
    let su = uv.x.sqrt();
    (element, Vec2::new(1.0 - su, uv.y * su))
}
