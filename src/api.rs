//! The flat-array surface a binding layer (wasm, a C ABI, ...) sits behind.
//!
//! Every function here trades the crate's native [`Point`]/[`Triangle`] types
//! for `&[f32]`/`&[i32]` slices, matching the host-facing operations named in
//! the external interface design: coordinates laid out `[x0, y0, x1, y1, ...]`
//! and triangles as flat index triples.

use crate::bvh::Bvh;
use crate::error::{Error, Result};
use crate::geometry::{Point, Triangle};
use crate::triangulate;

fn points_from_coords(coords: &[f32]) -> Result<Vec<Point>> {
    if coords.len() % 2 != 0 {
        return Err(Error::OddCoordinateCount(coords.len()));
    }
    Ok(coords.chunks_exact(2).map(|p| Point::new(p[0], p[1])).collect())
}

/// Triangulate a flat coordinate buffer, returning a flat sequence of 3*T
/// point-index triples. Empty when fewer than 3 points are supplied or the
/// coordinate count is odd.
#[must_use]
pub fn build_triangulation(coords: &[f32]) -> Vec<i32> {
    let Ok(points) = points_from_coords(coords) else {
        return Vec::new();
    };
    triangulate::triangulate(&points)
        .into_iter()
        .map(|i| i as i32)
        .collect()
}

fn triangles_from_indices(points: &[Point], indices: &[i32]) -> Result<Vec<Triangle>> {
    if indices.len() % 3 != 0 {
        return Err(Error::IndexCountNotMultipleOfThree(indices.len()));
    }

    let vertex = |index: i32| -> Result<Point> {
        if index < 0 || index as usize >= points.len() {
            return Err(Error::IndexOutOfBounds { index, point_count: points.len() });
        }
        Ok(points[index as usize])
    };

    indices
        .chunks_exact(3)
        .map(|tri| Ok(Triangle::new(vertex(tri[0])?, vertex(tri[1])?, vertex(tri[2])?)))
        .collect()
}

/// Build a BVH directly from a coordinate buffer, triangulating internally.
///
/// Returns `None` for fewer than 3 points (there is nothing to index).
#[must_use]
pub fn build_bvh(coords: &[f32]) -> Option<Bvh> {
    let points = points_from_coords(coords).ok()?;
    let indices = triangulate::triangulate(&points);
    if indices.is_empty() {
        return None;
    }
    let triangles = indices
        .chunks_exact(3)
        .map(|t| Triangle::new(points[t[0]], points[t[1]], points[t[2]]))
        .collect();
    Some(Bvh::build(triangles))
}

/// Build a BVH from host-supplied triangles, skipping triangulation.
///
/// # Errors
///
/// Returns [`Error::OddCoordinateCount`], [`Error::IndexCountNotMultipleOfThree`],
/// or [`Error::IndexOutOfBounds`] for malformed input, per the error handling
/// design: out-of-bounds indices are undefined behavior in the source this
/// crate is modeled on, and this implementation SHOULD (and does) fail with
/// `InvalidInput` instead.
pub fn build_bvh_from_triangles(coords: &[f32], indices: &[i32]) -> Result<Option<Bvh>> {
    let points = points_from_coords(coords)?;
    let triangles = triangles_from_indices(&points, indices)?;
    Ok((!triangles.is_empty()).then(|| Bvh::build(triangles)))
}

/// Query a BVH for the triangle containing `(x, y)`.
///
/// Returns a flat `[ax, ay, bx, by, cx, cy]` sequence for the winning
/// triangle, or an empty sequence when no triangle contains the point.
#[must_use]
pub fn sample(bvh: &Bvh, x: f32, y: f32) -> Vec<f32> {
    match bvh.sample(Point::new(x, y)) {
        Some(t) => vec![t.a.x, t.a.y, t.b.x, t.b.y, t.c.x, t.c.y],
        None => Vec::new(),
    }
}
