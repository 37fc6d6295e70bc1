//! Incremental Bowyer-Watson Delaunay triangulation.

use log::{debug, trace, warn};

use crate::geometry::Point;

pub const EPSILON: f32 = 1e-5;
const SUPER_TRIANGLE_SCALE: f32 = 20.0;

#[derive(Debug, Clone, Copy)]
struct TriangleCircle {
    i: usize,
    j: usize,
    k: usize,
    cx: f32,
    cy: f32,
    radius_sq: f32,
}

fn bounding_box(points: &[Point]) -> (f32, f32, f32, f32) {
    let mut x_min = f32::MAX;
    let mut y_min = f32::MAX;
    let mut x_max = f32::MIN;
    let mut y_max = f32::MIN;
    for p in points {
        x_min = x_min.min(p.x);
        x_max = x_max.max(p.x);
        y_min = y_min.min(p.y);
        y_max = y_max.max(p.y);
    }
    (x_min, x_max, y_min, y_max)
}

fn build_super_triangle(points: &[Point]) -> [Point; 3] {
    let (x_min, x_max, y_min, y_max) = bounding_box(points);
    let dx = x_max - x_min;
    let dy = y_max - y_min;
    let d_max = dx.max(dy);
    let x_mid = x_min + dx * 0.5;
    let y_mid = y_min + dy * 0.5;

    [
        Point::new(x_mid - SUPER_TRIANGLE_SCALE * d_max, y_mid - d_max),
        Point::new(x_mid, y_mid + SUPER_TRIANGLE_SCALE * d_max),
        Point::new(x_mid + SUPER_TRIANGLE_SCALE * d_max, y_mid - d_max),
    ]
}

fn circumcircle(points: &[Point], i: usize, j: usize, k: usize) -> TriangleCircle {
    let p1 = points[i];
    let p2 = points[j];
    let p3 = points[k];

    let y1_y2 = (p1.y - p2.y).abs();
    let y2_y3 = (p2.y - p3.y).abs();

    let (center_x, center_y);

    // Pick the bisector pair with the larger |dy| to avoid dividing by
    // (near) zero when two of the three points share a y-coordinate.
    if y1_y2 < EPSILON {
        let m2 = -(p3.x - p2.x) / (p3.y - p2.y);
        let mx2 = (p2.x + p3.x) / 2.0;
        let my2 = (p2.y + p3.y) / 2.0;
        center_x = (p2.x + p1.x) / 2.0;
        center_y = m2 * (center_x - mx2) + my2;
    } else if y2_y3 < EPSILON {
        let m1 = -(p2.x - p1.x) / (p2.y - p1.y);
        let mx1 = (p1.x + p2.x) / 2.0;
        let my1 = (p1.y + p2.y) / 2.0;
        center_x = (p3.x + p2.x) / 2.0;
        center_y = m1 * (center_x - mx1) + my1;
    } else {
        let m1 = -(p2.x - p1.x) / (p2.y - p1.y);
        let m2 = -(p3.x - p2.x) / (p3.y - p2.y);
        let mx1 = (p1.x + p2.x) / 2.0;
        let mx2 = (p2.x + p3.x) / 2.0;
        let my1 = (p1.y + p2.y) / 2.0;
        let my2 = (p2.y + p3.y) / 2.0;
        center_x = (m1 * mx1 - m2 * mx2 + my2 - my1) / (m1 - m2);
        center_y = if y1_y2 > y2_y3 {
            m1 * (center_x - mx1) + my1
        } else {
            m2 * (center_x - mx2) + my2
        };
    }

    let dx = p2.x - center_x;
    let dy = p2.y - center_y;

    TriangleCircle {
        i,
        j,
        k,
        cx: center_x,
        cy: center_y,
        radius_sq: dx * dx + dy * dy,
    }
}

fn remove_duplicates(edges: &mut Vec<(usize, usize)>) {
    let mut j = edges.len();
    'outer: while j >= 1 {
        let (a, b) = edges[j - 1];
        let mut i = j - 1;
        while i >= 1 {
            let (m, n) = edges[i - 1];
            if (a == m && b == n) || (a == n && b == m) {
                edges.remove(j - 1);
                edges.remove(i - 1);
                j = edges.len();
                continue 'outer;
            }
            i -= 1;
        }
        j -= 1;
    }
}

/// Triangulate `points`, returning a flat sequence of point-index triples.
/// Empty when there are fewer than 3 points.
#[must_use]
pub fn triangulate(points: &[Point]) -> Vec<usize> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let mut indices: Vec<usize> = (0..n).collect();
    indices.sort_by(|&a, &b| points[a].x.partial_cmp(&points[b].x).unwrap());

    let super_tri = build_super_triangle(points);
    let mut working = points.to_vec();
    working.extend_from_slice(&super_tri);
    debug!(
        "triangulate: {n} points, super-triangle at ({:.3},{:.3}) ({:.3},{:.3}) ({:.3},{:.3})",
        super_tri[0].x, super_tri[0].y, super_tri[1].x, super_tri[1].y, super_tri[2].x, super_tri[2].y
    );

    let mut open = vec![circumcircle(&working, n, n + 1, n + 2)];
    let mut closed: Vec<TriangleCircle> = Vec::new();
    let mut edges: Vec<(usize, usize)> = Vec::new();

    for &c in &indices {
        let p = working[c];
        edges.clear();

        // Walk from the back: points only ever increase in x from here on,
        // so once a circle's right extent is behind p it can never reopen.
        let mut j = open.len();
        while j > 0 {
            j -= 1;
            let t = open[j];

            let dx = p.x - t.cx;
            if dx > 0.0 && dx * dx > t.radius_sq {
                let t = open.remove(j);
                closed.push(t);
                continue;
            }

            let dy = p.y - t.cy;
            if dx * dx + dy * dy - t.radius_sq > EPSILON {
                continue;
            }

            let t = open.remove(j);
            edges.push((t.i, t.j));
            edges.push((t.j, t.k));
            edges.push((t.k, t.i));
        }

        remove_duplicates(&mut edges);
        trace!("triangulate: point {c} reopened cavity with {} boundary edges", edges.len());

        let mut k = edges.len();
        while k >= 1 {
            let (a, b) = edges[k - 1];
            open.push(circumcircle(&working, a, b, c));
            k -= 1;
        }
    }

    closed.append(&mut open);

    let triangles: Vec<usize> = closed
        .iter()
        .filter(|t| t.i < n && t.j < n && t.k < n)
        .flat_map(|t| [t.i, t.j, t.k])
        .collect();

    if triangles.is_empty() {
        warn!("triangulate: {n} points produced no triangles (collinear or degenerate input?)");
    }

    triangles
}
