//! Rasterizes a triangulation to a PNG: wireframe mesh, a filled highlight
//! for whichever triangle a query point landed in, and a marker for misses.

use delaunay_bvh::geometry::{Aabb, Point};
use image::{ImageBuffer, Rgb, RgbImage};

const BACKGROUND_COLOR: Rgb<u8> = Rgb([20, 20, 24]);
const WIREFRAME_COLOR: Rgb<u8> = Rgb([120, 120, 140]);
const HIT_FILL_COLOR: Rgb<u8> = Rgb([80, 170, 255]);
const HIT_MARKER_COLOR: Rgb<u8> = Rgb([0, 255, 120]);
const MISS_MARKER_COLOR: Rgb<u8> = Rgb([255, 60, 60]);

struct Viewport {
    bounds: Aabb,
    size: u32,
    margin: f32,
}

impl Viewport {
    fn new(points: &[Point], size: u32) -> Self {
        let bounds = Aabb::from_points(points);
        Viewport { bounds, size, margin: 0.08 }
    }

    fn project(&self, p: Point) -> (i64, i64) {
        let dx = (self.bounds.x_max - self.bounds.x_min).max(1e-6);
        let dy = (self.bounds.y_max - self.bounds.y_min).max(1e-6);
        let span = dx.max(dy);
        let pad = span * self.margin;
        let scale = self.size as f32 / (span + 2.0 * pad);

        let cx = (p.x - self.bounds.x_min + pad) * scale;
        // Flip y: image rows grow downward, world y grows upward.
        let cy = self.size as f32 - (p.y - self.bounds.y_min + pad) * scale;
        (cx.round() as i64, cy.round() as i64)
    }
}

fn put_pixel_checked(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

fn draw_line(img: &mut RgbImage, (x0, y0): (i64, i64), (x1, y1): (i64, i64), color: Rgb<u8>) {
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        put_pixel_checked(img, x0, y0, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

fn fill_triangle(img: &mut RgbImage, tri: [(i64, i64); 3], color: Rgb<u8>) {
    let xs = [tri[0].0, tri[1].0, tri[2].0];
    let ys = [tri[0].1, tri[1].1, tri[2].1];
    let x_min = xs.iter().min().copied().unwrap_or(0).max(0);
    let x_max = xs.iter().max().copied().unwrap_or(0).min(img.width() as i64 - 1);
    let y_min = ys.iter().min().copied().unwrap_or(0).max(0);
    let y_max = ys.iter().max().copied().unwrap_or(0).min(img.height() as i64 - 1);

    let edge = |a: (i64, i64), b: (i64, i64), p: (i64, i64)| -> i64 {
        (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
    };

    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let p = (x, y);
            let d0 = edge(tri[0], tri[1], p);
            let d1 = edge(tri[1], tri[2], p);
            let d2 = edge(tri[2], tri[0], p);
            let has_neg = d0 < 0 || d1 < 0 || d2 < 0;
            let has_pos = d0 > 0 || d1 > 0 || d2 > 0;
            if !(has_neg && has_pos) {
                put_pixel_checked(img, x, y, color);
            }
        }
    }
}

fn draw_marker(img: &mut RgbImage, center: (i64, i64), color: Rgb<u8>) {
    for dy in -3..=3 {
        for dx in -3..=3 {
            if dx * dx + dy * dy <= 9 {
                put_pixel_checked(img, center.0 + dx, center.1 + dy, color);
            }
        }
    }
}

/// One highlighted query point: the sampled triangle's vertices (if any hit)
/// and the point's own coordinates.
pub struct QueryResult {
    pub point: Point,
    pub hit: Option<[Point; 3]>,
}

pub fn render_scene(points: &[Point], triangles: &[(Point, Point, Point)], queries: &[QueryResult], size: u32) -> RgbImage {
    let mut img: RgbImage = ImageBuffer::from_pixel(size, size, BACKGROUND_COLOR);
    let viewport = Viewport::new(points, size);

    for q in queries {
        if let Some([a, b, c]) = q.hit {
            let tri = [viewport.project(a), viewport.project(b), viewport.project(c)];
            fill_triangle(&mut img, tri, HIT_FILL_COLOR);
        }
    }

    for &(a, b, c) in triangles {
        let (pa, pb, pc) = (viewport.project(a), viewport.project(b), viewport.project(c));
        draw_line(&mut img, pa, pb, WIREFRAME_COLOR);
        draw_line(&mut img, pb, pc, WIREFRAME_COLOR);
        draw_line(&mut img, pc, pa, WIREFRAME_COLOR);
    }

    for q in queries {
        let color = if q.hit.is_some() { HIT_MARKER_COLOR } else { MISS_MARKER_COLOR };
        draw_marker(&mut img, viewport.project(q.point), color);
    }

    img
}
