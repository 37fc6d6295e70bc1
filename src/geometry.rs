//! Points, axis-aligned boxes, and triangles shared by the triangulator and the BVH.

use std::fmt;

/// A 2D point with 32-bit float coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn squared_distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned bounding box. `x_min <= x_max` and `y_min <= y_max` always hold
/// for a box built from real geometry; a box built with [`Aabb::empty`] violates
/// this until it has absorbed at least one point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl Aabb {
    /// An inverted box that absorbs the first point it is unioned with.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            x_min: f32::MAX,
            y_min: f32::MAX,
            x_max: f32::MIN,
            y_max: f32::MIN,
        }
    }

    #[must_use]
    pub fn from_points(points: &[Point]) -> Self {
        let mut aabb = Self::empty();
        for p in points {
            aabb.x_min = aabb.x_min.min(p.x);
            aabb.y_min = aabb.y_min.min(p.y);
            aabb.x_max = aabb.x_max.max(p.x);
            aabb.y_max = aabb.y_max.max(p.y);
        }
        aabb
    }

    /// Strict interior containment: a point exactly on the boundary is outside.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.x_min < p.x && p.x < self.x_max && self.y_min < p.y && p.y < self.y_max
    }

    #[must_use]
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }
}

/// A Delaunay triangle: three vertices plus a bounding box and centroid fixed at
/// construction. Immutable, cheap to copy by value save for the three `Point`s.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
    aabb: Aabb,
    center: Point,
}

impl Triangle {
    #[must_use]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        let aabb = Aabb::from_points(&[a, b, c]);
        let center = Point::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0);
        Self {
            a,
            b,
            c,
            aabb,
            center,
        }
    }

    #[must_use]
    pub fn aabb(&self) -> Aabb {
        self.aabb
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Same-side test against each edge in turn. Points exactly on an edge have
    /// an implementation-defined result: the sign comparisons below are strict.
    #[must_use]
    pub fn is_point_inside(&self, p: Point) -> bool {
        let as_x = p.x - self.a.x;
        let as_y = p.y - self.a.y;

        let s_ab = (self.b.x - self.a.x) * as_y - (self.b.y - self.a.y) * as_x > 0.0;

        if ((self.c.x - self.a.x) * as_y - (self.c.y - self.a.y) * as_x > 0.0) == s_ab {
            return false;
        }
        if ((self.c.x - self.b.x) * (p.y - self.b.y) - (self.c.y - self.b.y) * (p.x - self.b.x)
            > 0.0)
            != s_ab
        {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_construction_precomputes_aabb_and_center() {
        let t = Triangle::new(Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(0.0, 2.0));
        assert_eq!(t.aabb(), Aabb { x_min: 0.0, y_min: 0.0, x_max: 2.0, y_max: 2.0 });
        assert_eq!(t.center(), Point::new(2.0 / 3.0, 2.0 / 3.0));
    }

    #[test]
    fn triangle_contains_interior_point() {
        let t = Triangle::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0));
        assert!(t.is_point_inside(Point::new(0.2, 0.2)));
        assert!(!t.is_point_inside(Point::new(0.9, 0.9)));
        assert!(!t.is_point_inside(Point::new(-1.0, -1.0)));
    }

    #[test]
    fn aabb_union_is_componentwise() {
        let a = Aabb { x_min: 0.0, y_min: 0.0, x_max: 1.0, y_max: 1.0 };
        let b = Aabb { x_min: -1.0, y_min: 2.0, x_max: 0.5, y_max: 3.0 };
        let u = a.union(&b);
        assert_eq!(u, Aabb { x_min: -1.0, y_min: 0.0, x_max: 1.0, y_max: 3.0 });
    }

    #[test]
    fn aabb_contains_is_strict_on_boundary() {
        let b = Aabb { x_min: 0.0, y_min: 0.0, x_max: 1.0, y_max: 1.0 };
        assert!(b.contains(Point::new(0.5, 0.5)));
        assert!(!b.contains(Point::new(0.0, 0.5)));
        assert!(!b.contains(Point::new(1.0, 0.5)));
    }
}
