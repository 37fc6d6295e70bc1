//! A 2D axis-aligned BVH over triangles, supporting point-in-triangle queries.

use log::{debug, trace};

use crate::geometry::{Aabb, Point, Triangle};

enum Node {
    Leaf {
        triangle: Triangle,
        aabb: Aabb,
    },
    Internal {
        left: Box<Node>,
        right: Box<Node>,
        aabb: Aabb,
    },
}

impl Node {
    fn aabb(&self) -> Aabb {
        match self {
            Node::Leaf { aabb, .. } => *aabb,
            Node::Internal { aabb, .. } => *aabb,
        }
    }

    fn build(mut triangles: Vec<Triangle>) -> Node {
        if triangles.len() == 1 {
            let triangle = triangles.pop().unwrap();
            let aabb = triangle.aabb();
            return Node::Leaf { triangle, aabb };
        }

        let mut x_min = f32::MAX;
        let mut x_max = f32::MIN;
        let mut y_min = f32::MAX;
        let mut y_max = f32::MIN;
        let mut x_sum = 0.0;
        let mut y_sum = 0.0;

        for t in &triangles {
            let c = t.center();
            x_min = x_min.min(c.x);
            x_max = x_max.max(c.x);
            y_min = y_min.min(c.y);
            y_max = y_max.max(c.y);
            x_sum += c.x;
            y_sum += c.y;
        }

        let count = triangles.len() as f32;
        // Tie goes to the y-axis: the comparison is strict, so an equal
        // x/y center range falls through to the `else` (y-axis) branch.
        let split_on_x = (x_max - x_min) > (y_max - y_min);
        let mean = if split_on_x { x_sum / count } else { y_sum / count };

        let mut left = Vec::new();
        let mut right = Vec::new();
        for t in triangles {
            let v = if split_on_x { t.center().x } else { t.center().y };
            if v < mean {
                left.push(t);
            } else {
                right.push(t);
            }
        }

        // Empty-side repair: without this, coincident centers on the chosen
        // axis would put every triangle on one side and recurse forever.
        if left.is_empty() {
            left.push(right.pop().unwrap());
        }
        if right.is_empty() {
            right.push(left.pop().unwrap());
        }

        let left = Self::build(left);
        let right = Self::build(right);
        let aabb = left.aabb().union(&right.aabb());

        Node::Internal {
            left: Box::new(left),
            right: Box::new(right),
            aabb,
        }
    }

    fn sample(&self, p: Point) -> Option<&Triangle> {
        if !self.aabb().contains(p) {
            return None;
        }

        match self {
            Node::Leaf { triangle, .. } => triangle.is_point_inside(p).then_some(triangle),
            Node::Internal { left, right, .. } => {
                match (left.sample(p), right.sample(p)) {
                    (Some(l), Some(r)) => {
                        if l.center().squared_distance(&p) < r.center().squared_distance(&p) {
                            trace!("bvh: dual-hit tie-break -> left");
                            Some(l)
                        } else {
                            trace!("bvh: dual-hit tie-break -> right");
                            Some(r)
                        }
                    }
                    (Some(l), None) => Some(l),
                    (None, Some(r)) => Some(r),
                    (None, None) => None,
                }
            }
        }
    }
}

pub struct Bvh {
    root: Node,
}

impl Bvh {
    /// # Panics
    ///
    /// Panics if `triangles` is empty.
    #[must_use]
    pub fn build(triangles: Vec<Triangle>) -> Self {
        assert!(!triangles.is_empty(), "cannot build a BVH over zero triangles");
        let leaf_count = triangles.len();
        let root = Node::build(triangles);
        debug!("bvh: built {leaf_count} leaves, {} internal nodes", leaf_count - 1);
        Self { root }
    }

    #[must_use]
    pub fn sample(&self, p: Point) -> Option<&Triangle> {
        let hit = self.root.sample(p);
        trace!("bvh: sample({}, {}) -> {}", p.x, p.y, hit.is_some());
        hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square_triangles() -> Vec<Triangle> {
        vec![
            Triangle::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)),
            Triangle::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(0.0, 1.0)),
        ]
    }

    #[test]
    fn s4_sample_hits_a_containing_triangle() {
        let bvh = Bvh::build(unit_square_triangles());
        let hit = bvh.sample(Point::new(0.25, 0.25)).expect("should hit");
        assert!(hit.is_point_inside(Point::new(0.25, 0.25)));
    }

    #[test]
    fn s5_sample_misses_outside_point() {
        let bvh = Bvh::build(unit_square_triangles());
        assert!(bvh.sample(Point::new(2.0, 2.0)).is_none());
    }

    #[test]
    fn single_triangle_is_a_leaf_root() {
        let t = Triangle::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0));
        let bvh = Bvh::build(vec![t]);
        assert!(bvh.sample(Point::new(0.2, 0.2)).is_some());
        assert!(bvh.sample(Point::new(5.0, 5.0)).is_none());
    }

    #[test]
    #[should_panic]
    fn building_from_no_triangles_panics() {
        Bvh::build(Vec::new());
    }

    #[test]
    fn coincident_centers_terminate_via_empty_side_repair() {
        // Every triangle here shares the same centroid, which would put every
        // triangle on one side of a median split without the repair step.
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 0.0);
        let c = Point::new(0.0, 3.0);
        let triangles = vec![Triangle::new(a, b, c), Triangle::new(a, b, c), Triangle::new(a, b, c)];
        let bvh = Bvh::build(triangles);
        assert!(bvh.sample(Point::new(0.5, 0.5)).is_some());
    }

    #[test]
    fn point_exactly_on_outer_aabb_boundary_misses() {
        let bvh = Bvh::build(unit_square_triangles());
        // Strict AABB containment means the outer edge of the mesh is a miss,
        // even though it sits on a triangle edge geometrically.
        assert!(bvh.sample(Point::new(0.0, 0.5)).is_none());
    }
}
