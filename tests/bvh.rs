//! Integration tests for BVH construction and `sample` queries built atop a
//! real triangulation output, rather than hand-built triangle lists.

use delaunay_bvh::bvh::Bvh;
use delaunay_bvh::geometry::{Point, Triangle};
use delaunay_bvh::triangulate::triangulate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn bvh_from(points: &[Point]) -> Bvh {
    let indices = triangulate(points);
    let triangles: Vec<Triangle> = indices
        .chunks_exact(3)
        .map(|t| Triangle::new(points[t[0]], points[t[1]], points[t[2]]))
        .collect();
    Bvh::build(triangles)
}

#[test]
fn s4_sample_hits_a_triangle_whose_vertices_are_input_points() {
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ];
    let bvh = bvh_from(&points);

    let hit = bvh.sample(Point::new(0.25, 0.25)).expect("query point is inside the square");
    for v in [hit.a, hit.b, hit.c] {
        assert!(points.contains(&v));
    }
    assert!(hit.is_point_inside(Point::new(0.25, 0.25)));
}

#[test]
fn s5_sample_misses_a_point_outside_every_triangle() {
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ];
    let bvh = bvh_from(&points);
    assert!(bvh.sample(Point::new(2.0, 2.0)).is_none());
}

#[test]
fn sample_hit_always_satisfies_containment() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let points: Vec<Point> = (0..40)
        .map(|_| Point::new(rng.gen_range(0.0..10.0), rng.gen_range(0.0..10.0)))
        .collect();
    let bvh = bvh_from(&points);

    for _ in 0..200 {
        let p = Point::new(rng.gen_range(-2.0..12.0), rng.gen_range(-2.0..12.0));
        if let Some(t) = bvh.sample(p) {
            assert!(t.is_point_inside(p));
        }
    }
}

#[test]
fn building_from_a_single_triangle_makes_a_leaf_root() {
    let t = Triangle::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 4.0));
    let bvh = Bvh::build(vec![t]);
    assert!(bvh.sample(Point::new(1.0, 1.0)).is_some());
    assert!(bvh.sample(Point::new(-1.0, -1.0)).is_none());
}

#[test]
#[should_panic]
fn building_from_zero_triangles_panics() {
    Bvh::build(Vec::new());
}
