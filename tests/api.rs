//! Integration tests for the flat-array binding surface in `src/api.rs` -
//! the seam a wasm/C ABI/JNI binding layer sits behind.

use delaunay_bvh::api;
use delaunay_bvh::error::Error;

const SQUARE: [f32; 8] = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];

#[test]
fn build_triangulation_on_square_yields_two_triangles() {
    let out = api::build_triangulation(&SQUARE);
    assert_eq!(out.len(), 6);
    for idx in out {
        assert!((0..4).contains(&idx));
    }
}

#[test]
fn build_triangulation_empty_below_three_points() {
    assert!(api::build_triangulation(&[0.0, 0.0, 1.0, 1.0]).is_empty());
}

#[test]
fn build_triangulation_empty_on_odd_coordinate_count() {
    assert!(api::build_triangulation(&[0.0, 0.0, 1.0]).is_empty());
}

#[test]
fn build_bvh_round_trips_through_sample() {
    let bvh = api::build_bvh(&SQUARE).expect("square triangulates");
    let hit = api::sample(&bvh, 0.25, 0.25);
    assert_eq!(hit.len(), 6);
    let miss = api::sample(&bvh, -5.0, -5.0);
    assert!(miss.is_empty());
}

#[test]
fn build_bvh_from_triangles_uses_host_supplied_mesh_directly() {
    let coords = [0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 0.0, 2.0];
    // Host hands in its own diagonal, instead of whatever the triangulator
    // would have chosen.
    let indices = [0, 1, 2, 0, 2, 3];
    let bvh = api::build_bvh_from_triangles(&coords, &indices)
        .expect("well-formed input")
        .expect("non-empty triangle set");
    assert_eq!(api::sample(&bvh, 1.0, 1.0).len(), 6);
}

#[test]
fn build_bvh_from_triangles_rejects_out_of_bounds_index() {
    let coords = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0];
    let err = api::build_bvh_from_triangles(&coords, &[0, 1, 9]).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfBounds { index: 9, point_count: 3 }));
}

#[test]
fn build_bvh_from_triangles_rejects_non_triple_index_count() {
    let coords = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0];
    let err = api::build_bvh_from_triangles(&coords, &[0, 1, 2, 0]).unwrap_err();
    assert!(matches!(err, Error::IndexCountNotMultipleOfThree(4)));
}

#[test]
fn build_bvh_from_triangles_rejects_odd_coordinate_count() {
    let coords = [0.0, 0.0, 1.0];
    let err = api::build_bvh_from_triangles(&coords, &[0, 0, 0]).unwrap_err();
    assert!(matches!(err, Error::OddCoordinateCount(3)));
}

#[test]
fn build_bvh_returns_none_below_three_points() {
    assert!(api::build_bvh(&[0.0, 0.0, 1.0, 1.0]).is_none());
}
