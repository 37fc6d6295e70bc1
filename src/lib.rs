//! # delaunay-bvh
//!
//! An incremental 2D Delaunay triangulator paired with a bounding volume
//! hierarchy (BVH) for point-in-triangle queries over the resulting mesh.
//!
//! ## Quick start
//!
//! ```rust
//! use delaunay_bvh::{geometry::Point, triangulate, bvh::Bvh};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! ];
//! let indices = triangulate::triangulate(&points);
//! let triangles = indices
//!     .chunks_exact(3)
//!     .map(|t| delaunay_bvh::geometry::Triangle::new(points[t[0]], points[t[1]], points[t[2]]))
//!     .collect();
//! let bvh = Bvh::build(triangles);
//! assert!(bvh.sample(Point::new(0.25, 0.25)).is_some());
//! ```
//!
//! ## Layout
//!
//! - [`geometry`] - points, AABBs, triangles; shared by everything below.
//! - [`triangulate`] - the Bowyer-Watson incremental triangulator.
//! - [`bvh`] - the binary spatial index built over triangulation output.
//! - [`api`] - the flat-array (`&[f32]`/`&[i32]`) surface a binding layer sits behind.
//! - [`error`] - the single `InvalidInput` error kind used at that boundary.
//! - `ffi` (behind the `wasm` feature) - `wasm-bindgen` glue over [`api`].
//!
//! Construction is one-shot: a triangulation and the BVH built over it are
//! immutable once produced. There is no insertion, deletion, or rebalancing
//! after the fact - see the crate's design notes for the rationale.

pub mod api;
pub mod bvh;
pub mod error;
pub mod geometry;
pub mod triangulate;

#[cfg(feature = "wasm")]
pub mod ffi;

pub use bvh::Bvh;
pub use error::{Error, Result};
pub use geometry::{Aabb, Point, Triangle};
