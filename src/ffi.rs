//! Optional wasm-bindgen glue exposing [`crate::api`] to browser JS.
//!
//! This is the host-language binding layer named as explicitly out of scope
//! in the core's purpose statement; it is kept behind the `wasm` feature and
//! contributes nothing to a default build. It owns no triangulation logic of
//! its own - every function here is a thin `#[wasm_bindgen]` wrapper over
//! [`crate::api`].

use wasm_bindgen::prelude::*;

use crate::api;
use crate::bvh::Bvh;

/// Install a panic hook that forwards Rust panics to the browser console.
/// Host pages should call this once on startup.
#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// See [`api::build_triangulation`].
#[wasm_bindgen(js_name = buildTriangulation)]
pub fn build_triangulation(coords: &[f32]) -> Vec<i32> {
    api::build_triangulation(coords)
}

/// JS-facing wrapper around [`Bvh`].
#[wasm_bindgen]
pub struct BvhHandle(Bvh);

#[wasm_bindgen]
impl BvhHandle {
    /// Triangulates `coords` internally, then builds the BVH. Returns
    /// `undefined` when the point count is too small to triangulate.
    #[wasm_bindgen(constructor)]
    pub fn new(coords: &[f32]) -> Option<BvhHandle> {
        api::build_bvh(coords).map(BvhHandle)
    }

    /// Builds a BVH directly from host-supplied triangles, skipping
    /// triangulation. Throws a JS error for malformed `indices`.
    #[wasm_bindgen(js_name = fromTriangles)]
    pub fn from_triangles(coords: &[f32], indices: &[i32]) -> Result<Option<BvhHandle>, JsError> {
        Ok(api::build_bvh_from_triangles(coords, indices)?.map(BvhHandle))
    }

    /// See [`api::sample`]. Returns an empty array on a miss.
    pub fn sample(&self, x: f32, y: f32) -> Vec<f32> {
        api::sample(&self.0, x, y)
    }
}
