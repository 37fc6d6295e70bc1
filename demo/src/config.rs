//! Scene config - TOML to a point set, an optional pre-supplied triangle
//! index list, and a list of query points to sample and annotate.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Scene {
    pub name: Option<String>,
    pub points: Vec<[f32; 2]>,
    #[serde(default)]
    pub indices: Option<Vec<usize>>,
    #[serde(default)]
    pub queries: Vec<[f32; 2]>,
}

impl Scene {
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Flatten `points` to the `[x0, y0, x1, y1, ...]` layout the core expects.
    pub fn coords(&self) -> Vec<f32> {
        self.points.iter().flat_map(|p| [p[0], p[1]]).collect()
    }

    /// Flatten `indices`, if present, to the `i32` triples the core expects.
    pub fn flat_indices(&self) -> Option<Vec<i32>> {
        self.indices.as_ref().map(|idx| idx.iter().map(|&i| i as i32).collect())
    }
}
