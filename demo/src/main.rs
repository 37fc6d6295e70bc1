//! delaunay-bvh demo CLI.
//!
//! Exercises the crate the way a real host would: triangulate a raw point
//! set, build a BVH (either from the triangulator or from a host-supplied
//! mesh), sample query points against it, and rasterize the result. None of
//! this is reachable from the core's public API - it exists only to give
//! the algorithm a host to be driven from.

mod cli;
mod config;
mod render;

use clap::Parser;
use cli::{Cli, Command};
use config::Scene;
use delaunay_bvh::api;
use delaunay_bvh::geometry::Point;
use render::QueryResult;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Triangulate { points, out } => handle_triangulate(&points, out.as_deref()),
        Command::Sample { scene, x, y } => handle_sample(&scene, x, y),
        Command::Render { scene, out, size } => handle_render(&scene, &out, size),
    }
}

fn handle_triangulate(points_path: &str, out: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(points_path)?;
    let coords: Vec<f32> = serde_json::from_str(&text)?;
    let indices = api::build_triangulation(&coords);

    let json = serde_json::to_string(&indices)?;
    match out {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}

fn handle_sample(scene_path: &str, x: f32, y: f32) -> Result<(), Box<dyn std::error::Error>> {
    let scene = Scene::load(scene_path)?;
    let coords = scene.coords();

    let bvh = match scene.flat_indices() {
        Some(indices) => api::build_bvh_from_triangles(&coords, &indices)?,
        None => api::build_bvh(&coords),
    };

    match bvh {
        None => {
            println!("scene has too few points to build a BVH");
        }
        Some(bvh) => match bvh.sample(Point::new(x, y)) {
            Some(t) => println!(
                "hit: ({:.3}, {:.3}) ({:.3}, {:.3}) ({:.3}, {:.3})",
                t.a.x, t.a.y, t.b.x, t.b.y, t.c.x, t.c.y
            ),
            None => println!("miss"),
        },
    }
    Ok(())
}

fn handle_render(scene_path: &str, out_path: &str, size: u32) -> Result<(), Box<dyn std::error::Error>> {
    let scene = Scene::load(scene_path)?;
    let points: Vec<Point> = scene.points.iter().map(|p| Point::new(p[0], p[1])).collect();
    let coords = scene.coords();

    let indices: Vec<i32> = match scene.flat_indices() {
        Some(indices) => indices,
        None => api::build_triangulation(&coords),
    };

    let bvh = match scene.flat_indices() {
        Some(host_indices) => api::build_bvh_from_triangles(&coords, &host_indices)?,
        None => api::build_bvh(&coords),
    };

    let triangles: Vec<(Point, Point, Point)> = indices
        .chunks_exact(3)
        .map(|t| (points[t[0] as usize], points[t[1] as usize], points[t[2] as usize]))
        .collect();

    let queries: Vec<QueryResult> = scene
        .queries
        .iter()
        .map(|&[x, y]| {
            let p = Point::new(x, y);
            let hit = bvh.as_ref().and_then(|b| b.sample(p)).map(|t| [t.a, t.b, t.c]);
            QueryResult { point: p, hit }
        })
        .collect();

    let img = render::render_scene(&points, &triangles, &queries, size);
    img.save(out_path)?;
    Ok(())
}
