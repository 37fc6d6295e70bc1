use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "delaunay-bvh-demo")]
#[command(about = "Drive the delaunay-bvh crate from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Triangulate a flat coordinate JSON array (`[x0, y0, x1, y1, ...]`)
    Triangulate {
        /// Path to a JSON file holding a flat array of coordinates
        points: String,
        /// Where to write the resulting flat index-triple array; stdout if omitted
        #[arg(short, long)]
        out: Option<String>,
    },
    /// Build a BVH from a scene file and sample one point against it
    Sample {
        /// Path to a scene TOML file (see `scenes/` for examples)
        scene: String,
        x: f32,
        y: f32,
    },
    /// Rasterize a scene's triangulation and annotate its query points
    Render {
        /// Path to a scene TOML file
        scene: String,
        /// Output PNG path
        out: String,
        /// Square canvas size in pixels
        #[arg(long, default_value = "512")]
        size: u32,
    },
}
