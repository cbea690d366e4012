use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use planar::sample::{draw_polygon_radial, RadialCfg, ReplayToken};
use planar::{point2, Point2D, Polygon};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Inspect and transform 2D vertex-list polygons")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the centroid of a polygon as JSON
    Centroid {
        #[arg(long)]
        input: String,
    },
    /// Print the signed (shoelace) area of a polygon as JSON
    Area {
        #[arg(long)]
        input: String,
    },
    /// Translate the polygon so its centroid lands on (x, y)
    Translate {
        #[arg(long)]
        input: String,
        #[arg(long)]
        x: f64,
        #[arg(long)]
        y: f64,
        #[arg(long)]
        out: String,
    },
    /// Draw a reproducible random polygon and write its vertices
    Sample {
        #[arg(long, default_value_t = 12)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Centroid { input } => centroid(&input),
        Action::Area { input } => area(&input),
        Action::Translate { input, x, y, out } => translate(&input, x, y, &out),
        Action::Sample { n, seed, index, out } => sample(n, seed, index, &out),
    }
}

fn centroid(input: &str) -> Result<()> {
    let poly = load_polygon(input)?;
    tracing::info!(input, vertices = poly.vertex_count(), "centroid");
    let c = poly.centroid()?;
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({ "x": c.x, "y": c.y }))?
    );
    Ok(())
}

fn area(input: &str) -> Result<()> {
    let poly = load_polygon(input)?;
    tracing::info!(input, vertices = poly.vertex_count(), "area");
    let a = poly.signed_area()?;
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({ "signed_area": a }))?
    );
    Ok(())
}

fn translate(input: &str, x: f64, y: f64, out: &str) -> Result<()> {
    let mut poly = load_polygon(input)?;
    tracing::info!(input, x, y, out, "translate");
    poly.translate_center_to(point2(x, y))?;
    store_polygon(out, &poly)?;
    Ok(())
}

fn sample(n: usize, seed: u64, index: u64, out: &str) -> Result<()> {
    tracing::info!(n, seed, index, out, "sample");
    let cfg = RadialCfg {
        vertex_count: n,
        ..RadialCfg::default()
    };
    let poly = draw_polygon_radial(cfg, ReplayToken { seed, index });
    store_polygon(out, &poly)?;
    Ok(())
}

/// Load a polygon from a JSON array of `[x, y]` rows.
///
/// Rows go through `Point2D::from_slice`, so a row of the wrong arity
/// surfaces the library's InvalidArgument error.
fn load_polygon(path: &str) -> Result<Polygon> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let rows: Vec<Vec<f64>> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))?;
    let mut vertices = Vec::with_capacity(rows.len());
    for row in &rows {
        vertices.push(Point2D::from_slice(row)?);
    }
    Ok(Polygon::new(vertices))
}

/// Write a polygon back out as a JSON array of `[x, y]` rows.
fn store_polygon(path: &str, poly: &Polygon) -> Result<()> {
    let out_path = Path::new(path);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let rows: Vec<[f64; 2]> = poly.vertices().iter().map(|v| [v.x, v.y]).collect();
    std::fs::write(out_path, serde_json::to_vec_pretty(&rows)?)
        .with_context(|| format!("writing {path}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_store_round_trip() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("tri.json");
        std::fs::write(&input, "[[0.0, 0.0], [4.0, 0.0], [0.0, 3.0]]").unwrap();
        let poly = load_polygon(input.to_str().unwrap()).unwrap();
        assert_eq!(poly.vertex_count(), 3);
        assert_eq!(poly.signed_area().unwrap(), 6.0);

        let out = dir.path().join("out/tri.json");
        store_polygon(out.to_str().unwrap(), &poly).unwrap();
        let reloaded = load_polygon(out.to_str().unwrap()).unwrap();
        assert_eq!(reloaded, poly);
    }

    #[test]
    fn malformed_row_is_rejected() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.json");
        std::fs::write(&input, "[[0.0, 0.0, 1.0]]").unwrap();
        let err = load_polygon(input.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("expected 2"));
    }

    #[test]
    fn translate_moves_centroid() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("tri.json");
        std::fs::write(&input, "[[0.0, 0.0], [4.0, 0.0], [0.0, 3.0]]").unwrap();
        let out = dir.path().join("moved.json");
        translate(input.to_str().unwrap(), 0.0, 0.0, out.to_str().unwrap()).unwrap();
        let moved = load_polygon(out.to_str().unwrap()).unwrap();
        let c = moved.centroid().unwrap();
        assert!(c.x.abs() < 1e-12 && c.y.abs() < 1e-12);
    }
}
