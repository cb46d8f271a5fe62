use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use encircle::sample::{draw_points, PointCloudCfg, ReplayToken};
use encircle::{Bound, Circle, DomainCfg};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Certified minimal enclosing circles for 2D point sets")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the minimal circle certified to contain all points
    Solve {
        /// Point as X,Y (repeatable)
        #[arg(long = "point", value_name = "X,Y", allow_hyphen_values = true, value_parser = input::parse_point)]
        points: Vec<(f32, f32)>,
        /// JSON file with an array of [x, y] pairs (added after --point values)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Drop out-of-range points with a warning instead of failing
        #[arg(long)]
        skip_out_of_range: bool,
        /// Coordinate bound |x|, |y| <= this value
        #[arg(long, default_value_t = encircle::POINT_XY_MAX)]
        point_xy_max: f32,
        /// Print a JSON object instead of the bounds line
        #[arg(long)]
        json: bool,
    },
    /// Print a seeded random point cloud as JSON (input for `solve --input`)
    Sample {
        #[arg(long, default_value_t = 8)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = encircle::POINT_XY_MAX)]
        scale: f32,
    },
}

#[derive(Serialize)]
struct SolveReport {
    version: &'static str,
    points: usize,
    skipped: usize,
    circle: Circle,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            points,
            input,
            skip_out_of_range,
            point_xy_max,
            json,
        } => solve(points, input, skip_out_of_range, point_xy_max, json),
        Action::Sample {
            count,
            seed,
            index,
            scale,
        } => sample(count, seed, index, scale),
    }
}

fn solve(
    mut points: Vec<(f32, f32)>,
    input: Option<PathBuf>,
    skip_out_of_range: bool,
    point_xy_max: f32,
    json: bool,
) -> Result<()> {
    if let Some(path) = &input {
        points.extend(input::read_points(path)?);
    }
    tracing::info!(points = points.len(), input = ?input, skip_out_of_range, "solve");

    let cfg = DomainCfg::new(point_xy_max)?;
    let mut bound = Bound::with_cfg(cfg);
    let skipped = if skip_out_of_range {
        bound.extend_skipping(points)
    } else {
        bound
            .try_extend(points)
            .context("rerun with --skip-out-of-range to drop such points")?;
        0
    };

    let circle = bound.min_circle();
    if json {
        let report = SolveReport {
            version: encircle::VERSION,
            points: bound.len(),
            skipped,
            circle,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{circle}");
    }
    Ok(())
}

fn sample(count: usize, seed: u64, index: u64, scale: f32) -> Result<()> {
    tracing::info!(count, seed, index, scale, "sample");
    let cfg = PointCloudCfg {
        count,
        scale,
        ..PointCloudCfg::default()
    };
    let pts: Vec<[f32; 2]> = draw_points(cfg, ReplayToken { seed, index })
        .into_iter()
        .map(|(x, y)| [x, y])
        .collect();
    println!("{}", serde_json::to_string(&pts)?);
    Ok(())
}
