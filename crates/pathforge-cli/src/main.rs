//! PathForge command-line driver.
//!
//! Reads a point file, computes the optimized visiting order, writes the
//! points back out in that order, and reports both path lengths. All file
//! handling, plotting, and exit codes live here; the optimization core
//! stays headless.

mod io;
mod plot;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pathforge::{optimize_points, ConfigError, Metric, PathForgeError, RunConfig, Tour};

#[derive(Debug, Parser)]
#[command(
    name = "pathforge",
    version,
    about = "Reorders measurement points to shorten the travel path between consecutive visits"
)]
struct Args {
    /// Input point file: one point per line, `[label,]X,Y[,Z]`, comma- or
    /// whitespace-separated
    input: PathBuf,

    /// Output file for the reordered points
    output: PathBuf,

    /// Measure distances in the XY plane only
    #[arg(long)]
    xy: bool,

    /// Coordinates per point in the input
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(2..=3))]
    dims: u8,

    /// Refine the input order directly instead of building a greedy tour first
    #[arg(long)]
    skip_construction: bool,

    /// Skip 2-opt refinement (greedy construction only)
    #[arg(long)]
    no_refine: bool,

    /// Reorder the original input lines verbatim instead of reformatting
    #[arg(long)]
    preserve_lines: bool,

    /// Directory for SVG plots of the original and optimized paths
    #[arg(long, value_name = "DIR")]
    svg: Option<PathBuf>,

    /// Run configuration file (TOML, or YAML by extension); flags override it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Only log errors
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Parse(#[from] io::ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] PathForgeError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.quiet);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(quiet: bool) {
    let default = if quiet { "error" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let config = build_config(&args)?;
    config.validate()?;

    let started = Instant::now();
    let parsed = io::read_points(&args.input, args.dims as usize)?;
    info!(
        n = parsed.points.len(),
        dims = parsed.points.dims(),
        input = %args.input.display(),
        "points loaded"
    );

    let summary = optimize_points(&parsed.points, &config)?;

    if args.preserve_lines {
        io::write_raw_lines(&args.output, &parsed.raw_lines, &summary.tour)
    } else {
        io::write_points(&args.output, &parsed.points, &summary.tour)
    }
    .map_err(|source| CliError::Write {
        path: args.output.clone(),
        source,
    })?;

    if let Some(dir) = &args.svg {
        let original = Tour::identity(parsed.points.len());
        plot::write_svg_plots(dir, &parsed.points, &original, &summary.tour).map_err(|source| {
            CliError::Write {
                path: dir.clone(),
                source,
            }
        })?;
        info!(dir = %dir.display(), "wrote path plots");
    }

    println!("Initial path length   = {:.6}", summary.original_length);
    println!("Optimized path length = {:.6}", summary.optimized_length);
    println!("Improvement           = {:.2}%", summary.improvement_percent());
    info!(
        output = %args.output.display(),
        elapsed = ?started.elapsed(),
        "wrote reordered points"
    );

    Ok(())
}

/// Merges the optional config file with command-line overrides.
fn build_config(args: &Args) -> Result<RunConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    if args.xy {
        config = config.with_metric(Metric::Xy);
    }
    if args.skip_construction {
        config = config.with_construction(false);
    }
    if args.no_refine {
        config = config.with_refinement(false);
    }
    Ok(config)
}
