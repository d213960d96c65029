//! polysimp-bench: CLI tool for simplification parameter experimentation.
//!
//! Generates a synthetic polyline and simplifies it with configurable
//! tolerance and quality, printing per-stage diagnostics. Useful for:
//!
//! - Comparing the `Highest` and `Fast` pipelines on the same input
//! - Tuning the tolerance for a given point density
//! - Measuring per-stage durations and Douglas-Peucker work
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin polysimp-bench -- [OPTIONS] <SHAPE>
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::f64::consts::TAU;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use polysimp::diagnostics::{SimplifyDiagnostics, SystemClock, simplify_with_diagnostics};
use polysimp::{Point, Quality, SimplifyConfig};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

/// Simplification parameter experimentation and diagnostics for polysimp.
///
/// Simplifies a generated polyline and prints detailed per-stage timing
/// and count diagnostics.
#[derive(Parser)]
#[command(name = "polysimp-bench", version)]
struct Cli {
    /// Synthetic input shape.
    #[arg(value_enum)]
    shape: Shape,

    /// Number of points in the generated polyline.
    #[arg(long, default_value_t = 100_000)]
    points: u32,

    /// Maximum allowed deviation.
    #[arg(long, default_value_t = SimplifyConfig::<f64>::DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Run the radial-distance prefilter before Douglas-Peucker.
    #[arg(long)]
    fast: bool,

    /// Number of runs for averaging.
    #[arg(long, default_value_t = 1, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    runs: usize,

    /// Output diagnostics as JSON instead of human-readable report.
    #[arg(long)]
    json: bool,

    /// Full simplify config as a JSON string.
    ///
    /// When provided, `--tolerance` and `--fast` are ignored. The JSON
    /// must be a valid `SimplifyConfig` serialization.
    #[arg(long)]
    config_json: Option<String>,

    /// Verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

/// Synthetic polyline shape.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    /// Diverging spiral with a constant angular step.
    Spiral,
    /// Densely sampled sine wave with high-frequency ripple.
    Sine,
    /// Shallow zig-zag riding on a slow wave.
    Zigzag,
}

impl Shape {
    /// Generate `n` points of this shape.
    fn generate(self, n: u32) -> Vec<Point> {
        (0..n)
            .map(|i| {
                let t = f64::from(i);
                match self {
                    Self::Spiral => {
                        let angle = t * TAU / 360.0;
                        Point::new(angle * angle.cos(), angle * angle.sin())
                    }
                    Self::Sine => {
                        let x = t * 0.05;
                        Point::new(x, 10.0 * (x * 0.2).sin() + 0.3 * (x * 9.7).sin())
                    }
                    Self::Zigzag => {
                        let x = t * 0.5;
                        let ripple = if i % 2 == 0 { 0.0 } else { 0.4 };
                        Point::new(x, 5.0 * (x * 0.05).sin() + ripple)
                    }
                }
            })
            .collect()
    }
}

/// Build a [`SimplifyConfig`] from CLI arguments.
///
/// If `--config-json` is provided, the JSON is parsed directly and the
/// individual flags are ignored. Either way the result is validated.
fn config_from_cli(cli: &Cli) -> Result<SimplifyConfig, String> {
    let config = match cli.config_json {
        Some(ref json) => serde_json::from_str(json)
            .map_err(|e| format!("Error parsing --config-json: {e}"))?,
        None => SimplifyConfig::new(cli.tolerance, Quality::from(!cli.fast)),
    };
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install log subscriber: {e}");
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = match config_from_cli(&cli) {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let points = cli.shape.generate(cli.points);

    info!(shape = ?cli.shape, points = points.len(), "generated input");
    info!(tolerance = config.tolerance, quality = ?config.quality, runs = cli.runs, "config");

    let mut all_diagnostics = Vec::with_capacity(cli.runs);

    for run in 0..cli.runs {
        if cli.runs > 1 {
            info!("run {}/{}", run + 1, cli.runs);
        }

        let (_, diagnostics) = simplify_with_diagnostics(&points, &config, &SystemClock);

        if cli.json {
            match serde_json::to_string_pretty(&diagnostics) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Error serializing diagnostics: {e}");
                    return ExitCode::FAILURE;
                }
            }
        } else {
            println!("{}", diagnostics.report());
        }

        all_diagnostics.push(diagnostics);
    }

    // Print summary when multiple runs.
    if cli.runs > 1 {
        print_multi_run_summary(&all_diagnostics);
    }

    ExitCode::SUCCESS
}

/// Print aggregated statistics across multiple runs.
#[allow(clippy::cast_precision_loss)]
fn print_multi_run_summary(all_diagnostics: &[SimplifyDiagnostics]) {
    println!();
    println!(
        "Summary ({} runs)\n{}",
        all_diagnostics.len(),
        "=".repeat(60),
    );

    if all_diagnostics.is_empty() {
        println!("Warning: no diagnostics to summarize");
        return;
    }

    let durations: Vec<f64> = all_diagnostics
        .iter()
        .map(|d| d.total_duration.as_secs_f64() * 1000.0)
        .collect();

    let min = durations.iter().copied().reduce(f64::min).unwrap_or(0.0);
    let max = durations.iter().copied().reduce(f64::max).unwrap_or(0.0);
    let mean = durations.iter().sum::<f64>() / durations.len() as f64;

    println!("Total duration: min={min:.3}ms  mean={mean:.3}ms  max={max:.3}ms");

    // Per-stage means.
    println!();
    println!("{:<24} {:>12}", "Stage", "Mean (ms)");
    println!("{}", "-".repeat(40));

    let mut stage_names: Vec<&str> = Vec::new();
    for diag in all_diagnostics {
        for (name, _) in diag.stages() {
            if !stage_names.contains(&name) {
                stage_names.push(name);
            }
        }
    }

    for name in stage_names {
        let stage_durations: Vec<f64> = all_diagnostics
            .iter()
            .flat_map(SimplifyDiagnostics::stages)
            .filter(|(n, _)| *n == name)
            .map(|(_, s)| s.duration.as_secs_f64() * 1000.0)
            .collect();

        let stage_mean = stage_durations.iter().sum::<f64>() / stage_durations.len() as f64;
        println!("{name:<24} {stage_mean:>10.3}ms");
    }
}
