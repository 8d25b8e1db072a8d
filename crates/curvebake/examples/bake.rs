//! Example: Smooth a region document and report what happened per region.
//!
//! Usage:
//!   cargo run --example bake -- <regions.json> [resolution] [sharpness]
//!
//! Example:
//!   cargo run --example bake -- src/regions.json 2000 0.85

use std::env;
use std::path::Path;

use curvebake::{BakeConfig, BatchDriver, RegionOutcome, smooth_path};

fn main() -> curvebake::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example bake -- <regions.json> [resolution] [sharpness]");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example bake -- src/regions.json 2000 0.85");
        std::process::exit(1);
    }

    let source = Path::new(&args[1]);
    let resolution = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(curvebake::smoothing::DEFAULT_RESOLUTION);
    let sharpness = args
        .get(3)
        .and_then(|s| s.parse().ok())
        .unwrap_or(curvebake::smoothing::DEFAULT_SHARPNESS);

    let driver = BatchDriver::with_config(BakeConfig::new(resolution, sharpness)?);

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("Baking: {}", source.display());
    println!("{}", separator);

    let check = driver.check(source)?;
    for (index, outcome) in check.report.outcomes.iter().enumerate() {
        let label = outcome.region().label(index);
        match outcome {
            RegionOutcome::Smoothed {
                input_points,
                output_points,
                ..
            } => println!("  {:<30} {} -> {} points", label, input_points, output_points),
            RegionOutcome::Unchanged { .. } => println!("  {:<30} no boundary", label),
            RegionOutcome::Failed { error, .. } => println!("  {:<30} kept original: {}", label, error),
        }
    }

    let destination = smooth_path(source);
    let summary = driver.run(source, &destination)?;
    println!();
    println!("Wrote {} ({})", summary.destination.display(), summary.output_hash);

    Ok(())
}
