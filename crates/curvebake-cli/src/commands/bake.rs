//! Bake command - smooth a region document and write the result.

use std::path::PathBuf;

use colored::Colorize;
use curvebake::{BatchDriver, smooth_path};

use crate::cli::CurveArgs;

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    curve: CurveArgs,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("Region file not found: {}", file.display()).into());
    }

    let config = curve.to_config()?;
    let destination = output.unwrap_or_else(|| smooth_path(&file));

    if !json_output {
        println!(
            "{} regions from {}...",
            "Loading".cyan().bold(),
            file.display().to_string().white()
        );
    }

    let summary = BatchDriver::with_config(config).run(&file, &destination)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let counts = summary.counts;
    println!(
        "  {} smoothed, {} without boundary, {} kept original",
        counts.smoothed.to_string().green(),
        counts.unchanged.to_string().white(),
        if counts.failed > 0 {
            counts.failed.to_string().yellow()
        } else {
            counts.failed.to_string().white()
        }
    );

    if verbose {
        for diagnostic in &summary.diagnostics {
            println!("  {} {}", "•".dimmed(), diagnostic);
        }
        println!("  {} {}", "hash".dimmed(), summary.output_hash.dimmed());
    }

    println!();
    println!(
        "{} Smoothed data saved to {}",
        "Success!".green().bold(),
        summary.destination.display().to_string().cyan()
    );

    Ok(())
}
