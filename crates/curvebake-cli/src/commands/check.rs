//! Check command - report which regions would keep their original boundary.

use std::path::PathBuf;

use colored::Colorize;
use curvebake::{BatchDriver, RegionOutcome};

use crate::cli::CurveArgs;

pub fn run(
    file: PathBuf,
    curve: CurveArgs,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("Region file not found: {}", file.display()).into());
    }

    let config = curve.to_config()?;
    let result = BatchDriver::with_config(config).check(&file)?;
    let report = &result.report;

    if json_output {
        let status = serde_json::json!({
            "file": result.source.file,
            "hash": result.source.hash,
            "layout": result.source.layout,
            "config": config,
            "counts": report.counts(),
            "diagnostics": report.diagnostics,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!(
        "{} {} ({}, {} regions)",
        "Checked".cyan().bold(),
        result.source.file.white(),
        result.source.layout,
        report.len()
    );
    println!();

    if verbose {
        for (index, outcome) in report.outcomes.iter().enumerate() {
            if let RegionOutcome::Smoothed {
                input_points,
                output_points,
                region,
            } = outcome
            {
                println!(
                    "  {} {} {} -> {} points",
                    "✓".green(),
                    region.label(index),
                    input_points,
                    output_points
                );
            }
        }
    }

    if report.diagnostics.is_empty() {
        println!("  {} Every region with a boundary can be smoothed", "✓".green());
    } else {
        println!(
            "  {} region(s) would keep their original boundary:",
            report.failed_count().to_string().yellow().bold()
        );
        for diagnostic in &report.diagnostics {
            println!(
                "  {} {} {}",
                "•".dimmed(),
                diagnostic.region.cyan(),
                diagnostic.reason
            );
        }
    }

    if report.unchanged_count() > 0 {
        println!(
            "  {} region(s) have no boundary and pass through",
            report.unchanged_count().to_string().white()
        );
    }

    Ok(())
}
