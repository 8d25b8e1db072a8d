//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use curvebake::smoothing::{DEFAULT_RESOLUTION, DEFAULT_SHARPNESS};

/// curvebake: smooth polygonal map regions into curved boundaries
#[derive(Parser)]
#[command(name = "curvebake")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (per-region debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Smooth every region in a document and write the result
    Bake {
        /// Path to the region document (JSON)
        #[arg(value_name = "SOURCE")]
        file: PathBuf,

        /// Output path (default: <source>_smooth.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        curve: CurveArgs,

        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report which regions would keep their original boundary, without writing
    Check {
        /// Path to the region document (JSON)
        #[arg(value_name = "SOURCE")]
        file: PathBuf,

        #[command(flatten)]
        curve: CurveArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Curve-fit tunables shared by the commands.
#[derive(clap::Args, Clone, Debug)]
pub struct CurveArgs {
    /// Number of samples along each fitted ring
    #[arg(short, long, default_value_t = DEFAULT_RESOLUTION)]
    pub resolution: usize,

    /// How tightly the curve hugs the original vertices (0.0 to 1.0)
    #[arg(short, long, default_value_t = DEFAULT_SHARPNESS)]
    pub sharpness: f64,
}
