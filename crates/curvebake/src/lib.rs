//! curvebake: batch smoothing of polygonal map regions.
//!
//! Region boundaries traced by hand over a map image are straight-edged
//! rings. curvebake replaces each region's outer ring with a closed cubic
//! spline through the same vertices, so the regions render as smooth shapes.
//!
//! # Core Principles
//!
//! - **Non-destructive**: the source document is never modified, and a
//!   region that cannot be smoothed keeps its original boundary
//! - **Isolated failures**: one bad region never aborts the batch
//! - **Deterministic**: the same input and configuration give the same bytes
//!
//! # Example
//!
//! ```no_run
//! use curvebake::{BakeConfig, BatchDriver};
//!
//! let driver = BatchDriver::with_config(BakeConfig::new(10_000, 0.85).unwrap());
//! let summary = driver.run("src/regions.json", "src/regions_smooth.json").unwrap();
//!
//! println!("Smoothed: {}", summary.counts.smoothed);
//! println!("Kept original: {}", summary.counts.failed);
//! ```

pub mod document;
pub mod error;
pub mod geometry;
pub mod smoothing;

mod driver;

pub use document::{Region, RegionDocument, SourceMetadata, smooth_path};
pub use driver::{BatchDriver, BatchSummary, CheckResult};
pub use error::{CurveBakeError, FitError, Result};
pub use geometry::{Point, from_fit_space, to_fit_space};
pub use smoothing::{
    BakeConfig, BakeReport, CurveBaker, Diagnostic, OutcomeCounts, RegionOutcome, bake,
    smooth_ring,
};
