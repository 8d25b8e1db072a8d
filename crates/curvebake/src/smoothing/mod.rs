//! Curve fitting for region boundaries.

mod baker;
mod config;
mod outcome;
mod spline;

pub use baker::{CurveBaker, bake, smooth_ring};
pub use config::{BakeConfig, DEFAULT_RESOLUTION, DEFAULT_SHARPNESS, MIN_RESOLUTION};
pub use outcome::{BakeReport, Diagnostic, OutcomeCounts, RegionOutcome};
pub use spline::{ClosedSpline, CubicSegment};
