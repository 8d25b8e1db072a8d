//! Curve baker: replaces each region's straight-edged outer ring with a
//! sampled spline.

use geo::LineString;
use tracing::{debug, warn};

use crate::document::Region;
use crate::error::FitError;
use crate::geometry::{
    Point, WindingOrder, distinct_count, from_fit_space, to_fit_space, winding,
};

use super::config::BakeConfig;
use super::outcome::{BakeReport, RegionOutcome};
use super::spline::ClosedSpline;

/// Smooth every region in `regions`.
///
/// Output has the same length and order as the input. Regions that cannot
/// be smoothed come back as they went in.
pub fn bake(regions: &[Region], config: &BakeConfig) -> Vec<Region> {
    CurveBaker::new(*config).bake(regions)
}

/// Smooth a render-space ring.
///
/// The ring is swapped into fit space, closed, fitted, sampled and swapped
/// back. The result is closed and runs in the same direction as the input.
pub fn smooth_ring(ring: &[Point], config: &BakeConfig) -> Result<Vec<Point>, FitError> {
    if let Some(index) = ring.iter().position(|p| !p.is_finite()) {
        return Err(FitError::NonFinite { index });
    }
    let mut fit = to_fit_space(ring);
    fit.close();

    let distinct = distinct_count(&fit);
    if distinct < 3 {
        return Err(FitError::Degenerate { distinct });
    }
    let direction = winding(&fit).ok_or(FitError::ZeroArea)?;

    let spline = ClosedSpline::through(&fit, config.sharpness())?;
    let samples = spline.sample(config.resolution());
    check_curve(&samples, direction)?;

    Ok(from_fit_space(&samples))
}

/// A sampled curve must be finite and run in the same direction as the ring
/// it was fitted to.
fn check_curve(samples: &LineString<f64>, direction: WindingOrder) -> Result<(), FitError> {
    if let Some(index) = samples
        .coords()
        .position(|c| !(c.x.is_finite() && c.y.is_finite()))
    {
        return Err(FitError::NonFiniteSample { index });
    }
    if winding(samples) != Some(direction) {
        return Err(FitError::WindingFlipped);
    }
    Ok(())
}

/// Applies the curve fit to region collections.
#[derive(Debug, Clone, Default)]
pub struct CurveBaker {
    config: BakeConfig,
}

impl CurveBaker {
    /// Create a baker with the given configuration.
    pub fn new(config: BakeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BakeConfig {
        &self.config
    }

    /// Smooth every region and return the new collection.
    pub fn bake(&self, regions: &[Region]) -> Vec<Region> {
        self.bake_with_report(regions).into_regions()
    }

    /// Smooth every region, keeping the per-region outcomes.
    pub fn bake_with_report(&self, regions: &[Region]) -> BakeReport {
        let mut report = BakeReport::new();
        for (index, region) in regions.iter().enumerate() {
            report.push(self.bake_region(index, region));
        }
        report
    }

    /// Smooth one region. `index` is only used to label unnamed regions.
    pub fn bake_region(&self, index: usize, region: &Region) -> RegionOutcome {
        let ring = match region.outer_ring() {
            Ok(Some(ring)) => ring,
            Ok(None) => {
                return RegionOutcome::Unchanged {
                    region: region.clone(),
                };
            }
            Err(error) => return self.failed(index, region, error),
        };

        let smoothed = smooth_ring(&ring, &self.config)
            .and_then(|curve| region.with_outer_ring(&curve).map(|r| (r, curve.len())));

        match smoothed {
            Ok((smoothed, output_points)) => {
                debug!(
                    region = %region.label(index),
                    input_points = ring.len(),
                    output_points,
                    "smoothed region"
                );
                RegionOutcome::Smoothed {
                    region: smoothed,
                    input_points: ring.len(),
                    output_points,
                }
            }
            Err(error) => self.failed(index, region, error),
        }
    }

    fn failed(&self, index: usize, region: &Region, error: FitError) -> RegionOutcome {
        warn!(region = %region.label(index), reason = %error, "skipping region");
        RegionOutcome::Failed {
            region: region.clone(),
            error,
        }
    }
}
