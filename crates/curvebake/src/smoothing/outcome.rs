//! Per-region results of a bake.

use serde::{Deserialize, Serialize};

use crate::document::Region;
use crate::error::FitError;

/// What happened to one region.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionOutcome {
    /// The outer ring was replaced by the fitted curve.
    Smoothed {
        region: Region,
        input_points: usize,
        output_points: usize,
    },

    /// There was no ring to smooth; the region is returned as it was.
    Unchanged { region: Region },

    /// Curve fitting failed; `region` is the original, untransformed record.
    Failed { region: Region, error: FitError },
}

impl RegionOutcome {
    /// The record that goes into the output collection.
    pub fn region(&self) -> &Region {
        match self {
            RegionOutcome::Smoothed { region, .. }
            | RegionOutcome::Unchanged { region }
            | RegionOutcome::Failed { region, .. } => region,
        }
    }

    pub fn into_region(self) -> Region {
        match self {
            RegionOutcome::Smoothed { region, .. }
            | RegionOutcome::Unchanged { region }
            | RegionOutcome::Failed { region, .. } => region,
        }
    }

    pub fn is_smoothed(&self) -> bool {
        matches!(self, RegionOutcome::Smoothed { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RegionOutcome::Failed { .. })
    }
}

/// A region that could not be smoothed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Position of the region in the collection (0-based).
    pub index: usize,
    /// Region name, or `#<index>` when it has none.
    pub region: String,
    /// Why fitting failed.
    pub reason: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Skipping \"{}\": {}", self.region, self.reason)
    }
}

/// Outcomes for a whole collection, in input order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BakeReport {
    pub outcomes: Vec<RegionOutcome>,
    pub diagnostics: Vec<Diagnostic>,
}

impl BakeReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for the next region.
    pub fn push(&mut self, outcome: RegionOutcome) {
        if let RegionOutcome::Failed { region, error } = &outcome {
            let index = self.outcomes.len();
            self.diagnostics.push(Diagnostic {
                index,
                region: region.label(index),
                reason: error.to_string(),
            });
        }
        self.outcomes.push(outcome);
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn smoothed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_smoothed()).count()
    }

    pub fn unchanged_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RegionOutcome::Unchanged { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Counts in one serializable struct.
    pub fn counts(&self) -> OutcomeCounts {
        OutcomeCounts {
            total: self.len(),
            smoothed: self.smoothed_count(),
            unchanged: self.unchanged_count(),
            failed: self.failed_count(),
        }
    }

    /// The output collection, in input order.
    pub fn into_regions(self) -> Vec<Region> {
        self.outcomes
            .into_iter()
            .map(RegionOutcome::into_region)
            .collect()
    }
}

/// Region counts by outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCounts {
    pub total: usize,
    pub smoothed: usize,
    pub unchanged: usize,
    pub failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn named(name: &str) -> Region {
        Region::polygon(name, &[vec![Point::new(0.0, 0.0)]])
    }

    #[test]
    fn test_push_records_diagnostics_for_failures_only() {
        let mut report = BakeReport::new();
        report.push(RegionOutcome::Unchanged { region: named("a") });
        report.push(RegionOutcome::Failed {
            region: named("b"),
            error: FitError::Degenerate { distinct: 1 },
        });
        report.push(RegionOutcome::Smoothed {
            region: named("c"),
            input_points: 4,
            output_points: 101,
        });

        assert_eq!(report.diagnostics.len(), 1);
        let diag = &report.diagnostics[0];
        assert_eq!(diag.index, 1);
        assert_eq!(diag.region, "b");
        assert_eq!(
            diag.to_string(),
            "Skipping \"b\": degenerate ring: 1 distinct point(s), need at least 3"
        );

        assert_eq!(
            report.counts(),
            OutcomeCounts {
                total: 3,
                smoothed: 1,
                unchanged: 1,
                failed: 1
            }
        );

        let names: Vec<_> = report
            .into_regions()
            .iter()
            .map(|r| r.name().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
