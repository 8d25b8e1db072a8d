//! Batch driver: source document in, smoothed document out.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::document::{RegionDocument, SourceMetadata};
use crate::error::{CurveBakeError, Result};
use crate::smoothing::{BakeConfig, BakeReport, CurveBaker, Diagnostic, OutcomeCounts};

/// Result of a completed batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Metadata about the source document.
    pub source: SourceMetadata,
    /// Where the smoothed document was written.
    pub destination: PathBuf,
    /// SHA-256 hash of the written document.
    pub output_hash: String,
    /// Configuration the regions were baked with.
    pub config: BakeConfig,
    /// Region counts by outcome.
    pub counts: OutcomeCounts,
    /// One entry per region that kept its original boundary.
    pub diagnostics: Vec<Diagnostic>,
    /// When the destination was written.
    pub completed_at: DateTime<Utc>,
}

/// Result of a dry run: what a bake would do, without writing anything.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub source: SourceMetadata,
    pub report: BakeReport,
}

/// Reads a region document, bakes it, and writes the result.
#[derive(Debug, Clone, Default)]
pub struct BatchDriver {
    baker: CurveBaker,
}

impl BatchDriver {
    /// Create a driver with the default configuration.
    pub fn new() -> Self {
        Self::with_config(BakeConfig::default())
    }

    /// Create a driver with a custom configuration.
    pub fn with_config(config: BakeConfig) -> Self {
        Self {
            baker: CurveBaker::new(config),
        }
    }

    pub fn config(&self) -> &BakeConfig {
        self.baker.config()
    }

    /// Bake `source` into `destination`.
    ///
    /// Logs one success line naming the destination or one error line with
    /// the cause. On error the destination is left as it was.
    pub fn run(&self, source: impl AsRef<Path>, destination: impl AsRef<Path>) -> Result<BatchSummary> {
        let source = source.as_ref();
        let destination = destination.as_ref();

        match self.run_inner(source, destination) {
            Ok(summary) => {
                info!(
                    destination = %destination.display(),
                    regions = summary.counts.total,
                    failed = summary.counts.failed,
                    "smoothed data saved"
                );
                Ok(summary)
            }
            Err(e) => {
                error!(source = %source.display(), error = %e, "error processing regions");
                Err(e)
            }
        }
    }

    /// Bake `source` in memory and report the outcomes.
    pub fn check(&self, source: impl AsRef<Path>) -> Result<CheckResult> {
        let (document, source) = RegionDocument::load(source)?;
        let report = self.baker.bake_with_report(document.regions());
        Ok(CheckResult { source, report })
    }

    fn run_inner(&self, source: &Path, destination: &Path) -> Result<BatchSummary> {
        ensure_distinct(source, destination)?;

        info!(source = %source.display(), "loading regions");
        let (document, metadata) = RegionDocument::load(source)?;

        let report = self.baker.bake_with_report(document.regions());
        let counts = report.counts();
        let diagnostics = report.diagnostics.clone();

        let baked = document.with_regions(report.into_regions());
        let output_hash = baked.save(destination)?;

        Ok(BatchSummary {
            source: metadata,
            destination: destination.to_path_buf(),
            output_hash,
            config: *self.config(),
            counts,
            diagnostics,
            completed_at: Utc::now(),
        })
    }
}

/// Refuse to overwrite the source document with its own output.
fn ensure_distinct(source: &Path, destination: &Path) -> Result<()> {
    let same = match (fs::canonicalize(source), fs::canonicalize(destination)) {
        (Ok(a), Ok(b)) => a == b,
        _ => source == destination,
    };
    if same {
        return Err(CurveBakeError::Config(format!(
            "destination '{}' is the source document; choose a different output path",
            destination.display()
        )));
    }
    Ok(())
}
