//! CLI command implementations.

pub mod bake;
pub mod check;

use curvebake::BakeConfig;

use crate::cli::CurveArgs;

impl CurveArgs {
    /// Validated baker configuration from the command-line values.
    pub fn to_config(&self) -> curvebake::Result<BakeConfig> {
        BakeConfig::new(self.resolution, self.sharpness)
    }
}
