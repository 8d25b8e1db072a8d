//! Curve-fit tunables.

use serde::{Deserialize, Serialize};

use crate::error::{CurveBakeError, Result};

/// Default number of samples taken along each fitted ring.
pub const DEFAULT_RESOLUTION: usize = 10_000;

/// Default blend between the approximating and interpolating spline.
pub const DEFAULT_SHARPNESS: f64 = 0.85;

/// Smallest resolution that can still describe a closed area.
pub const MIN_RESOLUTION: usize = 3;

/// Configuration for the curve baker.
///
/// Constructed through [`BakeConfig::new`], which rejects values the spline
/// cannot use, so a `BakeConfig` in hand is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BakeConfigFields", into = "BakeConfigFields")]
pub struct BakeConfig {
    resolution: usize,
    sharpness: f64,
}

#[derive(Serialize, Deserialize)]
struct BakeConfigFields {
    resolution: usize,
    sharpness: f64,
}

impl BakeConfig {
    /// Create a validated configuration.
    ///
    /// `resolution` is the number of samples along the fitted curve and must
    /// be at least [`MIN_RESOLUTION`]. `sharpness` must lie in `[0, 1]`:
    /// 0 gives the loosest curve, 1 passes through every original vertex.
    pub fn new(resolution: usize, sharpness: f64) -> Result<Self> {
        if resolution < MIN_RESOLUTION {
            return Err(CurveBakeError::Config(format!(
                "resolution must be at least {}, got {}",
                MIN_RESOLUTION, resolution
            )));
        }
        if !sharpness.is_finite() || !(0.0..=1.0).contains(&sharpness) {
            return Err(CurveBakeError::Config(format!(
                "sharpness must be within [0, 1], got {}",
                sharpness
            )));
        }
        Ok(Self {
            resolution,
            sharpness,
        })
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn sharpness(&self) -> f64 {
        self.sharpness
    }
}

impl Default for BakeConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            sharpness: DEFAULT_SHARPNESS,
        }
    }
}

impl TryFrom<BakeConfigFields> for BakeConfig {
    type Error = CurveBakeError;

    fn try_from(fields: BakeConfigFields) -> Result<Self> {
        Self::new(fields.resolution, fields.sharpness)
    }
}

impl From<BakeConfig> for BakeConfigFields {
    fn from(config: BakeConfig) -> Self {
        Self {
            resolution: config.resolution,
            sharpness: config.sharpness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BakeConfig::default();
        assert_eq!(config.resolution(), 10_000);
        assert_eq!(config.sharpness(), 0.85);
    }

    #[test]
    fn test_rejects_small_resolution() {
        assert!(matches!(
            BakeConfig::new(2, 0.5),
            Err(CurveBakeError::Config(_))
        ));
        assert!(BakeConfig::new(3, 0.5).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_sharpness() {
        assert!(BakeConfig::new(100, -0.1).is_err());
        assert!(BakeConfig::new(100, 1.01).is_err());
        assert!(BakeConfig::new(100, f64::NAN).is_err());
        assert!(BakeConfig::new(100, 0.0).is_ok());
        assert!(BakeConfig::new(100, 1.0).is_ok());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: BakeConfig = serde_json::from_str(r#"{"resolution": 500, "sharpness": 0.5}"#)
            .expect("valid config");
        assert_eq!(ok.resolution(), 500);

        let bad = serde_json::from_str::<BakeConfig>(r#"{"resolution": 500, "sharpness": 2.0}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_value(BakeConfig::default()).expect("serialize");
        assert_eq!(json["resolution"], 10_000);
        assert_eq!(json["sharpness"], 0.85);
    }
}
