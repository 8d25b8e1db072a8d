//! Error types for the curvebake library.
//!
//! Two tiers exist. [`CurveBakeError`] is fatal to a batch run (unreadable
//! source, undecodable document, unwritable destination, bad configuration).
//! [`FitError`] is scoped to a single region: the baker records it and keeps
//! the region's original geometry.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for curvebake operations.
#[derive(Debug, Error)]
pub enum CurveBakeError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed as JSON but does not have the region collection shape.
    #[error("Decode error in '{path}': {message}")]
    Decode { path: PathBuf, message: String },

    /// Error writing the output document.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for curvebake operations.
pub type Result<T> = std::result::Result<T, CurveBakeError>;

/// Reason a single region could not be smoothed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    /// The boundary is present but not shaped like a list of rings of positions.
    #[error("malformed geometry: {0}")]
    MalformedGeometry(String),

    /// A position carries fewer than two numeric coordinates.
    #[error("position {index} has {found} coordinate(s), expected at least 2")]
    ShortPosition { index: usize, found: usize },

    /// A coordinate is NaN or infinite.
    #[error("non-finite coordinate at position {index}")]
    NonFinite { index: usize },

    /// The closed ring does not span an area.
    #[error("degenerate ring: {distinct} distinct point(s), need at least 3")]
    Degenerate { distinct: usize },

    /// The ring's vertices are all collinear.
    #[error("degenerate ring: vertices enclose no area")]
    ZeroArea,

    /// The fitted curve runs in the opposite direction to the input ring.
    #[error("fitted curve reversed the ring winding")]
    WindingFlipped,

    /// The fitted curve produced a value that cannot be written as JSON.
    #[error("fitted curve produced a non-finite sample at {index}")]
    NonFiniteSample { index: usize },
}
