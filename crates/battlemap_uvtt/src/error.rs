//! Codec error type

use thiserror::Error;

/// Errors surfaced by the UVTT codec
///
/// Geometry-level malformations (bad colors, degenerate walls) are
/// normalized locally and never reach this type; only transport-level
/// JSON failure does.
#[derive(Debug, Error)]
pub enum UvttError {
    #[error("failed to parse UVTT document: {0}")]
    Json(#[from] serde_json::Error),
}
