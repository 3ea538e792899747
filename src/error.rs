// Error type for the brush engine.
// Every variant names the caller contract that was broken; pixel clipping
// is never an error.
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BrushError {
    /// A stroke operation was called in the wrong session state
    /// (e.g. continuing when no stroke is active).
    #[error("invalid stroke state: {0}")]
    InvalidState(&'static str),

    /// Brush configuration rejected before any stroke begins.
    #[error("invalid brush configuration: {0}")]
    ConfigInvalid(String),

    /// Pointer sample with a NaN or infinite coordinate.
    #[error("non-finite pointer position ({x}, {y})")]
    NonFinitePoint { x: f64, y: f64 },

    /// Mask slice length does not match the declared `width * height`.
    #[error("mask dimension mismatch: expected {expected} bytes, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, BrushError>;
