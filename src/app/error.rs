// Demo-level errors. Every variant states *where* things went wrong;
// engine errors pass through unchanged.
use thiserror::Error;

use mask_brush::BrushError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Creating the window failed
    #[error("window init error: {0}")]
    WindowInit(String),
    /// Pushing a frame to the window failed
    #[error("window update error: {0}")]
    WindowUpdate(String),
    /// Screen, background and mask disagree on size
    #[error("composite error: {0}")]
    Composite(String),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("brush settings file: {0}")]
    BrushFile(#[from] serde_json::Error),
    #[error(transparent)]
    Brush(#[from] BrushError),
}
