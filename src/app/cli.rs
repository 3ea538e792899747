// Command line for the demo painter.

use std::path::{Path, PathBuf};

use clap::Parser;
use mask_brush::BrushSettings;
use tracing::info;

use super::error::AppError;

#[derive(Debug, Parser)]
#[command(name = "mask-brush", about = "Paint a binary mask with a round brush")]
pub struct Args {
    /// Background image; the window takes its size
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Grayscale image to start the mask from (thresholded at 127)
    #[arg(long)]
    pub mask: Option<PathBuf>,

    /// Canvas width when no background image is given
    #[arg(long, default_value_t = 640)]
    pub width: usize,

    /// Canvas height when no background image is given
    #[arg(long, default_value_t = 480)]
    pub height: usize,

    /// JSON brush settings, e.g. {"size": 32, "spacing": 0.25}
    #[arg(long)]
    pub brush: Option<PathBuf>,

    /// Verbose logging (honours RUST_LOG)
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Brush from `--brush`, or the defaults. Rejected before the window opens.
    pub fn load_brush(&self) -> Result<BrushSettings, AppError> {
        match &self.brush {
            Some(path) => load_brush_file(path),
            None => Ok(BrushSettings::default()),
        }
    }
}

pub fn load_brush_file(path: &Path) -> Result<BrushSettings, AppError> {
    let text = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let settings = parse_brush(&text)?;
    info!(path = %path.display(), size = settings.size, spacing = settings.spacing, "loaded brush settings");
    Ok(settings)
}

pub fn parse_brush(text: &str) -> Result<BrushSettings, AppError> {
    let settings: BrushSettings = serde_json::from_str(text)?;
    settings.validate()?;
    Ok(settings)
}
