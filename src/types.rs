// Core value types shared by every stage of the brush pipeline.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::error::{BrushError, Result};

/// Value written for painted pixels.
pub const MASK_SET: u8 = 255;
/// Value written for erased (unset) pixels.
pub const MASK_UNSET: u8 = 0;

/// Sub-pixel position in image space (raw pointer samples, stamp centers).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Snap both coordinates to the nearest pixel (halves round up).
    pub fn rounded(self) -> Point {
        Point::new(round_px(self.x), round_px(self.y))
    }
}

/// Round to the nearest integer, ties toward +inf.
/// Unlike `f64::round`, the result is the same on both sides of zero, so
/// stamps crossing the image origin keep their shape.
#[inline]
pub fn round_px(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Integer pixel where a stamp is centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StampPosition {
    pub x: i32,
    pub y: i32,
}

impl StampPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<Point> for StampPosition {
    fn from(p: Point) -> Self {
        // `as` saturates for out-of-range floats; those pixels are clipped anyway.
        let r = p.rounded();
        Self { x: r.x as i32, y: r.y as i32 }
    }
}

impl From<StampPosition> for Point {
    fn from(s: StampPosition) -> Self {
        Point::new(s.x as f64, s.y as f64)
    }
}

/// Paint sets pixels to 255, erase clears them to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrushMode {
    #[default]
    Paint,
    Erase,
}

impl BrushMode {
    /// The mask value this mode writes.
    pub const fn target_value(self) -> u8 {
        match self {
            BrushMode::Paint => MASK_SET,
            BrushMode::Erase => MASK_UNSET,
        }
    }
}

pub const DEFAULT_BRUSH_SIZE: f64 = 20.0;
pub const DEFAULT_BRUSH_SPACING: f64 = 0.35;

/// Brush configuration held by the caller.
///
/// Deserialized settings should go through [`BrushSettings::validate`]
/// before the first stroke; the constructors and setters validate eagerly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushSettings {
    /// Stamp diameter in pixels.
    pub size: f64,
    pub mode: BrushMode,
    /// Distance between stamps as a fraction of the diameter, in `(0, 1]`.
    pub spacing: f64,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_BRUSH_SIZE,
            mode: BrushMode::Paint,
            spacing: DEFAULT_BRUSH_SPACING,
        }
    }
}

impl BrushSettings {
    pub fn new(size: f64, mode: BrushMode, spacing: f64) -> Result<Self> {
        let settings = Self { size, mode, spacing };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        check_size(self.size)?;
        check_spacing(self.spacing)
    }

    pub fn set_size(&mut self, size: f64) -> Result<()> {
        check_size(size)?;
        self.size = size;
        Ok(())
    }

    pub fn set_spacing(&mut self, spacing: f64) -> Result<()> {
        check_spacing(spacing)?;
        self.spacing = spacing;
        Ok(())
    }

    pub fn set_mode(&mut self, mode: BrushMode) {
        self.mode = mode;
    }

    /// Minimum distance in pixels between consecutive stamp centers.
    pub fn spacing_distance(&self) -> f64 {
        self.size * self.spacing
    }
}

fn check_size(size: f64) -> Result<()> {
    if !size.is_finite() || size <= 0.0 {
        return Err(BrushError::ConfigInvalid(format!(
            "brush size must be a positive finite number, got {size}"
        )));
    }
    Ok(())
}

fn check_spacing(spacing: f64) -> Result<()> {
    if !spacing.is_finite() || spacing <= 0.0 || spacing > 1.0 {
        return Err(BrushError::ConfigInvalid(format!(
            "brush spacing must be in (0, 1], got {spacing}"
        )));
    }
    Ok(())
}

/// One pointer-drag gesture: the sampled path plus the brush captured at its start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrushStroke {
    points: Vec<Point>,
    size: f64,
    mode: BrushMode,
    created_at: SystemTime,
}

impl BrushStroke {
    pub(crate) fn begin(start: Point, size: f64, mode: BrushMode) -> Self {
        Self {
            points: vec![start],
            size,
            mode,
            created_at: SystemTime::now(),
        }
    }

    /// Rebuild a stroke from recorded samples (e.g. for replay).
    /// Unlike a live stroke this may be empty.
    pub fn from_points(points: Vec<Point>, size: f64, mode: BrushMode) -> Self {
        Self {
            points,
            size,
            mode,
            created_at: SystemTime::now(),
        }
    }

    pub(crate) fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Samples in chronological order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn mode(&self) -> BrushMode {
        self.mode
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Axis-aligned pixel rectangle touched by a stroke, already clipped to the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeBounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}
