// Live stroke session.
// The caller owns the `StrokeSession` value and threads it through the three
// operations; nothing here touches a mask. Stamps come back as positions for
// the caller to rasterize.

use tracing::{debug, trace, warn};

use crate::error::{BrushError, Result};
use crate::spacing::interpolate;
use crate::types::{BrushSettings, BrushStroke, Point, StampPosition};

/// `Idle` until a stroke starts; `Active` holds the stroke and the last
/// position a stamp was emitted at.
#[derive(Debug, Clone, Default)]
pub enum StrokeSession {
    #[default]
    Idle,
    Active { stroke: BrushStroke, anchor: Point },
}

impl StrokeSession {
    pub fn new() -> Self {
        Self::Idle
    }

    pub fn is_active(&self) -> bool {
        matches!(self, StrokeSession::Active { .. })
    }

    /// The stroke being drawn, if any.
    pub fn current_stroke(&self) -> Option<&BrushStroke> {
        match self {
            StrokeSession::Active { stroke, .. } => Some(stroke),
            StrokeSession::Idle => None,
        }
    }

    /// Where the next spacing measurement starts from.
    pub fn anchor(&self) -> Option<Point> {
        match self {
            StrokeSession::Active { anchor, .. } => Some(*anchor),
            StrokeSession::Idle => None,
        }
    }
}

/// Begin a stroke at `point`, capturing the brush size and mode.
///
/// Returns the rounded start position; the caller stamps it. Starting while a
/// stroke is already active drops the old one. A non-finite `point` is
/// rejected and leaves the session untouched.
pub fn start_stroke(session: &mut StrokeSession, settings: &BrushSettings, point: Point) -> Result<StampPosition> {
    check_point(point)?;
    if let StrokeSession::Active { stroke, .. } = session {
        warn!(points = stroke.points().len(), "stroke started while another was active, discarding it");
    }

    // Size and mode are frozen here for the life of the stroke.
    let stroke = BrushStroke::begin(point, settings.size, settings.mode);
    debug!(x = point.x, y = point.y, size = settings.size, mode = ?settings.mode, "stroke started");
    *session = StrokeSession::Active { stroke, anchor: point };
    Ok(StampPosition::from(point))
}

/// Extend the active stroke to `point` and return the stamps now due.
///
/// Spacing uses the stroke's own size and the current `settings.spacing`.
/// The anchor moves to the last emitted stamp; with no stamp due it stays put,
/// so slow motion keeps accumulating distance from the same anchor.
pub fn continue_stroke(
    session: &mut StrokeSession,
    settings: &BrushSettings,
    point: Point,
) -> Result<Vec<StampPosition>> {
    let StrokeSession::Active { stroke, anchor } = session else {
        return Err(BrushError::InvalidState("continue_stroke called with no active stroke"));
    };
    // a NaN sample would otherwise cast to pixel (0, 0)
    check_point(point)?;

    // Record every raw sample, even ones that emit no stamp.
    stroke.push(point);
    // Measure from the anchor (last real stamp), not from the previous sample.
    let centers = interpolate(*anchor, point, stroke.size(), settings.spacing);
    if let Some(&last) = centers.last() {
        *anchor = last;
    }

    trace!(x = point.x, y = point.y, stamps = centers.len(), "stroke continued");
    Ok(centers.into_iter().map(StampPosition::from).collect())
}

/// Finish the active stroke and hand it over; `None` when idle.
pub fn end_stroke(session: &mut StrokeSession) -> Option<BrushStroke> {
    match std::mem::take(session) {
        StrokeSession::Active { stroke, .. } => {
            debug!(points = stroke.points().len(), "stroke ended");
            Some(stroke)
        }
        StrokeSession::Idle => None,
    }
}

fn check_point(p: Point) -> Result<()> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(())
    } else {
        Err(BrushError::NonFinitePoint { x: p.x, y: p.y })
    }
}
