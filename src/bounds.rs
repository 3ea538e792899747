// Dirty rectangle of a finished stroke, for partial redraw by the caller.

use crate::types::{BrushStroke, StrokeBounds};

/// Smallest rectangle covering every sample grown by the brush radius,
/// clipped to a `width x height` image.
///
/// `None` for an empty stroke or when nothing of it lands on the image.
pub fn calculate_stroke_bounds(stroke: &BrushStroke, width: u32, height: u32) -> Option<StrokeBounds> {
    let (first, rest) = stroke.points().split_first()?;
    if width == 0 || height == 0 {
        return None;
    }

    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in rest {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    // Grow by the stamp radius, then clip to the last valid pixel on each axis.
    let r = (stroke.size() / 2.0).floor();
    let x0 = ((min_x - r).floor() as i64).max(0);
    let y0 = ((min_y - r).floor() as i64).max(0);
    let x1 = ((max_x + r).ceil() as i64).min(width as i64 - 1);
    let y1 = ((max_y + r).ceil() as i64).min(height as i64 - 1);

    if x0 > x1 || y0 > y1 {
        return None;
    }

    Some(StrokeBounds {
        x: x0 as u32,
        y: y0 as u32,
        width: (x1 - x0 + 1) as u32,
        height: (y1 - y0 + 1) as u32,
    })
}
