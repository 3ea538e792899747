// Circular binary stamps and whole-path application.
// Stamp edges are decided by integer distance only, so the same center,
// diameter and mode always touch exactly the same pixels.

use tracing::trace;

use crate::mask::MaskBuffer;
use crate::spacing::interpolate;
use crate::types::{BrushMode, BrushStroke, Point, StampPosition};

/// Stamp radius in whole pixels for a given diameter.
#[inline]
pub fn stamp_radius(diameter: f64) -> i32 {
    if diameter.is_finite() && diameter > 0.0 {
        (diameter / 2.0).floor() as i32
    } else {
        0
    }
}

/// Write one filled circle into the mask at `center`.
///
/// A pixel at offset (dx, dy) is inside iff `dx² + dy² <= radius²`.
/// Pixels outside the mask are skipped. Returns true if any byte changed.
pub fn stamp(mask: &mut MaskBuffer<'_>, center: Point, diameter: f64, mode: BrushMode) -> bool {
    let c = StampPosition::from(center);
    let r = stamp_radius(diameter) as i64;
    let r2 = r * r;
    let target = mode.target_value();
    let mut changed = false;

    // Clip the bounding square to the mask up front, so a huge brush or a
    // far-off center only costs the pixels that can actually change.
    let (cx, cy) = (c.x as i64, c.y as i64);
    let (w, h) = (mask.width() as i64, mask.height() as i64);
    let (dy_min, dy_max) = ((-r).max(-cy), r.min(h - 1 - cy));
    let (dx_min, dx_max) = ((-r).max(-cx), r.min(w - 1 - cx));

    for dy in dy_min..=dy_max {
        let row = ((cy + dy) * w) as usize;
        for dx in dx_min..=dx_max {
            // exact integer circle test, no float edge
            if dx * dx + dy * dy > r2 {
                continue;
            }
            changed |= mask.write(row + (cx + dx) as usize, target);
        }
    }

    trace!(x = c.x, y = c.y, radius = r, ?mode, changed, "stamp");
    changed
}

/// Stamp a recorded path: the first point always, then spaced stamps along
/// each segment measured from the last applied stamp.
pub fn apply_path(
    mask: &mut MaskBuffer<'_>,
    points: &[Point],
    diameter: f64,
    spacing: f64,
    mode: BrushMode,
) -> bool {
    let Some((&first, rest)) = points.split_first() else {
        return false;
    };

    let mut anchor = first.rounded();
    let mut changed = stamp(mask, anchor, diameter, mode);

    for &p in rest {
        for s in interpolate(anchor, p, diameter, spacing) {
            changed |= stamp(mask, s, diameter, mode);
            anchor = s;
        }
    }
    changed
}

/// Replay a captured stroke with the brush size and mode it was drawn with.
pub fn apply_stroke(mask: &mut MaskBuffer<'_>, stroke: &BrushStroke, spacing: f64) -> bool {
    apply_path(mask, stroke.points(), stroke.size(), spacing, stroke.mode())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::validate;

    fn blank(w: usize, h: usize) -> Vec<u8> {
        vec![0u8; w * h]
    }

    #[test]
    fn repeated_stamp_is_idempotent() {
        let mut data = blank(40, 40);
        let mut mask = MaskBuffer::new(&mut data, 40, 40).unwrap();
        let c = Point::new(20.0, 20.0);
        assert!(stamp(&mut mask, c, 10.0, BrushMode::Paint));
        assert!(!stamp(&mut mask, c, 10.0, BrushMode::Paint));
        assert!(stamp(&mut mask, c, 10.0, BrushMode::Erase));
        assert!(!stamp(&mut mask, c, 10.0, BrushMode::Erase));
        assert!(mask.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn circle_membership_is_exact() {
        // diameter 10 -> radius 5; (3,4) sits at exactly r², (4,4) is outside
        let mut data = blank(21, 21);
        let mut mask = MaskBuffer::new(&mut data, 21, 21).unwrap();
        stamp(&mut mask, Point::new(10.0, 10.0), 10.0, BrushMode::Paint);

        assert_eq!(mask.get(10 + 3, 10 + 4), Some(255));
        assert_eq!(mask.get(10 + 5, 10), Some(255));
        assert_eq!(mask.get(10, 10 - 5), Some(255));
        assert_eq!(mask.get(10 + 4, 10 + 4), Some(0));
        assert_eq!(mask.get(10 + 6, 10), Some(0));

        let painted = mask.as_slice().iter().filter(|&&v| v == 255).count();
        let expected = (-5i32..=5)
            .flat_map(|dy| (-5i32..=5).map(move |dx| dx * dx + dy * dy))
            .filter(|&d2| d2 <= 25)
            .count();
        assert_eq!(painted, expected);
    }

    #[test]
    fn radius_squared_plus_one_is_excluded() {
        // radius 1: r² = 1, corner offsets have d² = 2
        let mut data = blank(5, 5);
        let mut mask = MaskBuffer::new(&mut data, 5, 5).unwrap();
        stamp(&mut mask, Point::new(2.0, 2.0), 3.0, BrushMode::Paint);
        assert_eq!(mask.get(3, 2), Some(255));
        assert_eq!(mask.get(3, 3), Some(0));
        assert_eq!(mask.as_slice().iter().filter(|&&v| v == 255).count(), 5);
    }

    #[test]
    fn center_is_rounded_before_rasterizing() {
        let mut a = blank(20, 20);
        let mut b = blank(20, 20);
        stamp(&mut MaskBuffer::new(&mut a, 20, 20).unwrap(), Point::new(9.6, 10.4), 6.0, BrushMode::Paint);
        stamp(&mut MaskBuffer::new(&mut b, 20, 20).unwrap(), Point::new(10.0, 10.0), 6.0, BrushMode::Paint);
        assert_eq!(a, b);
    }

    #[test]
    fn off_image_pixels_are_clipped() {
        let mut data = blank(10, 10);
        let mut mask = MaskBuffer::new(&mut data, 10, 10).unwrap();
        assert!(stamp(&mut mask, Point::new(0.0, 0.0), 8.0, BrushMode::Paint));
        assert_eq!(mask.get(0, 0), Some(255));
        assert_eq!(mask.get(4, 0), Some(255));
        assert_eq!(mask.get(5, 0), Some(0));
        // completely outside: nothing to do
        assert!(!stamp(&mut mask, Point::new(-50.0, -50.0), 8.0, BrushMode::Paint));
        assert!(validate(mask.as_slice()));
    }

    #[test]
    fn huge_brush_only_walks_the_mask() {
        // radius 20000 over a 10x10 mask: clipped loop touches 100 pixels
        let mut data = blank(10, 10);
        let mut mask = MaskBuffer::new(&mut data, 10, 10).unwrap();
        assert!(stamp(&mut mask, Point::new(5.0, 5.0), 40_000.0, BrushMode::Paint));
        assert!(mask.as_slice().iter().all(|&v| v == 255));

        // far outside: the clipped range is empty, nothing is walked
        assert!(!stamp(&mut mask, Point::new(1.0e12, -1.0e12), 40_000.0, BrushMode::Erase));
        assert!(mask.as_slice().iter().all(|&v| v == 255));
    }

    #[test]
    fn empty_mask_is_never_written() {
        let mut data: Vec<u8> = Vec::new();
        let mut mask = MaskBuffer::new(&mut data, 0, 0).unwrap();
        assert!(!stamp(&mut mask, Point::new(0.0, 0.0), 8.0, BrushMode::Paint));
    }

    #[test]
    fn tiny_diameter_paints_single_pixel() {
        let mut data = blank(3, 3);
        let mut mask = MaskBuffer::new(&mut data, 3, 3).unwrap();
        stamp(&mut mask, Point::new(1.0, 1.0), 1.0, BrushMode::Paint);
        assert_eq!(mask.as_slice(), &[0, 0, 0, 0, 255, 0, 0, 0, 0]);
    }

    #[test]
    fn path_stamps_first_point_and_spaced_centers() {
        let mut data = blank(30, 5);
        let mut mask = MaskBuffer::new(&mut data, 30, 5).unwrap();
        let pts = [Point::new(0.0, 2.0), Point::new(20.0, 2.0)];
        // radius 1, spacing 7 -> stamps at x = 0, 7, 14
        assert!(apply_path(&mut mask, &pts, 2.0, 3.5, BrushMode::Paint));
        let row: Vec<i32> = (0..30).filter(|&x| mask.get(x, 2) == Some(255)).collect();
        assert_eq!(row, vec![0, 1, 6, 7, 8, 13, 14, 15]);
    }

    #[test]
    fn empty_path_changes_nothing() {
        let mut data = blank(4, 4);
        let mut mask = MaskBuffer::new(&mut data, 4, 4).unwrap();
        assert!(!apply_path(&mut mask, &[], 4.0, 0.5, BrushMode::Paint));
    }

    #[test]
    fn path_anchor_carries_across_short_segments() {
        // Each sample moves 4px with 7px spacing; the anchor stays put until
        // the accumulated distance from it reaches one spacing step.
        let mut data = blank(40, 3);
        let mut mask = MaskBuffer::new(&mut data, 40, 3).unwrap();
        let pts: Vec<Point> = (0..6).map(|i| Point::new(i as f64 * 4.0, 1.0)).collect();
        apply_path(&mut mask, &pts, 1.0, 7.0, BrushMode::Paint);
        let row: Vec<i32> = (0..40).filter(|&x| mask.get(x, 1) == Some(255)).collect();
        assert_eq!(row, vec![0, 7, 14]);
    }

    #[test]
    fn stroke_replay_uses_captured_brush() {
        let stroke = BrushStroke::from_points(vec![Point::new(5.0, 5.0)], 4.0, BrushMode::Erase);
        let mut data = vec![255u8; 100];
        let mut mask = MaskBuffer::new(&mut data, 10, 10).unwrap();
        assert!(apply_stroke(&mut mask, &stroke, 0.35));
        assert_eq!(mask.get(5, 5), Some(0));
        assert_eq!(mask.get(5, 8), Some(255));
    }
}
