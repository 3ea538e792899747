// Cursor preview geometry. Rendering is up to the caller; this only says
// where the next stamp would land and how big it is.

use crate::stamp::stamp_radius;
use crate::types::{BrushMode, BrushSettings, Point, StampPosition};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushPreview {
    /// Pixel-snapped stamp center.
    pub center: Point,
    pub radius: f64,
    pub mode: BrushMode,
}

/// Describe the stamp the current settings would make at `point`.
pub fn brush_preview(settings: &BrushSettings, point: Point) -> BrushPreview {
    BrushPreview {
        center: point.rounded(),
        radius: stamp_radius(settings.size) as f64,
        mode: settings.mode,
    }
}

impl BrushPreview {
    /// Edge pixels of the stamp: inside the circle with at least one
    /// 4-neighbour outside it. Not clipped to any image; pixels that would
    /// not fit in `i32` coordinates are dropped.
    pub fn outline(&self) -> Vec<StampPosition> {
        let c = StampPosition::from(self.center);
        let (cx, cy) = (c.x as i64, c.y as i64);
        let r = self.radius as i64;
        let r2 = r * r;

        // Walk rows instead of the whole square: a pixel is on the edge when
        // it is the last one in its row, or its row neighbour above/below
        // is shorter than it.
        let mut out = Vec::new();
        for dy in -r..=r {
            let hw = half_width(r2, dy);
            let shorter = half_width(r2, dy - 1).min(half_width(r2, dy + 1));
            for dx in (shorter + 1).min(hw)..=hw {
                push_pixel(&mut out, cx + dx, cy + dy);
                if dx != 0 {
                    push_pixel(&mut out, cx - dx, cy + dy);
                }
            }
        }
        out
    }
}

/// Largest `x` with `x² + dy² <= r2`, or -1 when the row misses the circle.
fn half_width(r2: i64, dy: i64) -> i64 {
    let rem = r2 - dy * dy;
    if rem < 0 {
        return -1;
    }
    // float guess, then nudge to the exact integer root
    let mut x = (rem as f64).sqrt() as i64;
    while x * x > rem {
        x -= 1;
    }
    while (x + 1) * (x + 1) <= rem {
        x += 1;
    }
    x
}

fn push_pixel(out: &mut Vec<StampPosition>, x: i64, y: i64) {
    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
        out.push(StampPosition::new(x, y));
    }
}
