// Stamp spacing along a straight segment.
// Stamps land every `diameter * spacing` pixels from `start`; leftover
// distance stays in the unconsumed segment until the caller's next call.

use crate::types::Point;

/// Stamp centers strictly after `start` and up to `end`, rounded to pixels.
///
/// Emits `floor(distance / (diameter * spacing_fraction))` points, or none when
/// the segment is shorter than one spacing step. Rounding happens after the
/// interpolation so error does not compound across short segments.
pub fn interpolate(start: Point, end: Point, diameter: f64, spacing_fraction: f64) -> Vec<Point> {
    let spacing_distance = diameter * spacing_fraction;
    if !spacing_distance.is_finite() || spacing_distance <= 0.0 {
        return Vec::new();
    }

    let distance = start.distance(end);
    if !distance.is_finite() || distance < spacing_distance {
        return Vec::new();
    }

    // Whole spacing steps that fit; the remainder waits for the next sample.
    let count = (distance / spacing_distance).floor() as usize;
    // One step along the segment, as a vector of length `spacing_distance`.
    let step_x = (end.x - start.x) / distance * spacing_distance;
    let step_y = (end.y - start.y) / distance * spacing_distance;

    (1..=count)
        .map(|i| {
            let t = i as f64;
            Point::new(start.x + t * step_x, start.y + t * step_y).rounded()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_motion_emits_nothing() {
        let out = interpolate(Point::new(0.0, 0.0), Point::new(6.9, 0.0), 20.0, 0.35);
        assert!(out.is_empty());
    }

    #[test]
    fn count_is_floor_of_distance_over_spacing() {
        // 3-4-5 triangle scaled: distance 50, spacing 7 -> 7 stamps
        let out = interpolate(Point::new(0.0, 0.0), Point::new(30.0, 40.0), 20.0, 0.35);
        assert_eq!(out.len(), 7);

        let exact = interpolate(Point::new(0.0, 0.0), Point::new(14.0, 0.0), 20.0, 0.35);
        assert_eq!(exact.len(), 2);
    }

    #[test]
    fn horizontal_segment_lands_on_spacing_multiples() {
        let out = interpolate(Point::new(0.0, 0.0), Point::new(20.0, 0.0), 20.0, 0.35);
        assert_eq!(out, vec![Point::new(7.0, 0.0), Point::new(14.0, 0.0)]);
    }

    #[test]
    fn points_are_rounded_after_interpolation() {
        // step along the diagonal is (4.95.., 4.95..)
        let out = interpolate(Point::new(0.2, 0.2), Point::new(20.2, 20.2), 10.0, 0.7);
        assert_eq!(out.len(), 4);
        assert_eq!(out[0], Point::new(5.0, 5.0));
        assert_eq!(out[1], Point::new(10.0, 10.0));
        for p in &out {
            assert_eq!(p.x.fract(), 0.0);
            assert_eq!(p.y.fract(), 0.0);
        }
    }

    #[test]
    fn sweep_count_and_placement() {
        // deterministic LCG over segments, diameters and spacing fractions
        let mut seed: u32 = 0x9E37_79B9;
        let mut next = move || {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (seed >> 8) as f64 / (1u32 << 24) as f64
        };

        for _ in 0..500 {
            let start = Point::new(next() * 200.0 - 100.0, next() * 200.0 - 100.0);
            let end = Point::new(next() * 200.0 - 100.0, next() * 200.0 - 100.0);
            let diameter = 1.0 + next() * 60.0;
            let spacing = 0.05 + next() * 0.95;

            let sd = diameter * spacing;
            let d = start.distance(end);
            let out = interpolate(start, end, diameter, spacing);
            assert_eq!(out.len(), (d / sd).floor() as usize, "d = {d}, sd = {sd}");

            // i-th center is the exact point i * sd along the segment, snapped
            let (ux, uy) = ((end.x - start.x) / d, (end.y - start.y) / d);
            for (i, p) in out.iter().enumerate() {
                let t = (i + 1) as f64 * sd;
                let (ex, ey) = (start.x + ux * t, start.y + uy * t);
                assert!((p.x - ex).abs() <= 0.5 + 1e-9 && (p.y - ey).abs() <= 0.5 + 1e-9);
                assert!(t <= d + 1e-9);
            }
        }
    }

    #[test]
    fn degenerate_spacing_is_empty() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(100.0, 0.0);
        assert!(interpolate(a, b, 0.0, 0.5).is_empty());
        assert!(interpolate(a, b, 10.0, f64::NAN).is_empty());
        assert!(interpolate(a, a, 10.0, 0.5).is_empty());
    }
}
