//! Percentage ring geometry
//!
//! A ring is a circle of radius `R` whose stroke is dashed so that only
//! `P%` of its circumference is drawn:
//!
//! ```text
//! C      = 2πR
//! offset = C × (1 − P/100)
//! ```
//!
//! `P = 0` gives `offset = C` (empty ring), `P = 100` gives `offset = 0`
//! (full ring). Inputs outside `[0, 100]` are clamped, and NaN counts as 0.

use std::f64::consts::{FRAC_PI_2, PI};

/// Ring used for the dashboard challenge cards
pub const CHALLENGE_RING: RingGeometry = RingGeometry::new(24.0);

/// Ring used for the sleep quality score
pub const QUALITY_RING: RingGeometry = RingGeometry::new(30.0);

/// Clamp a display percentage into `[0, 100]`
pub fn clamp_percentage(percentage: f64) -> f64 {
    if percentage.is_nan() {
        0.0
    } else {
        percentage.clamp(0.0, 100.0)
    }
}

/// Fixed-radius ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    radius: f64,
}

impl RingGeometry {
    pub const fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Length of the undrawn part of the stroke
    pub fn dash_offset(&self, percentage: f64) -> f64 {
        let c = self.circumference();
        c * (1.0 - clamp_percentage(percentage) / 100.0)
    }

    /// Length of the drawn part of the stroke
    pub fn filled_length(&self, percentage: f64) -> f64 {
        self.circumference() - self.dash_offset(percentage)
    }

    /// Angle swept by the drawn stroke, in radians
    pub fn sweep(&self, percentage: f64) -> f64 {
        if self.radius == 0.0 {
            return 0.0;
        }
        self.filled_length(percentage) / self.radius
    }

    /// Points along the drawn arc, starting at 12 o'clock and running
    /// clockwise, in a unit-less plane centred on the origin
    ///
    /// `steps` is the number of points for a full circle; a partial arc gets
    /// a proportional share (at least one point when anything is drawn).
    pub fn arc_points(&self, percentage: f64, steps: usize) -> Vec<(f64, f64)> {
        let sweep = self.sweep(percentage);
        if sweep <= 0.0 || steps == 0 {
            return Vec::new();
        }

        let count = ((sweep / (2.0 * PI)) * steps as f64).ceil().max(1.0) as usize;
        (0..=count)
            .map(|i| {
                let angle = FRAC_PI_2 - sweep * (i as f64 / count as f64);
                (self.radius * angle.cos(), self.radius * angle.sin())
            })
            .collect()
    }

    /// Points for the full background track
    pub fn track_points(&self, steps: usize) -> Vec<(f64, f64)> {
        self.arc_points(100.0, steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_circumference() {
        assert!(approx(CHALLENGE_RING.circumference(), 48.0 * PI));
        assert!(approx(QUALITY_RING.circumference(), 60.0 * PI));
    }

    #[test]
    fn test_zero_percent_is_full_offset() {
        let ring = CHALLENGE_RING;
        assert!(approx(ring.dash_offset(0.0), ring.circumference()));
    }

    #[test]
    fn test_hundred_percent_is_zero_offset() {
        assert!(approx(CHALLENGE_RING.dash_offset(100.0), 0.0));
    }

    #[test]
    fn test_offset_formula_across_range() {
        let ring = QUALITY_RING;
        let c = ring.circumference();
        for p in 0..=100 {
            let p = p as f64;
            assert!(approx(ring.dash_offset(p), c * (1.0 - p / 100.0)), "p={p}");
            assert!(approx(ring.dash_offset(p) + ring.filled_length(p), c));
        }
    }

    #[test]
    fn test_fractional_percentage() {
        let ring = RingGeometry::new(10.0);
        let c = ring.circumference();
        assert!(approx(ring.dash_offset(12.5), c * 0.875));
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let ring = CHALLENGE_RING;
        assert!(approx(ring.dash_offset(-20.0), ring.circumference()));
        assert!(approx(ring.dash_offset(150.0), 0.0));
        assert!(approx(ring.dash_offset(f64::NAN), ring.circumference()));
        assert!(approx(ring.dash_offset(f64::INFINITY), 0.0));
    }

    #[test]
    fn test_sweep_matches_percentage() {
        assert!(approx(CHALLENGE_RING.sweep(50.0), PI));
        assert!(approx(CHALLENGE_RING.sweep(100.0), 2.0 * PI));
        assert!(approx(RingGeometry::new(0.0).sweep(50.0), 0.0));
    }

    #[test]
    fn test_arc_points_start_at_top_and_run_clockwise() {
        let ring = RingGeometry::new(1.0);
        let points = ring.arc_points(25.0, 40);
        let (x0, y0) = points[0];
        assert!(approx(x0, 0.0) && approx(y0, 1.0));
        let (x1, y1) = *points.last().unwrap();
        // Quarter turn clockwise from 12 o'clock lands on 3 o'clock
        assert!((x1 - 1.0).abs() < 1e-6 && y1.abs() < 1e-6);
    }

    #[test]
    fn test_arc_points_empty_for_zero() {
        assert!(CHALLENGE_RING.arc_points(0.0, 40).is_empty());
        assert!(CHALLENGE_RING.arc_points(50.0, 0).is_empty());
    }

    #[test]
    fn test_arc_point_count_is_proportional() {
        let ring = RingGeometry::new(1.0);
        assert_eq!(ring.arc_points(50.0, 40).len(), 21);
        assert_eq!(ring.track_points(40).len(), 41);
    }
}
