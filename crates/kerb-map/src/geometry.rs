//! Simulation-space centerline geometry.
//!
//! A [`Centerline`] is the converted polyline of one lane with
//! precomputed arc length, supporting the longitudinal/lateral queries
//! that sensor simulation and vehicle placement run against.

use kerb_core::SimPoint;

/// Converted centerline of a lane with arc-length parametrization.
///
/// Degenerate centerlines (fewer than two points) are tolerated: they
/// have zero length, report the single point (or the origin) for every
/// longitudinal query, and a heading of `0.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Centerline {
    points: Vec<SimPoint>,
    /// `cumulative[i]` is the arc length from the start to `points[i]`.
    cumulative: Vec<f64>,
    length: f64,
}

impl Centerline {
    /// Build a centerline from converted points, precomputing arc length.
    pub fn new(points: Vec<SimPoint>) -> Self {
        let mut cumulative = Vec::with_capacity(points.len());
        let mut total = 0.0;
        for i in 0..points.len() {
            if i > 0 {
                total += planar_distance(points[i - 1], points[i]);
            }
            cumulative.push(total);
        }
        Self {
            points,
            cumulative,
            length: total,
        }
    }

    /// The converted points, in input order.
    pub fn points(&self) -> &[SimPoint] {
        &self.points
    }

    /// Total arc length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of line segments (one less than the point count, or zero).
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Point at the given longitudinal offset, shifted `lateral` units
    /// along the segment's left normal.
    ///
    /// `longitudinal` is clamped to `[0, length]`.
    pub fn position(&self, longitudinal: f64, lateral: f64) -> SimPoint {
        let Some((seg, offset)) = self.segment_at(longitudinal) else {
            return self.points.first().copied().unwrap_or([0.0, 0.0]);
        };
        let [ax, ay] = self.points[seg];
        let [bx, by] = self.points[seg + 1];
        let seg_len = self.cumulative[seg + 1] - self.cumulative[seg];
        let (dx, dy) = if seg_len > 0.0 {
            ((bx - ax) / seg_len, (by - ay) / seg_len)
        } else {
            (0.0, 0.0)
        };
        // Left normal of the direction vector.
        let (nx, ny) = (-dy, dx);
        [
            ax + dx * offset + nx * lateral,
            ay + dy * offset + ny * lateral,
        ]
    }

    /// Heading (radians, `atan2` convention) of the segment containing
    /// the given longitudinal offset.
    pub fn heading_at(&self, longitudinal: f64) -> f64 {
        let Some((seg, _)) = self.segment_at(longitudinal) else {
            return 0.0;
        };
        let [ax, ay] = self.points[seg];
        let [bx, by] = self.points[seg + 1];
        (by - ay).atan2(bx - ax)
    }

    /// Locate the segment containing the clamped longitudinal offset.
    ///
    /// Returns the segment index and the offset within that segment, or
    /// `None` for degenerate centerlines.
    fn segment_at(&self, longitudinal: f64) -> Option<(usize, f64)> {
        if self.points.len() < 2 {
            return None;
        }
        let s = longitudinal.clamp(0.0, self.length);
        // Last segment whose start lies at or before s.
        let seg = self
            .cumulative
            .partition_point(|&c| c <= s)
            .saturating_sub(1)
            .min(self.points.len() - 2);
        Some((seg, s - self.cumulative[seg]))
    }
}

/// Euclidean distance between two planar points.
pub(crate) fn planar_distance(a: SimPoint, b: SimPoint) -> f64 {
    (a[0] - b[0]).hypot(a[1] - b[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn l_shape() -> Centerline {
        Centerline::new(vec![[0.0, 0.0], [10.0, 0.0], [10.0, 5.0]])
    }

    #[test]
    fn length_sums_segments() {
        assert_eq!(l_shape().length(), 15.0);
        assert_eq!(l_shape().segment_count(), 2);
    }

    #[test]
    fn position_endpoints() {
        let line = l_shape();
        assert_eq!(line.position(0.0, 0.0), [0.0, 0.0]);
        assert_eq!(line.position(15.0, 0.0), [10.0, 5.0]);
    }

    #[test]
    fn position_clamps_out_of_range() {
        let line = l_shape();
        assert_eq!(line.position(-3.0, 0.0), [0.0, 0.0]);
        assert_eq!(line.position(100.0, 0.0), [10.0, 5.0]);
    }

    #[test]
    fn lateral_offset_is_perpendicular() {
        let line = l_shape();
        // First segment points along +x; its left normal is +y.
        assert_eq!(line.position(5.0, 2.0), [5.0, 2.0]);
        assert_eq!(line.position(5.0, -2.0), [5.0, -2.0]);
    }

    #[test]
    fn heading_follows_segments() {
        let line = l_shape();
        assert_eq!(line.heading_at(5.0), 0.0);
        assert!((line.heading_at(12.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn empty_centerline_is_degenerate() {
        let line = Centerline::new(vec![]);
        assert_eq!(line.length(), 0.0);
        assert_eq!(line.position(1.0, 1.0), [0.0, 0.0]);
        assert_eq!(line.heading_at(0.0), 0.0);
    }

    #[test]
    fn single_point_centerline_reports_the_point() {
        let line = Centerline::new(vec![[3.0, 4.0]]);
        assert_eq!(line.length(), 0.0);
        assert_eq!(line.position(7.0, 0.0), [3.0, 4.0]);
    }

    proptest! {
        #[test]
        fn on_line_positions_stay_within_hull_length(
            pts in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 2..16),
            frac in 0.0f64..1.0,
        ) {
            let points: Vec<[f64; 2]> = pts.iter().map(|&(x, y)| [x, y]).collect();
            let line = Centerline::new(points.clone());
            let s = line.length() * frac;
            let p = line.position(s, 0.0);
            // Distance from start along the polyline can never exceed
            // the straight-line hull of the input points by more than
            // the total arc length.
            let d0 = planar_distance(points[0], p);
            prop_assert!(d0 <= line.length() + 1e-9);
        }

        #[test]
        fn cumulative_length_is_monotonic(
            pts in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 0..16),
        ) {
            let points: Vec<[f64; 2]> = pts.iter().map(|&(x, y)| [x, y]).collect();
            let line = Centerline::new(points);
            let mut prev = 0.0;
            for i in 0..line.points().len() {
                let here = line.cumulative[i];
                prop_assert!(here >= prev);
                prev = here;
            }
            prop_assert_eq!(prev, line.length());
        }
    }
}
