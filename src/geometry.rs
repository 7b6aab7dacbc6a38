//! Polyline geometry for the climb trail: cumulative segment metrics and
//! progress-to-point interpolation in the 300x400 logical space.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Cumulative distance from the start of the polyline to this segment.
    pub start: f64,
    pub length: f64,
    pub a: Point,
    pub b: Point,
}

/// Precomputed metrics for a fixed waypoint polyline. Segments partition
/// `[0, total_length]` contiguously.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMetrics {
    pub total_length: f64,
    pub segments: Vec<Segment>,
    first: Point,
    last: Point,
}

impl PathMetrics {
    pub fn new(points: &[Point]) -> Self {
        let mut total = 0.0;
        let mut segments = Vec::with_capacity(points.len().saturating_sub(1));
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let length = ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt();
            segments.push(Segment {
                start: total,
                length,
                a,
                b,
            });
            total += length;
        }
        Self {
            total_length: total,
            segments,
            first: points[0],
            last: points[points.len() - 1],
        }
    }

    /// Interpolated point for a progress percentage in [0, 100].
    ///
    /// At or beyond the ends the exact first/last waypoint is returned, so
    /// accumulated float error never leaves the climber short of the summit.
    pub fn point_at_progress(&self, progress: f64) -> Point {
        let distance = (progress / 100.0) * self.total_length;
        if distance <= 0.0 || self.segments.is_empty() {
            return self.first;
        }
        if distance >= self.total_length {
            return self.last;
        }
        let segment = self
            .segments
            .iter()
            .find(|s| distance >= s.start && distance <= s.start + s.length)
            .or_else(|| self.segments.last())
            .copied()
            .unwrap_or(Segment {
                start: 0.0,
                length: 0.0,
                a: self.first,
                b: self.first,
            });
        if segment.length <= f64::EPSILON {
            return segment.a;
        }
        let t = (distance - segment.start) / segment.length;
        Point {
            x: segment.a.x + (segment.b.x - segment.a.x) * t,
            y: segment.a.y + (segment.b.y - segment.a.y) * t,
        }
    }
}

/// SVG path `d` attribute for a polyline ("M x y L x y ...").
pub fn svg_path_d(points: &[Point]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        let op = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            d.push(' ');
        }
        d.push(op);
        d.push_str(&format!(" {} {}", p.x, p.y));
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Point> {
        vec![
            Point { x: 20.0, y: 380.0 },
            Point { x: 80.0, y: 250.0 },
            Point { x: 120.0, y: 290.0 },
            Point { x: 180.0, y: 120.0 },
            Point { x: 220.0, y: 160.0 },
            Point { x: 280.0, y: 20.0 },
        ]
    }

    #[test]
    fn segments_partition_total_length() {
        let metrics = PathMetrics::new(&sample_points());
        let mut cursor = 0.0;
        for s in &metrics.segments {
            assert!((s.start - cursor).abs() < 1e-9);
            cursor += s.length;
        }
        assert!((cursor - metrics.total_length).abs() < 1e-9);
    }

    #[test]
    fn endpoints_are_exact() {
        let points = sample_points();
        let metrics = PathMetrics::new(&points);
        assert_eq!(metrics.point_at_progress(0.0), points[0]);
        assert_eq!(metrics.point_at_progress(100.0), points[5]);
        // Out-of-range progress clamps to the ends rather than extrapolating.
        assert_eq!(metrics.point_at_progress(-5.0), points[0]);
        assert_eq!(metrics.point_at_progress(140.0), points[5]);
    }

    #[test]
    fn interpolation_is_continuous_along_the_polyline() {
        let metrics = PathMetrics::new(&sample_points());
        let mut prev = metrics.point_at_progress(0.0);
        for step in 1..=1000 {
            let p = metrics.point_at_progress(step as f64 / 10.0);
            let hop = ((p.x - prev.x).powi(2) + (p.y - prev.y).powi(2)).sqrt();
            // Each 0.1% step moves at most 0.1% of the total length (plus
            // rounding slack), so there are no jumps.
            assert!(hop <= metrics.total_length / 1000.0 + 1e-6);
            prev = p;
        }
    }

    #[test]
    fn segment_boundaries_land_on_waypoints() {
        let points = sample_points();
        let metrics = PathMetrics::new(&points);
        for (i, s) in metrics.segments.iter().enumerate() {
            let progress = s.start / metrics.total_length * 100.0;
            let p = metrics.point_at_progress(progress);
            assert!((p.x - points[i].x).abs() < 1e-9);
            assert!((p.y - points[i].y).abs() < 1e-9);
        }
    }

    #[test]
    fn midpoint_of_a_single_segment() {
        let metrics = PathMetrics::new(&[
            Point { x: 0.0, y: 0.0 },
            Point { x: 10.0, y: 0.0 },
        ]);
        let p = metrics.point_at_progress(50.0);
        assert!((p.x - 5.0).abs() < 1e-9);
        assert!((p.y - 0.0).abs() < 1e-9);
    }

    #[test]
    fn zero_length_segment_does_not_produce_nan() {
        let metrics = PathMetrics::new(&[
            Point { x: 0.0, y: 0.0 },
            Point { x: 0.0, y: 0.0 },
            Point { x: 4.0, y: 0.0 },
        ]);
        let p = metrics.point_at_progress(50.0);
        assert!(p.x.is_finite() && p.y.is_finite());
    }

    #[test]
    fn path_d_renders_move_then_lines() {
        let d = svg_path_d(&[
            Point { x: 20.0, y: 380.0 },
            Point { x: 80.0, y: 250.0 },
        ]);
        assert_eq!(d, "M 20 380 L 80 250");
    }
}
