//! Closed cubic spline through a polygon's vertices.
//!
//! Every edge of the ring becomes one cubic Bézier segment. Its control
//! points are a blend of two uniform cubic splines over the same vertices:
//!
//! - Catmull-Rom, which interpolates the vertices, weighted by `sharpness`;
//! - the uniform cubic B-spline, which only approximates them and rounds
//!   corners off, weighted by `1 - sharpness`.
//!
//! Both splines are C1 with the same parameterisation, so any blend of their
//! control points is a C1 closed curve as well. At `sharpness = 1` each
//! segment starts exactly on its vertex.

use geo::{Coord, LineString};

use crate::error::FitError;
use crate::geometry::distinct_count;

/// Cubic Bézier segment given by its four control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub p0: Coord<f64>,
    pub p1: Coord<f64>,
    pub p2: Coord<f64>,
    pub p3: Coord<f64>,
}

impl CubicSegment {
    /// Evaluate the segment at `t` in `[0, 1]`.
    pub fn eval(&self, t: f64) -> Coord<f64> {
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;
        self.p0 * a + self.p1 * b + self.p2 * c + self.p3 * d
    }

    fn blend(self, other: CubicSegment, weight: f64) -> CubicSegment {
        let mix = |a: Coord<f64>, b: Coord<f64>| a * weight + b * (1.0 - weight);
        CubicSegment {
            p0: mix(self.p0, other.p0),
            p1: mix(self.p1, other.p1),
            p2: mix(self.p2, other.p2),
            p3: mix(self.p3, other.p3),
        }
    }
}

/// A closed piecewise-cubic curve, one segment per ring edge.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedSpline {
    segments: Vec<CubicSegment>,
}

impl ClosedSpline {
    /// Fit a spline through a closed ring (first point equal to last).
    ///
    /// Fails if the ring is not closed or has fewer than three distinct
    /// points.
    pub fn through(ring: &LineString<f64>, sharpness: f64) -> Result<Self, FitError> {
        let distinct = distinct_count(ring);
        if distinct < 3 {
            return Err(FitError::Degenerate { distinct });
        }
        if !ring.is_closed() {
            return Err(FitError::MalformedGeometry(
                "ring passed to the spline is not closed".to_string(),
            ));
        }

        let vertices = &ring.0[..ring.0.len() - 1];
        let n = vertices.len();
        let sixth = 1.0 / 6.0;
        let third = 1.0 / 3.0;

        let segments = (0..n)
            .map(|i| {
                let prev = vertices[(i + n - 1) % n];
                let a = vertices[i];
                let b = vertices[(i + 1) % n];
                let next = vertices[(i + 2) % n];

                let catmull_rom = CubicSegment {
                    p0: a,
                    p1: a + (b - prev) * sixth,
                    p2: b - (next - a) * sixth,
                    p3: b,
                };
                let b_spline = CubicSegment {
                    p0: (prev + a * 4.0 + b) * sixth,
                    p1: (a * 2.0 + b) * third,
                    p2: (a + b * 2.0) * third,
                    p3: (a + b * 4.0 + next) * sixth,
                };
                catmull_rom.blend(b_spline, sharpness)
            })
            .collect();

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[CubicSegment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Sample `resolution` evenly spaced parameter values around the curve
    /// and close the result by repeating the first sample.
    ///
    /// Sample `k` sits at global parameter `k * segments / resolution`. The
    /// split into segment index and local `t` uses integer arithmetic, so
    /// whenever `resolution` is a multiple of the segment count the samples
    /// land exactly on segment boundaries.
    pub fn sample(&self, resolution: usize) -> LineString<f64> {
        if resolution == 0 || self.segments.is_empty() {
            return LineString::new(Vec::new());
        }
        let n = self.segments.len() as u128;
        let res = resolution as u128;

        let mut points = Vec::with_capacity(resolution + 1);
        for k in 0..res {
            let scaled = k * n;
            let index = (scaled / res) as usize;
            let t = (scaled % res) as f64 / resolution as f64;
            points.push(self.segments[index].eval(t));
        }
        points.push(points[0]);
        LineString::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn ring(points: &[(f64, f64)]) -> LineString<f64> {
        points.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn square() -> LineString<f64> {
        let mut square = ring(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]);
        square.close();
        square
    }

    fn distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
        Point::from(a).distance(Point::from(b))
    }

    fn max_vertex_distance(vertices: &LineString<f64>, curve: &LineString<f64>) -> f64 {
        vertices
            .coords()
            .map(|v| {
                curve
                    .coords()
                    .map(|c| distance(*v, *c))
                    .fold(f64::INFINITY, f64::min)
            })
            .fold(0.0, f64::max)
    }

    #[test]
    fn test_one_segment_per_edge() {
        let spline = ClosedSpline::through(&square(), 0.85).unwrap();
        assert_eq!(spline.segment_count(), 4);
    }

    #[test]
    fn test_segments_join_continuously() {
        let spline = ClosedSpline::through(&square(), 0.3).unwrap();
        let segs = spline.segments();
        for i in 0..segs.len() {
            let next = segs[(i + 1) % segs.len()];
            assert!(distance(segs[i].p3, next.p0) < 1e-12);
        }
    }

    #[test]
    fn test_sample_is_closed_with_expected_length() {
        let spline = ClosedSpline::through(&square(), 0.85).unwrap();
        let samples = spline.sample(100);
        assert_eq!(samples.0.len(), 101);
        assert!(samples.is_closed());
    }

    #[test]
    fn test_full_sharpness_passes_through_vertices() {
        let ring = square();
        let spline = ClosedSpline::through(&ring, 1.0).unwrap();
        let samples = spline.sample(1000);
        assert_eq!(max_vertex_distance(&ring, &samples), 0.0);
    }

    #[test]
    fn test_zero_sharpness_cuts_corners() {
        let ring = square();
        let samples = ClosedSpline::through(&ring, 0.0).unwrap().sample(1000);
        let expected = (10.0_f64 / 6.0) * 2.0_f64.sqrt();
        assert!((max_vertex_distance(&ring, &samples) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_ring_rejected() {
        let same = ring(&[(1.0, 1.0); 4]);
        assert_eq!(
            ClosedSpline::through(&same, 0.5),
            Err(FitError::Degenerate { distinct: 1 })
        );

        let mut two = ring(&[(0.0, 0.0), (1.0, 0.0)]);
        two.close();
        assert_eq!(
            ClosedSpline::through(&two, 0.5),
            Err(FitError::Degenerate { distinct: 2 })
        );
    }

    #[test]
    fn test_open_ring_rejected() {
        let open = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        assert!(matches!(
            ClosedSpline::through(&open, 0.5),
            Err(FitError::MalformedGeometry(_))
        ));
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let a = ClosedSpline::through(&square(), 0.85).unwrap().sample(777);
        let b = ClosedSpline::through(&square(), 0.85).unwrap().sample(777);
        let bits = |ring: &LineString<f64>| -> Vec<(u64, u64)> {
            ring.coords().map(|c| (c.x.to_bits(), c.y.to_bits())).collect()
        };
        assert_eq!(bits(&a), bits(&b));
    }
}
