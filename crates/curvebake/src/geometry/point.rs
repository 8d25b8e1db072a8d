//! Planar points and the axis swap between render space and fit space.
//!
//! Region documents store positions in render order (`[row, col]`, which is
//! `[lat, lng]` on a simple-CRS image map). The spline works in fit order
//! (`[x, y]` = `[col, row]`). Moving between the two is a pure reorder of the
//! two coordinates, so the round trip is exact.

use std::fmt::{Display, Formatter, Result as FmtResult};

use geo::{Coord, LineString};
use serde::{Deserialize, Serialize};

/// A pair of coordinates. `x` is the first stored coordinate, `y` the second.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// The same point with its two coordinates exchanged.
    pub fn swapped(self) -> Self {
        Point {
            x: self.y,
            y: self.x,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

impl From<Point> for Coord<f64> {
    fn from(p: Point) -> Self {
        Coord { x: p.x, y: p.y }
    }
}

impl From<Coord<f64>> for Point {
    fn from(c: Coord<f64>) -> Self {
        Point::new(c.x, c.y)
    }
}

/// Reorder render-space points into the axis order the spline expects.
pub fn to_fit_space(points: &[Point]) -> LineString<f64> {
    points.iter().map(|p| p.swapped()).collect()
}

/// Reorder fitted coordinates back into render-space axis order.
pub fn from_fit_space(ring: &LineString<f64>) -> Vec<Point> {
    ring.coords().map(|c| Point::from(*c).swapped()).collect()
}
