//! Ring helpers over `geo` line strings: distinctness and orientation.

use std::collections::HashSet;

use geo::{Area, LineString, Polygon};

pub use geo::algorithm::winding_order::WindingOrder;

/// Number of distinct coordinates under exact equality.
pub fn distinct_count(ring: &LineString<f64>) -> usize {
    // Adding 0.0 folds -0.0 into 0.0 so bit patterns agree with `==`.
    ring.coords()
        .map(|c| ((c.x + 0.0).to_bits(), (c.y + 0.0).to_bits()))
        .collect::<HashSet<_>>()
        .len()
}

/// Signed area enclosed by the ring. Positive for counter-clockwise rings in
/// a y-up plane. Open rings are measured as if closed.
pub fn signed_area(ring: &LineString<f64>) -> f64 {
    Polygon::new(ring.clone(), Vec::new()).signed_area()
}

/// Orientation from the sign of the enclosed area, or `None` when the ring
/// encloses no area.
///
/// The whole-ring area decides, not the turn at the extreme vertex, so a
/// sampled curve with a small local loop reports the direction of its body.
pub fn winding(ring: &LineString<f64>) -> Option<WindingOrder> {
    let area = signed_area(ring);
    if area > 0.0 {
        Some(WindingOrder::CounterClockwise)
    } else if area < 0.0 {
        Some(WindingOrder::Clockwise)
    } else {
        None
    }
}
