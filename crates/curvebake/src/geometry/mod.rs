//! Planar geometry primitives shared by the document model and the spline.

mod point;
mod ring;

pub use point::{Point, from_fit_space, to_fit_space};
pub use ring::{WindingOrder, distinct_count, signed_area, winding};
