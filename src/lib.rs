//! Geometry core for annotating regions on images
//!
//! Shapes are points, axis aligned rectangles and simple polygons. The
//! [`geometry`] module holds the raw value types and the polygon math, the
//! [`shape`] module the tagged [`Shape`] the embedding system dispatches on.

pub mod geometry;
pub mod shape;

pub use geometry::{BBox, Point, Polygon, Rect};
pub use shape::{Geometry, GeometryError, Shape, Units};
