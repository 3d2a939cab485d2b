pub mod bbox;
pub mod polygon;
pub mod rect;

pub use bbox::BBox;
pub use polygon::Polygon;
pub use rect::Rect;

pub type Point = nalgebra::Vector2<f64>;
