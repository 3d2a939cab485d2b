//! Tagged shape values and the operations dispatching on them
//!
//! A [`Shape`] is what the embedding annotation system passes around: one of
//! the closed set of geometries plus an optional measurement unit tag. All
//! operations are pure, they never touch their input and hand back fresh
//! values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{polygon, BBox, Point, Polygon, Rect};

/// Measurement space of a shape's coordinates
///
/// Metadata for the embedding application only, none of the geometric
/// operations consult it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Pixel,
    Fraction,
}

/// The closed set of geometries a [`Shape`] can carry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Geometry {
    Point(Point),
    Rect(Rect),
    Polygon(Polygon),
}

/// Error produced by the validating constructors
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("a polygon needs at least 3 vertices, got {len}")]
    DegeneratePolygon { len: usize },
}

/// A shape annotating a region on an image
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    geometry: Geometry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    units: Option<Units>,
}

impl Shape {
    pub fn new(geometry: Geometry) -> Shape {
        Shape {
            geometry,
            units: None,
        }
    }

    pub fn point(x: f64, y: f64) -> Shape {
        Shape::new(Geometry::Point(Point::new(x, y)))
    }

    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Shape {
        Shape::new(Geometry::Rect(Rect::new(x, y, width, height)))
    }

    pub fn polygon(points: impl Into<Polygon>) -> Shape {
        Shape::new(Geometry::Polygon(points.into()))
    }

    /// Construct a polygon shape, rejecting rings no containment or area
    /// could ever be computed for
    ///
    /// Use [`polygon`] to skip the check and get fallback values instead.
    ///
    /// [`polygon`]: Shape::polygon
    pub fn try_polygon(points: Vec<Point>) -> Result<Shape, GeometryError> {
        if points.len() < 3 {
            return Err(GeometryError::DegeneratePolygon { len: points.len() });
        }
        Ok(Shape::polygon(points))
    }

    /// Tag the shape with the measurement space its coordinates live in
    pub fn with_units(mut self, units: Units) -> Shape {
        self.units = Some(units);
        self
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn units(&self) -> Option<Units> {
        self.units
    }

    /// Check whether the point `(px, py)` hits the shape
    ///
    /// Rectangle edges are inclusive, polygons use even-odd ray casting. A
    /// point shape has no interior to hit and always comes out `false`.
    pub fn intersects(&self, px: f64, py: f64) -> bool {
        match &self.geometry {
            Geometry::Point(_) => false,
            Geometry::Rect(rect) => rect.contains(px, py),
            Geometry::Polygon(polygon) => polygon::contains(polygon.points(), px, py),
        }
    }

    /// The shape's enclosed area
    ///
    /// Polygons report their unsigned shoelace area regardless of winding.
    /// A point has size zero.
    pub fn size(&self) -> f64 {
        match &self.geometry {
            Geometry::Point(_) => 0.0,
            Geometry::Rect(rect) => rect.area(),
            Geometry::Polygon(polygon) => polygon::signed_area(polygon.points()).abs(),
        }
    }

    /// The axis aligned rectangle enclosing the shape
    ///
    /// A rectangle is its own bounding rect and is returned untouched.
    /// Points and empty polygons have no bounding rect.
    pub fn bounding_rect(&self) -> Option<Rect> {
        match &self.geometry {
            Geometry::Point(_) => None,
            Geometry::Rect(rect) => Some(*rect),
            Geometry::Polygon(polygon) => {
                let bbox: BBox = polygon.points().iter().copied().collect();
                if bbox.is_empty() {
                    None
                } else {
                    Some(bbox.to_rect())
                }
            }
        }
    }

    /// The shape's centroid, if it has one
    pub fn centroid(&self) -> Option<Point> {
        match &self.geometry {
            Geometry::Point(_) => None,
            Geometry::Rect(rect) => Some(rect.center()),
            Geometry::Polygon(polygon) => Some(polygon::centroid(polygon.points())),
        }
    }

    /// Naively grow (or shrink) the shape by `delta`
    ///
    /// Only implemented for polygons, see [`polygon::expand`] for the
    /// limitations of the heuristic. The result carries no units tag.
    pub fn expand(&self, delta: f64) -> Option<Shape> {
        match &self.geometry {
            Geometry::Point(_) | Geometry::Rect(_) => None,
            Geometry::Polygon(polygon) => {
                Some(Shape::polygon(polygon::expand(polygon.points(), delta)))
            }
        }
    }

    /// Map the shape into another coordinate system
    ///
    /// The caller supplied function is applied to every independent
    /// coordinate pair in a fixed order: a rectangle's anchor and then its
    /// extent, a polygon's vertices in storage order. The result lives in
    /// the destination space and therefore carries no units tag. Point
    /// shapes are not handled.
    pub fn transform(&self, transformation: impl Fn(Point) -> Point) -> Option<Shape> {
        match &self.geometry {
            Geometry::Point(_) => None,
            Geometry::Rect(rect) => {
                let anchor = transformation(Point::new(rect.x, rect.y));
                let extent = transformation(Point::new(rect.width, rect.height));
                Some(Shape::rect(anchor.x, anchor.y, extent.x, extent.y))
            }
            Geometry::Polygon(polygon) => {
                let points: Vec<Point> = polygon
                    .points()
                    .iter()
                    .map(|&point| transformation(point))
                    .collect();
                Some(Shape::polygon(points))
            }
        }
    }

    /// A canonical string identity of the geometry
    ///
    /// Two shapes hash identically exactly if they carry the same geometry
    /// variant with the same coordinates in the same order. The units tag
    /// does not participate. This is a hashtable key, not a cryptographic
    /// hash, and only stable within a single process and version.
    pub fn hash_code(&self) -> String {
        match &self.geometry {
            Geometry::Point(point) => serde_json::to_string(point),
            Geometry::Rect(rect) => serde_json::to_string(rect),
            Geometry::Polygon(polygon) => serde_json::to_string(polygon),
        }
        .expect("Plain geometry values can't fail to serialize")
    }
}
