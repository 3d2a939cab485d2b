//! A simple polygon and the math over its vertex ring
//!
//! The free functions treat a slice of points as a closed ring: the last
//! vertex connects back to the first and the storage order is the winding
//! order.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// A simple polygon as an ordered vertex ring
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Polygon {
        Polygon { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Polygon {
        Polygon::new(points)
    }
}

/// Compute a polygon's signed area using the shoelace formula
///
/// The sign encodes the winding direction. Rings with fewer than three
/// vertices always sum to exactly zero.
pub fn signed_area(points: &[Point]) -> f64 {
    let mut sum = 0.0;
    for (i, current) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        sum += current.x * next.y - next.x * current.y;
    }
    0.5 * sum
}

/// Compute a polygon's area weighted centroid
///
/// Uses the same winding convention as [`signed_area`]. An empty ring yields
/// the origin. A ring without area (fewer than three vertices or all of them
/// collinear) has no weighted centroid and falls back to the plain vertex
/// average.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::zeros();
    }

    let area = signed_area(points);
    if area == 0.0 {
        log::debug!("Averaging the vertices of a ring without area");
        let mut sum = Point::zeros();
        for &point in points {
            sum += point;
        }
        return sum / points.len() as f64;
    }

    let mut sum = Point::zeros();
    for (i, &current) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        let cross = current.x * next.y - next.x * current.y;
        sum += (current + next) * cross;
    }
    sum / (6.0 * area)
}

/// Shift every vertex away from the ring's centroid by `delta`
///
/// Each vertex moves along its normalized centroid->vertex axis, inwards for
/// a negative `delta`. This is *not* real polygon buffering: it is exact for
/// triangles and a crude approximation for anything with more vertices.
/// There is no self-intersection avoidance. Vertex count and order are
/// preserved; a vertex lying exactly on the centroid has no axis to move
/// along and stays in place.
pub fn expand(points: &[Point], delta: f64) -> Vec<Point> {
    let center = centroid(points);
    points
        .iter()
        .map(|&vertex| {
            let axis = vertex - center;
            let length = axis.norm();
            if length == 0.0 {
                vertex
            } else {
                vertex + axis * (delta / length)
            }
        })
        .collect()
}

/// Even-odd ray casting point-in-polygon test
///
/// Casts a horizontal ray through `(px, py)` and toggles on every crossed
/// edge. Rings with fewer than three vertices cannot enclose anything and
/// come out `false` from the same loop.
pub fn contains(points: &[Point], px: f64, py: f64) -> bool {
    let mut inside = false;
    let mut j = points.len().wrapping_sub(1);
    for (i, current) in points.iter().enumerate() {
        let previous = points[j];
        if (current.y > py) != (previous.y > py)
            && px
                < (previous.x - current.x) * (py - current.y) / (previous.y - current.y)
                    + current.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}
