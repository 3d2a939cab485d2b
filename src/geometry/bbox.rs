use crate::geometry::{Point, Rect};

/// An axis aligned bounding box as a min/max corner pair
#[derive(Copy, Clone, Debug)]
pub struct BBox {
    pub min: Point,
    pub max: Point,
}

impl BBox {
    /// Create an "empty" bounding box which contains no point
    ///
    /// After creating use [`fit`] at least once to get an actual bounding box.
    ///
    /// [`fit`]: BBox::fit
    #[inline]
    pub fn new() -> BBox {
        BBox {
            min: Point::new(f64::INFINITY, f64::INFINITY),
            max: Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Check if a point is contained inside the bounding box
    ///
    /// If the point lies exactly on the edge it is said to be contained.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.min.x <= point.x
            && self.min.y <= point.y
            && point.x <= self.max.x
            && point.y <= self.max.y
    }

    /// Adjust the bounding box's size to fit a given point
    #[inline]
    pub fn fit(&mut self, point: Point) {
        use std::cmp::Ordering::{Greater, Less};
        if matches!(self.min.x.partial_cmp(&point.x), Some(Greater)) {
            self.min.x = point.x;
        }
        if matches!(self.min.y.partial_cmp(&point.y), Some(Greater)) {
            self.min.y = point.y;
        }
        if matches!(self.max.x.partial_cmp(&point.x), Some(Less)) {
            self.max.x = point.x;
        }
        if matches!(self.max.y.partial_cmp(&point.y), Some(Less)) {
            self.max.y = point.y;
        }
    }

    /// Whether [`fit`] has never been called with an actual point
    ///
    /// [`fit`]: BBox::fit
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Convert the corner pair into the anchor plus extent form
    #[inline]
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            self.min.x,
            self.min.y,
            self.max.x - self.min.x,
            self.max.y - self.min.y,
        )
    }
}

impl FromIterator<Point> for BBox {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        let mut bbox = BBox::new();
        for point in iter {
            bbox.fit(point);
        }
        bbox
    }
}

#[cfg(test)]
mod test {
    use crate::geometry::{BBox, Point};

    /// Set of points "randomly" created by a human
    static POINTS: [Point; 5] = [
        Point::new(0.0, 0.0),
        Point::new(12.3, 4.56),
        Point::new(7.0, 8.0),
        Point::new(-1.3, -3.7),
        Point::new(-3.0, -5.0),
    ];

    #[test]
    fn bbox_fit_contains() {
        let bbox: BBox = POINTS.into_iter().collect();
        for point in POINTS {
            assert!(bbox.contains(point));
        }
        assert!(!bbox.contains(Point::new(13.0, 0.0)));
    }

    #[test]
    fn bbox_to_rect() {
        let bbox: BBox = POINTS.into_iter().collect();
        let rect = bbox.to_rect();
        assert_eq!(rect.x, -3.0);
        assert_eq!(rect.y, -5.0);
        assert_eq!(rect.width, 15.3);
        assert_eq!(rect.height, 13.0);
    }

    #[test]
    fn bbox_empty() {
        let mut bbox = BBox::new();
        assert!(bbox.is_empty());
        assert!(!bbox.contains(Point::new(0.0, 0.0)));

        bbox.fit(Point::new(1.0, 2.0));
        assert!(!bbox.is_empty());
    }
}
