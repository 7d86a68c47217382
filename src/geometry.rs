use serde::{Deserialize, Serialize};

use crate::constants::COORDINATE_EPSILON;

/// A point of the scene, in pixels.
///
/// - The X-axis is from left to right
/// - The Y-axis is from top to bottom
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Checks whether a point lies on the border of the square of half side
/// `half_size` centered on the origin.
///
/// The point must have at least one coordinate equal to `±half_size` and
/// no coordinate outside of the square.
#[must_use]
pub fn on_square_boundary(point: Point, half_size: f64) -> bool {
    let ax = point.x.abs();
    let ay = point.y.abs();
    let inside = ax <= half_size + COORDINATE_EPSILON && ay <= half_size + COORDINATE_EPSILON;
    let on_edge = (ax - half_size).abs() < COORDINATE_EPSILON || (ay - half_size).abs() < COORDINATE_EPSILON;
    inside && on_edge
}

/// Checks if two line segments cross each other away from their endpoints.
///
/// Segments that only touch at an endpoint (such as two linked line items)
/// or that are parallel do not cross.
#[must_use]
pub fn segments_cross(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    // Calculate determinant to check if lines are parallel
    let d = (a2.x - a1.x) * (b2.y - b1.y) - (a2.y - a1.y) * (b2.x - b1.x);

    // Lines are parallel or coincident
    if d.abs() < 1e-10 {
        return false;
    }

    // Calculate parametric intersection points
    let t = ((b1.x - a1.x) * (b2.y - b1.y) - (b1.y - a1.y) * (b2.x - b1.x)) / d;
    let u = ((b1.x - a1.x) * (a2.y - a1.y) - (b1.y - a1.y) * (a2.x - a1.x)) / d;

    let strictly_inside = |v: f64| v > COORDINATE_EPSILON && v < 1.0 - COORDINATE_EPSILON;
    strictly_inside(t) && strictly_inside(u)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_on_square_boundary() {
        assert!(on_square_boundary(Point::new(-5.0, 0.0), 5.0));
        assert!(on_square_boundary(Point::new(5.0, 5.0), 5.0));
        assert!(on_square_boundary(Point::new(2.5, -5.0), 5.0));
        assert!(!on_square_boundary(Point::new(0.0, 0.0), 5.0));
        assert!(!on_square_boundary(Point::new(4.0, 4.9), 5.0));
        assert!(!on_square_boundary(Point::new(5.0, 7.0), 5.0));
    }

    #[test]
    fn test_segments_cross() {
        // An X crossing
        assert!(segments_cross(
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 0.0),
        ));

        // Touching at an endpoint
        assert!(!segments_cross(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 5.0),
        ));

        // Parallel
        assert!(!segments_cross(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 5.0),
            Point::new(10.0, 5.0),
        ));
    }
}
