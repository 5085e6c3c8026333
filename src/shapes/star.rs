use std::f64::consts::PI;

use crate::domain::{Outline, Point2D, Radians};
use crate::error::{GeomError, Result};

pub const DEFAULT_STAR_POINTS: usize = 12;
pub const DEFAULT_INNER_FRACTION: f64 = 0.5;

/// Parameters of a star outline drawn by dragging from its center
///
/// Outline vertices alternate between the full radius (even index) and
/// `inner_fraction` of it (odd index), so 12 outline points give a 6-pointed
/// star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarShape {
    points: usize,
    inner_fraction: f64,
}

impl Default for StarShape {
    fn default() -> Self {
        Self {
            points: DEFAULT_STAR_POINTS,
            inner_fraction: DEFAULT_INNER_FRACTION,
        }
    }
}

impl StarShape {
    pub fn new(points: usize, inner_fraction: f64) -> Result<Self> {
        if points < 4 {
            return Err(GeomError::TooFewStarPoints(points));
        }
        // an odd count puts two full-radius vertices side by side across the closing edge
        if points % 2 != 0 {
            return Err(GeomError::OddStarPoints(points));
        }
        if !(inner_fraction > 0.0 && inner_fraction <= 1.0) {
            return Err(GeomError::InvalidInnerFraction(inner_fraction));
        }
        Ok(Self {
            points,
            inner_fraction,
        })
    }

    pub fn points(&self) -> usize {
        self.points
    }

    pub fn inner_fraction(&self) -> f64 {
        self.inner_fraction
    }

    /// Compute the closed star outline
    ///
    /// The radius is the distance from `center` to `cursor` and the first
    /// vertex points at the cursor. A cursor on the center collapses every
    /// vertex onto the center; that is still a valid outline.
    pub fn outline(&self, center: Point2D, cursor: Point2D) -> Outline {
        let dx = cursor.x - center.x;
        let dy = cursor.y - center.y;
        let radius = dx.hypot(dy);
        let rotation = Radians::of_vector(dx, dy);

        let step = 2.0 * PI / self.points as f64;
        let vertices = (0..self.points).map(|i| {
            let angle = Radians(rotation.0 + i as f64 * step);
            let fraction = if i % 2 == 0 { 1.0 } else { self.inner_fraction };
            let (sin, cos) = angle.sin_cos();
            Point2D::new(
                center.x + radius * fraction * cos,
                center.y + radius * fraction * sin,
            )
        });

        Outline::from_vertices(vertices)
    }
}

/// Default 12-point star outline from a drag gesture
pub fn star_outline(center: Point2D, cursor: Point2D) -> Outline {
    StarShape::default().outline(center, cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_is_closed_with_13_points() {
        let outline = star_outline(Point2D::new(100.0, -50.0), Point2D::new(130.0, -10.0));
        assert_eq!(outline.len(), 13);
        assert_eq!(outline.first(), outline.last());
    }

    #[test]
    fn test_first_vertex_is_cursor() {
        let center = Point2D::new(1.0, 2.0);
        let cursor = Point2D::new(4.0, 6.0);
        let first = star_outline(center, cursor).first().unwrap();
        assert!(first.approx_eq(cursor, 1e-9));
    }

    #[test]
    fn test_vertices_alternate_between_radii() {
        let center = Point2D::new(0.0, 0.0);
        let outline = star_outline(center, Point2D::new(0.0, 10.0));
        for (i, p) in outline.points().take(12).enumerate() {
            let expected = if i % 2 == 0 { 10.0 } else { 5.0 };
            assert!((center.distance_to(p) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_doubling_drag_doubles_radii() {
        let center = Point2D::new(5.0, 5.0);
        let small = star_outline(center, Point2D::new(8.0, 9.0));
        let large = star_outline(center, Point2D::new(11.0, 13.0));
        for (a, b) in small.points().zip(large.points()) {
            let ratio = center.distance_to(b) / center.distance_to(a);
            assert!((ratio - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_cursor_on_center_collapses() {
        let center = Point2D::new(7.0, -3.0);
        let outline = star_outline(center, center);
        assert_eq!(outline.len(), 13);
        assert!(outline.points().all(|p| p == center));
    }

    #[test]
    fn test_custom_star() {
        let star = StarShape::new(10, 0.4).unwrap();
        let outline = star.outline(Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0));
        assert_eq!(outline.len(), 11);
        let second = outline.points().nth(1).unwrap();
        assert!((second.distance_to(Point2D::new(0.0, 0.0)) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_star_parameters() {
        assert_eq!(StarShape::new(3, 0.5), Err(GeomError::TooFewStarPoints(3)));
        assert!(StarShape::new(12, 0.0).is_err());
        assert!(StarShape::new(12, 1.5).is_err());
        assert!(StarShape::new(12, f64::NAN).is_err());
    }

    #[test]
    fn test_odd_point_count_rejected() {
        assert_eq!(StarShape::new(5, 0.5), Err(GeomError::OddStarPoints(5)));
        assert_eq!(StarShape::new(13, 0.5), Err(GeomError::OddStarPoints(13)));
        assert!(StarShape::new(14, 0.5).is_ok());
    }
}
