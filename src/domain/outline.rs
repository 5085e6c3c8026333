use geo::{LineString, Polygon};

use super::{Degrees, Point2D};
use crate::geometry::translate_and_rotate;

/// A closed ring of points: the first and last vertex are always identical.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    ring: LineString<f64>,
}

impl Outline {
    /// Build an outline from a vertex sequence, appending a copy of the
    /// first vertex when the sequence is not already closed.
    pub fn from_points(points: impl IntoIterator<Item = Point2D>) -> Self {
        let mut ring: LineString<f64> = points.into_iter().map(geo::Coord::from).collect();
        ring.close();
        Self { ring }
    }

    /// Build an outline from distinct vertices, always appending a copy of
    /// the first one. Unlike [`Outline::from_points`] this keeps the point
    /// count fixed even when every vertex coincides.
    pub fn from_vertices(vertices: impl IntoIterator<Item = Point2D>) -> Self {
        let mut coords: Vec<geo::Coord<f64>> = vertices.into_iter().map(geo::Coord::from).collect();
        if let Some(&first) = coords.first() {
            coords.push(first);
        }
        Self {
            ring: LineString::new(coords),
        }
    }

    /// Number of stored points, including the closing repeat
    pub fn len(&self) -> usize {
        self.ring.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.0.is_empty()
    }

    /// Number of distinct vertices (the closing repeat excluded)
    pub fn vertex_count(&self) -> usize {
        self.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<Point2D> {
        self.ring.0.first().copied().map(Point2D::from)
    }

    pub fn last(&self) -> Option<Point2D> {
        self.ring.0.last().copied().map(Point2D::from)
    }

    pub fn points(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.ring.coords().copied().map(Point2D::from)
    }

    /// Points as `[x, y]` pairs, the layout GeoJSON rings use
    pub fn to_coords(&self) -> Vec<[f64; 2]> {
        self.points().map(|p| [p.x, p.y]).collect()
    }

    pub fn as_line_string(&self) -> &LineString<f64> {
        &self.ring
    }

    pub fn into_polygon(self) -> Polygon<f64> {
        Polygon::new(self.ring, vec![])
    }

    /// Translate then rotate every vertex about the origin
    pub fn translate_and_rotate(&self, dx: f64, dy: f64, angle: Degrees) -> Self {
        Self::from_points(self.points().map(|p| translate_and_rotate(p, dx, dy, angle)))
    }
}

impl From<Outline> for Polygon<f64> {
    fn from(outline: Outline) -> Self {
        outline.into_polygon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Point2D> {
        vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_from_points_closes_ring() {
        let outline = Outline::from_points(triangle());
        assert_eq!(outline.len(), 4);
        assert_eq!(outline.vertex_count(), 3);
        assert_eq!(outline.first(), outline.last());
    }

    #[test]
    fn test_already_closed_ring_not_doubled() {
        let mut points = triangle();
        points.push(points[0]);
        let outline = Outline::from_points(points);
        assert_eq!(outline.len(), 4);
    }

    #[test]
    fn test_from_vertices_always_repeats_first() {
        let p = Point2D::new(2.0, 2.0);
        let outline = Outline::from_vertices(vec![p, p, p]);
        assert_eq!(outline.len(), 4);
        assert!(Outline::from_vertices(Vec::new()).is_empty());
    }

    #[test]
    fn test_translate_and_rotate_keeps_closure() {
        let outline = Outline::from_points(triangle()).translate_and_rotate(2.0, 3.0, Degrees(30.0));
        assert_eq!(outline.len(), 4);
        assert_eq!(outline.first(), outline.last());
    }

    #[test]
    fn test_into_polygon() {
        let polygon: Polygon<f64> = Outline::from_points(triangle()).into();
        assert_eq!(polygon.exterior().0.len(), 4);
        assert!(polygon.interiors().is_empty());
    }
}
