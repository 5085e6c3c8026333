use crate::domain::{Outline, Point2D};

/// Axis-aligned rectangle spanning two opposite corners
///
/// The ring runs bottom-left, bottom-right, top-right, top-left and back to
/// bottom-left whatever order the corners are given in.
pub fn box_outline(a: Point2D, b: Point2D) -> Outline {
    let min_x = a.x.min(b.x);
    let max_x = a.x.max(b.x);
    let min_y = a.y.min(b.y);
    let max_y = a.y.max(b.y);

    Outline::from_vertices([
        Point2D::new(min_x, min_y),
        Point2D::new(max_x, min_y),
        Point2D::new(max_x, max_y),
        Point2D::new(min_x, max_y),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_ring_order() {
        let outline = box_outline(Point2D::new(4.0, 1.0), Point2D::new(0.0, 3.0));
        let expected = vec![[0.0, 1.0], [4.0, 1.0], [4.0, 3.0], [0.0, 3.0], [0.0, 1.0]];
        assert_eq!(outline.to_coords(), expected);
    }

    #[test]
    fn test_degenerate_box_keeps_five_points() {
        let p = Point2D::new(1.0, 1.0);
        let outline = box_outline(p, p);
        assert_eq!(outline.len(), 5);
    }
}
