use crate::domain::{Degrees, Point2D};

/// Translate a point by `(dx, dy)`, then rotate the result about the
/// coordinate origin.
///
/// The rotation pivots on `(0, 0)`, not on the point's original position,
/// so a large translation swings the point around the origin.
pub fn translate_and_rotate(point: Point2D, dx: f64, dy: f64, angle: Degrees) -> Point2D {
    let x = point.x + dx;
    let y = point.y + dy;

    let (sin, cos) = angle.to_radians().sin_cos();

    Point2D::new(x * cos - y * sin, x * sin + y * cos)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_identity() {
        let p = Point2D::new(12.5, -3.0);
        assert_eq!(translate_and_rotate(p, 0.0, 0.0, Degrees(0.0)), p);
    }

    #[test]
    fn test_full_turn_matches_no_turn() {
        let p = Point2D::new(10.0, 10.0);
        let a = translate_and_rotate(p, 5000.0, 3000.0, Degrees(360.0));
        let b = translate_and_rotate(p, 5000.0, 3000.0, Degrees(0.0));
        // 360 degrees is not exactly 2*PI in floating point, scale the tolerance
        assert!(a.approx_eq(b, 1e-8 * 5010.0));
    }

    #[test]
    fn test_quarter_turn_about_origin() {
        let p = translate_and_rotate(Point2D::new(1.0, 0.0), 1.0, 0.0, Degrees(90.0));
        assert!(p.approx_eq(Point2D::new(0.0, 2.0), EPS));
    }

    #[test]
    fn test_alignment_demo_point() {
        // (10, 10) moved by (5000, 3000) lands on (5010, 3010), then 45 degrees
        let p = translate_and_rotate(Point2D::new(10.0, 10.0), 5000.0, 3000.0, Degrees(45.0));
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let expected = Point2D::new((5010.0 - 3010.0) * h, (5010.0 + 3010.0) * h);
        assert!(p.approx_eq(expected, 1e-6));

        let again = translate_and_rotate(Point2D::new(10.0, 10.0), 5000.0, 3000.0, Degrees(45.0));
        assert_eq!(p, again);
    }

    #[test]
    fn test_negative_angle_undoes_rotation() {
        let p = translate_and_rotate(Point2D::new(3.0, 4.0), 0.0, 0.0, Degrees(37.0));
        let back = translate_and_rotate(p, 0.0, 0.0, Degrees(-37.0));
        assert!(back.approx_eq(Point2D::new(3.0, 4.0), EPS));
    }
}
