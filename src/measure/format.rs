use crate::domain::Point2D;

/// Default number of decimals for coordinate readouts
pub const DEFAULT_PRECISION: usize = 4;

/// Format a coordinate as `"x, y"` with a fixed number of decimals
pub fn format_xy(point: Point2D, digits: usize) -> String {
    format!("{:.*}, {:.*}", digits, point.x, digits, point.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_xy() {
        let p = Point2D::new(-91.874, 42.76);
        assert_eq!(format_xy(p, DEFAULT_PRECISION), "-91.8740, 42.7600");
        assert_eq!(format_xy(p, 0), "-92, 43");
    }
}
