use geo::{ChamberlainDuquetteArea, Polygon};

/// Unsigned area in square meters of a polygon given in (lon, lat) degrees
///
/// Uses the Chamberlain-Duquette approximation on a sphere of radius
/// 6378137 m; holes are subtracted.
pub fn polygon_area(polygon: &Polygon<f64>) -> f64 {
    polygon.chamberlain_duquette_unsigned_area()
}

/// Summed area of all polygons, `None` when there is nothing to measure
pub fn total_area(polygons: &[Polygon<f64>]) -> Option<f64> {
    if polygons.is_empty() {
        return None;
    }
    Some(polygons.iter().map(polygon_area).sum())
}

/// Round an area to two decimals (square centimetre-ish display precision)
pub fn round_area(area_m2: f64) -> f64 {
    (area_m2 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Outline, Point2D};

    fn cell(lon: f64, lat: f64, size: f64) -> Polygon<f64> {
        Outline::from_vertices([
            Point2D::new(lon, lat),
            Point2D::new(lon + size, lat),
            Point2D::new(lon + size, lat + size),
            Point2D::new(lon, lat + size),
        ])
        .into_polygon()
    }

    #[test]
    fn test_one_degree_cell_at_equator() {
        let area = polygon_area(&cell(0.0, 0.0, 1.0));
        assert!((area - 1.2391e10).abs() < 1e7, "area was {}", area);
    }

    #[test]
    fn test_cells_shrink_toward_pole() {
        let equator = polygon_area(&cell(0.0, 0.0, 1.0));
        let north = polygon_area(&cell(0.0, 60.0, 1.0));
        assert!(north < equator * 0.55);
    }

    #[test]
    fn test_winding_does_not_matter() {
        let ccw = cell(10.0, 10.0, 0.5);
        let mut cw = ccw.exterior().clone();
        cw.0.reverse();
        let cw = Polygon::new(cw, vec![]);
        assert!((polygon_area(&ccw) - polygon_area(&cw)).abs() < 1e-3);
    }

    #[test]
    fn test_total_area() {
        assert_eq!(total_area(&[]), None);
        let a = cell(0.0, 0.0, 0.01);
        let b = cell(1.0, 0.0, 0.01);
        let total = total_area(&[a.clone(), b]).unwrap();
        assert!((total - 2.0 * polygon_area(&a)).abs() < 1e-3);
    }

    #[test]
    fn test_round_area() {
        assert_eq!(round_area(1234.5678), 1234.57);
        assert_eq!(round_area(0.004), 0.0);
    }
}
