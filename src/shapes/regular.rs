use std::f64::consts::PI;

use crate::domain::{Outline, Point2D, Radians};
use crate::error::{GeomError, Result};

/// Segments used to approximate a circle when none are configured
pub const DEFAULT_CIRCLE_SEGMENTS: usize = 32;

/// Regular polygon with `sides` vertices on the circle through `cursor`
///
/// # Arguments
/// * `center` - polygon center
/// * `cursor` - sets the circumradius
/// * `sides` - vertex count, at least 3
/// * `start` - angle of the first vertex; `None` aims it at the cursor
pub fn regular_polygon(
    center: Point2D,
    cursor: Point2D,
    sides: usize,
    start: Option<Radians>,
) -> Result<Outline> {
    if sides < 3 {
        return Err(GeomError::TooFewSides(sides));
    }

    let dx = cursor.x - center.x;
    let dy = cursor.y - center.y;
    let radius = dx.hypot(dy);
    let start = start.unwrap_or_else(|| Radians::of_vector(dx, dy));

    Ok(regular_ring(center, radius, sides, start))
}

/// Square centered on `center` with one corner at `cursor`
pub fn square(center: Point2D, cursor: Point2D) -> Outline {
    let dx = cursor.x - center.x;
    let dy = cursor.y - center.y;
    regular_ring(center, dx.hypot(dy), 4, Radians::of_vector(dx, dy))
}

/// Polygonal approximation of the circle centered on `center` through `cursor`
///
/// The first vertex always sits at angle 0 regardless of the cursor
/// direction. Fewer than 3 segments are raised to 3.
pub fn circle_outline(center: Point2D, cursor: Point2D, segments: usize) -> Outline {
    regular_ring(
        center,
        center.distance_to(cursor),
        segments.max(3),
        Radians(0.0),
    )
}

fn regular_ring(center: Point2D, radius: f64, sides: usize, start: Radians) -> Outline {
    let step = 2.0 * PI / sides as f64;
    Outline::from_vertices((0..sides).map(|i| {
        let (sin, cos) = Radians(start.0 + i as f64 * step).sin_cos();
        Point2D::new(center.x + radius * cos, center.y + radius * sin)
    }))
}
