//! Outlines built from a two-point drag gesture (first point, cursor)

pub mod rect;
pub mod regular;
pub mod star;

use std::fmt;
use std::str::FromStr;

use crate::domain::{Outline, Point2D};
use crate::error::{GeomError, Result};

pub use rect::box_outline;
pub use regular::{DEFAULT_CIRCLE_SEGMENTS, circle_outline, regular_polygon, square};
pub use star::{StarShape, star_outline};

/// Shapes offered by the draw tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Star,
    Box,
    Square,
    Circle,
    RegularPolygon(usize),
}

impl FromStr for ShapeKind {
    type Err = GeomError;

    /// Accepts `star`, `box`, `square`, `circle` and `polygon:<sides>`
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "star" => Ok(ShapeKind::Star),
            "box" => Ok(ShapeKind::Box),
            "square" => Ok(ShapeKind::Square),
            "circle" => Ok(ShapeKind::Circle),
            other => {
                let sides = other
                    .strip_prefix("polygon:")
                    .and_then(|n| n.parse::<usize>().ok())
                    .ok_or_else(|| GeomError::UnknownShape(s.to_string()))?;
                if sides < 3 {
                    return Err(GeomError::TooFewSides(sides));
                }
                Ok(ShapeKind::RegularPolygon(sides))
            }
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Star => write!(f, "star"),
            ShapeKind::Box => write!(f, "box"),
            ShapeKind::Square => write!(f, "square"),
            ShapeKind::Circle => write!(f, "circle"),
            ShapeKind::RegularPolygon(sides) => write!(f, "polygon:{}", sides),
        }
    }
}

/// Tunables shared by the shape generators
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeOptions {
    pub star: StarShape,
    pub circle_segments: usize,
    /// Drags shorter than this produce no shape
    pub min_drag: f64,
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self {
            star: StarShape::default(),
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
            min_drag: 0.0,
        }
    }
}

impl ShapeKind {
    /// Build the outline for this shape. Never fails for a zero-length
    /// drag; the result is then degenerate.
    pub fn outline(&self, center: Point2D, cursor: Point2D, options: &ShapeOptions) -> Result<Outline> {
        let outline = match *self {
            ShapeKind::Star => options.star.outline(center, cursor),
            ShapeKind::Box => box_outline(center, cursor),
            ShapeKind::Square => square(center, cursor),
            ShapeKind::Circle => circle_outline(center, cursor, options.circle_segments),
            ShapeKind::RegularPolygon(sides) => regular_polygon(center, cursor, sides, None)?,
        };
        Ok(outline)
    }
}

/// Shape for an in-progress drag, or `None` while the drag is still shorter
/// than `options.min_drag`
pub fn draft_shape(
    kind: ShapeKind,
    center: Point2D,
    cursor: Point2D,
    options: &ShapeOptions,
) -> Result<Option<Outline>> {
    let drag = center.distance_to(cursor);
    if drag < options.min_drag || drag == 0.0 {
        tracing::debug!(%kind, drag, min_drag = options.min_drag, "drag too short, no shape yet");
        return Ok(None);
    }
    kind.outline(center, cursor, options).map(Some)
}
