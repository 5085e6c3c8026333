//! mapsketch - shape, projection and measurement helpers for interactive map drawing

pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod measure;
pub mod shapes;

pub use domain::{Degrees, Outline, Point2D, Radians};
pub use error::GeomError;
pub use geometry::{EastNorth, ModelOrigin, ScaleFactor, mercator_offset, translate_and_rotate};
pub use shapes::{ShapeKind, ShapeOptions, star_outline};
