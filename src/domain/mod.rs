pub mod angle;
pub mod outline;
pub mod point;

pub use angle::{Degrees, Radians};
pub use outline::Outline;
pub use point::Point2D;
