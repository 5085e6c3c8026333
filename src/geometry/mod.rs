pub mod offset;
pub mod projection;
pub mod transform;

pub use offset::{EastNorth, ModelOrigin, ScaleFactor, mercator_offset};
pub use projection::{MercatorCoordinate, lonlat_to_web_mercator, web_mercator_to_lonlat};
pub use transform::translate_and_rotate;
