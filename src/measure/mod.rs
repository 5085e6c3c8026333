pub mod area;
pub mod format;
pub mod scale_bar;

pub use area::{polygon_area, round_area, total_area};
pub use format::format_xy;
pub use scale_bar::{ScaleBar, ScaleUnits};
