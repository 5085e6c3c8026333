use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Meters per degree on the sphere used for degree scale bars
const METERS_PER_DEGREE: f64 = 2.0 * std::f64::consts::PI * 6_370_997.0 / 360.0;

/// Leading digits of "nice" scale-bar lengths
const LEADING_DIGITS: [f64; 3] = [1.0, 2.0, 5.0];

/// Default minimum scale-bar width in pixels
pub const DEFAULT_MIN_WIDTH_PX: f64 = 64.0;

/// Unit families a scale bar can be labelled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleUnits {
    Degrees,
    Imperial,
    Us,
    Nautical,
    #[default]
    Metric,
}

/// A scale bar length chosen for a given ground resolution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleBar {
    /// Bar width in pixels
    pub width_px: f64,
    /// Length the bar represents, in `suffix` units
    pub count: f64,
    pub suffix: &'static str,
    pub label: String,
}

impl ScaleBar {
    /// Pick the shortest 1/2/5 x 10^n length at least `min_width_px` wide
    ///
    /// # Arguments
    /// * `resolution` - ground meters per pixel
    /// * `units` - unit family for the label
    /// * `min_width_px` - minimum bar width
    ///
    /// # Returns
    /// * `None` for a non-finite or non-positive resolution or width, or
    ///   when the bar length over- or underflows in the chosen unit
    pub fn compute(resolution: f64, units: ScaleUnits, min_width_px: f64) -> Option<Self> {
        if !(resolution.is_finite() && resolution > 0.0)
            || !(min_width_px.is_finite() && min_width_px > 0.0)
        {
            return None;
        }

        let nominal_m = min_width_px * resolution;
        // units of the label per pixel
        let (per_px, suffix) = match units {
            ScaleUnits::Degrees => {
                let per_px = resolution / METERS_PER_DEGREE;
                if nominal_m < METERS_PER_DEGREE / 60.0 {
                    (per_px * 3600.0, "\u{2033}")
                } else if nominal_m < METERS_PER_DEGREE {
                    (per_px * 60.0, "\u{2032}")
                } else {
                    (per_px, "\u{00b0}")
                }
            }
            ScaleUnits::Imperial => {
                if nominal_m < 0.9144 {
                    (resolution / 0.0254, "in")
                } else if nominal_m < 1609.344 {
                    (resolution / 0.3048, "ft")
                } else {
                    (resolution / 1609.344, "mi")
                }
            }
            ScaleUnits::Us => {
                if nominal_m < 0.9144 {
                    (resolution * 39.37, "in")
                } else if nominal_m < 1609.344 {
                    (resolution / 0.304_800_61, "ft")
                } else {
                    (resolution / 1609.3472, "mi")
                }
            }
            ScaleUnits::Nautical => (resolution / 1852.0, "NM"),
            ScaleUnits::Metric => {
                if nominal_m < 1e-6 {
                    (resolution * 1e9, "nm")
                } else if nominal_m < 0.001 {
                    (resolution * 1e6, "\u{03bc}m")
                } else if nominal_m < 1.0 {
                    (resolution * 1000.0, "mm")
                } else if nominal_m < 1000.0 {
                    (resolution, "m")
                } else {
                    (resolution / 1000.0, "km")
                }
            }
        };

        let nominal_count = min_width_px * per_px;
        if !(nominal_count.is_finite() && nominal_count > 0.0) {
            return None;
        }

        let mut i = (3.0 * nominal_count.log10().floor()) as i32;
        loop {
            let decimal_count = i.div_euclid(3);
            let count = LEADING_DIGITS[i.rem_euclid(3) as usize] * 10f64.powi(decimal_count);
            let width_px = (count / per_px).round();
            if !width_px.is_finite() {
                return None;
            }

            if width_px >= min_width_px {
                let decimals = if decimal_count < 0 {
                    (-decimal_count) as usize
                } else {
                    0
                };
                return Some(Self {
                    width_px,
                    count,
                    suffix,
                    label: format!("{:.*} {}", decimals, count, suffix),
                });
            }
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_one_meter_per_pixel() {
        let bar = ScaleBar::compute(1.0, ScaleUnits::Metric, 64.0).unwrap();
        assert_eq!(bar.label, "100 m");
        assert_eq!(bar.width_px, 100.0);
    }

    #[test]
    fn test_metric_switches_to_km() {
        let bar = ScaleBar::compute(50.0, ScaleUnits::Metric, 64.0).unwrap();
        assert_eq!(bar.suffix, "km");
        assert_eq!(bar.label, "5 km");
        assert_eq!(bar.width_px, 100.0);
    }

    #[test]
    fn test_fractional_label() {
        let bar = ScaleBar::compute(0.001, ScaleUnits::Metric, 64.0).unwrap();
        assert_eq!(bar.label, "100 mm");

        let bar = ScaleBar::compute(0.3, ScaleUnits::Nautical, 64.0).unwrap();
        assert_eq!(bar.suffix, "NM");
        assert_eq!(bar.label, "0.02 NM");
    }

    #[test]
    fn test_imperial_feet() {
        let bar = ScaleBar::compute(1.0, ScaleUnits::Imperial, 64.0).unwrap();
        assert_eq!(bar.suffix, "ft");
        assert!(bar.width_px >= 64.0);
    }

    #[test]
    fn test_degrees_large_resolution() {
        let bar = ScaleBar::compute(10_000.0, ScaleUnits::Degrees, 64.0).unwrap();
        assert_eq!(bar.suffix, "\u{00b0}");
    }

    #[test]
    fn test_bar_is_at_least_min_width() {
        for units in [
            ScaleUnits::Degrees,
            ScaleUnits::Imperial,
            ScaleUnits::Us,
            ScaleUnits::Nautical,
            ScaleUnits::Metric,
        ] {
            for resolution in [0.01, 0.7, 3.0, 152.87, 9783.94] {
                let bar = ScaleBar::compute(resolution, units, 64.0).unwrap();
                assert!(bar.width_px >= 64.0, "{:?} at {}", units, resolution);
                assert!(bar.width_px < 64.0 * 2.6, "{:?} at {}", units, resolution);
            }
        }
    }

    #[test]
    fn test_invalid_resolution() {
        assert!(ScaleBar::compute(0.0, ScaleUnits::Metric, 64.0).is_none());
        assert!(ScaleBar::compute(f64::NAN, ScaleUnits::Metric, 64.0).is_none());
        assert!(ScaleBar::compute(1.0, ScaleUnits::Metric, 0.0).is_none());
    }

    #[test]
    fn test_subnormal_resolution_has_no_bar() {
        // underflows to zero degrees per pixel
        assert!(ScaleBar::compute(5e-324, ScaleUnits::Degrees, 64.0).is_none());
        assert!(ScaleBar::compute(5e-324, ScaleUnits::Nautical, 64.0).is_none());
    }

    #[test]
    fn test_huge_min_width_has_no_bar() {
        assert!(ScaleBar::compute(1e300, ScaleUnits::Metric, 1e300).is_none());

        let bar = ScaleBar::compute(1.0, ScaleUnits::Metric, f64::MAX);
        assert!(bar.is_none_or(|b| b.width_px.is_finite() && b.width_px >= f64::MAX));
    }
}
