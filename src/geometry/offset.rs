use serde::Serialize;

use super::projection::MercatorCoordinate;
use crate::domain::Point2D;
use crate::error::{GeomError, Result};

/// Projected units per ground meter at a reference point
///
/// The value is local: it depends on the latitude of the point it was
/// computed at and must be recomputed when that point moves.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    pub fn new(units_per_meter: f64) -> Result<Self> {
        if units_per_meter.is_finite() && units_per_meter > 0.0 {
            Ok(Self(units_per_meter))
        } else {
            Err(GeomError::InvalidScale(units_per_meter))
        }
    }

    /// For values that are positive by construction (clamped latitudes)
    pub(crate) fn from_positive(units_per_meter: f64) -> Self {
        debug_assert!(units_per_meter.is_finite() && units_per_meter > 0.0);
        Self(units_per_meter)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Offset in meters, east and north of an origin
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EastNorth {
    pub east_m: f64,
    pub north_m: f64,
}

/// Convert a projected-coordinate delta into meters east and north
///
/// `scale` must be the one computed at `origin`. The vertical axis is flipped
/// because normalized Mercator y grows southward.
pub fn mercator_offset(origin: Point2D, target: Point2D, scale: ScaleFactor) -> EastNorth {
    EastNorth {
        east_m: (target.x - origin.x) / scale.get(),
        north_m: (origin.y - target.y) / scale.get(),
    }
}

/// Anchor for placing models in a Mercator scene
///
/// Holds the origin's Mercator coordinate together with the scale at that
/// origin, so offsets are always measured with the right scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelOrigin {
    coordinate: MercatorCoordinate,
    scale: ScaleFactor,
}

impl ModelOrigin {
    /// # Arguments
    /// * `lng`, `lat` - origin in degrees
    /// * `altitude_m` - origin altitude in meters
    pub fn new(lng: f64, lat: f64, altitude_m: f64) -> Self {
        let coordinate = MercatorCoordinate::from_lng_lat(lng, lat, altitude_m);
        Self {
            coordinate,
            scale: coordinate.scale(),
        }
    }

    pub fn coordinate(&self) -> MercatorCoordinate {
        self.coordinate
    }

    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    /// Meters east/north from this origin to a longitude/latitude
    pub fn offset_to(&self, lng: f64, lat: f64) -> EastNorth {
        let target = MercatorCoordinate::from_lng_lat(lng, lat, 0.0);
        mercator_offset(self.coordinate.to_point(), target.to_point(), self.scale)
    }
}
