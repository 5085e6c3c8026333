//! Spherical (Web) Mercator projections
//!
//! Two flavours are used by map libraries:
//! - EPSG:3857 meters, as used by OpenLayers views: x/y in `[-HALF_SIZE, HALF_SIZE]`
//! - normalized Mercator, as used by MapLibre/Mapbox custom layers: x/y in
//!   `[0, 1]` with y growing southward

use std::f64::consts::PI;

use super::offset::ScaleFactor;
use crate::domain::Point2D;

/// Sphere radius used by EPSG:3857
pub const WEB_MERCATOR_RADIUS: f64 = 6_378_137.0;

/// Half the width of the EPSG:3857 world square in meters
pub const HALF_SIZE: f64 = PI * WEB_MERCATOR_RADIUS;

/// Latitude at which the Web Mercator square ends
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Mean earth radius used for normalized Mercator scale computations
pub const EARTH_MEAN_RADIUS: f64 = 6_371_008.8;

/// Circumference of the sphere with the mean earth radius
pub const EARTH_CIRCUMFERENCE: f64 = 2.0 * PI * EARTH_MEAN_RADIUS;

fn clamp_latitude(lat: f64) -> f64 {
    lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
}

/// Project a (lon, lat) point in degrees to EPSG:3857 meters
///
/// Latitudes beyond the Web Mercator limit are clamped so `y` stays finite.
pub fn lonlat_to_web_mercator(lonlat: Point2D) -> Point2D {
    let x = WEB_MERCATOR_RADIUS * lonlat.x.to_radians();
    let y = WEB_MERCATOR_RADIUS * (PI * (lonlat.y + 90.0) / 360.0).tan().ln();

    Point2D::new(x, y.clamp(-HALF_SIZE, HALF_SIZE))
}

/// Unproject EPSG:3857 meters back to (lon, lat) degrees
pub fn web_mercator_to_lonlat(xy: Point2D) -> Point2D {
    let lon = 180.0 * xy.x / HALF_SIZE;
    let lat = 360.0 * (xy.y / WEB_MERCATOR_RADIUS).exp().atan() / PI - 90.0;

    Point2D::new(lon, lat)
}

/// Ground meters covered by one EPSG:3857 unit at the given latitude
pub fn point_resolution(lat: f64) -> f64 {
    clamp_latitude(lat).to_radians().cos()
}

/// EPSG:3857 units per ground meter at the given latitude
pub fn web_mercator_scale(lat: f64) -> ScaleFactor {
    ScaleFactor::from_positive(1.0 / point_resolution(lat))
}

/// A position in normalized Mercator space
///
/// `x` and `y` run from 0 to 1 across the world square, `z` is altitude in
/// the same units at the coordinate's latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MercatorCoordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl MercatorCoordinate {
    /// Project a longitude/latitude (degrees) and altitude (meters)
    pub fn from_lng_lat(lng: f64, lat: f64, altitude_m: f64) -> Self {
        let lat = clamp_latitude(lat);
        Self {
            x: mercator_x_from_lng(lng),
            y: mercator_y_from_lat(lat),
            z: altitude_m / circumference_at_latitude(lat),
        }
    }

    pub fn to_point(self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Longitude/latitude in degrees of this coordinate
    pub fn to_lng_lat(self) -> Point2D {
        Point2D::new(self.x * 360.0 - 180.0, lat_from_mercator_y(self.y))
    }

    /// Altitude in meters
    pub fn to_altitude(self) -> f64 {
        self.z * circumference_at_latitude(lat_from_mercator_y(self.y))
    }

    /// Normalized Mercator units per meter at this coordinate
    pub fn meter_in_units(self) -> f64 {
        mercator_scale(lat_from_mercator_y(self.y)) / EARTH_CIRCUMFERENCE
    }

    pub fn scale(self) -> ScaleFactor {
        ScaleFactor::from_positive(self.meter_in_units())
    }
}

fn circumference_at_latitude(lat: f64) -> f64 {
    EARTH_CIRCUMFERENCE * lat.to_radians().cos()
}

fn mercator_x_from_lng(lng: f64) -> f64 {
    (180.0 + lng) / 360.0
}

fn mercator_y_from_lat(lat: f64) -> f64 {
    (180.0 - (180.0 / PI) * (PI / 4.0 + lat * PI / 360.0).tan().ln()) / 360.0
}

fn lat_from_mercator_y(y: f64) -> f64 {
    let y2 = 180.0 - y * 360.0;
    360.0 / PI * (y2 * PI / 180.0).exp().atan() - 90.0
}

fn mercator_scale(lat: f64) -> f64 {
    1.0 / lat.to_radians().cos()
}
