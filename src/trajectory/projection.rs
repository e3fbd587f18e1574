use std::f64::consts::FRAC_PI_4;

use serde::Serialize;

/// WGS-84 semi-major axis, the sphere radius used by EPSG:3857.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;
/// Latitude at which the Web Mercator square world ends.
pub const MERCATOR_MAX_LAT_DEG: f64 = 85.051_128_78;

/// Position in Web Mercator metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

/// EPSG:4326 degrees to EPSG:3857 metres.
pub fn to_web_mercator(longitude_deg: f64, latitude_deg: f64) -> PlanarPoint {
    let lat = latitude_deg
        .clamp(-MERCATOR_MAX_LAT_DEG, MERCATOR_MAX_LAT_DEG)
        .to_radians();
    PlanarPoint {
        x: EARTH_RADIUS_M * longitude_deg.to_radians(),
        y: EARTH_RADIUS_M * (FRAC_PI_4 + lat / 2.0).tan().ln(),
    }
}
