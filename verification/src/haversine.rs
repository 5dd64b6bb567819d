//! Great-circle distance on a spherical Earth.

use gsadmin_types::params::METERS_PER_KILOMETER;
use gsadmin_types::GeoPoint;

/// Haversine distance between two points, in meters.
///
/// `radius_km` is the sphere radius in kilometers; the result is scaled to
/// meters at the end so the arithmetic matches the backend's own check.
pub fn great_circle_meters(from: &GeoPoint, to: &GeoPoint, radius_km: f64) -> f64 {
    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();
    let d_lat = (to.latitude() - from.latitude()).to_radians();
    let d_lon = (to.longitude() - from.longitude()).to_radians();

    // Rounding can push `a` just past 1.0 near antipodes.
    let a = ((d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2))
        .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    radius_km * c * METERS_PER_KILOMETER
}
