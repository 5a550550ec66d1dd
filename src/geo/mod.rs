use consts::EARTH_RADIUS;
use models::LatLng;

pub mod consts;
pub mod models;

/// Great-circle distance between two points in meters (haversine, spherical Earth).
pub fn distance(a: LatLng, b: LatLng) -> f64 {
    let phi_1 = a.lat().to_radians();
    let phi_2 = b.lat().to_radians();
    let delta_phi = (b.lat() - a.lat()).to_radians();
    let delta_lambda = (b.lng() - a.lng()).to_radians();
    let h = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // Rounding can push `h` a hair outside [0, 1] for near-antipodal points.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    let meters = EARTH_RADIUS * c;
    if !meters.is_finite() || meters < 0.0 {
        return 0.0;
    }
    meters
}
