/// Mean Earth radius in meters. Every distance in the game is in meters.
pub const EARTH_RADIUS: f64 = 6371e3;
