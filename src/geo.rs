use serde::Serialize;

/// A WGS84 position as reported by the device's location provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,

    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A point in the Korean TM (Transverse Mercator) plane used by the station registry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanarCoordinate {
    pub x: f64,

    pub y: f64,
}
