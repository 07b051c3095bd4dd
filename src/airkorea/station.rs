use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitoringStation {
    pub name: String,

    pub address: Option<String>,

    /// Distance from the queried TM coordinate, in kilometres.
    pub distance: Option<f64>,
}

impl MonitoringStation {
    fn distance_or_max(&self) -> f64 {
        self.distance.unwrap_or(f64::MAX)
    }
}

/// Pick the station with the smallest distance.
///
/// A station without a distance ranks as `f64::MAX`. Ties keep the earliest station.
pub fn select_nearest(stations: Vec<MonitoringStation>) -> Option<MonitoringStation> {
    stations
        .into_iter()
        .min_by(|a, b| a.distance_or_max().total_cmp(&b.distance_or_max()))
}
