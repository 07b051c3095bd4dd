use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;

use crate::airkorea::Grade;

/// The most recent reading of a monitoring station.
///
/// Concentrations are in ㎍/㎥ for particulate matter and ppm for gases.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MeasuredValue {
    pub measured_at: Option<DateTime<Tz>>,

    pub pm10: Option<f64>,
    pub pm25: Option<f64>,
    pub so2: Option<f64>,
    pub co: Option<f64>,
    pub o3: Option<f64>,
    pub no2: Option<f64>,

    pub pm10_grade: Option<Grade>,
    pub pm25_grade: Option<Grade>,
    pub so2_grade: Option<Grade>,
    pub co_grade: Option<Grade>,
    pub o3_grade: Option<Grade>,
    pub no2_grade: Option<Grade>,

    pub khai_value: Option<f64>,
    pub khai_grade: Option<Grade>,
}

impl MeasuredValue {
    /// The composite grade, `Unknown` when the station did not report one.
    pub fn composite_grade(&self) -> Grade {
        self.khai_grade.unwrap_or_default()
    }
}
