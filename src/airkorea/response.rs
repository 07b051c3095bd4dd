use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, TimeDelta};
use chrono_tz::{Asia::Seoul, Tz};
use serde::{Deserialize, Deserializer};

use crate::{
    airkorea::{Grade, MeasuredValue, MonitoringStation},
    transport::TransportError,
};

const NORMAL_RESULT_CODE: &str = "00";

#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse<T> {
    pub response: ResponseBody<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseBody<T> {
    pub header: Option<Header>,

    pub body: Option<Body<T>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Header {
    pub result_code: String,

    #[serde(default)]
    pub result_msg: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Body<T> {
    pub items: Option<Vec<T>>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the item list, treating a missing body or list as empty.
    pub fn into_items(self) -> Result<Vec<T>, TransportError> {
        if let Some(header) = self.response.header
            && header.result_code != NORMAL_RESULT_CODE
        {
            return Err(TransportError::Service {
                code: header.result_code,
                message: header.result_msg,
            });
        }

        Ok(self
            .response
            .body
            .and_then(|body| body.items)
            .unwrap_or_default())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StationItem {
    pub station_name: String,

    #[serde(default)]
    pub addr: Option<String>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub tm: Option<f64>,
}

impl From<StationItem> for MonitoringStation {
    fn from(item: StationItem) -> Self {
        MonitoringStation {
            name: item.station_name,
            address: item.addr,
            distance: item.tm,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MeasurementItem {
    #[serde(default)]
    pub data_time: Option<String>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub pm10_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub pm25_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub so2_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub co_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub o3_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub no2_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub khai_value: Option<f64>,

    #[serde(default, deserialize_with = "lenient_code")]
    pub pm10_grade: Option<String>,
    #[serde(default, deserialize_with = "lenient_code")]
    pub pm25_grade: Option<String>,
    #[serde(default, deserialize_with = "lenient_code")]
    pub so2_grade: Option<String>,
    #[serde(default, deserialize_with = "lenient_code")]
    pub co_grade: Option<String>,
    #[serde(default, deserialize_with = "lenient_code")]
    pub o3_grade: Option<String>,
    #[serde(default, deserialize_with = "lenient_code")]
    pub no2_grade: Option<String>,
    #[serde(default, deserialize_with = "lenient_code")]
    pub khai_grade: Option<String>,
}

impl From<MeasurementItem> for MeasuredValue {
    fn from(item: MeasurementItem) -> Self {
        let grade = |code: Option<String>| code.map(|c| Grade::classify(Some(&c)));

        MeasuredValue {
            measured_at: item.data_time.as_deref().and_then(parse_data_time),
            pm10: item.pm10_value,
            pm25: item.pm25_value,
            so2: item.so2_value,
            co: item.co_value,
            o3: item.o3_value,
            no2: item.no2_value,
            pm10_grade: grade(item.pm10_grade),
            pm25_grade: grade(item.pm25_grade),
            so2_grade: grade(item.so2_grade),
            co_grade: grade(item.co_grade),
            o3_grade: grade(item.o3_grade),
            no2_grade: grade(item.no2_grade),
            khai_value: item.khai_value,
            khai_grade: grade(item.khai_grade),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f64),
    Text(String),
}

/// Accept `12`, `"12"` and treat `"-"`, `""` or `null` as not measured.
fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = match Option::<RawValue>::deserialize(deserializer)? {
        Some(RawValue::Number(v)) => Some(v),
        Some(RawValue::Text(s)) => s.trim().parse::<f64>().ok(),
        None => None,
    };

    Ok(value.filter(|v| v.is_finite()))
}

/// Accept grade codes sent either as strings or as bare integers.
fn lenient_code<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<RawValue>::deserialize(deserializer)? {
        Some(RawValue::Number(v)) if v.fract() == 0.0 => Some(format!("{v:.0}")),
        Some(RawValue::Number(v)) => Some(v.to_string()),
        Some(RawValue::Text(s)) => Some(s),
        None => None,
    })
}

/// Parse `"%Y-%m-%d %H:%M"` in Korean time. The service reports midnight as `24:00` of the previous day.
fn parse_data_time(s: &str) -> Option<DateTime<Tz>> {
    let s = s.trim();
    let naive = match s.strip_suffix("24:00") {
        Some(date) => NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .ok()?
            .and_hms_opt(0, 0, 0)?
            .checked_add_signed(TimeDelta::days(1))?,
        None => NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").ok()?,
    };

    match naive.and_local_timezone(Seoul) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(dt, _) => Some(dt),
        LocalResult::None => None,
    }
}
