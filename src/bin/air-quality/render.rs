use air_quality::{airkorea::Grade, pipeline::AirQuality};

pub const FAILURE_MESSAGE: &str = "측정 정보를 가져오지 못했습니다";

pub const NO_FIX_KIND: &str = "no_location_fix";

/// The failure indicator. JSON consumers get an error object instead of the plain line.
pub fn render_failure(kind: &str, json: bool) -> String {
    if json {
        serde_json::json!({ "error": FAILURE_MESSAGE, "kind": kind }).to_string()
    } else {
        FAILURE_MESSAGE.to_string()
    }
}

pub fn render_view(quality: &AirQuality) -> String {
    let station = &quality.station;
    let measured = &quality.measured;
    let composite = measured.composite_grade();

    let mut lines = vec![
        station.name.clone(),
        station.address.clone().unwrap_or_default(),
        String::new(),
        format!("{} {} ({})", composite.emoji(), composite.label(), composite.color().hex()),
    ];

    if let Some(measured_at) = measured.measured_at {
        lines.push(format!("측정 시각: {}", measured_at.format("%Y-%m-%d %H:%M")));
    }

    lines.push(String::new());
    lines.push(format!(
        "미세먼지: {} ㎍/㎥ {}",
        value(measured.pm10),
        measured.pm10_grade.unwrap_or_default().emoji()
    ));
    lines.push(format!(
        "초미세먼지: {} ㎍/㎥ {}",
        value(measured.pm25),
        measured.pm25_grade.unwrap_or_default().emoji()
    ));

    for (label, amount, grade) in [
        ("아황산가스", measured.so2, measured.so2_grade),
        ("일산화탄소", measured.co, measured.co_grade),
        ("오존", measured.o3, measured.o3_grade),
        ("이산화질소", measured.no2, measured.no2_grade),
    ] {
        lines.push(gas_line(label, amount, grade));
    }

    lines.join("\n")
}

pub fn render_widget(quality: &AirQuality) -> String {
    let grade = quality.measured.composite_grade();
    format!("{} {}", grade.emoji(), grade.label())
}

fn gas_line(label: &str, amount: Option<f64>, grade: Option<Grade>) -> String {
    format!(
        "{label}: {} ppm {}",
        value(amount),
        grade.unwrap_or_default()
    )
}

fn value(v: Option<f64>) -> String {
    v.map_or_else(|| "-".to_string(), |v| v.to_string())
}
