use std::fmt;

use serde::Serialize;

/// Severity tier of a pollutant or of the composite index (KHAI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Grade {
    Good,
    Normal,
    Bad,
    Awful,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeColor {
    Blue,
    Green,
    Yellow,
    Red,
    Gray,
}

impl Grade {
    /// Map a grade code from the measurement service. Anything but "1" to "4" is `Unknown`.
    pub fn classify(code: Option<&str>) -> Self {
        match code {
            Some("1") => Grade::Good,
            Some("2") => Grade::Normal,
            Some("3") => Grade::Bad,
            Some("4") => Grade::Awful,
            _ => Grade::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Grade::Good => "좋음",
            Grade::Normal => "보통",
            Grade::Bad => "나쁨",
            Grade::Awful => "매우나쁨",
            Grade::Unknown => "미측정",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Grade::Good => "😀",
            Grade::Normal => "😐",
            Grade::Bad => "☹",
            Grade::Awful => "😱",
            Grade::Unknown => "🤪",
        }
    }

    pub fn color(&self) -> GradeColor {
        match self {
            Grade::Good => GradeColor::Blue,
            Grade::Normal => GradeColor::Green,
            Grade::Bad => GradeColor::Yellow,
            Grade::Awful => GradeColor::Red,
            Grade::Unknown => GradeColor::Gray,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label(), self.emoji())
    }
}

impl GradeColor {
    pub fn hex(&self) -> &'static str {
        match self {
            GradeColor::Blue => "#1E88E5",
            GradeColor::Green => "#43A047",
            GradeColor::Yellow => "#FDD835",
            GradeColor::Red => "#E53935",
            GradeColor::Gray => "#9E9E9E",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_maps_known_codes() {
        assert_eq!(Grade::classify(Some("1")), Grade::Good);
        assert_eq!(Grade::classify(Some("2")), Grade::Normal);
        assert_eq!(Grade::classify(Some("3")), Grade::Bad);
        assert_eq!(Grade::classify(Some("4")), Grade::Awful);
    }

    #[test]
    fn classify_falls_back_to_unknown() {
        assert_eq!(Grade::classify(None), Grade::Unknown);
        assert_eq!(Grade::classify(Some("9")), Grade::Unknown);
        assert_eq!(Grade::classify(Some("0")), Grade::Unknown);
        assert_eq!(Grade::classify(Some("-")), Grade::Unknown);
        assert_eq!(Grade::classify(Some("")), Grade::Unknown);
        assert_eq!(Grade::classify(Some("GOOD")), Grade::Unknown);
        assert_eq!(Grade::classify(Some(" 1")), Grade::Unknown);
        assert_eq!(Grade::classify(Some("2\n")), Grade::Unknown);
    }

    #[test]
    fn missing_grade_is_never_good() {
        assert_eq!(Grade::default(), Grade::Unknown);
        assert_eq!(None::<Grade>.unwrap_or_default(), Grade::Unknown);
    }

    #[test]
    fn display_joins_label_and_emoji() {
        assert_eq!(Grade::Bad.to_string(), "나쁨 ☹");
        assert_eq!(Grade::Unknown.color().hex(), "#9E9E9E");
    }
}
