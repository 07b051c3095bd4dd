use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct TmCoordinatesResponse {
    #[serde(default)]
    pub documents: Option<Vec<Document>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Document {
    pub x: f64,

    pub y: f64,
}
