use crate::{
    geo::{GeoPoint, PlanarCoordinate},
    kakao::response::TmCoordinatesResponse,
    pipeline::PipelineError,
    transport::{Request, Transport, decode},
};

pub const KAKAO_API_BASE_URL: &str = "https://dapi.kakao.com";

const TRANSCOORD_PATH: &str = "v2/local/geo/transcoord.json";

#[derive(Debug, Clone)]
pub struct KakaoLocalClient<T> {
    transport: T,
    base_url: String,
    api_key: String,
}

impl<T: Transport> KakaoLocalClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Convert a WGS84 point into TM coordinates, keeping the first candidate the service returns.
    pub async fn translate(&self, point: GeoPoint) -> Result<PlanarCoordinate, PipelineError> {
        let request = Request::get(format!(
            "{}/{TRANSCOORD_PATH}",
            self.base_url.trim_end_matches('/')
        ))
        .query("x", point.longitude)
        .query("y", point.latitude)
        .query("output_coord", "TM")
        .header("Authorization", format!("KakaoAK {}", self.api_key));

        let body = self.transport.get(request).await?;
        let response: TmCoordinatesResponse = decode(&body)?;

        let Some(document) = response.documents.unwrap_or_default().into_iter().next() else {
            tracing::warn!(?point, "coordinate service returned no documents");
            return Err(PipelineError::Translation);
        };

        Ok(PlanarCoordinate {
            x: document.x,
            y: document.y,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::testing::ScriptedTransport;

    #[tokio::test]
    async fn translate_sends_longitude_as_x_and_uses_first_document() {
        let transport = ScriptedTransport::new([
            r#"{"meta":{"total_count":2},"documents":[{"x":200000.5,"y":450000.25},{"x":1.0,"y":2.0}]}"#,
        ]);
        let client = KakaoLocalClient::new(&transport, "https://dapi.kakao.com/", "secret");

        let coordinate = client.translate(GeoPoint::new(37.5, 127.0)).await.unwrap();

        assert_eq!(
            coordinate,
            PlanarCoordinate {
                x: 200000.5,
                y: 450000.25
            }
        );

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].url,
            "https://dapi.kakao.com/v2/local/geo/transcoord.json"
        );
        assert_eq!(requests[0].query_value("x"), Some("127"));
        assert_eq!(requests[0].query_value("y"), Some("37.5"));
        assert_eq!(requests[0].query_value("output_coord"), Some("TM"));
        assert_eq!(
            requests[0].header_value("Authorization"),
            Some("KakaoAK secret")
        );
    }

    #[tokio::test]
    async fn translate_fails_on_empty_documents() {
        let transport = ScriptedTransport::new([r#"{"meta":{"total_count":0},"documents":[]}"#]);
        let client = KakaoLocalClient::new(&transport, KAKAO_API_BASE_URL, "secret");

        let err = client.translate(GeoPoint::new(0.0, 0.0)).await.unwrap_err();

        assert!(matches!(err, PipelineError::Translation));
    }

    #[tokio::test]
    async fn translate_fails_on_missing_documents() {
        let transport = ScriptedTransport::new([r#"{"meta":{"total_count":0}}"#]);
        let client = KakaoLocalClient::new(&transport, KAKAO_API_BASE_URL, "secret");

        let err = client.translate(GeoPoint::new(0.0, 0.0)).await.unwrap_err();

        assert!(matches!(err, PipelineError::Translation));
    }
}
