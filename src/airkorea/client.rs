use crate::{
    airkorea::{
        MeasuredValue, MonitoringStation,
        response::{ApiResponse, MeasurementItem, StationItem},
        select_nearest,
    },
    geo::PlanarCoordinate,
    pipeline::PipelineError,
    transport::{Request, Transport, decode},
};

pub const AIR_KOREA_API_BASE_URL: &str = "http://apis.data.go.kr";

const NEARBY_STATIONS_PATH: &str = "B552584/MsrstnInfoInqireSvc/getNearbyMsrstnList";
const REALTIME_MEASUREMENTS_PATH: &str = "B552584/ArpltnInforInqireSvc/getMsrstnAcctoRltmMesureDnsty";

#[derive(Debug, Clone)]
pub struct AirKoreaClient<T> {
    transport: T,
    base_url: String,
    service_key: String,
}

impl<T: Transport> AirKoreaClient<T> {
    /// `service_key` is the decoded form of the key issued by data.go.kr.
    pub fn new(transport: T, base_url: impl Into<String>, service_key: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            service_key: service_key.into(),
        }
    }

    pub async fn locate(&self, coordinate: PlanarCoordinate) -> Result<MonitoringStation, PipelineError> {
        let request = self
            .request(NEARBY_STATIONS_PATH)
            .query("tmX", coordinate.x)
            .query("tmY", coordinate.y);

        let stations: Vec<MonitoringStation> = self
            .items::<StationItem>(request)
            .await?
            .into_iter()
            .map(MonitoringStation::from)
            .collect();

        tracing::debug!(count = stations.len(), "received nearby stations");

        let Some(station) = select_nearest(stations) else {
            tracing::warn!(?coordinate, "station registry returned no stations");
            return Err(PipelineError::NoStationFound);
        };

        tracing::info!(station = %station.name, distance = ?station.distance, "selected nearest station");

        Ok(station)
    }

    /// Fetch the newest reading of `station_name`. The service orders readings newest first.
    pub async fn fetch_latest(&self, station_name: &str) -> Result<MeasuredValue, PipelineError> {
        let request = self
            .request(REALTIME_MEASUREMENTS_PATH)
            .query("dataTerm", "DAILY")
            .query("ver", "1.3")
            .query("stationName", station_name);

        let Some(latest) = self
            .items::<MeasurementItem>(request)
            .await?
            .into_iter()
            .next()
        else {
            tracing::warn!(station = station_name, "measurement service returned no readings");
            return Err(PipelineError::NoMeasurementFound);
        };

        Ok(MeasuredValue::from(latest))
    }

    fn request(&self, path: &str) -> Request {
        Request::get(format!("{}/{path}", self.base_url.trim_end_matches('/')))
            .query("serviceKey", &self.service_key)
            .query("returnType", "json")
    }

    async fn items<I>(&self, request: Request) -> Result<Vec<I>, PipelineError>
    where
        I: serde::de::DeserializeOwned,
    {
        let body = self.transport.get(request).await?;
        let response: ApiResponse<I> = decode(&body)?;

        Ok(response.into_items()?)
    }
}
