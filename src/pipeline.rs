//! Resolves a device location into the nearest station and its latest reading.

use serde::Serialize;
use thiserror::Error;

use crate::{
    airkorea::{AirKoreaClient, MeasuredValue, MonitoringStation},
    context::Context,
    geo::GeoPoint,
    kakao::KakaoLocalClient,
    transport::{Transport, TransportError},
};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("coordinate service returned no TM coordinates")]
    Translation,

    #[error("no monitoring station found near the location")]
    NoStationFound,

    #[error("no measurement found for the monitoring station")]
    NoMeasurementFound,

    #[error("lookup was cancelled")]
    Cancelled,
}

impl PipelineError {
    /// A stable name for the failing stage, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::Transport(_) => "transport",
            PipelineError::Translation => "translation",
            PipelineError::NoStationFound => "no_station_found",
            PipelineError::NoMeasurementFound => "no_measurement_found",
            PipelineError::Cancelled => "cancelled",
        }
    }
}

/// A station together with the reading it reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirQuality {
    pub station: MonitoringStation,

    pub measured: MeasuredValue,
}

#[derive(Debug, Clone)]
pub struct Pipeline<T> {
    translator: KakaoLocalClient<T>,
    stations: AirKoreaClient<T>,
}

impl<T: Transport> Pipeline<T> {
    pub fn new(translator: KakaoLocalClient<T>, stations: AirKoreaClient<T>) -> Self {
        Self {
            translator,
            stations,
        }
    }

    /// Translate, locate and fetch in sequence, stopping at the first failure.
    ///
    /// `ctx` is checked before every stage and raced against every request, so a cancelled
    /// run issues no further requests.
    #[tracing::instrument(skip(self, ctx))]
    pub async fn run(&self, location: GeoPoint, ctx: &Context) -> Result<AirQuality, PipelineError> {
        let coordinate = ctx
            .guard(self.translator.translate(location))
            .await
            .ok_or(PipelineError::Cancelled)??;
        tracing::debug!(?coordinate, "translated location");

        let station = ctx
            .guard(self.stations.locate(coordinate))
            .await
            .ok_or(PipelineError::Cancelled)??;

        let measured = ctx
            .guard(self.stations.fetch_latest(&station.name))
            .await
            .ok_or(PipelineError::Cancelled)??;

        Ok(AirQuality { station, measured })
    }
}
