use air_quality::{airkorea::AIR_KOREA_API_BASE_URL, geo::GeoPoint, kakao::KAKAO_API_BASE_URL};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(version, about = "Air quality at the nearest AirKorea monitoring station")]
pub struct Args {
    #[command(flatten)]
    pub services: ServiceArgs,

    #[command(flatten)]
    pub location: LocationArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Args)]
pub struct ServiceArgs {
    #[arg(long, env = "KAKAO_API_KEY", hide_env_values = true)]
    pub kakao_api_key: String,

    #[arg(long, env = "AIR_KOREA_SERVICE_KEY", hide_env_values = true)]
    pub air_korea_service_key: String,

    #[arg(long, env = "KAKAO_BASE_URL", default_value = KAKAO_API_BASE_URL)]
    pub kakao_base_url: String,

    #[arg(long, env = "AIR_KOREA_BASE_URL", default_value = AIR_KOREA_API_BASE_URL)]
    pub air_korea_base_url: String,

    #[arg(
        long,
        env = "HTTP_TIMEOUT_SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,
}

/// The device location. Missing coordinates mean no fix is available.
#[derive(Debug, clap::Args)]
pub struct LocationArgs {
    #[arg(long, env = "LATITUDE", allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    #[arg(long, env = "LONGITUDE", allow_negative_numbers = true)]
    pub longitude: Option<f64>,
}

impl LocationArgs {
    pub fn fix(&self) -> Option<GeoPoint> {
        Some(GeoPoint::new(self.latitude?, self.longitude?))
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the full reading of the nearest station.
    Show {
        #[arg(long)]
        json: bool,
    },

    /// Show only the composite grade.
    Widget,

    /// Refresh the composite grade on an interval until interrupted.
    Watch {
        #[arg(
            long,
            env = "REFRESH_INTERVAL_SECS",
            default_value_t = 600,
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        interval_secs: u64,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn partial_location_is_no_fix() {
        let location = LocationArgs {
            latitude: Some(37.5),
            longitude: None,
        };

        assert_eq!(location.fix(), None);
    }

    #[test]
    fn parses_show_with_location() {
        let args = Args::try_parse_from([
            "air-quality",
            "--kakao-api-key",
            "k",
            "--air-korea-service-key",
            "s",
            "--latitude",
            "37.5",
            "--longitude",
            "127.0",
            "show",
            "--json",
        ])
        .unwrap();

        assert_eq!(args.location.fix(), Some(GeoPoint::new(37.5, 127.0)));
        assert_eq!(args.services.kakao_base_url, KAKAO_API_BASE_URL);
        assert!(matches!(args.command, Command::Show { json: true }));
    }
}
