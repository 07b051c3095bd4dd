mod args;
mod render;

use std::{process::ExitCode, time::Duration};

use air_quality::{
    airkorea::AirKoreaClient,
    context::Context,
    kakao::KakaoLocalClient,
    pipeline::{AirQuality, Pipeline},
    transport::{HttpTransport, Transport},
};
use anyhow::{Context as _, Result, anyhow};
use args::{Args, Command, LocationArgs};
use clap::Parser as _;
use tokio::{
    signal,
    time::{Interval, MissedTickBehavior, interval},
};
use tokio_stream::{StreamExt as _, wrappers::IntervalStream};
use tracing_subscriber::EnvFilter;

use crate::render::{NO_FIX_KIND, render_failure, render_view, render_widget};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("{e:#}");
        return ExitCode::from(1);
    }

    ExitCode::from(0)
}

async fn run() -> Result<()> {
    let args = Args::parse();

    let transport = HttpTransport::new(Duration::from_secs(args.services.timeout_secs))
        .context("failed to build HTTP client")?;

    let pipeline = Pipeline::new(
        KakaoLocalClient::new(
            transport.clone(),
            &args.services.kakao_base_url,
            &args.services.kakao_api_key,
        ),
        AirKoreaClient::new(
            transport,
            &args.services.air_korea_base_url,
            &args.services.air_korea_service_key,
        ),
    );

    let ctx = Context::new();
    {
        let ctx = ctx.clone();
        tokio::spawn(async move {
            if signal::ctrl_c().await.is_ok() {
                tracing::info!("got SIGINT, cancelling");
                ctx.cancel();
            }
        });
    }

    match args.command {
        Command::Show { json } => {
            let quality = fetch(&pipeline, &args.location, &ctx, json).await?;
            if json {
                let out = serde_json::to_string_pretty(&quality)
                    .context("failed to serialize air quality")?;
                println!("{out}");
            } else {
                println!("{}", render_view(&quality));
            }
        }
        Command::Widget => {
            let quality = fetch(&pipeline, &args.location, &ctx, false).await?;
            println!("{}", render_widget(&quality));
        }
        Command::Watch { interval_secs } => {
            watch(&pipeline, &args.location, &ctx, Duration::from_secs(interval_secs)).await;
        }
    }

    Ok(())
}

/// Run one lookup. Any failure prints the generic failure indicator and suppresses the data.
async fn fetch<T: Transport>(
    pipeline: &Pipeline<T>,
    location: &LocationArgs,
    ctx: &Context,
    json: bool,
) -> Result<AirQuality> {
    let Some(point) = location.fix() else {
        tracing::error!("no location fix available");
        println!("{}", render_failure(NO_FIX_KIND, json));
        return Err(anyhow!("no location fix available"));
    };

    match pipeline.run(point, ctx).await {
        Ok(quality) => Ok(quality),
        Err(err) => {
            tracing::error!(kind = err.kind(), "{err}");
            println!("{}", render_failure(err.kind(), json));
            Err(err).context("failed to fetch air quality data")
        }
    }
}

/// Print the widget line on every tick until `ctx` is cancelled. Each tick is an independent run.
async fn watch<T: Transport>(
    pipeline: &Pipeline<T>,
    location: &LocationArgs,
    ctx: &Context,
    period: Duration,
) {
    let mut ticks = IntervalStream::new(ticker(period));

    loop {
        tokio::select! {
            _ = ctx.cancelled() => break,
            tick = ticks.next() => {
                if tick.is_none() {
                    break;
                }

                match fetch(pipeline, location, ctx, false).await {
                    Ok(quality) => println!("{}", render_widget(&quality)),
                    Err(e) => tracing::warn!("refresh failed: {e:#}"),
                }
            }
        }
    }

    tracing::info!("stopped refreshing");
}

/// A refresh that outlasts the period pushes later ticks back instead of bursting to catch up.
fn ticker(period: Duration) -> Interval {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ticker_delays_missed_ticks() {
        let ticker = ticker(Duration::from_secs(60));

        assert_eq!(ticker.missed_tick_behavior(), MissedTickBehavior::Delay);
        assert_eq!(ticker.period(), Duration::from_secs(60));
    }
}
