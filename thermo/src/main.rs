// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use anyhow::Context;
use thermo::{PipelineConfig, ShutdownController};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = PipelineConfig::default();
    config
        .validate()
        .context("reference pipeline configuration is invalid")?;

    let shutdown = ShutdownController::new();
    thermo::stop_on_interrupt(shutdown.clone());

    tracing::info!(
        "Monitoring {} sensor(s) every {:?}, press Ctrl-C to stop",
        config.channels(),
        config.tick
    );
    thermo::run(config, shutdown).await?;

    tracing::info!("Monitoring ended. Check log files.");
    Ok(())
}
