// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! # Thermo
//!
//! Simulated temperature telemetry. A set of sensor channels each publish a
//! reading per tick into a shared latest-value store; an aggregator logs all
//! channels with their mean, and a fault detector logs every channel outside
//! the nominal bounds. Everything stops cooperatively, within one tick, when
//! the shared [`ShutdownController`] is triggered.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use thermo::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let shutdown = ShutdownController::new();
//!     thermo::stop_on_interrupt(shutdown.clone());
//!
//!     thermo::run(PipelineConfig::default(), shutdown).await?;
//!     Ok(())
//! }
//! ```

use thermo_core::{error, info};
use tokio::task::JoinHandle;

pub use thermo_core::{
    Bounds, ChannelSlot, ReadingGenerator, ReadingSource, ReadingStore, Sample, SampleKind,
    SensorProfile, ShutdownController, SpikeRanges, NEUTRAL_READING,
};
pub use thermo_error::{Result, ThermoError};
pub use thermo_exec::{
    AggregatorTask, FaultDetectorTask, GeneratorTask, Pipeline, PipelineConfig,
};
pub use thermo_sink::{aggregate_line, fault_line, fault_lines, LogSink};

/// Prelude module for convenient imports
pub mod prelude {
    pub use thermo_core::{Bounds, ReadingSource, SensorProfile, ShutdownController, SpikeRanges};
    pub use thermo_error::{Result, ThermoError};
    pub use thermo_exec::{Pipeline, PipelineConfig};
}

/// Run a pipeline built from `config` until `shutdown` is triggered.
///
/// Returns once every task has exited.
///
/// # Errors
/// Returns `ThermoError::InvalidConfig` before any task starts if `config`
/// does not validate.
pub async fn run(config: PipelineConfig, shutdown: ShutdownController) -> Result<()> {
    let mut pipeline = Pipeline::new(config, shutdown.clone())?;
    pipeline.start()?;

    shutdown.await_stop().await;
    pipeline.join().await;
    Ok(())
}

/// Request a stop on the first Ctrl-C. The handler does nothing else.
///
/// If the signal cannot be listened for, a stop is requested right away.
pub fn stop_on_interrupt(shutdown: ShutdownController) -> JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Interrupt received, stopping"),
            Err(err) => error!("Failed to listen for Ctrl-C: {err}"),
        }
        shutdown.request_stop();
    })
}
