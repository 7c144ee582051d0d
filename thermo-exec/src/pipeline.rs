// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The assembled pipeline: one generator task per channel, an aggregator
//! and a fault detector, all gated on the same [`ShutdownController`].

use crate::{AggregatorTask, FaultDetectorTask, GeneratorTask, PipelineConfig};
use futures::future::join_all;
use std::sync::Arc;
use thermo_core::{error, info, ReadingGenerator, ReadingSource, ReadingStore, ShutdownController};
use thermo_error::{Result, ThermoError};
use tokio::task::JoinHandle;

/// Owns the shared store, the per-channel sources and the running tasks.
///
/// Lifecycle: [`new`](Self::new) validates and wires everything,
/// [`start`](Self::start) spawns the tasks, and [`join`](Self::join) waits
/// for them once a stop has been requested. [`stop`](Self::stop) does both
/// of the last two.
#[derive(Debug)]
pub struct Pipeline<S = ReadingGenerator> {
    config: PipelineConfig,
    shutdown: ShutdownController,
    store: Arc<ReadingStore>,
    sources: Vec<S>,
    task_handles: Vec<JoinHandle<()>>,
}

impl Pipeline<ReadingGenerator> {
    /// Pipeline with one OS-seeded generator per configured sensor.
    ///
    /// # Errors
    /// Returns `ThermoError::InvalidConfig` if `config` does not validate.
    pub fn new(config: PipelineConfig, shutdown: ShutdownController) -> Result<Self> {
        config.validate()?;
        let spikes = config.spikes();
        let sources = config
            .sensors
            .iter()
            .map(|profile| ReadingGenerator::new(*profile, spikes))
            .collect::<Result<Vec<_>>>()?;
        Self::with_sources(config, shutdown, sources)
    }
}

impl<S: ReadingSource> Pipeline<S> {
    /// Pipeline fed by caller-supplied sources, `sources[i]` driving channel `i`.
    ///
    /// # Errors
    /// Returns `ThermoError::InvalidConfig` if `config` does not validate or
    /// the number of sources differs from the number of sensors.
    pub fn with_sources(
        config: PipelineConfig,
        shutdown: ShutdownController,
        sources: Vec<S>,
    ) -> Result<Self> {
        config.validate()?;
        if sources.len() != config.channels() {
            return Err(ThermoError::invalid_config(format!(
                "{} sources supplied for {} sensors",
                sources.len(),
                config.channels()
            )));
        }

        let store = Arc::new(ReadingStore::with_neutral(
            config.channels(),
            config.initial_reading,
        ));

        Ok(Self {
            config,
            shutdown,
            store,
            sources,
            task_handles: Vec::new(),
        })
    }

    /// Configuration the pipeline was built from.
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Controller every task is gated on.
    pub const fn shutdown(&self) -> &ShutdownController {
        &self.shutdown
    }

    /// Store shared by generators and consumers.
    pub const fn store(&self) -> &Arc<ReadingStore> {
        &self.store
    }

    /// Whether tasks have been spawned and not yet joined.
    pub fn is_running(&self) -> bool {
        !self.task_handles.is_empty()
    }

    /// Spawn every generator, then the aggregator and the fault detector.
    ///
    /// Must be called from within a tokio runtime. A second call is a no-op.
    ///
    /// # Errors
    /// Returns `ThermoError::ChannelOutOfRange` if a slot cannot be handed
    /// out, which only happens if the store and sources disagree in size.
    pub fn start(&mut self) -> Result<()> {
        if self.is_running() || self.sources.is_empty() {
            return Ok(());
        }

        let tick = self.config.tick;
        for (index, source) in self.sources.drain(..).enumerate() {
            let slot = self.store.slot(index)?;
            let task = GeneratorTask::new(source, slot, self.shutdown.clone(), tick);
            self.task_handles.push(task.spawn());
        }

        let aggregator = AggregatorTask::new(
            Arc::clone(&self.store),
            self.config.aggregate_log.clone(),
            self.shutdown.clone(),
            tick,
        );
        self.task_handles.push(aggregator.spawn());

        let detector = FaultDetectorTask::new(
            Arc::clone(&self.store),
            self.config.bounds,
            self.config.fault_log.clone(),
            self.shutdown.clone(),
            tick,
        );
        self.task_handles.push(detector.spawn());

        info!(
            "Pipeline started with {} channel(s), tick {:?}",
            self.config.channels(),
            tick
        );
        Ok(())
    }

    /// Wait for every task to finish.
    ///
    /// Tasks only finish once a stop has been requested, so this is meant to
    /// follow [`ShutdownController::await_stop`]. A panicked task is logged
    /// and does not prevent the others from being joined.
    pub async fn join(&mut self) {
        let handles = std::mem::take(&mut self.task_handles);
        for result in join_all(handles).await {
            if let Err(err) = result {
                error!("Pipeline task failed: {err}");
            }
        }
    }

    /// Request a stop and wait for every task to finish.
    pub async fn stop(&mut self) {
        self.shutdown.request_stop();
        self.join().await;
    }
}
