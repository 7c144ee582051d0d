// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Consumer loop writing every channel and their mean to the aggregate log.

use crate::sink_io::write_blocking;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thermo_core::{info, ReadingStore, ShutdownController};
use thermo_sink::{aggregate_line, timestamp_now, LogSink};
use tokio::task::JoinHandle;

#[derive(Debug)]
pub struct AggregatorTask {
    store: Arc<ReadingStore>,
    destination: PathBuf,
    shutdown: ShutdownController,
    tick: Duration,
}

impl AggregatorTask {
    /// Task appending one aggregate line of `store` to `destination` every `tick`.
    pub fn new(
        store: Arc<ReadingStore>,
        destination: impl Into<PathBuf>,
        shutdown: ShutdownController,
        tick: Duration,
    ) -> Self {
        Self {
            store,
            destination: destination.into(),
            shutdown,
            tick,
        }
    }

    /// Run the loop on the current tokio runtime.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Open the sink, then write one line per tick until stopped.
    ///
    /// Writes run on the blocking pool. The sink is closed when the loop exits.
    pub async fn run(self) {
        let sink = Arc::new(LogSink::open(&self.destination));

        while !self.shutdown.wait_or_stop(self.tick).await {
            let readings = self.store.snapshot();
            write_blocking(&sink, aggregate_line(&timestamp_now(), &readings)).await;
        }

        info!("Aggregator stopped ({})", sink.destination().display());
    }
}
