// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Consumer loop logging every out-of-range channel.

use crate::sink_io::write_blocking;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thermo_core::{debug, info, Bounds, ReadingStore, ShutdownController};
use thermo_sink::{fault_lines, timestamp_now, LogSink};
use tokio::task::JoinHandle;

#[derive(Debug)]
pub struct FaultDetectorTask {
    store: Arc<ReadingStore>,
    bounds: Bounds,
    destination: PathBuf,
    shutdown: ShutdownController,
    tick: Duration,
}

impl FaultDetectorTask {
    /// Task appending the channels of `store` outside `bounds` to `destination` every `tick`.
    pub fn new(
        store: Arc<ReadingStore>,
        bounds: Bounds,
        destination: impl Into<PathBuf>,
        shutdown: ShutdownController,
        tick: Duration,
    ) -> Self {
        Self {
            store,
            bounds,
            destination: destination.into(),
            shutdown,
            tick,
        }
    }

    /// Run the loop on the current tokio runtime.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Open the sink, then write one batch of fault lines per tick until stopped.
    ///
    /// Writes run on the blocking pool. A tick without faults writes nothing.
    pub async fn run(self) {
        let sink = Arc::new(LogSink::open(&self.destination));

        while !self.shutdown.wait_or_stop(self.tick).await {
            let readings = self.store.snapshot();
            let batch = fault_lines(&timestamp_now(), &readings, &self.bounds);
            if !batch.is_empty() {
                debug!("{} channel(s) out of range", batch.lines().count());
            }
            write_blocking(&sink, batch).await;
        }

        info!("Fault detector stopped ({})", sink.destination().display());
    }
}
