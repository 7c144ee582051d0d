// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Producer loop: one per channel.

use std::time::Duration;
use thermo_core::{info, ChannelSlot, ReadingSource, ShutdownController};
use tokio::task::JoinHandle;

/// Publishes one fresh reading to its slot every tick until stopped.
#[derive(Debug)]
pub struct GeneratorTask<S> {
    source: S,
    slot: ChannelSlot,
    shutdown: ShutdownController,
    tick: Duration,
}

impl<S: ReadingSource> GeneratorTask<S> {
    /// Task publishing `source` readings through `slot` every `tick`.
    pub const fn new(
        source: S,
        slot: ChannelSlot,
        shutdown: ShutdownController,
        tick: Duration,
    ) -> Self {
        Self {
            source,
            slot,
            shutdown,
            tick,
        }
    }

    /// Run the loop on the current tokio runtime.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Publish one reading per tick until a stop is requested.
    pub async fn run(mut self) {
        let index = self.slot.index();
        info!("Sensor simulator started for sensor {index}");

        while !self.shutdown.wait_or_stop(self.tick).await {
            self.slot.publish(self.source.next_value());
        }

        info!("Sensor simulator stopping for sensor {index}");
    }
}
