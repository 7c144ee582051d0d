// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rand_chacha::ChaCha8Rng;
use std::time::Duration;
use thermo_core::{ReadingGenerator, SensorProfile, SpikeRanges};
use tokio::time::{sleep, Instant};

/// Reproducible generator around the reference spike ranges.
///
/// # Panics
/// Panics if `profile` is invalid.
pub fn seeded_generator(profile: SensorProfile, seed: u64) -> ReadingGenerator<ChaCha8Rng> {
    ReadingGenerator::seeded(profile, SpikeRanges::default(), seed)
        .expect("test profile must be valid")
}

/// Poll `condition` every 10ms until it holds or `timeout` passes.
///
/// Returns whether the condition was met.
pub async fn wait_until<F>(timeout: Duration, mut condition: F) -> bool
where
    F: FnMut() -> bool,
{
    let deadline = Instant::now() + timeout;
    loop {
        if condition() {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        sleep(Duration::from_millis(10)).await;
    }
}
