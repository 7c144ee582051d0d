// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Simulated sensor readings with occasional fault spikes.
//!
//! A [`ReadingGenerator`] draws nominal readings from a normal distribution
//! around its profile's mean. With probability `1 / fault_rate` a reading is
//! replaced by a spike drawn uniformly from either the low or the high
//! [`SpikeRanges`], each side chosen with equal probability.
//!
//! The random stream is injectable so tests can assert the statistical shape
//! of the output:
//!
//! ```
//! use rand::rngs::StdRng;
//! use thermo_core::{ReadingGenerator, SensorProfile, SpikeRanges};
//!
//! let profile = SensorProfile::new(50.0, 2.0).with_fault_rate(1);
//! let mut generator =
//!     ReadingGenerator::<StdRng>::seeded(profile, SpikeRanges::default(), 7).unwrap();
//!
//! // fault rate 1: every reading is a spike
//! let value = generator.next_value();
//! assert!(value < 30.0 || value > 70.0);
//! ```

use crate::{SensorProfile, SpikeRanges};
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;
use thermo_error::{Result, ThermoError};

/// Anything that can hand out the next reading of one channel.
///
/// [`ReadingGenerator`] is the production source; tests plug in fixed or
/// scripted sources to drive the pipeline deterministically.
pub trait ReadingSource: Send + 'static {
    fn next_value(&mut self) -> f32;
}

/// Which branch produced a [`Sample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleKind {
    Nominal,
    LowSpike,
    HighSpike,
}

impl SampleKind {
    /// `true` for either spike kind.
    pub const fn is_fault(self) -> bool {
        !matches!(self, Self::Nominal)
    }
}

/// One generated reading together with the branch it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub value: f32,
    pub kind: SampleKind,
}

/// Reading generator owned by exactly one generator task.
#[derive(Debug)]
pub struct ReadingGenerator<R = StdRng> {
    profile: SensorProfile,
    spikes: SpikeRanges,
    nominal: Normal<f32>,
    low_spike: Uniform<f32>,
    high_spike: Uniform<f32>,
    rng: R,
}

impl ReadingGenerator<StdRng> {
    /// Generator backed by an OS-seeded `StdRng`.
    ///
    /// # Errors
    /// See [`ReadingGenerator::with_rng`].
    pub fn new(profile: SensorProfile, spikes: SpikeRanges) -> Result<Self> {
        Self::with_rng(profile, spikes, StdRng::from_os_rng())
    }
}

impl<R: Rng + SeedableRng> ReadingGenerator<R> {
    /// Generator with a reproducible random stream.
    ///
    /// # Errors
    /// See [`ReadingGenerator::with_rng`].
    pub fn seeded(profile: SensorProfile, spikes: SpikeRanges, seed: u64) -> Result<Self> {
        Self::with_rng(profile, spikes, R::seed_from_u64(seed))
    }
}

impl<R> ReadingGenerator<R> {
    /// Profile this generator was built from.
    pub const fn profile(&self) -> &SensorProfile {
        &self.profile
    }

    /// Spike ranges this generator draws faults from.
    pub const fn spikes(&self) -> &SpikeRanges {
        &self.spikes
    }
}

impl<R: Rng> ReadingGenerator<R> {
    /// Generator drawing from the given random stream.
    ///
    /// # Errors
    /// Returns `ThermoError::InvalidConfig` if the profile is invalid or a
    /// spike range is empty.
    pub fn with_rng(profile: SensorProfile, spikes: SpikeRanges, rng: R) -> Result<Self> {
        profile.validate()?;

        let nominal = Normal::new(profile.mean, profile.spread)
            .map_err(|e| ThermoError::invalid_config(format!("nominal distribution: {e}")))?;
        let low_spike = Uniform::new_inclusive(*spikes.low().start(), *spikes.low().end())
            .map_err(|e| ThermoError::invalid_config(format!("low spike range: {e}")))?;
        let high_spike = Uniform::new_inclusive(*spikes.high().start(), *spikes.high().end())
            .map_err(|e| ThermoError::invalid_config(format!("high spike range: {e}")))?;

        Ok(Self {
            profile,
            spikes,
            nominal,
            low_spike,
            high_spike,
            rng,
        })
    }

    /// Draw the next reading and report which branch produced it.
    pub fn sample(&mut self) -> Sample {
        if !self.rng.random_ratio(1, self.profile.fault_rate) {
            return Sample {
                value: self.nominal.sample(&mut self.rng),
                kind: SampleKind::Nominal,
            };
        }

        if self.rng.random_bool(0.5) {
            Sample {
                value: self.high_spike.sample(&mut self.rng),
                kind: SampleKind::HighSpike,
            }
        } else {
            Sample {
                value: self.low_spike.sample(&mut self.rng),
                kind: SampleKind::LowSpike,
            }
        }
    }

    /// Draw the next reading.
    pub fn next_value(&mut self) -> f32 {
        self.sample().value
    }
}

impl<R: Rng> Iterator for ReadingGenerator<R> {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        Some(self.sample().value)
    }
}

impl<R: Rng + Send + 'static> ReadingSource for ReadingGenerator<R> {
    fn next_value(&mut self) -> f32 {
        self.sample().value
    }
}
