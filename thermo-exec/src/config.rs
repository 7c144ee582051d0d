// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pipeline configuration.
//!
//! [`PipelineConfig::default`] is the reference setup: two sensors centred on
//! 50 °C with spreads of 2 and 3, nominal bounds of 30 to 70 °C, a one second
//! tick, and logs written to `temperature_log.txt` and `fault_log.txt`.

use std::path::PathBuf;
use std::time::Duration;
use thermo_core::{Bounds, SensorProfile, SpikeRanges, NEUTRAL_READING};
use thermo_error::{Result, ThermoError};

pub const DEFAULT_TICK: Duration = Duration::from_secs(1);
pub const DEFAULT_AGGREGATE_LOG: &str = "temperature_log.txt";
pub const DEFAULT_FAULT_LOG: &str = "fault_log.txt";

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// One profile per channel; channel `i` is `sensors[i]`
    pub sensors: Vec<SensorProfile>,
    pub bounds: Bounds,
    /// Spike ranges; `None` derives them from `bounds`
    pub spikes: Option<SpikeRanges>,
    /// Value every channel reports before its first reading
    pub initial_reading: f32,
    pub tick: Duration,
    pub aggregate_log: PathBuf,
    pub fault_log: PathBuf,
}

impl PipelineConfig {
    /// Replace the sensor profiles.
    #[must_use]
    pub fn with_sensors(mut self, sensors: impl IntoIterator<Item = SensorProfile>) -> Self {
        self.sensors = sensors.into_iter().collect();
        self
    }

    /// Set the nominal bounds.
    #[must_use]
    pub const fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Override the spike ranges derived from the bounds.
    #[must_use]
    pub const fn with_spikes(mut self, spikes: SpikeRanges) -> Self {
        self.spikes = Some(spikes);
        self
    }

    /// Set the value every channel reports before its first reading.
    #[must_use]
    pub const fn with_initial_reading(mut self, initial_reading: f32) -> Self {
        self.initial_reading = initial_reading;
        self
    }

    /// Set the shared tick.
    #[must_use]
    pub const fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Set the aggregate log destination.
    #[must_use]
    pub fn with_aggregate_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.aggregate_log = path.into();
        self
    }

    /// Set the fault log destination.
    #[must_use]
    pub fn with_fault_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.fault_log = path.into();
        self
    }

    /// Number of sensor channels.
    pub fn channels(&self) -> usize {
        self.sensors.len()
    }

    /// Effective spike ranges: the override, or the reference ranges around `bounds`.
    pub fn spikes(&self) -> SpikeRanges {
        self.spikes.unwrap_or_else(|| SpikeRanges::around(self.bounds))
    }

    /// # Errors
    /// Returns `ThermoError::InvalidConfig` when there are no sensors, a
    /// profile or the spike ranges are invalid, the tick is zero, both logs
    /// name the same file, or the initial reading is not finite.
    pub fn validate(&self) -> Result<()> {
        if self.sensors.is_empty() {
            return Err(ThermoError::invalid_config("at least one sensor is required"));
        }
        for (index, profile) in self.sensors.iter().enumerate() {
            profile.validate().map_err(|err| match err {
                ThermoError::InvalidConfig { context } => {
                    ThermoError::invalid_config(format!("sensor {index}: {context}"))
                }
                other => other,
            })?;
        }
        self.spikes().validate(&self.bounds)?;
        if self.tick.is_zero() {
            return Err(ThermoError::invalid_config("tick must be longer than zero"));
        }
        if self.aggregate_log == self.fault_log {
            return Err(ThermoError::invalid_config(
                "aggregate and fault logs must be different files",
            ));
        }
        if !self.initial_reading.is_finite() {
            return Err(ThermoError::invalid_config(format!(
                "initial reading must be finite, got {}",
                self.initial_reading
            )));
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sensors: vec![SensorProfile::new(50.0, 2.0), SensorProfile::new(50.0, 3.0)],
            bounds: Bounds::REFERENCE,
            spikes: None,
            initial_reading: NEUTRAL_READING,
            tick: DEFAULT_TICK,
            aggregate_log: PathBuf::from(DEFAULT_AGGREGATE_LOG),
            fault_log: PathBuf::from(DEFAULT_FAULT_LOG),
        }
    }
}
