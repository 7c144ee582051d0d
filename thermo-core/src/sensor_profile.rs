// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use thermo_error::{Result, ThermoError};

/// Reference odds of a fault spike: one reading in ten.
pub const DEFAULT_FAULT_RATE: u32 = 10;

/// Generation parameters of one simulated sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorProfile {
    /// Centre of the nominal reading distribution, in °C
    pub mean: f32,
    /// Standard deviation of nominal readings, in °C
    pub spread: f32,
    /// A reading is replaced by a spike with probability `1 / fault_rate`
    pub fault_rate: u32,
}

impl SensorProfile {
    /// Profile with the reference fault rate.
    pub const fn new(mean: f32, spread: f32) -> Self {
        Self {
            mean,
            spread,
            fault_rate: DEFAULT_FAULT_RATE,
        }
    }

    /// Set the odds of a fault spike to `1 / fault_rate`.
    #[must_use]
    pub const fn with_fault_rate(mut self, fault_rate: u32) -> Self {
        self.fault_rate = fault_rate;
        self
    }

    /// # Errors
    /// Returns `ThermoError::InvalidConfig` for a non-finite mean, a negative
    /// or non-finite spread, or a zero fault rate.
    pub fn validate(&self) -> Result<()> {
        if !self.mean.is_finite() {
            return Err(ThermoError::invalid_config(format!(
                "sensor mean must be finite, got {}",
                self.mean
            )));
        }
        if !self.spread.is_finite() || self.spread < 0.0 {
            return Err(ThermoError::invalid_config(format!(
                "sensor spread must be finite and non-negative, got {}",
                self.spread
            )));
        }
        if self.fault_rate == 0 {
            return Err(ThermoError::invalid_config(
                "fault rate must be at least 1 (1 means every reading spikes)",
            ));
        }
        Ok(())
    }
}
