// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Nominal temperature bounds and the fault-spike ranges around them.

use core::ops::RangeInclusive;
use thermo_error::{Result, ThermoError};

/// Lowest value a low spike can take in the reference configuration.
pub const SPIKE_FLOOR: f32 = 10.0;

/// Highest value a high spike can take in the reference configuration.
pub const SPIKE_CEILING: f32 = 90.0;

/// Gap kept between the nominal bounds and the nearest spike value.
pub const SPIKE_MARGIN: f32 = 1.0;

/// Inclusive nominal range `[min, max]` a healthy reading falls into.
///
/// Anything strictly below `min` or strictly above `max` is a fault.
/// `NaN` is never contained and therefore always a fault.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min: f32,
    max: f32,
}

impl Bounds {
    /// Reference bounds: 30 °C to 70 °C.
    pub const REFERENCE: Self = Self {
        min: 30.0,
        max: 70.0,
    };

    /// Create bounds, rejecting non-finite or empty ranges.
    ///
    /// # Errors
    /// Returns `ThermoError::InvalidConfig` unless `min < max` and both are finite.
    pub fn new(min: f32, max: f32) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ThermoError::invalid_config(format!(
                "bounds must be finite, got [{min}, {max}]"
            )));
        }
        if min >= max {
            return Err(ThermoError::invalid_config(format!(
                "bounds minimum {min} must be below maximum {max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Lowest nominal value.
    pub const fn min(&self) -> f32 {
        self.min
    }

    /// Highest nominal value.
    pub const fn max(&self) -> f32 {
        self.max
    }

    /// `true` when `value` lies inside `[min, max]`.
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// `true` when `value` is out of range.
    pub fn is_fault(&self, value: f32) -> bool {
        !self.contains(value)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// The two disjoint ranges fault spikes are drawn from.
///
/// The low range sits entirely below the nominal minimum and the high range
/// entirely above the nominal maximum; [`SpikeRanges::validate`] enforces it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpikeRanges {
    low_min: f32,
    low_max: f32,
    high_min: f32,
    high_max: f32,
}

impl SpikeRanges {
    /// Explicit spike ranges `[low_min, low_max]` and `[high_min, high_max]`.
    pub const fn new(low_min: f32, low_max: f32, high_min: f32, high_max: f32) -> Self {
        Self {
            low_min,
            low_max,
            high_min,
            high_max,
        }
    }

    /// Reference ranges for `bounds`: low `[10, min - 1]`, high `[max + 1, 90]`.
    pub fn around(bounds: Bounds) -> Self {
        Self {
            low_min: SPIKE_FLOOR,
            low_max: bounds.min() - SPIKE_MARGIN,
            high_min: bounds.max() + SPIKE_MARGIN,
            high_max: SPIKE_CEILING,
        }
    }

    /// Range low spikes are drawn from.
    pub fn low(&self) -> RangeInclusive<f32> {
        self.low_min..=self.low_max
    }

    /// Range high spikes are drawn from.
    pub fn high(&self) -> RangeInclusive<f32> {
        self.high_min..=self.high_max
    }

    /// Check the ranges are non-empty and strictly outside `bounds`.
    ///
    /// # Errors
    /// Returns `ThermoError::InvalidConfig` describing the first violated rule.
    pub fn validate(&self, bounds: &Bounds) -> Result<()> {
        let all_finite = [self.low_min, self.low_max, self.high_min, self.high_max]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(ThermoError::invalid_config("spike ranges must be finite"));
        }
        if self.low_min > self.low_max {
            return Err(ThermoError::invalid_config(format!(
                "low spike range [{}, {}] is empty",
                self.low_min, self.low_max
            )));
        }
        if self.high_min > self.high_max {
            return Err(ThermoError::invalid_config(format!(
                "high spike range [{}, {}] is empty",
                self.high_min, self.high_max
            )));
        }
        if self.low_max >= bounds.min() {
            return Err(ThermoError::invalid_config(format!(
                "low spike maximum {} must be below nominal minimum {}",
                self.low_max,
                bounds.min()
            )));
        }
        if self.high_min <= bounds.max() {
            return Err(ThermoError::invalid_config(format!(
                "high spike minimum {} must be above nominal maximum {}",
                self.high_min,
                bounds.max()
            )));
        }
        Ok(())
    }
}

impl Default for SpikeRanges {
    fn default() -> Self {
        Self::around(Bounds::REFERENCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_bounds_are_inclusive() {
        // Arrange
        let bounds = Bounds::default();

        // Act & Assert
        assert!(bounds.contains(30.0));
        assert!(bounds.contains(70.0));
        assert!(bounds.is_fault(29.99));
        assert!(bounds.is_fault(70.01));
        assert!(bounds.is_fault(f32::NAN));
    }

    #[test]
    fn test_bounds_reject_empty_and_non_finite() {
        // Arrange & Act
        let reversed = Bounds::new(70.0, 30.0);
        let empty = Bounds::new(30.0, 30.0);
        let infinite = Bounds::new(f32::NEG_INFINITY, 30.0);

        // Assert
        assert!(reversed.is_err());
        assert!(empty.is_err());
        assert!(infinite.is_err());
    }

    #[test]
    fn test_reference_spikes_follow_bounds() -> anyhow::Result<()> {
        // Arrange & Act
        let spikes = SpikeRanges::default();

        // Assert
        assert_eq!(spikes.low(), 10.0..=29.0);
        assert_eq!(spikes.high(), 71.0..=90.0);
        spikes.validate(&Bounds::REFERENCE)?;
        Ok(())
    }

    #[test]
    fn test_spikes_overlapping_bounds_are_rejected() {
        // Arrange
        let bounds = Bounds::REFERENCE;
        let low_touches_min = SpikeRanges::new(10.0, 30.0, 71.0, 90.0);
        let high_touches_max = SpikeRanges::new(10.0, 29.0, 70.0, 90.0);
        let low_reversed = SpikeRanges::new(20.0, 10.0, 71.0, 90.0);

        // Act & Assert
        assert!(low_touches_min.validate(&bounds).is_err());
        assert!(high_touches_max.validate(&bounds).is_err());
        assert!(low_reversed.validate(&bounds).is_err());
    }

    #[test]
    fn test_narrow_bounds_produce_an_empty_low_range() -> anyhow::Result<()> {
        // Arrange
        let bounds = Bounds::new(5.0, 95.0)?;

        // Act
        let result = SpikeRanges::around(bounds).validate(&bounds);

        // Assert
        assert!(result.is_err());
        Ok(())
    }
}
