// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lock-free latest-value store, one slot per sensor channel.
//!
//! Each slot is an independent atomic cell holding the bit pattern of an
//! `f32`. Publishing to one slot and reading another are unordered with
//! respect to each other: a consumer reading every channel in turn may see
//! channel 0 from one tick and channel 1 from the next. That torn view is
//! accepted; no lock ties the slots together.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use thermo_error::{Result, ThermoError};

/// Value every slot holds before its generator first publishes.
pub const NEUTRAL_READING: f32 = 50.0;

/// Fixed-size table of per-channel readings, last write wins.
#[derive(Debug)]
pub struct ReadingStore {
    slots: Box<[AtomicU32]>,
    neutral: f32,
}

impl ReadingStore {
    /// Store with `channels` slots, all holding [`NEUTRAL_READING`].
    pub fn new(channels: usize) -> Self {
        Self::with_neutral(channels, NEUTRAL_READING)
    }

    /// Store with `channels` slots, all holding `neutral`.
    pub fn with_neutral(channels: usize, neutral: f32) -> Self {
        let slots = (0..channels)
            .map(|_| AtomicU32::new(neutral.to_bits()))
            .collect();
        Self { slots, neutral }
    }

    /// Number of slots.
    pub fn channels(&self) -> usize {
        self.slots.len()
    }

    /// Value the slots held before any publish.
    pub const fn neutral(&self) -> f32 {
        self.neutral
    }

    /// Store `value` in slot `index`. Out-of-range indices are ignored.
    pub fn publish(&self, index: usize, value: f32) {
        if let Some(slot) = self.slots.get(index) {
            slot.store(value.to_bits(), Ordering::Release);
        }
    }

    /// Latest value of slot `index`, or the neutral value if out of range.
    pub fn read(&self, index: usize) -> f32 {
        self.slots
            .get(index)
            .map_or(self.neutral, |slot| f32::from_bits(slot.load(Ordering::Acquire)))
    }

    /// Checked variant of [`read`](Self::read).
    ///
    /// # Errors
    /// Returns `ThermoError::ChannelOutOfRange` if `index` is not a channel.
    pub fn get(&self, index: usize) -> Result<f32> {
        self.slots
            .get(index)
            .map(|slot| f32::from_bits(slot.load(Ordering::Acquire)))
            .ok_or_else(|| ThermoError::out_of_range(index, self.channels()))
    }

    /// Checked variant of [`publish`](Self::publish).
    ///
    /// # Errors
    /// Returns `ThermoError::ChannelOutOfRange` if `index` is not a channel.
    pub fn try_publish(&self, index: usize, value: f32) -> Result<()> {
        let slot = self
            .slots
            .get(index)
            .ok_or_else(|| ThermoError::out_of_range(index, self.channels()))?;
        slot.store(value.to_bits(), Ordering::Release);
        Ok(())
    }

    /// Read every slot in index order.
    ///
    /// Each slot is loaded on its own; the result is not a consistent cut
    /// across channels.
    pub fn snapshot(&self) -> Vec<f32> {
        self.slots
            .iter()
            .map(|slot| f32::from_bits(slot.load(Ordering::Acquire)))
            .collect()
    }

    /// Hand out the write handle for slot `index`.
    ///
    /// # Errors
    /// Returns `ThermoError::ChannelOutOfRange` if `index` is not a channel.
    pub fn slot(self: &Arc<Self>, index: usize) -> Result<ChannelSlot> {
        if index >= self.channels() {
            return Err(ThermoError::out_of_range(index, self.channels()));
        }
        Ok(ChannelSlot {
            store: Arc::clone(self),
            index,
        })
    }
}

/// Write handle to a single store slot, owned by that channel's generator.
///
/// The index is checked once when the handle is created, so publishing
/// through it never misses.
#[derive(Debug)]
pub struct ChannelSlot {
    store: Arc<ReadingStore>,
    index: usize,
}

impl ChannelSlot {
    /// Channel this handle writes to.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Store `value` in this channel's slot.
    pub fn publish(&self, value: f32) {
        self.store.publish(self.index, value);
    }

    /// Latest value of this channel.
    pub fn read(&self) -> f32 {
        self.store.read(self.index)
    }
}
