// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core building blocks of the Thermo telemetry pipeline: simulated reading
//! generators, the lock-free latest-value store, and the shutdown controller
//! every loop is gated on.

pub mod bounds;
pub mod logging;
pub mod reading_generator;
pub mod reading_store;
pub mod sensor_profile;
pub mod shutdown;

pub use self::bounds::{Bounds, SpikeRanges};
pub use self::reading_generator::{ReadingGenerator, ReadingSource, Sample, SampleKind};
pub use self::reading_store::{ChannelSlot, ReadingStore, NEUTRAL_READING};
pub use self::sensor_profile::{SensorProfile, DEFAULT_FAULT_RATE};
pub use self::shutdown::{ShutdownController, Stopped};
pub use thermo_error::{Result, ThermoError};
