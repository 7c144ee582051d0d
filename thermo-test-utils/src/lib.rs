// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the Thermo telemetry pipeline.
//!
//! Designed for development and testing only, not for production code.
//!
//! # Key Types
//!
//! - [`FixedReading`] / [`ScriptedReadings`]: deterministic [`ReadingSource`]s
//!   that stand in for the random generator.
//! - [`TempLogDir`]: a throw-away directory for log sinks, with helpers to read
//!   the files back.
//! - [`seeded_generator`]: a reproducible `ReadingGenerator` for statistical tests.
//!
//! ```rust
//! use thermo_core::ReadingSource;
//! use thermo_test_utils::ScriptedReadings;
//!
//! let mut source = ScriptedReadings::new([25.0, 50.0]);
//! assert_eq!(source.next_value(), 25.0);
//! assert_eq!(source.next_value(), 50.0);
//! // the last value repeats once the script runs out
//! assert_eq!(source.next_value(), 50.0);
//! ```
//!
//! [`ReadingSource`]: thermo_core::ReadingSource

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod sources;
pub mod temp_log;

pub use helpers::{seeded_generator, wait_until};
pub use sources::{FixedReading, ScriptedReadings};
pub use temp_log::TempLogDir;
