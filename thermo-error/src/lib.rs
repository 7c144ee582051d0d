// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the Thermo telemetry pipeline
//!
//! Failures in the pipeline are handled where they happen: out-of-range
//! `publish`/`read` calls are silently ignored and a sink that cannot be
//! opened degrades to a silent sink. [`ThermoError`] is what the *checked*
//! APIs return, plus configuration validation before any task starts.
//!
//! # Examples
//!
//! ```
//! use thermo_error::{Result, ThermoError};
//!
//! fn lookup(index: usize, channels: usize) -> Result<usize> {
//!     if index >= channels {
//!         return Err(ThermoError::out_of_range(index, channels));
//!     }
//!     Ok(index)
//! }
//!
//! assert!(lookup(2, 2).is_err());
//! ```

use std::io;
use std::path::PathBuf;

/// Root error type for all Thermo operations
#[derive(Debug, thiserror::Error)]
pub enum ThermoError {
    /// A channel index outside `[0, channels)` was used with a checked accessor
    #[error("Channel {index} out of range: store has {channels} channels")]
    ChannelOutOfRange {
        /// The offending index
        index: usize,
        /// Number of channels the store was built with
        channels: usize,
    },

    /// Configuration or generator parameters were rejected
    #[error("Invalid configuration: {context}")]
    InvalidConfig {
        /// What was wrong with the configuration
        context: String,
    },

    /// A log destination could not be opened for append
    #[error("Failed to open log sink {}: {source}", destination.display())]
    SinkOpen {
        /// Path that was being opened
        destination: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },
}

impl ThermoError {
    /// Create a channel lookup failure
    pub const fn out_of_range(index: usize, channels: usize) -> Self {
        Self::ChannelOutOfRange { index, channels }
    }

    /// Create a configuration error with the given context
    pub fn invalid_config(context: impl Into<String>) -> Self {
        Self::InvalidConfig {
            context: context.into(),
        }
    }

    /// Create a sink-open error for `destination`
    pub fn sink_open(destination: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::SinkOpen {
            destination: destination.into(),
            source,
        }
    }

    /// Check whether the failure stems from configuration rather than runtime state
    ///
    /// Configuration errors are surfaced before the pipeline starts; the
    /// other variants can occur while it runs and are never fatal to a loop.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }
}

/// Specialized Result type for Thermo operations
pub type Result<T> = std::result::Result<T, ThermoError>;
