// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Serialized append-only text sink.
//!
//! A [`LogSink`] owns one file opened for append and a lock around it. Every
//! [`write`](LogSink::write) appends its text in one piece and syncs it to
//! disk before releasing the lock, so concurrent writers never interleave.
//!
//! A sink whose destination could not be opened is *degraded*: the failure is
//! reported once at open time and every later write is dropped.

use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thermo_core::{error, info, warn};
use thermo_error::{Result, ThermoError};

/// Append-only destination for formatted log lines.
///
/// Not `Clone`: share it behind `&LogSink` or `Arc<LogSink>`. The file is
/// closed when the sink is dropped.
#[derive(Debug)]
pub struct LogSink {
    destination: PathBuf,
    file: Option<Mutex<File>>,
}

impl LogSink {
    /// Open `destination` for append, degrading instead of failing.
    pub fn open(destination: impl AsRef<Path>) -> Self {
        let destination = destination.as_ref();
        match Self::try_open(destination) {
            Ok(sink) => sink,
            Err(err) => {
                error!("{err}; writes to this sink will be dropped");
                Self {
                    destination: destination.to_path_buf(),
                    file: None,
                }
            }
        }
    }

    /// Open `destination` for append, creating it if needed.
    ///
    /// # Errors
    /// Returns `ThermoError::SinkOpen` if the file cannot be opened.
    pub fn try_open(destination: impl AsRef<Path>) -> Result<Self> {
        let destination = destination.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&destination)
            .map_err(|source| ThermoError::sink_open(&destination, source))?;

        info!("{} logging...", destination.display());

        Ok(Self {
            destination,
            file: Some(Mutex::new(file)),
        })
    }

    /// Path this sink appends to.
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// `true` when the destination failed to open and writes are dropped.
    pub fn is_degraded(&self) -> bool {
        self.file.is_none()
    }

    /// Append `text` verbatim and sync it to disk.
    ///
    /// No-op for empty text or a degraded sink. I/O failures are logged and
    /// swallowed.
    pub fn write(&self, text: &str) {
        if text.is_empty() {
            return;
        }
        let Some(file) = &self.file else {
            return;
        };

        let mut file = file.lock();
        if let Err(err) = append(&mut file, text) {
            warn!(
                "Failed to append to log file {}: {err}",
                self.destination.display()
            );
        }
    }
}

fn append(file: &mut File, text: &str) -> io::Result<()> {
    file.write_all(text.as_bytes())?;
    file.flush()?;
    file.sync_data()
}
