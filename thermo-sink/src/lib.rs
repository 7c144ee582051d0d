// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Append-only log sinks and the line formats written to them.

pub mod line_format;
pub mod log_sink;

pub use self::line_format::{aggregate_line, fault_line, fault_lines, mean, timestamp_now};
pub use self::log_sink::LogSink;
