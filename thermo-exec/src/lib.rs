// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Task loops of the Thermo pipeline and the [`Pipeline`] that wires them.
//!
//! Every loop follows the same shape: wait one tick or until a stop is
//! requested, do one unit of work, repeat. Loops never communicate with each
//! other except through the [`ReadingStore`](thermo_core::ReadingStore).

pub mod aggregator_task;
pub mod config;
pub mod fault_detector_task;
pub mod generator_task;
pub mod pipeline;
mod sink_io;

pub use self::aggregator_task::AggregatorTask;
pub use self::config::{PipelineConfig, DEFAULT_AGGREGATE_LOG, DEFAULT_FAULT_LOG, DEFAULT_TICK};
pub use self::fault_detector_task::FaultDetectorTask;
pub use self::generator_task::GeneratorTask;
pub use self::pipeline::Pipeline;
