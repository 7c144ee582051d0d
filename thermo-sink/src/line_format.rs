// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Text layout of the aggregate and fault logs.
//!
//! ```text
//! 2025-01-31 12:00:00   Sensor 0: 50.12 °C, Sensor 1: 49.80 °C, Average: 49.96 °C
//! 2025-01-31 12:00:01    Fault Detected! Sensor: 1 84.31  °C (OUT OF RANGE)
//! ```

use chrono::Local;
use thermo_core::Bounds;

/// Local wall-clock layout used at the start of every line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time in [`TIMESTAMP_FORMAT`].
pub fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Arithmetic mean of `readings`, `None` when there are none.
pub fn mean(readings: &[f32]) -> Option<f32> {
    if readings.is_empty() {
        return None;
    }
    Some(readings.iter().sum::<f32>() / readings.len() as f32)
}

/// One aggregate line listing every channel and their mean.
///
/// Returns an empty string when there is nothing to aggregate.
pub fn aggregate_line(timestamp: &str, readings: &[f32]) -> String {
    let Some(average) = mean(readings) else {
        return String::new();
    };

    let channels = readings
        .iter()
        .enumerate()
        .map(|(index, value)| format!("Sensor {index}: {value:.2} °C"))
        .collect::<Vec<_>>()
        .join(", ");

    format!("{timestamp}   {channels}, Average: {average:.2} °C\n")
}

/// One fault line for channel `index` holding `value`.
pub fn fault_line(timestamp: &str, index: usize, value: f32) -> String {
    format!("{timestamp}    Fault Detected! Sensor: {index} {value:.2}  °C (OUT OF RANGE)\n")
}

/// Concatenated fault lines for every out-of-range channel.
///
/// In-range channels contribute nothing, so a healthy snapshot yields an
/// empty string.
pub fn fault_lines(timestamp: &str, readings: &[f32], bounds: &Bounds) -> String {
    readings
        .iter()
        .enumerate()
        .filter(|(_, value)| bounds.is_fault(**value))
        .map(|(index, value)| fault_line(timestamp, index, *value))
        .collect()
}
