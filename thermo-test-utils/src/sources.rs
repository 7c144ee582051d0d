// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::VecDeque;
use thermo_core::ReadingSource;

/// Source that always yields the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedReading(pub f32);

impl ReadingSource for FixedReading {
    fn next_value(&mut self) -> f32 {
        self.0
    }
}

/// Source that plays back a script, then repeats its last value.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedReadings {
    pending: VecDeque<f32>,
    last: f32,
}

impl ScriptedReadings {
    /// # Panics
    /// Panics if `values` is empty.
    pub fn new(values: impl IntoIterator<Item = f32>) -> Self {
        let pending: VecDeque<f32> = values.into_iter().collect();
        let last = *pending.back().expect("script needs at least one value");
        Self { pending, last }
    }
}

impl ReadingSource for ScriptedReadings {
    fn next_value(&mut self) -> f32 {
        self.pending.pop_front().unwrap_or(self.last)
    }
}
