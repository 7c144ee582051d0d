// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;
use thermo_core::error;
use thermo_sink::LogSink;

/// Append `text` to `sink` on the blocking pool and wait for it.
///
/// `LogSink::write` syncs to disk, so it must not run on an async worker.
/// Awaiting the write keeps one consumer's lines in tick order.
pub(crate) async fn write_blocking(sink: &Arc<LogSink>, text: String) {
    if text.is_empty() {
        return;
    }

    let sink = Arc::clone(sink);
    if let Err(err) = tokio::task::spawn_blocking(move || sink.write(&text)).await {
        error!("Log write task failed: {err}");
    }
}
