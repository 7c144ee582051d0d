// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Process-wide stop flag with a bounded wake cadence.
//!
//! Every pipeline loop calls [`ShutdownController::wait_or_stop`] once per
//! iteration. The call doubles as the loop's tick: it sleeps for one tick and
//! returns `false`, or returns `true` as soon as a stop is requested, so every
//! loop reacts to [`ShutdownController::request_stop`] within one tick.

use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};
use core::time::Duration;
use event_listener::{Event, EventListener, Listener};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared stop flag plus broadcast wake-up.
///
/// Cloning yields another handle to the same state. The flag is set at most
/// once; further `request_stop` calls are no-ops.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use thermo_core::ShutdownController;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let shutdown = ShutdownController::new();
/// let worker = shutdown.clone();
///
/// let handle = tokio::spawn(async move {
///     let mut ticks = 0;
///     while !worker.wait_or_stop(Duration::from_millis(10)).await {
///         ticks += 1;
///     }
///     ticks
/// });
///
/// tokio::time::sleep(Duration::from_millis(35)).await;
/// shutdown.request_stop();
/// handle.await.unwrap();
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ShutdownController {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    stop_requested: AtomicBool,
    event: Event,
}

impl ShutdownController {
    /// Create a controller with the stop flag cleared.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                stop_requested: AtomicBool::new(false),
                event: Event::new(),
            }),
        }
    }

    /// Set the stop flag and wake every waiter. Idempotent.
    pub fn request_stop(&self) {
        // Flag before notify so a woken waiter always observes it
        self.inner.stop_requested.store(true, Ordering::Release);
        self.inner.event.notify(usize::MAX);
    }

    /// Whether a stop has been requested.
    pub fn is_stop_requested(&self) -> bool {
        self.inner.stop_requested.load(Ordering::Acquire)
    }

    /// Future resolving once a stop has been requested.
    pub fn stopped(&self) -> Stopped<'_> {
        Stopped {
            controller: self,
            listener: None,
        }
    }

    /// Wait until a stop has been requested. Used once by the main line of control.
    pub async fn await_stop(&self) {
        self.stopped().await;
    }

    /// Sleep for `timeout` unless a stop is requested first.
    ///
    /// Returns `true` when stopping (immediately if the flag is already set),
    /// `false` when the full timeout elapsed.
    pub async fn wait_or_stop(&self, timeout: Duration) -> bool {
        if self.is_stop_requested() {
            return true;
        }

        tokio::select! {
            biased;
            () = self.stopped() => true,
            () = tokio::time::sleep(timeout) => self.is_stop_requested(),
        }
    }

    /// Blocking twin of [`wait_or_stop`](Self::wait_or_stop) for plain OS threads.
    pub fn wait_or_stop_blocking(&self, timeout: Duration) -> bool {
        if self.is_stop_requested() {
            return true;
        }

        let listener = self.inner.event.listen();

        // cancel may have landed between the first check and listen()
        if self.is_stop_requested() {
            return true;
        }

        let _ = listener.wait_timeout(timeout);
        self.is_stop_requested()
    }
}

impl Default for ShutdownController {
    fn default() -> Self {
        Self::new()
    }
}

/// Future returned by [`ShutdownController::stopped`].
#[derive(Debug)]
pub struct Stopped<'a> {
    controller: &'a ShutdownController,
    listener: Option<EventListener>,
}

impl Future for Stopped<'_> {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let this = self.get_mut();

        loop {
            if this.controller.is_stop_requested() {
                return Poll::Ready(());
            }

            match this.listener.as_mut() {
                // Register, then loop to re-check the flag before parking
                None => this.listener = Some(this.controller.inner.event.listen()),
                Some(listener) => {
                    ready!(Pin::new(listener).poll(cx));
                    this.listener = None;
                }
            }
        }
    }
}
