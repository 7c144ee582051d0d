// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::thread;
use std::time::{Duration, Instant};
use thermo_core::ShutdownController;
use thermo_test_utils::wait_until;

const TICK: Duration = Duration::from_secs(1);

// ============================================================================
// Flag semantics
// ============================================================================

#[test]
fn test_new_controller_not_stopped() {
    // Arrange & Act
    let shutdown = ShutdownController::new();

    // Assert
    assert!(!shutdown.is_stop_requested());
}

#[test]
fn test_request_stop_is_idempotent() {
    // Arrange
    let shutdown = ShutdownController::default();

    // Act
    shutdown.request_stop();
    shutdown.request_stop();
    shutdown.request_stop();

    // Assert
    assert!(shutdown.is_stop_requested());
}

#[test]
fn test_clones_share_state() {
    // Arrange
    let shutdown = ShutdownController::new();
    let handle = shutdown.clone();

    // Act
    handle.request_stop();

    // Assert
    assert!(shutdown.is_stop_requested());
}

// ============================================================================
// Async waits
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_wait_or_stop_times_out_without_stop() {
    // Arrange
    let shutdown = ShutdownController::new();
    let started = tokio::time::Instant::now();

    // Act
    let stopped = shutdown.wait_or_stop(TICK).await;

    // Assert
    assert!(!stopped);
    assert!(started.elapsed() >= TICK);
}

#[tokio::test(start_paused = true)]
async fn test_wait_or_stop_returns_immediately_when_already_stopped() {
    // Arrange
    let shutdown = ShutdownController::new();
    shutdown.request_stop();
    let started = tokio::time::Instant::now();

    // Act
    let stopped = shutdown.wait_or_stop(TICK).await;

    // Assert
    assert!(stopped);
    assert_eq!(started.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_wait_or_stop_abandons_remaining_timeout() -> anyhow::Result<()> {
    // Arrange
    let shutdown = ShutdownController::new();
    let waiter = shutdown.clone();
    let handle = tokio::spawn(async move {
        let started = tokio::time::Instant::now();
        let stopped = waiter.wait_or_stop(Duration::from_secs(60)).await;
        (stopped, started.elapsed())
    });
    tokio::time::sleep(Duration::from_millis(250)).await;

    // Act
    shutdown.request_stop();
    let (stopped, elapsed) = handle.await?;

    // Assert
    assert!(stopped);
    assert!(elapsed < Duration::from_secs(1), "waited {elapsed:?}");
    Ok(())
}

#[tokio::test]
async fn test_all_waiters_are_woken() -> anyhow::Result<()> {
    // Arrange
    let shutdown = ShutdownController::new();
    let handles: Vec<_> = (0..10)
        .map(|_| {
            let waiter = shutdown.clone();
            tokio::spawn(async move { waiter.wait_or_stop(Duration::from_secs(30)).await })
        })
        .collect();
    tokio::time::sleep(Duration::from_millis(10)).await;

    // Act
    shutdown.request_stop();

    // Assert
    for handle in handles {
        let stopped = tokio::time::timeout(Duration::from_millis(500), handle).await??;
        assert!(stopped);
    }
    Ok(())
}

#[tokio::test]
async fn test_await_stop_resolves_after_request() -> anyhow::Result<()> {
    // Arrange
    let shutdown = ShutdownController::new();
    let signal = shutdown.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        signal.request_stop();
    });

    // Act
    tokio::time::timeout(Duration::from_secs(2), shutdown.await_stop()).await?;

    // Assert
    assert!(shutdown.is_stop_requested());
    Ok(())
}

#[tokio::test]
async fn test_await_stop_when_already_stopped() {
    // Arrange
    let shutdown = ShutdownController::new();
    shutdown.request_stop();

    // Act
    shutdown.await_stop().await;
    shutdown.stopped().await;

    // Assert
    assert!(shutdown.is_stop_requested());
}

#[tokio::test(start_paused = true)]
async fn test_loop_cadence_is_one_tick() -> anyhow::Result<()> {
    // Arrange
    let shutdown = ShutdownController::new();
    let worker = shutdown.clone();
    let handle = tokio::spawn(async move {
        let mut iterations = 0u32;
        while !worker.wait_or_stop(TICK).await {
            iterations += 1;
        }
        iterations
    });

    // Act
    tokio::time::sleep(Duration::from_millis(3_500)).await;
    shutdown.request_stop();

    // Assert
    assert_eq!(handle.await?, 3);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_waiting_task_observes_stop_from_another_task() {
    // Arrange
    let shutdown = ShutdownController::new();
    let worker = shutdown.clone();
    let handle = tokio::spawn(async move { worker.await_stop().await });

    // Act
    shutdown.request_stop();
    let finished = wait_until(TICK, || handle.is_finished()).await;

    // Assert
    assert!(finished);
}

// ============================================================================
// Blocking waits
// ============================================================================

#[test]
fn test_blocking_wait_times_out() {
    // Arrange
    let shutdown = ShutdownController::new();
    let started = Instant::now();

    // Act
    let stopped = shutdown.wait_or_stop_blocking(Duration::from_millis(50));

    // Assert
    assert!(!stopped);
    assert!(started.elapsed() >= Duration::from_millis(50));
}

#[test]
fn test_blocking_wait_wakes_on_stop() {
    // Arrange
    let shutdown = ShutdownController::new();
    let waiter = shutdown.clone();
    let handle = thread::spawn(move || {
        let started = Instant::now();
        let stopped = waiter.wait_or_stop_blocking(Duration::from_secs(30));
        (stopped, started.elapsed())
    });
    thread::sleep(Duration::from_millis(50));

    // Act
    shutdown.request_stop();
    let (stopped, elapsed) = handle.join().expect("waiter thread panicked");

    // Assert
    assert!(stopped);
    assert!(elapsed < Duration::from_secs(5), "waited {elapsed:?}");
}

#[test]
fn test_blocking_threads_exit_within_one_tick() {
    // Arrange
    let shutdown = ShutdownController::new();
    let tick = Duration::from_millis(100);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let worker = shutdown.clone();
            thread::spawn(move || {
                let mut iterations = 0u32;
                while !worker.wait_or_stop_blocking(tick) {
                    iterations += 1;
                }
                iterations
            })
        })
        .collect();
    thread::sleep(Duration::from_millis(250));

    // Act
    let stop_issued = Instant::now();
    shutdown.request_stop();
    for handle in handles {
        handle.join().expect("worker thread panicked");
    }

    // Assert
    assert!(stop_issued.elapsed() < tick * 5);
}
