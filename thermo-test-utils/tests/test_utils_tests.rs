// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fs;
use std::time::Duration;
use thermo_core::{ReadingSource, SensorProfile};
use thermo_test_utils::{seeded_generator, wait_until, FixedReading, ScriptedReadings, TempLogDir};

#[test]
fn test_fixed_reading_repeats() {
    // Arrange
    let mut source = FixedReading(25.0);

    // Act
    let values = [source.next_value(), source.next_value()];

    // Assert
    assert_eq!(values, [25.0, 25.0]);
}

#[test]
fn test_scripted_readings_hold_last_value() {
    // Arrange
    let mut source = ScriptedReadings::new([1.0, 2.0, 3.0]);

    // Act
    let values: Vec<f32> = (0..5).map(|_| source.next_value()).collect();

    // Assert
    assert_eq!(values, vec![1.0, 2.0, 3.0, 3.0, 3.0]);
}

#[test]
fn test_temp_log_dir_reads_back_files() -> anyhow::Result<()> {
    // Arrange
    let dir = TempLogDir::new();
    assert!(!dir.exists("a.log"));
    assert_eq!(dir.read("a.log"), "");

    // Act
    fs::write(dir.path("a.log"), "one\ntwo\n")?;

    // Assert
    assert!(dir.exists("a.log"));
    assert_eq!(dir.lines("a.log"), vec!["one", "two"]);
    Ok(())
}

#[test]
fn test_unwritable_path_has_no_parent() -> anyhow::Result<()> {
    // Arrange
    let dir = TempLogDir::new();

    // Act
    let path = dir.unwritable_path("x.log");

    // Assert
    let parent = path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("unwritable path must have a parent"))?;
    assert!(!parent.exists());
    Ok(())
}

#[test]
fn test_seeded_generator_is_reproducible() {
    // Arrange
    let profile = SensorProfile::new(50.0, 2.0);

    // Act
    let first: Vec<f32> = seeded_generator(profile, 4).take(20).collect();
    let second: Vec<f32> = seeded_generator(profile, 4).take(20).collect();

    // Assert
    assert_eq!(first, second);
}

#[tokio::test(start_paused = true)]
async fn test_wait_until_gives_up_after_timeout() {
    // Arrange
    let timeout = Duration::from_millis(100);

    // Act
    let met = wait_until(timeout, || false).await;

    // Assert
    assert!(!met);
}

#[tokio::test]
async fn test_wait_until_sees_condition() {
    // Arrange
    let mut calls = 0;

    // Act
    let met = wait_until(Duration::from_secs(1), || {
        calls += 1;
        calls == 3
    })
    .await;

    // Assert
    assert!(met);
    assert_eq!(calls, 3);
}
