// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use thermo_core::ReadingStore;

pub fn bench_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("reading_store");

    for &channels in &[2usize, 16, 256] {
        let store = ReadingStore::new(channels);

        group.throughput(Throughput::Elements(channels as u64));
        group.bench_with_input(
            BenchmarkId::new("publish_all", channels),
            &channels,
            |bencher, &channels| {
                bencher.iter(|| {
                    for index in 0..channels {
                        store.publish(black_box(index), black_box(51.5));
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("snapshot", channels),
            &channels,
            |bencher, _| {
                bencher.iter(|| black_box(store.snapshot()));
            },
        );
    }

    group.finish();
}
