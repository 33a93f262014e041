//! Benchmark measuring elapsed-time reads and message log snapshots.

#![expect(missing_docs, reason = "benchmarks do not require API documentation")]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use wall_time::Timestamp;

fn timestamp_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("timestamp");

    let timestamp = Timestamp::new();
    timestamp
        .add_message("benchmark annotation")
        .expect("first append onto an empty log cannot collide");

    // Each read of a running interval consults the wall clock.
    group.bench_function("total_ms_running", |b| {
        b.iter(|| black_box(timestamp.total_ms()));
    });

    group.bench_function("messages_snapshot", |b| {
        b.iter(|| black_box(timestamp.messages()));
    });

    group.finish();
}

criterion_group!(benches, timestamp_reads);
criterion_main!(benches);
