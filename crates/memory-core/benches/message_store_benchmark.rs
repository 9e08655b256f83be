//! Message Store Benchmarks
//!
//! Measures the hot paths of the message store:
//! - Saving messages
//! - Listing in chronological order
//! - Keyword search

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use memory_core::{MessageStore, SqliteKvStore};

fn populated_store(count: usize) -> MessageStore {
    let kv = Arc::new(SqliteKvStore::in_memory().expect("in-memory store"));
    let store = MessageStore::open(kv).expect("open store");
    for i in 0..count {
        let agent = if i % 2 == 0 { "A" } else { "B" };
        store
            .save(&format!("message {i} about rust and sqlite"), None, Some(agent))
            .expect("save");
    }
    store
}

fn bench_save(c: &mut Criterion) {
    let mut group = c.benchmark_group("message_store");

    group.bench_function("save", |b| {
        let store = populated_store(0);
        b.iter(|| store.save(black_box("benchmark content"), None, None))
    });

    group.finish();
}

fn bench_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("message_store_reads");

    for count in [10, 100, 1000].iter() {
        let store = populated_store(*count);

        group.bench_with_input(BenchmarkId::new("list_sorted", count), count, |b, _| {
            b.iter(|| black_box(store.list_sorted()))
        });

        group.bench_with_input(BenchmarkId::new("last_k_3", count), count, |b, _| {
            b.iter(|| black_box(store.last_k(3)))
        });

        group.bench_with_input(BenchmarkId::new("search", count), count, |b, _| {
            b.iter(|| black_box(store.search("RUST missing")))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_save, bench_reads);
criterion_main!(benches);
