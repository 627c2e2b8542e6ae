//! Snapshot benchmark: Measure the render-time hot path.
//!
//! The ingest side is O(1) per token; the cost to watch is the
//! per-frame snapshot sort and frame build over the distinct-token
//! count.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordwheel::{Counters, FrameBuilder, FrameSnapshot, FrequencyTable, Geometry, Tokenizer};

/// Deterministic pseudo-words, enough to give the table a real tail.
fn populate(table: &mut FrequencyTable, distinct: usize, records: usize) {
    for i in 0..records {
        table.record(format!("w{:04}", i % distinct));
    }
}

fn tokenize_chunk(c: &mut Criterion) {
    let chunk: Vec<u8> = b"the quick brown fox jumps over the lazy dog "
        .iter()
        .copied()
        .cycle()
        .take(4096)
        .collect();

    c.bench_function("tokenize_4k_chunk", |b| {
        b.iter(|| {
            let mut tokenizer = Tokenizer::new(b' ', 10);
            let tokens: Vec<String> = tokenizer.feed(black_box(&chunk)).collect();
            black_box(tokens)
        })
    });
}

fn record_token(c: &mut Criterion) {
    let mut table = FrequencyTable::new();
    populate(&mut table, 500, 10_000);

    c.bench_function("record_existing_token", |b| {
        b.iter(|| table.record(black_box("w0042".to_string())))
    });
}

fn snapshot_ranked(c: &mut Criterion) {
    let mut table = FrequencyTable::new();
    populate(&mut table, 1_000, 50_000);

    c.bench_function("snapshot_top_20_of_1k", |b| {
        b.iter(|| black_box(table.snapshot(black_box(20))))
    });
}

fn build_frame(c: &mut Criterion) {
    let mut table = FrequencyTable::new();
    populate(&mut table, 1_000, 50_000);

    let snapshot = FrameSnapshot {
        window: "lorem ipsum dolor sit amet consectetur adipiscing elit se".to_string(),
        ranked: table.snapshot(18),
        counters: Counters {
            bytes: 250_000,
            tokens: 50_000,
        },
        distinct: table.distinct(),
    };
    let builder = FrameBuilder::new();
    let geometry = Geometry::new(120, 40);

    c.bench_function("build_frame_120x40", |b| {
        b.iter(|| black_box(builder.build(black_box(&snapshot), geometry).unwrap()))
    });
}

criterion_group!(benches, tokenize_chunk, record_token, snapshot_ranked, build_frame);
criterion_main!(benches);
