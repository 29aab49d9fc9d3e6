use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::thread;
use stream_pulse::{json_to_text, json_to_yaml, DataProcessor, WordFrequencyCounter};

// ============================================================================
// Test Data
// ============================================================================

const SMALL_JSON: &str = r#"{"name": "John", "age": 30, "city": "New York"}"#;

const NESTED_JSON: &str = r#"{
    "person": {
        "name": "John",
        "age": 30,
        "address": { "city": "New York", "zipcode": "10001" },
        "tags": ["admin", "ops", "on-call"]
    }
}"#;

const CHUNK: &str = "the quick brown fox jumps over the lazy dog while the cat sleeps";

fn generate_json(records: usize) -> String {
    let items: Vec<String> = (0..records)
        .map(|i| {
            format!(
                r#"{{"id": {i}, "name": "user{i}", "active": {}, "roles": ["a", "b"], "meta": {{"score": {}.5}}}}"#,
                i % 2 == 0,
                i * 3
            )
        })
        .collect();
    format!(r#"{{"users": [{}]}}"#, items.join(","))
}

// ============================================================================
// Counter Benchmarks
// ============================================================================

fn bench_counter_single_thread(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter_single_thread");
    for chunks in [10usize, 100, 1000] {
        group.throughput(Throughput::Elements(chunks as u64));
        group.bench_with_input(BenchmarkId::from_parameter(chunks), &chunks, |b, &chunks| {
            b.iter(|| {
                let counter = WordFrequencyCounter::new();
                for _ in 0..chunks {
                    counter.process(black_box(CHUNK));
                }
                counter.results()
            });
        });
    }
    group.finish();
}

fn bench_counter_contention(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter_contention");
    for threads in [1usize, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            b.iter(|| {
                let counter = WordFrequencyCounter::new();
                thread::scope(|s| {
                    for _ in 0..threads {
                        s.spawn(|| {
                            for _ in 0..250 {
                                counter.process(black_box(CHUNK));
                            }
                        });
                    }
                });
                counter.total_words()
            });
        });
    }
    group.finish();
}

fn bench_counter_snapshot(c: &mut Criterion) {
    let counter = WordFrequencyCounter::new();
    for i in 0..10_000 {
        counter.process(&format!("word{i} {CHUNK}"));
    }
    c.bench_function("counter_snapshot_10k_words", |b| b.iter(|| counter.results()));
}

// ============================================================================
// Transform Benchmarks
// ============================================================================

fn bench_json_to_text(c: &mut Criterion) {
    c.bench_function("json_to_text_small", |b| {
        b.iter(|| json_to_text(black_box(SMALL_JSON.as_bytes())))
    });
    c.bench_function("json_to_text_nested", |b| {
        b.iter(|| json_to_text(black_box(NESTED_JSON.as_bytes())))
    });
}

fn bench_json_to_yaml(c: &mut Criterion) {
    c.bench_function("json_to_yaml_small", |b| {
        b.iter(|| json_to_yaml(black_box(SMALL_JSON.as_bytes())))
    });
    c.bench_function("json_to_yaml_nested", |b| {
        b.iter(|| json_to_yaml(black_box(NESTED_JSON.as_bytes())))
    });
}

fn bench_transform_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_scaling");
    for records in [10usize, 100, 1000] {
        let json = generate_json(records);
        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(BenchmarkId::new("text", records), &json, |b, json| {
            b.iter(|| json_to_text(black_box(json.as_bytes())))
        });
        group.bench_with_input(BenchmarkId::new("yaml", records), &json, |b, json| {
            b.iter(|| json_to_yaml(black_box(json.as_bytes())))
        });
    }
    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    counter_benches,
    bench_counter_single_thread,
    bench_counter_contention,
    bench_counter_snapshot
);

criterion_group!(
    transform_benches,
    bench_json_to_text,
    bench_json_to_yaml,
    bench_transform_scaling
);

criterion_main!(counter_benches, transform_benches);
