use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use serde_json::json;
use std::{
    sync::{Arc, Barrier},
    thread::scope,
    time::Instant,
};
use toolsmith::{
    ConvertOptions, SystemClock, ThreadRandom, TimeSource, UlidGenerator, UlidParts,
    UuidGenerator, UuidRequest, base32, convert, uuid::NAMESPACE_DNS,
};

struct FixedMockTime {
    millis: u64,
}

impl TimeSource for FixedMockTime {
    fn current_millis(&self) -> u64 {
        self.millis
    }
}

// Number of IDs generated per benchmark iteration (per-thread for
// multi-threaded).
const TOTAL_IDS: usize = 4096;
const NUM_THREADS: usize = 8;

/// Benchmarks a single-threaded id factory.
fn bench_ids<F, O>(c: &mut Criterion, group_name: &str, make: F)
where
    F: Fn() -> O,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(make());
            }
        });
    });

    group.finish();
}

/// Benchmarks one shared generator hammered from several threads at once.
fn bench_ids_contended<F, O>(c: &mut Criterion, group_name: &str, make: F)
where
    F: Fn() -> O + Sync,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements((TOTAL_IDS * NUM_THREADS) as u64));

    group.bench_function(
        format!("elems/{TOTAL_IDS}/threads/{NUM_THREADS}"),
        |b| {
            b.iter_custom(|iters| {
                let start = Instant::now();
                for _ in 0..iters {
                    let barrier = Arc::new(Barrier::new(NUM_THREADS));
                    scope(|s| {
                        for _ in 0..NUM_THREADS {
                            let barrier = Arc::clone(&barrier);
                            let make = &make;
                            s.spawn(move || {
                                barrier.wait();
                                for _ in 0..TOTAL_IDS {
                                    black_box(make());
                                }
                            });
                        }
                    });
                }
                start.elapsed()
            });
        },
    );

    group.finish();
}

fn benchmark_ulid_mock(c: &mut Criterion) {
    let generator = UlidGenerator::new(FixedMockTime { millis: 1 }, ThreadRandom);
    bench_ids(c, "ulid/mock/sequential", || generator.generate());
}

fn benchmark_ulid_system(c: &mut Criterion) {
    let generator = UlidGenerator::new(SystemClock, ThreadRandom);
    bench_ids(c, "ulid/system/sequential", || generator.generate());
}

fn benchmark_ulid_contended(c: &mut Criterion) {
    let generator = UlidGenerator::new(SystemClock, ThreadRandom);
    bench_ids_contended(c, "ulid/system/contended", || generator.generate());
}

fn benchmark_ulid_inspect(c: &mut Criterion) {
    bench_ids(c, "ulid/inspect", || {
        UlidParts::parse(black_box("01ARZ3NDEKTSV4RRFFQ69G5FAV"))
    });
}

fn benchmark_uuid_v1(c: &mut Criterion) {
    let generator = UuidGenerator::new(FixedMockTime { millis: 1 }, ThreadRandom);
    bench_ids(c, "uuid/v1", || generator.v1());
}

fn benchmark_uuid_v4(c: &mut Criterion) {
    let generator = UuidGenerator::new(SystemClock, ThreadRandom);
    bench_ids(c, "uuid/v4", || generator.v4());
}

fn benchmark_uuid_v4_contended(c: &mut Criterion) {
    let generator = UuidGenerator::new(SystemClock, ThreadRandom);
    bench_ids_contended(c, "uuid/v4/contended", || generator.v4());
}

fn benchmark_uuid_v5(c: &mut Criterion) {
    let generator = UuidGenerator::new(SystemClock, ThreadRandom);
    let request = UuidRequest::V5 {
        namespace: NAMESPACE_DNS.to_string(),
        name: "example.com".to_owned(),
    };
    bench_ids(c, "uuid/v5", || generator.generate(&request));
}

fn benchmark_base32(c: &mut Criterion) {
    let bytes = [0xA5_u8; 10];
    bench_ids(c, "base32/encode_bits", || base32::encode_bits(black_box(&bytes)));
    bench_ids(c, "base32/decode_fixed_width", || {
        base32::decode_fixed_width(black_box("7ZZZZZZZZZZZZZZZZZZZZZZZZZ"))
    });
}

fn benchmark_schema(c: &mut Criterion) {
    let value = json!({
        "id": 1,
        "user": { "name": "x", "roles": ["admin"], "address": { "zip": "00000" } },
        "items": [{ "sku": "a", "qty": 2, "tags": [] }],
        "active": true,
        "deleted_at": null
    });
    let inline = ConvertOptions::default();
    let multi = ConvertOptions::default().multiple_interfaces(true);

    let mut group = c.benchmark_group("schema");
    group.bench_function("inline", |b| b.iter(|| convert(black_box(&value), &inline)));
    group.bench_function("multi", |b| b.iter(|| convert(black_box(&value), &multi)));
    group.finish();
}

criterion_group!(
    benches,
    // ULID
    benchmark_ulid_mock,
    benchmark_ulid_system,
    benchmark_ulid_contended,
    benchmark_ulid_inspect,
    // UUID
    benchmark_uuid_v1,
    benchmark_uuid_v4,
    benchmark_uuid_v4_contended,
    benchmark_uuid_v5,
    // Codecs
    benchmark_base32,
    benchmark_schema,
);
criterion_main!(benches);
