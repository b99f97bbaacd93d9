use archive_keys::{create_new_key, parse_key};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn create_key_benchmark(c: &mut Criterion) {
    c.bench_function("create_snapshot_key", |b| {
        b.iter(|| create_new_key(black_box(42), Some("node"), black_box(1_700_000_000_000), false))
    });
}

fn parse_key_benchmark(c: &mut Criterion) {
    let keys: Vec<String> = (0..1_000)
        .map(|i| create_new_key(i, if i % 2 == 0 { Some("node") } else { None }, i as i64 * 3_600_000, i % 3 == 0))
        .collect::<Result<_, _>>()
        .expect("valid keys");

    c.bench_function("parse_1k_keys", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(parse_key(key).ok());
            }
        })
    });
}

criterion_group!(benches, create_key_benchmark, parse_key_benchmark);
criterion_main!(benches);
