use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use user_stats_domain::{Aggregator, UserRecord};

fn sample_records(n: i64) -> Vec<UserRecord> {
    (1..=n)
        .map(|i| {
            let gender = if i % 2 == 0 { "Female" } else { "Male" };
            let status = if i % 5 < 3 { "Active" } else { "Inactive" };
            UserRecord::new(i, format!("User {i}"), 15 + i % 55, gender, status)
        })
        .collect()
}

fn benchmark_aggregate(c: &mut Criterion) {
    let small = sample_records(30);
    let large = sample_records(100_000);

    c.bench_function("aggregate_30", |b| {
        b.iter(|| black_box(Aggregator::aggregate(black_box(&small)).unwrap()))
    });
    c.bench_function("aggregate_100k", |b| {
        b.iter(|| black_box(Aggregator::aggregate(black_box(&large)).unwrap()))
    });
}

criterion_group!(benches, benchmark_aggregate);
criterion_main!(benches);
