use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rope_cut::Strategy;
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("max product");
    for n in [10i64, 40, 121] {
        for strategy in [Strategy::Table, Strategy::ClosedForm] {
            group.bench_with_input(BenchmarkId::new(strategy.name(), n), &n, |b, &n| {
                b.iter(|| strategy.solve(black_box(n)))
            });
        }
    }
    group.bench_function("exhaustive/30", |b| {
        b.iter(|| Strategy::Exhaustive.solve(black_box(30)))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
