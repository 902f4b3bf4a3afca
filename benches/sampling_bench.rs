use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use strata::{DataFrame, Series, StratifiedSampler};

fn build_frame(rows: usize, categories: usize) -> DataFrame {
    let ids = Series::new((0..rows).map(|i| i.to_string()).collect(), "id");
    let cats = Series::new(
        (0..rows).map(|i| format!("cat_{}", i % categories)).collect(),
        "category",
    );
    let values = Series::new(
        (0..rows).map(|i| format!("{:.2}", i as f64 * 0.5)).collect(),
        "value",
    );
    DataFrame::from_columns(vec![ids, cats, values]).unwrap()
}

fn bench_stratified_sample(c: &mut Criterion) {
    let sampler = StratifiedSampler::default();
    let mut group = c.benchmark_group("stratified_sample");

    for &rows in &[1_000usize, 100_000] {
        let df = build_frame(rows, 50);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::new("10pct_50cats", rows), &df, |b, df| {
            b.iter(|| sampler.sample(black_box(df), "category", 0.1).unwrap())
        });
    }

    let many = build_frame(100_000, 20_000);
    group.bench_function("10pct_20000cats", |b| {
        b.iter(|| sampler.sample(black_box(&many), "category", 0.1).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_stratified_sample);
criterion_main!(benches);
