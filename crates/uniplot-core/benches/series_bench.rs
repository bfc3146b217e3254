use chrono::{Duration, NaiveDate};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};
use uniplot_core::{MultiSeries, RawSeries};

fn gen_rows(rows: usize, n: usize) -> Vec<Vec<f64>> {
    (0..rows)
        .map(|r| (0..n).map(|i| ((i + r) as f64 * 0.01).sin() * 10.0).collect())
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_series");
    for &n in &[10_000usize, 100_000usize] {
        let ys = gen_rows(4, n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("nested_n{n}")), &ys, |b, ys| {
            b.iter_batched(
                || RawSeries::from(ys.clone()),
                |raw| { let _ = black_box(MultiSeries::from_ys(raw).y_max()); },
                BatchSize::LargeInput,
            );
        });

        let start = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap_or_default();
        let dates: Vec<NaiveDate> = (0..n as i64).map(|d| start + Duration::days(d)).collect();
        let y: Vec<f64> = ys[0].clone();
        group.bench_with_input(BenchmarkId::from_parameter(format!("dates_n{n}")), &dates, |b, dates| {
            b.iter_batched(
                || (RawSeries::from(y.clone()), RawSeries::from(dates.clone())),
                |(ys, xs)| { let _ = black_box(MultiSeries::new(ys, Some(xs)).map(|s| s.x_max())); },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
