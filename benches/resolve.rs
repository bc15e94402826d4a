//! Benchmarks for sqlconvert

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal::Decimal;
use sqlconvert::{decimal_to_sql_literal, parse_date_with_options, ResolveOptions};

fn options() -> ResolveOptions {
    ResolveOptions::with_reference_date(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let options = options();

    for input in ["12", "13-05-21", "05.12.2020", "20201225", "19991231235959"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), &input, |b, input| {
            b.iter(|| parse_date_with_options(black_box(input), &options))
        });
    }

    group.finish();
}

fn bench_resolve_batch(c: &mut Criterion) {
    let options = options();
    let dates: Vec<String> = (0..1000)
        .map(|i| format!("{}.{}.{}", (i % 28) + 1, (i % 12) + 1, 1960 + i % 80))
        .collect();

    c.bench_function("resolve_1000", |b| {
        b.iter(|| {
            for date in &dates {
                let _ = parse_date_with_options(black_box(date), &options);
            }
        })
    });
}

fn bench_decimal_literal(c: &mut Criterion) {
    let values: Vec<Decimal> = (0..1000).map(|i| Decimal::new(i * 1_234_567, 4)).collect();

    c.bench_function("decimal_to_sql_literal_1000", |b| {
        b.iter(|| {
            for value in &values {
                black_box(decimal_to_sql_literal(*value, 2));
            }
        })
    });
}

criterion_group!(benches, bench_resolve, bench_resolve_batch, bench_decimal_literal);
criterion_main!(benches);
