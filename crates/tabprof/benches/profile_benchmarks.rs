//! End-to-end profiling benchmarks.
//!
//! Covers the full pipeline (parse, classify, describe, correlate) and the
//! correlation stage on its own, which is quadratic in numeric columns.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tabprof::stats::correlation::correlation_matrix;
use tabprof::{ColumnClassifier, Parser, Profiler, ProfilerConfig};

/// Generate a table of `cols` numeric columns plus one label column.
fn generate_numeric_data(rows: usize, cols: usize) -> String {
    let mut data = String::new();

    for i in 0..cols {
        data.push_str(&format!("x{},", i));
    }
    data.push_str("label\n");

    for row in 0..rows {
        for col in 0..cols {
            // Sprinkle missing cells so pairwise deletion is exercised
            if (row + col) % 13 != 0 {
                let value = (row as f64) * (col as f64 + 1.0) + ((row * 7 + col) % 11) as f64;
                data.push_str(&format!("{:.3}", value));
            }
            data.push(',');
        }
        data.push_str(&format!("group_{}\n", row % 5));
    }

    data
}

/// Benchmark the full pipeline, sequential and parallel.
fn bench_full_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_profile");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_numeric_data(*rows, 8);
        group.throughput(Throughput::Bytes(data.len() as u64));

        for parallel in [false, true] {
            let profiler = Profiler::with_config(ProfilerConfig {
                parallel,
                ..ProfilerConfig::default()
            });
            let id = if parallel { "parallel" } else { "sequential" };

            group.bench_with_input(BenchmarkId::new(id, rows), &data, |b, data| {
                b.iter(|| black_box(profiler.profile(data.as_bytes()).unwrap()))
            });
        }
    }

    group.finish();
}

/// Benchmark the correlation stage as the column count grows.
fn bench_correlation_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlation_scaling");

    for cols in [2, 8, 32].iter() {
        let data = generate_numeric_data(1_000, *cols);
        let (table, _) = Parser::new().parse_bytes(data.as_bytes()).unwrap();
        let dataset = ColumnClassifier::new().classify(table).unwrap();

        group.bench_with_input(BenchmarkId::new("cols", cols), &dataset, |b, dataset| {
            b.iter(|| black_box(correlation_matrix(dataset).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_profile, bench_correlation_scaling);
criterion_main!(benches);
