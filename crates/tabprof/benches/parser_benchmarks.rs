//! Parser performance benchmarks.
//!
//! Measures parsing performance across different sizes and delimiters.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tabprof::{Parser, ParserConfig};

/// Generate synthetic delimited data with the specified number of rows and columns.
fn generate_data(rows: usize, cols: usize, delimiter: char) -> String {
    let mut data = String::new();

    for i in 0..cols {
        if i > 0 {
            data.push(delimiter);
        }
        data.push_str(&format!("column_{}", i + 1));
    }
    data.push('\n');

    for row in 0..rows {
        for col in 0..cols {
            if col > 0 {
                data.push(delimiter);
            }
            match col % 4 {
                0 => data.push_str(&row.to_string()),
                1 => data.push_str(&format!("{:.2}", row as f64 * 1.5)),
                2 => {
                    if row % 7 != 0 {
                        data.push_str(&format!("{}", (row * 31) % 97));
                    }
                }
                3 => data.push_str(&format!("Category_{}", row % 10)),
                _ => unreachable!(),
            }
        }
        data.push('\n');
    }

    data
}

/// Benchmark parsing CSV input of various sizes.
fn bench_parse_csv(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_csv");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_data(*rows, 10, ',');

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            let parser = Parser::new();
            b.iter(|| black_box(parser.parse_bytes(data.as_bytes()).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark parsing TSV input of various sizes.
fn bench_parse_tsv(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_tsv");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_data(*rows, 10, '\t');

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            let parser = Parser::with_config(ParserConfig::default().with_delimiter(b'\t'));
            b.iter(|| black_box(parser.parse_bytes(data.as_bytes()).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark parsing with varying column counts.
fn bench_parse_column_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_column_scaling");

    let rows = 1_000;
    for cols in [5, 10, 20, 50].iter() {
        let data = generate_data(rows, *cols, ',');

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("cols", cols), &data, |b, data| {
            let parser = Parser::new();
            b.iter(|| black_box(parser.parse_bytes(data.as_bytes()).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_csv,
    bench_parse_tsv,
    bench_parse_column_scaling,
);
criterion_main!(benches);
