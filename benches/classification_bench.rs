//! Benchmarks for line classification and statistics accumulation.
//!
//! Measures the cost of the regex-based classifier on each line shape and
//! the throughput of a full `process_file` pass over generated input.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use linesift::config::FilterOptions;
use linesift::processor::FileProcessor;
use linesift::{classify, round_half_up_div};
use std::hint::black_box;
use std::path::PathBuf;
use std::str::FromStr;
use tempfile::TempDir;

/// Write a file with `num_lines` lines cycling through every category.
fn create_input(num_lines: usize) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("input.txt");
    let content: String = (0..num_lines)
        .map(|i| match i % 4 {
            0 => format!("{}\n", i as i64 * 7919 - 50_000),
            1 => format!("{}.{}\n", i, i % 97),
            2 => format!("{}e-{}\n", i, i % 30),
            _ => format!("line number {} of the benchmark input\n", i),
        })
        .collect();
    std::fs::write(&path, content).unwrap();
    (temp_dir, path)
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let samples = [
        ("integer", "1234567890123456789"),
        ("float", "3.1415"),
        ("exponent", "1.528535047E-25"),
        ("string", "Нормальная форма числа с плавающей запятой"),
    ];

    for (name, line) in samples {
        group.bench_with_input(BenchmarkId::from_parameter(name), line, |b, line| {
            b.iter(|| classify(black_box(line)).unwrap())
        });
    }

    group.finish();
}

fn bench_process_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_file");

    for num_lines in [1_000, 10_000, 100_000] {
        let (_temp_dir, path) = create_input(num_lines);
        group.throughput(Throughput::Elements(num_lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(num_lines), &path, |b, path| {
            b.iter(|| {
                let mut processor = FileProcessor::new(FilterOptions::default());
                processor.process_file(black_box(path)).unwrap();
                black_box(processor.statistics().floats.average.clone())
            })
        });
    }

    group.finish();
}

fn bench_average(c: &mut Criterion) {
    let sum = bigdecimal::BigDecimal::from_str("3.1405000000000000000000001528535047").unwrap();
    c.bench_function("round_half_up_div", |b| {
        b.iter(|| round_half_up_div(black_box(&sum), black_box(3)))
    });
}

criterion_group!(benches, bench_classify, bench_process_file, bench_average);
criterion_main!(benches);
