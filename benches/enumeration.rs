//! Performance measurement for grid-center enumeration at varying workloads

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gridcenters::enumerate_grid_centers;
use std::hint::black_box;

fn scattered_points(count: usize) -> (Vec<f64>, Vec<f64>) {
    let x = (0..count).map(|i| (i as f64) * 37.5 - 1800.0).collect();
    let y = (0..count).map(|i| (i as f64) * -12.25 + 600.0).collect();
    (x, y)
}

/// Measures enumeration cost as the input point count grows
fn bench_point_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_point_count");

    for point_count in &[10_usize, 100, 1000] {
        let (x, y) = scattered_points(*point_count);

        group.bench_with_input(
            BenchmarkId::from_parameter(point_count),
            point_count,
            |b, _| {
                b.iter(|| {
                    let table = enumerate_grid_centers(black_box(&x), black_box(&y), 100.0);
                    black_box(table)
                });
            },
        );
    }

    group.finish();
}

/// Measures enumeration cost as the cell size shrinks and row counts grow
fn bench_cell_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_cell_size");
    let (x, y) = scattered_points(100);

    for cell_size in &[100.0_f64, 50.0, 10.0] {
        group.bench_with_input(
            BenchmarkId::from_parameter(cell_size),
            cell_size,
            |b, &size| {
                b.iter(|| {
                    let table = enumerate_grid_centers(black_box(&x), black_box(&y), size);
                    black_box(table)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_point_count, bench_cell_size);
criterion_main!(benches);
