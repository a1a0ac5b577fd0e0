//! Criterion benchmarks for the location search.
//!
//! Two benchmark groups:
//! - `neighborhood`: raw enumeration cost at growing radii
//! - `search`: full-grid search, sequential against the rayon path

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use shopspot_core::grid::ShopGrid;
use shopspot_core::neighborhood::Neighborhood;
use shopspot_core::search::{find_optimal_location, find_optimal_location_par};
use shopspot_core::test_utils::*;

fn bench_neighborhood(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighborhood");

    for radius in [4u32, 16, 64, 106] {
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &r| {
            b.iter(|| Neighborhood::new(pos(500, 500), r, 1000, 1000).count());
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(20);

    // 100x100 city with 500 shops.
    let shops = scattered_shops(100, 100, 500);
    let grid = ShopGrid::with_shops(100, 100, shops).unwrap();

    for radius in [2u32, 8] {
        group.bench_with_input(BenchmarkId::new("sequential", radius), &radius, |b, &r| {
            b.iter(|| find_optimal_location(&grid, r));
        });
        group.bench_with_input(BenchmarkId::new("parallel", radius), &radius, |b, &r| {
            b.iter(|| find_optimal_location_par(&grid, r));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_neighborhood, bench_search);
criterion_main!(benches);
