use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use city_pathfinder::{path_cost, CityId, GraphStore, SearchAlgorithm};

/// Build a size×size grid of cities with unit-ish weights
fn grid(size: usize) -> GraphStore {
    let mut store = GraphStore::new();
    let name = |r: usize, c: usize| CityId::new(format!("R{}C{}", r, c));

    for r in 0..size {
        for c in 0..size {
            if c + 1 < size {
                store.add_path(name(r, c), name(r, c + 1), ((r + c) % 5 + 1) as u64);
            }
            if r + 1 < size {
                store.add_path(name(r, c), name(r + 1, c), ((r * c) % 7 + 1) as u64);
            }
        }
    }
    store
}

/// Benchmark each search corner to corner
fn bench_searches(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_grid");

    for size in [5, 10, 20] {
        let store = grid(size);
        let start = CityId::new("R0C0");
        let end = CityId::new(format!("R{}C{}", size - 1, size - 1));

        for algorithm in SearchAlgorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), size),
                &size,
                |b, _| b.iter(|| black_box(algorithm.run(&store, &start, &end))),
            );
        }
    }

    group.finish();
}

/// Benchmark building a graph path by path
fn bench_add_path(c: &mut Criterion) {
    c.bench_function("add_path_grid_20", |b| b.iter(|| black_box(grid(20))));
}

/// Benchmark pricing a long route
fn bench_path_cost(c: &mut Criterion) {
    let store = grid(20);
    let start = CityId::new("R0C0");
    let end = CityId::new("R19C19");
    let route = SearchAlgorithm::Dfs
        .run(&store, &start, &end)
        .expect("grid is connected");

    c.bench_function("path_cost_dfs_route", |b| {
        b.iter(|| black_box(path_cost(&store, &route)))
    });
}

criterion_group!(benches, bench_searches, bench_add_path, bench_path_cost);
criterion_main!(benches);
