//! Benchmarks for catalog search.
//!
//! Run with: cargo bench -p gompa-core
//!
//! The built-in catalog is tiny, so the interesting baseline is how the
//! substring scan behaves as the catalog grows.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gompa_core::Catalog;

fn bench_builtin_search(c: &mut Criterion) {
    let catalog = Catalog::builtin();

    let mut group = c.benchmark_group("search_builtin");
    for query in ["", "rumtek", "nyingma", "zzz"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), query, |b, query| {
            b.iter(|| black_box(catalog.search_monasteries(black_box(query))))
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let catalog = Catalog::builtin();

    c.bench_function("monastery_lookup_hit", |b| {
        b.iter(|| black_box(catalog.monastery(black_box("pemayangtse"))))
    });
    c.bench_function("monastery_lookup_miss", |b| {
        b.iter(|| black_box(catalog.monastery(black_box("nowhere"))))
    });
}

fn bench_festival_filters(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let mut group = c.benchmark_group("festival_filters");
    group.throughput(Throughput::Elements(catalog.festivals().len() as u64));

    group.bench_function("upcoming", |b| {
        b.iter(|| black_box(catalog.upcoming_festivals()))
    });
    group.bench_function("next_livestream", |b| {
        b.iter(|| black_box(catalog.next_livestream()))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_builtin_search,
    bench_lookup,
    bench_festival_filters
);
criterion_main!(benches);
