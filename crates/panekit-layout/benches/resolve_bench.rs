//! Benchmarks for the position resolver.
//!
//! Run with: cargo bench -p panekit-layout

use criterion::{Criterion, criterion_group, criterion_main};
use panekit_layout::{PanelPosition, resolve};
use std::hint::black_box;

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/resolve");

    let single = PanelPosition::new().top(56);
    group.bench_function("single_panel", |b| {
        b.iter(|| black_box(resolve(Some(black_box(&single)))))
    });

    let split_left = PanelPosition::new().top(56).right(620);
    group.bench_function("split_left", |b| {
        b.iter(|| black_box(resolve(Some(black_box(&split_left)))))
    });

    group.bench_function("hidden", |b| b.iter(|| black_box(resolve(None))));

    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
