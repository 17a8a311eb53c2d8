// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for stack layout.
//!
//! Measures the performance of:
//! - Rebuilding a stack from the anchor upward
//! - Resolving the position of a banner joining the top

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_snacks::snack::{BannerKey, HostMetrics, LayoutConfig, LayoutResolver};
use slotmap::SlotMap;
use std::hint::black_box;

fn stack(n: usize) -> Vec<(BannerKey, f32, u64)> {
    let mut arena: SlotMap<BannerKey, ()> = SlotMap::with_key();
    (0..n)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let height = 50.0 + (i % 3) as f32 * 10.0;
            (arena.insert(()), height, i as u64)
        })
        .collect()
}

/// Benchmark a full restack at various stack depths.
fn bench_restack(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let resolver = LayoutResolver::new(LayoutConfig::default());
    let host = HostMetrics::new(1280.0, 720.0).with_safe_area_bottom(24.0);

    for depth in [3_usize, 32] {
        let banners = stack(depth);
        group.bench_with_input(BenchmarkId::new("restack", depth), &banners, |b, banners| {
            b.iter(|| black_box(resolver.restack(&host, black_box(banners))));
        });
    }

    group.finish();
}

/// Benchmark resolving a newcomer on top of an existing stack.
fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let resolver = LayoutResolver::new(LayoutConfig::default());
    let host = HostMetrics::new(1280.0, 720.0);

    let banners = stack(32);
    let placed = resolver.restack(&host, &banners);
    let (newcomer, _, sequence) = banners[banners.len() - 1];

    group.bench_function("resolve_top", |b| {
        b.iter(|| {
            black_box(resolver.resolve(&host, black_box(&placed), newcomer, 60.0, false, sequence))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_restack, bench_resolve);
criterion_main!(benches);
