// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for queue admission.
//!
//! Measures the performance of:
//! - Presenting a burst of banners into a bounded queue
//! - Draining a long queue one removal at a time

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_snacks::domain::snack::{DisplayDuration, MaxConcurrent};
use iced_snacks::snack::{
    BannerContent, BannerKey, HostMetrics, PresentOptions, Position, Snackbar, SnackbarConfig,
    Surface,
};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Surface that draws nothing.
struct Headless;

impl Surface for Headless {
    fn metrics(&self) -> HostMetrics {
        HostMetrics::new(1280.0, 720.0)
    }

    fn attach(&mut self, _: BannerKey, _: &BannerContent, _: Position, _: Option<Duration>) {}

    fn relocate(&mut self, _: BannerKey, _: Position, _: Option<Duration>) {}

    fn begin_exit(&mut self, _: BannerKey, _: Option<Duration>) {}

    fn detach(&mut self, _: BannerKey) {}
}

fn snackbar(max: usize) -> Snackbar<Headless> {
    let config = SnackbarConfig {
        max_concurrent: MaxConcurrent::new(max),
        ..SnackbarConfig::default()
    };
    Snackbar::with_surface(config, Headless)
}

fn sticky() -> PresentOptions {
    PresentOptions::new()
        .duration(DisplayDuration::indefinite())
        .animated(false)
}

/// Benchmark presenting a burst of banners.
fn bench_present_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("admission");

    for count in [10_usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("present_burst", count), &count, |b, &n| {
            b.iter(|| {
                let now = Instant::now();
                let mut bar = snackbar(3);
                for i in 0..n {
                    let key = bar.create_banner(BannerContent::new(format!("Banner {i}")));
                    bar.present(key, sticky(), now).unwrap();
                }
                black_box(bar.queue().len());
            });
        });
    }

    group.finish();
}

/// Benchmark draining a queue by dismissing the oldest banner repeatedly.
///
/// Each dismissal triggers a removal signal, a restack and an admission.
fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("admission");

    group.bench_function("drain_500", |b| {
        b.iter(|| {
            let now = Instant::now();
            let mut bar = snackbar(3);
            let keys: Vec<BannerKey> = (0..500)
                .map(|i| {
                    let key = bar.create_banner(BannerContent::new(format!("Banner {i}")));
                    bar.present(key, sticky(), now).unwrap();
                    key
                })
                .collect();
            for key in keys {
                bar.dismiss(key, false, false, now).unwrap();
            }
            black_box(bar.queue().is_empty());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_present_burst, bench_drain);
criterion_main!(benches);
