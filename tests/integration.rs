// SPDX-License-Identifier: MPL-2.0
use iced_snacks::config::{self, Config};
use iced_snacks::diagnostics::{DiagnosticsCollector, SnackEventKind};
use iced_snacks::snack::{
    BannerContent, BannerKey, HostMetrics, PresentOptions, Position, Snackbar, SnackbarConfig,
    Surface,
};
use std::fs;
use std::time::{Duration, Instant};
use tempfile::tempdir;

struct Headless;

impl Surface for Headless {
    fn metrics(&self) -> HostMetrics {
        HostMetrics::new(400.0, 800.0)
    }

    fn attach(&mut self, _: BannerKey, _: &BannerContent, _: Position, _: Option<Duration>) {}

    fn relocate(&mut self, _: BannerKey, _: Position, _: Option<Duration>) {}

    fn begin_exit(&mut self, _: BannerKey, _: Option<Duration>) {}

    fn detach(&mut self, _: BannerKey) {}
}

#[test]
fn settings_file_drives_the_snackbar() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[queue]\nmax_concurrent = 1\n\n[presentation]\ndisplay_duration_secs = 0.0\n",
    )
    .expect("Failed to write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let now = Instant::now();
    let mut bar = Snackbar::with_surface(SnackbarConfig::from(&loaded), Headless);
    let a = bar.create_banner(BannerContent::new("A"));
    let b = bar.create_banner(BannerContent::new("B"));
    bar.present(a, PresentOptions::new(), now).unwrap();
    bar.present(b, PresentOptions::new(), now).unwrap();

    // One slot and no auto-dismiss: B waits no matter how much time passes.
    bar.tick(now + Duration::from_secs(60)).unwrap();
    assert!(bar.queue().is_displayed(a));
    assert!(!bar.queue().is_displayed(b));
}

#[test]
fn out_of_range_settings_are_clamped() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        "[queue]\nmax_concurrent = 0\n\n[layout]\nwidth_percent = 1.7\nheight = -5.0\n",
    )
    .expect("Failed to write settings");

    let loaded = config::load_from_path(&path).expect("Failed to load settings");
    let snack = SnackbarConfig::from(&loaded);

    assert_eq!(snack.max_concurrent.value(), 1);
    assert!((snack.layout.width_percent.value() - 0.98).abs() < f32::EPSILON);
    assert!((snack.layout.height.value() - 50.0).abs() < f32::EPSILON);
}

#[test]
fn malformed_settings_fall_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[queue\nmax_concurrent = ")
        .expect("Failed to write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    assert!(warning.is_some());
}

#[test]
fn lifecycle_events_are_exported() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut collector = DiagnosticsCollector::default();
    let now = Instant::now();

    let mut bar = Snackbar::with_surface(SnackbarConfig::default(), Headless);
    bar.set_diagnostics(collector.handle());
    let key = bar.create_banner(BannerContent::new("Saved"));
    bar.present(key, PresentOptions::new().animated(false), now)
        .unwrap();
    bar.dismiss(key, false, false, now).unwrap();

    collector.process_pending();
    let kinds: Vec<_> = collector.iter().map(|event| &event.kind).collect();
    assert!(matches!(kinds[0], SnackEventKind::Enqueued { queued: 0, .. }));
    assert!(matches!(kinds[1], SnackEventKind::Shown { animated: false, .. }));
    assert!(kinds
        .iter()
        .any(|kind| matches!(kind, SnackEventKind::Removed { evicted: true, .. })));

    let path = collector
        .export_to_dir(dir.path())
        .expect("Failed to export events");
    let json = fs::read_to_string(path).expect("Failed to read export");
    assert!(json.contains("\"type\": \"shown\"") || json.contains("\"type\":\"shown\""));
}
