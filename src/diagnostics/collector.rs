// SPDX-License-Identifier: MPL-2.0
//! Collector aggregating lifecycle events into a circular buffer.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::{DateTime, Local, Utc};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::{
    BufferCapacity, CircularBuffer, ReportMetadata, SerializableEvent, SnackEvent, SnackEventKind,
    SnackReport,
};
use crate::error::Result;

/// Handle for sending lifecycle events to the collector.
///
/// Cheap to clone. Events travel over a bounded channel and are dropped
/// when it is full, so logging never blocks the UI thread.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<SnackEvent>,
}

impl DiagnosticsHandle {
    /// Records an event stamped with the current time.
    pub fn log(&self, kind: SnackEventKind) {
        let _ = self.event_tx.try_send(SnackEvent::new(kind));
    }

    /// Records an event stamped with an explicit time.
    pub fn log_at(&self, kind: SnackEventKind, timestamp: Instant) {
        let _ = self
            .event_tx
            .try_send(SnackEvent::with_timestamp(kind, timestamp));
    }

    /// Like [`log`](Self::log) but reports a full channel.
    ///
    /// # Errors
    ///
    /// Returns the rejected event when the channel is full or closed.
    pub fn try_log(&self, kind: SnackEventKind) -> std::result::Result<(), TrySendError<SnackEvent>> {
        self.event_tx.try_send(SnackEvent::new(kind))
    }
}

/// Pending events the channel holds before handles start dropping them.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Central store for lifecycle events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<SnackEvent>,
    event_rx: Receiver<SnackEvent>,
    event_tx: Sender<SnackEvent>,
    /// Monotonic start, for relative timestamps.
    collection_started_at: Instant,
    /// Wall-clock start, for report metadata.
    collection_started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every event waiting in the channel into the buffer.
    ///
    /// Call this periodically, e.g. on each UI tick.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Records an event directly, bypassing the channel.
    pub fn log(&mut self, kind: SnackEventKind) {
        self.buffer.push(SnackEvent::new(kind));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &SnackEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    #[must_use]
    pub fn collection_duration(&self) -> Duration {
        self.collection_started_at.elapsed()
    }

    /// Exports the buffer as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    /// Writes the JSON report into `dir` and returns the file path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn export_to_dir(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(generate_default_filename());
        let json = self.export_json()?;
        write_atomic(&path, &json)?;
        tracing::info!(path = %path.display(), events = self.len(), "exported snack events");
        Ok(path)
    }

    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    fn build_report(&self) -> SnackReport {
        let collection_duration_ms = self.collection_started_at.elapsed().as_millis() as u64;

        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();

        let metadata = ReportMetadata::new(
            self.collection_started_at_utc,
            collection_duration_ms,
            events.len(),
        );

        SnackReport { metadata, events }
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish_non_exhaustive()
    }
}

/// Timestamped report file name.
#[must_use]
pub fn generate_default_filename() -> String {
    let now = Local::now();
    format!("iced_snacks_events_{}.json", now.format("%Y%m%d_%H%M%S"))
}

/// Writes through a temporary file then renames it into place.
fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snack::{BannerKey, DismissCause};
    use slotmap::SlotMap;

    fn key() -> BannerKey {
        let mut arena: SlotMap<BannerKey, ()> = SlotMap::with_key();
        arena.insert(())
    }

    #[test]
    fn new_collector_is_empty() {
        let collector = DiagnosticsCollector::default();
        assert!(collector.is_empty());
        assert_eq!(collector.capacity(), BufferCapacity::default().value());
    }

    #[test]
    fn handle_events_arrive_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        let banner = key();

        handle.log(SnackEventKind::Enqueued { banner, queued: 0 });
        handle.clone().log(SnackEventKind::Dismissed {
            banner,
            cause: DismissCause::Timeout,
        });
        assert!(collector.is_empty());

        collector.process_pending();

        let kinds: Vec<_> = collector.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                SnackEventKind::Enqueued { banner, queued: 0 },
                SnackEventKind::Dismissed {
                    banner,
                    cause: DismissCause::Timeout
                },
            ]
        );
    }

    #[test]
    fn full_channel_drops_instead_of_blocking() {
        let collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        for _ in 0..DEFAULT_CHANNEL_CAPACITY {
            handle.log(SnackEventKind::SurfaceMissing);
        }
        assert!(matches!(
            handle.try_log(SnackEventKind::SurfaceMissing),
            Err(TrySendError::Full(_))
        ));
    }

    #[test]
    fn buffer_evicts_oldest_events() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(16));
        for discarded in 0..20 {
            collector.log(SnackEventKind::QueueReset { discarded });
        }

        assert_eq!(collector.len(), 16);
        assert_eq!(
            collector.iter().next().map(|e| e.kind.clone()),
            Some(SnackEventKind::QueueReset { discarded: 4 })
        );
    }

    #[test]
    fn export_json_contains_metadata_and_events() {
        let mut collector = DiagnosticsCollector::default();
        collector.log(SnackEventKind::LayoutInvalidated { attached: 1 });

        let json = collector.export_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["metadata"]["event_count"], 1);
        assert_eq!(value["events"][0]["type"], "layout_invalidated");
    }

    #[test]
    fn export_to_dir_writes_report_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut collector = DiagnosticsCollector::default();
        collector.log(SnackEventKind::SurfaceMissing);

        let path = collector.export_to_dir(dir.path()).unwrap();

        assert!(path.starts_with(dir.path()));
        let report: SnackReport =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(report.events.len(), 1);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn default_filename_is_timestamped_json() {
        let name = generate_default_filename();
        assert!(name.starts_with("iced_snacks_events_"));
        assert!(name.ends_with(".json"));
    }
}
