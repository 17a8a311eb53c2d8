// SPDX-License-Identifier: MPL-2.0
//! Lifecycle diagnostics.
//!
//! The snackbar reports what happens to banners and to the queue through a
//! [`DiagnosticsHandle`]. Events land in a memory-bounded
//! [`CircularBuffer`] owned by the [`DiagnosticsCollector`] and can be
//! exported as a JSON report.

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{buffer_capacity_bounds, BufferCapacity, CircularBuffer};
pub use collector::{generate_default_filename, DiagnosticsCollector, DiagnosticsHandle};
pub use events::{SnackEvent, SnackEventKind};
pub use report::{ReportMetadata, SerializableEvent, SnackReport};
