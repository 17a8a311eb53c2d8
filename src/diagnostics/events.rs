// SPDX-License-Identifier: MPL-2.0
//! Lifecycle event types recorded by the snackbar.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::snack::{BannerKey, DismissCause};

/// A lifecycle event with the monotonic time it was recorded at.
#[derive(Debug, Clone)]
pub struct SnackEvent {
    pub timestamp: Instant,
    pub kind: SnackEventKind,
}

impl SnackEvent {
    #[must_use]
    pub fn new(kind: SnackEventKind) -> Self {
        Self::with_timestamp(kind, Instant::now())
    }

    #[must_use]
    pub fn with_timestamp(kind: SnackEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// What happened to a banner or to the queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SnackEventKind {
    /// A presentation request joined the queue.
    Enqueued { banner: BannerKey, queued: usize },

    /// A banner was attached to the host surface.
    Shown {
        banner: BannerKey,
        /// Auto-dismiss delay, absent for banners that stay until dismissed.
        #[serde(skip_serializing_if = "Option::is_none")]
        display_secs: Option<f32>,
        animated: bool,
    },

    /// A banner started leaving the screen.
    Dismissed {
        banner: BannerKey,
        cause: DismissCause,
    },

    /// A banner's removal signal was processed.
    Removed {
        banner: BannerKey,
        /// Whether the removal evicted a queue item.
        evicted: bool,
    },

    /// The queue was cleared administratively.
    QueueReset { discarded: usize },

    /// Attached banners were re-stacked after a layout change.
    LayoutInvalidated { attached: usize },

    /// Presentation was attempted without a host surface.
    SurfaceMissing,
}
