// SPDX-License-Identifier: MPL-2.0
//! Removal signal channel.
//!
//! Every banner carries its own [`RemovalSender`], registered when the
//! banner is created. All senders feed a single [`RemovalChannel`] which the
//! owner drains synchronously, so signal handling order is the order in
//! which banners left the surface.

use super::handle::BannerKey;
use crossbeam_channel::{unbounded, Receiver, Sender};

/// One banner leaving the surface, with the outcome its completion saw.
///
/// The outcome travels with the signal so a request still waiting in the
/// queue can report the same result as the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    pub key: BannerKey,
    pub action_taken: bool,
}

/// Sending half handed to each banner.
///
/// Cheap to clone. Sending never blocks and never fails observably: if the
/// channel owner is gone there is nobody left to clean up after.
#[derive(Debug, Clone)]
pub struct RemovalSender {
    tx: Sender<Removal>,
}

impl RemovalSender {
    /// Reports that the banner identified by `key` left the surface.
    pub fn notify(&self, key: BannerKey, action_taken: bool) {
        if self.tx.send(Removal { key, action_taken }).is_err() {
            tracing::debug!(?key, "removal signal dropped, channel closed");
        }
    }
}

/// Receiving end of the removal signals.
///
/// Unbounded: dropping a signal would leave a queue slot occupied forever.
#[derive(Debug)]
pub struct RemovalChannel {
    tx: Sender<Removal>,
    rx: Receiver<Removal>,
}

impl RemovalChannel {
    /// Creates an empty channel.
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    /// Creates a sender to register on a banner.
    #[must_use]
    pub fn sender(&self) -> RemovalSender {
        RemovalSender {
            tx: self.tx.clone(),
        }
    }

    /// Takes every pending signal, oldest first.
    pub fn drain(&self) -> Vec<Removal> {
        self.rx.try_iter().collect()
    }

    /// Returns true if signals are waiting.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.rx.is_empty()
    }
}

impl Default for RemovalChannel {
    fn default() -> Self {
        Self::new()
    }
}
