// SPDX-License-Identifier: MPL-2.0
//! Admission control for presentation requests.
//!
//! The queue keeps every request in arrival order and promotes pending
//! items in FIFO order whenever a slot is free. At most
//! [`MaxConcurrent`] items are displayed after every evaluation.

use super::handle::BannerKey;
use super::item::{Presenter, SnackItem};
use crate::domain::snack::MaxConcurrent;
use crate::error::Result;
use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct QueueManager {
    max_concurrent: MaxConcurrent,
    items: VecDeque<SnackItem>,
}

impl QueueManager {
    #[must_use]
    pub fn new(max_concurrent: MaxConcurrent) -> Self {
        Self {
            max_concurrent,
            items: VecDeque::new(),
        }
    }

    /// Changes the bound. Takes effect on the next evaluation; banners
    /// already displayed are never dismissed because of it.
    pub fn configure(&mut self, max_concurrent: MaxConcurrent) {
        self.max_concurrent = max_concurrent;
    }

    /// Appends an item and evaluates admission.
    ///
    /// The item is kept even when admission fails; it waits for the next
    /// evaluation.
    pub fn enqueue<P: Presenter + ?Sized>(
        &mut self,
        item: SnackItem,
        presenter: &mut P,
    ) -> Result<usize> {
        tracing::debug!(banner = ?item.banner(), queued = self.items.len(), "enqueue snack");
        self.items.push_back(item);
        self.evaluate(presenter)
    }

    /// Evicts the first item showing `key` and evaluates admission.
    ///
    /// Unknown keys are ignored, so a banner may report removal any number
    /// of times. An evicted item that never reached the screen has its
    /// completion invoked with the banner's `action_taken`.
    ///
    /// Returns whether an item was evicted.
    pub fn on_banner_removed<P: Presenter + ?Sized>(
        &mut self,
        key: BannerKey,
        action_taken: bool,
        presenter: &mut P,
    ) -> Result<bool> {
        let Some(index) = self.items.iter().position(|item| item.matches(key)) else {
            tracing::debug!(?key, "removal signal for untracked banner ignored");
            return Ok(false);
        };

        if let Some(mut item) = self.items.remove(index) {
            if !item.is_displayed() {
                if let Some(completion) = item.take_completion() {
                    completion(action_taken);
                }
            }
        }

        self.evaluate(presenter)?;
        Ok(true)
    }

    /// Forgets every item without touching banners.
    ///
    /// Banners already on screen stay there until they report removal
    /// themselves. Completions of discarded items are dropped uninvoked.
    /// Returns how many items were discarded.
    pub fn reset_all(&mut self) -> usize {
        let discarded = self.items.len();
        self.items.clear();
        if discarded > 0 {
            tracing::info!(discarded, "snack queue reset");
        }
        discarded
    }

    /// Promotes pending items in FIFO order until the bound is reached.
    ///
    /// Computed from the current snapshot every time. An item whose banner
    /// refuses to show is evicted on the spot, its completion invoked with
    /// `false`, and the next pending item takes the slot. Returns how many
    /// items were promoted.
    pub fn evaluate<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> Result<usize> {
        let displayed = self.displayed_count();
        let max = self.max_concurrent.value();
        if displayed >= max {
            return Ok(0);
        }

        let free = max - displayed;
        if self.pending_count() == 0 {
            return Ok(0);
        }
        presenter.ensure_ready()?;

        let mut promoted = 0;
        let mut index = 0;
        while promoted < free && index < self.items.len() {
            let item = &mut self.items[index];
            if item.is_displayed() {
                index += 1;
            } else if item.show(presenter) {
                promoted += 1;
                index += 1;
            } else if let Some(mut rejected) = self.items.remove(index) {
                tracing::warn!(
                    banner = ?rejected.banner(),
                    "banner cannot be shown, dropping its request"
                );
                if let Some(completion) = rejected.take_completion() {
                    completion(false);
                }
            }
        }

        if promoted > 0 {
            tracing::debug!(promoted, displayed = displayed + promoted, max, "admitted snacks");
        }
        Ok(promoted)
    }

    #[must_use]
    pub fn max_concurrent(&self) -> MaxConcurrent {
        self.max_concurrent
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn displayed_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_displayed()).count()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.items.len() - self.displayed_count()
    }

    #[must_use]
    pub fn contains(&self, key: BannerKey) -> bool {
        self.items.iter().any(|item| item.matches(key))
    }

    #[must_use]
    pub fn is_displayed(&self, key: BannerKey) -> bool {
        self.items
            .iter()
            .find(|item| item.matches(key))
            .is_some_and(SnackItem::is_displayed)
    }

    /// Items in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &SnackItem> {
        self.items.iter()
    }
}
