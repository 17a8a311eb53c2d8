// SPDX-License-Identifier: MPL-2.0
//! Queued presentation request.

use super::banner::{Completion, ShowRequest};
use super::handle::BannerKey;
use crate::domain::snack::DisplayDuration;
use crate::error::Result;
use std::fmt;

/// Shows banners on behalf of the queue.
///
/// The queue only knows banner keys. Whoever owns the banners and the host
/// surface implements this.
pub trait Presenter {
    /// Fails with [`Error::NoHostSurface`](crate::error::Error::NoHostSurface)
    /// when there is nowhere to render.
    fn ensure_ready(&self) -> Result<()>;

    /// Shows the banner behind `key`.
    ///
    /// Hands the request back when the banner cannot be shown: it was
    /// released, or it already went through its one presentation.
    fn present(
        &mut self,
        key: BannerKey,
        request: ShowRequest,
    ) -> std::result::Result<(), ShowRequest>;
}

/// One presentation request waiting in, or admitted by, the queue.
pub struct SnackItem {
    banner: BannerKey,
    display_duration: DisplayDuration,
    animated: bool,
    completion: Option<Completion>,
    displayed: bool,
}

impl fmt::Debug for SnackItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnackItem")
            .field("banner", &self.banner)
            .field("display_duration", &self.display_duration)
            .field("animated", &self.animated)
            .field("has_completion", &self.completion.is_some())
            .field("displayed", &self.displayed)
            .finish()
    }
}

impl SnackItem {
    #[must_use]
    pub fn new(banner: BannerKey) -> Self {
        Self {
            banner,
            display_duration: DisplayDuration::default(),
            animated: crate::config::defaults::DEFAULT_ANIMATED,
            completion: None,
            displayed: false,
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: DisplayDuration) -> Self {
        self.display_duration = duration;
        self
    }

    #[must_use]
    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    #[must_use]
    pub fn with_completion(mut self, completion: impl FnOnce(bool) + 'static) -> Self {
        self.completion = Some(Box::new(completion));
        self
    }

    #[must_use]
    pub fn banner(&self) -> BannerKey {
        self.banner
    }

    #[must_use]
    pub fn display_duration(&self) -> DisplayDuration {
        self.display_duration
    }

    #[must_use]
    pub fn is_animated(&self) -> bool {
        self.animated
    }

    #[must_use]
    pub fn is_displayed(&self) -> bool {
        self.displayed
    }

    /// Identity check against a banner key.
    #[must_use]
    pub fn matches(&self, key: BannerKey) -> bool {
        self.banner == key
    }

    /// Asks the presenter to show the banner and marks the item displayed
    /// if it did.
    ///
    /// On success the completion moves to the banner. A rejected request
    /// leaves the item pending with its completion.
    pub fn show<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> bool {
        let request = ShowRequest {
            duration: self.display_duration,
            animated: self.animated,
            completion: self.completion.take(),
        };
        match presenter.present(self.banner, request) {
            Ok(()) => {
                self.displayed = true;
                true
            }
            Err(rejected) => {
                self.completion = rejected.completion;
                false
            }
        }
    }

    /// Completion still held by the item, i.e. never handed to a banner.
    pub(crate) fn take_completion(&mut self) -> Option<Completion> {
        self.completion.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;
    use std::time::Duration;

    #[derive(Default)]
    struct Recorder {
        reject: bool,
        shown: Vec<(BannerKey, Option<Duration>, bool, bool)>,
    }

    impl Presenter for Recorder {
        fn ensure_ready(&self) -> Result<()> {
            Ok(())
        }

        fn present(
            &mut self,
            key: BannerKey,
            request: ShowRequest,
        ) -> std::result::Result<(), ShowRequest> {
            if self.reject {
                return Err(request);
            }
            self.shown.push((
                key,
                request.duration.as_duration(),
                request.animated,
                request.completion.is_some(),
            ));
            Ok(())
        }
    }

    fn key() -> BannerKey {
        let mut arena: SlotMap<BannerKey, ()> = SlotMap::with_key();
        arena.insert(())
    }

    #[test]
    fn new_item_is_pending_with_defaults() {
        let item = SnackItem::new(key());
        assert!(!item.is_displayed());
        assert!(item.is_animated());
        assert_eq!(item.display_duration(), DisplayDuration::default());
    }

    #[test]
    fn show_hands_policy_and_completion_to_presenter() {
        let k = key();
        let mut item = SnackItem::new(k)
            .with_duration(DisplayDuration::from_secs(1.5))
            .with_animated(false)
            .with_completion(|_| {});
        let mut presenter = Recorder::default();

        assert!(item.show(&mut presenter));
        assert!(item.show(&mut presenter));

        assert!(item.is_displayed());
        assert_eq!(
            presenter.shown,
            vec![
                (k, Some(Duration::from_millis(1500)), false, true),
                (k, Some(Duration::from_millis(1500)), false, false),
            ]
        );
    }

    #[test]
    fn rejected_show_keeps_item_pending_with_completion() {
        let mut item = SnackItem::new(key()).with_completion(|_| {});
        let mut presenter = Recorder {
            reject: true,
            ..Recorder::default()
        };

        assert!(!item.show(&mut presenter));
        assert!(!item.is_displayed());
        assert!(item.take_completion().is_some());
    }

    #[test]
    fn matches_by_identity_only() {
        let mut arena: SlotMap<BannerKey, ()> = SlotMap::with_key();
        let a = arena.insert(());
        let b = arena.insert(());
        let item = SnackItem::new(a);

        assert!(item.matches(a));
        assert!(!item.matches(b));
    }
}
