// SPDX-License-Identifier: MPL-2.0
//! Presentable banner and its lifecycle state machine.
//!
//! ```text
//! Created ──show──▶ Displayed ──dismiss/timeout/swipe/action──▶ AnimatingOut ──▶ Removed
//!    │                  │                                                         ▲
//!    │                  └──────────────── (not animated) ─────────────────────────┤
//!    └───────────────────────────── release / dismiss ────────────────────────────┘
//! ```
//!
//! Reaching `Removed` invokes the completion, notifies the delegate and
//! sends the removal signal, each exactly once. Every later request is a
//! no-op, so a swipe racing a timer cannot remove a banner twice.

use super::handle::BannerKey;
use super::signal::RemovalSender;
use crate::domain::snack::DisplayDuration;
use std::fmt;
use std::time::{Duration, Instant};

/// Callback invoked once when a banner leaves the screen.
///
/// The argument is `true` when the user (or the host, via
/// `complete_with_action`) took the banner's action.
pub type Completion = Box<dyn FnOnce(bool)>;

/// Optional observer for user interaction with one banner.
pub trait BannerDelegate {
    /// The action button was pressed.
    fn action_pressed(&mut self, key: BannerKey) {
        let _ = key;
    }

    /// The banner left the screen.
    fn removed(&mut self, key: BannerKey, action_taken: bool) {
        let _ = (key, action_taken);
    }
}

/// What a banner shows. Rendering it is the surface's job.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BannerContent {
    pub title: String,
    pub action_label: Option<String>,
    /// Icon name resolved by the surface.
    pub icon: Option<String>,
}

impl BannerContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            action_label: None,
            icon: None,
        }
    }

    #[must_use]
    pub fn with_action(mut self, label: impl Into<String>) -> Self {
        self.action_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Lifecycle state of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerState {
    Created,
    Displayed {
        /// Auto-dismiss deadline, `None` when the banner stays until dismissed.
        deadline: Option<Instant>,
    },
    AnimatingOut {
        until: Instant,
        action_taken: bool,
    },
    Removed,
}

/// Why a banner is leaving the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissCause {
    Timeout,
    Action,
    Swipe,
    Programmatic,
    Released,
}

/// Everything a queued item hands to its banner when it is promoted.
pub struct ShowRequest {
    pub duration: DisplayDuration,
    pub animated: bool,
    pub completion: Option<Completion>,
}

impl fmt::Debug for ShowRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShowRequest")
            .field("duration", &self.duration)
            .field("animated", &self.animated)
            .field("has_completion", &self.completion.is_some())
            .finish()
    }
}

/// Visible effect of a state change, for the owner to mirror on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    ExitStarted,
    Removed,
}

pub struct Banner {
    key: BannerKey,
    content: BannerContent,
    state: BannerState,
    animated: bool,
    allow_swipe: bool,
    completion: Option<Completion>,
    delegate: Option<Box<dyn BannerDelegate>>,
    removal: RemovalSender,
}

impl fmt::Debug for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Banner")
            .field("key", &self.key)
            .field("title", &self.content.title)
            .field("state", &self.state)
            .field("animated", &self.animated)
            .finish_non_exhaustive()
    }
}

impl Banner {
    pub(crate) fn new(key: BannerKey, content: BannerContent, removal: RemovalSender) -> Self {
        Self {
            key,
            content,
            state: BannerState::Created,
            animated: true,
            allow_swipe: false,
            completion: None,
            delegate: None,
            removal,
        }
    }

    #[must_use]
    pub fn key(&self) -> BannerKey {
        self.key
    }

    #[must_use]
    pub fn content(&self) -> &BannerContent {
        &self.content
    }

    #[must_use]
    pub fn state(&self) -> BannerState {
        self.state
    }

    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.state == BannerState::Removed
    }

    /// Returns true while the banner is drawn on the surface.
    #[must_use]
    pub fn is_on_surface(&self) -> bool {
        matches!(
            self.state,
            BannerState::Displayed { .. } | BannerState::AnimatingOut { .. }
        )
    }

    #[must_use]
    pub fn is_animated(&self) -> bool {
        self.animated
    }

    #[must_use]
    pub fn allows_swipe(&self) -> bool {
        self.allow_swipe
    }

    pub fn set_allow_swipe(&mut self, allow: bool) {
        self.allow_swipe = allow;
    }

    pub fn set_delegate(&mut self, delegate: Box<dyn BannerDelegate>) {
        self.delegate = Some(delegate);
    }

    /// Auto-dismiss deadline while displayed.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            BannerState::Displayed { deadline } => deadline,
            _ => None,
        }
    }

    /// Displays the banner and arms its countdown.
    ///
    /// A banner is shown at most once. Past `Created` the request is
    /// handed back untouched, completion included.
    pub fn show(
        &mut self,
        request: ShowRequest,
        now: Instant,
    ) -> std::result::Result<(), ShowRequest> {
        if self.state != BannerState::Created {
            return Err(request);
        }
        self.animated = request.animated;
        self.completion = request.completion;
        self.state = BannerState::Displayed {
            deadline: request.duration.as_duration().map(|d| now + d),
        };
        Ok(())
    }

    /// Dismisses the banner early.
    ///
    /// `complete_with_action` makes this indistinguishable from an action
    /// button press. The countdown is cancelled before removal starts.
    pub fn dismiss(
        &mut self,
        animated: bool,
        complete_with_action: bool,
        animation: Duration,
        now: Instant,
    ) -> Transition {
        match self.state {
            BannerState::Created => {
                self.finish(complete_with_action);
                Transition::Removed
            }
            BannerState::Displayed { .. } => {
                if animated && !animation.is_zero() {
                    self.state = BannerState::AnimatingOut {
                        until: now + animation,
                        action_taken: complete_with_action,
                    };
                    Transition::ExitStarted
                } else {
                    self.state = BannerState::Displayed { deadline: None };
                    self.finish(complete_with_action);
                    Transition::Removed
                }
            }
            BannerState::AnimatingOut { .. } | BannerState::Removed => Transition::None,
        }
    }

    /// Handles a swipe gesture. Ignored unless swipes are allowed.
    pub fn swipe(&mut self, animation: Duration, now: Instant) -> Transition {
        if !self.allow_swipe || !matches!(self.state, BannerState::Displayed { .. }) {
            return Transition::None;
        }
        self.dismiss(self.animated, false, animation, now)
    }

    /// Handles a press on the action button.
    pub fn press_action(&mut self, animation: Duration, now: Instant) -> Transition {
        if !matches!(self.state, BannerState::Displayed { .. }) {
            return Transition::None;
        }
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.action_pressed(self.key);
        }
        self.dismiss(self.animated, true, animation, now)
    }

    /// Timeout path. Dismisses without action once the deadline passed.
    pub fn expire(&mut self, animation: Duration, now: Instant) -> Transition {
        match self.state {
            BannerState::Displayed {
                deadline: Some(deadline),
            } if now >= deadline => self.dismiss(self.animated, false, animation, now),
            _ => Transition::None,
        }
    }

    /// Completes an exit animation that has run its course.
    pub fn finish_exit(&mut self, now: Instant) -> Transition {
        match self.state {
            BannerState::AnimatingOut {
                until,
                action_taken,
            } if now >= until => {
                self.finish(action_taken);
                Transition::Removed
            }
            _ => Transition::None,
        }
    }

    /// Advances timers: fires the countdown or completes the exit animation.
    pub fn poll(&mut self, animation: Duration, now: Instant) -> Transition {
        match self.expire(animation, now) {
            Transition::None => self.finish_exit(now),
            started => started,
        }
    }

    /// Destruction path: removes the banner whatever its state.
    pub fn release(&mut self) -> Transition {
        if self.is_removed() {
            return Transition::None;
        }
        self.finish(false);
        Transition::Removed
    }

    fn finish(&mut self, action_taken: bool) -> bool {
        if self.is_removed() {
            return false;
        }
        self.state = BannerState::Removed;

        if let Some(completion) = self.completion.take() {
            completion(action_taken);
        }
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.removed(self.key, action_taken);
        }
        self.removal.notify(self.key, action_taken);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snack::signal::RemovalChannel;
    use slotmap::SlotMap;
    use std::cell::RefCell;
    use std::rc::Rc;

    const ANIM: Duration = Duration::from_millis(500);

    fn banner(channel: &RemovalChannel) -> Banner {
        let mut arena: SlotMap<BannerKey, ()> = SlotMap::with_key();
        let key = arena.insert(());
        Banner::new(key, BannerContent::new("Saved"), channel.sender())
    }

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, Completion) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        (calls, Box::new(move |action| sink.borrow_mut().push(action)))
    }

    fn keys(channel: &RemovalChannel) -> Vec<(BannerKey, bool)> {
        channel
            .drain()
            .into_iter()
            .map(|r| (r.key, r.action_taken))
            .collect()
    }

    fn request(secs: f32, animated: bool, completion: Completion) -> ShowRequest {
        ShowRequest {
            duration: DisplayDuration::from_secs(secs),
            animated,
            completion: Some(completion),
        }
    }

    #[test]
    fn show_arms_deadline_only_for_positive_duration() {
        let channel = RemovalChannel::new();
        let now = Instant::now();

        let mut timed = banner(&channel);
        let (_, completion) = recorder();
        timed.show(request(2.0, true, completion), now).unwrap();
        assert_eq!(timed.deadline(), Some(now + Duration::from_secs(2)));

        let mut sticky = banner(&channel);
        let (_, completion) = recorder();
        sticky.show(request(0.0, true, completion), now).unwrap();
        assert!(sticky.deadline().is_none());
        assert!(sticky.is_on_surface());
    }

    #[test]
    fn second_show_is_ignored() {
        let channel = RemovalChannel::new();
        let now = Instant::now();
        let mut b = banner(&channel);
        let (_, first) = recorder();
        let (_, second) = recorder();

        b.show(request(1.0, true, first), now).unwrap();
        let rejected = b.show(request(9.0, true, second), now).unwrap_err();
        assert!(rejected.completion.is_some());
        assert_eq!(b.deadline(), Some(now + Duration::from_secs(1)));
    }

    #[test]
    fn timeout_completes_without_action_after_exit_animation() {
        let channel = RemovalChannel::new();
        let now = Instant::now();
        let mut b = banner(&channel);
        let (calls, completion) = recorder();
        b.show(request(2.0, true, completion), now).unwrap();

        assert_eq!(b.poll(ANIM, now + Duration::from_secs(1)), Transition::None);
        assert_eq!(
            b.poll(ANIM, now + Duration::from_secs(2)),
            Transition::ExitStarted
        );
        assert!(calls.borrow().is_empty());
        assert_eq!(
            b.poll(ANIM, now + Duration::from_millis(2500)),
            Transition::Removed
        );

        assert_eq!(*calls.borrow(), vec![false]);
        assert_eq!(keys(&channel), vec![(b.key(), false)]);
    }

    #[test]
    fn unanimated_dismiss_skips_animating_out() {
        let channel = RemovalChannel::new();
        let now = Instant::now();
        let mut b = banner(&channel);
        let (calls, completion) = recorder();
        b.show(request(5.0, false, completion), now).unwrap();

        assert_eq!(b.dismiss(false, true, ANIM, now), Transition::Removed);
        assert!(b.is_removed());
        assert_eq!(*calls.borrow(), vec![true]);
    }

    #[test]
    fn action_press_completes_with_action() {
        let channel = RemovalChannel::new();
        let now = Instant::now();
        let mut b = banner(&channel);
        let (calls, completion) = recorder();
        b.show(request(5.0, true, completion), now).unwrap();

        assert_eq!(b.press_action(ANIM, now), Transition::ExitStarted);
        // Countdown is cancelled once removal starts.
        assert!(b.deadline().is_none());
        assert_eq!(b.poll(ANIM, now + ANIM), Transition::Removed);
        assert_eq!(*calls.borrow(), vec![true]);
    }

    #[test]
    fn racing_swipe_and_timer_remove_once() {
        let channel = RemovalChannel::new();
        let now = Instant::now();
        let mut b = banner(&channel);
        b.set_allow_swipe(true);
        let (calls, completion) = recorder();
        b.show(request(1.0, false, completion), now).unwrap();

        assert_eq!(b.swipe(ANIM, now), Transition::Removed);
        assert_eq!(b.swipe(ANIM, now), Transition::None);
        assert_eq!(b.poll(ANIM, now + Duration::from_secs(2)), Transition::None);
        assert_eq!(b.release(), Transition::None);

        assert_eq!(calls.borrow().len(), 1);
        assert_eq!(channel.drain().len(), 1);
    }

    #[test]
    fn swipe_is_ignored_when_not_allowed() {
        let channel = RemovalChannel::new();
        let now = Instant::now();
        let mut b = banner(&channel);
        let (_, completion) = recorder();
        b.show(request(1.0, true, completion), now).unwrap();

        assert_eq!(b.swipe(ANIM, now), Transition::None);
        assert!(b.is_on_surface());
    }

    #[test]
    fn release_of_created_banner_signals_removal() {
        let channel = RemovalChannel::new();
        let mut b = banner(&channel);

        assert_eq!(b.release(), Transition::Removed);
        assert_eq!(keys(&channel), vec![(b.key(), false)]);
    }

    #[test]
    fn dismissing_unshown_banner_signals_its_outcome() {
        let channel = RemovalChannel::new();
        let mut b = banner(&channel);

        assert_eq!(
            b.dismiss(true, true, ANIM, Instant::now()),
            Transition::Removed
        );
        assert_eq!(keys(&channel), vec![(b.key(), true)]);
    }

    #[test]
    fn delegate_sees_action_and_removal() {
        #[derive(Default)]
        struct Log(Rc<RefCell<Vec<String>>>);
        impl BannerDelegate for Log {
            fn action_pressed(&mut self, _key: BannerKey) {
                self.0.borrow_mut().push("action".into());
            }
            fn removed(&mut self, _key: BannerKey, action_taken: bool) {
                self.0.borrow_mut().push(format!("removed:{action_taken}"));
            }
        }

        let channel = RemovalChannel::new();
        let now = Instant::now();
        let mut b = banner(&channel);
        let log = Rc::new(RefCell::new(Vec::new()));
        b.set_delegate(Box::new(Log(Rc::clone(&log))));
        let (_, completion) = recorder();
        b.show(request(1.0, false, completion), now).unwrap();

        b.press_action(ANIM, now);
        assert_eq!(*log.borrow(), vec!["action", "removed:true"]);
    }
}
