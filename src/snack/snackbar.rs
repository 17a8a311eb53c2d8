// SPDX-License-Identifier: MPL-2.0
//! Public entry point tying the queue, the stage and removal signals together.
//!
//! Every operation that can make a banner leave the screen drains the
//! removal channel before returning, so when a call returns the queue has
//! already promoted whatever the removal made room for.

use super::banner::{Banner, BannerContent, BannerDelegate, Completion, DismissCause, Transition};
use super::handle::BannerKey;
use super::item::{Presenter, SnackItem};
use super::layout::{LayoutConfig, Placement};
use super::queue::QueueManager;
use super::signal::Removal;
use super::stage::Stage;
use super::surface::Surface;
use crate::diagnostics::{DiagnosticsHandle, SnackEventKind};
use crate::domain::snack::{AnimationDuration, DisplayDuration, MaxConcurrent};
use crate::error::Result;
use std::fmt;
use std::time::Instant;

/// Snackbar-wide behavior. See [`crate::config`] for the on-disk form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnackbarConfig {
    pub max_concurrent: MaxConcurrent,
    pub layout: LayoutConfig,
    pub animation: AnimationDuration,
    /// On-screen time for presentations that do not set their own.
    pub display_duration: DisplayDuration,
    pub animated: bool,
    pub allow_swipe_gestures: bool,
}

impl Default for SnackbarConfig {
    fn default() -> Self {
        use crate::config::defaults as d;
        Self {
            max_concurrent: MaxConcurrent::default(),
            layout: LayoutConfig::default(),
            animation: AnimationDuration::default(),
            display_duration: DisplayDuration::default(),
            animated: d::DEFAULT_ANIMATED,
            allow_swipe_gestures: d::DEFAULT_ALLOW_SWIPE_GESTURES,
        }
    }
}

/// Per-presentation overrides. Unset fields use the [`SnackbarConfig`].
#[derive(Default)]
pub struct PresentOptions {
    pub duration: Option<DisplayDuration>,
    pub animated: Option<bool>,
    pub completion: Option<Completion>,
}

impl fmt::Debug for PresentOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentOptions")
            .field("duration", &self.duration)
            .field("animated", &self.animated)
            .field("has_completion", &self.completion.is_some())
            .finish()
    }
}

impl PresentOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn duration(mut self, duration: DisplayDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = Some(animated);
        self
    }

    /// Called once with `action_taken` when the banner leaves the screen.
    #[must_use]
    pub fn on_complete(mut self, completion: impl FnOnce(bool) + 'static) -> Self {
        self.completion = Some(Box::new(completion));
        self
    }
}

/// Presents banners over a host [`Surface`].
pub struct Snackbar<S> {
    config: SnackbarConfig,
    stage: Stage<S>,
    queue: QueueManager,
}

impl<S> fmt::Debug for Snackbar<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snackbar")
            .field("config", &self.config)
            .field("stage", &self.stage)
            .field("queue", &self.queue)
            .finish()
    }
}

impl<S: Surface> Snackbar<S> {
    /// Creates a snackbar without a host surface.
    ///
    /// Banners can be created right away but presenting fails until
    /// [`attach_surface`](Self::attach_surface) is called.
    #[must_use]
    pub fn new(config: SnackbarConfig) -> Self {
        Self {
            stage: Stage::new(config.layout, config.animation, config.allow_swipe_gestures),
            queue: QueueManager::new(config.max_concurrent),
            config,
        }
    }

    #[must_use]
    pub fn with_surface(config: SnackbarConfig, surface: S) -> Self {
        let mut snackbar = Self::new(config);
        snackbar.stage.attach_surface(surface);
        snackbar
    }

    #[must_use]
    pub fn config(&self) -> &SnackbarConfig {
        &self.config
    }

    #[must_use]
    pub fn queue(&self) -> &QueueManager {
        &self.queue
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.stage.set_diagnostics(handle);
    }

    // ---------------------------------------------------------------------
    // Surface
    // ---------------------------------------------------------------------

    /// Installs the host surface and admits whatever was waiting for it.
    ///
    /// # Errors
    ///
    /// Propagates admission errors, which cannot occur once a surface is set.
    pub fn attach_surface(&mut self, surface: S, now: Instant) -> Result<()> {
        self.stage.set_clock(now);
        self.stage.attach_surface(surface);
        self.queue.evaluate(&mut self.stage)?;
        Ok(())
    }

    /// Removes the host surface. Banners keep their timers.
    pub fn detach_surface(&mut self) -> Option<S> {
        self.stage.detach_surface()
    }

    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.stage.surface()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.stage.surface_mut()
    }

    // ---------------------------------------------------------------------
    // Banners
    // ---------------------------------------------------------------------

    pub fn create_banner(&mut self, content: BannerContent) -> BannerKey {
        self.stage.create(content)
    }

    /// Returns false if the banner was released.
    pub fn set_delegate(&mut self, key: BannerKey, delegate: Box<dyn BannerDelegate>) -> bool {
        match self.stage.banner_mut(key) {
            Some(banner) => {
                banner.set_delegate(delegate);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn banner(&self, key: BannerKey) -> Option<&Banner> {
        self.stage.banner(key)
    }

    /// Queues a banner for presentation.
    ///
    /// Released banners are ignored. A banner is shown at most once: a
    /// request for one that was already presented is dropped when it
    /// reaches the front, and its completion sees `false`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoHostSurface`](crate::error::Error::NoHostSurface)
    /// when no surface is attached. The banner is not queued in that case.
    pub fn present(&mut self, key: BannerKey, options: PresentOptions, now: Instant) -> Result<()> {
        self.stage.set_clock(now);
        if let Err(err) = self.stage.ensure_ready() {
            tracing::error!(?key, "cannot present banner: {err}");
            self.stage.emit(SnackEventKind::SurfaceMissing);
            return Err(err);
        }
        if !self.stage.contains(key) {
            tracing::warn!(?key, "present called for a released banner");
            return Ok(());
        }

        let mut item = SnackItem::new(key)
            .with_duration(options.duration.unwrap_or(self.config.display_duration))
            .with_animated(options.animated.unwrap_or(self.config.animated));
        if let Some(completion) = options.completion {
            item = item.with_completion(completion);
        }

        self.stage.emit(SnackEventKind::Enqueued {
            banner: key,
            queued: self.queue.len(),
        });
        self.queue.enqueue(item, &mut self.stage)?;
        self.process_removals()
    }

    /// Dismisses a banner early.
    ///
    /// With `complete_with_action` the completion sees `true`, exactly as
    /// if the action button had been pressed. Returns whether anything
    /// changed.
    ///
    /// # Errors
    ///
    /// Returns an error if freeing the slot could not admit the next banner.
    pub fn dismiss(
        &mut self,
        key: BannerKey,
        animated: bool,
        complete_with_action: bool,
        now: Instant,
    ) -> Result<bool> {
        let cause = if complete_with_action {
            DismissCause::Action
        } else {
            DismissCause::Programmatic
        };
        self.drive(key, now, cause, |banner, animation| {
            banner.dismiss(animated, complete_with_action, animation, now)
        })
    }

    /// Handles a press on a banner's action button.
    ///
    /// # Errors
    ///
    /// See [`dismiss`](Self::dismiss).
    pub fn press_action(&mut self, key: BannerKey, now: Instant) -> Result<bool> {
        self.drive(key, now, DismissCause::Action, |banner, animation| {
            banner.press_action(animation, now)
        })
    }

    /// Handles a swipe gesture. Ignored unless swipes are allowed.
    ///
    /// # Errors
    ///
    /// See [`dismiss`](Self::dismiss).
    pub fn swipe(&mut self, key: BannerKey, now: Instant) -> Result<bool> {
        self.drive(key, now, DismissCause::Swipe, |banner, animation| {
            banner.swipe(animation, now)
        })
    }

    /// Destroys a banner. A banner still on screen or in the queue reports
    /// its removal, so it never holds a queue slot after release.
    ///
    /// # Errors
    ///
    /// See [`dismiss`](Self::dismiss).
    pub fn release(&mut self, key: BannerKey, now: Instant) -> Result<bool> {
        self.stage.set_clock(now);
        let released = self.stage.release(key);
        self.process_removals()?;
        Ok(released)
    }

    fn drive(
        &mut self,
        key: BannerKey,
        now: Instant,
        cause: DismissCause,
        step: impl FnOnce(&mut Banner, std::time::Duration) -> Transition,
    ) -> Result<bool> {
        self.stage.set_clock(now);
        let animation = self.stage.animation();
        let Some(banner) = self.stage.banner_mut(key) else {
            tracing::debug!(?key, "interaction with released banner ignored");
            return Ok(false);
        };
        let transition = step(banner, animation);
        self.stage.apply(key, transition, cause);
        self.process_removals()?;
        Ok(transition != Transition::None)
    }

    // ---------------------------------------------------------------------
    // Queue
    // ---------------------------------------------------------------------

    /// Forgets every queued item. Banners on screen stay until they leave
    /// on their own. Returns how many items were discarded.
    pub fn reset_all(&mut self) -> usize {
        let discarded = self.queue.reset_all();
        self.stage.emit(SnackEventKind::QueueReset { discarded });
        discarded
    }

    /// Takes effect on the next admission evaluation.
    pub fn configure_max_concurrent(&mut self, max_concurrent: MaxConcurrent) {
        self.config.max_concurrent = max_concurrent;
        self.queue.configure(max_concurrent);
    }

    // ---------------------------------------------------------------------
    // Layout
    // ---------------------------------------------------------------------

    /// Stores layout options. Nothing moves until
    /// [`invalidate_layout`](Self::invalidate_layout).
    pub fn set_layout(&mut self, layout: LayoutConfig) {
        self.config.layout = layout;
        self.stage.set_layout(layout);
    }

    /// Re-measures and re-stacks every banner on screen.
    pub fn invalidate_layout(&mut self) -> usize {
        self.stage.invalidate_layout()
    }

    /// Banners on screen with their resolved positions, oldest first.
    #[must_use]
    pub fn positions(&self) -> &[Placement] {
        self.stage.placements()
    }

    // ---------------------------------------------------------------------
    // Time
    // ---------------------------------------------------------------------

    /// Fires due timeouts, finishes exit animations and processes removals.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoHostSurface`](crate::error::Error::NoHostSurface)
    /// if a freed slot cannot be filled because the surface is gone.
    pub fn tick(&mut self, now: Instant) -> Result<()> {
        self.stage.poll(now);
        self.process_removals()
    }

    /// Returns true while ticking can change anything.
    #[must_use]
    pub fn has_activity(&self) -> bool {
        self.stage.has_activity()
    }

    /// Handles every queued removal signal in arrival order.
    ///
    /// All signals are handled even if one of them fails to admit the next
    /// banner; the first error is returned.
    fn process_removals(&mut self) -> Result<()> {
        let mut first_error = None;
        loop {
            let removed = self.stage.drain_removals();
            if removed.is_empty() {
                break;
            }
            for Removal { key, action_taken } in removed {
                self.stage.on_removed(key);
                match self.queue.on_banner_removed(key, action_taken, &mut self.stage) {
                    Ok(evicted) => {
                        self.stage.emit(SnackEventKind::Removed {
                            banner: key,
                            evicted,
                        });
                    }
                    Err(err) => {
                        tracing::error!(?key, "admission after removal failed: {err}");
                        self.stage.emit(SnackEventKind::SurfaceMissing);
                        first_error.get_or_insert(err);
                    }
                }
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}
