// SPDX-License-Identifier: MPL-2.0
//! Banner arena and host surface.
//!
//! The stage owns every banner, keyed by [`BannerKey`], together with the
//! host surface they render into and the stack of banners currently
//! attached to it. It is the queue's [`Presenter`].

use super::banner::{Banner, BannerContent, DismissCause, ShowRequest, Transition};
use super::handle::BannerKey;
use super::item::Presenter;
use super::layout::{LayoutConfig, LayoutResolver, Placement};
use super::signal::{Removal, RemovalChannel};
use super::surface::Surface;
use crate::diagnostics::{DiagnosticsHandle, SnackEventKind};
use crate::domain::snack::AnimationDuration;
use crate::error::{Error, Result};
use slotmap::SlotMap;
use std::time::{Duration, Instant};

pub struct Stage<S> {
    banners: SlotMap<BannerKey, Banner>,
    surface: Option<S>,
    resolver: LayoutResolver,
    /// Banners on the surface, in insertion order.
    attached: Vec<Placement>,
    next_sequence: u64,
    animation: AnimationDuration,
    allow_swipe: bool,
    now: Instant,
    removal: RemovalChannel,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<S> std::fmt::Debug for Stage<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("banners", &self.banners.len())
            .field("has_surface", &self.surface.is_some())
            .field("attached", &self.attached)
            .finish_non_exhaustive()
    }
}

impl<S: Surface> Stage<S> {
    #[must_use]
    pub fn new(layout: LayoutConfig, animation: AnimationDuration, allow_swipe: bool) -> Self {
        Self {
            banners: SlotMap::with_key(),
            surface: None,
            resolver: LayoutResolver::new(layout),
            attached: Vec::new(),
            next_sequence: 0,
            animation,
            allow_swipe,
            now: Instant::now(),
            removal: RemovalChannel::new(),
            diagnostics: None,
        }
    }

    /// Time used by operations that do not take one explicitly.
    pub fn set_clock(&mut self, now: Instant) {
        self.now = now;
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    pub fn set_animation(&mut self, animation: AnimationDuration) {
        self.animation = animation;
    }

    /// Applies to banners shown from now on.
    pub fn set_allow_swipe(&mut self, allow: bool) {
        self.allow_swipe = allow;
    }

    #[must_use]
    pub fn animation(&self) -> Duration {
        self.animation.as_duration()
    }

    // ---------------------------------------------------------------------
    // Banners
    // ---------------------------------------------------------------------

    pub fn create(&mut self, content: BannerContent) -> BannerKey {
        let sender = self.removal.sender();
        self.banners
            .insert_with_key(|key| Banner::new(key, content, sender))
    }

    #[must_use]
    pub fn contains(&self, key: BannerKey) -> bool {
        self.banners.contains_key(key)
    }

    #[must_use]
    pub fn banner(&self, key: BannerKey) -> Option<&Banner> {
        self.banners.get(key)
    }

    pub fn banner_mut(&mut self, key: BannerKey) -> Option<&mut Banner> {
        self.banners.get_mut(key)
    }

    /// Drops a banner from the arena, signalling removal if it was live.
    pub fn release(&mut self, key: BannerKey) -> bool {
        let Some(mut banner) = self.banners.remove(key) else {
            return false;
        };
        if banner.release() == Transition::Removed {
            self.emit(SnackEventKind::Dismissed {
                banner: key,
                cause: DismissCause::Released,
            });
        }
        true
    }

    /// Mirrors a banner transition on the surface.
    pub fn apply(&mut self, key: BannerKey, transition: Transition, cause: DismissCause) {
        match transition {
            Transition::None => return,
            Transition::ExitStarted => {
                let animation = self.animation();
                if let Some(surface) = self.surface.as_mut() {
                    surface.begin_exit(key, Some(animation));
                }
            }
            // The surface is updated once the removal signal is processed.
            Transition::Removed => {}
        }
        tracing::debug!(?key, ?cause, ?transition, "banner dismissed");
        self.emit(SnackEventKind::Dismissed { banner: key, cause });
    }

    /// Fires due countdowns and completes finished exit animations.
    pub fn poll(&mut self, now: Instant) {
        self.now = now;
        let animation = self.animation();

        let live: Vec<BannerKey> = self
            .banners
            .iter()
            .filter(|(_, banner)| banner.is_on_surface())
            .map(|(key, _)| key)
            .collect();

        for key in live {
            let Some(banner) = self.banners.get_mut(key) else {
                continue;
            };
            let expired = banner.expire(animation, now);
            let finished = banner.finish_exit(now);
            if expired != Transition::None {
                self.apply(key, expired, DismissCause::Timeout);
            }
            if finished == Transition::Removed {
                tracing::trace!(?key, "exit animation finished");
            }
        }
    }

    // ---------------------------------------------------------------------
    // Removal signals
    // ---------------------------------------------------------------------

    pub fn drain_removals(&self) -> Vec<Removal> {
        self.removal.drain()
    }

    #[must_use]
    pub fn has_pending_removals(&self) -> bool {
        self.removal.has_pending()
    }

    /// Takes a removed banner off the surface and collapses the stack.
    pub fn on_removed(&mut self, key: BannerKey) {
        let Some(index) = self.attached.iter().position(|p| p.key == key) else {
            return;
        };
        self.attached.remove(index);
        if let Some(surface) = self.surface.as_mut() {
            surface.detach(key);
        }
        let animation = self.animation();
        self.restack(Some(animation).filter(|d| !d.is_zero()));
    }

    // ---------------------------------------------------------------------
    // Layout
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn layout(&self) -> &LayoutConfig {
        self.resolver.config()
    }

    /// Stores new layout options without moving anything.
    pub fn set_layout(&mut self, config: LayoutConfig) {
        self.resolver.set_config(config);
    }

    /// Re-measures and re-stacks every attached banner.
    ///
    /// Returns how many banners were laid out.
    pub fn invalidate_layout(&mut self) -> usize {
        let Some(surface) = self.surface.as_ref() else {
            return 0;
        };
        let metrics = surface.metrics();
        let width = self.resolver.banner_width(&metrics);

        for placement in &mut self.attached {
            if let Some(banner) = self.banners.get(placement.key) {
                let measured = surface.measure(banner.content(), width);
                placement.position.height = self.resolver.banner_height(measured);
            }
        }

        let animation = self.animation();
        self.restack(Some(animation).filter(|d| !d.is_zero()));
        self.emit(SnackEventKind::LayoutInvalidated {
            attached: self.attached.len(),
        });
        self.attached.len()
    }

    fn restack(&mut self, animation: Option<Duration>) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let stack: Vec<(BannerKey, f32, u64)> = self
            .attached
            .iter()
            .map(|p| (p.key, p.position.height, p.sequence))
            .collect();
        let placements = self.resolver.restack(&surface.metrics(), &stack);

        for (old, new) in self.attached.iter().zip(&placements) {
            if old.position != new.position {
                surface.relocate(new.key, new.position, animation);
            }
        }
        self.attached = placements;
    }

    /// Attached banners with their current positions, oldest first.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.attached
    }

    // ---------------------------------------------------------------------
    // Surface
    // ---------------------------------------------------------------------

    /// Installs a surface and re-attaches every banner still on screen.
    pub fn attach_surface(&mut self, surface: S) {
        self.surface = Some(surface);
        self.restack(None);

        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        for placement in &self.attached {
            if let Some(banner) = self.banners.get(placement.key) {
                surface.attach(placement.key, banner.content(), placement.position, None);
            }
        }
    }

    pub fn detach_surface(&mut self) -> Option<S> {
        let surface = self.surface.take();
        if surface.is_some() && !self.attached.is_empty() {
            tracing::warn!(
                attached = self.attached.len(),
                "host surface detached with banners on screen"
            );
        }
        surface
    }

    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Returns true while banners are on screen or signals are waiting.
    #[must_use]
    pub fn has_activity(&self) -> bool {
        !self.attached.is_empty()
            || self.removal.has_pending()
            || self.banners.values().any(Banner::is_on_surface)
    }

    pub fn emit(&self, kind: SnackEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log_at(kind, self.now);
        }
    }
}

impl<S: Surface> Presenter for Stage<S> {
    fn ensure_ready(&self) -> Result<()> {
        if self.surface.is_some() {
            Ok(())
        } else {
            Err(Error::NoHostSurface)
        }
    }

    fn present(
        &mut self,
        key: BannerKey,
        request: ShowRequest,
    ) -> std::result::Result<(), ShowRequest> {
        let Some(surface) = self.surface.as_mut() else {
            tracing::error!(?key, "no host surface to present banner");
            return Err(request);
        };
        let Some(banner) = self.banners.get_mut(key) else {
            tracing::debug!(?key, "banner released before it could be shown");
            return Err(request);
        };

        let display_secs = request.duration.as_duration().map(|d| d.as_secs_f32());
        let animated = request.animated;
        if let Err(request) = banner.show(request, self.now) {
            tracing::warn!(?key, state = ?banner.state(), "banner was already presented");
            return Err(request);
        }
        banner.set_allow_swipe(self.allow_swipe);

        let metrics = surface.metrics();
        let width = self.resolver.banner_width(&metrics);
        let height = self
            .resolver
            .banner_height(surface.measure(banner.content(), width));
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let position = self
            .resolver
            .resolve(&metrics, &self.attached, key, height, false, sequence);
        let animation = Some(self.animation.as_duration()).filter(|d| animated && !d.is_zero());
        surface.attach(key, banner.content(), position, animation);
        self.attached.push(Placement {
            key,
            position,
            sequence,
        });

        tracing::debug!(?key, y = position.y, z = position.z_order, "banner shown");
        self.emit(SnackEventKind::Shown {
            banner: key,
            display_secs,
            animated,
        });
        Ok(())
    }
}
