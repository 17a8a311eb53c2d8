// SPDX-License-Identifier: MPL-2.0
//! Host surface backed by an iced window.
//!
//! Keeps one [`Frame`] per attached banner and tweens it linearly between
//! positions. The toast view reads the frames at render time.

use crate::snack::{BannerContent, BannerKey, HostMetrics, Position, Surface};
use crate::ui::design_tokens::{sizing, spacing, typography};
use std::time::{Duration, Instant};

/// Linear interpolation between two values.
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

fn lerp_position(from: &Position, to: &Position, t: f32) -> Position {
    Position {
        x: lerp(from.x, to.x, t),
        y: lerp(from.y, to.y, t),
        width: lerp(from.width, to.width, t),
        height: lerp(from.height, to.height, t),
        z_order: to.z_order,
    }
}

/// Visual state of one banner on the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub key: BannerKey,
    pub content: BannerContent,
    from: Position,
    to: Position,
    from_alpha: f32,
    to_alpha: f32,
    started: Instant,
    duration: Duration,
    exiting: bool,
}

impl Frame {
    /// Fraction of the current tween that has elapsed, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn position(&self, now: Instant) -> Position {
        lerp_position(&self.from, &self.to, self.progress(now))
    }

    #[must_use]
    pub fn alpha(&self, now: Instant) -> f32 {
        lerp(self.from_alpha, self.to_alpha, self.progress(now))
    }

    /// Where the frame ends up once the tween completes.
    #[must_use]
    pub fn target(&self) -> Position {
        self.to
    }

    #[must_use]
    pub fn is_exiting(&self) -> bool {
        self.exiting
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }

    fn retarget(&mut self, to: Position, to_alpha: f32, animation: Option<Duration>, now: Instant) {
        self.from = self.position(now);
        self.from_alpha = self.alpha(now);
        self.to = to;
        self.to_alpha = to_alpha;
        self.started = now;
        self.duration = animation.unwrap_or_default();
    }
}

/// Snackbar surface for an iced window.
#[derive(Debug, Clone)]
pub struct IcedSurface {
    metrics: HostMetrics,
    frames: Vec<Frame>,
    now: Instant,
}

impl IcedSurface {
    #[must_use]
    pub fn new(metrics: HostMetrics) -> Self {
        Self {
            metrics,
            frames: Vec::new(),
            now: Instant::now(),
        }
    }

    /// Updates the host size. Call `Snackbar::invalidate_layout` afterwards.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.metrics.width = width;
        self.metrics.height = height;
    }

    pub fn set_safe_area_bottom(&mut self, inset: f32) {
        self.metrics = self.metrics.with_safe_area_bottom(inset);
    }

    /// Moves the animation clock forward.
    pub fn advance(&mut self, now: Instant) {
        self.now = now;
    }

    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Frames in paint order, bottom-most first.
    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        let mut ordered: Vec<&Frame> = self.frames.iter().collect();
        ordered.sort_by_key(|frame| frame.to.z_order);
        ordered.into_iter()
    }

    #[must_use]
    pub fn frame(&self, key: BannerKey) -> Option<&Frame> {
        self.frames.iter().find(|frame| frame.key == key)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.frames.iter().any(|frame| frame.is_animating(self.now))
    }

    /// Resting position below the bottom edge, used for entry and exit.
    fn offscreen(&self, position: &Position) -> Position {
        Position {
            y: self.metrics.height,
            ..*position
        }
    }
}

impl Surface for IcedSurface {
    fn metrics(&self) -> HostMetrics {
        self.metrics
    }

    fn measure(&self, content: &BannerContent, width: f32) -> f32 {
        let mut text_width = width - 2.0 * spacing::SM;
        if content.action_label.is_some() {
            text_width -= sizing::ACTION_WIDTH;
        }
        if content.icon.is_some() {
            text_width -= sizing::ICON_MD + spacing::XS;
        }
        let glyph = typography::BODY * typography::GLYPH_WIDTH;
        let per_line = (text_width / glyph).floor().max(1.0);
        #[allow(clippy::cast_precision_loss)] // Title lengths are far below f32 precision limits
        let lines = (content.title.chars().count() as f32 / per_line).ceil().max(1.0);
        lines * typography::BODY * typography::LINE_HEIGHT + 2.0 * spacing::SM
    }

    fn attach(
        &mut self,
        key: BannerKey,
        content: &BannerContent,
        position: Position,
        animation: Option<Duration>,
    ) {
        let (from, from_alpha) = match animation {
            Some(_) => (self.offscreen(&position), 0.0),
            None => (position, 1.0),
        };
        self.frames.retain(|frame| frame.key != key);
        self.frames.push(Frame {
            key,
            content: content.clone(),
            from,
            to: position,
            from_alpha,
            to_alpha: 1.0,
            started: self.now,
            duration: animation.unwrap_or_default(),
            exiting: false,
        });
    }

    fn relocate(&mut self, key: BannerKey, position: Position, animation: Option<Duration>) {
        let now = self.now;
        if let Some(frame) = self.frames.iter_mut().find(|frame| frame.key == key) {
            let alpha = frame.to_alpha;
            frame.retarget(position, alpha, animation, now);
        }
    }

    fn begin_exit(&mut self, key: BannerKey, animation: Option<Duration>) {
        let now = self.now;
        let Some(index) = self.frames.iter().position(|frame| frame.key == key) else {
            return;
        };
        let target = self.offscreen(&self.frames[index].to);
        let frame = &mut self.frames[index];
        frame.exiting = true;
        frame.retarget(target, 0.0, animation, now);
    }

    fn detach(&mut self, key: BannerKey) {
        self.frames.retain(|frame| frame.key != key);
    }
}
