// SPDX-License-Identifier: MPL-2.0
//! Pointer swipe detection over banners.
//!
//! A swipe is a press followed by a release on the same banner after the
//! pointer travelled far enough horizontally.

use crate::snack::BannerKey;
use iced::Point;

/// Horizontal travel (in logical pixels) that turns a drag into a swipe.
pub const SWIPE_THRESHOLD: f32 = 48.0;

/// Messages produced by the toast view's mouse areas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Moved(BannerKey, Point),
    Pressed(BannerKey),
    Released(BannerKey),
    Exited(BannerKey),
}

/// Effects produced by swipe tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Swiped(BannerKey),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    /// Last pointer position seen over a banner.
    pointer: Option<(BannerKey, Point)>,
    /// Banner and x coordinate where the current press started.
    press: Option<(BannerKey, f32)>,
}

impl State {
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Moved(key, point) => {
                self.pointer = Some((key, point));
                Effect::None
            }
            Message::Pressed(key) => {
                self.press = self
                    .pointer
                    .filter(|(over, _)| *over == key)
                    .map(|(_, point)| (key, point.x));
                Effect::None
            }
            Message::Released(key) => {
                let Some((pressed, start_x)) = self.press.take() else {
                    return Effect::None;
                };
                let travelled = self
                    .pointer
                    .filter(|(over, _)| *over == key)
                    .map_or(0.0, |(_, point)| (point.x - start_x).abs());

                if pressed == key && travelled >= SWIPE_THRESHOLD {
                    Effect::Swiped(key)
                } else {
                    Effect::None
                }
            }
            Message::Exited(key) => {
                if self.pointer.is_some_and(|(over, _)| over == key) {
                    self.pointer = None;
                }
                Effect::None
            }
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.press.is_some()
    }
}
