// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use iced::{time, window, Subscription};
use std::time::Duration;

/// Frame interval while banners are on screen or moving.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Window resizes always; the animation tick only while `active`.
pub fn create(active: bool) -> Subscription<Message> {
    let resize = window::resize_events().map(|(_id, size)| Message::Resized(size));

    if active {
        Subscription::batch([resize, time::every(TICK_INTERVAL).map(Message::Tick)])
    } else {
        resize
    }
}
