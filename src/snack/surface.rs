// SPDX-License-Identifier: MPL-2.0
//! Host surface capability.
//!
//! The queue and the banner state machine never draw anything themselves.
//! They drive a [`Surface`], which owns the visual side: measuring a
//! banner, placing it, tweening it between positions and removing it.

use super::banner::BannerContent;
use super::handle::BannerKey;
use super::layout::{HostMetrics, Position};
use std::time::Duration;

/// Rendering and animation capability provided by the host.
///
/// `animation` is `None` for an instant change.
pub trait Surface {
    /// Current host dimensions.
    fn metrics(&self) -> HostMetrics;

    /// Height the banner content needs at `width`.
    ///
    /// The configured height floor is applied afterwards, so returning 0
    /// means "use the floor".
    fn measure(&self, content: &BannerContent, width: f32) -> f32 {
        let _ = (content, width);
        0.0
    }

    /// Puts a banner on the surface and animates it in.
    fn attach(
        &mut self,
        key: BannerKey,
        content: &BannerContent,
        position: Position,
        animation: Option<Duration>,
    );

    /// Moves an attached banner, e.g. when the stack collapses.
    fn relocate(&mut self, key: BannerKey, position: Position, animation: Option<Duration>);

    /// Starts the exit animation of an attached banner.
    fn begin_exit(&mut self, key: BannerKey, animation: Option<Duration>);

    /// Removes a banner from the surface.
    fn detach(&mut self, key: BannerKey);
}
