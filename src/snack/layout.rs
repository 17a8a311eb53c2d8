// SPDX-License-Identifier: MPL-2.0
//! Stacked banner placement.
//!
//! Banners are anchored to the bottom of the host surface and stack upward
//! in insertion order. Coordinates are in logical pixels with the origin at
//! the host's top-left corner.

use super::handle::BannerKey;
use crate::domain::snack::{BannerHeight, WidthPercent};

/// Host surface dimensions the resolver works against.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HostMetrics {
    pub width: f32,
    pub height: f32,
    /// Bottom inset of the host's safe drawing area.
    pub safe_area_bottom: f32,
}

impl HostMetrics {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            safe_area_bottom: 0.0,
        }
    }

    #[must_use]
    pub fn with_safe_area_bottom(mut self, inset: f32) -> Self {
        self.safe_area_bottom = inset.max(0.0);
        self
    }
}

/// Where a banner sits on the host surface.
///
/// `z_order` is paint order: a higher value paints above a lower one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub z_order: i32,
}

/// A banner currently attached to the host surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub key: BannerKey,
    pub position: Position,
    /// Insertion sequence on the surface, used for z-ordering.
    pub sequence: u64,
}

/// Layout options. Changing them never relayouts on its own; call
/// [`Snackbar::invalidate_layout`](super::Snackbar::invalidate_layout)
/// after a batch of changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub width_percent: WidthPercent,
    pub height: BannerHeight,
    pub bottom_spacing: f32,
    pub stacked_bottom_spacing: f32,
    pub adjusts_for_safe_area: bool,
    pub show_under_host_container: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        use crate::config::defaults as d;
        Self {
            width_percent: WidthPercent::default(),
            height: BannerHeight::default(),
            bottom_spacing: d::DEFAULT_BOTTOM_SPACING,
            stacked_bottom_spacing: d::DEFAULT_STACKED_BOTTOM_SPACING,
            adjusts_for_safe_area: d::DEFAULT_ADJUSTS_FOR_SAFE_AREA,
            show_under_host_container: d::DEFAULT_SHOW_UNDER_HOST_CONTAINER,
        }
    }
}

/// Computes non-overlapping stacked positions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutResolver {
    config: LayoutConfig,
}

impl LayoutResolver {
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
    }

    /// Banner width for the given host.
    #[must_use]
    pub fn banner_width(&self, host: &HostMetrics) -> f32 {
        self.config.width_percent.of(host.width)
    }

    /// Applies the configured height floor to a measured height.
    #[must_use]
    pub fn banner_height(&self, measured: f32) -> f32 {
        self.config.height.floor(measured)
    }

    /// Paint order for the banner inserted at `sequence`.
    ///
    /// Newer banners paint above older ones. Under the host container every
    /// value is negative and the order inverts, so the newest sits furthest
    /// back.
    #[must_use]
    pub fn z_order(&self, sequence: u64) -> i32 {
        let rank = i32::try_from(sequence).unwrap_or(i32::MAX - 1);
        if self.config.show_under_host_container {
            -(rank.saturating_add(1))
        } else {
            rank
        }
    }

    /// Resolves the position of `target` among the attached `siblings`.
    ///
    /// `siblings` must be in insertion order. With `from_bottom` only the
    /// siblings inserted before `target` are considered, which is how a
    /// stack is rebuilt from the anchor upward. Otherwise the most recent
    /// other sibling is used, which is how a new banner joins the top.
    #[must_use]
    pub fn resolve(
        &self,
        host: &HostMetrics,
        siblings: &[Placement],
        target: BannerKey,
        height: f32,
        from_bottom: bool,
        sequence: u64,
    ) -> Position {
        let candidates = if from_bottom {
            let end = siblings
                .iter()
                .position(|p| p.key == target)
                .unwrap_or(siblings.len());
            &siblings[..end]
        } else {
            siblings
        };

        let below = candidates.iter().rev().find(|p| p.key != target);
        self.place(host, below.map(|p| &p.position), height, sequence)
    }

    /// Rebuilds a whole stack from the anchor upward.
    ///
    /// `stack` holds `(key, height, sequence)` in insertion order. The
    /// returned placements keep that order.
    #[must_use]
    pub fn restack(&self, host: &HostMetrics, stack: &[(BannerKey, f32, u64)]) -> Vec<Placement> {
        let mut placed: Vec<Placement> = Vec::with_capacity(stack.len());
        for &(key, height, sequence) in stack {
            let position = self.place(host, placed.last().map(|p| &p.position), height, sequence);
            placed.push(Placement {
                key,
                position,
                sequence,
            });
        }
        placed
    }

    fn place(
        &self,
        host: &HostMetrics,
        below: Option<&Position>,
        height: f32,
        sequence: u64,
    ) -> Position {
        let width = self.banner_width(host);
        let z_order = self.z_order(sequence);

        match below {
            Some(below) => Position {
                x: below.x,
                y: below.y - self.config.stacked_bottom_spacing - height,
                width: below.width,
                height,
                z_order,
            },
            None => {
                let mut y = host.height - self.config.bottom_spacing - height;
                if self.config.adjusts_for_safe_area {
                    y -= host.safe_area_bottom;
                }
                Position {
                    x: (host.width - width) / 2.0,
                    y,
                    width,
                    height,
                    z_order,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use slotmap::SlotMap;

    fn keys(n: usize) -> Vec<BannerKey> {
        let mut arena: SlotMap<BannerKey, ()> = SlotMap::with_key();
        (0..n).map(|_| arena.insert(())).collect()
    }

    fn host() -> HostMetrics {
        HostMetrics::new(400.0, 800.0)
    }

    #[test]
    fn single_banner_is_anchored_and_centered() {
        let resolver = LayoutResolver::default();
        let k = keys(1);

        let pos = resolver.resolve(&host(), &[], k[0], 50.0, false, 0);

        assert_relative_eq!(pos.width, 392.0, epsilon = 1e-3);
        assert_relative_eq!(pos.x, 4.0, epsilon = 1e-3);
        assert_relative_eq!(pos.y, 800.0 - 16.0 - 50.0);
        assert_relative_eq!(pos.height, 50.0);
    }

    #[test]
    fn safe_area_lifts_anchor_only_when_enabled() {
        let metrics = host().with_safe_area_bottom(34.0);
        let k = keys(1);

        let adjusted = LayoutResolver::default().resolve(&metrics, &[], k[0], 50.0, false, 0);
        assert_relative_eq!(adjusted.y, 800.0 - 16.0 - 50.0 - 34.0);

        let ignoring = LayoutResolver::new(LayoutConfig {
            adjusts_for_safe_area: false,
            ..LayoutConfig::default()
        })
        .resolve(&metrics, &[], k[0], 50.0, false, 0);
        assert_relative_eq!(ignoring.y, 800.0 - 16.0 - 50.0);
    }

    #[test]
    fn new_banner_stacks_above_most_recent_sibling() {
        let resolver = LayoutResolver::default();
        let k = keys(2);
        let first = resolver.resolve(&host(), &[], k[0], 50.0, false, 0);
        let siblings = [Placement {
            key: k[0],
            position: first,
            sequence: 0,
        }];

        let second = resolver.resolve(&host(), &siblings, k[1], 60.0, false, 1);

        assert_relative_eq!(second.y, first.y - 8.0 - 60.0);
        assert_relative_eq!(second.x, first.x);
        assert_relative_eq!(second.width, first.width);
        assert!(second.z_order > first.z_order);
    }

    #[test]
    fn from_bottom_ignores_siblings_above_target() {
        let resolver = LayoutResolver::default();
        let k = keys(2);
        let stacked = resolver.restack(&host(), &[(k[0], 50.0, 0), (k[1], 60.0, 1)]);

        let oldest = resolver.resolve(&host(), &stacked, k[0], 50.0, true, 0);
        assert_relative_eq!(oldest.y, 800.0 - 16.0 - 50.0);

        let not_from_bottom = resolver.resolve(&host(), &stacked, k[0], 50.0, false, 0);
        assert_relative_eq!(not_from_bottom.y, stacked[1].position.y - 8.0 - 50.0);
    }

    #[test]
    fn restack_collapses_after_removal() {
        let resolver = LayoutResolver::default();
        let k = keys(2);

        let both = resolver.restack(&host(), &[(k[0], 50.0, 0), (k[1], 60.0, 1)]);
        assert_relative_eq!(both[1].position.y, 734.0 - 8.0 - 60.0);

        let only_newer = resolver.restack(&host(), &[(k[1], 60.0, 1)]);
        assert_relative_eq!(only_newer[0].position.y, 800.0 - 16.0 - 60.0);
    }

    #[test]
    fn out_of_range_width_uses_default_fraction() {
        let resolver = LayoutResolver::new(LayoutConfig {
            width_percent: WidthPercent::new(1.5),
            ..LayoutConfig::default()
        });
        let k = keys(1);

        let pos = resolver.resolve(&host(), &[], k[0], 50.0, false, 0);
        assert_relative_eq!(pos.width, 400.0 * 0.98, epsilon = 1e-3);
        assert!(pos.width > 0.0);
    }

    #[test]
    fn under_container_inverts_z_order() {
        let over = LayoutResolver::default();
        assert!(over.z_order(2) > over.z_order(1));

        let under = LayoutResolver::new(LayoutConfig {
            show_under_host_container: true,
            ..LayoutConfig::default()
        });
        assert!(under.z_order(2) < under.z_order(1));
        assert!(under.z_order(0) < 0);
    }

    #[test]
    fn height_floor_applies() {
        let resolver = LayoutResolver::default();
        assert_relative_eq!(resolver.banner_height(12.0), 50.0);
        assert_relative_eq!(resolver.banner_height(64.0), 64.0);
    }
}
