// SPDX-License-Identifier: MPL-2.0
//! Snack domain types.
//!
//! Value objects for admission control, layout and timing that are
//! independent of any presentation framework.

mod newtypes;

pub use newtypes::{
    concurrency_bounds, layout_bounds, timing_bounds, AnimationDuration, BannerHeight,
    DisplayDuration, MaxConcurrent, WidthPercent,
};
