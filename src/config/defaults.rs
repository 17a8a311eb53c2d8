// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Queue**: Admission control bounds
//! - **Layout**: Banner width, height floor and stacking gaps
//! - **Presentation**: Animation and auto-dismiss timings
//! - **Diagnostics**: Lifecycle event buffer sizing

// ==========================================================================
// Queue Defaults
// ==========================================================================

/// Default number of banners that may be on screen at once.
pub const DEFAULT_MAX_CONCURRENT: usize = 3;

/// Minimum number of concurrently displayed banners.
pub const MIN_MAX_CONCURRENT: usize = 1;

/// Upper bound on concurrently displayed banners.
pub const MAX_MAX_CONCURRENT: usize = 32;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Default banner width as a fraction of the host width.
pub const DEFAULT_WIDTH_PERCENT: f32 = 0.98;

/// Default (and minimum) banner height in logical pixels.
pub const DEFAULT_BANNER_HEIGHT: f32 = 50.0;

/// Distance between the host's bottom edge and the anchored banner.
pub const DEFAULT_BOTTOM_SPACING: f32 = 16.0;

/// Gap between two stacked banners.
pub const DEFAULT_STACKED_BOTTOM_SPACING: f32 = 8.0;

/// Whether the anchor is lifted by the host's bottom safe-area inset.
pub const DEFAULT_ADJUSTS_FOR_SAFE_AREA: bool = true;

/// Whether banners paint beneath the host container.
pub const DEFAULT_SHOW_UNDER_HOST_CONTAINER: bool = false;

// ==========================================================================
// Presentation Defaults
// ==========================================================================

/// Duration of show, hide and re-stack animations (in seconds).
pub const DEFAULT_ANIMATION_DURATION_SECS: f32 = 0.5;

/// Longest accepted animation duration (in seconds).
pub const MAX_ANIMATION_DURATION_SECS: f32 = 5.0;

/// Default time a banner stays on screen before auto-dismissing (in seconds).
pub const DEFAULT_DISPLAY_DURATION_SECS: f32 = 3.0;

/// Whether transitions are animated unless the caller says otherwise.
pub const DEFAULT_ANIMATED: bool = true;

/// Whether swipe gestures dismiss banners.
pub const DEFAULT_ALLOW_SWIPE_GESTURES: bool = true;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default lifecycle event buffer capacity.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum lifecycle event buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum lifecycle event buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MAX_CONCURRENT > 0);
    assert!(DEFAULT_MAX_CONCURRENT >= MIN_MAX_CONCURRENT);
    assert!(DEFAULT_MAX_CONCURRENT <= MAX_MAX_CONCURRENT);

    assert!(DEFAULT_WIDTH_PERCENT > 0.0);
    assert!(DEFAULT_WIDTH_PERCENT <= 1.0);
    assert!(DEFAULT_BANNER_HEIGHT > 0.0);
    assert!(DEFAULT_BOTTOM_SPACING >= 0.0);
    assert!(DEFAULT_STACKED_BOTTOM_SPACING >= 0.0);

    assert!(DEFAULT_ANIMATION_DURATION_SECS >= 0.0);
    assert!(DEFAULT_ANIMATION_DURATION_SECS <= MAX_ANIMATION_DURATION_SECS);
    assert!(DEFAULT_DISPLAY_DURATION_SECS > 0.0);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
