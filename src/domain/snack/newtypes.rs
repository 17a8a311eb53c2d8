// SPDX-License-Identifier: MPL-2.0
//! Snack newtypes.
//!
//! Type-safe wrappers for queue, layout and timing values. Each constructor
//! recovers locally from out-of-range input so callers never see an error
//! for a bad configuration value.

use std::time::Duration;

// =============================================================================
// Bounds
// =============================================================================

/// Concurrency bounds (1 to 32 banners on screen).
pub mod concurrency_bounds {
    /// Minimum number of displayed banners.
    pub const MIN: usize = 1;
    /// Maximum number of displayed banners.
    pub const MAX: usize = 32;
    /// Default number of displayed banners.
    pub const DEFAULT: usize = 3;
}

/// Layout bounds.
pub mod layout_bounds {
    /// Default banner width as a fraction of the host width.
    pub const DEFAULT_WIDTH_PERCENT: f32 = 0.98;
    /// Banner height floor in logical pixels.
    pub const MIN_HEIGHT: f32 = 50.0;
}

/// Timing bounds.
pub mod timing_bounds {
    /// Default show/hide/re-stack animation length in seconds.
    pub const DEFAULT_ANIMATION_SECS: f32 = 0.5;
    /// Longest animation in seconds.
    pub const MAX_ANIMATION_SECS: f32 = 5.0;
    /// Default on-screen time in seconds.
    pub const DEFAULT_DISPLAY_SECS: f32 = 3.0;
}

// =============================================================================
// MaxConcurrent
// =============================================================================

/// Number of banners allowed on screen at once, always at least one.
///
/// # Example
///
/// ```
/// use iced_snacks::domain::snack::MaxConcurrent;
///
/// assert_eq!(MaxConcurrent::new(0).value(), 1);
/// assert_eq!(MaxConcurrent::default().value(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxConcurrent(usize);

impl MaxConcurrent {
    /// Creates a new limit, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(concurrency_bounds::MIN, concurrency_bounds::MAX))
    }

    /// Returns the limit as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for MaxConcurrent {
    fn default() -> Self {
        Self(concurrency_bounds::DEFAULT)
    }
}

// =============================================================================
// WidthPercent
// =============================================================================

/// Banner width as a fraction of the host width.
///
/// Unlike the other newtypes this one does not clamp: a value outside
/// `[0, 1]` (or NaN) resets to [`layout_bounds::DEFAULT_WIDTH_PERCENT`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthPercent(f32);

impl WidthPercent {
    /// Creates a width fraction, falling back to the default when out of range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if (0.0..=1.0).contains(&value) {
            Self(value)
        } else {
            Self::default()
        }
    }

    /// Returns the raw fraction.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the width in pixels for a host of the given width.
    #[must_use]
    pub fn of(self, host_width: f32) -> f32 {
        (self.0 * host_width).max(0.0)
    }
}

impl Default for WidthPercent {
    fn default() -> Self {
        Self(layout_bounds::DEFAULT_WIDTH_PERCENT)
    }
}

// =============================================================================
// BannerHeight
// =============================================================================

/// Height floor for a banner. Measured heights below it are raised to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerHeight(f32);

impl BannerHeight {
    /// Creates a height floor, never lower than [`layout_bounds::MIN_HEIGHT`].
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.max(layout_bounds::MIN_HEIGHT))
        } else {
            Self::default()
        }
    }

    /// Returns the floor in pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Applies the floor to a measured height.
    #[must_use]
    pub fn floor(self, measured: f32) -> f32 {
        if measured.is_finite() {
            measured.max(self.0)
        } else {
            self.0
        }
    }
}

impl Default for BannerHeight {
    fn default() -> Self {
        Self(layout_bounds::MIN_HEIGHT)
    }
}

// =============================================================================
// AnimationDuration
// =============================================================================

/// Length of show, hide and re-stack animations (0–5 seconds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationDuration(f32);

impl AnimationDuration {
    /// Creates an animation length in seconds, clamping to the valid range.
    #[must_use]
    pub fn from_secs(secs: f32) -> Self {
        if secs.is_nan() {
            return Self::default();
        }
        Self(secs.clamp(0.0, timing_bounds::MAX_ANIMATION_SECS))
    }

    /// Returns the length in seconds.
    #[must_use]
    pub fn as_secs(self) -> f32 {
        self.0
    }

    /// Returns the length as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f32(self.0)
    }
}

impl Default for AnimationDuration {
    fn default() -> Self {
        Self(timing_bounds::DEFAULT_ANIMATION_SECS)
    }
}

// =============================================================================
// DisplayDuration
// =============================================================================

/// How long a banner stays on screen before it auto-dismisses.
///
/// Zero, negative or non-finite seconds mean the banner stays until it is
/// dismissed by the user or the host.
///
/// # Example
///
/// ```
/// use iced_snacks::domain::snack::DisplayDuration;
///
/// assert!(DisplayDuration::from_secs(0.0).is_indefinite());
/// assert!(DisplayDuration::from_secs(-2.0).is_indefinite());
/// assert_eq!(
///     DisplayDuration::from_secs(2.0).as_duration(),
///     Some(std::time::Duration::from_secs(2))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayDuration(Option<Duration>);

impl DisplayDuration {
    /// Creates an on-screen time from seconds.
    #[must_use]
    pub fn from_secs(secs: f32) -> Self {
        if secs.is_finite() && secs > 0.0 {
            Self(Some(Duration::from_secs_f32(secs)))
        } else {
            Self(None)
        }
    }

    /// A banner that never auto-dismisses.
    #[must_use]
    pub fn indefinite() -> Self {
        Self(None)
    }

    /// Returns the countdown, or `None` when there is no auto-dismiss.
    #[must_use]
    pub fn as_duration(self) -> Option<Duration> {
        self.0
    }

    /// Returns true when no countdown is installed.
    #[must_use]
    pub fn is_indefinite(self) -> bool {
        self.0.is_none()
    }
}

impl Default for DisplayDuration {
    fn default() -> Self {
        Self::from_secs(timing_bounds::DEFAULT_DISPLAY_SECS)
    }
}

impl From<Duration> for DisplayDuration {
    fn from(duration: Duration) -> Self {
        if duration.is_zero() {
            Self(None)
        } else {
            Self(Some(duration))
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
