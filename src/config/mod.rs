// SPDX-License-Identifier: MPL-2.0
//! This module handles loading and saving snackbar preferences to a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[queue]` - Admission control (`max_concurrent`)
//! - `[layout]` - Width, height floor, spacing, safe-area and z-order mode
//! - `[presentation]` - Animation length, default on-screen time, gestures
//! - `[diagnostics]` - Lifecycle event buffer capacity
//!
//! Missing sections or keys fall back to the values in [`defaults`].
//! Out-of-range values are recovered by the domain newtypes when the
//! config is turned into a [`SnackbarConfig`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_snacks::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.queue.max_concurrent = 1;
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::diagnostics::BufferCapacity;
use crate::domain::snack::{
    AnimationDuration, BannerHeight, DisplayDuration, MaxConcurrent, WidthPercent,
};
use crate::error::{Error, Result};
use crate::snack::{LayoutConfig, SnackbarConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Admission control settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueueConfig {
    /// Number of banners allowed on screen at once.
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }
}

/// Banner placement settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutSection {
    /// Banner width as a fraction of the host width (0.0 to 1.0).
    #[serde(default = "default_width_percent")]
    pub width_percent: f32,

    /// Banner height floor in logical pixels.
    #[serde(default = "default_height")]
    pub height: f32,

    /// Gap between the host's bottom edge and the anchored banner.
    #[serde(default = "default_bottom_spacing")]
    pub bottom_spacing: f32,

    /// Gap between stacked banners.
    #[serde(default = "default_stacked_bottom_spacing")]
    pub stacked_bottom_spacing: f32,

    /// Lift the anchor by the host's bottom safe-area inset.
    #[serde(default = "default_adjusts_for_safe_area")]
    pub adjusts_for_safe_area: bool,

    /// Paint banners beneath the host container.
    #[serde(default)]
    pub show_under_host_container: bool,
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            width_percent: DEFAULT_WIDTH_PERCENT,
            height: DEFAULT_BANNER_HEIGHT,
            bottom_spacing: DEFAULT_BOTTOM_SPACING,
            stacked_bottom_spacing: DEFAULT_STACKED_BOTTOM_SPACING,
            adjusts_for_safe_area: DEFAULT_ADJUSTS_FOR_SAFE_AREA,
            show_under_host_container: DEFAULT_SHOW_UNDER_HOST_CONTAINER,
        }
    }
}

/// Timing and interaction settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PresentationConfig {
    /// Show/hide/re-stack animation length in seconds.
    #[serde(default = "default_animation_duration_secs")]
    pub animation_duration_secs: f32,

    /// Default on-screen time in seconds; zero or negative disables auto-dismiss.
    #[serde(default = "default_display_duration_secs")]
    pub display_duration_secs: f32,

    /// Whether transitions are animated by default.
    #[serde(default = "default_animated")]
    pub animated: bool,

    /// Whether swipe gestures dismiss banners.
    #[serde(default = "default_allow_swipe_gestures")]
    pub allow_swipe_gestures: bool,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            animation_duration_secs: DEFAULT_ANIMATION_DURATION_SECS,
            display_duration_secs: DEFAULT_DISPLAY_DURATION_SECS,
            animated: DEFAULT_ANIMATED,
            allow_swipe_gestures: DEFAULT_ALLOW_SWIPE_GESTURES,
        }
    }
}

/// Lifecycle diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of lifecycle events retained in memory.
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: usize,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Snackbar configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub queue: QueueConfig,

    #[serde(default)]
    pub layout: LayoutSection,

    #[serde(default)]
    pub presentation: PresentationConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Returns the validated diagnostics buffer capacity.
    #[must_use]
    pub fn buffer_capacity(&self) -> BufferCapacity {
        BufferCapacity::new(self.diagnostics.buffer_capacity)
    }
}

impl From<&LayoutSection> for LayoutConfig {
    fn from(section: &LayoutSection) -> Self {
        LayoutConfig {
            width_percent: WidthPercent::new(section.width_percent),
            height: BannerHeight::new(section.height),
            bottom_spacing: section.bottom_spacing.max(0.0),
            stacked_bottom_spacing: section.stacked_bottom_spacing.max(0.0),
            adjusts_for_safe_area: section.adjusts_for_safe_area,
            show_under_host_container: section.show_under_host_container,
        }
    }
}

impl From<&Config> for SnackbarConfig {
    fn from(config: &Config) -> Self {
        SnackbarConfig {
            max_concurrent: MaxConcurrent::new(config.queue.max_concurrent),
            layout: LayoutConfig::from(&config.layout),
            animation: AnimationDuration::from_secs(config.presentation.animation_duration_secs),
            display_duration: DisplayDuration::from_secs(
                config.presentation.display_duration_secs,
            ),
            animated: config.presentation.animated,
            allow_swipe_gestures: config.presentation.allow_swipe_gestures,
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_max_concurrent() -> usize {
    DEFAULT_MAX_CONCURRENT
}

fn default_width_percent() -> f32 {
    DEFAULT_WIDTH_PERCENT
}

fn default_height() -> f32 {
    DEFAULT_BANNER_HEIGHT
}

fn default_bottom_spacing() -> f32 {
    DEFAULT_BOTTOM_SPACING
}

fn default_stacked_bottom_spacing() -> f32 {
    DEFAULT_STACKED_BOTTOM_SPACING
}

fn default_adjusts_for_safe_area() -> bool {
    DEFAULT_ADJUSTS_FOR_SAFE_AREA
}

fn default_animation_duration_secs() -> f32 {
    DEFAULT_ANIMATION_DURATION_SECS
}

fn default_display_duration_secs() -> f32 {
    DEFAULT_DISPLAY_DURATION_SECS
}

fn default_animated() -> bool {
    DEFAULT_ANIMATED
}

fn default_allow_swipe_gestures() -> bool {
    DEFAULT_ALLOW_SWIPE_GESTURES
}

fn default_buffer_capacity() -> usize {
    DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("snack-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
