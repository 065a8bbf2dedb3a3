// SPDX-License-Identifier: MPL-2.0
//! This module handles the tunables of the slider and the story player,
//! loaded from and saved to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[gesture]` - Touch validity thresholds
//! - `[slider]` - Commit threshold, transition lockout, video extensions
//! - `[story]` - Image segment duration and progress polling interval
//! - `[autoplay]` - Visibility threshold and observer margin
//!
//! Every field is optional. Missing fields fall back to the constants in
//! [`defaults`], and out-of-range values are clamped by the accessors.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `PHOTOGRAM_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use photogram::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.story.image_duration_ms = Some(3_000);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::application::port::ObserverOptions;
use crate::domain::ui::{CommitThreshold, VisibilityRatio};
use crate::error::{Error, Result};
use crate::ui::carousel::CarouselOptions;
use crate::ui::gesture::TouchOptions;
use crate::ui::story::StoryOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Touch gesture thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureConfig {
    /// Shortest touch (ms) that can count as a swipe.
    #[serde(
        default = "default_min_touch_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_touch_duration_ms: Option<u64>,

    /// Shortest horizontal travel (px) that can count as a swipe.
    #[serde(
        default = "default_min_touch_distance_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_touch_distance_px: Option<f32>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_touch_duration_ms: default_min_touch_duration_ms(),
            min_touch_distance_px: default_min_touch_distance_px(),
        }
    }
}

/// Post media slider settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SliderConfig {
    /// Fraction of the container width a drag must exceed to change slide.
    #[serde(
        default = "default_commit_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub commit_threshold: Option<f32>,

    /// Slide animation length (ms).
    #[serde(
        default = "default_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_ms: Option<u64>,

    /// Extensions inferred as video.
    #[serde(
        default = "default_video_extensions",
        skip_serializing_if = "Option::is_none"
    )]
    pub video_extensions: Option<Vec<String>>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            commit_threshold: default_commit_threshold(),
            transition_ms: default_transition_ms(),
            video_extensions: default_video_extensions(),
        }
    }
}

/// Story player settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoryConfig {
    /// How long an image segment stays on screen (ms).
    #[serde(
        default = "default_image_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_duration_ms: Option<u64>,

    /// Progress polling interval (ms).
    #[serde(
        default = "default_tick_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub tick_interval_ms: Option<u64>,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            image_duration_ms: default_image_duration_ms(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

/// Visibility-driven autoplay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AutoplayConfig {
    /// Visible fraction at which a video plays.
    #[serde(
        default = "default_visibility_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub visibility_threshold: Option<f32>,

    /// Margin (px) around the viewport.
    #[serde(
        default = "default_root_margin_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub root_margin_px: Option<u32>,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: default_visibility_threshold(),
            root_margin_px: default_root_margin_px(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Runtime configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub gesture: GestureConfig,

    #[serde(default)]
    pub slider: SliderConfig,

    #[serde(default)]
    pub story: StoryConfig,

    #[serde(default)]
    pub autoplay: AutoplayConfig,
}

impl Config {
    /// Touch thresholds, clamped to their accepted ranges.
    #[must_use]
    pub fn touch_options(&self) -> TouchOptions {
        let duration_ms = self
            .gesture
            .min_touch_duration_ms
            .unwrap_or(DEFAULT_MIN_TOUCH_DURATION_MS)
            .min(MAX_MIN_TOUCH_DURATION_MS);
        let distance = self
            .gesture
            .min_touch_distance_px
            .filter(|d| d.is_finite())
            .unwrap_or(DEFAULT_MIN_TOUCH_DISTANCE_PX)
            .clamp(0.0, MAX_MIN_TOUCH_DISTANCE_PX);

        TouchOptions {
            min_duration: Duration::from_millis(duration_ms),
            min_distance: distance,
        }
    }

    #[must_use]
    pub fn observer_options(&self) -> ObserverOptions {
        ObserverOptions {
            threshold: VisibilityRatio::new(
                self.autoplay
                    .visibility_threshold
                    .unwrap_or(DEFAULT_VISIBILITY_THRESHOLD),
            ),
            root_margin_px: self
                .autoplay
                .root_margin_px
                .unwrap_or(DEFAULT_ROOT_MARGIN_PX),
        }
    }

    #[must_use]
    pub fn carousel_options(&self) -> CarouselOptions {
        CarouselOptions {
            touch: self.touch_options(),
            commit_threshold: CommitThreshold::new(
                self.slider
                    .commit_threshold
                    .unwrap_or(DEFAULT_COMMIT_THRESHOLD),
            ),
            transition: Duration::from_millis(
                self.slider.transition_ms.unwrap_or(DEFAULT_TRANSITION_MS),
            ),
            observer: self.observer_options(),
        }
    }

    #[must_use]
    pub fn story_options(&self) -> StoryOptions {
        let image_ms = self
            .story
            .image_duration_ms
            .unwrap_or(DEFAULT_IMAGE_SEGMENT_MS)
            .max(1);
        let tick_ms = self
            .story
            .tick_interval_ms
            .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
            .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS);

        StoryOptions {
            image_duration: Duration::from_millis(image_ms),
            tick_interval: Duration::from_millis(tick_ms),
        }
    }

    /// Extensions inferred as video, lowercase.
    #[must_use]
    pub fn video_extensions(&self) -> Vec<String> {
        match &self.slider.video_extensions {
            Some(exts) => exts.iter().map(|e| e.to_ascii_lowercase()).collect(),
            None => DEFAULT_VIDEO_EXTENSIONS
                .iter()
                .map(|e| (*e).to_string())
                .collect(),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_min_touch_duration_ms() -> Option<u64> {
    Some(DEFAULT_MIN_TOUCH_DURATION_MS)
}

fn default_min_touch_distance_px() -> Option<f32> {
    Some(DEFAULT_MIN_TOUCH_DISTANCE_PX)
}

fn default_commit_threshold() -> Option<f32> {
    Some(DEFAULT_COMMIT_THRESHOLD)
}

fn default_transition_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_MS)
}

fn default_video_extensions() -> Option<Vec<String>> {
    Some(
        DEFAULT_VIDEO_EXTENSIONS
            .iter()
            .map(|e| (*e).to_string())
            .collect(),
    )
}

fn default_image_duration_ms() -> Option<u64> {
    Some(DEFAULT_IMAGE_SEGMENT_MS)
}

fn default_tick_interval_ms() -> Option<u64> {
    Some(DEFAULT_TICK_INTERVAL_MS)
}

fn default_visibility_threshold() -> Option<f32> {
    Some(DEFAULT_VISIBILITY_THRESHOLD)
}

fn default_root_margin_px() -> Option<u32> {
    Some(DEFAULT_ROOT_MARGIN_PX)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
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
                    return (
                        Config::default(),
                        Some(format!("Ignoring {}: {err}", path.display())),
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

// =============================================================================
// Save Functions
// =============================================================================

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

/// Saves configuration to a specific path.
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
