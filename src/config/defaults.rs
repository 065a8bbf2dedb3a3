// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gesture**: Touch validity thresholds
//! - **Slider**: Swipe commit threshold and transition lockout
//! - **Story**: Segment durations and progress polling
//! - **Autoplay**: Visibility-driven playback

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Minimum touch duration (ms) for a gesture to count as a swipe.
pub const DEFAULT_MIN_TOUCH_DURATION_MS: u64 = 100;

/// Upper bound for the configurable minimum touch duration (ms).
pub const MAX_MIN_TOUCH_DURATION_MS: u64 = 2_000;

/// Minimum horizontal travel (px) for a gesture to count as a swipe.
pub const DEFAULT_MIN_TOUCH_DISTANCE_PX: f32 = 10.0;

/// Upper bound for the configurable minimum touch distance (px).
pub const MAX_MIN_TOUCH_DISTANCE_PX: f32 = 500.0;

// ==========================================================================
// Slider Defaults
// ==========================================================================

/// Fraction of the container width a drag must exceed to commit.
pub const DEFAULT_COMMIT_THRESHOLD: f32 = 0.15;

/// Duration (ms) of the slide animation; navigation is locked meanwhile.
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// File extensions treated as video when inferring media kind.
pub const DEFAULT_VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "webm", "m4v"];

/// URL prefix for post media files.
pub const DEFAULT_POST_MEDIA_PREFIX: &str = "/static/media/post/";

// ==========================================================================
// Story Defaults
// ==========================================================================

/// Display duration (ms) for image segments.
pub const DEFAULT_IMAGE_SEGMENT_MS: u64 = 5_000;

/// Polling interval (ms) of the story progress loop.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 10;

/// Smallest accepted polling interval (ms).
pub const MIN_TICK_INTERVAL_MS: u64 = 1;

/// Largest accepted polling interval (ms).
pub const MAX_TICK_INTERVAL_MS: u64 = 1_000;

/// URL prefix for story media files.
pub const DEFAULT_STORY_MEDIA_PREFIX: &str = "/static/media/story/";

// ==========================================================================
// Autoplay Defaults
// ==========================================================================

/// Visible fraction at which an observed video starts playing.
pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.5;

/// Viewport margin (px) extending the observed area for pre-roll.
pub const DEFAULT_ROOT_MARGIN_PX: u32 = 50;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Gesture validation
    assert!(DEFAULT_MIN_TOUCH_DURATION_MS <= MAX_MIN_TOUCH_DURATION_MS);
    assert!(DEFAULT_MIN_TOUCH_DISTANCE_PX >= 0.0);
    assert!(DEFAULT_MIN_TOUCH_DISTANCE_PX <= MAX_MIN_TOUCH_DISTANCE_PX);

    // Slider validation
    assert!(DEFAULT_COMMIT_THRESHOLD > 0.0);
    assert!(DEFAULT_COMMIT_THRESHOLD < 1.0);
    assert!(DEFAULT_TRANSITION_MS > 0);

    // Story validation
    assert!(DEFAULT_IMAGE_SEGMENT_MS > 0);
    assert!(DEFAULT_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS < DEFAULT_IMAGE_SEGMENT_MS);

    // Autoplay validation
    assert!(DEFAULT_VISIBILITY_THRESHOLD > 0.0);
    assert!(DEFAULT_VISIBILITY_THRESHOLD <= 1.0);
};
