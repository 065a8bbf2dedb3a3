// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Point
// =============================================================================

/// A position in page coordinates (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Origin point.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// =============================================================================
// Commit Threshold
// =============================================================================

/// Commit threshold bounds, as a fraction of the container width.
pub mod commit_bounds {
    /// Minimum fraction.
    pub const MIN: f32 = 0.01;
    /// Maximum fraction.
    pub const MAX: f32 = 0.9;
    /// Default fraction (15% of the container).
    pub const DEFAULT: f32 = 0.15;
}

/// Fraction of the container width a drag must travel to commit a slide change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommitThreshold(f32);

impl CommitThreshold {
    /// Creates a new threshold, clamping the value to the valid range.
    #[must_use]
    pub fn new(fraction: f32) -> Self {
        Self(fraction.clamp(commit_bounds::MIN, commit_bounds::MAX))
    }

    /// Returns the raw fraction.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the threshold in pixels for a container of the given width.
    #[must_use]
    pub fn pixels(self, container_width: f32) -> f32 {
        container_width * self.0
    }

    /// Returns true if a horizontal travel of `delta_x` strictly exceeds the threshold.
    #[must_use]
    pub fn is_exceeded(self, delta_x: f32, container_width: f32) -> bool {
        delta_x.abs() > self.pixels(container_width)
    }
}

impl Default for CommitThreshold {
    fn default() -> Self {
        Self(commit_bounds::DEFAULT)
    }
}

// =============================================================================
// Progress Percent
// =============================================================================

/// Fill level of a story progress bar, guaranteed to be within 0–100%.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ProgressPercent(f32);

impl ProgressPercent {
    /// Empty bar.
    pub const EMPTY: Self = Self(0.0);
    /// Full bar.
    pub const FULL: Self = Self(100.0);

    /// Creates a new percentage, clamping to 0–100.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self::EMPTY;
        }
        Self(percent.clamp(0.0, 100.0))
    }

    /// Computes the fill for `elapsed` out of `total`.
    ///
    /// A zero-length segment is immediately complete.
    #[must_use]
    pub fn from_elapsed(elapsed: Duration, total: Duration) -> Self {
        if total.is_zero() {
            return Self::FULL;
        }
        Self::new((elapsed.as_secs_f64() / total.as_secs_f64() * 100.0) as f32)
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true once the bar is full.
    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 >= 100.0
    }
}

// =============================================================================
// Visibility Ratio
// =============================================================================

/// Visible fraction of an observed element, guaranteed to be within 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct VisibilityRatio(f32);

impl VisibilityRatio {
    /// Default autoplay threshold (half visible).
    pub const HALF: Self = Self(0.5);

    /// Creates a new ratio, clamping to 0.0–1.0.
    #[must_use]
    pub fn new(ratio: f32) -> Self {
        if ratio.is_nan() {
            return Self(0.0);
        }
        Self(ratio.clamp(0.0, 1.0))
    }

    /// Returns the raw ratio.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if this ratio reaches `threshold`.
    #[must_use]
    pub fn reaches(self, threshold: Self) -> bool {
        self.0 >= threshold.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn commit_threshold_clamps_to_valid_range() {
        assert_abs_diff_eq!(CommitThreshold::new(0.0).value(), commit_bounds::MIN);
        assert_abs_diff_eq!(CommitThreshold::new(5.0).value(), commit_bounds::MAX);
        assert_abs_diff_eq!(CommitThreshold::new(0.3).value(), 0.3);
    }

    #[test]
    fn commit_threshold_default_is_fifteen_percent() {
        assert_abs_diff_eq!(CommitThreshold::default().value(), 0.15);
    }

    #[test]
    fn commit_threshold_compares_absolute_travel() {
        let threshold = CommitThreshold::default();
        // 15% of 400px is 60px
        assert!(threshold.is_exceeded(61.0, 400.0));
        assert!(threshold.is_exceeded(-61.0, 400.0));
        assert!(!threshold.is_exceeded(60.0, 400.0));
        assert!(!threshold.is_exceeded(-20.0, 400.0));
    }

    #[test]
    fn progress_percent_from_elapsed() {
        let total = Duration::from_millis(5_000);
        assert_abs_diff_eq!(
            ProgressPercent::from_elapsed(Duration::from_millis(2_500), total).value(),
            50.0
        );
        let at = |ms| ProgressPercent::from_elapsed(Duration::from_millis(ms), total);
        assert!(at(5_000).is_complete());
        assert!(!at(4_990).is_complete());
    }

    #[test]
    fn progress_percent_clamps_overrun() {
        let total = Duration::from_millis(100);
        let progress = ProgressPercent::from_elapsed(Duration::from_millis(250), total);
        assert_eq!(progress, ProgressPercent::FULL);
    }

    #[test]
    fn progress_percent_zero_total_is_complete() {
        let progress = ProgressPercent::from_elapsed(Duration::ZERO, Duration::ZERO);
        assert!(progress.is_complete());
    }

    #[test]
    fn progress_percent_rejects_nan() {
        assert_eq!(ProgressPercent::new(f32::NAN), ProgressPercent::EMPTY);
    }

    #[test]
    fn visibility_ratio_reaches_threshold() {
        assert!(VisibilityRatio::new(0.5).reaches(VisibilityRatio::HALF));
        assert!(VisibilityRatio::new(1.0).reaches(VisibilityRatio::HALF));
        assert!(!VisibilityRatio::new(0.49).reaches(VisibilityRatio::HALF));
        assert_abs_diff_eq!(VisibilityRatio::new(3.0).value(), 1.0);
    }
}
