// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Offsets, thresholds and progress values are `f32`; compare them with the
//! `approx` macros rather than `assert_eq!`.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Tolerance for percentages derived from `Instant` arithmetic.
pub const PERCENT_EPSILON: f32 = 1e-3;
