// SPDX-License-Identifier: MPL-2.0
//! Touch gesture classification.
//!
//! [`GestureTracker`] turns one touch sequence (`start`, any number of
//! moves, `end`) into a verdict: was this a horizontal swipe long and far
//! enough to count, and in which direction did the finger travel.
//!
//! The scroll/swipe decision is taken on the first move of a sequence and
//! never revisited: a gesture that starts out mostly vertical is a page
//! scroll, however it continues.

use crate::config::{DEFAULT_MIN_TOUCH_DISTANCE_PX, DEFAULT_MIN_TOUCH_DURATION_MS};
use crate::domain::ui::Point;
use std::time::{Duration, Instant};

/// Validity thresholds for a swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchOptions {
    /// Shortest accepted touch.
    pub min_duration: Duration,
    /// Shortest accepted horizontal travel, in px.
    pub min_distance: f32,
}

impl Default for TouchOptions {
    fn default() -> Self {
        Self {
            min_duration: Duration::from_millis(DEFAULT_MIN_TOUCH_DURATION_MS),
            min_distance: DEFAULT_MIN_TOUCH_DISTANCE_PX,
        }
    }
}

/// Scroll classification of the current sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollClass {
    /// No move seen yet.
    #[default]
    Undecided,
    /// First move was mostly vertical.
    Scrolling,
    /// First move was mostly horizontal (or diagonal).
    Swiping,
}

impl ScrollClass {
    #[must_use]
    pub fn is_scrolling(self) -> bool {
        matches!(self, Self::Scrolling)
    }
}

/// Direction label of a finished gesture.
///
/// `Left` means the finger ended left of where it started, `Right` means it
/// did not (a zero-length gesture is labelled `Right`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Per-sequence tracking data. Lives from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct GestureSample {
    anchor: Point,
    started_at: Instant,
    class: ScrollClass,
}

/// Snapshot returned for each move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureMove {
    /// Classification, fixed on the first move.
    pub class: ScrollClass,
    /// `|x - anchor.x|`
    pub delta_x: f32,
    /// `|y - anchor.y|`
    pub delta_y: f32,
    /// Absolute position of this sample.
    pub current: Point,
}

impl GestureMove {
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.class.is_scrolling()
    }
}

/// Outcome of a finished sequence. Not retained by the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureVerdict {
    /// Long enough, far enough, and not a scroll.
    pub is_valid: bool,
    pub direction: SwipeDirection,
    pub duration: Duration,
    /// Horizontal travel in px.
    pub distance: f32,
}

/// Picks the tracked point out of a multi-touch sample.
///
/// Only the first touch is followed; the rest are ignored.
#[must_use]
pub fn primary_touch(touches: &[Point]) -> Option<Point> {
    touches.first().copied()
}

/// Swipe/scroll classifier for one touch point.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    options: TouchOptions,
    sample: Option<GestureSample>,
}

impl GestureTracker {
    #[must_use]
    pub fn new(options: TouchOptions) -> Self {
        Self {
            options,
            sample: None,
        }
    }

    #[must_use]
    pub fn options(&self) -> TouchOptions {
        self.options
    }

    /// Returns true between `start` and `end`.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.sample.is_some()
    }

    /// Classification of the sequence in progress, if any.
    #[must_use]
    pub fn classification(&self) -> Option<ScrollClass> {
        self.sample.map(|s| s.class)
    }

    /// Begins a new sequence, discarding any unfinished one.
    ///
    /// Returns the anchor for caller convenience.
    pub fn start(&mut self, point: Point, now: Instant) -> Point {
        self.sample = Some(GestureSample {
            anchor: point,
            started_at: now,
            class: ScrollClass::Undecided,
        });
        point
    }

    /// Records a move. Returns `None` if no sequence was started.
    pub fn move_to(&mut self, point: Point) -> Option<GestureMove> {
        let sample = self.sample.as_mut()?;
        let delta_x = (point.x - sample.anchor.x).abs();
        let delta_y = (point.y - sample.anchor.y).abs();

        if sample.class == ScrollClass::Undecided {
            sample.class = if delta_y > delta_x {
                ScrollClass::Scrolling
            } else {
                ScrollClass::Swiping
            };
        }

        Some(GestureMove {
            class: sample.class,
            delta_x,
            delta_y,
            current: point,
        })
    }

    /// Finishes the sequence. Returns `None` if no sequence was started.
    pub fn end(&mut self, point: Point, now: Instant) -> Option<GestureVerdict> {
        let sample = self.sample.take()?;
        let duration = now.saturating_duration_since(sample.started_at);
        let distance = (point.x - sample.anchor.x).abs();
        let direction = if point.x < sample.anchor.x {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        };

        Some(GestureVerdict {
            is_valid: duration >= self.options.min_duration
                && distance >= self.options.min_distance
                && !sample.class.is_scrolling(),
            direction,
            duration,
            distance,
        })
    }

    /// Drops the sequence in progress without a verdict.
    pub fn cancel(&mut self) {
        self.sample = None;
    }
}
