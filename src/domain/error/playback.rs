// SPDX-License-Identifier: MPL-2.0
//! Playback error type reported by media elements.

use std::fmt;

/// Reasons a `play()` request can be rejected by the platform.
///
/// None of these are fatal: callers log them and carry on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// Autoplay policy refused to start playback (typically unmuted video
    /// without a prior user gesture).
    NotAllowed(String),

    /// The media source cannot be decoded by the platform.
    NotSupported(String),

    /// Playback start was interrupted, for example by a `pause()` or a
    /// source change issued before the start resolved.
    Aborted,
}

impl PlaybackError {
    /// Returns true for rejections caused by platform autoplay policy.
    #[must_use]
    pub fn is_policy_rejection(&self) -> bool {
        matches!(self, Self::NotAllowed(_))
    }
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::NotAllowed(msg) => write!(f, "Playback not allowed: {}", msg),
            PlaybackError::NotSupported(msg) => write!(f, "Unsupported media: {}", msg),
            PlaybackError::Aborted => write!(f, "Playback aborted"),
        }
    }
}

impl std::error::Error for PlaybackError {}
