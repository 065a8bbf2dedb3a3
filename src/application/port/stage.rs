// SPDX-License-Identifier: MPL-2.0
//! Story stage port definition.
//!
//! The stage is the area of the story viewer that displays exactly one
//! segment at a time. The story player tells it what to show; the host
//! reports back when video metadata becomes available.

use crate::domain::error::PlaybackError;
use crate::domain::media::MediaItem;

/// Port for the story viewer's display area.
pub trait StoryStage {
    /// Removes whatever is currently displayed.
    fn clear(&mut self);

    /// Displays a still image.
    fn show_image(&mut self, item: &MediaItem);

    /// Mounts a video and requests playback right away.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaybackError`] if the start request is rejected; the
    /// video stays mounted and the segment still runs once metadata loads.
    fn show_video(&mut self, item: &MediaItem) -> Result<(), PlaybackError>;

    /// Pauses the mounted video, if any.
    fn pause_video(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait is object-safe
    fn _assert_object_safe(_: &dyn StoryStage) {}
}
