// SPDX-License-Identifier: MPL-2.0
//! Media element port definition.
//!
//! This module defines the [`MediaElement`] trait implemented by whatever
//! hosts a playable media node (a browser `<video>`, a headless stub, a test
//! double).
//!
//! # Design Notes
//!
//! - Methods are not `async`: `play()` reports the outcome of the start
//!   request, and the host forwards late rejections as its own messages
//! - Elements are owned exclusively by one carousel or story instance
//! - `pause()`, `rewind()` and `unload()` never fail

use crate::domain::error::PlaybackError;
use std::time::Duration;

/// How much of the media is buffered, mirroring the HTML `readyState` ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum ReadyState {
    /// Nothing is known about the media yet.
    #[default]
    HaveNothing,
    /// Duration and dimensions are known.
    HaveMetadata,
    /// The current frame is available.
    HaveCurrentData,
    /// At least the next frame is buffered.
    HaveFutureData,
    /// Enough is buffered to play through.
    HaveEnoughData,
}

impl ReadyState {
    /// Returns true once the current frame can be shown, which is the point
    /// where autoplay may be attempted.
    #[must_use]
    pub fn has_current_data(self) -> bool {
        self >= Self::HaveCurrentData
    }
}

/// Port for a playable media node.
///
/// # Lifecycle
///
/// 1. The host creates the element and hands it to a component
/// 2. The component calls `play()`/`pause()`/`rewind()` as navigation dictates
/// 3. On teardown the owner calls `pause()` and `unload()`
pub trait MediaElement {
    /// Requests playback.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaybackError`] if the platform rejects the request
    /// (autoplay policy, unsupported source). Callers log and ignore it.
    fn play(&mut self) -> Result<(), PlaybackError>;

    /// Pauses playback. Pausing a paused element is a no-op.
    fn pause(&mut self);

    /// Seeks back to the start.
    fn rewind(&mut self);

    /// Enables or disables looping.
    fn set_looping(&mut self, looping: bool);

    /// Current buffering state.
    fn ready_state(&self) -> ReadyState;

    /// Natural duration, available once metadata has loaded.
    fn duration(&self) -> Option<Duration>;

    /// Drops the media source and releases its resources.
    fn unload(&mut self);
}

impl<M: MediaElement + ?Sized> MediaElement for Box<M> {
    fn play(&mut self) -> Result<(), PlaybackError> {
        (**self).play()
    }

    fn pause(&mut self) {
        (**self).pause();
    }

    fn rewind(&mut self) {
        (**self).rewind();
    }

    fn set_looping(&mut self, looping: bool) {
        (**self).set_looping(looping);
    }

    fn ready_state(&self) -> ReadyState {
        (**self).ready_state()
    }

    fn duration(&self) -> Option<Duration> {
        (**self).duration()
    }

    fn unload(&mut self) {
        (**self).unload();
    }
}
