// SPDX-License-Identifier: MPL-2.0
//! Fire-and-forget playback helpers shared by the carousel and the story player.

use crate::application::port::MediaElement;
use crate::domain::error::PlaybackError;

/// Requests playback and swallows a rejection after logging it.
///
/// Returns true if the start request was accepted.
pub fn play_or_log<M: MediaElement + ?Sized>(element: &mut M, url: &str) -> bool {
    match element.play() {
        Ok(()) => true,
        Err(err) => {
            log_rejection(url, &err);
            false
        }
    }
}

/// Logs a playback rejection reported by the platform.
pub fn log_rejection(url: &str, err: &PlaybackError) {
    if err.is_policy_rejection() {
        log::warn!("Autoplay blocked for {url}: {err}");
    } else {
        log::warn!("Playback failed for {url}: {err}");
    }
}

/// Stops a video and seeks it back to the start.
pub fn stop<M: MediaElement + ?Sized>(element: &mut M) {
    element.pause();
    element.rewind();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::ReadyState;
    use std::time::Duration;

    #[derive(Default)]
    struct Refusing {
        paused: bool,
        rewound: bool,
    }

    impl MediaElement for Refusing {
        fn play(&mut self) -> Result<(), PlaybackError> {
            Err(PlaybackError::NotAllowed("no gesture".into()))
        }
        fn pause(&mut self) {
            self.paused = true;
        }
        fn rewind(&mut self) {
            self.rewound = true;
        }
        fn set_looping(&mut self, _looping: bool) {}
        fn ready_state(&self) -> ReadyState {
            ReadyState::HaveNothing
        }
        fn duration(&self) -> Option<Duration> {
            None
        }
        fn unload(&mut self) {}
    }

    #[test]
    fn rejection_is_swallowed() {
        let mut element = Refusing::default();
        assert!(!play_or_log(&mut element, "a.mp4"));
    }

    #[test]
    fn stop_pauses_and_rewinds() {
        let mut element = Refusing::default();
        stop(&mut element);
        assert!(element.paused);
        assert!(element.rewound);
    }
}
