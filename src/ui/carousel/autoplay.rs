// SPDX-License-Identifier: MPL-2.0
//! Visibility-driven autoplay sub-component.
//!
//! Each video slide is tracked on its own. Scrolling a slide at least
//! `threshold` into view plays it; scrolling it out pauses it. When a slide
//! becomes visible before it has buffered its first frame, the play request
//! waits for the matching [`Message::MediaReady`].
//!
//! This runs alongside the play/pause done on slide changes. Neither side
//! coordinates with the other: whichever instruction reaches the element
//! last wins.

use crate::application::port::ReadyState;
use crate::domain::ui::VisibilityRatio;

#[derive(Debug, Clone, Copy, Default)]
struct Entry {
    /// `None` until the first notification arrives.
    visible: Option<bool>,
    /// Became visible before it was ready.
    pending: bool,
}

/// Autoplay sub-component state.
#[derive(Debug, Clone)]
pub struct State {
    threshold: VisibilityRatio,
    entries: Vec<Option<Entry>>,
}

/// Messages for the autoplay sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Intersection ratio of a slide crossed a notification boundary.
    VisibilityChanged {
        slide: usize,
        ratio: VisibilityRatio,
        ready: ReadyState,
    },
    /// The slide's media buffered enough to show its current frame.
    MediaReady { slide: usize },
}

/// Effects produced by autoplay decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Start playback of the slide.
    Play(usize),
    /// Pause the slide.
    Pause(usize),
}

impl State {
    /// Creates state for `slide_count` slides, tracking only `video_slides`.
    #[must_use]
    pub fn new(
        threshold: VisibilityRatio,
        slide_count: usize,
        video_slides: impl IntoIterator<Item = usize>,
    ) -> Self {
        let mut entries = vec![None; slide_count];
        for slide in video_slides {
            if let Some(entry) = entries.get_mut(slide) {
                *entry = Some(Entry::default());
            }
        }
        Self { threshold, entries }
    }

    /// Handle an autoplay message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::VisibilityChanged {
                slide,
                ratio,
                ready,
            } => {
                let threshold = self.threshold;
                let Some(entry) = self.entry_mut(slide) else {
                    return Effect::None;
                };
                let visible = ratio.reaches(threshold);
                if entry.visible == Some(visible) {
                    return Effect::None;
                }
                entry.visible = Some(visible);

                if !visible {
                    entry.pending = false;
                    return Effect::Pause(slide);
                }
                if ready.has_current_data() {
                    entry.pending = false;
                    Effect::Play(slide)
                } else {
                    entry.pending = true;
                    Effect::None
                }
            }
            Message::MediaReady { slide } => {
                let Some(entry) = self.entry_mut(slide) else {
                    return Effect::None;
                };
                if entry.pending {
                    entry.pending = false;
                    Effect::Play(slide)
                } else {
                    Effect::None
                }
            }
        }
    }

    /// Returns true if the slide is waiting for its media to become ready.
    #[must_use]
    pub fn is_pending(&self, slide: usize) -> bool {
        self.entries
            .get(slide)
            .copied()
            .flatten()
            .is_some_and(|e| e.pending)
    }

    /// Returns the last known visibility of the slide.
    #[must_use]
    pub fn is_visible(&self, slide: usize) -> Option<bool> {
        self.entries.get(slide).copied().flatten()?.visible
    }

    /// Forgets all pending plays.
    pub fn clear(&mut self) {
        for entry in self.entries.iter_mut().flatten() {
            entry.pending = false;
        }
    }

    fn entry_mut(&mut self, slide: usize) -> Option<&mut Entry> {
        self.entries.get_mut(slide)?.as_mut()
    }
}
