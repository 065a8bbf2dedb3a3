// SPDX-License-Identifier: MPL-2.0
//! Story player.
//!
//! Plays the segments of one story in order. Image segments run for a fixed
//! duration; video segments run for the video's own length, counted from the
//! moment its metadata arrives. A tap on the right half of the viewer skips
//! ahead, a tap on the left half steps back.

use super::progress::ProgressBars;
use super::timer::{ProgressTimer, TimerHandle, TimerSlot};
use crate::application::port::StoryStage;
use crate::config::{DEFAULT_IMAGE_SEGMENT_MS, DEFAULT_TICK_INTERVAL_MS};
use crate::domain::media::{MediaItem, MediaKind};
use crate::domain::ui::ProgressPercent;
use crate::ui::playback;
use std::time::{Duration, Instant};

/// Timing of a story.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryOptions {
    /// How long an image segment is shown.
    pub image_duration: Duration,
    /// How often the host should deliver ticks.
    pub tick_interval: Duration,
}

impl Default for StoryOptions {
    fn default() -> Self {
        Self {
            image_duration: Duration::from_millis(DEFAULT_IMAGE_SEGMENT_MS),
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
        }
    }
}

/// Messages delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// The story was selected; start from the first segment.
    Open { now: Instant },
    /// Polling tick for a scheduled timer.
    Tick { handle: TimerHandle, now: Instant },
    /// The video of `segment` reported its natural duration.
    MetadataLoaded {
        segment: usize,
        duration: Duration,
        now: Instant,
    },
    /// Tap on the viewer at horizontal position `x` of `width`.
    Tap { x: f32, width: f32, now: Instant },
    /// The viewer is being hidden by the host.
    Close,
}

/// Effects for the host to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Deliver [`Message::Tick`] for `handle` every `interval` until the
    /// handle goes stale.
    Schedule {
        handle: TimerHandle,
        interval: Duration,
    },
    /// Playback ran past the last segment; hide the viewer.
    Close,
}

/// Timed auto-advancing player for one story.
#[derive(Debug)]
pub struct StoryPlayer<S> {
    stage: S,
    segments: Vec<MediaItem>,
    current: usize,
    timer: TimerSlot,
    progress: ProgressBars,
    options: StoryOptions,
    awaiting_metadata: bool,
    open: bool,
}

impl<S: StoryStage> StoryPlayer<S> {
    #[must_use]
    pub fn new(segments: Vec<MediaItem>, stage: S, options: StoryOptions) -> Self {
        Self {
            progress: ProgressBars::new(segments.len()),
            stage,
            segments,
            current: 0,
            timer: TimerSlot::default(),
            options,
            awaiting_metadata: false,
            open: false,
        }
    }

    /// Handle a host message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Open { now } => {
                if self.segments.is_empty() {
                    log::debug!("Story has no segments, closing");
                    self.open = true;
                    return self.finish();
                }
                self.show_segment(0, now)
            }
            Message::Tick { handle, now } => self.tick(handle, now),
            Message::MetadataLoaded {
                segment,
                duration,
                now,
            } => {
                if !self.open || !self.awaiting_metadata || segment != self.current {
                    log::debug!("Ignoring metadata for segment {segment}");
                    return Effect::None;
                }
                self.awaiting_metadata = false;
                self.start_timer(duration, now)
            }
            Message::Tap { x, width, now } => {
                if !self.open {
                    return Effect::None;
                }
                self.timer.cancel();
                if x > width / 2.0 {
                    self.advance(now)
                } else if self.current > 0 {
                    self.show_segment(self.current - 1, now)
                } else {
                    // Stays on the first segment with the timer stopped
                    Effect::None
                }
            }
            Message::Close => {
                self.close();
                Effect::None
            }
        }
    }

    /// Displays segment `index` and starts its timer.
    ///
    /// Cancels the running timer first. Video segments return
    /// [`Effect::None`]: their timer starts on [`Message::MetadataLoaded`].
    pub fn show_segment(&mut self, index: usize, now: Instant) -> Effect {
        let Some(item) = self.segments.get(index) else {
            log::debug!("No story segment at {index}");
            return Effect::None;
        };

        self.timer.cancel();
        self.open = true;
        self.current = index;
        self.awaiting_metadata = false;
        self.progress.focus(index);
        self.stage.clear();

        match item.kind {
            MediaKind::Image => {
                self.stage.show_image(item);
                self.start_timer(self.options.image_duration, now)
            }
            MediaKind::Video => {
                if let Err(err) = self.stage.show_video(item) {
                    playback::log_rejection(&item.url, &err);
                }
                self.awaiting_metadata = true;
                Effect::None
            }
        }
    }

    fn tick(&mut self, handle: TimerHandle, now: Instant) -> Effect {
        if !self.timer.is_current(handle) {
            log::debug!("Dropping stale tick for timer {}", handle.id());
            return Effect::None;
        }
        let Some(progress) = self.timer.active().map(|t| t.progress(now)) else {
            return Effect::None;
        };

        if progress.is_complete() {
            self.timer.cancel();
            self.progress.set(self.current, ProgressPercent::FULL);
            return self.advance(now);
        }

        self.progress.set(self.current, progress);
        Effect::None
    }

    fn advance(&mut self, now: Instant) -> Effect {
        if self.current + 1 < self.segments.len() {
            self.show_segment(self.current + 1, now)
        } else {
            self.finish()
        }
    }

    fn start_timer(&mut self, duration: Duration, now: Instant) -> Effect {
        let handle = self.timer.start(now, duration);
        self.progress.set(self.current, ProgressPercent::EMPTY);
        Effect::Schedule {
            handle,
            interval: self.options.tick_interval,
        }
    }

    /// Closes after the last segment. Only the first call yields
    /// [`Effect::Close`].
    fn finish(&mut self) -> Effect {
        if self.close() {
            Effect::Close
        } else {
            Effect::None
        }
    }

    /// Cancels the timer and pauses any mounted video.
    ///
    /// Returns false if the player was already closed.
    pub fn close(&mut self) -> bool {
        self.timer.cancel();
        self.awaiting_metadata = false;
        if !self.open {
            return false;
        }
        self.open = false;
        self.stage.pause_video();
        true
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Index of the segment on screen.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn segment(&self, index: usize) -> Option<&MediaItem> {
        self.segments.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressBars {
        &self.progress
    }

    #[must_use]
    pub fn active_timer(&self) -> Option<&ProgressTimer> {
        self.timer.active()
    }

    #[must_use]
    pub fn options(&self) -> StoryOptions {
        self.options
    }

    #[must_use]
    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut S {
        &mut self.stage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::PlaybackError;
    use crate::test_utils::assert_abs_diff_eq;

    #[derive(Debug, Default)]
    struct RecordingStage {
        shown: Vec<String>,
        clears: usize,
        pauses: usize,
        reject_video: bool,
    }

    impl StoryStage for RecordingStage {
        fn clear(&mut self) {
            self.clears += 1;
        }
        fn show_image(&mut self, item: &MediaItem) {
            self.shown.push(item.url.clone());
        }
        fn show_video(&mut self, item: &MediaItem) -> Result<(), PlaybackError> {
            self.shown.push(item.url.clone());
            if self.reject_video {
                Err(PlaybackError::NotAllowed("policy".into()))
            } else {
                Ok(())
            }
        }
        fn pause_video(&mut self) {
            self.pauses += 1;
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    type TestPlayer = StoryPlayer<RecordingStage>;

    fn player(items: Vec<MediaItem>) -> TestPlayer {
        StoryPlayer::new(items, RecordingStage::default(), StoryOptions::default())
    }

    fn images(n: usize) -> Vec<MediaItem> {
        (0..n).map(|i| MediaItem::image(format!("{i}.jpg"))).collect()
    }

    fn scheduled(effect: Effect) -> TimerHandle {
        match effect {
            Effect::Schedule { handle, interval } => {
                assert_eq!(interval, ms(10));
                handle
            }
            other => panic!("expected Schedule, got {other:?}"),
        }
    }

    fn open(p: &mut TestPlayer, now: Instant) -> Effect {
        p.handle(Message::Open { now })
    }

    fn tick(p: &mut TestPlayer, handle: TimerHandle, now: Instant) -> Effect {
        p.handle(Message::Tick { handle, now })
    }

    /// Taps `x` pixels into a 100px wide viewer.
    fn tap(p: &mut TestPlayer, x: f32, now: Instant) -> Effect {
        p.handle(Message::Tap {
            x,
            width: 100.0,
            now,
        })
    }

    fn timer_duration(p: &TestPlayer) -> Option<Duration> {
        p.active_timer().map(ProgressTimer::duration)
    }

    #[test]
    fn open_shows_first_segment_and_schedules() {
        let mut p = player(images(2));
        scheduled(open(&mut p, Instant::now()));
        assert!(p.is_open());
        assert_eq!(p.current(), 0);
        assert_eq!(p.stage().shown, vec!["0.jpg"]);
        assert_eq!(timer_duration(&p), Some(ms(5_000)));
    }

    #[test]
    fn tick_updates_progress_until_complete() {
        let mut p = player(images(2));
        let t0 = Instant::now();
        let handle = scheduled(open(&mut p, t0));

        assert_eq!(tick(&mut p, handle, t0 + ms(2_500)), Effect::None);
        assert_abs_diff_eq!(p.progress().get(0).unwrap().value(), 50.0);

        scheduled(tick(&mut p, handle, t0 + ms(5_000)));
        assert_eq!(p.current(), 1);
        assert_eq!(p.progress().get(0), Some(ProgressPercent::FULL));
        assert_eq!(p.progress().get(1), Some(ProgressPercent::EMPTY));
    }

    #[test]
    fn stale_tick_is_ignored() {
        let mut p = player(images(3));
        let t0 = Instant::now();
        let old = scheduled(open(&mut p, t0));
        tap(&mut p, 90.0, t0 + ms(10));

        assert_eq!(tick(&mut p, old, t0 + ms(9_000)), Effect::None);
        assert_eq!(p.current(), 1);
    }

    #[test]
    fn last_segment_closes_once() {
        let mut p = player(images(1));
        let t0 = Instant::now();
        let handle = scheduled(open(&mut p, t0));

        assert_eq!(tick(&mut p, handle, t0 + ms(5_000)), Effect::Close);
        assert_eq!(tick(&mut p, handle, t0 + ms(5_010)), Effect::None);
        assert!(!p.is_open());
        assert_eq!(p.stage().pauses, 1);
    }

    #[test]
    fn right_tap_skips_and_resets_progress() {
        let mut p = player(images(3));
        let t0 = Instant::now();
        let handle = scheduled(open(&mut p, t0));
        tick(&mut p, handle, t0 + ms(4_000));

        scheduled(tap(&mut p, 60.0, t0 + ms(4_001)));
        assert_eq!(p.current(), 1);
        assert_eq!(p.progress().get(0), Some(ProgressPercent::FULL));
        assert_eq!(p.progress().get(1), Some(ProgressPercent::EMPTY));
    }

    #[test]
    fn right_tap_on_last_segment_closes() {
        let mut p = player(images(1));
        let t0 = Instant::now();
        open(&mut p, t0);
        assert_eq!(tap(&mut p, 80.0, t0), Effect::Close);
    }

    #[test]
    fn left_tap_steps_back() {
        let mut p = player(images(3));
        let t0 = Instant::now();
        open(&mut p, t0);
        tap(&mut p, 90.0, t0);
        tap(&mut p, 90.0, t0);
        assert_eq!(p.current(), 2);

        scheduled(tap(&mut p, 10.0, t0));
        assert_eq!(p.current(), 1);
        assert_eq!(p.progress().get(1), Some(ProgressPercent::EMPTY));
        assert_eq!(p.progress().get(2), Some(ProgressPercent::EMPTY));
    }

    #[test]
    fn left_tap_on_first_segment_only_stops_timer() {
        let mut p = player(images(2));
        let t0 = Instant::now();
        let handle = scheduled(open(&mut p, t0));

        // Exactly half counts as the left side
        assert_eq!(tap(&mut p, 50.0, t0), Effect::None);
        assert_eq!(p.current(), 0);
        assert!(p.active_timer().is_none());
        assert_eq!(tick(&mut p, handle, t0 + ms(6_000)), Effect::None);

        // Re-invoking restarts the segment
        scheduled(p.show_segment(0, t0 + ms(7_000)));
    }

    #[test]
    fn video_timer_waits_for_metadata() {
        let clip = MediaItem::video("clip.mp4");
        let mut p = player(vec![clip, MediaItem::image("b.jpg")]);
        let t0 = Instant::now();

        assert_eq!(open(&mut p, t0), Effect::None);
        assert!(p.active_timer().is_none());

        let handle = scheduled(p.handle(Message::MetadataLoaded {
            segment: 0,
            duration: ms(3_000),
            now: t0 + ms(200),
        }));
        assert_eq!(timer_duration(&p), Some(ms(3_000)));

        scheduled(tick(&mut p, handle, t0 + ms(3_200)));
        assert_eq!(p.current(), 1);
    }

    #[test]
    fn late_metadata_for_old_segment_is_ignored() {
        let mut p = player(vec![MediaItem::video("a.mp4"), MediaItem::video("b.mp4")]);
        let t0 = Instant::now();
        open(&mut p, t0);
        tap(&mut p, 99.0, t0);

        let effect = p.handle(Message::MetadataLoaded {
            segment: 0,
            duration: ms(1_000),
            now: t0,
        });
        assert_eq!(effect, Effect::None);
        assert!(p.active_timer().is_none());
    }

    #[test]
    fn rejected_video_still_runs() {
        let stage = RecordingStage {
            reject_video: true,
            ..RecordingStage::default()
        };
        let items = vec![MediaItem::video("a.mp4")];
        let mut p = StoryPlayer::new(items, stage, StoryOptions::default());
        let t0 = Instant::now();
        open(&mut p, t0);
        scheduled(p.handle(Message::MetadataLoaded {
            segment: 0,
            duration: ms(1_000),
            now: t0,
        }));
    }

    #[test]
    fn close_cancels_timer_and_pauses() {
        let mut p = player(images(2));
        let t0 = Instant::now();
        let handle = scheduled(open(&mut p, t0));

        assert_eq!(p.handle(Message::Close), Effect::None);
        assert!(!p.is_open());
        assert_eq!(p.stage().pauses, 1);
        assert_eq!(tick(&mut p, handle, t0 + ms(9_000)), Effect::None);

        // Closing twice is harmless
        assert!(!p.close());
        assert_eq!(p.stage().pauses, 1);
    }

    #[test]
    fn reopen_starts_from_first_segment() {
        let mut p = player(images(3));
        let t0 = Instant::now();
        open(&mut p, t0);
        tap(&mut p, 99.0, t0);
        p.handle(Message::Close);

        scheduled(open(&mut p, t0));
        assert_eq!(p.current(), 0);
        assert_eq!(p.progress().get(1), Some(ProgressPercent::EMPTY));
    }

    #[test]
    fn empty_story_closes_on_open() {
        let mut p = player(Vec::new());
        assert_eq!(open(&mut p, Instant::now()), Effect::Close);
        assert!(!p.is_open());
    }

    #[test]
    fn show_segment_out_of_range_is_ignored() {
        let mut p = player(images(1));
        assert_eq!(p.show_segment(4, Instant::now()), Effect::None);
        assert!(!p.is_open());
    }
}
