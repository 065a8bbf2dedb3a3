// SPDX-License-Identifier: MPL-2.0
//! Swipe carousel orchestrator.
//!
//! Owns the slides of one post, the gesture tracker, the navigation
//! indicator and the autoplay sub-component, and turns host events into
//! [`Effect`]s the host applies to its track element.
//!
//! ```text
//!            TouchStart                 valid verdict / arrow
//!   Idle ─────────────────▶ Dragging ─────────────────────────▶ Transitioning
//!    ▲  ◀───────────────────    │                                    │
//!    │   scroll / invalid       │                                    │
//!    └──────────────────────────┴──── TransitionEnd / lockout over ◀─┘
//! ```

use super::autoplay;
use super::indicator::{Indicator, InputMode, NavigationUi};
use crate::application::port::{MediaElement, ObserverOptions, VisibilityObserver};
use crate::config::DEFAULT_TRANSITION_MS;
use crate::domain::error::PlaybackError;
use crate::domain::media::MediaItem;
use crate::domain::ui::{CommitThreshold, Point, VisibilityRatio};
use crate::ui::gesture::{primary_touch, GestureTracker, SwipeDirection, TouchOptions};
use crate::ui::playback;
use crate::ui::subscription::Subscription;
use std::time::{Duration, Instant};

/// Tunables for one carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselOptions {
    pub touch: TouchOptions,
    pub commit_threshold: CommitThreshold,
    /// Slide animation length; navigation is locked for this long.
    pub transition: Duration,
    pub observer: ObserverOptions,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            touch: TouchOptions::default(),
            commit_threshold: CommitThreshold::default(),
            transition: Duration::from_millis(DEFAULT_TRANSITION_MS),
            observer: ObserverOptions::default(),
        }
    }
}

/// One page of the carousel. Video slides carry their element.
#[derive(Debug)]
pub struct Slide<M> {
    pub item: MediaItem,
    pub element: Option<M>,
}

impl<M> Slide<M> {
    #[must_use]
    pub fn image(item: MediaItem) -> Self {
        Self {
            item,
            element: None,
        }
    }

    #[must_use]
    pub fn video(item: MediaItem, element: M) -> Self {
        Self {
            item,
            element: Some(element),
        }
    }
}

/// Arrow navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Prev,
    Next,
}

/// Observable interaction phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging,
    Transitioning,
}

/// Identifies one slide animation.
///
/// The end event of an animation that was superseded carries an older id
/// and no longer unlocks navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionId(u64);

impl TransitionId {
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Motion {
    Idle,
    Dragging { start_x: f32, current_x: f32 },
    Transitioning {
        until: Instant,
        transition: TransitionId,
    },
}

/// Messages delivered by the host.
#[derive(Debug, Clone)]
pub enum Message {
    /// Touch sequence began. Only the first point is tracked.
    TouchStart { touches: Vec<Point>, now: Instant },
    /// Finger moved.
    TouchMove { touches: Vec<Point> },
    /// Touch sequence ended (the changed touches of the end event).
    TouchEnd { touches: Vec<Point>, now: Instant },
    /// Arrow button clicked.
    Navigate {
        direction: NavDirection,
        now: Instant,
    },
    /// A slide animation finished.
    TransitionEnd { transition: TransitionId },
    /// Container width changed.
    Resize { width: f32 },
    /// Pointer entered the slider area.
    PointerEntered,
    /// Pointer left the slider area.
    PointerLeft,
    /// Visibility observer notification for a slide.
    VisibilityChanged {
        slide: usize,
        ratio: VisibilityRatio,
    },
    /// A slide's video buffered its current frame.
    MediaReady { slide: usize },
    /// A play request on a slide was rejected after the fact.
    PlaybackRejected { slide: usize, error: PlaybackError },
}

/// Effects for the host to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Gesture is a vertical scroll; stop preventing the default scroll.
    ReleaseScroll,
    /// Move the track to follow the finger, without easing.
    Follow { offset_percent: f32 },
    /// Animate the track back to the current slide; nothing changed.
    SnapBack { offset_percent: f32 },
    /// Animate to the current slide and refresh the navigation chrome.
    Slide {
        offset_percent: f32,
        navigation: NavigationUi,
        lockout: Duration,
        transition: TransitionId,
    },
    /// Arrow visibility changed.
    Indicator(NavigationUi),
}

impl Effect {
    /// The animation this effect starts, if any.
    #[must_use]
    pub fn transition(&self) -> Option<TransitionId> {
        match self {
            Self::Slide { transition, .. } => Some(*transition),
            _ => None,
        }
    }
}

/// Horizontally paginated media slider for one post.
#[derive(Debug)]
pub struct SwipeCarousel<M, O> {
    slides: Vec<Slide<M>>,
    index: usize,
    /// Index the media pass last ran for.
    media_index: usize,
    motion: Motion,
    last_transition: u64,
    mode: InputMode,
    arrows_bound: bool,
    container_width: f32,
    options: CarouselOptions,
    tracker: GestureTracker,
    indicator: Indicator,
    autoplay: autoplay::State,
    observer: O,
    subscriptions: Vec<Subscription>,
    torn_down: bool,
}

impl<M: MediaElement, O: VisibilityObserver> SwipeCarousel<M, O> {
    /// Builds a carousel over `slides` showing the first one.
    ///
    /// Returns `None` when there is nothing to show; the post then simply has
    /// no slider. A leading video starts looping right away and every video
    /// slide is registered with the observer.
    pub fn new(
        slides: Vec<Slide<M>>,
        mode: InputMode,
        container_width: f32,
        mut observer: O,
        options: CarouselOptions,
    ) -> Option<Self> {
        if slides.is_empty() {
            log::debug!("Slider has no media, not binding");
            return None;
        }

        let video_slides: Vec<usize> = slides
            .iter()
            .enumerate()
            .filter(|(_, s)| s.element.is_some())
            .map(|(i, _)| i)
            .collect();
        for &slide in &video_slides {
            observer.observe(slide, options.observer);
        }

        let mut carousel = Self {
            indicator: Indicator::new(mode, slides.len()),
            autoplay: autoplay::State::new(
                options.observer.threshold,
                slides.len(),
                video_slides,
            ),
            slides,
            index: 0,
            media_index: 0,
            motion: Motion::Idle,
            last_transition: 0,
            mode,
            arrows_bound: true,
            container_width: container_width.max(0.0),
            options,
            tracker: GestureTracker::new(options.touch),
            observer,
            subscriptions: Vec::new(),
            torn_down: false,
        };

        if let Some(Slide {
            item,
            element: Some(video),
        }) = carousel.slides.first_mut()
        {
            video.set_looping(true);
            playback::play_or_log(video, &item.url);
        }

        Some(carousel)
    }

    /// Disables arrow navigation, for markup without arrow buttons.
    #[must_use]
    pub fn without_arrows(mut self) -> Self {
        self.arrows_bound = false;
        self
    }

    /// Handle a host message.
    ///
    /// Note: Takes `Message` by value following the `update(message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        if self.torn_down {
            log::debug!("Ignoring {msg:?} on torn down carousel");
            return Effect::None;
        }

        match msg {
            Message::TouchStart { touches, now } => self.touch_start(&touches, now),
            Message::TouchMove { touches } => self.touch_move(&touches),
            Message::TouchEnd { touches, now } => self.touch_end(&touches, now),
            Message::Navigate { direction, now } => self.arrow_navigate(direction, now),
            Message::TransitionEnd { transition } => {
                if let Motion::Transitioning {
                    transition: running,
                    ..
                } = self.motion
                {
                    if running == transition {
                        self.motion = Motion::Idle;
                    } else {
                        log::debug!(
                            "Ignoring end of superseded transition {}",
                            transition.id()
                        );
                    }
                }
                Effect::None
            }
            Message::Resize { width } => {
                self.container_width = width.max(0.0);
                Effect::None
            }
            Message::PointerEntered => self
                .indicator
                .pointer_entered(self.index)
                .map_or(Effect::None, Effect::Indicator),
            Message::PointerLeft => self
                .indicator
                .pointer_left()
                .map_or(Effect::None, Effect::Indicator),
            Message::VisibilityChanged { slide, ratio } => {
                let ready = self
                    .element(slide)
                    .map(MediaElement::ready_state)
                    .unwrap_or_default();
                let effect = self.autoplay.handle(autoplay::Message::VisibilityChanged {
                    slide,
                    ratio,
                    ready,
                });
                self.apply_autoplay(effect);
                Effect::None
            }
            Message::MediaReady { slide } => {
                let effect = self
                    .autoplay
                    .handle(autoplay::Message::MediaReady { slide });
                self.apply_autoplay(effect);
                Effect::None
            }
            Message::PlaybackRejected { slide, error } => {
                let url = self.slides.get(slide).map_or("", |s| s.item.url.as_str());
                playback::log_rejection(url, &error);
                Effect::None
            }
        }
    }

    /// Navigates one slide with the arrow buttons.
    pub fn arrow_navigate(&mut self, direction: NavDirection, now: Instant) -> Effect {
        if self.torn_down || self.mode.is_touch() || !self.arrows_bound {
            return Effect::None;
        }
        self.expire_transition(now);
        if self.motion != Motion::Idle {
            log::debug!("Arrow navigation ignored while {:?}", self.phase());
            return Effect::None;
        }

        let target = match direction {
            NavDirection::Prev => self.index.checked_sub(1),
            NavDirection::Next => Some(self.index + 1).filter(|&i| i < self.slides.len()),
        };
        let Some(target) = target else {
            return Effect::None;
        };

        self.index = target;
        self.begin_transition(now)
    }

    fn touch_start(&mut self, touches: &[Point], now: Instant) -> Effect {
        if !self.mode.is_touch() {
            return Effect::None;
        }
        self.expire_transition(now);
        if matches!(self.motion, Motion::Transitioning { .. }) {
            log::debug!("Touch ignored during slide transition");
            return Effect::None;
        }
        let Some(point) = primary_touch(touches) else {
            return Effect::None;
        };

        let anchor = self.tracker.start(point, now);
        self.motion = Motion::Dragging {
            start_x: anchor.x,
            current_x: anchor.x,
        };
        Effect::None
    }

    fn touch_move(&mut self, touches: &[Point]) -> Effect {
        let Motion::Dragging { start_x, .. } = self.motion else {
            return Effect::None;
        };
        let Some(point) = primary_touch(touches) else {
            return Effect::None;
        };
        let Some(sample) = self.tracker.move_to(point) else {
            return Effect::None;
        };

        if sample.is_scrolling() {
            self.tracker.cancel();
            self.motion = Motion::Idle;
            return Effect::ReleaseScroll;
        }

        self.motion = Motion::Dragging {
            start_x,
            current_x: point.x,
        };
        let diff = point.x - start_x;

        // No rubber band past either end
        let last = self.slides.len() - 1;
        if (self.index == 0 && diff > 0.0) || (self.index == last && diff < 0.0) {
            return Effect::None;
        }

        Effect::Follow {
            offset_percent: self.drag_offset(diff),
        }
    }

    fn touch_end(&mut self, touches: &[Point], now: Instant) -> Effect {
        let Motion::Dragging { start_x, current_x } = self.motion else {
            return Effect::None;
        };
        let point = primary_touch(touches).unwrap_or(Point::new(current_x, 0.0));

        let Some(verdict) = self.tracker.end(point, now) else {
            self.motion = Motion::Idle;
            return Effect::None;
        };

        if !verdict.is_valid {
            self.motion = Motion::Idle;
            return Effect::SnapBack {
                offset_percent: self.rest_offset(),
            };
        }

        let diff = current_x - start_x;
        if self
            .options
            .commit_threshold
            .is_exceeded(diff, self.container_width)
        {
            match verdict.direction {
                SwipeDirection::Right if self.index > 0 => self.index -= 1,
                SwipeDirection::Left if self.index + 1 < self.slides.len() => self.index += 1,
                _ => {}
            }
        }

        self.begin_transition(now)
    }

    fn begin_transition(&mut self, now: Instant) -> Effect {
        self.last_transition += 1;
        let transition = TransitionId(self.last_transition);
        self.motion = Motion::Transitioning {
            until: now + self.options.transition,
            transition,
        };
        self.transition_media();
        Effect::Slide {
            offset_percent: self.rest_offset(),
            navigation: self.indicator.update(self.index),
            lockout: self.options.transition,
            transition,
        }
    }

    fn expire_transition(&mut self, now: Instant) {
        if let Motion::Transitioning { until, .. } = self.motion {
            if now >= until {
                self.motion = Motion::Idle;
            }
        }
    }

    /// Pauses and rewinds every video, then loops the current one.
    fn transition_media(&mut self) {
        if self.media_index == self.index {
            return;
        }

        for slide in &mut self.slides {
            if let Some(video) = slide.element.as_mut() {
                playback::stop(video);
            }
        }

        if let Some(Slide {
            item,
            element: Some(video),
        }) = self.slides.get_mut(self.index)
        {
            video.set_looping(true);
            playback::play_or_log(video, &item.url);
        }

        self.media_index = self.index;
    }

    fn apply_autoplay(&mut self, effect: autoplay::Effect) {
        match effect {
            autoplay::Effect::None => {}
            autoplay::Effect::Play(slide) => {
                if let Some(Slide {
                    item,
                    element: Some(video),
                }) = self.slides.get_mut(slide)
                {
                    playback::play_or_log(video, &item.url);
                }
            }
            autoplay::Effect::Pause(slide) => {
                if let Some(video) = self.element_mut(slide) {
                    video.pause();
                }
            }
        }
    }

    fn rest_offset(&self) -> f32 {
        -(self.index as f32) * 100.0
    }

    fn drag_offset(&self, diff: f32) -> f32 {
        if self.container_width > 0.0 {
            self.rest_offset() + diff / self.container_width * 100.0
        } else {
            self.rest_offset()
        }
    }

    /// Keeps a bound listener alive until teardown.
    ///
    /// Handles attached after teardown are released immediately.
    pub fn attach(&mut self, mut subscription: Subscription) {
        if self.torn_down {
            subscription.release();
            return;
        }
        self.subscriptions.push(subscription);
    }

    /// Releases every listener and disconnects the observer.
    ///
    /// Only the first call has any effect.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        for mut subscription in self.subscriptions.drain(..) {
            subscription.release();
        }
        self.observer.disconnect();
        self.autoplay.clear();
        self.tracker.cancel();
        self.motion = Motion::Idle;
    }

    /// Pauses every video and drops its source.
    pub fn unload_media(&mut self) {
        for slide in &mut self.slides {
            if let Some(video) = slide.element.as_mut() {
                video.pause();
                video.unload();
            }
        }
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Current slide index, always `< len()`.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false: a carousel is never built without slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.motion {
            Motion::Idle => Phase::Idle,
            Motion::Dragging { .. } => Phase::Dragging,
            Motion::Transitioning { .. } => Phase::Transitioning,
        }
    }

    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    #[must_use]
    pub fn navigation(&self) -> NavigationUi {
        self.indicator.ui()
    }

    /// Offset of the track at rest on the current slide.
    #[must_use]
    pub fn offset_percent(&self) -> f32 {
        self.rest_offset()
    }

    #[must_use]
    pub fn slide(&self, index: usize) -> Option<&Slide<M>> {
        self.slides.get(index)
    }

    #[must_use]
    pub fn element(&self, index: usize) -> Option<&M> {
        self.slides.get(index)?.element.as_ref()
    }

    fn element_mut(&mut self, index: usize) -> Option<&mut M> {
        self.slides.get_mut(index)?.element.as_mut()
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }
}
