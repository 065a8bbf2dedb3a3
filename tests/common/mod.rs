// SPDX-License-Identifier: MPL-2.0
//! Host doubles shared by the integration tests.
#![allow(dead_code)]

use photogram::application::port::{
    MediaElement, ObserverOptions, ReadyState, StoryStage, VisibilityObserver,
};
use photogram::domain::error::PlaybackError;
use photogram::domain::media::MediaItem;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Stage that records the URLs it was asked to show.
#[derive(Debug, Default)]
pub struct NullStage {
    pub shown: Vec<String>,
    pub pauses: usize,
}

impl StoryStage for NullStage {
    fn clear(&mut self) {}

    fn show_image(&mut self, item: &MediaItem) {
        self.shown.push(item.url.clone());
    }

    fn show_video(&mut self, item: &MediaItem) -> Result<(), PlaybackError> {
        self.shown.push(item.url.clone());
        Ok(())
    }

    fn pause_video(&mut self) {
        self.pauses += 1;
    }
}

/// Shared log of element calls, tagged with the element's name.
pub type CallLog = Rc<RefCell<Vec<(String, &'static str)>>>;

/// Video element that appends every call to a shared log.
#[derive(Debug)]
pub struct LoggedVideo {
    pub name: String,
    pub log: CallLog,
}

impl LoggedVideo {
    pub fn new(name: &str, log: &CallLog) -> Self {
        Self {
            name: name.to_string(),
            log: Rc::clone(log),
        }
    }

    fn record(&self, call: &'static str) {
        self.log.borrow_mut().push((self.name.clone(), call));
    }
}

impl MediaElement for LoggedVideo {
    fn play(&mut self) -> Result<(), PlaybackError> {
        self.record("play");
        Ok(())
    }
    fn pause(&mut self) {
        self.record("pause");
    }
    fn rewind(&mut self) {
        self.record("rewind");
    }
    fn set_looping(&mut self, _looping: bool) {
        self.record("loop");
    }
    fn ready_state(&self) -> ReadyState {
        ReadyState::HaveEnoughData
    }
    fn duration(&self) -> Option<Duration> {
        None
    }
    fn unload(&mut self) {
        self.record("unload");
    }
}

/// Observer counting its registrations and disconnects.
#[derive(Debug, Default, Clone)]
pub struct SharedObserver {
    pub observed: Rc<RefCell<Vec<usize>>>,
    pub disconnects: Rc<RefCell<u32>>,
}

impl VisibilityObserver for SharedObserver {
    fn observe(&mut self, slide: usize, _options: ObserverOptions) {
        self.observed.borrow_mut().push(slide);
    }

    fn disconnect(&mut self) {
        *self.disconnects.borrow_mut() += 1;
    }
}
