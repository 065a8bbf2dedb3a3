// SPDX-License-Identifier: MPL-2.0
//! Story viewer: timed segments with per-segment progress bars.

mod component;
pub mod progress;
pub mod timer;

pub use component::{Effect, Message, StoryOptions, StoryPlayer};
pub use progress::ProgressBars;
pub use timer::{ProgressTimer, TimerHandle, TimerSlot};
