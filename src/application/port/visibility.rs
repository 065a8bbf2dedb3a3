// SPDX-License-Identifier: MPL-2.0
//! Visibility observer port definition.
//!
//! The host maps this onto its intersection observer primitive. Crossing
//! notifications travel back into the carousel as
//! [`Message::VisibilityChanged`](crate::ui::carousel::Message::VisibilityChanged).

use crate::config::{DEFAULT_ROOT_MARGIN_PX, DEFAULT_VISIBILITY_THRESHOLD};
use crate::domain::ui::VisibilityRatio;

/// Observation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Visible fraction that counts as "in view".
    pub threshold: VisibilityRatio,
    /// Margin (px) added around the viewport so playback can start early.
    pub root_margin_px: u32,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: VisibilityRatio::new(DEFAULT_VISIBILITY_THRESHOLD),
            root_margin_px: DEFAULT_ROOT_MARGIN_PX,
        }
    }
}

/// Port for viewport intersection tracking.
pub trait VisibilityObserver {
    /// Starts observing the slide at `slide`.
    fn observe(&mut self, slide: usize, options: ObserverOptions);

    /// Stops all observation. Disconnecting twice must be harmless.
    fn disconnect(&mut self);
}

/// Observer that never reports anything, for hosts without viewport tracking.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl VisibilityObserver for NoopObserver {
    fn observe(&mut self, _slide: usize, _options: ObserverOptions) {}

    fn disconnect(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_half_visible_with_margin() {
        let options = ObserverOptions::default();
        assert_eq!(options.threshold, VisibilityRatio::HALF);
        assert_eq!(options.root_margin_px, 50);
    }
}
