// SPDX-License-Identifier: MPL-2.0
//! Navigation indicator state: prev/next arrows and position dots.
//!
//! The carousel never touches markup. It keeps an [`Indicator`] and hands
//! the resulting [`NavigationUi`] to the host, which projects it onto its
//! arrow and dot elements.

/// Input style of the device, fixed when the carousel is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Phones and tablets: touch swipes, no arrows.
    Touch,
    /// Desktop: arrow buttons with hover reveal.
    #[default]
    Pointer,
}

impl InputMode {
    /// Classifies a browser user agent.
    ///
    /// # Example
    ///
    /// ```
    /// use photogram::ui::carousel::InputMode;
    ///
    /// let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)";
    /// assert_eq!(InputMode::from_user_agent(ua), InputMode::Touch);
    /// let desktop = "Mozilla/5.0 (X11; Linux x86_64)";
    /// assert_eq!(InputMode::from_user_agent(desktop), InputMode::Pointer);
    /// ```
    #[must_use]
    pub fn from_user_agent(user_agent: &str) -> Self {
        const MOBILE_TOKENS: [&str; 4] = ["iphone", "ipad", "ipod", "android"];
        let ua = user_agent.to_ascii_lowercase();
        if MOBILE_TOKENS.iter().any(|token| ua.contains(token)) {
            Self::Touch
        } else {
            Self::Pointer
        }
    }

    #[must_use]
    pub fn is_touch(self) -> bool {
        matches!(self, Self::Touch)
    }
}

/// Display state of one arrow button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowState {
    /// Laid out at all.
    pub displayed: bool,
    /// Fully opaque (hover fades it out without removing it).
    pub opaque: bool,
}

impl ArrowState {
    pub const HIDDEN: Self = Self {
        displayed: false,
        opaque: false,
    };
    pub const SHOWN: Self = Self {
        displayed: true,
        opaque: true,
    };

    fn available(available: bool) -> Self {
        if available {
            Self::SHOWN
        } else {
            Self::HIDDEN
        }
    }

    /// Returns true if the arrow can currently be seen and clicked.
    #[must_use]
    pub fn is_visible(self) -> bool {
        self.displayed && self.opaque
    }
}

/// Everything the host needs to render the navigation chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationUi {
    pub prev: ArrowState,
    pub next: ArrowState,
    /// Index of the highlighted dot.
    pub active_dot: usize,
    /// Number of dots.
    pub dot_count: usize,
}

impl NavigationUi {
    /// Active flag per dot, in order.
    pub fn dots(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.dot_count).map(move |i| i == self.active_dot)
    }
}

/// Arrow and dot state for one carousel.
#[derive(Debug, Clone)]
pub struct Indicator {
    mode: InputMode,
    count: usize,
    ui: NavigationUi,
}

impl Indicator {
    /// Builds the initial state for a carousel showing its first slide.
    #[must_use]
    pub fn new(mode: InputMode, count: usize) -> Self {
        let mut indicator = Self {
            mode,
            count,
            ui: NavigationUi {
                prev: ArrowState::HIDDEN,
                next: ArrowState::HIDDEN,
                active_dot: 0,
                dot_count: count,
            },
        };
        indicator.update(0);
        indicator
    }

    #[must_use]
    pub fn ui(&self) -> NavigationUi {
        self.ui
    }

    /// Recomputes arrows and dots for the slide at `index`.
    pub fn update(&mut self, index: usize) -> NavigationUi {
        if !self.mode.is_touch() {
            self.ui.prev = ArrowState::available(index > 0);
            self.ui.next = ArrowState::available(index + 1 < self.count);
        }
        self.ui.active_dot = index;
        self.ui
    }

    /// Pointer entered the slider: reveal arrows that can move.
    ///
    /// Returns `None` when hover has no effect (touch mode or a single slide).
    pub fn pointer_entered(&mut self, index: usize) -> Option<NavigationUi> {
        if !self.hover_enabled() {
            return None;
        }
        if index > 0 {
            self.ui.prev = ArrowState::SHOWN;
        }
        if index + 1 < self.count {
            self.ui.next = ArrowState::SHOWN;
        }
        Some(self.ui)
    }

    /// Pointer left the slider: fade both arrows, keep their layout.
    pub fn pointer_left(&mut self) -> Option<NavigationUi> {
        if !self.hover_enabled() {
            return None;
        }
        self.ui.prev.opaque = false;
        self.ui.next.opaque = false;
        Some(self.ui)
    }

    fn hover_enabled(&self) -> bool {
        !self.mode.is_touch() && self.count > 1
    }
}
