// SPDX-License-Identifier: MPL-2.0
//! Post media slider.
//!
//! [`SwipeCarousel`] coordinates three sub-components:
//! - the [`GestureTracker`](crate::ui::gesture::GestureTracker) for touch input
//! - the [`Indicator`] for arrows and dots
//! - [`autoplay`] for visibility-driven play/pause

pub mod autoplay;
mod component;
pub mod indicator;

pub use component::{
    CarouselOptions, Effect, Message, NavDirection, Phase, Slide, SwipeCarousel, TransitionId,
};
pub use indicator::{ArrowState, Indicator, InputMode, NavigationUi};
