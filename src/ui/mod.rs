// SPDX-License-Identifier: MPL-2.0
//! Interactive components and their shared helpers.
//!
//! Components follow the Elm-style "state down, messages up" pattern: the
//! host feeds a `Message` to `handle()` and applies the returned `Effect`.
//!
//! # Components
//!
//! - [`carousel`] - Post media slider with swipe, arrows, dots and autoplay
//! - [`story`] - Timed story player with per-segment progress
//! - [`post`] - Post lifecycle and the preview modal
//!
//! # Shared Infrastructure
//!
//! - [`gesture`] - Swipe/scroll classification of touch sequences
//! - [`playback`] - Fire-and-forget play/pause helpers
//! - [`subscription`] - Scoped listener handles released on teardown

pub mod carousel;
pub mod gesture;
pub mod playback;
pub mod post;
pub mod story;
pub mod subscription;
