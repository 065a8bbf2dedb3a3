// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that host adapters implement.
//! These traits use only domain types, so components stay independent of
//! any concrete page or platform.
//!
//! # Available Ports
//!
//! - [`media`]: Playable media nodes (play, pause, readiness, duration)
//! - [`stage`]: Story viewer display area
//! - [`visibility`]: Viewport intersection observation
//!
//! # Design Notes
//!
//! - No `async fn`: asynchronous outcomes come back as component messages
//! - Every call is fire-and-forget from the component's point of view

pub mod media;
pub mod stage;
pub mod visibility;

// Re-export main types for convenience
pub use media::{MediaElement, ReadyState};
pub use stage::StoryStage;
pub use visibility::{NoopObserver, ObserverOptions, VisibilityObserver};
