// SPDX-License-Identifier: MPL-2.0
//! Domain layer - plain value types shared by every component.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`PlaybackError`](error::PlaybackError))
//! - [`media`]: Media descriptors ([`MediaKind`](media::MediaKind),
//!   [`MediaItem`](media::MediaItem))
//! - [`ui`]: UI value objects ([`Point`](ui::Point),
//!   [`CommitThreshold`](ui::CommitThreshold), [`ProgressPercent`](ui::ProgressPercent),
//!   [`VisibilityRatio`](ui::VisibilityRatio))

pub mod error;
pub mod media;
pub mod ui;
