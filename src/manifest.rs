// SPDX-License-Identifier: MPL-2.0
//! Content manifest: the posts and stories supplied by the remote data source.
//!
//! The manifest is JSON. Media are listed as bare file names and resolved
//! against the static prefixes when turned into [`MediaItem`]s. A story
//! entry may also give a video's natural length explicitly, for hosts that
//! cannot probe the file.
//!
//! ```json
//! {
//!   "posts": [{ "id": "p1", "name": "ana", "media": ["a.jpg", "b.mp4"] }],
//!   "stories": [{
//!     "name": "ana",
//!     "profile_image": "ana.jpg",
//!     "story_media": ["s1.jpg", { "file": "s2.mp4", "duration_ms": 4200 }]
//!   }]
//! }
//! ```

use crate::config::{DEFAULT_POST_MEDIA_PREFIX, DEFAULT_STORY_MEDIA_PREFIX};
use crate::domain::media::MediaItem;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Top-level manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub posts: Vec<PostEntry>,
    #[serde(default)]
    pub stories: Vec<StoryEntry>,
}

/// One post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostEntry {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub media: Vec<String>,
    /// Shown only on the explore page, not in the home feed.
    #[serde(default)]
    pub explore: bool,
}

impl PostEntry {
    /// Slider media in display order.
    #[must_use]
    pub fn media_items<S: AsRef<str>>(&self, video_extensions: &[S]) -> Vec<MediaItem> {
        self.media
            .iter()
            .map(|file| MediaItem::from_file(DEFAULT_POST_MEDIA_PREFIX, file, video_extensions))
            .collect()
    }
}

/// One story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryEntry {
    pub name: String,
    #[serde(default)]
    pub profile_image: String,
    #[serde(default)]
    pub story_media: Vec<StoryMedia>,
}

/// A story segment: a bare file name, or a file with its known duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoryMedia {
    File(String),
    Detailed {
        file: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration_ms: Option<u64>,
    },
}

impl StoryMedia {
    #[must_use]
    pub fn file(&self) -> &str {
        match self {
            Self::File(file) | Self::Detailed { file, .. } => file,
        }
    }

    /// Natural duration, when the manifest states one.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        match self {
            Self::File(_) => None,
            Self::Detailed { duration_ms, .. } => duration_ms.map(Duration::from_millis),
        }
    }
}

impl StoryEntry {
    /// Segments in playback order.
    #[must_use]
    pub fn segments<S: AsRef<str>>(&self, video_extensions: &[S]) -> Vec<MediaItem> {
        self.story_media
            .iter()
            .map(|media| {
                MediaItem::from_file(DEFAULT_STORY_MEDIA_PREFIX, media.file(), video_extensions)
            })
            .collect()
    }
}

impl Manifest {
    /// Parses a manifest from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        let manifest: Self = serde_json::from_str(content)?;
        for post in &manifest.posts {
            if post.id.is_empty() {
                return Err(Error::Manifest(format!(
                    "post by '{}' has an empty id",
                    post.name
                )));
            }
        }
        Ok(manifest)
    }

    /// Posts shown in the home feed.
    pub fn home_posts(&self) -> impl Iterator<Item = &PostEntry> {
        self.posts.iter().filter(|post| !post.explore)
    }

    #[must_use]
    pub fn story(&self, index: usize) -> Option<&StoryEntry> {
        self.stories.get(index)
    }
}

/// Loads a manifest file.
pub fn load_from_path(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path)?;
    Manifest::from_json(&content)
}
