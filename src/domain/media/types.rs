// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use serde::{Deserialize, Serialize};

/// Kind of a media entry in a post or a story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still image, displayed for a fixed duration in stories.
    Image,
    /// Video, which plays on its own natural duration.
    Video,
}

impl MediaKind {
    /// Infers the kind from a URL or file name using the given video extensions.
    ///
    /// Matching is case-insensitive and ignores any query string or fragment.
    ///
    /// # Example
    ///
    /// ```
    /// use photogram::domain::media::MediaKind;
    ///
    /// let exts = ["mp4", "webm"];
    /// assert_eq!(MediaKind::from_url("clip.MP4", &exts), MediaKind::Video);
    /// assert_eq!(MediaKind::from_url("/a/b.webm?t=3", &exts), MediaKind::Video);
    /// assert_eq!(MediaKind::from_url("photo.jpg", &exts), MediaKind::Image);
    /// ```
    #[must_use]
    pub fn from_url<S: AsRef<str>>(url: &str, video_extensions: &[S]) -> Self {
        let path = url.split(['?', '#']).next().unwrap_or(url);
        let Some((_, ext)) = path.rsplit_once('.') else {
            return Self::Image;
        };
        if ext.contains('/') {
            return Self::Image;
        }
        let is_video = video_extensions
            .iter()
            .any(|candidate| candidate.as_ref().eq_ignore_ascii_case(ext));
        if is_video {
            Self::Video
        } else {
            Self::Image
        }
    }

    #[must_use]
    pub fn is_video(self) -> bool {
        matches!(self, Self::Video)
    }
}

/// One media entry as supplied by the remote data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Resolved URL of the file.
    pub url: String,
    /// Image or video.
    pub kind: MediaKind,
}

impl MediaItem {
    #[must_use]
    pub fn new(url: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            url: url.into(),
            kind,
        }
    }

    #[must_use]
    pub fn image(url: impl Into<String>) -> Self {
        Self::new(url, MediaKind::Image)
    }

    #[must_use]
    pub fn video(url: impl Into<String>) -> Self {
        Self::new(url, MediaKind::Video)
    }

    /// Builds an item from a file name, inferring its kind and prefixing the URL.
    #[must_use]
    pub fn from_file<S: AsRef<str>>(prefix: &str, file: &str, video_extensions: &[S]) -> Self {
        Self::new(
            format!("{prefix}{file}"),
            MediaKind::from_url(file, video_extensions),
        )
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        self.kind.is_video()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTS: [&str; 2] = ["mp4", "mov"];

    #[test]
    fn from_url_detects_video_case_insensitively() {
        assert_eq!(MediaKind::from_url("a.mp4", &EXTS), MediaKind::Video);
        assert_eq!(MediaKind::from_url("a.MOV", &EXTS), MediaKind::Video);
    }

    #[test]
    fn from_url_defaults_to_image() {
        assert_eq!(MediaKind::from_url("a.png", &EXTS), MediaKind::Image);
        assert_eq!(MediaKind::from_url("no_extension", &EXTS), MediaKind::Image);
        assert_eq!(MediaKind::from_url("dir.mp4/file", &EXTS), MediaKind::Image);
    }

    #[test]
    fn from_url_ignores_query_and_fragment() {
        assert_eq!(MediaKind::from_url("v.mp4?x=1", &EXTS), MediaKind::Video);
        assert_eq!(MediaKind::from_url("v.mp4#t=2", &EXTS), MediaKind::Video);
    }

    #[test]
    fn from_file_prefixes_url() {
        let item = MediaItem::from_file("/static/media/story/", "clip.mp4", &EXTS);
        assert_eq!(item.url, "/static/media/story/clip.mp4");
        assert!(item.is_video());
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&MediaKind::Video).expect("serialize");
        assert_eq!(json, "\"video\"");
    }
}
