// SPDX-License-Identifier: MPL-2.0
//! Post lifecycle and the preview modal that hosts one post at a time.
//!
//! A [`Post`] is mounted from already-resolved markup. It owns the post's
//! carousel, if the markup has a slider, and tears it down on cleanup.
//! [`PostModal`] shows one post; closing it stops and unloads the post's
//! videos before cleaning the post up.

use crate::application::port::{MediaElement, VisibilityObserver};
use crate::ui::carousel::{self, CarouselOptions, InputMode, Slide, SwipeCarousel};

/// Slider portion of a post's markup.
#[derive(Debug)]
pub struct SliderMarkup<M> {
    pub slides: Vec<Slide<M>>,
    /// Whether prev/next buttons exist.
    pub has_arrows: bool,
    pub container_width: f32,
}

/// Resolved markup for one post.
#[derive(Debug)]
pub struct PostMarkup<M> {
    pub post_id: Option<String>,
    pub slider: Option<SliderMarkup<M>>,
}

/// A mounted post.
#[derive(Debug)]
pub struct Post<M, O> {
    id: String,
    slider: Option<SwipeCarousel<M, O>>,
}

impl<M: MediaElement, O: VisibilityObserver> Post<M, O> {
    /// Mounts a post. A post without an id initializes nothing.
    pub fn mount(
        markup: PostMarkup<M>,
        mode: InputMode,
        observer: O,
        options: CarouselOptions,
    ) -> Option<Self> {
        let Some(id) = markup.post_id.filter(|id| !id.is_empty()) else {
            log::debug!("Post markup has no id, skipping");
            return None;
        };

        let slider = match markup.slider {
            Some(markup) => {
                let carousel = SwipeCarousel::new(
                    markup.slides,
                    mode,
                    markup.container_width,
                    observer,
                    options,
                );
                if markup.has_arrows {
                    carousel
                } else {
                    carousel.map(SwipeCarousel::without_arrows)
                }
            }
            None => {
                log::debug!("Post {id} has no slider element");
                None
            }
        };

        Some(Self { id, slider })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn slider(&self) -> Option<&SwipeCarousel<M, O>> {
        self.slider.as_ref()
    }

    pub fn slider_mut(&mut self) -> Option<&mut SwipeCarousel<M, O>> {
        self.slider.as_mut()
    }

    /// Forwards a message to the post's carousel.
    pub fn handle(&mut self, msg: carousel::Message) -> carousel::Effect {
        match self.slider.as_mut() {
            Some(slider) => slider.handle(msg),
            None => carousel::Effect::None,
        }
    }

    /// Tears down the carousel and drops it.
    pub fn cleanup(&mut self) {
        if let Some(mut slider) = self.slider.take() {
            slider.teardown();
        }
    }
}

/// Preview modal showing at most one post.
#[derive(Debug)]
pub struct PostModal<M, O> {
    current: Option<Post<M, O>>,
}

impl<M, O> Default for PostModal<M, O> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<M: MediaElement, O: VisibilityObserver> PostModal<M, O> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `post`, closing whatever was open.
    pub fn open(&mut self, post: Post<M, O>) {
        self.close();
        log::debug!("Opening post {}", post.id());
        self.current = Some(post);
    }

    /// Pauses and unloads every video, then cleans the post up.
    ///
    /// Returns false if nothing was open.
    pub fn close(&mut self) -> bool {
        let Some(mut post) = self.current.take() else {
            return false;
        };
        if let Some(slider) = post.slider_mut() {
            slider.unload_media();
        }
        post.cleanup();
        true
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    #[must_use]
    pub fn post(&self) -> Option<&Post<M, O>> {
        self.current.as_ref()
    }

    pub fn post_mut(&mut self) -> Option<&mut Post<M, O>> {
        self.current.as_mut()
    }
}
