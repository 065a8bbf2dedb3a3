// SPDX-License-Identifier: MPL-2.0
//! Scoped listener handles.
//!
//! A host that binds an event listener on behalf of a component wraps the
//! matching unbind call in a [`Subscription`]. The component keeps the handle
//! and releases it on teardown. Release runs the unbind at most once, whether
//! it is triggered explicitly or by drop.

use std::fmt;

/// One bound listener.
pub struct Subscription {
    label: &'static str,
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wraps an unbind callback.
    pub fn new(label: &'static str, release: impl FnOnce() + 'static) -> Self {
        Self {
            label,
            release: Some(Box::new(release)),
        }
    }

    /// A handle with nothing to release.
    #[must_use]
    pub fn noop(label: &'static str) -> Self {
        Self {
            label,
            release: None,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns true until the handle has been released.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Runs the unbind callback. Returns false if it had already run.
    pub fn release(&mut self) -> bool {
        match self.release.take() {
            Some(release) => {
                release();
                true
            }
            None => false,
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("label", &self.label)
            .field("active", &self.is_active())
            .finish()
    }
}
