// SPDX-License-Identifier: MPL-2.0
//! Per-segment progress bars.

use crate::domain::ui::ProgressPercent;

/// One fill value per story segment.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBars(Vec<ProgressPercent>);

impl ProgressBars {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self(vec![ProgressPercent::EMPTY; count])
    }

    /// Makes `index` the current segment: earlier bars fill, the rest empty.
    pub fn focus(&mut self, index: usize) {
        for (i, bar) in self.0.iter_mut().enumerate() {
            *bar = if i < index {
                ProgressPercent::FULL
            } else {
                ProgressPercent::EMPTY
            };
        }
    }

    pub fn set(&mut self, index: usize, value: ProgressPercent) {
        if let Some(bar) = self.0.get_mut(index) {
            *bar = value;
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<ProgressPercent> {
        self.0.get(index).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ProgressPercent] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
