// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element count slider
//!
//! Tracks a value in `0..=element_count`. It has no effect on the scene.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementSlider {
    max: usize,
    value: usize,
}

impl ElementSlider {
    /// Slider spanning `0..=count`, positioned at the end
    pub fn new(count: usize) -> Self {
        Self {
            max: count,
            value: count,
        }
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn value(&self) -> usize {
        self.value
    }

    /// Move the slider, clamped to its range
    pub fn set(&mut self, value: usize) -> usize {
        self.value = value.min(self.max);
        self.value
    }

    /// Reset the range after a new document is loaded
    pub fn reset(&mut self, count: usize) {
        *self = Self::new(count);
    }
}
