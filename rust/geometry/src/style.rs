// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Display styles per element category

use crate::category::ElementCategory;
use serde::{Deserialize, Serialize};

/// Color, opacity and transparency flag of a material
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleEntry {
    /// 0xRRGGBB
    pub color: u32,
    pub opacity: f64,
    pub transparent: bool,
}

impl StyleEntry {
    pub const fn new(color: u32, opacity: f64, transparent: bool) -> Self {
        Self {
            color,
            opacity,
            transparent,
        }
    }

    /// Same opacity and transparency with a different color
    #[inline]
    pub fn with_color(self, color: u32) -> Self {
        Self { color, ..self }
    }

    /// RGBA in 0-1 range
    pub fn rgba(&self) -> [f32; 4] {
        [
            ((self.color >> 16) & 0xff) as f32 / 255.0,
            ((self.color >> 8) & 0xff) as f32 / 255.0,
            (self.color & 0xff) as f32 / 255.0,
            self.opacity as f32,
        ]
    }
}

/// Style for element names no category rule matches
pub const DEFAULT_ELEMENT_STYLE: StyleEntry = StyleEntry::new(0xffffff, 0.7, true);

/// Style of the building block
pub const BUILDING_STYLE: StyleEntry = StyleEntry::new(0x888888, 0.7, true);

/// Style of the origin marker cube
pub const MARKER_STYLE: StyleEntry = StyleEntry::new(0x000000, 0.7, true);

/// Style of the base surface center sphere
pub const CENTER_MARKER_STYLE: StyleEntry = StyleEntry::new(0xff0000, 0.7, true);

/// Category styles, in classification order
pub const STYLE_TABLE: [(ElementCategory, StyleEntry); 6] = [
    (ElementCategory::VarioFix, StyleEntry::new(0xff0000, 0.7, true)),
    (ElementCategory::Konstruktionsbalken, StyleEntry::new(0x800080, 0.7, true)),
    (ElementCategory::Konstruktionsbaelkchen, StyleEntry::new(0xff1493, 0.7, true)),
    (ElementCategory::Befestigungsschraube, StyleEntry::new(0x000000, 0.8, true)),
    (ElementCategory::Konstruktionsholz, StyleEntry::new(0x00ff00, 0.7, true)),
    (ElementCategory::Barfussdiele, StyleEntry::new(0xffff00, 0.7, true)),
];

/// Style of a category
pub fn lookup(category: ElementCategory) -> StyleEntry {
    match category {
        ElementCategory::VarioFix => STYLE_TABLE[0].1,
        ElementCategory::Konstruktionsbalken => STYLE_TABLE[1].1,
        ElementCategory::Konstruktionsbaelkchen => STYLE_TABLE[2].1,
        ElementCategory::Befestigungsschraube => STYLE_TABLE[3].1,
        ElementCategory::Konstruktionsholz => STYLE_TABLE[4].1,
        ElementCategory::Barfussdiele => STYLE_TABLE[5].1,
    }
}

/// Style by table key (`"VARIO_FIX"`, ...); `None` for unknown keys
pub fn lookup_key(key: &str) -> Option<StyleEntry> {
    key.parse::<ElementCategory>().ok().map(lookup)
}

/// Style for an optional category, falling back to [`DEFAULT_ELEMENT_STYLE`]
#[inline]
pub fn resolve(category: Option<ElementCategory>) -> StyleEntry {
    category.map(lookup).unwrap_or(DEFAULT_ELEMENT_STYLE)
}
