// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element categories and name-based classification
//!
//! Element names in the planning export are free text ("VARIO FIX I
//! (komplett)", "Barfußdiele 21x145"), so the category is recovered by
//! matching known product names. A name can satisfy more than one rule;
//! rules are tried in [`ElementCategory::PRECEDENCE`] order and the first
//! match wins.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recognized element categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementCategory {
    /// Substructure plate
    VarioFix,
    /// Regular construction beam
    Konstruktionsbalken,
    /// Short beam piece
    Konstruktionsbaelkchen,
    /// Fixing screw
    Befestigungsschraube,
    /// Construction timber
    Konstruktionsholz,
    /// Deck board
    Barfussdiele,
}

/// How a rule tests an element name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    /// The name contains the pattern
    Contains(&'static str),
    /// The name equals the pattern
    Exact(&'static str),
}

impl NameMatch {
    #[inline]
    pub fn matches(self, name: &str) -> bool {
        match self {
            NameMatch::Contains(pattern) => name.contains(pattern),
            NameMatch::Exact(pattern) => name == pattern,
        }
    }
}

impl ElementCategory {
    /// Classification order; the first matching rule decides.
    pub const PRECEDENCE: [ElementCategory; 6] = [
        ElementCategory::VarioFix,
        ElementCategory::Konstruktionsbalken,
        ElementCategory::Konstruktionsbaelkchen,
        ElementCategory::Befestigungsschraube,
        ElementCategory::Konstruktionsholz,
        ElementCategory::Barfussdiele,
    ];

    /// Name rule for this category (case-sensitive)
    pub fn name_rule(self) -> NameMatch {
        match self {
            ElementCategory::VarioFix => NameMatch::Contains("VARIO FIX"),
            // Only the plain beam; variants such as "Konstruktionsbalken-Stück" stay unclassified
            ElementCategory::Konstruktionsbalken => NameMatch::Exact("Konstruktionsbalken"),
            ElementCategory::Konstruktionsbaelkchen => NameMatch::Contains("Konstruktionsbälkchen"),
            ElementCategory::Befestigungsschraube => NameMatch::Contains("Befestigungsschraube"),
            ElementCategory::Konstruktionsholz => NameMatch::Contains("Konstruktionsholz"),
            ElementCategory::Barfussdiele => NameMatch::Contains("Barfußdiele"),
        }
    }

    /// Style table key
    pub fn key(self) -> &'static str {
        match self {
            ElementCategory::VarioFix => "VARIO_FIX",
            ElementCategory::Konstruktionsbalken => "KONSTRUKTIONSBALKEN",
            ElementCategory::Konstruktionsbaelkchen => "KONSTRUKTIONSBAELKCHEN",
            ElementCategory::Befestigungsschraube => "BEFESTIGUNGSSCHRAUBE",
            ElementCategory::Konstruktionsholz => "KONSTRUKTIONSHOLZ",
            ElementCategory::Barfussdiele => "BARFUSSDIELE",
        }
    }
}

/// Classify an element name, or `None` when no rule matches
pub fn classify(name: &str) -> Option<ElementCategory> {
    ElementCategory::PRECEDENCE
        .into_iter()
        .find(|category| category.name_rule().matches(name))
}

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ElementCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // Spelled-out umlaut keys from older exports are accepted too
        let key = s.trim().to_uppercase().replace('Ä', "AE").replace('ß', "SS");
        ElementCategory::PRECEDENCE
            .into_iter()
            .find(|category| category.key() == key)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_names() {
        assert_eq!(classify("VARIO FIX I (komplett)"), Some(ElementCategory::VarioFix));
        assert_eq!(classify("Konstruktionsbalken"), Some(ElementCategory::Konstruktionsbalken));
        assert_eq!(
            classify("Konstruktionsbälkchen 40x60"),
            Some(ElementCategory::Konstruktionsbaelkchen)
        );
        assert_eq!(
            classify("Befestigungsschraube 5x60"),
            Some(ElementCategory::Befestigungsschraube)
        );
        assert_eq!(classify("Konstruktionsholz KVH"), Some(ElementCategory::Konstruktionsholz));
        assert_eq!(classify("Barfußdiele Bangkirai"), Some(ElementCategory::Barfussdiele));
    }

    #[test]
    fn test_beam_requires_exact_name() {
        assert_eq!(classify("Konstruktionsbalken 2m"), None);
        assert_eq!(classify("konstruktionsbalken"), None);
    }

    #[test]
    fn test_unmatched_names() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("Randabschluss"), None);
        assert_eq!(classify("vario fix"), None);
    }

    #[test]
    fn test_overlapping_names_use_precedence() {
        // Matches both VARIO FIX and Befestigungsschraube
        assert_eq!(
            classify("Befestigungsschraube für VARIO FIX"),
            Some(ElementCategory::VarioFix)
        );
        // Matches Konstruktionsholz and Barfußdiele
        assert_eq!(
            classify("Barfußdiele auf Konstruktionsholz"),
            Some(ElementCategory::Konstruktionsholz)
        );
    }

    #[test]
    fn test_key_round_trip() {
        for category in ElementCategory::PRECEDENCE {
            assert_eq!(category.key().parse::<ElementCategory>().unwrap(), category);
        }
        assert_eq!(
            "Konstruktionsbälkchen".parse::<ElementCategory>().unwrap(),
            ElementCategory::Konstruktionsbaelkchen
        );
        assert_eq!("barfußdiele".parse::<ElementCategory>().unwrap(), ElementCategory::Barfussdiele);
        assert!("GELÄNDER".parse::<ElementCategory>().is_err());
    }

    #[test]
    fn test_serde_uses_table_keys() {
        let json = serde_json::to_string(&ElementCategory::Konstruktionsbaelkchen).unwrap();
        assert_eq!(json, "\"KONSTRUKTIONSBAELKCHEN\"");
    }
}
