// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene build configuration
//!
//! Defaults reproduce the planning viewer: desktop boxes rest on half their
//! height, immersive boxes are lifted by their full height.
//!
//! NOTE: the two profiles disagree on the vertical bias. Both values are
//! kept configurable so a deployment can align them without a code change.

use crate::error::{Error, Result};
use crate::transform::Profile;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How much of a shape's height is added to its elevation to find its center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalBias {
    /// Center sits on the elevation
    None,
    /// Bottom face sits on the elevation
    HalfHeight,
    /// Center is lifted by the full height
    FullHeight,
}

impl VerticalBias {
    #[inline]
    pub fn factor(self) -> f64 {
        match self {
            VerticalBias::None => 0.0,
            VerticalBias::HalfHeight => 0.5,
            VerticalBias::FullHeight => 1.0,
        }
    }
}

impl fmt::Display for VerticalBias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VerticalBias::None => "none",
            VerticalBias::HalfHeight => "half",
            VerticalBias::FullHeight => "full",
        })
    }
}

impl FromStr for VerticalBias {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "0" => Ok(VerticalBias::None),
            "half" | "half_height" | "0.5" => Ok(VerticalBias::HalfHeight),
            "full" | "full_height" | "1" => Ok(VerticalBias::FullHeight),
            other => Err(Error::InvalidPolicy(format!("unknown vertical bias `{}`", other))),
        }
    }
}

/// Vertical bias per profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementPolicy {
    pub desktop: VerticalBias,
    pub immersive: VerticalBias,
}

impl PlacementPolicy {
    #[inline]
    pub fn bias_for(&self, profile: Profile) -> VerticalBias {
        match profile {
            Profile::Desktop => self.desktop,
            Profile::Immersive { .. } => self.immersive,
        }
    }
}

impl Default for PlacementPolicy {
    fn default() -> Self {
        Self {
            desktop: VerticalBias::HalfHeight,
            immersive: VerticalBias::FullHeight,
        }
    }
}

/// Dimensions used when an element leaves one out, millimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallbackDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for FallbackDimensions {
    fn default() -> Self {
        Self {
            length: 30.0,
            width: 30.0,
            height: 50.0,
        }
    }
}

/// Everything a scene build can be tuned with
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneConfig {
    pub placement: PlacementPolicy,
    pub fallback: FallbackDimensions,
}

impl SceneConfig {
    /// Override the vertical bias of one profile
    pub fn with_bias(mut self, profile: Profile, bias: VerticalBias) -> Self {
        match profile {
            Profile::Desktop => self.placement.desktop = bias,
            Profile::Immersive { .. } => self.placement.immersive = bias,
        }
        self
    }
}
