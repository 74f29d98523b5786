// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Unit and coordinate transform from plan space into scene space
//!
//! Plan coordinates are millimetres on a ground plane (`x`, `y`) plus an
//! elevation. Scene space is Y-up: plan `x` stays X, plan `y` becomes the
//! depth axis Z, and elevation becomes Y.
//!
//! Two profiles exist:
//!
//! - **Desktop**: magnitudes stay in millimetres.
//! - **Immersive**: magnitudes are metres and the vertical axis is shifted
//!   by the session's floor offset (already in metres).

use crate::config::{PlacementPolicy, VerticalBias};
use crate::error::{Error, Result};
use crate::primitive::Vec3;
use deck_scene_core::{degrees_to_radians, LengthUnit};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Active coordinate convention
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Profile {
    /// Millimetres, resting on the scene's ground plane
    #[default]
    Desktop,
    /// Metres, relative to the immersive session's floor
    Immersive {
        /// Height of the floor in the session's reference space, metres
        floor_offset: f64,
    },
}

impl Profile {
    /// Immersive profile with the floor at the reference origin
    pub const fn immersive() -> Self {
        Profile::Immersive { floor_offset: 0.0 }
    }

    /// Immersive profile with a floor offset supplied by the session
    pub const fn immersive_at(floor_offset: f64) -> Self {
        Profile::Immersive { floor_offset }
    }

    /// Target length unit
    #[inline]
    pub fn unit(self) -> LengthUnit {
        match self {
            Profile::Desktop => LengthUnit::Millimetre,
            Profile::Immersive { .. } => LengthUnit::Metre,
        }
    }

    /// Vertical shift added after unit conversion
    #[inline]
    pub fn floor_offset(self) -> f64 {
        match self {
            Profile::Desktop => 0.0,
            Profile::Immersive { floor_offset } => floor_offset,
        }
    }

    #[inline]
    pub fn is_immersive(self) -> bool {
        matches!(self, Profile::Immersive { .. })
    }

    pub fn name(self) -> &'static str {
        match self {
            Profile::Desktop => "desktop",
            Profile::Immersive { .. } => "immersive",
        }
    }

    /// Convert a plan length (mm) into this profile's unit
    #[inline]
    pub fn scale_length(self, millimetres: f64) -> f64 {
        self.unit().from_millimetres(millimetres)
    }

    /// Convert a plan vector (mm) into this profile's unit, without floor offset
    #[inline]
    pub fn scale_vec(self, millimetres: Vec3) -> Vec3 {
        millimetres.map(|v| self.scale_length(v))
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Desktop => f.write_str("desktop"),
            Profile::Immersive { floor_offset } => write!(f, "immersive(floor={})", floor_offset),
        }
    }
}

impl FromStr for Profile {
    type Err = Error;

    /// Parses `desktop` or `immersive`; the floor offset starts at 0.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Profile::Desktop),
            "immersive" | "xr" => Ok(Profile::immersive()),
            other => Err(Error::InvalidProfile(other.to_string())),
        }
    }
}

/// Raw plan placement of a shape, all magnitudes in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawPlacement {
    /// Ground-plane x
    pub x: f64,
    /// Ground-plane y (becomes scene depth)
    pub y: f64,
    /// Elevation of the shape's bottom face
    pub elevation: f64,
    /// Height the vertical bias is taken from
    pub height: f64,
    /// Rotation about the vertical axis, degrees
    pub rotation_deg: f64,
}

/// Placement in scene space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScenePlacement {
    pub position: Vec3,
    /// Radians
    pub rotation_y: f64,
}

/// Transform a plan placement into scene space
///
/// The vertical coordinate is `elevation + bias * height`, converted into
/// the profile's unit, plus the profile's floor offset.
pub fn to_scene_space(raw: &RawPlacement, profile: Profile, policy: &PlacementPolicy) -> ScenePlacement {
    let bias = policy.bias_for(profile);
    let vertical = raw.elevation + raw.height * bias.factor();

    ScenePlacement {
        position: Vec3::new(
            profile.scale_length(raw.x),
            profile.scale_length(vertical) + profile.floor_offset(),
            profile.scale_length(raw.y),
        ),
        rotation_y: degrees_to_radians(raw.rotation_deg),
    }
}

/// Transform a plan placement with no vertical bias (the shape is centered on its elevation)
pub fn to_scene_space_centered(raw: &RawPlacement, profile: Profile) -> ScenePlacement {
    let policy = PlacementPolicy {
        desktop: VerticalBias::None,
        immersive: VerticalBias::None,
    };
    to_scene_space(raw, profile, &policy)
}
