// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Length units and angle conversion for scene documents
//!
//! All magnitudes in a scene document are millimetres. Renderers either
//! consume them unchanged or as metres (immersive displays expect metres).

use std::fmt;
use std::str::FromStr;

/// Millimetres in one metre
pub const MILLIMETRES_PER_METRE: f64 = 1000.0;

/// Target length unit of scene-space coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthUnit {
    /// Source magnitudes passed through unchanged
    #[default]
    Millimetre,
    /// Source magnitudes divided by 1000
    Metre,
}

impl LengthUnit {
    /// Multiplier that converts millimetres into this unit
    #[inline]
    pub fn multiplier(self) -> f64 {
        match self {
            LengthUnit::Millimetre => 1.0,
            LengthUnit::Metre => 1.0 / MILLIMETRES_PER_METRE,
        }
    }

    /// Convert a millimetre magnitude into this unit
    #[inline]
    pub fn from_millimetres(self, value: f64) -> f64 {
        match self {
            LengthUnit::Millimetre => value,
            // Division keeps decimal millimetre values exact (100mm == 0.1m)
            LengthUnit::Metre => value / MILLIMETRES_PER_METRE,
        }
    }

    /// Short unit symbol
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Millimetre => "mm",
            LengthUnit::Metre => "m",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mm" | "millimetre" | "millimeter" => Ok(LengthUnit::Millimetre),
            "m" | "metre" | "meter" => Ok(LengthUnit::Metre),
            other => Err(format!("unknown length unit `{}`", other)),
        }
    }
}

/// Convert a rotation in degrees into radians, keeping its sign
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}
