// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Desktop-only viewport helpers: background, ground grid and axes

use serde::{Deserialize, Serialize};

pub const BACKGROUND_COLOR: u32 = 0xf0f0f0;

/// Ground grid centered on the origin, millimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridHelper {
    pub size: f64,
    pub divisions: u32,
}

impl GridHelper {
    /// Spacing between grid lines
    pub fn cell_size(&self) -> f64 {
        self.size / self.divisions.max(1) as f64
    }
}

/// Red/green/blue axis lines from the origin, millimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxesHelper {
    pub size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneDecorations {
    pub background: u32,
    pub grid: GridHelper,
    pub axes: AxesHelper,
}

impl Default for SceneDecorations {
    fn default() -> Self {
        Self {
            background: BACKGROUND_COLOR,
            grid: GridHelper {
                size: 2000.0,
                divisions: 20,
            },
            axes: AxesHelper { size: 500.0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let deco = SceneDecorations::default();
        assert_eq!(deco.background, 0xf0f0f0);
        assert_eq!(deco.grid.cell_size(), 100.0);
        assert_eq!(deco.axes.size, 500.0);
    }
}
