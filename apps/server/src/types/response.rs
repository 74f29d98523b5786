// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response types for the API.

use crate::services::LoadedScene;
use deck_scene_geometry::SceneStats;
use serde::Serialize;

/// Result of reloading the scene document.
#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub generation: u64,
    pub origin: String,
    pub elements: usize,
    pub primitives: usize,
    pub duration_ms: u64,
}

impl ReloadResponse {
    pub fn new(scene: &LoadedScene, duration_ms: u64) -> Self {
        Self {
            generation: scene.generation,
            origin: scene.origin.clone(),
            elements: scene.data.element_count(),
            primitives: scene.desktop.primitive_count(),
            duration_ms,
        }
    }
}

/// Statistics of the published scene.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub generation: u64,
    #[serde(flatten)]
    pub stats: SceneStats,
}
