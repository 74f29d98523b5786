// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request types for the API.

use deck_scene_geometry::Profile;
use serde::Deserialize;

/// Profile selection shared by the scene endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneQuery {
    /// "desktop" (default) or "immersive".
    #[serde(default)]
    pub profile: Option<String>,

    /// Floor height of the immersive session, metres.
    #[serde(default)]
    pub floor_offset: Option<f64>,
}

impl SceneQuery {
    pub fn profile(&self) -> deck_scene_geometry::Result<Profile> {
        let profile: Profile = self.profile.as_deref().unwrap_or("desktop").parse()?;
        Ok(match profile {
            Profile::Immersive { .. } => Profile::immersive_at(self.floor_offset.unwrap_or(0.0)),
            desktop => desktop,
        })
    }
}
