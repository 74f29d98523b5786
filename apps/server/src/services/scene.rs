// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene loading and the published scene store.
//!
//! Documents are fetched, validated and built off the request path; the
//! finished scene replaces the previous one in a single write. A failed load
//! leaves the published scene untouched.

use crate::error::ApiError;
use deck_scene_core::{parse_scene_data, SceneData};
use deck_scene_engine::DataSource;
use deck_scene_geometry::{build_scene_with, Profile, SceneConfig, SceneDescriptor};
use std::sync::Arc;

/// A validated document together with its desktop scene.
#[derive(Debug, Clone)]
pub struct LoadedScene {
    pub data: Arc<SceneData>,
    pub desktop: Arc<SceneDescriptor>,
    /// Where the document came from.
    pub origin: String,
    /// Publish counter, assigned by the store.
    pub generation: u64,
}

/// Fetch, validate and build a document. Runs on a blocking thread.
pub fn load_scene<S: DataSource + ?Sized>(source: &mut S, config: &SceneConfig) -> Result<LoadedScene, ApiError> {
    let origin = source.describe();
    let text = source.fetch()?;
    let data = parse_scene_data(&text)?;
    let desktop = build_scene_with(&data, Profile::Desktop, config)?;

    tracing::debug!(
        origin = %origin,
        elements = data.element_count(),
        primitives = desktop.primitive_count(),
        "Scene document loaded"
    );

    Ok(LoadedScene {
        data: Arc::new(data),
        desktop: Arc::new(desktop),
        origin,
        generation: 0,
    })
}

/// Build a scene from a posted document without publishing it.
pub fn build_document(json: &str, profile: Profile, config: &SceneConfig) -> Result<SceneDescriptor, ApiError> {
    let data = parse_scene_data(json)?;
    Ok(build_scene_with(&data, profile, config)?)
}

/// The scene currently served.
#[derive(Debug, Default)]
pub struct SceneStore {
    current: Option<LoadedScene>,
    last_error: Option<String>,
    generation: u64,
}

impl SceneStore {
    pub fn current(&self) -> Option<&LoadedScene> {
        self.current.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replace the served scene.
    pub fn publish(&mut self, mut scene: LoadedScene) -> &LoadedScene {
        self.generation += 1;
        scene.generation = self.generation;
        self.last_error = None;

        tracing::info!(
            generation = scene.generation,
            origin = %scene.origin,
            primitives = scene.desktop.primitive_count(),
            "Scene published"
        );
        self.current.insert(scene)
    }

    /// Remember a failed load; the served scene stays as it is.
    pub fn record_failure(&mut self, err: &ApiError) {
        tracing::warn!(error = %err, "Scene load failed, keeping previous scene");
        self.last_error = Some(err.to_string());
    }

    /// Scene for `profile`: the published desktop scene, or a fresh build of
    /// the published document.
    pub fn scene_for(&self, profile: Profile, config: &SceneConfig) -> Result<Arc<SceneDescriptor>, ApiError> {
        let current = self.current.as_ref().ok_or(ApiError::NoScene)?;
        match profile {
            Profile::Desktop => Ok(Arc::clone(&current.desktop)),
            Profile::Immersive { .. } => Ok(Arc::new(build_scene_with(&current.data, profile, config)?)),
        }
    }
}
