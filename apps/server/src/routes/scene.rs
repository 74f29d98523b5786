// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene endpoints.

use crate::error::ApiError;
use crate::services::{build_document, load_scene};
use crate::types::{MeshResponse, ReloadResponse, SceneQuery, StatsResponse};
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use deck_scene_engine::FileSource;
use deck_scene_geometry::SceneDescriptor;
use std::time::Instant;

/// GET /api/v1/scene - Scene descriptor for the requested profile.
pub async fn get_scene(
    State(state): State<AppState>,
    Query(query): Query<SceneQuery>,
) -> Result<Json<SceneDescriptor>, ApiError> {
    let profile = query.profile()?;
    let scene = state.store.read().await.scene_for(profile, &state.scene_config)?;
    Ok(Json(SceneDescriptor::clone(&scene)))
}

/// GET /api/v1/scene/meshes - Tessellated meshes for the requested profile.
pub async fn get_meshes(
    State(state): State<AppState>,
    Query(query): Query<SceneQuery>,
) -> Result<Json<MeshResponse>, ApiError> {
    let profile = query.profile()?;
    let scene = state.store.read().await.scene_for(profile, &state.scene_config)?;

    // Tessellation is CPU work; keep it off the async workers
    let response = tokio::task::spawn_blocking(move || MeshResponse::from_scene(&scene)).await?;
    Ok(Json(response))
}

/// GET /api/v1/scene/stats - Statistics of the published desktop scene.
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let store = state.store.read().await;
    let current = store.current().ok_or(ApiError::NoScene)?;
    Ok(Json(StatsResponse {
        generation: current.generation,
        stats: current.desktop.stats(),
    }))
}

/// POST /api/v1/scene/reload - Re-read the scene document and publish it.
pub async fn reload(State(state): State<AppState>) -> Result<Json<ReloadResponse>, ApiError> {
    let start = Instant::now();
    let path = state.config.data_path.clone();
    let scene_config = state.scene_config;

    let result = tokio::task::spawn_blocking(move || load_scene(&mut FileSource::new(path), &scene_config)).await?;

    let mut store = state.store.write().await;
    match result {
        Ok(loaded) => {
            let published = store.publish(loaded);
            Ok(Json(ReloadResponse::new(published, start.elapsed().as_millis() as u64)))
        }
        Err(e) => {
            store.record_failure(&e);
            Err(e)
        }
    }
}

/// POST /api/v1/scene/build - Build a posted document without publishing it.
pub async fn build(
    State(state): State<AppState>,
    Query(query): Query<SceneQuery>,
    body: String,
) -> Result<Json<SceneDescriptor>, ApiError> {
    let profile = query.profile()?;
    let scene_config = state.scene_config;
    let scene = tokio::task::spawn_blocking(move || build_document(&body, profile, &scene_config)).await??;
    Ok(Json(scene))
}
