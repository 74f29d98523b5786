// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Health check endpoint.

use crate::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub service: &'static str,
    /// Whether a scene is being served.
    pub scene_loaded: bool,
    pub generation: u64,
    /// Message of the last failed load, if the latest attempt failed.
    pub last_error: Option<String>,
}

/// API information response.
#[derive(Debug, Serialize)]
pub struct ApiInfoResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub endpoints: Vec<EndpointInfo>,
}

/// Endpoint information.
#[derive(Debug, Serialize)]
pub struct EndpointInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// GET /api/v1/health - Health check endpoint.
pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.store.read().await;
    Json(HealthResponse {
        status: if store.current().is_some() { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        service: "deck-scene-server",
        scene_loaded: store.current().is_some(),
        generation: store.current().map_or(0, |scene| scene.generation),
        last_error: store.last_error().map(str::to_string),
    })
}

/// GET / - API information endpoint.
pub async fn info() -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        service: "deck-scene-server",
        version: env!("CARGO_PKG_VERSION"),
        description: "Deck construction plans as renderer-ready scene descriptors",
        endpoints: vec![
            EndpointInfo {
                method: "GET",
                path: "/api/v1/health",
                description: "Health check endpoint",
            },
            EndpointInfo {
                method: "GET",
                path: "/api/v1/scene",
                description: "Scene descriptor (?profile=desktop|immersive&floor_offset=)",
            },
            EndpointInfo {
                method: "GET",
                path: "/api/v1/scene/meshes",
                description: "Tessellated scene meshes",
            },
            EndpointInfo {
                method: "GET",
                path: "/api/v1/scene/stats",
                description: "Element counts per style category",
            },
            EndpointInfo {
                method: "POST",
                path: "/api/v1/scene/reload",
                description: "Reload the scene document from disk",
            },
            EndpointInfo {
                method: "POST",
                path: "/api/v1/scene/build",
                description: "Build a scene from a posted document without publishing it",
            },
        ],
    })
}
