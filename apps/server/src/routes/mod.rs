// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP route handlers.

pub mod health;
pub mod scene;

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// API routes without middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Root endpoint - API information
        .route("/", get(health::info))
        // Health check
        .route("/api/v1/health", get(health::check))
        // Scene endpoints
        .route("/api/v1/scene", get(scene::get_scene))
        .route("/api/v1/scene/meshes", get(scene::get_meshes))
        .route("/api/v1/scene/stats", get(scene::get_stats))
        .route("/api/v1/scene/reload", post(scene::reload))
        .route("/api/v1/scene/build", post(scene::build))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::path::PathBuf;
    use tower::ServiceExt;

    const DOC: &str = r#"{
        "elemente": [
            { "name": "Konstruktionsbalken", "laenge": 100, "breite": 40, "hoehe": null,
              "mittelpunkt": { "x": 10, "y": 20, "z": 5 }, "drehung": 90 },
            { "name": "VARIO FIX I (komplett)", "laenge": 148, "breite": 295,
              "mittelpunkt": { "x": 74, "y": 188, "z": 0 } }
        ],
        "gebaeude": [{ "laenge": 8000, "breite": 6000, "mittelpunkt": { "x": 1500, "y": -3000 } }],
        "marker": { "x": 0, "y": 0, "z": 0 },
        "basisflaechemittelpunkt": { "x": 1500, "y": 650 }
    }"#;

    fn state_for(data_path: &str) -> AppState {
        let config = Config {
            data_path: data_path.to_string(),
            ..Config::default()
        };
        AppState::new(config)
    }

    fn temp_document(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("deck-scene-{}-{}.json", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    async fn call(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_empty_server_reports_no_scene() {
        let app = router(state_for("/nonexistent/deck-scene/api.json"));

        let (status, body) = call(&app, "GET", "/api/v1/health", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["scene_loaded"], false);

        let (status, body) = call(&app, "GET", "/api/v1/scene", "").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["code"], "NO_SCENE");

        let (status, body) = call(&app, "POST", "/api/v1/scene/reload", "").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["code"], "DATA_LOAD_FAILED");

        let (_, body) = call(&app, "GET", "/api/v1/health", "").await;
        assert!(body["last_error"].as_str().unwrap().contains("api.json"));
    }

    #[tokio::test]
    async fn test_reload_then_serve_both_profiles() {
        let path = temp_document("routes-reload", DOC);
        let app = router(state_for(path.to_str().unwrap()));

        let (status, body) = call(&app, "POST", "/api/v1/scene/reload", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["generation"], 1);
        assert_eq!(body["elements"], 2);

        let (status, body) = call(&app, "GET", "/api/v1/scene", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"]["mode"], "desktop");
        assert_eq!(body["primitives"][0]["position"]["y"], 30.0);
        assert_eq!(body["markers"].as_array().unwrap().len(), 2);

        let (status, body) = call(&app, "GET", "/api/v1/scene?profile=immersive&floor_offset=1", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"]["floor_offset"], 1.0);
        assert_eq!(body["markers"].as_array().unwrap().len(), 1);

        let (_, body) = call(&app, "GET", "/api/v1/scene/stats", "").await;
        assert_eq!(body["elements"], 2);
        assert_eq!(body["by_category"]["VARIO_FIX"], 1);

        let (_, body) = call(&app, "GET", "/api/v1/scene/meshes", "").await;
        assert_eq!(body["meshes"].as_array().unwrap().len(), 5);

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_serving() {
        let path = temp_document("routes-failed", DOC);
        let app = router(state_for(path.to_str().unwrap()));
        call(&app, "POST", "/api/v1/scene/reload", "").await;

        std::fs::write(&path, r#"{ "elemente": [], "marker": {}, "basisflaechemittelpunkt": {} }"#).unwrap();
        let (status, body) = call(&app, "POST", "/api/v1/scene/reload", "").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "SCHEMA_VIOLATION");

        let (status, body) = call(&app, "GET", "/api/v1/scene", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["primitives"].as_array().unwrap().len(), 2);

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_stateless_build() {
        let app = router(state_for("/nonexistent/deck-scene/api.json"));

        let (status, body) = call(&app, "POST", "/api/v1/scene/build?profile=xr", DOC).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"]["mode"], "immersive");

        let (status, body) = call(&app, "POST", "/api/v1/scene/build", "{ nope").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_JSON");

        let (status, body) = call(&app, "POST", "/api/v1/scene/build?profile=cave", DOC).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_PROFILE");

        // The stateless build does not publish anything
        let (status, _) = call(&app, "GET", "/api/v1/scene", "").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
