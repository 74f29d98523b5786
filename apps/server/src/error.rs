// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types and handling for the server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No scene loaded")]
    NoScene,

    #[error(transparent)]
    Scene(#[from] deck_scene_geometry::Error),

    #[error("Join error")]
    Join(#[from] tokio::task::JoinError),
}

impl ApiError {
    /// HTTP status and machine-readable code.
    pub fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NoScene => (StatusCode::SERVICE_UNAVAILABLE, "NO_SCENE"),
            ApiError::Scene(e) => classify_scene(e),
            ApiError::Join(_) => (StatusCode::INTERNAL_SERVER_ERROR, "TASK_ERROR"),
        }
    }
}

fn classify_scene(err: &deck_scene_geometry::Error) -> (StatusCode, &'static str) {
    use deck_scene_core::Error as DocError;
    use deck_scene_geometry::Error as SceneError;

    match err {
        SceneError::InvalidProfile(_) => (StatusCode::BAD_REQUEST, "INVALID_PROFILE"),
        SceneError::CoreError(DocError::InvalidJson(_)) => (StatusCode::BAD_REQUEST, "INVALID_JSON"),
        SceneError::CoreError(DocError::DataLoad(_)) => (StatusCode::SERVICE_UNAVAILABLE, "DATA_LOAD_FAILED"),
        e if e.is_schema_violation() => (StatusCode::UNPROCESSABLE_ENTITY, "SCHEMA_VIOLATION"),
        _ => (StatusCode::BAD_REQUEST, "SCENE_ERROR"),
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.classify();

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<deck_scene_core::Error> for ApiError {
    fn from(err: deck_scene_core::Error) -> Self {
        ApiError::Scene(err.into())
    }
}
