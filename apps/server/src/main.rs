// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! deck-scene Server - scene descriptors for deck construction plans.
//!
//! Loads one scene document from disk and serves it as renderer-ready
//! primitive descriptors or tessellated meshes, in millimetres for desktop
//! viewers or metres for immersive sessions.
//!
//! # Endpoints
//!
//! - `GET /api/v1/health` - Health check
//! - `GET /api/v1/scene` - Scene descriptor (`?profile=desktop|immersive&floor_offset=`)
//! - `GET /api/v1/scene/meshes` - Tessellated meshes
//! - `GET /api/v1/scene/stats` - Element counts per style category
//! - `POST /api/v1/scene/reload` - Reload the document from `DATA_PATH`
//! - `POST /api/v1/scene/build` - Build a posted document without publishing it

use anyhow::Context;
use axum::extract::DefaultBodyLimit;
use deck_scene_engine::FileSource;
use deck_scene_geometry::SceneConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod routes;
mod services;
mod types;

use config::Config;
use services::SceneStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<SceneStore>>,
    pub config: Arc<Config>,
    pub scene_config: SceneConfig,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            store: Arc::new(RwLock::new(SceneStore::default())),
            scene_config: config.scene_config(),
            config: Arc::new(config),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; LOG_FORMAT=json for log collectors
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug,deck_scene_server=debug"));
    if std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).pretty().init();
    }

    let config = Config::from_env();

    tracing::info!(
        port = config.port,
        data_path = %config.data_path,
        max_body_mb = config.max_body_mb,
        desktop_bias = %config.desktop_vertical_bias,
        immersive_bias = %config.immersive_vertical_bias,
        "Starting deck-scene Server"
    );

    let state = AppState::new(config.clone());

    // Initial load; the server starts without a scene if it fails
    let scene_config = state.scene_config;
    let path = config.data_path.clone();
    match tokio::task::spawn_blocking(move || services::load_scene(&mut FileSource::new(path), &scene_config))
        .await
        .context("initial scene load panicked")?
    {
        Ok(scene) => {
            state.store.write().await.publish(scene);
        }
        Err(e) => state.store.write().await.record_failure(&e),
    }

    let app = routes::router(state)
        // Middleware
        .layer(DefaultBodyLimit::max(config.max_body_mb * 1024 * 1024))
        .layer(CompressionLayer::new()) // Meshes compress well
        .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
