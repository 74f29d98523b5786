// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Server configuration loaded from environment variables.

use deck_scene_geometry::{Profile, SceneConfig, VerticalBias};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on.
    pub port: u16,
    /// Scene document served by the API.
    pub data_path: String,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Maximum request body size in MB.
    pub max_body_mb: usize,
    /// Vertical anchoring of element boxes in desktop scenes.
    pub desktop_vertical_bias: VerticalBias,
    /// Vertical anchoring of element boxes in immersive scenes.
    pub immersive_vertical_bias: VerticalBias,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let policy = SceneConfig::default().placement;
        Self {
            port: parse_or(&lookup, "PORT", 8080),
            data_path: lookup("DATA_PATH").unwrap_or_else(|| "api.json".into()),
            request_timeout_secs: parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30),
            max_body_mb: parse_or(&lookup, "MAX_BODY_MB", 16),
            desktop_vertical_bias: parse_or(&lookup, "DESKTOP_VERTICAL_BIAS", policy.desktop),
            immersive_vertical_bias: parse_or(&lookup, "IMMERSIVE_VERTICAL_BIAS", policy.immersive),
        }
    }

    /// Scene build settings derived from this configuration.
    pub fn scene_config(&self) -> SceneConfig {
        SceneConfig::default()
            .with_bias(Profile::Desktop, self.desktop_vertical_bias)
            .with_bias(Profile::immersive(), self.immersive_vertical_bias)
    }
}

fn parse_or<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Ignoring unparsable setting, using default");
            default
        }),
        None => default,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
