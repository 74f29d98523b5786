// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for scene host operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the scene host
#[derive(Error, Debug)]
pub enum Error {
    /// Loading, validating or building the scene failed
    #[error(transparent)]
    Scene(#[from] deck_scene_geometry::Error),

    /// An immersive session was requested but the session is not active
    #[error("Immersive session is not active")]
    SessionInactive,

    /// The viewport has a zero or non-finite aspect ratio
    #[error("Invalid viewport {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },
}

impl From<deck_scene_core::Error> for Error {
    fn from(e: deck_scene_core::Error) -> Self {
        Error::Scene(e.into())
    }
}

impl Error {
    pub fn is_schema_violation(&self) -> bool {
        matches!(self, Error::Scene(e) if e.is_schema_violation())
    }

    pub fn is_data_load_failure(&self) -> bool {
        matches!(self, Error::Scene(e) if e.is_data_load_failure())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_keep_their_class() {
        let err = Error::from(deck_scene_core::Error::MissingKey("gebaeude"));
        assert!(err.is_schema_violation());
        assert!(!err.is_data_load_failure());

        let err = Error::from(deck_scene_core::Error::data_load("connection refused"));
        assert!(err.is_data_load_failure());
        assert!(err.to_string().contains("connection refused"));
    }
}
