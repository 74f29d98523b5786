// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a scene
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown profile: {0}")]
    InvalidProfile(String),

    #[error("Invalid placement policy: {0}")]
    InvalidPolicy(String),

    #[error("Unknown element category: {0}")]
    UnknownCategory(String),

    #[error("Scene document error: {0}")]
    CoreError(#[from] deck_scene_core::Error),
}

impl Error {
    /// True when the underlying document has the wrong shape
    pub fn is_schema_violation(&self) -> bool {
        matches!(self, Error::CoreError(e) if e.is_schema_violation())
    }

    /// True when the document could not be read or decoded
    pub fn is_data_load_failure(&self) -> bool {
        matches!(self, Error::CoreError(e) if e.is_data_load_failure())
    }
}
