// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for scene document operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or validating a scene document
#[derive(Error, Debug)]
pub enum Error {
    /// The document could not be fetched or read at all
    #[error("Data load failed: {0}")]
    DataLoad(String),

    /// The document is not valid JSON
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A required top-level key is absent
    #[error("Schema violation: missing required key `{0}`")]
    MissingKey(&'static str),

    /// A required list is present but has no entries
    #[error("Schema violation: `{0}` must contain at least one entry")]
    EmptyList(&'static str),

    /// A record below a required key does not have the expected shape
    #[error("Schema violation: invalid entry in `{key}`{}: {message}", .index.map(|i| format!(" at index {}", i)).unwrap_or_default())]
    InvalidRecord {
        key: &'static str,
        index: Option<usize>,
        message: String,
    },
}

impl Error {
    /// Create a data load error
    pub fn data_load(msg: impl Into<String>) -> Self {
        Error::DataLoad(msg.into())
    }

    /// True for errors caused by a document that parsed but has the wrong shape.
    pub fn is_schema_violation(&self) -> bool {
        matches!(
            self,
            Error::MissingKey(_) | Error::EmptyList(_) | Error::InvalidRecord { .. }
        )
    }

    /// True for errors raised before the document could be inspected.
    pub fn is_data_load_failure(&self) -> bool {
        matches!(self, Error::DataLoad(_) | Error::InvalidJson(_))
    }
}
