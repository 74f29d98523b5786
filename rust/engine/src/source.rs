// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Where scene documents come from

use deck_scene_core::{Error, Result};
use std::path::{Path, PathBuf};

/// A provider of raw scene documents
///
/// Every fetch returns the complete document; the host never patches a
/// scene incrementally.
pub trait DataSource {
    /// Fetch the current document text
    fn fetch(&mut self) -> Result<String>;

    /// Human-readable origin, used in log output
    fn describe(&self) -> String;
}

/// Reads the document from a file on every fetch
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for FileSource {
    fn fetch(&mut self) -> Result<String> {
        std::fs::read_to_string(&self.path)
            .map_err(|e| Error::data_load(format!("{}: {}", self.path.display(), e)))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// An in-memory document, for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    document: String,
}

impl StaticSource {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }

    /// Swap in a new document for the next fetch
    pub fn replace(&mut self, document: impl Into<String>) {
        self.document = document.into();
    }
}

impl DataSource for StaticSource {
    fn fetch(&mut self) -> Result<String> {
        Ok(self.document.clone())
    }

    fn describe(&self) -> String {
        format!("<memory: {} bytes>", self.document.len())
    }
}
