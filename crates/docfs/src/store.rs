// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use diagnostics::log_debug;

use crate::error::{DocFSError, Result};

/// File name used when no store location is configured
pub const DEFAULT_STORE_FILE: &str = "osinfo.json";

/// The single file holding the serialized document
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored text, or `None` when nothing has been written yet
    pub fn read(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(self.failure(source)),
        }
    }

    /// Replaces the whole file
    pub fn write(&self, text: &str) -> Result<()> {
        std::fs::write(&self.path, text).map_err(|source| self.failure(source))?;
        let path = self.path.display().to_string();
        let bytes = text.len();
        log_debug!("Wrote {bytes} bytes to {path}", bytes: bytes, path: path);
        Ok(())
    }

    fn failure(&self, source: std::io::Error) -> DocFSError {
        DocFSError::Persistence {
            path: self.path.clone(),
            source,
        }
    }
}
