// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

// Error types for document-backed operations
use std::path::PathBuf;

use memfs::EntryKind;

#[derive(Debug, thiserror::Error)]
pub enum DocFSError {
    #[error("{0}")]
    MemFS(#[from] memfs::Error),

    #[error("Unable to access {path}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to parse os info data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Cannot modify root folder")]
    RootImmutable,

    #[error("No such {kind} record: {name}")]
    RecordNotFound { kind: EntryKind, name: String },

    #[error("Malformed document path: {0}")]
    MalformedPath(String),

    #[error("Package {0} is already installed")]
    PackageInstalled(String),
}

pub type Result<T> = std::result::Result<T, DocFSError>;

impl DocFSError {
    pub(crate) fn folder_record(name: impl Into<String>) -> Self {
        DocFSError::RecordNotFound {
            kind: EntryKind::Folder,
            name: name.into(),
        }
    }

    pub(crate) fn file_record(name: impl Into<String>) -> Self {
        DocFSError::RecordNotFound {
            kind: EntryKind::File,
            name: name.into(),
        }
    }

    /// True when the underlying tree operation found a sibling with the same name
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, DocFSError::MemFS(e) if e.is_duplicate())
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            DocFSError::MemFS(e) => e.is_not_found(),
            DocFSError::RecordNotFound { .. } => true,
            _ => false,
        }
    }
}
