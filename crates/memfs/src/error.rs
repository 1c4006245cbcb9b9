// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

pub type Result<T> = std::result::Result<T, Error>;

/// Which collection of a folder an entry lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    File,
}

/// Represents errors that can occur in tree operations
#[derive(Debug, PartialEq)]
pub enum Error {
    NotFound { kind: EntryKind, name: String },
    DuplicateName { kind: EntryKind, name: String },
    MalformedPath(String),
    EmptyPath,
}

impl Error {
    pub fn folder_not_found<S: AsRef<str>>(name: S) -> Self {
        Error::NotFound {
            kind: EntryKind::Folder,
            name: name.as_ref().to_string(),
        }
    }

    pub fn file_not_found<S: AsRef<str>>(name: S) -> Self {
        Error::NotFound {
            kind: EntryKind::File,
            name: name.as_ref().to_string(),
        }
    }

    pub fn duplicate_folder<S: AsRef<str>>(name: S) -> Self {
        Error::DuplicateName {
            kind: EntryKind::Folder,
            name: name.as_ref().to_string(),
        }
    }

    pub fn duplicate_file<S: AsRef<str>>(name: S) -> Self {
        Error::DuplicateName {
            kind: EntryKind::File,
            name: name.as_ref().to_string(),
        }
    }

    pub fn malformed_path<S: AsRef<str>>(path: S) -> Self {
        Error::MalformedPath(path.as_ref().to_string())
    }

    pub fn empty_path() -> Self {
        Error::EmptyPath
    }

    /// True for both kinds of missing entry
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Error::DuplicateName { .. })
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Folder => write!(f, "folder"),
            EntryKind::File => write!(f, "file"),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NotFound { kind, name } => write!(f, "No such {}: {}", kind, name),
            Error::DuplicateName {
                kind: EntryKind::Folder,
                name,
            } => write!(f, "Folder {} already exists", name),
            Error::DuplicateName {
                kind: EntryKind::File,
                name,
            } => write!(f, "File {} already exists", name),
            Error::MalformedPath(path) => write!(f, "Malformed path: {}", path),
            Error::EmptyPath => write!(f, "No folder name provided"),
        }
    }
}

impl std::error::Error for Error {}
