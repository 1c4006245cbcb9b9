// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Serde records for the persisted document.
//!
//! The document nests folder records the same way the live tree nests
//! folders. The synthetic root has no record of its own: `Document::root`
//! holds its direct children.

use memfs::{dir, file, name, FS, HOME_FOLDER};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::packages::PACKAGES_FOLDER;

/// The folder created inside `Home` by a fresh installation
pub const DESKTOP_FOLDER: &str = "Desktop";

/// A file as stored: base name, extension and full content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub extension: String,
    pub contents: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderRecord {
    pub name: String,
    pub folders: Vec<FolderRecord>,
    pub files: Vec<FileRecord>,
}

/// The whole persisted state, one JSON object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(alias = "isInstalled")]
    pub installed: bool,
    pub root: Vec<FolderRecord>,
    pub username: String,
}

impl FileRecord {
    pub fn new(base: impl Into<String>, extension: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: base.into(),
            extension: extension.into(),
            contents: contents.into(),
        }
    }

    #[must_use]
    pub fn from_file(file: &file::Handle) -> Self {
        Self::new(file.base_name(), file.extension(), file.content())
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        name::encode(&self.name, &self.extension)
    }
}

impl FolderRecord {
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            folders: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Snapshot of a live folder and everything below it
    #[must_use]
    pub fn from_folder(folder: &dir::Handle) -> Self {
        Self {
            name: folder.name(),
            folders: folder.folders().iter().map(Self::from_folder).collect(),
            files: folder.files().iter().map(FileRecord::from_file).collect(),
        }
    }

    #[must_use]
    pub fn folder(&self, name: &str) -> Option<&FolderRecord> {
        self.folders.iter().find(|f| f.name == name)
    }

    pub fn folder_mut(&mut self, name: &str) -> Option<&mut FolderRecord> {
        self.folders.iter_mut().find(|f| f.name == name)
    }

    #[must_use]
    pub fn file(&self, display_name: &str) -> Option<&FileRecord> {
        self.files.iter().find(|f| f.display_name() == display_name)
    }

    pub fn file_mut(&mut self, display_name: &str) -> Option<&mut FileRecord> {
        self.files
            .iter_mut()
            .find(|f| f.display_name() == display_name)
    }
}

impl Document {
    /// `Home` with an empty `Desktop`, an empty `packages`, not installed
    #[must_use]
    pub fn default_installation() -> Self {
        let mut home = FolderRecord::empty(HOME_FOLDER);
        home.folders.push(FolderRecord::empty(DESKTOP_FOLDER));
        Self {
            installed: false,
            root: vec![home, FolderRecord::empty(PACKAGES_FOLDER)],
            username: String::new(),
        }
    }

    /// Parses a stored document; missing fields are an error
    pub fn load(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Pretty JSON with two-space indentation
    pub fn save(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Replaces every folder record with a snapshot of the live tree
    pub fn rederive(&mut self, fs: &FS) {
        self.root = fs
            .root_dir()
            .folders()
            .iter()
            .map(FolderRecord::from_folder)
            .collect();
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::default_installation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_installation_layout() {
        let doc = Document::default_installation();
        let names: Vec<_> = doc.root.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Home", "packages"]);
        assert!(doc.root[0].folder("Desktop").is_some());
        assert!(!doc.installed);
        assert_eq!(doc.username, "");
    }

    #[test]
    fn test_save_format() {
        let mut doc = Document::default_installation();
        doc.root[0]
            .files
            .push(FileRecord::new("todo", "txt", "milk"));
        let text = doc.save().unwrap();

        assert!(text.starts_with("{\n  \"installed\": false,\n  \"root\": ["));
        assert!(text.contains("\"type\": \"txt\""));
        assert!(text.contains("\"contents\": \"milk\""));
        assert_eq!(Document::load(&text).unwrap(), doc);
    }

    #[test]
    fn test_load_accepts_legacy_flag() {
        let text = r#"{"isInstalled": true, "root": [], "username": "ada"}"#;
        let doc = Document::load(text).unwrap();
        assert!(doc.installed);
        assert_eq!(doc.username, "ada");
    }

    #[test]
    fn test_load_rejects_missing_fields() {
        assert!(Document::load(r#"{"root": [], "username": "ada"}"#).is_err());
        assert!(Document::load(r#"{"installed": false, "root": [{"name": "Home"}], "username": ""}"#).is_err());
        assert!(Document::load("not json").is_err());
    }

    #[test]
    fn test_from_folder_snapshot() {
        let fs = FS::new();
        let home = fs.root().create_folder("Home").unwrap();
        let desktop = home.create_folder("Desktop").unwrap();
        desktop.create_file("a.txt").unwrap().set_content("hello");
        home.create_file("README").unwrap();

        let record = FolderRecord::from_folder(home.dir());
        assert_eq!(record.name, "Home");
        assert_eq!(record.files, vec![FileRecord::new("README", "", "")]);
        assert_eq!(
            record.folder("Desktop").unwrap().file("a.txt"),
            Some(&FileRecord::new("a", "txt", "hello"))
        );
    }
}
