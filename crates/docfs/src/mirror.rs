// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Edits to the document addressed by the live tree's folder paths.
//!
//! Every operation names its target by the absolute path of the parent
//! folder. Operations at the synthetic root are refused: its children
//! are the fixed top-level folders.

use diagnostics::log_warn;
use memfs::{dir, path, ROOT_LABEL};

use crate::error::{DocFSError, Result};
use crate::schema::{Document, FileRecord, FolderRecord};

/// Folder names below the root, outermost first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocPath(Vec<String>);

impl DocPath {
    #[must_use]
    pub fn root() -> Self {
        DocPath(Vec::new())
    }

    /// Parses `root/a/b`; anything not led by the root label is refused
    pub fn from_absolute(absolute: &str) -> Result<Self> {
        let mut segments = path::split(absolute).into_iter();
        if segments.next() != Some(ROOT_LABEL) {
            return Err(DocFSError::MalformedPath(absolute.to_string()));
        }
        Ok(DocPath(segments.map(str::to_string).collect()))
    }

    #[must_use]
    pub fn of(folder: &dir::Handle) -> Self {
        DocPath(folder.segments())
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl std::fmt::Display for DocPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", ROOT_LABEL)?;
        for segment in &self.0 {
            write!(f, "{}{}", path::SEPARATOR, segment)?;
        }
        Ok(())
    }
}

impl Document {
    /// The record at `path`; the root itself has none
    #[must_use]
    pub fn locate_folder(&self, path: &DocPath) -> Option<&FolderRecord> {
        let (first, rest) = path.segments().split_first()?;
        let top = self.root.iter().find(|f| &f.name == first)?;
        rest.iter().try_fold(top, |folder, name| folder.folder(name))
    }

    pub fn locate_folder_mut(&mut self, path: &DocPath) -> Option<&mut FolderRecord> {
        let (first, rest) = path.segments().split_first()?;
        let top = self.root.iter_mut().find(|f| &f.name == first)?;
        rest.iter().try_fold(top, |folder, name| folder.folder_mut(name))
    }

    fn parent_mut(&mut self, parent: &DocPath) -> Result<&mut FolderRecord> {
        if parent.is_root() {
            log_warn!("Cannot modify root folder");
            return Err(DocFSError::RootImmutable);
        }
        self.locate_folder_mut(parent)
            .ok_or_else(|| DocFSError::folder_record(parent.to_string()))
    }

    pub fn insert_folder(&mut self, parent: &DocPath, record: FolderRecord) -> Result<()> {
        let folder = self.parent_mut(parent)?;
        if folder.folder(&record.name).is_some() {
            return Err(memfs::Error::duplicate_folder(&record.name).into());
        }
        folder.folders.push(record);
        Ok(())
    }

    pub fn insert_file(&mut self, parent: &DocPath, record: FileRecord) -> Result<()> {
        let folder = self.parent_mut(parent)?;
        let display_name = record.display_name();
        if folder.file(&display_name).is_some() {
            return Err(memfs::Error::duplicate_file(display_name).into());
        }
        folder.files.push(record);
        Ok(())
    }

    pub fn remove_folder(&mut self, parent: &DocPath, name: &str) -> Result<FolderRecord> {
        let folder = self.parent_mut(parent)?;
        let index = folder
            .folders
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| DocFSError::folder_record(name))?;
        Ok(folder.folders.remove(index))
    }

    pub fn remove_file(&mut self, parent: &DocPath, display_name: &str) -> Result<FileRecord> {
        let folder = self.parent_mut(parent)?;
        let index = folder
            .files
            .iter()
            .position(|f| f.display_name() == display_name)
            .ok_or_else(|| DocFSError::file_record(display_name))?;
        Ok(folder.files.remove(index))
    }

    pub fn update_file_contents(
        &mut self,
        parent: &DocPath,
        base: &str,
        extension: &str,
        contents: &str,
    ) -> Result<()> {
        let display_name = memfs::name::encode(base, extension);
        let record = self
            .parent_mut(parent)?
            .file_mut(&display_name)
            .ok_or_else(|| DocFSError::file_record(&display_name))?;
        record.contents = contents.to_string();
        Ok(())
    }

    pub fn rename_folder(&mut self, parent: &DocPath, old: &str, new: &str) -> Result<()> {
        let record = self
            .parent_mut(parent)?
            .folder_mut(old)
            .ok_or_else(|| DocFSError::folder_record(old))?;
        record.name = new.to_string();
        Ok(())
    }

    pub fn rename_file(
        &mut self,
        parent: &DocPath,
        old_display: &str,
        new_base: &str,
        new_extension: &str,
    ) -> Result<()> {
        let record = self
            .parent_mut(parent)?
            .file_mut(old_display)
            .ok_or_else(|| DocFSError::file_record(old_display))?;
        record.name = new_base.to_string();
        record.extension = new_extension.to_string();
        Ok(())
    }
}
