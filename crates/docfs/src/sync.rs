// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Keeps the live tree and the stored document in step.
//!
//! Every mutation goes through the [`Coordinator`], which applies it to
//! the tree, applies the matching edit to the document at the parent
//! folder's path, and rewrites the store. Mutations directly under the
//! synthetic root are refused before anything changes.

use diagnostics::{log_debug, log_info, log_warn};
use memfs::{dir, file, name, path, Lookup, FS, WD};

use crate::error::{DocFSError, Result};
use crate::mirror::DocPath;
use crate::schema::{Document, FileRecord, FolderRecord};
use crate::store::Store;

/// How the document was obtained at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Boot {
    /// Loaded from the store
    Restored,
    /// No store existed; the default installation was created
    Fresh,
    /// The store could not be used and was replaced by the default
    Reset(String),
}

impl std::fmt::Display for Boot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Boot::Restored => write!(f, "Restored os info data"),
            Boot::Fresh => write!(
                f,
                "No file found for current os info data, creating default installation..."
            ),
            Boot::Reset(_) => write!(
                f,
                "Unable to parse os info data, erasing to default installation..."
            ),
        }
    }
}

pub struct Coordinator {
    fs: FS,
    document: Document,
    store: Store,
    boot: Boot,
}

impl Coordinator {
    /// Loads the store, falling back to the default installation, and
    /// builds the live tree from it. Never fails: a store that cannot be
    /// written is reported and retried on the next mutation.
    #[must_use]
    pub fn open(store: Store) -> Self {
        let (mut document, boot) = read_document(&store);
        match &boot {
            Boot::Restored => {}
            Boot::Fresh => {
                let path = store.path().display().to_string();
                log_info!("Creating default installation at {path}", path: path);
            }
            Boot::Reset(reason) => {
                let reason = reason.as_str();
                log_warn!("Discarding stored document: {reason}", reason: reason);
            }
        }

        let fs = FS::new();
        let dropped = build_tree(&fs.root_dir(), &document.root);
        if dropped > 0 {
            log_warn!("Dropped {dropped} conflicting records", dropped: dropped);
        }
        document.rederive(&fs);

        let coordinator = Self {
            fs,
            document,
            store,
            boot,
        };
        if let Err(e) = coordinator.flush() {
            let error = e.to_string();
            log_warn!("Unable to write os info data: {error}", error: error);
        }
        coordinator
    }

    #[must_use]
    pub fn boot(&self) -> &Boot {
        &self.boot
    }

    #[must_use]
    pub fn fs(&self) -> &FS {
        &self.fs
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    #[must_use]
    pub fn root(&self) -> WD {
        self.fs.root()
    }

    /// The folder a session starts in
    pub fn home(&self) -> Result<WD> {
        Ok(self.fs.home()?)
    }

    /// Rewrites the whole document to the store
    pub fn flush(&self) -> Result<()> {
        let text = self.document.save()?;
        self.store.write(&text)
    }

    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.document.installed
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.document.username
    }

    pub fn complete_installation(&mut self, username: &str) -> Result<()> {
        self.document.installed = true;
        self.document.username = username.to_string();
        log_info!("Installation completed for {username}", username: username);
        self.flush()
    }

    pub fn create_folder(&mut self, wd: &WD, name: &str) -> Result<WD> {
        let parent = self.mutable_parent(wd.dir())?;
        let child = wd.create_folder(name)?;
        if let Err(e) = self
            .document
            .insert_folder(&parent, FolderRecord::empty(name))
        {
            _ = wd.remove_folder(name);
            return Err(e);
        }
        self.flush()?;
        Ok(child)
    }

    pub fn remove_folder(&mut self, wd: &WD, name: &str) -> Result<()> {
        let parent = self.mutable_parent(wd.dir())?;
        if wd.get_folder(name).is_none() {
            return Err(memfs::Error::folder_not_found(name).into());
        }
        _ = self.document.remove_folder(&parent, name)?;
        wd.remove_folder(name)?;
        self.flush()
    }

    pub fn create_file(&mut self, wd: &WD, raw: &str) -> Result<file::Handle> {
        let parent = self.mutable_parent(wd.dir())?;
        let file = wd.create_file(raw)?;
        if let Err(e) = self
            .document
            .insert_file(&parent, FileRecord::from_file(&file))
        {
            _ = wd.remove_file(&file.display_name());
            return Err(e);
        }
        self.flush()?;
        Ok(file)
    }

    pub fn create_file_with_contents(
        &mut self,
        wd: &WD,
        raw: &str,
        contents: &str,
    ) -> Result<file::Handle> {
        let file = self.create_file(wd, raw)?;
        self.save_file_contents(&file, contents)?;
        Ok(file)
    }

    pub fn remove_file(&mut self, wd: &WD, display_name: &str) -> Result<()> {
        let parent = self.mutable_parent(wd.dir())?;
        if wd.get_file(display_name).is_none() {
            return Err(memfs::Error::file_not_found(display_name).into());
        }
        _ = self.document.remove_file(&parent, display_name)?;
        wd.remove_file(display_name)?;
        self.flush()
    }

    /// Renames a child folder, refusing a name a sibling already has
    pub fn rename_folder(&mut self, wd: &WD, old: &str, new: &str) -> Result<()> {
        let parent = self.mutable_parent(wd.dir())?;
        path::validate_folder_name(new)?;
        let folder = wd
            .get_folder(old)
            .ok_or_else(|| memfs::Error::folder_not_found(old))?;
        if old != new && wd.get_folder(new).is_some() {
            return Err(memfs::Error::duplicate_folder(new).into());
        }

        self.document.rename_folder(&parent, old, new)?;
        folder.dir().rename(new);
        log_debug!("Renamed folder {old} to {new}", old: old, new: new);
        self.flush()
    }

    /// Renames a file, re-decoding `new_raw` into base name and extension
    pub fn rename_file(&mut self, wd: &WD, old_display: &str, new_raw: &str) -> Result<()> {
        let parent = self.mutable_parent(wd.dir())?;
        path::validate_file_name(new_raw)?;
        let file = wd
            .get_file(old_display)
            .ok_or_else(|| memfs::Error::file_not_found(old_display))?;

        let (base, extension) = name::decode(new_raw);
        if base.is_empty() && extension.is_empty() {
            return Err(memfs::Error::malformed_path(new_raw).into());
        }
        let new_display = name::encode(&base, &extension);
        if new_display != old_display && wd.get_file(&new_display).is_some() {
            return Err(memfs::Error::duplicate_file(new_display).into());
        }

        self.document
            .rename_file(&parent, old_display, &base, &extension)?;
        file.rename(new_raw);
        log_debug!("Renamed file {old} to {new}", old: old_display, new: new_display);
        self.flush()
    }

    /// The file at `expr`, created empty if it does not exist yet
    pub fn open_file(&mut self, wd: &WD, expr: &str) -> Result<file::Handle> {
        let (parent, lookup) = wd.in_path(expr, |parent, lookup| Ok((parent.clone(), lookup)))?;
        match lookup {
            Lookup::Found(file) => Ok(file),
            Lookup::NotFound(name) => self.create_file(&parent, &name),
        }
    }

    pub fn read_file(&self, wd: &WD, expr: &str) -> Result<String> {
        Ok(wd.get_file_path(expr)?.content())
    }

    /// Replaces a file's content in both the tree and the document
    pub fn save_file_contents(&mut self, file: &file::Handle, contents: &str) -> Result<()> {
        let display_name = file.display_name();
        let folder = file
            .parent()
            .ok_or_else(|| DocFSError::file_record(&display_name))?;
        let current = folder.get_file(&display_name);
        if !current.is_some_and(|f| f.ptr_eq(file)) {
            return Err(DocFSError::file_record(display_name));
        }
        let parent = self.mutable_parent(&folder)?;

        self.document.update_file_contents(
            &parent,
            &file.base_name(),
            &file.extension(),
            contents,
        )?;
        file.set_content(contents);
        let bytes = contents.len();
        log_debug!("Saved {bytes} bytes to {name}", bytes: bytes, name: display_name);
        self.flush()
    }
}

impl Coordinator {
    /// True when `folder` is still reachable from this tree's root
    fn is_attached(&self, folder: &dir::Handle) -> bool {
        let root = self.fs.root_dir();
        let mut current = folder.clone();
        loop {
            if current.ptr_eq(&root) {
                return true;
            }
            // A removed folder keeps its parent link but is no longer listed
            match current.parent() {
                Some(parent) if parent.folders().iter().any(|f| f.ptr_eq(&current)) => {
                    current = parent;
                }
                _ => return false,
            }
        }
    }

    /// Document path of the folder a mutation happens in
    fn mutable_parent(&self, folder: &dir::Handle) -> Result<DocPath> {
        if folder.ptr_eq(&self.fs.root_dir()) {
            log_warn!("Cannot modify root folder");
            return Err(DocFSError::RootImmutable);
        }
        if !self.is_attached(folder) {
            return Err(DocFSError::folder_record(folder.absolute_path()));
        }
        Ok(DocPath::of(folder))
    }
}

impl std::fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Coordinator{{{}}}", self.store.path().display())
    }
}


fn read_document(store: &Store) -> (Document, Boot) {
    let text = match store.read() {
        Ok(Some(text)) => text,
        Ok(None) => return (Document::default_installation(), Boot::Fresh),
        Err(e) => return (Document::default_installation(), Boot::Reset(e.to_string())),
    };
    match Document::load(&text) {
        Ok(document) => (document, Boot::Restored),
        Err(e) => (Document::default_installation(), Boot::Reset(e.to_string())),
    }
}

/// Instantiates `records` under `folder` in document order. Returns the
/// number of records refused by the tree, counting whole subtrees as one.
fn build_tree(folder: &dir::Handle, records: &[FolderRecord]) -> usize {
    let mut dropped = 0;
    for record in records {
        match folder.create_folder(&record.name) {
            Ok(child) => {
                dropped += build_tree(&child, &record.folders);
                dropped += build_files(&child, &record.files);
            }
            Err(e) => {
                let error = e.to_string();
                log_warn!("Skipping folder record: {error}", error: error);
                dropped += 1;
            }
        }
    }
    dropped
}

fn build_files(folder: &dir::Handle, records: &[FileRecord]) -> usize {
    let mut dropped = 0;
    for record in records {
        match folder.create_file_parts(&record.name, &record.extension) {
            Ok(file) => file.set_content(record.contents.as_str()),
            Err(e) => {
                let error = e.to_string();
                log_warn!("Skipping file record: {error}", error: error);
                dropped += 1;
            }
        }
    }
    dropped
}
