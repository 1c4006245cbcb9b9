// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::dir;
use crate::error::*;
use crate::file;
use crate::fs::FS;
use crate::listing;
use crate::path::{self, HOME_SEGMENT, PARENT_SEGMENT};
use diagnostics::log_debug;

/// Context for operations within a specific folder
#[derive(Clone)]
pub struct WD {
    dir: dir::Handle,
    fs: FS,
}

/// Result of resolving the final component of a file path
pub enum Lookup {
    Found(file::Handle),
    NotFound(String),
}

/// Non-fatal conditions met while resolving a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    AlreadyAtRoot,
}

/// A resolved folder plus whatever was noticed on the way
pub struct Navigation {
    pub wd: WD,
    pub notices: Vec<Notice>,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::AlreadyAtRoot => write!(f, "Already at topmost directory"),
        }
    }
}

impl WD {
    pub(crate) fn new(dir: dir::Handle, fs: FS) -> Self {
        Self { dir, fs }
    }

    #[must_use]
    pub fn dir(&self) -> &dir::Handle {
        &self.dir
    }

    #[must_use]
    pub fn fs(&self) -> &FS {
        &self.fs
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.dir.is_root()
    }

    #[must_use]
    pub fn name(&self) -> String {
        self.dir.name()
    }

    #[must_use]
    pub fn absolute_path(&self) -> String {
        self.dir.absolute_path()
    }

    pub fn create_folder(&self, name: &str) -> Result<WD> {
        let folder = self.dir.create_folder(name)?;
        let parent = self.absolute_path();
        log_debug!("Created folder {name} in {parent}", name: name, parent: parent);
        Ok(self.fs.wd(folder))
    }

    pub fn remove_folder(&self, name: &str) -> Result<()> {
        self.dir.remove_folder(name)?;
        let parent = self.absolute_path();
        log_debug!("Removed folder {name} from {parent}", name: name, parent: parent);
        Ok(())
    }

    pub fn create_file(&self, raw: &str) -> Result<file::Handle> {
        let file = self.dir.create_file(raw)?;
        let name = file.display_name();
        let parent = self.absolute_path();
        log_debug!("Created file {name} in {parent}", name: name, parent: parent);
        Ok(file)
    }

    pub fn remove_file(&self, display_name: &str) -> Result<()> {
        self.dir.remove_file(display_name)?;
        let parent = self.absolute_path();
        log_debug!("Removed file {name} from {parent}", name: display_name, parent: parent);
        Ok(())
    }

    #[must_use]
    pub fn get_folder(&self, name: &str) -> Option<WD> {
        self.dir.get_folder(name).map(|d| self.fs.wd(d))
    }

    #[must_use]
    pub fn get_file(&self, display_name: &str) -> Option<file::Handle> {
        self.dir.get_file(display_name)
    }

    /// Resolves a `/`-separated folder path relative to this folder.
    ///
    /// A leading `~` starts from the home folder. `..` moves up, and is
    /// a no-op with a notice at the root. Nothing is committed by this
    /// call: on failure the caller keeps its current folder.
    pub fn change_directory(&self, expr: &str) -> Result<Navigation> {
        let segments = path::split(expr);
        if segments.is_empty() {
            return Err(Error::empty_path());
        }

        let mut folder = self.dir.clone();
        let mut notices = Vec::new();
        for (index, segment) in segments.into_iter().enumerate() {
            match segment {
                HOME_SEGMENT if index == 0 => {
                    folder = self.fs.home_dir()?;
                }
                PARENT_SEGMENT => match folder.parent() {
                    Some(parent) => folder = parent,
                    None => notices.push(Notice::AlreadyAtRoot),
                },
                name => {
                    folder = folder
                        .get_folder(name)
                        .ok_or_else(|| Error::folder_not_found(expr))?;
                }
            }
        }

        Ok(Navigation {
            wd: self.fs.wd(folder),
            notices,
        })
    }

    /// Resolves every segment but the last as folders, strictly:
    /// `..` at the root is an error rather than a notice.
    fn resolve_parent(&self, expr: &str, segments: &[&str]) -> Result<dir::Handle> {
        let mut folder = self.dir.clone();
        for (index, segment) in segments.iter().enumerate() {
            folder = match *segment {
                HOME_SEGMENT if index == 0 => self.fs.home_dir()?,
                PARENT_SEGMENT => folder
                    .parent()
                    .ok_or_else(|| Error::malformed_path(expr))?,
                name => folder
                    .get_folder(name)
                    .ok_or_else(|| Error::folder_not_found(segments.join("/")))?,
            };
        }
        Ok(folder)
    }

    /// Performs an operation on the file named by a path
    pub fn in_path<F, T>(&self, expr: &str, op: F) -> Result<T>
    where
        F: FnOnce(&WD, Lookup) -> Result<T>,
    {
        let (dirs, name) = path::split_last(expr)?;
        let parent = self.fs.wd(self.resolve_parent(expr, &dirs)?);
        // Stored names are matched as written first, then as they decode
        let found = parent.get_file(name).or_else(|| {
            let (base, extension) = crate::name::decode(name);
            parent.get_file(&crate::name::encode(&base, &extension))
        });
        let lookup = match found {
            Some(file) => Lookup::Found(file),
            None => Lookup::NotFound(name.to_string()),
        };
        op(&parent, lookup)
    }

    /// Finds an existing file by path
    pub fn get_file_path(&self, expr: &str) -> Result<file::Handle> {
        self.in_path(expr, |_, lookup| match lookup {
            Lookup::Found(file) => Ok(file),
            Lookup::NotFound(_) => Err(Error::file_not_found(expr)),
        })
    }

    /// Immediate children as display strings, folders first
    #[must_use]
    pub fn list_names(&self) -> Vec<String> {
        listing::list_names(&self.dir)
    }

    /// Indented listing of the whole subtree
    #[must_use]
    pub fn print_tree(&self) -> String {
        listing::print_tree(&self.dir)
    }
}

impl PartialEq for WD {
    fn eq(&self, other: &Self) -> bool {
        self.dir.ptr_eq(&other.dir)
    }
}

impl std::fmt::Debug for WD {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WD{{{}}}", self.absolute_path())
    }
}
