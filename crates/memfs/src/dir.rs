// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::ops::Deref;
use std::rc::{Rc, Weak};

use crate::error::*;
use crate::file;
use crate::name;
use crate::path;
use crate::ROOT_LABEL;

/// Represents a folder holding ordered child folders and files.
/// Children are owned here; they point back at this folder weakly.
pub struct Folder {
    name: String,
    parent: Option<WeakHandle>,
    folders: Vec<Handle>,
    files: Vec<file::Handle>,
}

/// A handle for a refcounted folder.
#[derive(Clone)]
pub struct Handle(Rc<RefCell<Folder>>);

/// A non-owning reference to a folder, used for upward walks.
#[derive(Clone)]
pub struct WeakHandle(Weak<RefCell<Folder>>);

impl WeakHandle {
    #[must_use]
    pub fn upgrade(&self) -> Option<Handle> {
        self.0.upgrade().map(Handle)
    }
}

impl Handle {
    /// Creates the synthetic root folder
    #[must_use]
    pub fn new_root() -> Self {
        Self(Rc::new(RefCell::new(Folder {
            name: ROOT_LABEL.to_string(),
            parent: None,
            folders: Vec::new(),
            files: Vec::new(),
        })))
    }

    fn downgrade(&self) -> WeakHandle {
        WeakHandle(Rc::downgrade(&self.0))
    }

    #[must_use]
    pub fn name(&self) -> String {
        self.borrow().name.clone()
    }

    #[must_use]
    pub fn parent(&self) -> Option<Handle> {
        self.borrow().parent.as_ref().and_then(WeakHandle::upgrade)
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.borrow().parent.is_none()
    }

    /// Names from the root's child down to this folder; empty for the root
    #[must_use]
    pub fn segments(&self) -> Vec<String> {
        let mut names = Vec::new();
        let mut folder = self.clone();
        while let Some(parent) = folder.parent() {
            names.push(folder.name());
            folder = parent;
        }
        names.reverse();
        names
    }

    /// The root label followed by every ancestor name, joined with `/`
    #[must_use]
    pub fn absolute_path(&self) -> String {
        std::iter::once(ROOT_LABEL.to_string())
            .chain(self.segments())
            .collect::<Vec<_>>()
            .join(&path::SEPARATOR.to_string())
    }

    #[must_use]
    pub fn get_folder(&self, name: &str) -> Option<Handle> {
        self.borrow()
            .folders
            .iter()
            .find(|f| f.name() == name)
            .cloned()
    }

    #[must_use]
    pub fn get_file(&self, display_name: &str) -> Option<file::Handle> {
        self.borrow()
            .files
            .iter()
            .find(|f| f.display_name() == display_name)
            .cloned()
    }

    /// Appends a new child folder, refusing a sibling with the same name
    pub fn create_folder(&self, name: &str) -> Result<Handle> {
        path::validate_folder_name(name)?;
        if self.get_folder(name).is_some() {
            return Err(Error::duplicate_folder(name));
        }
        let folder = Handle(Rc::new(RefCell::new(Folder {
            name: name.to_string(),
            parent: Some(self.downgrade()),
            folders: Vec::new(),
            files: Vec::new(),
        })));
        self.borrow_mut().folders.push(folder.clone());
        Ok(folder)
    }

    /// Detaches a child folder; its subtree is dropped with it
    pub fn remove_folder(&self, name: &str) -> Result<()> {
        let mut dir = self.borrow_mut();
        let index = dir
            .folders
            .iter()
            .position(|f| f.name() == name)
            .ok_or_else(|| Error::folder_not_found(name))?;
        _ = dir.folders.remove(index);
        Ok(())
    }

    /// Decodes `raw` and appends a new empty file
    pub fn create_file(&self, raw: &str) -> Result<file::Handle> {
        path::validate_file_name(raw)?;
        let (base_name, extension) = name::decode(raw);
        if base_name.is_empty() && extension.is_empty() {
            return Err(Error::malformed_path(raw));
        }
        self.create_file_parts(&base_name, &extension)
    }

    /// Appends a new empty file from an already split name
    pub fn create_file_parts(&self, base_name: &str, extension: &str) -> Result<file::Handle> {
        let display_name = name::encode(base_name, extension);
        path::validate_file_name(&display_name)?;
        if self.get_file(&display_name).is_some() {
            return Err(Error::duplicate_file(display_name));
        }
        let file = file::Handle::new(file::File::new(
            base_name.to_string(),
            extension.to_string(),
            self.downgrade(),
        ));
        self.borrow_mut().files.push(file.clone());
        Ok(file)
    }

    pub fn remove_file(&self, display_name: &str) -> Result<()> {
        let mut dir = self.borrow_mut();
        let index = dir
            .files
            .iter()
            .position(|f| f.display_name() == display_name)
            .ok_or_else(|| Error::file_not_found(display_name))?;
        _ = dir.files.remove(index);
        Ok(())
    }

    /// Renames in place. Sibling uniqueness is not checked here.
    pub fn rename(&self, new_name: &str) {
        self.borrow_mut().name = new_name.to_string();
    }

    /// Child folders in insertion order
    #[must_use]
    pub fn folders(&self) -> Vec<Handle> {
        self.borrow().folders.clone()
    }

    /// Child files in insertion order
    #[must_use]
    pub fn files(&self) -> Vec<file::Handle> {
        self.borrow().files.clone()
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Handle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for Handle {
    type Target = Rc<RefCell<Folder>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Folders compare by name only, not by path
impl PartialEq for Handle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.name() == other.name()
    }
}

impl std::fmt::Debug for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(folder {})", self.absolute_path())
    }
}
