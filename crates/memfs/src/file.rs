// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

use crate::dir;
use crate::name;

/// Represents a file with its whole content held in memory
pub struct File {
    base_name: String,
    extension: String,
    content: String,
    parent: dir::WeakHandle,
}

/// A handle for a refcounted file.
#[derive(Clone)]
pub struct Handle(Rc<RefCell<File>>);

impl File {
    pub(crate) fn new(base_name: String, extension: String, parent: dir::WeakHandle) -> Self {
        Self {
            base_name,
            extension,
            content: String::new(),
            parent,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        name::encode(&self.base_name, &self.extension)
    }
}

impl Handle {
    pub(crate) fn new(file: File) -> Self {
        Self(Rc::new(RefCell::new(file)))
    }

    #[must_use]
    pub fn base_name(&self) -> String {
        self.borrow().base_name.clone()
    }

    #[must_use]
    pub fn extension(&self) -> String {
        self.borrow().extension.clone()
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        self.borrow().display_name()
    }

    #[must_use]
    pub fn content(&self) -> String {
        self.borrow().content.clone()
    }

    pub fn set_content<S: Into<String>>(&self, content: S) {
        self.borrow_mut().content = content.into();
    }

    /// Re-decodes `raw` into base name and extension.
    /// Sibling uniqueness is not checked here.
    pub fn rename(&self, raw: &str) {
        let (base_name, extension) = name::decode(raw);
        let mut file = self.borrow_mut();
        file.base_name = base_name;
        file.extension = extension;
    }

    /// The owning folder, if it is still alive
    #[must_use]
    pub fn parent(&self) -> Option<dir::Handle> {
        self.borrow().parent.upgrade()
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Handle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for Handle {
    type Target = Rc<RefCell<File>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for Handle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.display_name() == other.display_name()
    }
}

impl std::fmt::Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::fmt::Debug for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(file {})", self.display_name())
    }
}
