// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::dir;
use crate::error::*;
use crate::wd::WD;
use crate::HOME_FOLDER;

/// Main filesystem structure; owns the single synthetic root
#[derive(Clone)]
pub struct FS {
    root: dir::Handle,
}

impl FS {
    /// Creates a new filesystem with an empty root folder
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: dir::Handle::new_root(),
        }
    }

    /// Returns a working directory context for the root folder
    #[must_use]
    pub fn root(&self) -> WD {
        self.wd(self.root.clone())
    }

    #[must_use]
    pub fn root_dir(&self) -> dir::Handle {
        self.root.clone()
    }

    /// The well-known home folder directly under the root
    pub fn home_dir(&self) -> Result<dir::Handle> {
        self.root
            .get_folder(HOME_FOLDER)
            .ok_or_else(|| Error::folder_not_found(HOME_FOLDER))
    }

    pub fn home(&self) -> Result<WD> {
        Ok(self.wd(self.home_dir()?))
    }

    #[must_use]
    pub fn wd(&self, dir: dir::Handle) -> WD {
        WD::new(dir, self.clone())
    }
}

impl Default for FS {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FS {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FS{{}}")
    }
}

impl PartialEq for FS {
    fn eq(&self, other: &Self) -> bool {
        // Same instance, not same contents
        self.root.ptr_eq(&other.root)
    }
}
