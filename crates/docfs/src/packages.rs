// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Installed packages live as folders under the top-level `packages`
//! folder. Each holds a `VERSION` file plus the package's own files.

use diagnostics::{log_info, log_warn};
use memfs::{file, name, path, WD};

use crate::error::{DocFSError, Result};
use crate::schema::FileRecord;
use crate::sync::Coordinator;

pub const PACKAGES_FOLDER: &str = "packages";
pub const VERSION_FILE: &str = "VERSION";

/// An installed package as listed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    pub name: String,
    /// Content of the `VERSION` file, if the package has one
    pub version: Option<String>,
}

impl Coordinator {
    pub fn packages(&self) -> Result<WD> {
        self.root()
            .get_folder(PACKAGES_FOLDER)
            .ok_or_else(|| memfs::Error::folder_not_found(PACKAGES_FOLDER).into())
    }

    #[must_use]
    pub fn is_package_installed(&self, name: &str) -> bool {
        self.packages()
            .ok()
            .and_then(|packages| packages.get_folder(name))
            .is_some()
    }

    pub fn create_package_folder(&mut self, name: &str) -> Result<WD> {
        let packages = self.packages()?;
        self.create_folder(&packages, name)
    }

    pub fn create_package_file(
        &mut self,
        folder: &WD,
        base: &str,
        extension: &str,
        contents: &str,
    ) -> Result<file::Handle> {
        self.create_file_with_contents(folder, &name::encode(base, extension), contents)
    }

    /// Creates the package folder, its `VERSION` marker and one file per
    /// descriptor. Descriptors that collide after decoding are skipped.
    /// A failed install leaves no package folder behind.
    pub fn install_package(&mut self, name: &str, version: &str, files: &[FileRecord]) -> Result<WD> {
        if self.is_package_installed(name) {
            return Err(DocFSError::PackageInstalled(name.to_string()));
        }
        for descriptor in files {
            validate_descriptor(descriptor)?;
        }

        let folder = self.create_package_folder(name)?;
        if let Err(e) = self.fill_package(&folder, version, files) {
            let packages = self.packages()?;
            _ = self.remove_folder(&packages, name);
            return Err(e);
        }

        let count = files.len();
        log_info!("Installed {name} {version} with {count} files", name: name, version: version, count: count);
        Ok(folder)
    }

    fn fill_package(&mut self, folder: &WD, version: &str, files: &[FileRecord]) -> Result<()> {
        _ = self.create_package_file(folder, VERSION_FILE, "", version)?;
        for descriptor in files {
            match self.create_package_file(folder, &descriptor.name, &descriptor.extension, &descriptor.contents) {
                Ok(_) => {}
                Err(e) if e.is_duplicate() => {
                    let error = e.to_string();
                    log_warn!("Skipping package file: {error}", error: error);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn list_packages(&self) -> Vec<PackageInfo> {
        let Ok(packages) = self.packages() else {
            return Vec::new();
        };
        packages
            .dir()
            .folders()
            .iter()
            .map(|folder| PackageInfo {
                name: folder.name(),
                version: folder.get_file(VERSION_FILE).map(|f| f.content()),
            })
            .collect()
    }

    pub fn remove_package(&mut self, name: &str) -> Result<()> {
        let packages = self.packages()?;
        self.remove_folder(&packages, name)?;
        log_info!("Removed package {name}", name: name);
        Ok(())
    }
}

/// The name a descriptor would be created under must be a usable file name
fn validate_descriptor(descriptor: &FileRecord) -> Result<()> {
    let raw = descriptor.display_name();
    path::validate_file_name(&raw)?;
    let (base, extension) = name::decode(&raw);
    if base.is_empty() && extension.is_empty() {
        return Err(memfs::Error::malformed_path(raw).into());
    }
    Ok(())
}
