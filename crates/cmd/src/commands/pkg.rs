// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use docfs::FileRecord;

use crate::common::Session;

pub fn pkg_list_command(session: &Session) -> Vec<String> {
    session
        .coordinator
        .list_packages()
        .into_iter()
        .map(|package| match package.version {
            Some(version) => format!("{} {}", package.name, version.trim()),
            None => package.name,
        })
        .collect()
}

pub fn pkg_remove_command(session: &mut Session, names: &[String]) -> Vec<String> {
    names
        .iter()
        .filter_map(|name| session.coordinator.remove_package(name).err())
        .map(|e| e.to_string())
        .collect()
}

/// Installs from a local JSON array of file descriptors
pub fn pkg_install_command(
    session: &mut Session,
    name: &str,
    version: &str,
    files: Option<&Path>,
) -> Result<Vec<String>> {
    let descriptors = match files {
        Some(path) => read_descriptors(path)?,
        None => Vec::new(),
    };
    let folder = session
        .coordinator
        .install_package(name, version, &descriptors)?;
    Ok(vec![format!(
        "Installed {} {} in {}",
        name,
        version,
        folder.absolute_path()
    )])
}

fn read_descriptors(path: &Path) -> Result<Vec<FileRecord>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse package files in {}", path.display()))
}
