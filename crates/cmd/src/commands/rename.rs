// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;

use crate::common::Session;

/// Folders are matched before files when both have the old name
pub fn rename_command(session: &mut Session, old: &str, new: &str) -> Result<Vec<String>> {
    if session.cwd.get_folder(old).is_some() {
        session.coordinator.rename_folder(&session.cwd, old, new)?;
    } else {
        session.coordinator.rename_file(&session.cwd, old, new)?;
    }
    Ok(Vec::new())
}
