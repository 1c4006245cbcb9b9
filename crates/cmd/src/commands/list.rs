// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;

use crate::common::Session;

/// Lists the current folder, or the folder at `path`
pub fn list_command(session: &Session, path: Option<&str>, tree: bool) -> Result<Vec<String>> {
    let mut output = Vec::new();
    let target = match path {
        Some(expr) => {
            let nav = session.cwd.change_directory(expr)?;
            output.extend(nav.notices.iter().map(ToString::to_string));
            nav.wd
        }
        None => session.cwd.clone(),
    };

    if tree {
        output.extend(target.print_tree().lines().map(str::to_string));
    } else {
        output.extend(target.list_names());
    }
    Ok(output)
}

#[must_use]
pub fn pwd_command(session: &Session) -> Vec<String> {
    vec![session.cwd.absolute_path()]
}
