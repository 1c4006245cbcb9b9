// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::common::Session;

/// Prints each file's lines; unreadable paths are reported in place
pub fn cat_command(session: &Session, paths: &[String]) -> Vec<String> {
    let mut output = Vec::new();
    for path in paths {
        match session.coordinator.read_file(&session.cwd, path) {
            Ok(content) => output.extend(content.lines().map(str::to_string)),
            Err(e) => output.push(e.to_string()),
        }
    }
    output
}
