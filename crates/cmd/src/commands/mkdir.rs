// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use diagnostics::log_debug;

use crate::common::Session;

/// Creates each folder in turn; a failure is reported and the rest still run
pub fn mkdir_command(session: &mut Session, names: &[String]) -> Vec<String> {
    let mut output = Vec::new();
    for name in names {
        match session.coordinator.create_folder(&session.cwd, name) {
            Ok(folder) => {
                let path = folder.absolute_path();
                log_debug!("mkdir {path}", path: path);
            }
            Err(e) => output.push(e.to_string()),
        }
    }
    output
}
