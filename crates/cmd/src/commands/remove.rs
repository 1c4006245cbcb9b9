// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::common::Session;

pub fn rmdir_command(session: &mut Session, names: &[String]) -> Vec<String> {
    names
        .iter()
        .filter_map(|name| session.coordinator.remove_folder(&session.cwd, name).err())
        .map(|e| e.to_string())
        .collect()
}

pub fn rm_command(session: &mut Session, names: &[String]) -> Vec<String> {
    names
        .iter()
        .filter_map(|name| session.coordinator.remove_file(&session.cwd, name).err())
        .map(|e| e.to_string())
        .collect()
}
