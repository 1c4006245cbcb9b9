// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::common::Session;

pub fn mk_command(session: &mut Session, names: &[String]) -> Vec<String> {
    names
        .iter()
        .filter_map(|name| session.coordinator.create_file(&session.cwd, name).err())
        .map(|e| e.to_string())
        .collect()
}
