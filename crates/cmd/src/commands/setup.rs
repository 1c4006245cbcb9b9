// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Result, anyhow};

use crate::common::Session;

pub fn setup_command(session: &mut Session, username: &str) -> Result<Vec<String>> {
    let username = username.trim();
    if username.is_empty() {
        return Err(anyhow!("No username provided"));
    }
    session.coordinator.complete_installation(username)?;
    Ok(vec![format!("Welcome, {}!", username)])
}
