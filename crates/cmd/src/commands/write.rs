// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io::Read;

use anyhow::{Context, Result};
use diagnostics::log_debug;

use crate::common::Session;

/// Replaces the contents of the file at `path`, creating it if needed.
/// Without `content` the new contents are read from stdin.
pub fn write_command(session: &mut Session, path: &str, content: Option<&str>) -> Result<Vec<String>> {
    let content = match content {
        Some(text) => text.to_string(),
        None => {
            let mut text = String::new();
            _ = std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read contents from stdin")?;
            text
        }
    };

    let file = session.coordinator.open_file(&session.cwd, path)?;
    session.coordinator.save_file_contents(&file, &content)?;

    let bytes = content.len();
    log_debug!("Wrote {bytes} bytes to {path}", bytes: bytes, path: path);
    Ok(Vec::new())
}
