// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

pub mod cli;
pub mod commands;
pub mod common;

use anyhow::Result;

use crate::cli::Cli;
use crate::common::ShellContext;

/// Opens the document, runs the parsed command and returns every line
/// to print, startup notices first
pub fn run(cli: &Cli) -> Result<Vec<String>> {
    let context = ShellContext::new(cli.store.clone(), cli.dir.clone());
    let mut session = context.open()?;
    let mut output = std::mem::take(&mut session.messages);
    output.extend(commands::dispatch(&mut session, &cli.command)?);
    Ok(output)
}
