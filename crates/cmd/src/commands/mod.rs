// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

pub mod cat;
pub mod list;
pub mod mkdir;
pub mod pkg;
pub mod remove;
pub mod rename;
pub mod setup;
pub mod touch;
pub mod write;

pub use cat::cat_command;
pub use list::{list_command, pwd_command};
pub use mkdir::mkdir_command;
pub use pkg::{pkg_install_command, pkg_list_command, pkg_remove_command};
pub use remove::{rm_command, rmdir_command};
pub use rename::rename_command;
pub use setup::setup_command;
pub use touch::mk_command;
pub use write::write_command;

use anyhow::Result;

use crate::cli::{Commands, PkgCommands};
use crate::common::Session;

/// Runs one command and returns the lines to print
pub fn dispatch(session: &mut Session, command: &Commands) -> Result<Vec<String>> {
    match command {
        Commands::Mkdir { names } => Ok(mkdir_command(session, names)),
        Commands::Rmdir { names } => Ok(rmdir_command(session, names)),
        Commands::Mk { names } => Ok(mk_command(session, names)),
        Commands::Rm { names } => Ok(rm_command(session, names)),
        Commands::Ls { path, tree } => list_command(session, path.as_deref(), *tree),
        Commands::Pwd => Ok(pwd_command(session)),
        Commands::Cat { paths } => Ok(cat_command(session, paths)),
        Commands::Write { path, content } => write_command(session, path, content.as_deref()),
        Commands::Rename { old, new } => rename_command(session, old, new),
        Commands::Pkg(args) => match &args.command {
            PkgCommands::List => Ok(pkg_list_command(session)),
            PkgCommands::Remove { names } => Ok(pkg_remove_command(session, names)),
            PkgCommands::Install {
                name,
                version,
                files,
            } => pkg_install_command(session, name, version, files.as_deref()),
        },
        Commands::Setup { username } => setup_command(session, username),
    }
}
