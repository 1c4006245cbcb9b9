// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "osfs")]
pub struct Cli {
    /// Document file holding the tree (default: $OSFS_STORE, then ./osinfo.json)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Folder to run in, resolved from Home
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create folders in the current folder
    Mkdir {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Remove folders and everything in them
    Rmdir {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Create empty files in the current folder
    Mk {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Remove files
    Rm {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// List a folder, folders first
    Ls {
        /// Folder path to list instead of the current folder
        path: Option<String>,
        /// Show the whole subtree
        #[arg(long)]
        tree: bool,
    },
    /// Print the absolute path of the current folder
    Pwd,
    /// Print file contents
    Cat {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Replace a file's contents, creating the file if needed
    Write {
        path: String,
        /// New contents; read from stdin when absent
        #[arg(short, long)]
        content: Option<String>,
    },
    /// Rename a folder or file in the current folder
    Rename { old: String, new: String },
    /// Manage installed packages
    Pkg(PkgArgs),
    /// Mark the installation complete for a user
    Setup { username: String },
}

#[derive(Args, Debug)]
pub struct PkgArgs {
    #[command(subcommand)]
    pub command: PkgCommands,
}

#[derive(Subcommand, Debug)]
pub enum PkgCommands {
    /// List installed packages with their versions
    List,
    /// Remove installed packages
    Remove {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Install a package from a local descriptor file
    Install {
        name: String,
        version: String,
        /// JSON array of {"name", "type", "contents"} file descriptors
        #[arg(long)]
        files: Option<PathBuf>,
    },
}
