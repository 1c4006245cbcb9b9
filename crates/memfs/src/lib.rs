// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! memfs is the live folder tree: folders own their children, children
//! point back at their parent weakly, and a `WD` resolves paths from a
//! current folder.

mod error;
pub use error::{EntryKind, Error, Result};

pub mod dir;
pub mod file;
pub mod listing;
pub mod name;
pub mod path;

mod fs;
pub use fs::FS;

mod wd;
pub use wd::{Lookup, Navigation, Notice, WD};

/// Label prefixed to every absolute path; also the root folder's name
pub const ROOT_LABEL: &str = "root";

/// The folder `~` refers to, directly under the root
pub const HOME_FOLDER: &str = "Home";

#[cfg(test)]
mod tests;
