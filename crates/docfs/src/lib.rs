// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

// Document-backed persistence for the memfs tree

pub mod error;
pub mod mirror;
pub mod packages;
pub mod schema;
pub mod store;
pub mod sync;

pub use error::{DocFSError, Result};
pub use mirror::DocPath;
pub use packages::{PackageInfo, PACKAGES_FOLDER, VERSION_FILE};
pub use schema::{Document, FileRecord, FolderRecord};
pub use store::{Store, DEFAULT_STORE_FILE};
pub use sync::{Boot, Coordinator};
