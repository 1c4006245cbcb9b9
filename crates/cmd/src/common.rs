// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Result;
use diagnostics::{log_debug, log_warn};
use docfs::{Boot, Coordinator, Store, DEFAULT_STORE_FILE};
use memfs::WD;

/// Environment variable naming the document file
pub const STORE_ENV: &str = "OSFS_STORE";

/// Store location: the flag wins over the environment, then the default
#[must_use]
pub fn resolve_store_path(flag: Option<PathBuf>, env_value: Option<OsString>) -> PathBuf {
    flag.or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE))
}

/// Everything needed to start a session, from flags and environment
#[derive(Debug, Clone)]
pub struct ShellContext {
    pub store_path: PathBuf,
    pub start_dir: Option<String>,
}

/// An open document plus the folder commands run in
pub struct Session {
    pub coordinator: Coordinator,
    pub cwd: WD,
    /// Startup and navigation notices to show before command output
    pub messages: Vec<String>,
}

impl ShellContext {
    #[must_use]
    pub fn new(store: Option<PathBuf>, start_dir: Option<String>) -> Self {
        Self {
            store_path: resolve_store_path(store, env::var_os(STORE_ENV)),
            start_dir,
        }
    }

    pub fn open(&self) -> Result<Session> {
        let coordinator = Coordinator::open(Store::new(&self.store_path));
        let mut messages = Vec::new();
        if coordinator.boot() != &Boot::Restored {
            messages.push(coordinator.boot().to_string());
        }

        let mut cwd = match coordinator.home() {
            Ok(home) => home,
            Err(e) => {
                let error = e.to_string();
                log_warn!("Starting at root: {error}", error: error);
                coordinator.root()
            }
        };
        if let Some(dir) = &self.start_dir {
            let nav = cwd.change_directory(dir)?;
            messages.extend(nav.notices.iter().map(ToString::to_string));
            cwd = nav.wd;
        }

        let path = cwd.absolute_path();
        log_debug!("Session opened in {path}", path: path);
        Ok(Session {
            coordinator,
            cwd,
            messages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_path_precedence() {
        let flag = Some(PathBuf::from("/tmp/flag.json"));
        let env_value = Some(OsString::from("/tmp/env.json"));

        assert_eq!(
            resolve_store_path(flag, env_value.clone()),
            PathBuf::from("/tmp/flag.json")
        );
        assert_eq!(
            resolve_store_path(None, env_value),
            PathBuf::from("/tmp/env.json")
        );
        assert_eq!(
            resolve_store_path(None, Some(OsString::new())),
            PathBuf::from("osinfo.json")
        );
        assert_eq!(resolve_store_path(None, None), PathBuf::from("osinfo.json"));
    }
}
