// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Structured logging shared by the osfs crates.
//!
//! The level comes from the `OSFS_LOG` environment variable:
//! - `off` (default) - no logs
//! - `error`, `warn` - problems only
//! - `info` - startup and persistence events
//! - `debug` - every tree and document mutation
//!
//! Logs always go to stderr so command output on stdout stays clean.

use std::sync::Once;

// Re-export emit so the macros resolve from any crate
pub use emit;

/// Environment variable holding the log level
pub const LOG_ENV: &str = "OSFS_LOG";

static INIT: Once = Once::new();

/// Parsed value of [`LOG_ENV`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    /// Unknown values fall back to `info`; the second field reports that.
    #[must_use]
    pub fn parse(value: &str) -> (Self, bool) {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "off" => (LogLevel::Off, true),
            "error" => (LogLevel::Error, true),
            "warn" => (LogLevel::Warn, true),
            "info" => (LogLevel::Info, true),
            "debug" => (LogLevel::Debug, true),
            _ => (LogLevel::Info, false),
        }
    }

    fn min_level(self) -> Option<emit::Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(emit::Level::Error),
            LogLevel::Warn => Some(emit::Level::Warn),
            LogLevel::Info => Some(emit::Level::Info),
            LogLevel::Debug => Some(emit::Level::Debug),
        }
    }
}

/// Configure the emit runtime from `OSFS_LOG`.
///
/// Call once at startup; later calls do nothing.
pub fn init_diagnostics() {
    INIT.call_once(|| {
        let raw = std::env::var(LOG_ENV).unwrap_or_default();
        let (level, known) = LogLevel::parse(&raw);

        let Some(min) = level.min_level() else {
            return;
        };

        let rt = emit::setup()
            .emit_to(emit_term::stderr())
            .emit_when(emit::level::min_filter(min))
            .init();

        if !known {
            emit::warn!("Unknown {var} value {raw}, using info", var: LOG_ENV, raw: raw);
        }

        // The process exits without flushing; keep the runtime alive until then
        std::mem::forget(rt);
    });
}

/// Startup and persistence events a user might want to see
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Individual tree and document mutations
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Recoverable problems: fallbacks, skipped records
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Failures that abort an operation
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}

pub use init_diagnostics as init;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_levels() {
        assert_eq!(LogLevel::parse("off"), (LogLevel::Off, true));
        assert_eq!(LogLevel::parse(""), (LogLevel::Off, true));
        assert_eq!(LogLevel::parse("DEBUG"), (LogLevel::Debug, true));
        assert_eq!(LogLevel::parse(" warn "), (LogLevel::Warn, true));
        assert_eq!(LogLevel::parse("verbose"), (LogLevel::Info, false));
    }

    #[test]
    fn test_init_is_idempotent() {
        init_diagnostics();
        init_diagnostics();
    }

    #[test]
    fn test_macros_accept_properties() {
        let path = "root/Home";
        let count = 3_usize;
        log_info!("Loaded {path}", path: path);
        log_debug!("Folder {path} has {count} entries", path: path, count: count);
        log_warn!("Skipped record");
        log_error!("Write failed for {path}", path: path);
    }
}
