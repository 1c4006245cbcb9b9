// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::Error;
use crate::error::Result;

pub const SEPARATOR: char = '/';
pub const HOME_SEGMENT: &str = "~";
pub const PARENT_SEGMENT: &str = "..";

/// Splits a path expression on `/`, ignoring trailing empty segments.
/// Empty segments elsewhere are kept and will not match any folder.
#[must_use]
pub fn split(expr: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = expr.split(SEPARATOR).collect();
    while segments.last().is_some_and(|s| s.is_empty()) {
        _ = segments.pop();
    }
    segments
}

/// Splits a path into its folder part and final name
pub fn split_last(expr: &str) -> Result<(Vec<&str>, &str)> {
    let mut segments = split(expr);
    let last = segments.pop().ok_or_else(Error::empty_path)?;
    Ok((segments, last))
}

/// Folder names must be addressable by a path afterwards
pub fn validate_folder_name(name: &str) -> Result<()> {
    if name.is_empty()
        || name.contains(SEPARATOR)
        || name == PARENT_SEGMENT
        || name == HOME_SEGMENT
    {
        return Err(Error::malformed_path(name));
    }
    Ok(())
}

pub fn validate_file_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains(SEPARATOR) {
        return Err(Error::malformed_path(name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        assert_eq!(split("a/b/c"), vec!["a", "b", "c"]);
        assert_eq!(split("a/b/"), vec!["a", "b"]);
        assert_eq!(split("~/Desktop"), vec!["~", "Desktop"]);
        assert_eq!(split("a//b"), vec!["a", "", "b"]);
        assert!(split("").is_empty());
        assert!(split("/").is_empty());
    }

    #[test]
    fn test_split_last() {
        let (dirs, name) = split_last("../docs/a.txt").unwrap();
        assert_eq!(dirs, vec!["..", "docs"]);
        assert_eq!(name, "a.txt");

        let (dirs, name) = split_last("a.txt").unwrap();
        assert!(dirs.is_empty());
        assert_eq!(name, "a.txt");

        assert_eq!(split_last(""), Err(Error::empty_path()));
    }

    #[test]
    fn test_validate() {
        assert!(validate_folder_name("Projects").is_ok());
        assert!(validate_folder_name(".hidden").is_ok());
        assert_eq!(validate_folder_name(""), Err(Error::malformed_path("")));
        assert_eq!(validate_folder_name("a/b"), Err(Error::malformed_path("a/b")));
        assert!(validate_folder_name("..").is_err());
        assert!(validate_folder_name("~").is_err());
        assert!(validate_file_name("a.txt").is_ok());
        assert!(validate_file_name("x/a.txt").is_err());
    }
}
