// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Splitting raw file names into a base name and an extension.
//!
//! Decoding drops the separators between every segment but the last, so
//! `"a.b.c"` decodes to `("ab", "c")` and does not round-trip. Stored
//! documents depend on this, so it is kept as is.

pub const EXTENSION_SEPARATOR: char = '.';

/// Splits `raw` into `(base, extension)`.
///
/// Trailing empty segments are ignored: `"a."` is `("a", "")`. A name
/// with no separator has an empty extension.
#[must_use]
pub fn decode(raw: &str) -> (String, String) {
    let mut segments: Vec<&str> = raw.split(EXTENSION_SEPARATOR).collect();
    while segments.last().is_some_and(|s| s.is_empty()) {
        _ = segments.pop();
    }

    match segments.split_last() {
        None => (String::new(), String::new()),
        Some((only, [])) => ((*only).to_string(), String::new()),
        Some((extension, base)) => (base.concat(), (*extension).to_string()),
    }
}

/// Joins a base name and extension into a display name
#[must_use]
pub fn encode(base: &str, extension: &str) -> String {
    if extension.is_empty() {
        base.to_string()
    } else {
        format!("{}{}{}", base, EXTENSION_SEPARATOR, extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(base: &str, extension: &str) -> (String, String) {
        (base.to_string(), extension.to_string())
    }

    #[test]
    fn test_no_separator() {
        for raw in ["README", "Makefile", "x", "with space"] {
            assert_eq!(decode(raw), pair(raw, ""));
            let (base, extension) = decode(raw);
            assert_eq!(encode(&base, &extension), raw);
        }
    }

    #[test]
    fn test_single_separator() {
        assert_eq!(decode("a.b"), pair("a", "b"));
        assert_eq!(decode("note.txt"), pair("note", "txt"));
        assert_eq!(encode("note", "txt"), "note.txt");
    }

    #[test]
    fn test_multiple_separators_collapse_base() {
        assert_eq!(decode("a.b.c"), pair("ab", "c"));
        assert_eq!(decode("archive.tar.gz"), pair("archivetar", "gz"));
        assert_eq!(encode("ab", "c"), "ab.c");
    }

    #[test]
    fn test_trailing_and_leading_separators() {
        assert_eq!(decode("a."), pair("a", ""));
        assert_eq!(decode("a.b.."), pair("a", "b"));
        assert_eq!(decode(".bashrc"), pair("", "bashrc"));
        assert_eq!(decode("a..b"), pair("a", "b"));
    }

    #[test]
    fn test_degenerate_names() {
        assert_eq!(decode(""), pair("", ""));
        assert_eq!(decode("..."), pair("", ""));
    }
}
