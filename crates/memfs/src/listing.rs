// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Listing utilities for displaying a folder's contents.
//!
//! Folders always come before files, and both keep insertion order.
//!
//! ```
//! use memfs::FS;
//!
//! let fs = FS::new();
//! let home = fs.root().create_folder("Home").unwrap();
//! home.create_folder("Desktop").unwrap();
//! home.create_file("todo.txt").unwrap();
//!
//! assert_eq!(home.list_names(), vec!["Desktop/", "todo.txt"]);
//! assert_eq!(home.print_tree(), "Home/\n  Desktop/\n  todo.txt\n");
//! ```

use crate::dir;

const INDENT: &str = "  ";

/// Folder names get a trailing `/`
#[must_use]
pub fn folder_label(folder: &dir::Handle) -> String {
    format!("{}/", folder.name())
}

/// The immediate children of `folder`
#[must_use]
pub fn list_names(folder: &dir::Handle) -> Vec<String> {
    folder
        .folders()
        .iter()
        .map(folder_label)
        .chain(folder.files().iter().map(|f| f.display_name()))
        .collect()
}

/// Recursive listing, one entry per line, two spaces per level.
///
/// Each folder's files are indented one level below the folder, at the
/// same depth as its subfolders. Older listings printed files at the
/// folder's own depth, which made them read as the folder's siblings.
#[must_use]
pub fn print_tree(folder: &dir::Handle) -> String {
    let mut output = String::new();
    format_folder(&mut output, folder, 0);
    output
}

fn format_folder(output: &mut String, folder: &dir::Handle, depth: usize) {
    output.push_str(&INDENT.repeat(depth));
    output.push_str(&folder_label(folder));
    output.push('\n');

    for child in folder.folders() {
        format_folder(output, &child, depth + 1);
    }
    for file in folder.files() {
        output.push_str(&INDENT.repeat(depth + 1));
        output.push_str(&file.display_name());
        output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_names_folders_first() {
        let root = dir::Handle::new_root();
        let _ = root.create_file("b.txt").unwrap();
        let _ = root.create_folder("z").unwrap();
        let _ = root.create_file("a").unwrap();
        let _ = root.create_folder("y").unwrap();
        assert_eq!(list_names(&root), vec!["z/", "y/", "b.txt", "a"]);
    }

    #[test]
    fn test_print_tree_nested() {
        let root = dir::Handle::new_root();
        let home = root.create_folder("Home").unwrap();
        let desktop = home.create_folder("Desktop").unwrap();
        let _ = desktop.create_file("photo.png").unwrap();
        let _ = home.create_file("notes.md").unwrap();
        let _ = root.create_folder("packages").unwrap();

        let expected = "\
root/
  Home/
    Desktop/
      photo.png
    notes.md
  packages/
";
        assert_eq!(print_tree(&root), expected);
    }

    #[test]
    fn test_print_tree_empty() {
        let root = dir::Handle::new_root();
        assert_eq!(print_tree(&root), "root/\n");
        assert!(list_names(&root).is_empty());
    }
}
