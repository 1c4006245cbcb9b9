// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use docfs::{Boot, Coordinator, DocPath, Document, Store};
use tempfile::{tempdir, TempDir};

fn store_in(tmp: &TempDir) -> Store {
    Store::new(tmp.path().join("osinfo.json"))
}

#[test]
fn test_fresh_store_gets_default_installation() {
    let tmp = tempdir().unwrap();
    let coordinator = Coordinator::open(store_in(&tmp));

    assert_eq!(coordinator.boot(), &Boot::Fresh);
    assert!(!coordinator.is_installed());
    assert_eq!(coordinator.home().unwrap().list_names(), vec!["Desktop/"]);

    let text = std::fs::read_to_string(tmp.path().join("osinfo.json")).unwrap();
    assert_eq!(Document::load(&text).unwrap(), Document::default_installation());
}

#[test]
fn test_unparseable_store_is_reset() {
    let tmp = tempdir().unwrap();
    std::fs::write(tmp.path().join("osinfo.json"), "{ not json").unwrap();

    let coordinator = Coordinator::open(store_in(&tmp));
    assert!(matches!(coordinator.boot(), Boot::Reset(_)));
    assert_eq!(
        coordinator.boot().to_string(),
        "Unable to parse os info data, erasing to default installation..."
    );

    let reopened = Coordinator::open(store_in(&tmp));
    assert_eq!(reopened.boot(), &Boot::Restored);
    assert_eq!(reopened.document(), &Document::default_installation());
}

#[test]
fn test_created_folder_survives_reload() {
    let tmp = tempdir().unwrap();
    let mut coordinator = Coordinator::open(store_in(&tmp));
    let home = coordinator.home().unwrap();
    coordinator.create_folder(&home, "Projects").unwrap();
    drop(coordinator);

    let reopened = Coordinator::open(store_in(&tmp));
    let home = reopened.home().unwrap();
    assert_eq!(home.list_names(), vec!["Desktop/", "Projects/"]);
    let record = reopened
        .document()
        .locate_folder(&DocPath::of(home.dir()))
        .unwrap();
    let names: Vec<_> = record.folders.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Desktop", "Projects"]);
}

#[test]
fn test_edited_content_survives_reload() {
    let tmp = tempdir().unwrap();
    let mut coordinator = Coordinator::open(store_in(&tmp));
    let home = coordinator.home().unwrap();

    let file = coordinator.open_file(&home, "Desktop/todo.txt").unwrap();
    coordinator
        .save_file_contents(&file, "milk\neggs\n")
        .unwrap();
    assert_eq!(file.content(), "milk\neggs\n");
    drop(coordinator);

    let reopened = Coordinator::open(store_in(&tmp));
    let home = reopened.home().unwrap();
    assert_eq!(
        reopened.read_file(&home, "Desktop/todo.txt").unwrap(),
        "milk\neggs\n"
    );
}

#[test]
fn test_open_file_reuses_existing() {
    let tmp = tempdir().unwrap();
    let mut coordinator = Coordinator::open(store_in(&tmp));
    let desktop = coordinator.home().unwrap().get_folder("Desktop").unwrap();

    let first = coordinator.open_file(&desktop, "notes.md").unwrap();
    let second = coordinator.open_file(&desktop, "~/Desktop/notes.md").unwrap();
    assert!(first.ptr_eq(&second));
    assert_eq!(desktop.list_names(), vec!["notes.md"]);
    assert!(coordinator.open_file(&desktop, "Missing/notes.md").is_err());
}

#[test]
fn test_open_file_matches_decoded_name() {
    let tmp = tempdir().unwrap();
    let mut coordinator = Coordinator::open(store_in(&tmp));
    let home = coordinator.home().unwrap();

    let existing = coordinator.open_file(&home, "ab.c").unwrap();
    let reopened = coordinator.open_file(&home, "a.b.c").unwrap();
    assert!(existing.ptr_eq(&reopened));
    assert_eq!(home.list_names(), vec!["Desktop/", "ab.c"]);
}

#[test]
fn test_remove_folder_removes_descendants() {
    let tmp = tempdir().unwrap();
    let mut coordinator = Coordinator::open(store_in(&tmp));
    let home = coordinator.home().unwrap();
    let desktop = home.get_folder("Desktop").unwrap();
    let deep = coordinator.create_folder(&desktop, "a").unwrap();
    coordinator
        .create_file_with_contents(&deep, "leaf.txt", "x")
        .unwrap();

    coordinator.remove_folder(&home, "Desktop").unwrap();
    assert!(home.get_folder("Desktop").is_none());
    assert!(coordinator
        .document()
        .locate_folder(&DocPath::from_absolute("root/Home/Desktop").unwrap())
        .is_none());
    drop(coordinator);

    let reopened = Coordinator::open(store_in(&tmp));
    assert!(reopened.home().unwrap().list_names().is_empty());
}

#[test]
fn test_duplicate_records_are_dropped_on_load() {
    let tmp = tempdir().unwrap();
    let text = r#"{
  "installed": true,
  "root": [
    {
      "name": "Home",
      "folders": [
        { "name": "Desktop", "folders": [], "files": [] },
        { "name": "Desktop", "folders": [], "files": [] }
      ],
      "files": [
        { "name": "a", "type": "txt", "contents": "one" },
        { "name": "a", "type": "txt", "contents": "two" }
      ]
    }
  ],
  "username": "ada"
}"#;
    std::fs::write(tmp.path().join("osinfo.json"), text).unwrap();

    let coordinator = Coordinator::open(store_in(&tmp));
    assert_eq!(coordinator.boot(), &Boot::Restored);
    assert_eq!(coordinator.username(), "ada");
    assert_eq!(
        coordinator.home().unwrap().list_names(),
        vec!["Desktop/", "a.txt"]
    );

    let home = &coordinator.document().root[0];
    assert_eq!(home.folders.len(), 1);
    assert_eq!(home.files.len(), 1);
    assert_eq!(home.files[0].contents, "one");
}

#[test]
fn test_complete_installation_persists() {
    let tmp = tempdir().unwrap();
    let mut coordinator = Coordinator::open(store_in(&tmp));
    coordinator.complete_installation("grace").unwrap();
    drop(coordinator);

    let reopened = Coordinator::open(store_in(&tmp));
    assert!(reopened.is_installed());
    assert_eq!(reopened.username(), "grace");
}

#[test]
fn test_every_mutation_is_flushed() {
    let tmp = tempdir().unwrap();
    let mut coordinator = Coordinator::open(store_in(&tmp));
    let home = coordinator.home().unwrap();
    let read = || {
        let text = std::fs::read_to_string(tmp.path().join("osinfo.json")).unwrap();
        Document::load(&text).unwrap()
    };

    coordinator.create_file(&home, "a.txt").unwrap();
    assert_eq!(read(), *coordinator.document());
    coordinator.rename_file(&home, "a.txt", "b.md").unwrap();
    assert_eq!(read(), *coordinator.document());
    coordinator.rename_folder(&home, "Desktop", "Stuff").unwrap();
    assert_eq!(read(), *coordinator.document());
    coordinator.remove_file(&home, "b.md").unwrap();
    assert_eq!(read(), *coordinator.document());
    assert_eq!(home.list_names(), vec!["Stuff/"]);
}
