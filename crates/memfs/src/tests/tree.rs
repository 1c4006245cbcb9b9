use crate::error::Error;
use crate::fs::FS;

fn home_fs() -> FS {
    let fs = FS::new();
    let home = fs.root().create_folder("Home").unwrap();
    home.create_folder("Desktop").unwrap();
    fs.root().create_folder("packages").unwrap();
    fs
}

#[test]
fn test_create_folder_twice() {
    let fs = home_fs();
    let home = fs.home().unwrap();

    home.create_folder("X").unwrap();
    let result = home.create_folder("X");
    assert_eq!(result.err(), Some(Error::duplicate_folder("X")));
    assert_eq!(home.dir().folders().len(), 2);
}

#[test]
fn test_same_name_in_different_parents() {
    let fs = home_fs();
    let home = fs.home().unwrap();
    let desktop = home.get_folder("Desktop").unwrap();

    home.create_folder("Projects").unwrap();
    desktop.create_folder("Projects").unwrap();
    assert_eq!(
        desktop.get_folder("Projects").unwrap().absolute_path(),
        "root/Home/Desktop/Projects"
    );
}

#[test]
fn test_create_files() {
    let fs = home_fs();
    let home = fs.home().unwrap();

    home.create_file("note.txt").unwrap();
    assert_eq!(
        home.create_file("note.txt").err(),
        Some(Error::duplicate_file("note.txt"))
    );
    home.create_file("note.md").unwrap();
    assert_eq!(home.list_names(), vec!["Desktop/", "note.txt", "note.md"]);
}

#[test]
fn test_folder_and_file_may_share_a_name() {
    let fs = home_fs();
    let home = fs.home().unwrap();

    home.create_folder("build").unwrap();
    home.create_file("build").unwrap();
    assert_eq!(home.list_names(), vec!["Desktop/", "build/", "build"]);
}

#[test]
fn test_remove_folder_discards_subtree() {
    let fs = home_fs();
    let home = fs.home().unwrap();
    let desktop = home.get_folder("Desktop").unwrap();
    let deep = desktop.create_folder("a").unwrap().create_folder("b").unwrap();
    let file = deep.create_file("leaf.txt").unwrap();
    drop(desktop);
    drop(deep);

    home.remove_folder("Desktop").unwrap();
    assert!(home.get_folder("Desktop").is_none());
    assert!(home.change_directory("Desktop/a/b").is_err());
    // Nothing keeps the detached folders alive
    assert!(file.parent().is_none());
}

#[test]
fn test_remove_file() {
    let fs = home_fs();
    let home = fs.home().unwrap();
    home.create_file("a.txt").unwrap();

    assert_eq!(home.remove_file("a"), Err(Error::file_not_found("a")));
    home.remove_file("a.txt").unwrap();
    assert!(home.get_file("a.txt").is_none());
}

#[test]
fn test_malformed_names() {
    let fs = home_fs();
    let home = fs.home().unwrap();

    assert_eq!(
        home.create_folder("a/b").err(),
        Some(Error::malformed_path("a/b"))
    );
    assert!(home.create_folder("").is_err());
    assert!(home.create_file("...").is_err());
    assert!(home.create_file("x/y.txt").is_err());
    assert_eq!(home.list_names(), vec!["Desktop/"]);
}

#[test]
fn test_file_content() {
    let fs = home_fs();
    let home = fs.home().unwrap();
    let file = home.create_file("todo.txt").unwrap();
    assert_eq!(file.content(), "");

    file.set_content("milk\neggs\n");
    assert_eq!(home.get_file("todo.txt").unwrap().content(), "milk\neggs\n");
}
