#![allow(non_snake_case)]

use super::*;
use tempfile::TempDir;

fn owner() -> TypeDescriptor {
    TypeDescriptor::new("com.example", "User")
}

fn unit<'a>(owner: &'a TypeDescriptor, content: &'a str) -> SourceUnit<'a> {
    SourceUnit {
        owner,
        content,
        file_name: "UserDao",
        namespace: "com.example.room.dao",
        extension: "kt",
    }
}

#[test]
fn SourceUnit___relative_path___maps_namespace_to_directories() {
    let owner = owner();

    let path = unit(&owner, "").relative_path();

    assert_eq!(path, PathBuf::from("com/example/room/dao/UserDao.kt"));
}

#[test]
fn SourceUnit___empty_namespace___file_at_root() {
    let owner = owner();
    let unit = SourceUnit {
        namespace: "",
        ..unit(&owner, "")
    };

    assert_eq!(unit.relative_path(), PathBuf::from("UserDao.kt"));
}

// FsSourceSink tests

#[test]
fn FsSourceSink___persist___creates_directories_and_writes() {
    let temp = TempDir::new().unwrap();
    let owner = owner();
    let mut sink = FsSourceSink::new(temp.path());

    sink.persist(&unit(&owner, "interface UserDao\n")).unwrap();

    let path = temp.path().join("com/example/room/dao/UserDao.kt");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "interface UserDao\n");
    assert_eq!(sink.written(), &[path]);
    assert_eq!(sink.root(), temp.path());
}

#[test]
fn FsSourceSink___persist_twice___overwrites() {
    let temp = TempDir::new().unwrap();
    let owner = owner();
    let mut sink = FsSourceSink::new(temp.path());

    sink.persist(&unit(&owner, "old")).unwrap();
    sink.persist(&unit(&owner, "new")).unwrap();

    let content = std::fs::read_to_string(temp.path().join("com/example/room/dao/UserDao.kt"))
        .unwrap();
    assert_eq!(content, "new");
}

#[test]
fn FsSourceSink___root_is_a_file___fails_with_io() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    let owner = owner();
    let mut sink = FsSourceSink::new(&blocker);

    let result = sink.persist(&unit(&owner, "x"));

    assert!(matches!(result, Err(wsgen_core::GenerationError::Io(_))));
}

// MemorySink tests

#[test]
fn MemorySink___persist___stores_by_relative_path() {
    let owner = owner();
    let mut sink = MemorySink::new();

    sink.persist(&unit(&owner, "body")).unwrap();

    assert_eq!(sink.get("com/example/room/dao/UserDao.kt"), Some("body"));
    assert_eq!(
        sink.source("com/example/room/dao/UserDao.kt").unwrap().owner,
        "com.example.User"
    );
}

#[test]
fn MemorySink___same_path_twice___keeps_latest() {
    let owner = owner();
    let mut sink = MemorySink::new();

    sink.persist(&unit(&owner, "first")).unwrap();
    sink.persist(&unit(&owner, "second")).unwrap();

    assert_eq!(sink.len(), 1);
    assert_eq!(sink.get("com/example/room/dao/UserDao.kt"), Some("second"));
}
