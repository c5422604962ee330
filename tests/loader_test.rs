use std::fs;

use templacat::error::Error;
use templacat::loader::{FileSystemLoader, TemplateLoader};
use templacat::TemplateEngine;
use tempfile::TempDir;

#[test]
fn test_file_system_loader_reads_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("a.tpl");
    fs::write(&path, "contents").unwrap();

    let loader = FileSystemLoader::new();
    assert_eq!(loader.read(&path).unwrap(), Some("contents".to_string()));
}

#[test]
fn test_file_system_loader_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let loader = FileSystemLoader::new();
    assert_eq!(loader.read(&temp_dir.path().join("nope.tpl")).unwrap(), None);
}

#[test]
fn test_file_system_loader_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let mut engine = TemplateEngine::new(temp_dir.path().join("no-such-dir"), "tpl");
    assert!(!engine.load_template("page", None).unwrap());
}

#[test]
fn test_file_system_loader_directory_is_not_a_template() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("page.tpl")).unwrap();

    let mut engine = TemplateEngine::new(temp_dir.path(), "tpl");
    assert!(!engine.load_template("page", None).unwrap());
    assert_eq!(engine.buffer(), "");
}

#[test]
fn test_unreadable_template_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("binary.tpl"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();

    let mut engine = TemplateEngine::new(temp_dir.path(), "tpl");
    match engine.load_template("binary", None) {
        Err(Error::ReadError { path, .. }) => assert!(path.ends_with("binary.tpl")),
        other => panic!("Expected ReadError, got {:?}", other),
    }
    assert_eq!(engine.buffer(), "");
}

#[test]
fn test_directory_that_is_a_file_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let not_a_dir = temp_dir.path().join("template");
    fs::write(&not_a_dir, "plain file").unwrap();

    let mut engine = TemplateEngine::new(&not_a_dir, "tpl");
    assert!(!engine.load_template("page", None).unwrap());
    assert!(!engine.load_template("page", Some("slot")).unwrap());
    assert_eq!(engine.buffer(), "");
    assert_eq!(engine.variables().count(), 0);
}
