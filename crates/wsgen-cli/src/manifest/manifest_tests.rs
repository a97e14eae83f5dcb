#![allow(non_snake_case)]

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

// Manifest parsing tests

#[test]
fn Manifest___parse___reads_generator_table() {
    let toml = r#"
[generator]
transport = "android"
database_version = 3
ignored_fields = ["typeDesc", "serialVersionUID"]
"#;

    let manifest = Manifest::parse(toml).unwrap();

    assert_eq!(manifest.generator.transport, TransportFlavor::Android);
    assert_eq!(manifest.generator.database_version, 3);
    assert!(manifest.generator.is_ignored_field("serialVersionUID"));
    assert!(!manifest.generator.is_ignored_field("__equalsCalc"));
}

#[test]
fn Manifest___parse___empty_manifest_uses_defaults() {
    let manifest = Manifest::parse("").unwrap();

    assert_eq!(manifest.generator, GeneratorConfig::default());
}

#[test]
fn Manifest___parse___partial_table_keeps_other_defaults() {
    let toml = r#"
[generator]
soap_namespace_suffix = ".client"
"#;

    let manifest = Manifest::parse(toml).unwrap();

    assert_eq!(manifest.generator.soap_namespace("com.example"), "com.example.client");
    assert_eq!(manifest.generator.room_namespace("com.example"), "com.example.room");
}

#[test]
fn Manifest___parse___unknown_transport___fails() {
    let toml = r#"
[generator]
transport = "carrier-pigeon"
"#;

    assert!(Manifest::parse(toml).is_err());
}

// Configuration resolution tests

#[test]
fn resolve_config___explicit_file___loaded() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[generator]\ndatabase_version = 7").unwrap();

    let config = resolve_config(Some(file.path()), None).unwrap();

    assert_eq!(config.database_version, 7);
}

#[test]
fn resolve_config___transport_flag___overrides_manifest() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[generator]\ntransport = \"j2me\"").unwrap();

    let config = resolve_config(Some(file.path()), Some("Android")).unwrap();

    assert_eq!(config.transport, TransportFlavor::Android);
}

#[test]
fn resolve_config___invalid_transport_flag___fails() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[generator]").unwrap();

    let result = resolve_config(Some(file.path()), Some("bluetooth"));

    assert!(result.is_err());
}

#[test]
fn resolve_config___zero_database_version___fails_validation() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[generator]\ndatabase_version = 0").unwrap();

    let error = resolve_config(Some(file.path()), None).unwrap_err();

    assert!(format!("{error:#}").contains("database_version"));
}

#[test]
fn resolve_config___missing_file___fails_with_path() {
    let error = resolve_config(Some(Path::new("/nonexistent/wsgen.toml")), None).unwrap_err();

    assert!(error.to_string().contains("Failed to read manifest"));
}
