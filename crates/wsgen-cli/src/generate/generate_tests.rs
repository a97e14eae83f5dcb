#![allow(non_snake_case)]

use super::*;
use std::fs;
use tempfile::TempDir;

const DOCUMENT: &str = r#"{
    "service": { "interface": "org.ajn.Ims_wsSoap", "stub": "org.ajn.Ims_wsSoapStub" },
    "operations": [{ "name": "GetUser" }],
    "types": [
        {
            "name": "Ims_wsSoap",
            "namespace": "org.ajn",
            "methods": [{ "name": "getUser", "return_type": "org.ajn.User", "parameter_types": ["int"], "parameter_names": ["id"] }]
        },
        {
            "name": "Ims_wsSoapStub",
            "namespace": "org.ajn",
            "supertypes": ["org.apache.axis.client.Stub"],
            "methods": [{ "name": "getUser", "return_type": "org.ajn.User", "parameter_types": ["int"] }],
            "qualified_names": [{ "namespace_uri": "http://tempuri.org/", "local_part": "User" }]
        },
        {
            "name": "User",
            "namespace": "org.ajn",
            "fields": [{ "name": "id", "type": "int" }, { "name": "name", "type": "java.lang.String" }]
        }
    ]
}"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("metadata.json"), DOCUMENT).unwrap();
        fs::write(dir.path().join("wsgen.toml"), "[generator]\n").unwrap();
        Self { dir }
    }

    fn options(&self) -> GenerateOptions {
        GenerateOptions {
            metadata: self.dir.path().join("metadata.json"),
            output: self.dir.path().join("out"),
            config: Some(self.dir.path().join("wsgen.toml")),
            transport: None,
            synthesize_parameter_names: true,
            dry_run: false,
        }
    }

    fn output(&self, relative: &str) -> PathBuf {
        self.dir.path().join("out").join(relative)
    }
}

#[test]
fn run___writes_sources_under_output() {
    let workspace = Workspace::new();

    let summary = run(&workspace.options()).unwrap();

    assert_eq!(summary.classes.len(), 5);
    assert!(workspace.output("org/ajn/soap/ImsWsSoap.java").is_file());
    assert!(workspace.output("org/ajn/soap/ImsWsSoapAsync.kt").is_file());
    assert!(workspace.output("org/ajn/room/model/User.kt").is_file());
    assert!(workspace.output("org/ajn/room/dao/UserDao.kt").is_file());
    assert!(workspace.output("org/ajn/room/ImsWsSoapDatabase.kt").is_file());
}

#[test]
fn run___dry_run___writes_nothing() {
    let workspace = Workspace::new();
    let options = GenerateOptions {
        dry_run: true,
        ..workspace.options()
    };

    let summary = run(&options).unwrap();

    assert_eq!(summary.classes.len(), 5);
    assert!(!workspace.output("").exists());
}

#[test]
fn run___transport_flag___selects_android_transport() {
    let workspace = Workspace::new();
    let options = GenerateOptions {
        transport: Some("android".to_string()),
        ..workspace.options()
    };

    run(&options).unwrap();

    let client = fs::read_to_string(workspace.output("org/ajn/soap/ImsWsSoap.java")).unwrap();
    assert!(client.contains("HttpTransportSE _ht"));
}

#[test]
fn run___declared_names_only___missing_names_fail() {
    let workspace = Workspace::new();
    let options = GenerateOptions {
        synthesize_parameter_names: false,
        ..workspace.options()
    };

    let error = run(&options).unwrap_err();

    assert!(format!("{error:#}").contains("getUser"));
}

#[test]
fn run___missing_metadata___reports_path() {
    let workspace = Workspace::new();
    let options = GenerateOptions {
        metadata: workspace.dir.path().join("absent.json"),
        ..workspace.options()
    };

    let error = run(&options).unwrap_err();

    assert!(error.to_string().contains("absent.json"));
}

#[test]
fn check___valid_metadata___succeeds_without_output() {
    let workspace = Workspace::new();
    let options = workspace.options();
    let fixed = DOCUMENT.replace(
        r#""parameter_types": ["int"] }]"#,
        r#""parameter_types": ["int"], "parameter_names": ["id"] }]"#,
    );
    fs::write(&options.metadata, fixed).unwrap();

    check(&options.metadata, options.config.as_deref()).unwrap();

    assert!(!workspace.output("").exists());
}

#[test]
fn introspector___flag_selects_synthetic_names() {
    use wsgen_core::{MethodDescriptor, TypeDescriptor, TypeRef};

    let owner = TypeDescriptor::new("org.ajn", "Ims_wsSoapStub");
    let method = MethodDescriptor::new("getUser", TypeRef::named("org.ajn.User"))
        .with_parameter("id", TypeRef::named("int"))
        .without_parameter_names();

    assert!(introspector(false).parameters(&owner, &method).is_err());
    assert_eq!(introspector(true).parameters(&owner, &method).unwrap()[0].name, "arg0");
}
