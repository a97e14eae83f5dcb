//! End-to-end generation from a metadata document to files on disk.

#![allow(non_snake_case)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wsgen_codegen::{FsSourceSink, WsClientGenerator};
use wsgen_core::{DeclaredParameterNames, GeneratorConfig, ServiceCatalog, TransportFlavor};

const DOCUMENT: &str = include_str!("fixtures/ims_ws.json");

fn generate(config: &GeneratorConfig) -> TempDir {
    let catalog = ServiceCatalog::from_json(DOCUMENT.as_bytes()).unwrap();
    let generator = WsClientGenerator::new(&catalog, config, &DeclaredParameterNames).unwrap();
    let output = TempDir::new().unwrap();
    let mut sink = FsSourceSink::new(output.path());
    generator.generate_all(&mut sink).unwrap();
    output
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

#[test]
fn generate_all___writes_namespace_directories() {
    let output = generate(&GeneratorConfig::default());
    let root = output.path();

    for relative in [
        "com/example/soap/ImsWsSoap.java",
        "com/example/soap/ImsWsSoapAsync.kt",
        "com/example/soap/Result.java",
        "com/example/soap/Configuration.java",
        "com/example/room/model/User.kt",
        "com/example/room/model/Order.kt",
        "com/example/room/dao/UserDao.kt",
        "com/example/room/dao/OrderDao.kt",
        "com/example/room/ImsWsSoapDatabase.kt",
    ] {
        assert!(root.join(relative).is_file(), "missing {relative}");
    }
    assert!(!root.join("com/example/room/model/Audit.kt").exists());
    assert!(!root.join("com/example/room/model/Ims_wsLocator.kt").exists());
}

#[test]
fn generate_all___client_binds_interface_operations() {
    let output = generate(&GeneratorConfig::default());
    let client = read(output.path(), "com/example/soap/ImsWsSoap.java");

    assert!(client.contains("    public Result<User> getUser(int id) {"));
    assert!(client.contains("    public Result<User[]> getUsers() {"));
    assert!(client.contains("    public Result<Integer> countUsers(String filter, int[] groups) {"));
    assert!(client.contains("String methodName = \"GetUser\";"));
    assert!(!client.contains("ping"));
    assert!(!client.contains("createCall"));
}

#[test]
fn generate_all___zero_parameter_method___no_attachments() {
    let output = generate(&GeneratorConfig::default());
    let client = read(output.path(), "com/example/soap/ImsWsSoap.java");

    let start = client.find("getUsers() {").unwrap();
    let end = start + client[start..].find("SoapSerializationEnvelope _envelope").unwrap();
    assert!(!client[start..end].contains("addProperty"));
}

#[test]
fn generate_all___composite_array_return___not_found_when_empty() {
    let output = generate(&GeneratorConfig::default());
    let client = read(output.path(), "com/example/soap/ImsWsSoap.java");

    assert!(client.contains("Resources.NotFoundException(\"getUsers didn't return any value.\")"));
    assert!(client.contains("returnArrayObject[rowIndex] = new User((SoapObject) _ret.getProperty(rowIndex));"));
}

#[test]
fn generate_all___wrapper_forwards_to_client() {
    let output = generate(&GeneratorConfig::default());
    let wrapper = read(output.path(), "com/example/soap/ImsWsSoapAsync.kt");

    assert!(wrapper.contains("    suspend fun countUsers(filter: String, groups: Array<Int>): Result<Int>? {"));
    assert!(wrapper.contains("            imsWsSoap.countUsers(filter, groups.toIntArray())"));
}

#[test]
fn generate_all___entity_and_dao_key_on_id() {
    let output = generate(&GeneratorConfig::default());
    let entity = read(output.path(), "com/example/room/model/User.kt");
    let dao = read(output.path(), "com/example/room/dao/UserDao.kt");

    assert!(entity.contains("    @NonNull @PrimaryKey @ColumnInfo(name = \"id\") val id: Int,\n"));
    assert!(entity.contains("    @ColumnInfo(name = \"name\") val name: String?\n"));
    assert!(!entity.contains("__hashCodeCalc"));
    assert!(dao.contains("fun selectSingleBy(id: Int): LiveData<User>"));
    assert_eq!(dao.matches("fun selectSingleBy").count(), 1);
}

#[test]
fn generate_all___android_transport() {
    let config = GeneratorConfig {
        transport: TransportFlavor::Android,
        ..GeneratorConfig::default()
    };

    let output = generate(&config);
    let client = read(output.path(), "com/example/soap/ImsWsSoap.java");

    assert!(client.contains("import org.ksoap2.transport.HttpTransportSE;"));
}
