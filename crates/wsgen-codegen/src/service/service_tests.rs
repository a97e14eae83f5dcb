#![allow(non_snake_case)]

use super::*;
use wsgen_core::{DeclaredParameterNames, GenerationError, QualifiedName, TypeRef};

fn user() -> TypeRef {
    TypeRef::named("com.example.User")
}

fn interface() -> TypeDescriptor {
    TypeDescriptor::new("com.example", "Ims_wsSoap")
        .with_method(MethodDescriptor::new("getUser", user()).with_parameter("id", TypeRef::named("int")))
        .with_method(MethodDescriptor::new("ping", TypeRef::void()))
}

fn stub() -> TypeDescriptor {
    TypeDescriptor::new("com.example", "Ims_wsSoapStub")
        .with_supertype("org.apache.axis.client.Stub")
        .with_method(MethodDescriptor::new("getUser", user()).with_parameter("id", TypeRef::named("int")))
        .with_method(MethodDescriptor::new("ping", TypeRef::void()))
        .with_method(MethodDescriptor::new("createCall", TypeRef::named("org.apache.axis.client.Call")))
        .with_qualified_name(QualifiedName::new("http://tempuri.org/", "User"))
        .with_qualified_name(QualifiedName::new("http://other.org/", "Order"))
}

fn bind<'a>(
    interface: &'a TypeDescriptor,
    stub: &'a TypeDescriptor,
    operations: &[OperationMetadata],
) -> GenerationResult<ServiceBinding<'a>> {
    bind_service(
        interface,
        stub,
        operations,
        &DeclaredParameterNames,
        &GeneratorConfig::default(),
    )
}

#[test]
fn bind_service___selects_shared_non_void_methods_only() {
    let (interface, stub) = (interface(), stub());

    let binding = bind(&interface, &stub, &[]).unwrap();

    let names: Vec<&str> = binding.methods.iter().map(|m| m.method.name.as_str()).collect();
    assert_eq!(names, vec!["getUser"]);
}

#[test]
fn bind_service___derives_client_name_and_namespace() {
    let (interface, stub) = (interface(), stub());

    let binding = bind(&interface, &stub, &[]).unwrap();

    assert_eq!(binding.client_name, "ImsWsSoap");
    assert_eq!(binding.namespace, "com.example.soap");
}

#[test]
fn bind_service___uses_first_cached_qualified_name() {
    let (interface, stub) = (interface(), stub());

    let binding = bind(&interface, &stub, &[]).unwrap();

    assert_eq!(binding.methods[0].wire_namespace, "http://tempuri.org/");
}

#[test]
fn bind_service___stringifies_primitive_and_copies_composite_return() {
    let (interface, stub) = (interface(), stub());

    let binding = bind(&interface, &stub, &[]).unwrap();

    let method = &binding.methods[0];
    assert_eq!(method.outbound, vec![OutboundRule::Stringify]);
    assert_eq!(
        method.inbound,
        InboundRule::CopyProperties {
            type_name: "User".into()
        }
    );
}

#[test]
fn bind_service___operation_name_matched_ignoring_case() {
    let (interface, stub) = (interface(), stub());

    let binding = bind(&interface, &stub, &[OperationMetadata::new("GetUser")]).unwrap();

    assert_eq!(binding.methods[0].operation_name, "GetUser");
}

#[test]
fn bind_service___missing_parameter_names___fails() {
    let interface = interface();
    let stub = TypeDescriptor::new("com.example", "Ims_wsSoapStub").with_method(
        MethodDescriptor::new("getUser", user())
            .with_parameter("id", TypeRef::named("int"))
            .without_parameter_names(),
    );

    let result = bind(&interface, &stub, &[]);

    assert!(matches!(
        result,
        Err(GenerationError::ParameterNamesUnavailable { .. })
    ));
}

#[test]
fn bind_service___void_method_without_names___is_skipped_before_introspection() {
    let interface = interface();
    let stub = TypeDescriptor::new("com.example", "Ims_wsSoapStub")
        .with_method(MethodDescriptor::new("ping", TypeRef::void()).without_parameter_names());

    let binding = bind(&interface, &stub, &[]).unwrap();

    assert!(binding.methods.is_empty());
}

#[test]
fn resolve_wire_namespace___no_cached_names___empty() {
    let stub = TypeDescriptor::new("com.example", "Ims_wsSoapStub");

    assert_eq!(resolve_wire_namespace(&stub), "");
}

#[test]
fn resolve_operation_name___no_match___falls_back_to_method_name() {
    let operations = [OperationMetadata::new("GetOrder")];

    assert_eq!(resolve_operation_name("getUser", &operations), "getUser");
}
