#![allow(non_snake_case)]

use super::*;

fn stub() -> TypeDescriptor {
    TypeDescriptor::new("com.example", "Ims_wsSoapStub")
}

// DeclaredParameterNames tests

#[test]
fn DeclaredParameterNames___recorded_names___pairs_in_order() {
    let method = MethodDescriptor::new("find", TypeRef::string())
        .with_parameter("id", TypeRef::named("int"))
        .with_parameter("name", TypeRef::string());

    let params = DeclaredParameterNames.parameters(&stub(), &method).unwrap();

    assert_eq!(
        params,
        vec![
            Parameter::new("id", TypeRef::named("int")),
            Parameter::new("name", TypeRef::string()),
        ]
    );
}

#[test]
fn DeclaredParameterNames___zero_parameters___returns_empty() {
    let method = MethodDescriptor::new("ping", TypeRef::string());

    let params = DeclaredParameterNames.parameters(&stub(), &method).unwrap();

    assert!(params.is_empty());
}

#[test]
fn DeclaredParameterNames___names_missing___fails_with_owner() {
    let method = MethodDescriptor::new("find", TypeRef::string())
        .with_parameter("id", TypeRef::named("int"))
        .without_parameter_names();

    let result = DeclaredParameterNames.parameters(&stub(), &method);

    match result {
        Err(GenerationError::ParameterNamesUnavailable { owner, method }) => {
            assert_eq!(owner, "com.example.Ims_wsSoapStub");
            assert_eq!(method, "find");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn DeclaredParameterNames___count_mismatch___fails() {
    let mut method = MethodDescriptor::new("find", TypeRef::string())
        .with_parameter("id", TypeRef::named("int"));
    method.parameter_types.push(TypeRef::named("long"));

    let result = DeclaredParameterNames.parameters(&stub(), &method);

    assert!(matches!(
        result,
        Err(GenerationError::ParameterCountMismatch {
            names: 1,
            types: 2,
            ..
        })
    ));
}

#[test]
fn DeclaredParameterNames___blank_name___fails_with_introspection() {
    let method =
        MethodDescriptor::new("find", TypeRef::string()).with_parameter(" ", TypeRef::named("int"));

    let result = DeclaredParameterNames.parameters(&stub(), &method);

    assert!(matches!(result, Err(GenerationError::Introspection(_))));
}

// SyntheticParameterNames tests

#[test]
fn SyntheticParameterNames___names_missing___uses_positional_names() {
    let method = MethodDescriptor::new("find", TypeRef::string())
        .with_parameter("ignored", TypeRef::named("int"))
        .with_parameter("ignored", TypeRef::string())
        .without_parameter_names();

    let params = SyntheticParameterNames.parameters(&stub(), &method).unwrap();

    let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["arg0", "arg1"]);
}

#[test]
fn SyntheticParameterNames___names_recorded___keeps_them() {
    let method =
        MethodDescriptor::new("find", TypeRef::string()).with_parameter("id", TypeRef::named("int"));

    let params = SyntheticParameterNames.parameters(&stub(), &method).unwrap();

    assert_eq!(params[0].name, "id");
}
