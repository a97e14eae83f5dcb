//! Service method binding shared by the synchronous and asynchronous clients
//!
//! Both RPC emitters consume the same [`ServiceBinding`], so method selection,
//! wire namespace and operation name resolution cannot drift between them.

use crate::marshal::{InboundRule, OutboundRule};
use crate::naming::client_class_name;
use tracing::{debug, warn};
use wsgen_core::{
    GenerationResult, GeneratorConfig, MethodDescriptor, OperationMetadata, Parameter,
    ParameterIntrospector, TypeDescriptor,
};

/// One stub method ready for emission
#[derive(Debug, Clone)]
pub struct BoundMethod<'a> {
    pub method: &'a MethodDescriptor,
    pub parameters: Vec<Parameter>,
    pub wire_namespace: String,
    pub operation_name: String,
    /// One rule per parameter, in declaration order
    pub outbound: Vec<OutboundRule>,
    pub inbound: InboundRule,
}

/// Every generated operation of a service
#[derive(Debug, Clone)]
pub struct ServiceBinding<'a> {
    pub interface: &'a TypeDescriptor,
    pub stub: &'a TypeDescriptor,
    /// Synchronous client class name
    pub client_name: String,
    /// Namespace of both generated clients
    pub namespace: String,
    pub methods: Vec<BoundMethod<'a>>,
}

/// Bind the stub methods that the interface also declares
///
/// A stub method is selected when a method of the same name exists on the
/// interface and its return type is not `void`. Parameters come from
/// `introspector`; its failure aborts the binding.
pub fn bind_service<'a>(
    interface: &'a TypeDescriptor,
    stub: &'a TypeDescriptor,
    operations: &[OperationMetadata],
    introspector: &dyn ParameterIntrospector,
    config: &GeneratorConfig,
) -> GenerationResult<ServiceBinding<'a>> {
    let wire_namespace = resolve_wire_namespace(stub);
    let mut methods = Vec::new();

    for method in &stub.methods {
        if !interface.declares_method(&method.name) {
            continue;
        }
        if method.returns_void() {
            debug!(method = %method.name, "skipping void service method");
            continue;
        }

        let parameters = introspector.parameters(stub, method)?;
        let outbound = parameters
            .iter()
            .map(|parameter| OutboundRule::for_type(&parameter.ty))
            .collect();

        methods.push(BoundMethod {
            method,
            parameters,
            wire_namespace: wire_namespace.clone(),
            operation_name: resolve_operation_name(&method.name, operations),
            outbound,
            inbound: InboundRule::for_return(&method.return_type, &method.name),
        });
    }

    Ok(ServiceBinding {
        interface,
        stub,
        client_name: client_class_name(&stub.name),
        namespace: config.soap_namespace(&interface.namespace),
        methods,
    })
}

/// Wire namespace from the first cached qualified name on the stub
///
/// A stub without cached names yields an empty namespace; this is logged and
/// otherwise tolerated.
pub fn resolve_wire_namespace(stub: &TypeDescriptor) -> String {
    match stub.qualified_names.first() {
        Some(name) => name.namespace_uri.clone(),
        None => {
            warn!(
                stub = %stub.qualified_name(),
                "no cached qualified names, using empty wire namespace"
            );
            String::new()
        }
    }
}

/// Declared operation whose name matches `method_name` ignoring case
///
/// Falls back to the method name itself.
pub fn resolve_operation_name(method_name: &str, operations: &[OperationMetadata]) -> String {
    operations
        .iter()
        .find(|operation| operation.name.eq_ignore_ascii_case(method_name))
        .map_or_else(|| method_name.to_string(), |operation| operation.name.clone())
}

#[cfg(test)]
#[path = "service/service_tests.rs"]
mod service_tests;
