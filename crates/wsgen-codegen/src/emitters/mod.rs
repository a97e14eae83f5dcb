//! Concrete emitters
//!
//! | Emitter | Input | Output |
//! |---------|-------|--------|
//! | [`SyncRpcClientEmitter`] | service binding | `<ns>.soap.<Client>.java` |
//! | [`AsyncRpcWrapperEmitter`] | service binding | `<ns>.soap.<Client>Async.kt` |
//! | [`EntityEmitter`] | data type | `<ns>.room.model.<Type>.kt` |
//! | [`DaoEmitter`] | data type | `<ns>.room.dao.<Type>Dao.kt` |
//! | [`DatabaseContainerEmitter`] | data type + registry | `<ns>.room.<Service>Database.kt` |

mod async_wrapper;
mod dao;
mod database;
mod entity;
mod sync_client;

pub use async_wrapper::AsyncRpcWrapperEmitter;
pub use dao::DaoEmitter;
pub use database::DatabaseContainerEmitter;
pub use entity::EntityEmitter;
pub use sync_client::SyncRpcClientEmitter;

use crate::service::ServiceBinding;
use std::collections::BTreeSet;
use wsgen_core::{
    FieldDescriptor, GeneratorConfig, TypeClass, TypeDescriptor, TypeRegistry, classify,
};

/// Whether `ty` is data-shaped rather than part of the service or its framework
pub fn is_data_type(
    ty: &TypeDescriptor,
    interface: &TypeDescriptor,
    stub: &TypeDescriptor,
    config: &GeneratorConfig,
) -> bool {
    let name = ty.qualified_name();
    name != interface.qualified_name()
        && name != stub.qualified_name()
        && !config.is_framework_type(ty)
}

/// Data types that get an entity, in registry order
pub(crate) fn entity_types<'a>(
    registry: &'a TypeRegistry,
    interface: &TypeDescriptor,
    stub: &TypeDescriptor,
    config: &GeneratorConfig,
) -> Vec<&'a TypeDescriptor> {
    registry
        .iter()
        .filter(|ty| is_data_type(ty, interface, stub, config) && is_persistable(ty, config))
        .collect()
}

/// Whether at least one field of `ty` survives the ignore list
pub fn is_persistable(ty: &TypeDescriptor, config: &GeneratorConfig) -> bool {
    ty.fields.iter().any(|field| !config.is_ignored_field(&field.name))
}

/// Fields of a data type that are persisted, in declaration order
pub(crate) fn persisted_fields<'a>(
    ty: &'a TypeDescriptor,
    config: &GeneratorConfig,
) -> Vec<&'a FieldDescriptor> {
    ty.fields
        .iter()
        .filter(|field| !config.is_ignored_field(&field.name))
        .collect()
}

/// First persisted field, the entity's primary key
pub(crate) fn primary_key_field<'a>(
    ty: &'a TypeDescriptor,
    config: &GeneratorConfig,
) -> Option<&'a FieldDescriptor> {
    ty.fields
        .iter()
        .find(|field| !config.is_ignored_field(&field.name))
}

/// First persisted primitive or string field, used for keyed lookups
pub(crate) fn key_field<'a>(
    ty: &'a TypeDescriptor,
    config: &GeneratorConfig,
) -> Option<&'a FieldDescriptor> {
    persisted_fields(ty, config)
        .into_iter()
        .find(|field| matches!(classify(&field.ty), TypeClass::Primitive(_) | TypeClass::StringType))
}

/// Qualified names of the composite types a service signature refers to
pub(crate) fn referenced_composites(binding: &ServiceBinding<'_>) -> BTreeSet<String> {
    binding
        .methods
        .iter()
        .flat_map(|bound| {
            bound
                .parameters
                .iter()
                .map(|parameter| &parameter.ty)
                .chain(std::iter::once(&bound.method.return_type))
        })
        .filter_map(|ty| {
            let (element, _) = ty.innermost();
            match classify(element) {
                TypeClass::CompositeObject if !element.is_void() && !element.namespace().is_empty() => {
                    Some(element.qualified_name().to_string())
                }
                _ => None,
            }
        })
        .collect()
}
