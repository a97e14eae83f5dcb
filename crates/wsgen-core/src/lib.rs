//! wsgen-core - Type metadata, classification and errors
//!
//! This crate provides the foundational types shared by the wsgen generators:
//! - [`TypeRegistry`] and the descriptor model of resolved stub and data types
//! - [`classify`] for mapping a [`TypeRef`] onto marshalling shapes
//! - [`ParameterIntrospector`] for recovering parameter names
//! - [`GenerationStage`] for the fixed emitter pipeline
//! - [`GenerationError`] for error handling
//! - [`GeneratorConfig`] for generator configuration

mod catalog;
mod classify;
mod config;
mod error;
mod introspect;
mod metadata;
mod stage;

pub use catalog::{MetadataDocument, MetadataProvider, ServiceCatalog, ServiceRef};
pub use classify::{
    LiteralError, PrimitiveKind, PrimitiveValue, STRING_TYPE, TypeClass, classify,
};
pub use config::{GeneratorConfig, TransportFlavor};
pub use error::{GenerationError, GenerationResult};
pub use introspect::{
    DeclaredParameterNames, Parameter, ParameterIntrospector, SyntheticParameterNames,
};
pub use metadata::{
    FieldDescriptor, MethodDescriptor, Modifier, OperationMetadata, QualifiedName,
    TypeDescriptor, TypeRef, TypeRegistry, VOID_TYPE, Visibility,
};
pub use stage::{GenerationStage, StageTracker};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        FieldDescriptor, GenerationError, GenerationResult, GeneratorConfig, MetadataProvider,
        MethodDescriptor, OperationMetadata, Parameter, ParameterIntrospector, TypeClass,
        TypeDescriptor, TypeRef, TypeRegistry, classify,
    };
}
