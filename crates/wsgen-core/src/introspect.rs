//! Parameter name recovery
//!
//! Emitters need both the name and the type of every parameter. Types always
//! come from the method descriptor; names are whatever an introspector can
//! recover, and a method without names cannot be generated.

use crate::error::{GenerationError, GenerationResult};
use crate::metadata::{MethodDescriptor, TypeDescriptor, TypeRef};

/// A named, typed method parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeRef,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Recovers ordered (name, type) pairs for a method
pub trait ParameterIntrospector {
    /// Parameters of `method` as declared on `owner`, in declaration order
    fn parameters(
        &self,
        owner: &TypeDescriptor,
        method: &MethodDescriptor,
    ) -> GenerationResult<Vec<Parameter>>;
}

/// Uses the names recorded in the metadata document
///
/// Fails when the document carries no names for a method, or when the name
/// count disagrees with the parameter type count.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredParameterNames;

impl ParameterIntrospector for DeclaredParameterNames {
    fn parameters(
        &self,
        owner: &TypeDescriptor,
        method: &MethodDescriptor,
    ) -> GenerationResult<Vec<Parameter>> {
        let names = method.parameter_names.as_ref().ok_or_else(|| {
            GenerationError::ParameterNamesUnavailable {
                owner: owner.qualified_name(),
                method: method.name.clone(),
            }
        })?;

        if names.len() != method.parameter_types.len() {
            return Err(GenerationError::ParameterCountMismatch {
                method: method.name.clone(),
                names: names.len(),
                types: method.parameter_types.len(),
            });
        }

        if let Some(blank) = names.iter().position(|name| name.trim().is_empty()) {
            return Err(GenerationError::Introspection(format!(
                "parameter {blank} of {}.{} has an empty name",
                owner.qualified_name(),
                method.name
            )));
        }

        Ok(names
            .iter()
            .zip(&method.parameter_types)
            .map(|(name, ty)| Parameter::new(name.clone(), ty.clone()))
            .collect())
    }
}

/// Falls back to positional names (`arg0`, `arg1`, ...) when none were recorded
///
/// Recorded names are still used when present and consistent.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticParameterNames;

impl ParameterIntrospector for SyntheticParameterNames {
    fn parameters(
        &self,
        owner: &TypeDescriptor,
        method: &MethodDescriptor,
    ) -> GenerationResult<Vec<Parameter>> {
        if method.parameter_names.is_some() {
            return DeclaredParameterNames.parameters(owner, method);
        }

        tracing::debug!(
            owner = %owner.qualified_name(),
            method = %method.name,
            "synthesizing positional parameter names"
        );
        Ok(method
            .parameter_types
            .iter()
            .enumerate()
            .map(|(index, ty)| Parameter::new(format!("arg{index}"), ty.clone()))
            .collect())
    }
}

#[cfg(test)]
#[path = "introspect/introspect_tests.rs"]
mod introspect_tests;
