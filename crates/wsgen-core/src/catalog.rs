//! Metadata document loading
//!
//! The service description parser is an external collaborator; its output
//! reaches wsgen as a JSON document naming the service interface and stub,
//! the declared operations, and every resolved type.

use crate::error::{GenerationError, GenerationResult};
use crate::metadata::{OperationMetadata, TypeDescriptor, TypeRegistry};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Qualified names of the service interface and its stub
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRef {
    pub interface: String,
    pub stub: String,
}

/// Raw metadata document as produced upstream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataDocument {
    pub service: ServiceRef,
    #[serde(default)]
    pub operations: Vec<OperationMetadata>,
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
}

impl MetadataDocument {
    /// Decode a document from JSON bytes
    pub fn from_json(bytes: &[u8]) -> GenerationResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Read-only access to resolved type metadata
pub trait MetadataProvider {
    /// Every known type, keyed by qualified name
    fn registry(&self) -> &TypeRegistry;

    /// Operations declared by the service description
    fn operations(&self) -> &[OperationMetadata];

    /// Names of the service interface and stub
    fn service(&self) -> &ServiceRef;

    /// Resolve the service interface and stub descriptors
    fn service_types(&self) -> GenerationResult<(&TypeDescriptor, &TypeDescriptor)> {
        let service = self.service();
        let interface = self.registry().require(&service.interface)?;
        let stub = self.registry().require(&service.stub)?;
        Ok((interface, stub))
    }
}

/// Validated metadata, ready for generation
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    service: ServiceRef,
    operations: Vec<OperationMetadata>,
    registry: TypeRegistry,
}

impl ServiceCatalog {
    /// Build a catalog from a decoded document
    ///
    /// Fails on empty service names, duplicate type names, or a service
    /// interface or stub that the document does not describe.
    pub fn from_document(document: MetadataDocument) -> GenerationResult<Self> {
        if document.service.interface.trim().is_empty() {
            return Err(GenerationError::MissingInput(
                "service interface name".to_string(),
            ));
        }
        if document.service.stub.trim().is_empty() {
            return Err(GenerationError::MissingInput("service stub name".to_string()));
        }

        let mut registry = TypeRegistry::new();
        for descriptor in document.types {
            if descriptor.name.trim().is_empty() {
                return Err(GenerationError::MissingInput(format!(
                    "type name in namespace '{}'",
                    descriptor.namespace
                )));
            }
            let name = descriptor.qualified_name();
            if registry.insert(descriptor).is_some() {
                return Err(GenerationError::Config(format!(
                    "type '{name}' is declared more than once"
                )));
            }
        }

        let catalog = Self {
            service: document.service,
            operations: document.operations,
            registry,
        };
        catalog.service_types()?;

        tracing::debug!(
            types = catalog.registry.len(),
            operations = catalog.operations.len(),
            interface = %catalog.service.interface,
            "loaded metadata catalog"
        );
        Ok(catalog)
    }

    /// Decode and validate a catalog from JSON bytes
    pub fn from_json(bytes: &[u8]) -> GenerationResult<Self> {
        Self::from_document(MetadataDocument::from_json(bytes)?)
    }

    /// Read, decode and validate a catalog file
    pub fn load(path: &Path) -> GenerationResult<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_json(&bytes)
    }
}

impl MetadataProvider for ServiceCatalog {
    fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    fn operations(&self) -> &[OperationMetadata] {
        &self.operations
    }

    fn service(&self) -> &ServiceRef {
        &self.service
    }
}
