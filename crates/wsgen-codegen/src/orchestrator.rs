//! Generation entry point
//!
//! [`WsClientGenerator`] routes each [`GenerationUnit`] to its emitters and
//! runs them one after another, handing the same [`SourceBuffer`] from one
//! emitter to the next. The first failure aborts the batch.

use crate::buffer::SourceBuffer;
use crate::emitters::{
    AsyncRpcWrapperEmitter, DaoEmitter, DatabaseContainerEmitter, EntityEmitter,
    SyncRpcClientEmitter, is_data_type, is_persistable,
};
use crate::service::bind_service;
use crate::sink::SourceSink;
use crate::template::{Emitter, run};
use tracing::{error, info, warn};
use wsgen_core::{
    GenerationResult, GeneratorConfig, MetadataProvider, OperationMetadata, ParameterIntrospector,
    TypeDescriptor, TypeRegistry,
};

/// One routed input of a generation batch
#[derive(Debug, Clone, Copy)]
pub enum GenerationUnit<'a> {
    /// Service interface and stub: sync client and coroutine wrapper
    Service {
        interface: &'a TypeDescriptor,
        stub: &'a TypeDescriptor,
    },
    /// Data type: entity, DAO and database container
    Data { ty: &'a TypeDescriptor },
}

impl GenerationUnit<'_> {
    /// Qualified name of the type driving this unit
    pub fn name(&self) -> String {
        match self {
            GenerationUnit::Service { interface, .. } => interface.qualified_name(),
            GenerationUnit::Data { ty } => ty.qualified_name(),
        }
    }
}

/// Outcome of a batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Qualified names of the generated classes, in emission order
    pub classes: Vec<String>,
    /// Data types without persisted fields
    pub skipped: Vec<String>,
}

/// Drives every emitter over a validated metadata set
pub struct WsClientGenerator<'a> {
    registry: &'a TypeRegistry,
    operations: &'a [OperationMetadata],
    interface: &'a TypeDescriptor,
    stub: &'a TypeDescriptor,
    config: &'a GeneratorConfig,
    introspector: &'a dyn ParameterIntrospector,
}

impl<'a> WsClientGenerator<'a> {
    /// Resolve the service pair from `provider`
    pub fn new(
        provider: &'a dyn MetadataProvider,
        config: &'a GeneratorConfig,
        introspector: &'a dyn ParameterIntrospector,
    ) -> GenerationResult<Self> {
        config.validate()?;
        let (interface, stub) = provider.service_types()?;
        Ok(Self {
            registry: provider.registry(),
            operations: provider.operations(),
            interface,
            stub,
            config,
            introspector,
        })
    }

    /// Service unit first, then every data type in registry order
    pub fn units(&self) -> Vec<GenerationUnit<'a>> {
        let mut units = vec![GenerationUnit::Service {
            interface: self.interface,
            stub: self.stub,
        }];
        units.extend(
            self.registry
                .iter()
                .filter(|ty| is_data_type(ty, self.interface, self.stub, self.config))
                .map(|ty| GenerationUnit::Data { ty }),
        );
        units
    }

    /// Generate one unit, returning the buffer and the generated class names
    ///
    /// A data type without persisted fields produces nothing.
    pub fn generate(
        &self,
        unit: GenerationUnit<'_>,
        buffer: SourceBuffer,
        sink: &mut dyn SourceSink,
    ) -> GenerationResult<(SourceBuffer, Vec<String>)> {
        let mut classes = Vec::new();
        let buffer = match unit {
            GenerationUnit::Service { interface, stub } => {
                let binding =
                    bind_service(interface, stub, self.operations, self.introspector, self.config)?;
                let sync = SyncRpcClientEmitter::new(&binding, self.config);
                let wrapper = AsyncRpcWrapperEmitter::new(&binding);
                let emitters: [&dyn Emitter; 2] = [&sync, &wrapper];
                chain(&emitters, buffer, sink, &mut classes)?
            }
            GenerationUnit::Data { ty } => {
                if !is_persistable(ty, self.config) {
                    warn!(ty = %ty.qualified_name(), "no persisted fields, skipping data type");
                    return Ok((buffer, classes));
                }
                let entity = EntityEmitter::new(ty, self.config);
                let dao = DaoEmitter::new(ty, self.config);
                let database = DatabaseContainerEmitter::new(
                    ty,
                    self.registry,
                    self.interface,
                    self.stub,
                    self.config,
                );
                let emitters: [&dyn Emitter; 3] = [&entity, &dao, &database];
                chain(&emitters, buffer, sink, &mut classes)?
            }
        };

        info!(unit = %unit.name(), classes = classes.len(), "generated type");
        Ok((buffer, classes))
    }

    /// Generate every unit, stopping at the first failure
    pub fn generate_all(&self, sink: &mut dyn SourceSink) -> GenerationResult<GenerationSummary> {
        let mut summary = GenerationSummary::default();
        let mut buffer = SourceBuffer::with_capacity(16 * 1024);

        for unit in self.units() {
            let (returned, classes) = self.generate(unit, buffer, sink).inspect_err(|err| {
                error!(unit = %unit.name(), kind = err.kind(), %err, "generation failed");
            })?;
            buffer = returned;
            if classes.is_empty() {
                summary.skipped.push(unit.name());
            }
            summary.classes.extend(classes);
        }
        Ok(summary)
    }
}

fn chain(
    emitters: &[&dyn Emitter],
    mut buffer: SourceBuffer,
    sink: &mut dyn SourceSink,
    classes: &mut Vec<String>,
) -> GenerationResult<SourceBuffer> {
    for emitter in emitters {
        buffer = run(*emitter, buffer, sink)?;
        let ctx = emitter.context();
        classes.push(if ctx.namespace.is_empty() {
            ctx.class_name.clone()
        } else {
            format!("{}.{}", ctx.namespace, ctx.class_name)
        });
    }
    Ok(buffer)
}
