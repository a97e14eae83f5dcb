//! wsgen-codegen - Source emitters for ksoap2 clients and Room persistence
//!
//! Generation runs per routed unit:
//!
//! | Unit | Emitters |
//! |------|----------|
//! | service interface + stub | [`SyncRpcClientEmitter`], [`AsyncRpcWrapperEmitter`] |
//! | data type | [`EntityEmitter`], [`DaoEmitter`], [`DatabaseContainerEmitter`] |
//!
//! Every emitter goes through the same [`template::run`] pipeline and hands
//! its output to a [`SourceSink`].
//!
//! # Example
//!
//! ```
//! use wsgen_codegen::{MemorySink, WsClientGenerator};
//! use wsgen_core::{DeclaredParameterNames, GeneratorConfig, ServiceCatalog};
//!
//! let catalog = ServiceCatalog::from_json(br#"{
//!     "service": { "interface": "demo.Echo", "stub": "demo.EchoStub" },
//!     "types": [
//!         { "name": "Echo", "namespace": "demo" },
//!         { "name": "EchoStub", "namespace": "demo" }
//!     ]
//! }"#)?;
//! let config = GeneratorConfig::default();
//! let generator = WsClientGenerator::new(&catalog, &config, &DeclaredParameterNames)?;
//!
//! let mut sink = MemorySink::new();
//! let summary = generator.generate_all(&mut sink)?;
//!
//! assert_eq!(summary.classes, vec!["demo.soap.Echo", "demo.soap.EchoAsync"]);
//! assert!(sink.get("demo/soap/Echo.java").is_some());
//! # Ok::<(), wsgen_core::GenerationError>(())
//! ```

mod buffer;
pub mod emitters;
pub mod jvm_types;
pub mod marshal;
pub mod naming;
mod orchestrator;
pub mod service;
mod sink;
pub mod support;
pub mod template;

pub use buffer::SourceBuffer;
pub use emitters::{
    AsyncRpcWrapperEmitter, DaoEmitter, DatabaseContainerEmitter, EntityEmitter,
    SyncRpcClientEmitter,
};
pub use marshal::{DecodeFailure, DecodedValue, InboundRule, OutboundRule, WireValue};
pub use orchestrator::{GenerationSummary, GenerationUnit, WsClientGenerator};
pub use service::{BoundMethod, ServiceBinding, bind_service};
pub use sink::{FsSourceSink, MemorySink, PersistedSource, SourceSink, SourceUnit};
pub use template::{Emitter, GenerationContext, TargetLanguage};
