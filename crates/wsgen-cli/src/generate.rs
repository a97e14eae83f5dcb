//! Generate and check command implementations

use crate::manifest::resolve_config;
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::info;
use wsgen_codegen::{
    FsSourceSink, GenerationSummary, GenerationUnit, MemorySink, SourceSink, WsClientGenerator,
};
use wsgen_core::{
    DeclaredParameterNames, MetadataProvider, ParameterIntrospector, ServiceCatalog,
    SyntheticParameterNames,
};

/// Options of `wsgen generate`
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub metadata: PathBuf,
    pub output: PathBuf,
    pub config: Option<PathBuf>,
    pub transport: Option<String>,
    pub synthesize_parameter_names: bool,
    pub dry_run: bool,
}

/// Parameter name source selected by the command line
fn introspector(synthesize: bool) -> &'static dyn ParameterIntrospector {
    if synthesize {
        &SyntheticParameterNames
    } else {
        &DeclaredParameterNames
    }
}

fn load_catalog(path: &Path) -> Result<ServiceCatalog> {
    ServiceCatalog::load(path).with_context(|| format!("Failed to load metadata: {path:?}"))
}

/// Generate command implementation
pub fn run(options: &GenerateOptions) -> Result<GenerationSummary> {
    let catalog = load_catalog(&options.metadata)?;
    let config = resolve_config(options.config.as_deref(), options.transport.as_deref())?;
    let generator = WsClientGenerator::new(
        &catalog,
        &config,
        introspector(options.synthesize_parameter_names),
    )
    .context("Failed to prepare generation")?;

    info!(
        metadata = %options.metadata.display(),
        output = %options.output.display(),
        transport = %config.transport,
        "generating sources"
    );

    let summary = if options.dry_run {
        let mut sink = MemorySink::new();
        let summary = generate_into(&generator, &mut sink)?;
        println!("Dry run, nothing written. Would write:");
        for path in sink.paths() {
            if let Some(source) = sink.source(path) {
                println!(
                    "  {} (from {})",
                    options.output.join(path).display(),
                    source.owner
                );
            }
        }
        summary
    } else {
        let mut sink = FsSourceSink::new(options.output.clone());
        let summary = generate_into(&generator, &mut sink)?;
        println!(
            "✓ Wrote {} files under {}",
            sink.written().iter().collect::<BTreeSet<_>>().len(),
            sink.root().display()
        );
        summary
    };

    println!("✓ Classes: {}", summary.classes.len());
    for skipped in &summary.skipped {
        println!("  skipped {skipped}: no persisted fields");
    }
    Ok(summary)
}

fn generate_into(
    generator: &WsClientGenerator<'_>,
    sink: &mut dyn SourceSink,
) -> Result<GenerationSummary> {
    generator.generate_all(sink).context("Generation failed")
}

/// Check command implementation
pub fn check(metadata: &Path, config_path: Option<&Path>) -> Result<()> {
    println!("Checking metadata: {}", metadata.display());

    let catalog = load_catalog(metadata)?;
    let config = resolve_config(config_path, None)?;
    let generator = WsClientGenerator::new(&catalog, &config, &DeclaredParameterNames)
        .context("Failed to prepare generation")?;

    let service = catalog.service();
    println!("✓ Service: {} (stub {})", service.interface, service.stub);
    println!("✓ Operations: {}", catalog.operations().len());
    println!("✓ Types: {}", catalog.registry().len());

    let data_types = generator
        .units()
        .iter()
        .filter(|unit| matches!(unit, GenerationUnit::Data { .. }))
        .count();
    println!("✓ Data types: {data_types}");

    let summary = generate_into(&generator, &mut MemorySink::new())?;
    println!("✓ Classes: {}", summary.classes.len());
    println!("\nMetadata is valid!");

    Ok(())
}

#[cfg(test)]
#[path = "generate/generate_tests.rs"]
mod generate_tests;
