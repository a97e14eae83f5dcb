//! wsgen.toml parsing and configuration resolution

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use wsgen_core::{GeneratorConfig, TransportFlavor};

/// Name of the manifest picked up from the working directory
pub const DEFAULT_MANIFEST: &str = "wsgen.toml";

/// wsgen.toml manifest structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl Manifest {
    /// Load manifest from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read manifest: {:?}", path.as_ref()))?;

        Self::parse(&content)
            .with_context(|| format!("Invalid manifest: {:?}", path.as_ref()))
    }

    /// Parse manifest from string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse manifest")
    }
}

/// Resolve the generator configuration
///
/// Reads `path` when given, otherwise `wsgen.toml` in the working directory
/// when it exists, otherwise the defaults. A `transport` flag overrides the
/// manifest value. The result is validated.
pub fn resolve_config(path: Option<&Path>, transport: Option<&str>) -> Result<GeneratorConfig> {
    let mut config = match path {
        Some(path) => Manifest::from_file(path)?.generator,
        None if Path::new(DEFAULT_MANIFEST).is_file() => {
            Manifest::from_file(DEFAULT_MANIFEST)?.generator
        }
        None => GeneratorConfig::default(),
    };

    if let Some(transport) = transport {
        config.transport = transport
            .parse::<TransportFlavor>()
            .context("Invalid --transport value")?;
    }

    config.validate().context("Invalid generator configuration")?;
    Ok(config)
}

#[cfg(test)]
#[path = "manifest/manifest_tests.rs"]
mod manifest_tests;
