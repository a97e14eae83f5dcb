//! Generator configuration types

use crate::error::{GenerationError, GenerationResult};
use crate::metadata::TypeDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HTTP transport class used by the generated synchronous client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportFlavor {
    /// ksoap2 J2ME transport (`HttpTransport`)
    #[default]
    J2me,
    /// ksoap2-android transport (`HttpTransportSE`)
    Android,
}

impl TransportFlavor {
    /// Unqualified transport class name
    pub fn class_name(&self) -> &'static str {
        match self {
            TransportFlavor::J2me => "HttpTransport",
            TransportFlavor::Android => "HttpTransportSE",
        }
    }
}

impl fmt::Display for TransportFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportFlavor::J2me => write!(f, "j2me"),
            TransportFlavor::Android => write!(f, "android"),
        }
    }
}

impl FromStr for TransportFlavor {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "j2me" => Ok(TransportFlavor::J2me),
            "android" => Ok(TransportFlavor::Android),
            other => Err(GenerationError::Config(format!(
                "unknown transport '{other}', expected 'j2me' or 'android'"
            ))),
        }
    }
}

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Transport used by the synchronous client
    #[serde(default)]
    pub transport: TransportFlavor,

    /// Field names never persisted by the Room emitters
    ///
    /// The defaults are the bookkeeping fields Axis adds to generated beans.
    #[serde(default = "default_ignored_fields")]
    pub ignored_fields: Vec<String>,

    /// RPC framework marker types; anything assignable to one is not data
    #[serde(default = "default_framework_markers")]
    pub framework_markers: Vec<String>,

    /// Room schema version written into the database container
    #[serde(default = "default_database_version")]
    pub database_version: u32,

    /// Namespace suffix for the RPC clients
    #[serde(default = "default_soap_suffix")]
    pub soap_namespace_suffix: String,

    /// Namespace suffix for the persistence layer
    #[serde(default = "default_room_suffix")]
    pub room_namespace_suffix: String,
}

fn default_ignored_fields() -> Vec<String> {
    vec![
        "__equalsCalc".to_string(),
        "__hashCodeCalc".to_string(),
        "typeDesc".to_string(),
    ]
}

fn default_framework_markers() -> Vec<String> {
    vec![
        "javax.xml.rpc.Service".to_string(),
        "org.apache.axis.client.Stub".to_string(),
        "org.apache.axis.client.Service".to_string(),
    ]
}

fn default_database_version() -> u32 {
    1
}

fn default_soap_suffix() -> String {
    ".soap".to_string()
}

fn default_room_suffix() -> String {
    ".room".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            transport: TransportFlavor::default(),
            ignored_fields: default_ignored_fields(),
            framework_markers: default_framework_markers(),
            database_version: default_database_version(),
            soap_namespace_suffix: default_soap_suffix(),
            room_namespace_suffix: default_room_suffix(),
        }
    }
}

impl GeneratorConfig {
    /// Whether a field with this name is excluded from persistence
    pub fn is_ignored_field(&self, name: &str) -> bool {
        self.ignored_fields.iter().any(|ignored| ignored == name)
    }

    /// Whether a type belongs to the RPC framework rather than the domain
    pub fn is_framework_type(&self, descriptor: &TypeDescriptor) -> bool {
        self.framework_markers
            .iter()
            .any(|marker| descriptor.is_assignable_to(marker))
    }

    /// Namespace of the RPC clients for a service interface namespace
    pub fn soap_namespace(&self, base: &str) -> String {
        join_namespace(base, &self.soap_namespace_suffix)
    }

    /// Namespace of the persistence layer for a data type namespace
    pub fn room_namespace(&self, base: &str) -> String {
        join_namespace(base, &self.room_namespace_suffix)
    }

    /// Validate the configuration
    pub fn validate(&self) -> GenerationResult<()> {
        if self.database_version == 0 {
            return Err(GenerationError::Config(
                "database_version must be at least 1".to_string(),
            ));
        }
        for (key, suffix) in [
            ("soap_namespace_suffix", &self.soap_namespace_suffix),
            ("room_namespace_suffix", &self.room_namespace_suffix),
        ] {
            if !suffix.is_empty() && !suffix.starts_with('.') {
                return Err(GenerationError::Config(format!(
                    "{key} must start with '.', got '{suffix}'"
                )));
            }
        }
        if self.ignored_fields.iter().any(|name| name.is_empty()) {
            return Err(GenerationError::Config(
                "ignored_fields must not contain empty names".to_string(),
            ));
        }
        Ok(())
    }
}

fn join_namespace(base: &str, suffix: &str) -> String {
    if base.is_empty() {
        suffix.trim_start_matches('.').to_string()
    } else {
        format!("{base}{suffix}")
    }
}
