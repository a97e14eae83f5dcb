//! Error types for wsgen generation runs

use thiserror::Error;

/// Result type alias for generation operations
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Error type for generation operations
///
/// Every variant is fatal for the type being generated; the orchestrator
/// does not catch them, so the first failure aborts the whole batch.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// A required input was absent or empty
    #[error("missing required input: {0}")]
    MissingInput(String),

    /// A qualified name was not present in the type registry
    #[error("unknown type: {0}")]
    UnknownType(String),

    /// A textual type reference could not be parsed
    #[error("invalid type name: {0:?}")]
    InvalidTypeName(String),

    /// Parameter names could not be recovered for a method
    #[error("parameter names unavailable for {owner}.{method}")]
    ParameterNamesUnavailable { owner: String, method: String },

    /// Parameter names and parameter types disagree in length
    #[error("parameter count mismatch for {method}: {names} names, {types} types")]
    ParameterCountMismatch {
        method: String,
        names: usize,
        types: usize,
    },

    /// Any other unrecoverable introspection failure
    #[error("introspection failed: {0}")]
    Introspection(String),

    /// The generation pipeline was driven out of order
    #[error("invalid generation stage transition: {from} -> {to}")]
    InvalidStageTransition { from: String, to: String },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error while persisting generated sources
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Metadata document could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Formatting into a source buffer failed
    #[error("format error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

impl GenerationError {
    /// Short machine-readable name of the error kind, used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::MissingInput(_) => "missing_input",
            GenerationError::UnknownType(_) => "unknown_type",
            GenerationError::InvalidTypeName(_) => "invalid_type_name",
            GenerationError::ParameterNamesUnavailable { .. } => "parameter_names_unavailable",
            GenerationError::ParameterCountMismatch { .. } => "parameter_count_mismatch",
            GenerationError::Introspection(_) => "introspection",
            GenerationError::InvalidStageTransition { .. } => "invalid_stage_transition",
            GenerationError::Config(_) => "config",
            GenerationError::Io(_) => "io",
            GenerationError::Json(_) => "json",
            GenerationError::Fmt(_) => "fmt",
        }
    }
}
