//! Generation pipeline stage machine
//!
//! Every emitter run walks the same fixed sequence of stages exactly once:
//!
//! ```text
//! Init → WriteHeader → WriteImports → WriteDeclaration → WriteFields
//!      → WriteBody → WriteTrailerHooks → WriteClose → Handoff
//! ```
//!
//! There is no re-entry; `Handoff` is terminal for a run.

use crate::error::{GenerationError, GenerationResult};
use serde::{Deserialize, Serialize};

/// Stage of a single emitter run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStage {
    /// Run created, buffer not yet cleared
    #[default]
    Init,
    /// Namespace declaration
    WriteHeader,
    /// Import block
    WriteImports,
    /// Type declaration line(s)
    WriteDeclaration,
    /// Field declarations
    WriteFields,
    /// Type-specific content
    WriteBody,
    /// Trailing helpers after the body
    WriteTrailerHooks,
    /// Closing delimiter
    WriteClose,
    /// Content handed to the sink
    Handoff,
}

impl GenerationStage {
    /// The stage that follows this one, if any
    pub fn next(&self) -> Option<GenerationStage> {
        use GenerationStage::*;
        match self {
            Init => Some(WriteHeader),
            WriteHeader => Some(WriteImports),
            WriteImports => Some(WriteDeclaration),
            WriteDeclaration => Some(WriteFields),
            WriteFields => Some(WriteBody),
            WriteBody => Some(WriteTrailerHooks),
            WriteTrailerHooks => Some(WriteClose),
            WriteClose => Some(Handoff),
            Handoff => None,
        }
    }

    /// Check if this stage can transition to the target stage
    pub fn can_transition_to(&self, target: GenerationStage) -> bool {
        use GenerationStage::*;
        matches!(
            (self, target),
            (Init, WriteHeader)
                | (WriteHeader, WriteImports)
                | (WriteImports, WriteDeclaration)
                | (WriteDeclaration, WriteFields)
                | (WriteFields, WriteBody)
                | (WriteBody, WriteTrailerHooks)
                | (WriteTrailerHooks, WriteClose)
                | (WriteClose, Handoff)
        )
    }

    /// Get a human-readable description of this stage
    pub fn description(&self) -> &'static str {
        match self {
            GenerationStage::Init => "Run created",
            GenerationStage::WriteHeader => "Writing namespace header",
            GenerationStage::WriteImports => "Writing imports",
            GenerationStage::WriteDeclaration => "Writing type declaration",
            GenerationStage::WriteFields => "Writing fields",
            GenerationStage::WriteBody => "Writing body",
            GenerationStage::WriteTrailerHooks => "Writing trailer hooks",
            GenerationStage::WriteClose => "Writing closing delimiter",
            GenerationStage::Handoff => "Handing content to the sink",
        }
    }
}

impl std::fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationStage::Init => write!(f, "Init"),
            GenerationStage::WriteHeader => write!(f, "WriteHeader"),
            GenerationStage::WriteImports => write!(f, "WriteImports"),
            GenerationStage::WriteDeclaration => write!(f, "WriteDeclaration"),
            GenerationStage::WriteFields => write!(f, "WriteFields"),
            GenerationStage::WriteBody => write!(f, "WriteBody"),
            GenerationStage::WriteTrailerHooks => write!(f, "WriteTrailerHooks"),
            GenerationStage::WriteClose => write!(f, "WriteClose"),
            GenerationStage::Handoff => write!(f, "Handoff"),
        }
    }
}

/// Tracks the current stage of one run and rejects out-of-order steps
#[derive(Debug, Default)]
pub struct StageTracker {
    current: GenerationStage,
}

impl StageTracker {
    /// Create a tracker positioned at `Init`
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to the stage after the current one
    ///
    /// Returns `None` once `Handoff` has been reached.
    pub fn step(&mut self) -> GenerationResult<Option<GenerationStage>> {
        match self.current.next() {
            Some(target) => self.advance(target).map(|()| Some(target)),
            None => Ok(None),
        }
    }

    /// Move to the target stage
    pub fn advance(&mut self, target: GenerationStage) -> GenerationResult<()> {
        if !self.current.can_transition_to(target) {
            return Err(GenerationError::InvalidStageTransition {
                from: self.current.to_string(),
                to: target.to_string(),
            });
        }
        tracing::trace!(
            from = %self.current,
            to = %target,
            "{}",
            target.description()
        );
        self.current = target;
        Ok(())
    }
}


#[cfg(test)]
#[path = "stage/stage_parameterized_tests.rs"]
mod stage_parameterized_tests;
