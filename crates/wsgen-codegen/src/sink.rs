//! Persistence of generated sources
//!
//! Writing files is a collaborator concern: emitters hand each finished
//! [`SourceUnit`] to a [`SourceSink`] and never touch the file system.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;
use wsgen_core::{GenerationResult, TypeDescriptor};

/// One finished source file
#[derive(Debug, Clone, Copy)]
pub struct SourceUnit<'a> {
    /// Type the source was generated from
    pub owner: &'a TypeDescriptor,
    pub content: &'a str,
    /// File name without extension, usually the generated class name
    pub file_name: &'a str,
    /// Dotted namespace, mapped to directories
    pub namespace: &'a str,
    /// Extension without the dot (`java`, `kt`)
    pub extension: &'a str,
}

impl SourceUnit<'_> {
    /// Path of the file relative to an output root
    pub fn relative_path(&self) -> PathBuf {
        let mut path = PathBuf::new();
        for segment in self.namespace.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{}.{}", self.file_name, self.extension));
        path
    }
}

/// Receives finished source files
pub trait SourceSink {
    fn persist(&mut self, unit: &SourceUnit<'_>) -> GenerationResult<()>;
}

/// Writes sources below an output root, one directory per namespace segment
#[derive(Debug)]
pub struct FsSourceSink {
    root: PathBuf,
    written: Vec<PathBuf>,
}

impl FsSourceSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            written: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute paths written so far, in write order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl SourceSink for FsSourceSink {
    fn persist(&mut self, unit: &SourceUnit<'_>) -> GenerationResult<()> {
        let path = self.root.join(unit.relative_path());
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, unit.content)?;
        debug!(
            path = %path.display(),
            owner = %unit.owner.qualified_name(),
            bytes = unit.content.len(),
            "wrote source file"
        );
        self.written.push(path);
        Ok(())
    }
}

/// Keeps sources in memory, keyed by relative path
///
/// A later unit with the same path replaces the earlier one, as a file
/// write would.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: BTreeMap<PathBuf, PersistedSource>,
}

/// A source kept by [`MemorySink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedSource {
    /// Qualified name of the owning type
    pub owner: String,
    pub content: String,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content stored under a relative path such as `com/example/soap/Client.java`
    pub fn get(&self, relative_path: impl AsRef<Path>) -> Option<&str> {
        self.files
            .get(relative_path.as_ref())
            .map(|source| source.content.as_str())
    }

    pub fn source(&self, relative_path: impl AsRef<Path>) -> Option<&PersistedSource> {
        self.files.get(relative_path.as_ref())
    }

    /// Stored relative paths in sorted order
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }

    /// Number of distinct files held
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl SourceSink for MemorySink {
    fn persist(&mut self, unit: &SourceUnit<'_>) -> GenerationResult<()> {
        self.files.insert(
            unit.relative_path(),
            PersistedSource {
                owner: unit.owner.qualified_name(),
                content: unit.content.to_string(),
            },
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "sink/sink_tests.rs"]
mod sink_tests;
