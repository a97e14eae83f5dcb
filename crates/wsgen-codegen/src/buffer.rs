//! Append-only text accumulator shared by chained emitters

use std::fmt;

const INDENT: &str = "    ";

/// Append-only source text
///
/// A buffer is owned by one emitter run at a time and handed to the next
/// emitter when the run returns. Every run clears it before writing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceBuffer {
    text: String,
}

impl SourceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
        }
    }

    /// Append raw text
    pub fn append(&mut self, text: &str) -> &mut Self {
        self.text.push_str(text);
        self
    }

    /// Append text followed by a newline
    pub fn append_line(&mut self, text: &str) -> &mut Self {
        self.text.push_str(text);
        self.text.push('\n');
        self
    }

    /// Append a line indented by `depth` levels
    pub fn line(&mut self, depth: usize, text: &str) -> &mut Self {
        for _ in 0..depth {
            self.text.push_str(INDENT);
        }
        self.append_line(text)
    }

    /// Append an empty line
    pub fn blank_line(&mut self) -> &mut Self {
        self.text.push('\n');
        self
    }

    /// Drop all accumulated text, keeping the allocation
    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Write for SourceBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.text.push_str(s);
        Ok(())
    }
}

impl fmt::Display for SourceBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
