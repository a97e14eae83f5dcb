//! Fixed generation pipeline shared by every emitter
//!
//! [`run`] drives an [`Emitter`] through the stages of
//! [`GenerationStage`](wsgen_core::GenerationStage):
//!
//! ```text
//! header → imports → declaration → fields → body → trailer → close → handoff
//! ```
//!
//! Emitters only supply the hooks; ordering, buffer reset and persistence are
//! owned here.

use crate::buffer::SourceBuffer;
use crate::jvm_types::map_type;
use crate::sink::{SourceSink, SourceUnit};
use tracing::debug;
use wsgen_core::{GenerationError, GenerationResult, GenerationStage, StageTracker, TypeDescriptor};

/// Language of the generated source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetLanguage {
    Java,
    Kotlin,
}

impl TargetLanguage {
    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            TargetLanguage::Java => "java",
            TargetLanguage::Kotlin => "kt",
        }
    }

    /// Statement terminator (`;` for Java, nothing for Kotlin)
    pub fn terminator(&self) -> &'static str {
        match self {
            TargetLanguage::Java => ";",
            TargetLanguage::Kotlin => "",
        }
    }
}

/// Per-emitter target description
#[derive(Debug, Clone)]
pub struct GenerationContext<'a> {
    /// Type the output is generated from
    pub source: &'a TypeDescriptor,
    /// Generated class name, also the file name
    pub class_name: String,
    /// Dotted namespace of the generated class
    pub namespace: String,
    pub language: TargetLanguage,
}

impl<'a> GenerationContext<'a> {
    pub fn new(
        source: &'a TypeDescriptor,
        class_name: impl Into<String>,
        namespace: impl Into<String>,
        language: TargetLanguage,
    ) -> Self {
        Self {
            source,
            class_name: class_name.into(),
            namespace: namespace.into(),
            language,
        }
    }

    fn check(&self) -> GenerationResult<()> {
        if self.source.name.trim().is_empty() {
            return Err(GenerationError::MissingInput(
                "source type name".to_string(),
            ));
        }
        if self.class_name.trim().is_empty() {
            return Err(GenerationError::MissingInput(format!(
                "generated class name for {}",
                self.source.qualified_name()
            )));
        }
        Ok(())
    }

    /// Render an import line in the target language
    pub fn import(&self, path: &str) -> String {
        format!("import {path}{}", self.language.terminator())
    }
}

/// Hooks of one generated source file
///
/// `write_imports` and `write_body` are required; the other hooks have the
/// defaults described on each method.
pub trait Emitter {
    fn context(&self) -> &GenerationContext<'_>;

    fn write_imports(&self, out: &mut SourceBuffer) -> GenerationResult<()>;

    /// Default: a public class header
    fn write_declaration(&self, out: &mut SourceBuffer) -> GenerationResult<()> {
        write_class_header(self.context(), out);
        Ok(())
    }

    /// Default: one declaration per source field with its visibility
    fn write_fields(&self, out: &mut SourceBuffer) -> GenerationResult<()> {
        write_source_fields(self.context(), out);
        Ok(())
    }

    fn write_body(&self, out: &mut SourceBuffer) -> GenerationResult<()>;

    /// Default: nothing
    fn write_trailer(&self, _out: &mut SourceBuffer) -> GenerationResult<()> {
        Ok(())
    }

    /// Default: `}`
    fn write_close(&self, out: &mut SourceBuffer) -> GenerationResult<()> {
        out.append_line("}");
        Ok(())
    }

    /// Persist auxiliary files after the main source was handed off
    fn write_resources(&self, _sink: &mut dyn SourceSink) -> GenerationResult<()> {
        Ok(())
    }
}

/// Run the pipeline for one emitter
///
/// Takes ownership of `buffer`, clears it, fills it, hands it to `sink`, and
/// returns it for the next emitter in a chain.
pub fn run(
    emitter: &dyn Emitter,
    mut buffer: SourceBuffer,
    sink: &mut dyn SourceSink,
) -> GenerationResult<SourceBuffer> {
    let ctx = emitter.context();
    ctx.check()?;

    let mut stages = StageTracker::new();
    buffer.clear();

    while let Some(stage) = stages.step()? {
        match stage {
            GenerationStage::Init => {}
            GenerationStage::WriteHeader => write_header(ctx, &mut buffer),
            GenerationStage::WriteImports => {
                emitter.write_imports(&mut buffer)?;
                buffer.blank_line();
            }
            GenerationStage::WriteDeclaration => emitter.write_declaration(&mut buffer)?,
            GenerationStage::WriteFields => emitter.write_fields(&mut buffer)?,
            GenerationStage::WriteBody => emitter.write_body(&mut buffer)?,
            GenerationStage::WriteTrailerHooks => emitter.write_trailer(&mut buffer)?,
            GenerationStage::WriteClose => emitter.write_close(&mut buffer)?,
            GenerationStage::Handoff => {
                sink.persist(&SourceUnit {
                    owner: ctx.source,
                    content: buffer.as_str(),
                    file_name: &ctx.class_name,
                    namespace: &ctx.namespace,
                    extension: ctx.language.extension(),
                })?;
                emitter.write_resources(sink)?;
            }
        }
    }

    debug!(
        class = %ctx.class_name,
        namespace = %ctx.namespace,
        language = ctx.language.extension(),
        bytes = buffer.len(),
        "generated source"
    );
    Ok(buffer)
}

fn write_header(ctx: &GenerationContext<'_>, out: &mut SourceBuffer) {
    if ctx.namespace.is_empty() {
        return;
    }
    out.append_line(&format!(
        "package {}{}",
        ctx.namespace,
        ctx.language.terminator()
    ));
    out.blank_line();
}

/// Class header used by the default declaration hook
pub fn write_class_header(ctx: &GenerationContext<'_>, out: &mut SourceBuffer) {
    match ctx.language {
        TargetLanguage::Java => {
            out.append_line("@SuppressWarnings(\"unchecked\")");
            out.append_line(&format!("public final class {} {{", ctx.class_name));
        }
        TargetLanguage::Kotlin => {
            out.append_line(&format!("class {} {{", ctx.class_name));
        }
    }
    out.blank_line();
}

/// Field declarations used by the default fields hook
pub fn write_source_fields(ctx: &GenerationContext<'_>, out: &mut SourceBuffer) {
    if ctx.source.fields.is_empty() {
        return;
    }
    for field in &ctx.source.fields {
        let ty = map_type(&field.ty);
        let line = match ctx.language {
            TargetLanguage::Java => {
                format!("{} {} {};", field.visibility(), ty.java, field.name)
            }
            TargetLanguage::Kotlin => format!(
                "{} var {}: {} = null",
                field.visibility(),
                field.name,
                ty.kotlin_type(true)
            ),
        };
        out.line(1, &line);
    }
    out.blank_line();
}

#[cfg(test)]
#[path = "template/template_tests.rs"]
mod template_tests;
