//! Room entity emitter

use super::persisted_fields;
use crate::buffer::SourceBuffer;
use crate::jvm_types::map_type;
use crate::naming::kotlin_string_literal;
use crate::template::{Emitter, GenerationContext, TargetLanguage};
use wsgen_core::{FieldDescriptor, GenerationError, GenerationResult, GeneratorConfig, TypeDescriptor};

/// Emits `<Type>.kt` as a Room `@Entity` data class
///
/// The first persisted field is the non-null primary key; every other field
/// is nullable.
pub struct EntityEmitter<'a> {
    ctx: GenerationContext<'a>,
    fields: Vec<&'a FieldDescriptor>,
}

impl<'a> EntityEmitter<'a> {
    pub fn new(ty: &'a TypeDescriptor, config: &GeneratorConfig) -> Self {
        Self {
            ctx: GenerationContext::new(
                ty,
                ty.name.clone(),
                model_namespace(ty, config),
                TargetLanguage::Kotlin,
            ),
            fields: persisted_fields(ty, config),
        }
    }
}

/// Namespace of the entity generated for `ty`
pub(crate) fn model_namespace(ty: &TypeDescriptor, config: &GeneratorConfig) -> String {
    format!("{}.model", config.room_namespace(&ty.namespace))
}

impl Emitter for EntityEmitter<'_> {
    fn context(&self) -> &GenerationContext<'_> {
        &self.ctx
    }

    fn write_imports(&self, out: &mut SourceBuffer) -> GenerationResult<()> {
        for import in [
            "androidx.annotation.NonNull",
            "androidx.room.ColumnInfo",
            "androidx.room.Entity",
            "androidx.room.PrimaryKey",
        ] {
            out.append_line(&self.ctx.import(import));
        }
        Ok(())
    }

    fn write_declaration(&self, out: &mut SourceBuffer) -> GenerationResult<()> {
        out.append_line("@Entity");
        out.append_line(&format!("data class {}(", self.ctx.class_name));
        Ok(())
    }

    fn write_fields(&self, out: &mut SourceBuffer) -> GenerationResult<()> {
        if self.fields.is_empty() {
            return Err(GenerationError::MissingInput(format!(
                "persisted fields of {}",
                self.ctx.source.qualified_name()
            )));
        }

        let last = self.fields.len() - 1;
        for (index, field) in self.fields.iter().enumerate() {
            let ty = map_type(&field.ty);
            let column = format!("@ColumnInfo(name = {})", kotlin_string_literal(&field.name));
            let separator = if index == last { "" } else { "," };
            let line = if index == 0 {
                format!(
                    "@NonNull @PrimaryKey {column} val {}: {}{separator}",
                    field.name, ty.kotlin_boxed
                )
            } else {
                format!(
                    "{column} val {}: {}?{separator}",
                    field.name, ty.kotlin_boxed
                )
            };
            out.line(1, &line);
        }
        Ok(())
    }

    fn write_body(&self, _out: &mut SourceBuffer) -> GenerationResult<()> {
        Ok(())
    }

    fn write_close(&self, out: &mut SourceBuffer) -> GenerationResult<()> {
        out.append_line(")");
        Ok(())
    }
}
