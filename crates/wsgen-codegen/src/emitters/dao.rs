//! Room DAO emitter

use super::entity::model_namespace;
use super::{key_field, primary_key_field};
use crate::buffer::SourceBuffer;
use crate::jvm_types::map_type;
use crate::naming::{decapitalize, kotlin_string_literal, plural_parameter};
use crate::template::{Emitter, GenerationContext, TargetLanguage};
use tracing::warn;
use wsgen_core::{FieldDescriptor, GenerationResult, GeneratorConfig, TypeDescriptor};

/// Emits `<Type>Dao.kt`, the data access interface of one entity
///
/// Keyed lookups (`selectSingleBy`, `selectAllBy`, `selectAllByRange`,
/// `isExists`) are only generated when the entity has a primitive or string
/// field to key on. The lookups assume that field is unique, which only the
/// schema guarantees when it is also the entity's primary key.
pub struct DaoEmitter<'a> {
    ctx: GenerationContext<'a>,
    model_namespace: String,
    key: Option<&'a FieldDescriptor>,
}

impl<'a> DaoEmitter<'a> {
    pub fn new(ty: &'a TypeDescriptor, config: &GeneratorConfig) -> Self {
        let key = key_field(ty, config);
        if let (Some(key), Some(primary)) = (key, primary_key_field(ty, config))
            && key.name != primary.name
        {
            warn!(
                ty = %ty.qualified_name(),
                key = %key.name,
                primary_key = %primary.name,
                "keyed lookups use a field that is not the primary key"
            );
        }

        Self {
            ctx: GenerationContext::new(
                ty,
                dao_class_name(ty),
                dao_namespace(ty, config),
                TargetLanguage::Kotlin,
            ),
            model_namespace: model_namespace(ty, config),
            key,
        }
    }

    fn entity(&self) -> &str {
        &self.ctx.source.name
    }

    fn write_sync(&self, out: &mut SourceBuffer) {
        let (entity, items) = (self.entity(), plural_parameter(self.entity()));
        out.line(1, "@Transaction");
        out.line(1, &format!("suspend fun syncData({items}: Array<{entity}>) {{"));
        out.line(2, "deleteAll()");
        out.line(2, &format!("insertRange({items})"));
        out.line(1, "}");
        out.blank_line();
    }

    fn write_selects(&self, out: &mut SourceBuffer) {
        let entity = self.entity();
        query(out, &format!("SELECT * FROM {entity}"));
        signature(out, &format!("fun selectAll(): LiveData<Array<{entity}>>"));

        let Some(key) = self.key else {
            return;
        };
        let (name, ty) = (&key.name, map_type(&key.ty).kotlin);
        query(out, &format!("SELECT * FROM {entity} WHERE {name} = :{name}"));
        signature(out, &format!("fun selectSingleBy({name}: {ty}): LiveData<{entity}>"));
        query(out, &format!("SELECT * FROM {entity} WHERE {name} = :{name}"));
        signature(
            out,
            &format!("fun selectAllBy({name}: {ty}): LiveData<Array<{entity}>>"),
        );
        query(out, &format!("SELECT * FROM {entity} WHERE {name} IN (:{name})"));
        signature(
            out,
            &format!("fun selectAllByRange({name}: Array<{ty}>): LiveData<Array<{entity}>>"),
        );
        query(
            out,
            &format!("SELECT EXISTS(SELECT 1 FROM {entity} WHERE {name} = :{name})"),
        );
        signature(out, &format!("fun isExists({name}: {ty}): LiveData<Boolean>"));
    }

    fn write_mutations(&self, out: &mut SourceBuffer) {
        let entity = self.entity();
        let (item, items) = (decapitalize(entity), plural_parameter(entity));

        out.line(1, "@Insert(onConflict = OnConflictStrategy.REPLACE)");
        signature(out, &format!("suspend fun insert({item}: {entity}): Long"));
        out.line(1, "@Insert(onConflict = OnConflictStrategy.REPLACE)");
        signature(
            out,
            &format!("suspend fun insertRange({items}: Array<{entity}>): List<Long>"),
        );

        out.line(1, "@Delete");
        signature(out, &format!("suspend fun delete({item}: {entity})"));
        out.line(1, "@Delete");
        signature(out, &format!("suspend fun deleteRange({items}: Array<{entity}>)"));
        query(out, &format!("DELETE FROM {entity}"));
        signature(out, "suspend fun deleteAll()");

        query(out, &format!("SELECT COUNT(*) FROM {entity}"));
        signature(out, "fun count(): LiveData<Int>");

        out.line(1, "@Update");
        signature(out, &format!("suspend fun update({item}: {entity}): Int"));
        out.line(1, "@Update");
        signature(out, &format!("suspend fun updateRange({items}: Array<{entity}>): Int"));
    }
}

/// Class name of the DAO generated for `ty`
pub(crate) fn dao_class_name(ty: &TypeDescriptor) -> String {
    format!("{}Dao", ty.name)
}

/// Namespace of the DAO generated for `ty`
pub(crate) fn dao_namespace(ty: &TypeDescriptor, config: &GeneratorConfig) -> String {
    format!("{}.dao", config.room_namespace(&ty.namespace))
}

fn query(out: &mut SourceBuffer, sql: &str) {
    out.line(1, &format!("@Query({})", kotlin_string_literal(sql)));
}

fn signature(out: &mut SourceBuffer, declaration: &str) {
    out.line(1, declaration);
    out.blank_line();
}

impl Emitter for DaoEmitter<'_> {
    fn context(&self) -> &GenerationContext<'_> {
        &self.ctx
    }

    fn write_imports(&self, out: &mut SourceBuffer) -> GenerationResult<()> {
        out.append_line(&self.ctx.import("androidx.lifecycle.LiveData"));
        for annotation in [
            "Dao",
            "Delete",
            "Insert",
            "OnConflictStrategy",
            "Query",
            "Transaction",
            "Update",
        ] {
            out.append_line(&self.ctx.import(&format!("androidx.room.{annotation}")));
        }
        out.append_line(
            &self
                .ctx
                .import(&format!("{}.{}", self.model_namespace, self.entity())),
        );
        Ok(())
    }

    fn write_declaration(&self, out: &mut SourceBuffer) -> GenerationResult<()> {
        out.append_line("/**");
        out.append_line(&format!(
            " * The Data Access Object for the [{}] class.",
            self.entity()
        ));
        out.append_line(" */");
        out.append_line("@Dao");
        out.append_line(&format!("interface {} {{", self.ctx.class_name));
        out.blank_line();
        Ok(())
    }

    fn write_fields(&self, _out: &mut SourceBuffer) -> GenerationResult<()> {
        Ok(())
    }

    fn write_body(&self, out: &mut SourceBuffer) -> GenerationResult<()> {
        self.write_sync(out);
        self.write_selects(out);
        self.write_mutations(out);
        Ok(())
    }
}
