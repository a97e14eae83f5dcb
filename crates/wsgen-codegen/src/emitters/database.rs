//! Room database container emitter

use super::dao::{dao_class_name, dao_namespace};
use super::entity::model_namespace;
use super::entity_types;
use crate::buffer::SourceBuffer;
use crate::naming::{client_class_name, decapitalize, kotlin_string_literal};
use crate::template::{Emitter, GenerationContext, TargetLanguage};
use std::collections::BTreeSet;
use wsgen_core::{GenerationResult, GeneratorConfig, TypeDescriptor, TypeRegistry};

/// Emits `<Service>Database.kt` next to the DAOs of a data type
///
/// Every data type of the registry is listed as an entity and gets an
/// abstract DAO accessor. Instances come from a double-checked singleton.
pub struct DatabaseContainerEmitter<'a> {
    ctx: GenerationContext<'a>,
    members: Vec<&'a TypeDescriptor>,
    imports: BTreeSet<String>,
    version: u32,
}

impl<'a> DatabaseContainerEmitter<'a> {
    pub fn new(
        ty: &'a TypeDescriptor,
        registry: &'a TypeRegistry,
        interface: &TypeDescriptor,
        stub: &TypeDescriptor,
        config: &GeneratorConfig,
    ) -> Self {
        let members = entity_types(registry, interface, stub, config);
        let imports = members
            .iter()
            .flat_map(|member| {
                [
                    format!("{}.{}", model_namespace(member, config), member.name),
                    format!("{}.{}", dao_namespace(member, config), dao_class_name(member)),
                ]
            })
            .collect();

        Self {
            ctx: GenerationContext::new(
                ty,
                database_class_name(stub),
                config.room_namespace(&ty.namespace),
                TargetLanguage::Kotlin,
            ),
            members,
            imports,
            version: config.database_version,
        }
    }
}

/// `Ims_wsSoapStub` → `ImsWsSoapDatabase`
pub(crate) fn database_class_name(stub: &TypeDescriptor) -> String {
    format!("{}Database", client_class_name(&stub.name))
}

impl Emitter for DatabaseContainerEmitter<'_> {
    fn context(&self) -> &GenerationContext<'_> {
        &self.ctx
    }

    fn write_imports(&self, out: &mut SourceBuffer) -> GenerationResult<()> {
        for import in [
            "android.content.Context",
            "androidx.room.Database",
            "androidx.room.Room",
            "androidx.room.RoomDatabase",
            "androidx.sqlite.db.SupportSQLiteDatabase",
        ] {
            out.append_line(&self.ctx.import(import));
        }
        for import in &self.imports {
            out.append_line(&self.ctx.import(import));
        }
        Ok(())
    }

    fn write_declaration(&self, out: &mut SourceBuffer) -> GenerationResult<()> {
        let entities = self
            .members
            .iter()
            .map(|member| format!("{}::class", member.name))
            .collect::<Vec<_>>()
            .join(", ");

        out.append_line("/**");
        out.append_line(" * The Room database for this app");
        out.append_line(" */");
        out.append_line(&format!(
            "@Database(entities = [{entities}], version = {}, exportSchema = false)",
            self.version
        ));
        out.append_line(&format!(
            "abstract class {} : RoomDatabase() {{",
            self.ctx.class_name
        ));
        out.blank_line();
        Ok(())
    }

    fn write_fields(&self, _out: &mut SourceBuffer) -> GenerationResult<()> {
        Ok(())
    }

    fn write_body(&self, out: &mut SourceBuffer) -> GenerationResult<()> {
        for member in &self.members {
            out.line(
                1,
                &format!(
                    "abstract fun {}Dao(): {}",
                    decapitalize(&member.name),
                    dao_class_name(member)
                ),
            );
            out.blank_line();
        }
        Ok(())
    }

    fn write_trailer(&self, out: &mut SourceBuffer) -> GenerationResult<()> {
        let class = &self.ctx.class_name;
        out.line(1, "companion object {");
        out.line(2, &format!("@Volatile private var instance: {class}? = null"));
        out.blank_line();
        out.line(2, &format!("fun getInstance(context: Context): {class} {{"));
        out.line(3, "return instance ?: synchronized(this) {");
        out.line(4, "instance ?: buildDatabase(context).also { instance = it }");
        out.line(3, "}");
        out.line(2, "}");
        out.blank_line();
        out.line(2, &format!("private fun buildDatabase(context: Context): {class} {{"));
        out.line(
            3,
            &format!(
                "return Room.databaseBuilder(context, {class}::class.java, {})",
                kotlin_string_literal(class)
            ),
        );
        out.line(4, ".addCallback(object : RoomDatabase.Callback() {");
        out.line(5, "override fun onCreate(db: SupportSQLiteDatabase) {");
        out.line(6, "super.onCreate(db)");
        out.line(5, "}");
        out.line(4, "})");
        out.line(4, ".build()");
        out.line(2, "}");
        out.line(1, "}");
        Ok(())
    }
}
