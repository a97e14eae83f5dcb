//! Coroutine wrapper emitter (Kotlin)

use super::referenced_composites;
use crate::buffer::SourceBuffer;
use crate::jvm_types::{map_type, primitive_array_conversion};
use crate::naming::decapitalize;
use crate::service::{BoundMethod, ServiceBinding};
use crate::template::{Emitter, GenerationContext, TargetLanguage};
use wsgen_core::{GenerationResult, TypeRef};

/// Emits `<Client>Async.kt`
///
/// Every bound operation becomes a `suspend fun` forwarding to a private
/// synchronous client on `Dispatchers.IO`. The wrapper does no marshalling.
pub struct AsyncRpcWrapperEmitter<'a> {
    ctx: GenerationContext<'a>,
    binding: &'a ServiceBinding<'a>,
    client_field: String,
}

impl<'a> AsyncRpcWrapperEmitter<'a> {
    pub fn new(binding: &'a ServiceBinding<'a>) -> Self {
        Self {
            ctx: GenerationContext::new(
                binding.interface,
                format!("{}Async", binding.client_name),
                binding.namespace.clone(),
                TargetLanguage::Kotlin,
            ),
            binding,
            client_field: decapitalize(&binding.client_name),
        }
    }

    fn write_method(&self, bound: &BoundMethod<'_>, out: &mut SourceBuffer) {
        let signature = bound
            .parameters
            .iter()
            .map(|parameter| format!("{}: {}", parameter.name, parameter_type(&parameter.ty)))
            .collect::<Vec<_>>()
            .join(", ");
        let arguments = bound
            .parameters
            .iter()
            .map(|parameter| {
                let conversion = primitive_array_conversion(&parameter.ty).unwrap_or_default();
                format!("{}{conversion}", parameter.name)
            })
            .collect::<Vec<_>>()
            .join(", ");

        out.line(1, "/**");
        out.line(
            1,
            &format!(
                " * Calls `{}` in `{}` on [Dispatchers.IO].",
                bound.operation_name, bound.wire_namespace
            ),
        );
        out.line(1, " */");
        out.line(
            1,
            &format!(
                "suspend fun {}({signature}): Result<{}>? {{",
                bound.method.name,
                map_type(&bound.method.return_type).kotlin
            ),
        );
        out.line(2, "return withContext(Dispatchers.IO) {");
        out.line(
            3,
            &format!("{}.{}({arguments})", self.client_field, bound.method.name),
        );
        out.line(2, "}");
        out.line(1, "}");
        out.blank_line();
    }
}

/// Kotlin parameter type
///
/// One-dimensional primitive arrays are taken boxed and converted when
/// forwarded; everything else keeps the synchronous client's spelling.
fn parameter_type(ty: &TypeRef) -> String {
    let mapped = map_type(ty);
    if primitive_array_conversion(ty).is_some() {
        mapped.kotlin_boxed
    } else {
        mapped.kotlin
    }
}

impl Emitter for AsyncRpcWrapperEmitter<'_> {
    fn context(&self) -> &GenerationContext<'_> {
        &self.ctx
    }

    fn write_imports(&self, out: &mut SourceBuffer) -> GenerationResult<()> {
        out.append_line(&self.ctx.import("kotlinx.coroutines.Dispatchers"));
        out.append_line(&self.ctx.import("kotlinx.coroutines.withContext"));
        for composite in referenced_composites(self.binding) {
            out.append_line(&self.ctx.import(&composite));
        }
        Ok(())
    }

    fn write_body(&self, out: &mut SourceBuffer) -> GenerationResult<()> {
        for bound in &self.binding.methods {
            self.write_method(bound, out);
        }
        Ok(())
    }

    fn write_trailer(&self, out: &mut SourceBuffer) -> GenerationResult<()> {
        let client = &self.binding.client_name;
        out.line(
            1,
            &format!("private val {}: {client} = {client}()", self.client_field),
        );
        Ok(())
    }
}
