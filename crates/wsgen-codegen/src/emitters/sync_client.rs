//! Synchronous ksoap2 client emitter (Java)

use super::referenced_composites;
use crate::buffer::SourceBuffer;
use crate::jvm_types::map_type;
use crate::marshal::MarshalState;
use crate::naming::java_string_literal;
use crate::service::{BoundMethod, ServiceBinding};
use crate::sink::{SourceSink, SourceUnit};
use crate::support::{CONFIGURATION_CLASS, RESULT_CLASS, configuration_source, result_source};
use crate::template::{Emitter, GenerationContext, TargetLanguage};
use wsgen_core::{GenerationResult, GeneratorConfig, TransportFlavor};

/// Emits `<Client>.java`, one `Result<T>` method per bound operation
///
/// Each method builds a `SoapObject` request, attaches parameters by their
/// outbound rules, calls the endpoint from `Configuration.getWsUrl()` and
/// converts the response by the inbound rule. Call failures become
/// `Result.Error`.
pub struct SyncRpcClientEmitter<'a> {
    ctx: GenerationContext<'a>,
    binding: &'a ServiceBinding<'a>,
    transport: TransportFlavor,
}

impl<'a> SyncRpcClientEmitter<'a> {
    pub fn new(binding: &'a ServiceBinding<'a>, config: &GeneratorConfig) -> Self {
        Self {
            ctx: GenerationContext::new(
                binding.interface,
                binding.client_name.clone(),
                binding.namespace.clone(),
                TargetLanguage::Java,
            ),
            binding,
            transport: config.transport,
        }
    }

    fn write_method(&self, bound: &BoundMethod<'_>, out: &mut SourceBuffer) {
        let return_type = map_type(&bound.method.return_type);
        let parameters = bound
            .parameters
            .iter()
            .map(|parameter| format!("{} {}", map_type(&parameter.ty).java, parameter.name))
            .collect::<Vec<_>>()
            .join(", ");

        out.line(
            1,
            &format!(
                "{} Result<{}> {}({}) {{",
                bound.method.visibility(),
                return_type.java_type(true),
                bound.method.name,
                parameters
            ),
        );
        out.line(
            2,
            &format!("String nameSpace = {};", java_string_literal(&bound.wire_namespace)),
        );
        out.line(
            2,
            &format!("String methodName = {};", java_string_literal(&bound.operation_name)),
        );
        out.line(2, "String soapAction = nameSpace + methodName;");
        out.line(2, "SoapObject _client = new SoapObject(nameSpace, methodName);");

        let mut state = MarshalState::default();
        for (parameter, rule) in bound.parameters.iter().zip(&bound.outbound) {
            rule.render(&parameter.name, &mut state, out);
        }

        let transport = self.transport.class_name();
        let response = bound.inbound.response_kind().java_class();
        out.line(
            2,
            "SoapSerializationEnvelope _envelope = new SoapSerializationEnvelope(SoapEnvelope.VER11);",
        );
        out.line(2, "_envelope.bodyOut = _client;");
        out.line(2, "_envelope.setOutputSoapObject(_client);");
        out.line(2, "_envelope.dotNet = true;");
        out.line(2, "_envelope.implicitTypes = true;");
        out.line(2, "_envelope.setAddAdornments(false);");
        out.line(
            2,
            &format!("{transport} _ht = new {transport}(Configuration.getWsUrl());"),
        );
        out.line(2, &format!("{response} _ret;"));
        out.line(2, "try {");
        out.line(3, "_ht.call(soapAction, _envelope);");
        out.line(3, &format!("_ret = ({response}) _envelope.getResponse();"));
        out.line(2, "} catch (SoapFault fault) {");
        out.line(3, "return new Result.Error(convertToException(fault));");
        out.line(2, "} catch (Exception exception) {");
        out.line(3, "return new Result.Error(exception);");
        out.line(2, "}");
        bound.inbound.render(out);
        out.line(1, "}");
        out.blank_line();
    }
}

impl Emitter for SyncRpcClientEmitter<'_> {
    fn context(&self) -> &GenerationContext<'_> {
        &self.ctx
    }

    fn write_imports(&self, out: &mut SourceBuffer) -> GenerationResult<()> {
        let transport = format!("org.ksoap2.transport.{}", self.transport.class_name());
        for import in [
            "android.content.res.Resources",
            "org.ksoap2.SoapEnvelope",
            "org.ksoap2.SoapFault",
            "org.ksoap2.serialization.PropertyInfo",
            "org.ksoap2.serialization.SoapObject",
            "org.ksoap2.serialization.SoapPrimitive",
            "org.ksoap2.serialization.SoapSerializationEnvelope",
            transport.as_str(),
        ] {
            out.append_line(&self.ctx.import(import));
        }
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
        out.line(1, "private static Exception convertToException(SoapFault fault) {");
        out.line(2, "return new Exception(fault.faultcode + \": \" + fault.faultstring);");
        out.line(1, "}");
        Ok(())
    }

    fn write_resources(&self, sink: &mut dyn SourceSink) -> GenerationResult<()> {
        for (file_name, content) in [
            (RESULT_CLASS, result_source(&self.ctx.namespace)),
            (CONFIGURATION_CLASS, configuration_source(&self.ctx.namespace)),
        ] {
            sink.persist(&SourceUnit {
                owner: self.binding.stub,
                content: &content,
                file_name,
                namespace: &self.ctx.namespace,
                extension: TargetLanguage::Java.extension(),
            })?;
        }
        Ok(())
    }
}
