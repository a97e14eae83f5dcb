//! Marshalling and unmarshalling rules
//!
//! Every parameter gets an [`OutboundRule`] deciding how it is attached to the
//! request envelope, and every return type gets an [`InboundRule`] deciding how
//! the response is converted back. Rules are plain data: the synchronous
//! client emitter renders them as Java statements, and [`InboundRule::decode`]
//! evaluates the same conversion against a simulated [`WireValue`].
//!
//! The evaluator never runs during generation. It is the executable reference
//! for what the rendered Java does with a response (literal parsing, base64,
//! `NotFound` on empty arrays) and is what the property tests check rules
//! against.
//!
//! | Class | Outbound | Inbound |
//! |-------|----------|---------|
//! | primitive | stringify and attach | literal parser |
//! | boxed primitive | attach | literal parser of its kind |
//! | string | attach | response text |
//! | `byte[]` | base64 `SoapPrimitive` | base64 decode |
//! | array | `java.util.Vector` of converted elements | per-element conversion, `NotFound` when empty |
//! | composite | `PropertyInfo` with the type's namespace | positional property copy |

use crate::buffer::SourceBuffer;
use crate::jvm_types::map_type;
use crate::naming::java_string_literal;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fmt;
use thiserror::Error;
use wsgen_core::{PrimitiveKind, PrimitiveValue, TypeClass, TypeRef, classify};

const BASE64_CLASS: &str = "org.kobjects.base64.Base64";

/// Conversion applied to each element of an outbound array
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementRule {
    /// Wrap the primitive element in its boxed type
    BoxWrapper(PrimitiveKind),
    /// Add the element unchanged
    AsIs,
}

impl ElementRule {
    fn for_class(class: &TypeClass) -> Self {
        match class {
            TypeClass::Primitive(kind) if *kind != PrimitiveKind::Char => {
                ElementRule::BoxWrapper(*kind)
            }
            _ => ElementRule::AsIs,
        }
    }

    fn render(&self, element: &str) -> String {
        match self {
            ElementRule::BoxWrapper(kind) => {
                format!("{}.valueOf({element})", kind.boxed_simple_name())
            }
            ElementRule::AsIs => element.to_string(),
        }
    }
}

/// How one parameter is attached to the request envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundRule {
    /// Convert to text and attach
    Stringify,
    /// Attach the value unchanged
    AttachDirect,
    /// Attach as a base64 encoded primitive
    Base64Encode,
    /// Copy into a `java.util.Vector`, converting each element
    Collection(ElementRule),
    /// Attach through a `PropertyInfo` carrying the type namespace
    PropertyInfo { namespace: String },
}

/// Per-method state shared by consecutive outbound renders
#[derive(Debug, Default)]
pub struct MarshalState {
    vector_declared: bool,
}

impl OutboundRule {
    /// Select the rule for a parameter type
    pub fn for_type(ty: &TypeRef) -> Self {
        match classify(ty) {
            TypeClass::Primitive(_) => OutboundRule::Stringify,
            TypeClass::BoxedPrimitive(_) | TypeClass::StringType => OutboundRule::AttachDirect,
            TypeClass::ByteArray => OutboundRule::Base64Encode,
            TypeClass::ArrayOf(component) => {
                OutboundRule::Collection(ElementRule::for_class(&component))
            }
            TypeClass::CompositeObject => OutboundRule::PropertyInfo {
                namespace: ty.namespace().to_string(),
            },
        }
    }

    /// Render the attachment statements for parameter `name`
    pub fn render(&self, name: &str, state: &mut MarshalState, out: &mut SourceBuffer) {
        let property = java_string_literal(name);
        match self {
            OutboundRule::Stringify => {
                out.line(2, &format!("_client.addProperty({property}, {name} + \"\");"));
            }
            OutboundRule::AttachDirect => {
                out.line(2, &format!("_client.addProperty({property}, {name});"));
            }
            OutboundRule::Base64Encode => {
                out.line(
                    2,
                    &format!(
                        "_client.addProperty({property}, new SoapPrimitive(SoapEnvelope.ENC, \"base64\", {BASE64_CLASS}.encode({name})));"
                    ),
                );
            }
            OutboundRule::Collection(element) => {
                if state.vector_declared {
                    out.line(2, "_vector = new java.util.Vector();");
                } else {
                    out.line(2, "java.util.Vector _vector = new java.util.Vector();");
                    state.vector_declared = true;
                }
                out.line(2, &format!("if ({name} != null) {{"));
                out.line(3, &format!("for (int _i = 0; _i < {name}.length; _i++) {{"));
                out.line(
                    4,
                    &format!("_vector.addElement({});", element.render(&format!("{name}[_i]"))),
                );
                out.line(3, "}");
                out.line(2, "}");
                out.line(2, &format!("_client.addProperty({property}, _vector);"));
            }
            OutboundRule::PropertyInfo { namespace } => {
                let variable = format!("_{name}Property");
                out.line(2, &format!("PropertyInfo {variable} = new PropertyInfo();"));
                out.line(
                    2,
                    &format!("{variable}.setNamespace({});", java_string_literal(namespace)),
                );
                out.line(2, &format!("{variable}.setName({property});"));
                out.line(2, &format!("{variable}.setValue({name});"));
                out.line(2, &format!("_client.addProperty({variable});"));
            }
        }
    }
}

/// ksoap2 class the response is cast to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Primitive,
    Object,
}

impl ResponseKind {
    pub fn java_class(&self) -> &'static str {
        match self {
            ResponseKind::Primitive => "SoapPrimitive",
            ResponseKind::Object => "SoapObject",
        }
    }
}

/// Conversion of one element of an array response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementDecode {
    /// Parse the element text as a primitive
    Parse(PrimitiveKind),
    /// Keep the element text
    Text,
    /// Construct the named composite from the element object
    Construct(String),
    /// Cast the element to the named array type
    Cast(String),
}

impl ElementDecode {
    fn for_component(class: &TypeClass, component: &TypeRef) -> Self {
        match class {
            TypeClass::Primitive(kind) | TypeClass::BoxedPrimitive(kind) => {
                ElementDecode::Parse(*kind)
            }
            TypeClass::StringType => ElementDecode::Text,
            TypeClass::CompositeObject => ElementDecode::Construct(component.simple_name()),
            TypeClass::ByteArray | TypeClass::ArrayOf(_) => {
                ElementDecode::Cast(map_type(component).java)
            }
        }
    }

    fn render(&self, element: &str) -> String {
        match self {
            ElementDecode::Parse(kind) => parse_expression(*kind, &format!("{element}.toString()")),
            ElementDecode::Text => format!("{element}.toString()"),
            ElementDecode::Construct(name) => format!("new {name}((SoapObject) {element})"),
            ElementDecode::Cast(java) => format!("({java}) {element}"),
        }
    }

    fn decode(&self, element: &WireValue) -> Result<DecodedValue, DecodeFailure> {
        match (self, element) {
            (ElementDecode::Parse(kind), _) => parse_wire(*kind, &element.text()),
            (ElementDecode::Text, _) => Ok(DecodedValue::Text(element.text())),
            (ElementDecode::Construct(name), WireValue::Object(properties))
            | (ElementDecode::Cast(name), WireValue::Object(properties)) => {
                Ok(DecodedValue::Object {
                    type_name: name.clone(),
                    properties: properties.clone(),
                })
            }
            (ElementDecode::Construct(name), WireValue::Primitive(_))
            | (ElementDecode::Cast(name), WireValue::Primitive(_)) => Err(
                DecodeFailure::Conversion(format!("primitive element cannot be cast to {name}")),
            ),
        }
    }
}

/// How the response is converted to the declared return type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundRule {
    /// `void`: no conversion
    Nothing,
    /// Response text
    Text,
    /// Literal parser of a primitive kind
    Parse(PrimitiveKind),
    /// Base64 decoded response text
    Base64Decode,
    /// New instance with every positional property copied
    CopyProperties { type_name: String },
    /// One converted element per response property
    Array {
        element: ElementDecode,
        component: TypeRef,
        method: String,
    },
}

impl InboundRule {
    /// Select the rule for the return type of `method`
    pub fn for_return(ty: &TypeRef, method: &str) -> Self {
        if ty.is_void() {
            return InboundRule::Nothing;
        }
        match (classify(ty), ty.component()) {
            (TypeClass::Primitive(kind) | TypeClass::BoxedPrimitive(kind), _) => {
                InboundRule::Parse(kind)
            }
            (TypeClass::StringType, _) => InboundRule::Text,
            (TypeClass::ByteArray, _) => InboundRule::Base64Decode,
            (TypeClass::ArrayOf(class), Some(component)) => InboundRule::Array {
                element: ElementDecode::for_component(&class, component),
                component: component.clone(),
                method: method.to_string(),
            },
            _ => InboundRule::CopyProperties {
                type_name: ty.simple_name(),
            },
        }
    }

    /// Class the raw response is cast to before conversion
    pub fn response_kind(&self) -> ResponseKind {
        match self {
            InboundRule::Text | InboundRule::Parse(_) | InboundRule::Base64Decode => {
                ResponseKind::Primitive
            }
            InboundRule::Nothing | InboundRule::CopyProperties { .. } | InboundRule::Array { .. } => {
                ResponseKind::Object
            }
        }
    }

    /// Render the conversion of `_ret` and the final `return` statements
    pub fn render(&self, out: &mut SourceBuffer) {
        match self {
            InboundRule::Nothing => {}
            InboundRule::Text => {
                out.line(2, "return new Result.Success<>(_ret.toString());");
            }
            InboundRule::Parse(kind) => {
                out.line(
                    2,
                    &format!(
                        "return new Result.Success<>({});",
                        parse_expression(*kind, "_ret.toString()")
                    ),
                );
            }
            InboundRule::Base64Decode => {
                out.line(
                    2,
                    &format!("return new Result.Success<>({BASE64_CLASS}.decode(_ret.toString()));"),
                );
            }
            InboundRule::CopyProperties { type_name } => {
                out.line(2, "int _len = _ret.getPropertyCount();");
                out.line(2, &format!("{type_name} _returned = new {type_name}();"));
                out.line(2, "for (int _i = 0; _i < _len; _i++) {");
                out.line(3, "_returned.setProperty(_i, _ret.getProperty(_i));");
                out.line(2, "}");
                out.line(2, "return new Result.Success<>(_returned);");
            }
            InboundRule::Array {
                element,
                component,
                method,
            } => {
                let message = java_string_literal(&not_found_message(method));
                let array_type = format!("{}[]", map_type(component).java);
                out.line(2, "if (_ret.getPropertyCount() == 0) {");
                out.line(
                    3,
                    &format!("return new Result.Error(new Resources.NotFoundException({message}));"),
                );
                out.line(2, "}");
                out.line(
                    2,
                    &format!(
                        "{array_type} returnArrayObject = {};",
                        array_allocation(component, "_ret.getPropertyCount()")
                    ),
                );
                out.line(2, "try {");
                out.line(
                    3,
                    "for (int rowIndex = 0; rowIndex < _ret.getPropertyCount(); rowIndex++) {",
                );
                out.line(
                    4,
                    &format!(
                        "returnArrayObject[rowIndex] = {};",
                        element.render("_ret.getProperty(rowIndex)")
                    ),
                );
                out.line(3, "}");
                out.line(2, "} catch (RuntimeException exception) {");
                out.line(3, "return new Result.Error(exception);");
                out.line(2, "}");
                out.line(2, "return new Result.Success<>(returnArrayObject);");
            }
        }
    }

    /// Evaluate the conversion against a simulated response
    ///
    /// Mirrors the generated Java: a response of the wrong shape fails the
    /// cast, an empty array response is `NotFound`, and one bad element fails
    /// the whole array.
    pub fn decode(&self, response: &WireValue) -> Result<DecodedValue, DecodeFailure> {
        match (self.response_kind(), response) {
            (ResponseKind::Primitive, WireValue::Object(_)) => {
                return Err(DecodeFailure::Conversion(
                    "object response cannot be cast to SoapPrimitive".to_string(),
                ));
            }
            (ResponseKind::Object, WireValue::Primitive(_)) if *self != InboundRule::Nothing => {
                return Err(DecodeFailure::Conversion(
                    "primitive response cannot be cast to SoapObject".to_string(),
                ));
            }
            _ => {}
        }

        match self {
            InboundRule::Nothing => Ok(DecodedValue::Unit),
            InboundRule::Text => Ok(DecodedValue::Text(response.text())),
            InboundRule::Parse(kind) => parse_wire(*kind, &response.text()),
            InboundRule::Base64Decode => STANDARD
                .decode(response.text())
                .map(DecodedValue::Bytes)
                .map_err(|e| DecodeFailure::Conversion(e.to_string())),
            InboundRule::CopyProperties { type_name } => Ok(DecodedValue::Object {
                type_name: type_name.clone(),
                properties: response.properties().to_vec(),
            }),
            InboundRule::Array {
                element, method, ..
            } => {
                let properties = response.properties();
                if properties.is_empty() {
                    return Err(DecodeFailure::NotFound(not_found_message(method)));
                }
                properties
                    .iter()
                    .map(|property| element.decode(property))
                    .collect::<Result<Vec<_>, _>>()
                    .map(DecodedValue::Array)
            }
        }
    }
}

fn not_found_message(method: &str) -> String {
    format!("{method} didn't return any value.")
}

fn parse_expression(kind: PrimitiveKind, text: &str) -> String {
    match kind {
        PrimitiveKind::Boolean => format!("Boolean.parseBoolean({text})"),
        PrimitiveKind::Byte => format!("Byte.parseByte({text})"),
        PrimitiveKind::Short => format!("Short.parseShort({text})"),
        PrimitiveKind::Int => format!("Integer.parseInt({text})"),
        PrimitiveKind::Long => format!("Long.parseLong({text})"),
        PrimitiveKind::Float => format!("Float.parseFloat({text})"),
        PrimitiveKind::Double => format!("Double.parseDouble({text})"),
        PrimitiveKind::Char => format!("{text}.charAt(0)"),
    }
}

fn parse_wire(kind: PrimitiveKind, text: &str) -> Result<DecodedValue, DecodeFailure> {
    kind.parse_literal(text)
        .map(DecodedValue::Primitive)
        .map_err(|e| DecodeFailure::Conversion(e.to_string()))
}

/// Java allocation expression for an array of `component` with `length` slots
///
/// Extra dimensions go after the sized one: `new int[n][]`.
fn array_allocation(component: &TypeRef, length: &str) -> String {
    let (element, dimensions) = component.innermost();
    format!(
        "new {}[{length}]{}",
        map_type(element).java,
        "[]".repeat(dimensions)
    )
}

/// Simulated ksoap2 response value
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    /// A `SoapPrimitive` carrying literal text
    Primitive(String),
    /// A `SoapObject` with positional properties
    Object(Vec<WireValue>),
}

impl WireValue {
    pub fn primitive(text: impl Into<String>) -> Self {
        WireValue::Primitive(text.into())
    }

    /// `toString()` of the value
    pub fn text(&self) -> String {
        self.to_string()
    }

    /// Positional properties, empty for primitives
    pub fn properties(&self) -> &[WireValue] {
        match self {
            WireValue::Primitive(_) => &[],
            WireValue::Object(properties) => properties,
        }
    }
}

impl fmt::Display for WireValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireValue::Primitive(text) => f.write_str(text),
            WireValue::Object(properties) => {
                f.write_str("anyType{")?;
                for property in properties {
                    write!(f, "{property}; ")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Result of a successful conversion
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedValue {
    Unit,
    Text(String),
    Primitive(PrimitiveValue),
    Bytes(Vec<u8>),
    Object {
        type_name: String,
        properties: Vec<WireValue>,
    },
    Array(Vec<DecodedValue>),
}

/// Failure result of a conversion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeFailure {
    /// An array response carried no elements
    #[error("{0}")]
    NotFound(String),

    /// The response did not have the expected shape or content
    #[error("conversion failed: {0}")]
    Conversion(String),
}
