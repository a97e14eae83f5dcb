//! Type classification
//!
//! [`classify`] maps a [`TypeRef`] onto the small set of shapes the
//! marshalling rules care about. It is total, deterministic and stateless.

use crate::metadata::TypeRef;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Qualified name of the string type
pub const STRING_TYPE: &str = "java.lang.String";

/// JVM primitive kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
}

impl PrimitiveKind {
    /// Every primitive kind, in declaration order
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Short,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::Char,
    ];

    /// Match a primitive type name such as `int`
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Match a boxed type name such as `java.lang.Integer`
    ///
    /// `java.lang.Character` is deliberately not matched: it classifies as a
    /// composite object.
    pub fn from_boxed_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .filter(|kind| *kind != PrimitiveKind::Char)
            .find(|kind| kind.boxed_name() == name)
    }

    /// Source name of the primitive
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Char => "char",
        }
    }

    /// Qualified name of the boxed wrapper
    pub fn boxed_name(&self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "java.lang.Boolean",
            PrimitiveKind::Byte => "java.lang.Byte",
            PrimitiveKind::Short => "java.lang.Short",
            PrimitiveKind::Int => "java.lang.Integer",
            PrimitiveKind::Long => "java.lang.Long",
            PrimitiveKind::Float => "java.lang.Float",
            PrimitiveKind::Double => "java.lang.Double",
            PrimitiveKind::Char => "java.lang.Character",
        }
    }

    /// Unqualified name of the boxed wrapper (`Integer`)
    pub fn boxed_simple_name(&self) -> &'static str {
        let name = self.boxed_name();
        name.rsplit_once('.').map_or(name, |(_, simple)| simple)
    }

    /// Parse a wire literal the way the generated client does
    ///
    /// Booleans never fail: anything other than a case-insensitive `true` is
    /// `false`. Integers are parsed exactly, floats tolerate surrounding
    /// whitespace, and `char` takes the first character.
    pub fn parse_literal(&self, text: &str) -> Result<PrimitiveValue, LiteralError> {
        let fail = || LiteralError {
            kind: *self,
            text: text.to_string(),
        };
        let value = match self {
            PrimitiveKind::Boolean => PrimitiveValue::Boolean(text.eq_ignore_ascii_case("true")),
            PrimitiveKind::Byte => PrimitiveValue::Byte(text.parse().map_err(|_| fail())?),
            PrimitiveKind::Short => PrimitiveValue::Short(text.parse().map_err(|_| fail())?),
            PrimitiveKind::Int => PrimitiveValue::Int(text.parse().map_err(|_| fail())?),
            PrimitiveKind::Long => PrimitiveValue::Long(text.parse().map_err(|_| fail())?),
            PrimitiveKind::Float => {
                PrimitiveValue::Float(text.trim().parse().map_err(|_| fail())?)
            }
            PrimitiveKind::Double => {
                PrimitiveValue::Double(text.trim().parse().map_err(|_| fail())?)
            }
            PrimitiveKind::Char => PrimitiveValue::Char(text.chars().next().ok_or_else(fail)?),
        };
        Ok(value)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded primitive value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimitiveValue {
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Char(char),
}

impl PrimitiveValue {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            PrimitiveValue::Boolean(_) => PrimitiveKind::Boolean,
            PrimitiveValue::Byte(_) => PrimitiveKind::Byte,
            PrimitiveValue::Short(_) => PrimitiveKind::Short,
            PrimitiveValue::Int(_) => PrimitiveKind::Int,
            PrimitiveValue::Long(_) => PrimitiveKind::Long,
            PrimitiveValue::Float(_) => PrimitiveKind::Float,
            PrimitiveValue::Double(_) => PrimitiveKind::Double,
            PrimitiveValue::Char(_) => PrimitiveKind::Char,
        }
    }
}

/// Renders the literal text that [`PrimitiveKind::parse_literal`] reads back
impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveValue::Boolean(v) => write!(f, "{v}"),
            PrimitiveValue::Byte(v) => write!(f, "{v}"),
            PrimitiveValue::Short(v) => write!(f, "{v}"),
            PrimitiveValue::Int(v) => write!(f, "{v}"),
            PrimitiveValue::Long(v) => write!(f, "{v}"),
            PrimitiveValue::Float(v) => write!(f, "{v}"),
            PrimitiveValue::Double(v) => write!(f, "{v}"),
            PrimitiveValue::Char(v) => write!(f, "{v}"),
        }
    }
}

/// A wire literal that does not parse as the requested primitive
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot parse {text:?} as {kind}")]
pub struct LiteralError {
    pub kind: PrimitiveKind,
    pub text: String,
}

/// Shape of a type as seen by the marshalling rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeClass {
    Primitive(PrimitiveKind),
    BoxedPrimitive(PrimitiveKind),
    StringType,
    ByteArray,
    ArrayOf(Box<TypeClass>),
    CompositeObject,
}

/// Classify a type reference
///
/// Rules apply in order: primitive, boxed primitive, string, `byte[]`, other
/// arrays (recursively on the component), and everything else is composite.
/// `void` is never passed here by the generators and falls into the last rule.
pub fn classify(ty: &TypeRef) -> TypeClass {
    match ty {
        TypeRef::Named(name) => {
            if let Some(kind) = PrimitiveKind::from_name(name) {
                TypeClass::Primitive(kind)
            } else if let Some(kind) = PrimitiveKind::from_boxed_name(name) {
                TypeClass::BoxedPrimitive(kind)
            } else if name == STRING_TYPE {
                TypeClass::StringType
            } else {
                TypeClass::CompositeObject
            }
        }
        TypeRef::Array(component) => match component.as_ref() {
            TypeRef::Named(name) if name == PrimitiveKind::Byte.name() => TypeClass::ByteArray,
            other => TypeClass::ArrayOf(Box::new(classify(other))),
        },
    }
}
