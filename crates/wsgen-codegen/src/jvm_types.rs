//! JVM type mappings for Java and Kotlin code generation.
//!
//! Both target languages share the JVM type system but spell it differently,
//! most visibly for primitive arrays.
//!
//! # Type Mappings
//!
//! | Type reference | Java | Java (boxed) | Kotlin | Kotlin (boxed) |
//! |----------------|------|--------------|--------|----------------|
//! | `int` | `int` | `Integer` | `Int` | `Int` |
//! | `java.lang.Long` | `Long` | `Long` | `Long` | `Long` |
//! | `java.lang.String` | `String` | `String` | `String` | `String` |
//! | `byte[]` | `byte[]` | `byte[]` | `ByteArray` | `ByteArray` |
//! | `int[]` | `int[]` | `int[]` | `IntArray` | `Array<Int>` |
//! | `com.example.User[]` | `User[]` | `User[]` | `Array<User>` | `Array<User>` |

use wsgen_core::{PrimitiveKind, TypeClass, TypeRef, classify};

/// A type as spelled in Java and Kotlin sources.
#[derive(Debug, Clone, PartialEq)]
pub struct JvmType {
    /// Java spelling (`int`, `User[]`).
    pub java: String,
    /// Java spelling usable as a generic argument (`Integer`).
    pub boxed: String,
    /// Kotlin spelling matching the JVM signature (`IntArray`).
    pub kotlin: String,
    /// Kotlin spelling with boxed array elements (`Array<Int>`).
    pub kotlin_boxed: String,
    /// Whether this type is a primitive.
    pub is_primitive: bool,
}

impl JvmType {
    /// Create a reference type spelled the same in both boxed forms.
    pub fn reference(java: &str, kotlin: &str) -> Self {
        Self {
            java: java.to_string(),
            boxed: java.to_string(),
            kotlin: kotlin.to_string(),
            kotlin_boxed: kotlin.to_string(),
            is_primitive: false,
        }
    }

    /// Create a primitive type.
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self {
            java: kind.name().to_string(),
            boxed: kind.boxed_simple_name().to_string(),
            kotlin: kotlin_primitive(kind).to_string(),
            kotlin_boxed: kotlin_primitive(kind).to_string(),
            is_primitive: true,
        }
    }

    /// Get the appropriate Java type string.
    ///
    /// Generic arguments need the boxed form.
    pub fn java_type(&self, boxed: bool) -> &str {
        if boxed { &self.boxed } else { &self.java }
    }

    /// Get the appropriate Kotlin type string, adding `?` when nullable.
    pub fn kotlin_type(&self, nullable: bool) -> String {
        if nullable {
            format!("{}?", self.kotlin)
        } else {
            self.kotlin.clone()
        }
    }
}

/// Kotlin name of a primitive kind.
pub fn kotlin_primitive(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Boolean => "Boolean",
        PrimitiveKind::Byte => "Byte",
        PrimitiveKind::Short => "Short",
        PrimitiveKind::Int => "Int",
        PrimitiveKind::Long => "Long",
        PrimitiveKind::Float => "Float",
        PrimitiveKind::Double => "Double",
        PrimitiveKind::Char => "Char",
    }
}

/// Map a type reference to its JVM spellings.
pub fn map_type(ty: &TypeRef) -> JvmType {
    match classify(ty) {
        TypeClass::Primitive(kind) => JvmType::primitive(kind),
        TypeClass::BoxedPrimitive(kind) => {
            JvmType::reference(kind.boxed_simple_name(), kotlin_primitive(kind))
        }
        TypeClass::StringType => JvmType::reference("String", "String"),
        TypeClass::ByteArray => JvmType::reference("byte[]", "ByteArray"),
        TypeClass::ArrayOf(_) => {
            let component = ty.component().map(map_type).unwrap_or_else(|| {
                JvmType::reference(&ty.simple_name(), &ty.simple_name())
            });
            let java = format!("{}[]", component.java);
            let boxed_array = format!("Array<{}>", component.kotlin_boxed);
            let kotlin = if component.is_primitive {
                format!("{}Array", component.kotlin)
            } else {
                format!("Array<{}>", component.kotlin)
            };
            JvmType {
                boxed: java.clone(),
                java,
                kotlin,
                kotlin_boxed: boxed_array,
                is_primitive: false,
            }
        }
        TypeClass::CompositeObject => {
            let name = ty.simple_name();
            JvmType::reference(&name, &name)
        }
    }
}

/// Kotlin call converting a boxed array argument to its primitive array form.
///
/// Returns `.toIntArray()` and friends for one-dimensional primitive arrays,
/// `None` for everything else.
pub fn primitive_array_conversion(ty: &TypeRef) -> Option<String> {
    match classify(ty) {
        TypeClass::ArrayOf(component) => match *component {
            TypeClass::Primitive(kind) => Some(format!(".to{}Array()", kotlin_primitive(kind))),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    fn parse(name: &str) -> TypeRef {
        TypeRef::parse(name).unwrap()
    }

    #[test]
    fn jvm_type___primitive___different_java_and_boxed() {
        let ty = map_type(&parse("int"));

        assert_eq!(ty.java, "int");
        assert_eq!(ty.boxed, "Integer");
        assert_eq!(ty.kotlin, "Int");
        assert!(ty.is_primitive);
    }

    #[test]
    fn jvm_type___java_type___boxed_uses_wrapper() {
        let ty = map_type(&parse("double"));

        assert_eq!(ty.java_type(false), "double");
        assert_eq!(ty.java_type(true), "Double");
    }

    #[test]
    fn jvm_type___kotlin_type___nullable_adds_question_mark() {
        let ty = map_type(&parse("java.lang.String"));

        assert_eq!(ty.kotlin_type(true), "String?");
        assert_eq!(ty.kotlin_type(false), "String");
    }

    #[test]
    fn jvm_type___boxed_primitive___maps_to_kotlin_primitive_name() {
        let ty = map_type(&parse("java.lang.Integer"));

        assert_eq!(ty.java, "Integer");
        assert_eq!(ty.kotlin, "Int");
        assert!(!ty.is_primitive);
    }

    #[test]
    fn jvm_type___primitive_array___uses_kotlin_primitive_array() {
        let ty = map_type(&parse("int[]"));

        assert_eq!(ty.java, "int[]");
        assert_eq!(ty.kotlin, "IntArray");
        assert_eq!(ty.kotlin_boxed, "Array<Int>");
    }

    #[test]
    fn jvm_type___byte_array___uses_byte_array() {
        let ty = map_type(&parse("byte[]"));

        assert_eq!(ty.java, "byte[]");
        assert_eq!(ty.kotlin, "ByteArray");
    }

    #[test]
    fn jvm_type___composite_array___uses_generic_array() {
        let ty = map_type(&parse("com.example.User[]"));

        assert_eq!(ty.java, "User[]");
        assert_eq!(ty.kotlin, "Array<User>");
    }

    #[test]
    fn jvm_type___nested_primitive_array___keeps_inner_primitive_array() {
        let ty = map_type(&parse("long[][]"));

        assert_eq!(ty.java, "long[][]");
        assert_eq!(ty.kotlin, "Array<LongArray>");
        assert_eq!(ty.kotlin_boxed, "Array<Array<Long>>");
    }

    #[test]
    fn primitive_array_conversion___int_array___to_int_array() {
        assert_eq!(
            primitive_array_conversion(&parse("int[]")),
            Some(".toIntArray()".to_string())
        );
    }

    #[test]
    fn primitive_array_conversion___non_primitive___none() {
        assert_eq!(primitive_array_conversion(&parse("java.lang.Integer[]")), None);
        assert_eq!(primitive_array_conversion(&parse("byte[]")), None);
        assert_eq!(primitive_array_conversion(&parse("int")), None);
    }
}
