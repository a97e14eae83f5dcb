//! Naming convention utilities for generated sources.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `word` | [`capitalize`] | `Word` |
//! | `Word` | [`decapitalize`] | `word` |
//! | `Ims_wsSoapStub` | [`client_class_name`] | `ImsWsSoap` |
//! | `User` | [`plural_parameter`] | `users` |
//! | `a"b` | [`java_string_literal`] | `"a\"b"` |

/// Capitalize the first letter of a string.
///
/// # Examples
///
/// ```
/// use wsgen_codegen::naming::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first letter of a string.
///
/// # Examples
///
/// ```
/// use wsgen_codegen::naming::decapitalize;
///
/// assert_eq!(decapitalize("ImsWsSoap"), "imsWsSoap");
/// ```
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Derive the client class name from a stub class name.
///
/// Removes every `Stub`, then drops the first underscore and uppercases the
/// character that followed it. Names without an underscore are left as they
/// are after the `Stub` removal.
///
/// # Examples
///
/// ```
/// use wsgen_codegen::naming::client_class_name;
///
/// assert_eq!(client_class_name("Ims_wsSoapStub"), "ImsWsSoap");
/// assert_eq!(client_class_name("WeatherSoapStub"), "WeatherSoap");
/// ```
pub fn client_class_name(stub_name: &str) -> String {
    let base = stub_name.replace("Stub", "");
    match base.split_once('_') {
        Some((head, tail)) => format!("{head}{}", capitalize(tail)),
        None => base,
    }
}

/// Collection parameter name for an entity type (`User` → `users`).
pub fn plural_parameter(type_name: &str) -> String {
    format!("{}s", decapitalize(type_name))
}

/// Quote and escape a value as a Java string literal.
///
/// # Examples
///
/// ```
/// use wsgen_codegen::naming::java_string_literal;
///
/// assert_eq!(java_string_literal("http://tempuri.org/"), "\"http://tempuri.org/\"");
/// ```
pub fn java_string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            other => literal.push(other),
        }
    }
    literal.push('"');
    literal
}

/// Quote `value` as a Kotlin string literal
///
/// Same escapes as [`java_string_literal`], plus `$`, which would otherwise
/// start a string template (nested JVM classes are named `Outer$Inner`).
pub fn kotlin_string_literal(value: &str) -> String {
    java_string_literal(value).replace('$', "\\$")
}
