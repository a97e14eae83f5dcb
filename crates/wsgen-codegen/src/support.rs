//! Support classes referenced by the generated synchronous client

use crate::buffer::SourceBuffer;

/// Class name of the call result type
pub const RESULT_CLASS: &str = "Result";

/// Class name of the endpoint configuration holder
pub const CONFIGURATION_CLASS: &str = "Configuration";

/// Source of `Result.java`: a sealed success/error pair
pub fn result_source(namespace: &str) -> String {
    let mut out = SourceBuffer::new();
    package_line(namespace, &mut out);
    out.append_line("public abstract class Result<T> {");
    out.blank_line();
    out.line(1, "private Result() {");
    out.line(1, "}");
    out.blank_line();
    out.line(1, "public static final class Success<T> extends Result<T> {");
    out.line(2, "public final T data;");
    out.blank_line();
    out.line(2, "public Success(T data) {");
    out.line(3, "this.data = data;");
    out.line(2, "}");
    out.line(1, "}");
    out.blank_line();
    out.line(1, "public static final class Error<T> extends Result<T> {");
    out.line(2, "public final Exception exception;");
    out.blank_line();
    out.line(2, "public Error(Exception exception) {");
    out.line(3, "this.exception = exception;");
    out.line(2, "}");
    out.line(1, "}");
    out.append_line("}");
    out.into_string()
}

/// Source of `Configuration.java`: the service endpoint URL holder
pub fn configuration_source(namespace: &str) -> String {
    let mut out = SourceBuffer::new();
    package_line(namespace, &mut out);
    out.append_line("public final class Configuration {");
    out.blank_line();
    out.line(1, "private static String wsUrl = \"\";");
    out.blank_line();
    out.line(1, "private Configuration() {");
    out.line(1, "}");
    out.blank_line();
    out.line(1, "public static synchronized void setConfiguration(String url) {");
    out.line(2, "wsUrl = url;");
    out.line(1, "}");
    out.blank_line();
    out.line(1, "public static synchronized String getWsUrl() {");
    out.line(2, "return wsUrl;");
    out.line(1, "}");
    out.append_line("}");
    out.into_string()
}

fn package_line(namespace: &str, out: &mut SourceBuffer) {
    if !namespace.is_empty() {
        out.append_line(&format!("package {namespace};"));
        out.blank_line();
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn result_source___declares_success_and_error() {
        let source = result_source("com.example.soap");

        assert!(source.starts_with("package com.example.soap;\n\n"));
        assert!(source.contains("public static final class Success<T> extends Result<T> {"));
        assert!(source.contains("public Error(Exception exception) {"));
    }

    #[test]
    fn configuration_source___exposes_ws_url() {
        let source = configuration_source("com.example.soap");

        assert!(source.contains("public static synchronized String getWsUrl() {"));
        assert!(source.contains("public static synchronized void setConfiguration(String url) {"));
    }

    #[test]
    fn configuration_source___root_namespace___no_package_line() {
        let source = configuration_source("");

        assert!(source.starts_with("public final class Configuration {"));
    }
}
