#![allow(non_snake_case)]

use super::*;
use crate::sink::MemorySink;
use wsgen_core::{FieldDescriptor, Modifier, TypeRef};

struct MinimalEmitter<'a> {
    ctx: GenerationContext<'a>,
}

impl Emitter for MinimalEmitter<'_> {
    fn context(&self) -> &GenerationContext<'_> {
        &self.ctx
    }

    fn write_imports(&self, out: &mut SourceBuffer) -> GenerationResult<()> {
        out.append_line(&self.ctx.import("java.util.List"));
        Ok(())
    }

    fn write_body(&self, out: &mut SourceBuffer) -> GenerationResult<()> {
        out.line(1, "// body");
        Ok(())
    }
}

fn source() -> TypeDescriptor {
    TypeDescriptor::new("com.example", "User")
        .with_field(FieldDescriptor::new("id", TypeRef::named("int")).with_modifiers([Modifier::Private]))
        .with_field(FieldDescriptor::new("name", TypeRef::string()))
}

fn emitter(source: &TypeDescriptor, language: TargetLanguage) -> MinimalEmitter<'_> {
    MinimalEmitter {
        ctx: GenerationContext::new(source, "UserView", "com.example.view", language),
    }
}

#[test]
fn run___java_defaults___renders_stages_in_order() {
    let source = source();
    let mut sink = MemorySink::new();

    let buffer = run(&emitter(&source, TargetLanguage::Java), SourceBuffer::new(), &mut sink).unwrap();

    let expected = [
        "package com.example.view;",
        "",
        "import java.util.List;",
        "",
        "@SuppressWarnings(\"unchecked\")",
        "public final class UserView {",
        "",
        "    private int id;",
        "    public String name;",
        "",
        "    // body",
        "}",
        "",
    ]
    .join("\n");
    assert_eq!(buffer.as_str(), expected);
}

#[test]
fn run___kotlin_defaults___omits_terminators_and_annotation() {
    let source = source();
    let mut sink = MemorySink::new();

    let buffer = run(&emitter(&source, TargetLanguage::Kotlin), SourceBuffer::new(), &mut sink).unwrap();

    let text = buffer.as_str();
    assert!(text.starts_with("package com.example.view\n\nimport java.util.List\n"));
    assert!(text.contains("class UserView {"));
    assert!(text.contains("    private var id: Int? = null\n"));
    assert!(!text.contains("@SuppressWarnings"));
}

#[test]
fn run___persists_with_class_name_and_extension() {
    let source = source();
    let mut sink = MemorySink::new();

    run(&emitter(&source, TargetLanguage::Kotlin), SourceBuffer::new(), &mut sink).unwrap();

    let stored = sink.source("com/example/view/UserView.kt").unwrap();
    assert_eq!(stored.owner, "com.example.User");
}

#[test]
fn run___stale_buffer___is_cleared_first() {
    let source = source();
    let mut sink = MemorySink::new();
    let mut stale = SourceBuffer::new();
    stale.append("stale content");

    let buffer = run(&emitter(&source, TargetLanguage::Java), stale, &mut sink).unwrap();

    assert!(!buffer.as_str().contains("stale content"));
}

#[test]
fn run___twice___yields_identical_output() {
    let source = source();
    let emitter = emitter(&source, TargetLanguage::Java);
    let mut sink = MemorySink::new();

    let first = run(&emitter, SourceBuffer::new(), &mut sink).unwrap().into_string();
    let second = run(&emitter, SourceBuffer::new(), &mut sink).unwrap().into_string();

    assert_eq!(first, second);
}

#[test]
fn run___empty_class_name___fails_with_missing_input() {
    let source = source();
    let emitter = MinimalEmitter {
        ctx: GenerationContext::new(&source, " ", "com.example", TargetLanguage::Java),
    };
    let mut sink = MemorySink::new();

    let result = run(&emitter, SourceBuffer::new(), &mut sink);

    assert!(matches!(result, Err(GenerationError::MissingInput(_))));
    assert!(sink.is_empty());
}

#[test]
fn run___empty_namespace___omits_package_line() {
    let source = source();
    let emitter = MinimalEmitter {
        ctx: GenerationContext::new(&source, "UserView", "", TargetLanguage::Java),
    };
    let mut sink = MemorySink::new();

    let buffer = run(&emitter, SourceBuffer::new(), &mut sink).unwrap();

    assert!(buffer.as_str().starts_with("import java.util.List;"));
    assert!(sink.get("UserView.java").is_some());
}

#[test]
fn TargetLanguage___extension___matches_language() {
    assert_eq!(TargetLanguage::Java.extension(), "java");
    assert_eq!(TargetLanguage::Kotlin.extension(), "kt");
}
