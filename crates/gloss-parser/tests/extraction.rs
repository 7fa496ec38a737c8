//! Integration tests: Declaration Document extraction over a realistic
//! fixture, plus file-level failure modes.

use pretty_assertions::assert_eq;

use gloss_parser::{extract_declarations, extract_from_source, ParserError};

const SAMPLE: &str = include_str!("fixtures/sample.py");

#[test]
fn functions_and_classes_match_module_level_names() {
    let doc = extract_from_source(SAMPLE, "sample.py").expect("extracts");

    let functions: Vec<&str> = doc.functions.keys().map(String::as_str).collect();
    assert_eq!(functions, vec!["add_numbers", "main", "multiply_numbers"]);

    let classes: Vec<&str> = doc.classes.keys().map(String::as_str).collect();
    assert_eq!(classes, vec!["MyClass"]);
}

#[test]
fn imports_keep_insertion_order() {
    let doc = extract_from_source(SAMPLE, "sample.py").expect("extracts");
    assert_eq!(
        doc.imports,
        vec![
            "Import(text='import os')",
            "Import(text='from collections import OrderedDict')",
        ]
    );
}

#[test]
fn module_globals_capture_value_text() {
    let doc = extract_from_source(SAMPLE, "sample.py").expect("extracts");
    assert_eq!(doc.global_variables["LIMIT"], "10");
    assert_eq!(doc.global_variables["GREETING"], "\"hello\" + \"!\"");
    // Locals inside main() never reach the globals table.
    assert!(!doc.global_variables.contains_key("x"));
    assert!(!doc.global_variables.contains_key("total"));
}

#[test]
fn function_entry_drops_header_and_return_lines() {
    let doc = extract_from_source(SAMPLE, "sample.py").expect("extracts");

    let add = &doc.functions["add_numbers"];
    assert_eq!(add.arguments, vec!["a", "b"]);
    assert_eq!(add.returns.as_deref(), Some("a + b"));
    assert_eq!(add.body, "");

    let multiply = &doc.functions["multiply_numbers"];
    assert_eq!(multiply.returns.as_deref(), Some("result"));
    assert!(
        !multiply.body.lines().any(|line| line.starts_with("return")),
        "body still holds a return line: {}",
        multiply.body
    );
    assert!(multiply.body.contains("result = a * b"));
}

#[test]
fn method_entries_have_null_returns_and_keep_return_lines() {
    let doc = extract_from_source(SAMPLE, "sample.py").expect("extracts");
    let methods = &doc.classes["MyClass"].methods;

    let init = &methods["__init__"];
    assert_eq!(init.arguments, vec!["self", "value"]);
    assert_eq!(init.returns, None);
    assert_eq!(init.body, "self.value = value");

    let double = &methods["double"];
    assert_eq!(double.returns, None);
    assert_eq!(double.body, "return self.value * 2");
}

#[test]
fn document_round_trips_through_json() {
    let doc = extract_from_source(SAMPLE, "sample.py").expect("extracts");
    let json = serde_json::to_string_pretty(&doc).expect("serializes");
    let back: gloss_core::DeclarationDoc = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, doc);
}

#[rstest::rstest]
#[case("def f():\n    return 1\n", Some("1"))]
#[case("def f():\n    return\n", None)]
#[case("def f():\n    pass\n", None)]
#[case("def f():\n    if x:\n        return 1\n", None)]
fn returns_come_from_direct_children_only(
    #[case] source: &str,
    #[case] expected: Option<&str>,
) {
    let doc = extract_from_source(source, "case.py").expect("extracts");
    assert_eq!(doc.functions["f"].returns.as_deref(), expected);
}

#[test]
fn missing_file_is_a_recoverable_failure() {
    let err = extract_declarations(std::path::Path::new("does/not/exist.py"))
        .expect_err("should fail");
    assert!(matches!(err, ParserError::FileNotFound(_)), "got: {err}");
}

#[test]
fn extraction_from_a_real_file_on_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("script.py");
    std::fs::write(&path, "def f(a):\n    return a\n").expect("writes");

    let doc = extract_declarations(&path).expect("extracts");
    assert_eq!(doc.functions["f"].returns.as_deref(), Some("a"));
}
