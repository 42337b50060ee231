//! Tests for document parsing.

use super::{load_document, parse_document, parse_mapping};
use crate::error::ConfigError;
use crate::value::{Mapping, Value};
use std::fs;
use tempfile::TempDir;

fn map(pairs: Vec<(&str, Value)>) -> Value {
    Value::Mapping(
        pairs
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect::<Mapping>(),
    )
}

fn seq(items: Vec<Value>) -> Value {
    Value::Sequence(items)
}

/// Nested mapping with a block sequence underneath.
#[test]
fn test_parse_nested_mapping_with_list() {
    let text = "root:\n  key: value\n  list:\n    - item\n";
    let parsed = parse_document(text).unwrap();

    assert_eq!(
        parsed,
        map(vec![(
            "root",
            map(vec![
                ("key", Value::from("value")),
                ("list", seq(vec![Value::from("item")])),
            ])
        )])
    );
}

/// Parsing the same text twice yields equal trees.
#[test]
fn test_parse_is_deterministic() {
    let text = r#"
profile: fast
budgets:
  frame:
    cpu_ms: 16.6
    gpu_ms: 12
  platforms: ["pc", "console"]
rules:
  - name: no_todo
  - strict
"#;
    assert_eq!(parse_document(text).unwrap(), parse_document(text).unwrap());
}

/// Empty and comment-only documents are empty mappings.
#[test]
fn test_parse_empty_document() {
    assert_eq!(parse_document("").unwrap(), Value::Mapping(Mapping::new()));
    assert_eq!(
        parse_document("# only a comment\n\n   \n").unwrap(),
        Value::Mapping(Mapping::new())
    );
}

/// `key:` followed by a deeper `- item` opens a sequence.
#[test]
fn test_lookahead_opens_sequence() {
    let parsed = parse_document("items:\n  - a\n  - b\n").unwrap();
    assert_eq!(
        parsed,
        map(vec![(
            "items",
            seq(vec![Value::from("a"), Value::from("b")])
        )])
    );
}

/// `key:` followed by a deeper `sub: val` opens a mapping.
#[test]
fn test_lookahead_opens_mapping() {
    let parsed = parse_document("items:\n  sub: val\n").unwrap();
    assert_eq!(
        parsed,
        map(vec![("items", map(vec![("sub", Value::from("val"))]))])
    );
}

/// An empty `key:` with nothing after it defaults to an empty mapping.
#[test]
fn test_trailing_empty_key_is_mapping() {
    let parsed = parse_document("name: x\nextras:\n").unwrap();
    assert_eq!(parsed.get("extras"), Some(&Value::Mapping(Mapping::new())));
}

/// An empty `key:` followed by a sibling (not deeper) is an empty mapping.
#[test]
fn test_empty_key_followed_by_sibling_is_mapping() {
    let parsed = parse_document("extras:\nname: x\n").unwrap();
    assert_eq!(parsed.get("extras"), Some(&Value::Mapping(Mapping::new())));
    assert_eq!(parsed.get("name"), Some(&Value::from("x")));
}

/// A sequence item at the same indent as its key is not a child.
#[test]
fn test_same_indent_sequence_is_not_nested() {
    let err = parse_document("items:\n- a\n").unwrap_err();
    assert!(matches!(err, ConfigError::Structural { line: 2, .. }));
}

/// `#` inside quotes is not a comment.
#[test]
fn test_comment_inside_quotes_is_preserved() {
    let parsed = parse_document("name: \"a#b\" # trailing\n").unwrap();
    assert_eq!(parsed.get("name"), Some(&Value::from("a#b")));
}

/// Scalars are typed.
#[test]
fn test_scalar_types() {
    let text = "\
enabled: true
missing: null
ratio: 3.5
count: 8
label: 'x'
version: 1.0.0
";
    let parsed = parse_document(text).unwrap();
    assert_eq!(parsed.get("enabled"), Some(&Value::Bool(true)));
    assert_eq!(parsed.get("missing"), Some(&Value::Null));
    assert_eq!(parsed.get("ratio"), Some(&Value::from(3.5)));
    assert_eq!(parsed.get("count"), Some(&Value::from(8_i64)));
    assert_eq!(parsed.get("label"), Some(&Value::from("x")));
    assert_eq!(parsed.get("version"), Some(&Value::from("1.0.0")));
}

/// `- key: value` is a single-entry mapping appended to the sequence.
#[test]
fn test_sequence_of_single_entry_mappings() {
    let parsed = parse_document("checks:\n  - name: lint\n  - name: perf\n").unwrap();
    assert_eq!(
        parsed.get("checks"),
        Some(&seq(vec![
            map(vec![("name", Value::from("lint"))]),
            map(vec![("name", Value::from("perf"))]),
        ]))
    );
}

/// A bare `-` followed by deeper mapping lines opens a mapping item.
#[test]
fn test_bare_dash_opens_mapping_item() {
    let text = "\
checks:
  -
    name: lint
    strict: true
  -
    name: perf
";
    let parsed = parse_document(text).unwrap();
    assert_eq!(
        parsed.get("checks"),
        Some(&seq(vec![
            map(vec![("name", Value::from("lint")), ("strict", Value::Bool(true))]),
            map(vec![("name", Value::from("perf"))]),
        ]))
    );
}

/// A bare `-` followed by deeper sequence items opens a nested sequence.
#[test]
fn test_bare_dash_opens_nested_sequence() {
    let text = "\
matrix:
  -
    - 1
    - 2
  -
    - 3
";
    let parsed = parse_document(text).unwrap();
    assert_eq!(
        parsed.get("matrix"),
        Some(&seq(vec![
            seq(vec![Value::from(1_i64), Value::from(2_i64)]),
            seq(vec![Value::from(3_i64)]),
        ]))
    );
}

/// A bare `-` with nothing deeper becomes an empty mapping.
#[test]
fn test_bare_dash_without_children_is_empty_mapping() {
    let parsed = parse_document("items:\n  -\n  - x\n").unwrap();
    assert_eq!(
        parsed.get("items"),
        Some(&seq(vec![Value::Mapping(Mapping::new()), Value::from("x")]))
    );
}

/// Inline arrays can be extended by deeper sequence items.
#[test]
fn test_inline_array_extended_by_block_items() {
    let parsed = parse_document("tags: [\"a\", \"b\"]\n  - c\nnext: 1\n").unwrap();
    assert_eq!(
        parsed.get("tags"),
        Some(&seq(vec![Value::from("a"), Value::from("b"), Value::from("c")]))
    );
    assert_eq!(parsed.get("next"), Some(&Value::from(1_i64)));
}

/// Dedenting closes every deeper container.
#[test]
fn test_dedent_closes_multiple_levels() {
    let text = "\
a:
  b:
    c:
      d: 1
e: 2
";
    let parsed = parse_document(text).unwrap();
    assert_eq!(parsed.lookup("a.b.c.d"), Some(&Value::from(1_i64)));
    assert_eq!(parsed.get("e"), Some(&Value::from(2_i64)));
}

/// Keys keep document order.
#[test]
fn test_key_order_is_preserved() {
    let parsed = parse_mapping("zeta: 1\nalpha:\n  x: 1\nmid: 3\n").unwrap();
    let keys: Vec<&str> = parsed.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

/// A repeated key replaces the earlier value in place.
#[test]
fn test_duplicate_key_replaces_value() {
    let parsed = parse_mapping("a:\n  x: 1\nb: 2\na: 3\n").unwrap();
    let keys: Vec<&str> = parsed.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(parsed.get("a"), Some(&Value::from(3_i64)));
}

/// Values may contain further colons.
#[test]
fn test_value_with_colons() {
    let parsed = parse_document("url: http://localhost:8080\n").unwrap();
    assert_eq!(
        parsed.get("url"),
        Some(&Value::from("http://localhost:8080"))
    );
}

/// A first line of `- item` under the root mapping fails.
#[test]
fn test_sequence_item_under_root_fails() {
    let err = parse_document("- item\n").unwrap_err();
    assert!(matches!(err, ConfigError::Structural { line: 1, .. }));
}

/// A mapping entry inside a sequence fails.
#[test]
fn test_mapping_entry_inside_sequence_fails() {
    let text = "\
items:
  - name: a
    value: 1
";
    let err = parse_document(text).unwrap_err();
    match err {
        ConfigError::Structural { line, message } => {
            assert_eq!(line, 3);
            assert!(message.contains("value"));
        }
        other => panic!("expected structural error, got {:?}", other),
    }
}

/// A line with no separator fails.
#[test]
fn test_line_without_separator_fails() {
    let err = parse_document("root:\n  just words\n").unwrap_err();
    match err {
        ConfigError::Structural { line, message } => {
            assert_eq!(line, 2);
            assert!(message.contains("just words"));
        }
        other => panic!("expected structural error, got {:?}", other),
    }
}

/// Loading a missing file reports the path.
#[test]
fn test_load_missing_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.yml");

    let err = load_document(&path).unwrap_err();
    assert_eq!(err, ConfigError::MissingFile { path });
}

/// Structural errors from files name the file.
#[test]
fn test_load_document_reports_file_on_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.yml");
    fs::write(&path, "- oops\n").unwrap();

    let err = load_document(&path).unwrap_err();
    assert!(err.to_string().contains("broken.yml"));
}

/// Loading a file parses its contents.
#[test]
fn test_load_document_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("base.yml");
    fs::write(&path, "budgets:\n  cpu_ms: 16\n").unwrap();

    let parsed = load_document(&path).unwrap();
    assert_eq!(parsed.lookup("budgets.cpu_ms"), Some(&Value::from(16_i64)));
}
