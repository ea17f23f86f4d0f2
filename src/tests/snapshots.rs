//! Golden output for compact and indented serialization.
//!
//! Compact form is single-line and leaf-deterministic, so it is checked with
//! inline `insta` snapshots. The indented form's exact whitespace shape
//! (notably: an `Object`'s rendering always opens with a newline, even when
//! nested as a value) is checked with plain `assert_eq!` against literals
//! traced by hand against [`crate::Value::write_indented`], since that
//! shape is easy to get subtly wrong by eye.

extern crate std;

use super::parse_one;

#[test]
fn compact_flat_object() {
    let v = parse_one(r#"{"id":"file","array":[1,"test",true],"n":null}"#);
    insta::assert_snapshot!(v.to_compact_string(), @r#"{"array":[1,"test",true],"id":"file","n":null}"#);
}

#[test]
fn compact_nested_array() {
    let v = parse_one("[[1,2],[3,4]]");
    insta::assert_snapshot!(v.to_compact_string(), @"[[1,2],[3,4]]");
}

#[test]
fn compact_escaped_string() {
    let v = parse_one(r#""line1\nline2\ttab\"quote\"""#);
    insta::assert_snapshot!(v.to_compact_string(), @r#""line1\nline2\ttab\"quote\"""#);
}

#[test]
fn compact_negative_zero() {
    let v = parse_one("-0");
    insta::assert_snapshot!(v.to_compact_string(), @"-0");
}

#[test]
fn compact_plain_decimal() {
    let v = parse_one("3.5");
    insta::assert_snapshot!(v.to_compact_string(), @"3.5");
}

#[test]
fn indented_root_array_is_one_line() {
    let v = parse_one(r#"[1,"test",true]"#);
    assert_eq!(v.to_indented_string(), "[ 1 , \"test\" , true ]");
}

#[test]
fn indented_flat_object() {
    let v = parse_one(r#"{"b":2,"a":1}"#);
    assert_eq!(
        v.to_indented_string(),
        "\n{\n  \"a\" : 1,\n  \"b\" : 2\n}"
    );
}

#[test]
fn indented_nested_object() {
    let v = parse_one(r#"{"outer":{"a":1}}"#);
    assert_eq!(
        v.to_indented_string(),
        "\n{\n  \"outer\" : \n  {\n    \"a\" : 1\n  }\n}"
    );
}

#[test]
fn indented_empty_containers() {
    let v = parse_one(r#"{"a":[],"b":{}}"#);
    assert_eq!(
        v.to_indented_string(),
        "\n{\n  \"a\" : [  ],\n  \"b\" : \n  {\n  }\n}"
    );
}

#[test]
fn indented_scalar_root_has_no_wrapping() {
    let v = parse_one("42");
    assert_eq!(v.to_indented_string(), "42");
}
