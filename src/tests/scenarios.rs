//! Table-driven end-to-end scenarios.

use rstest::rstest;

use crate::{ParserOptions, StreamingParser};

#[rstest]
#[case::flat_object(r#"{"a":1,"b":true,"c":null}"#)]
#[case::nested_array_of_objects(r#"[{"x":1},{"x":2},{"x":3}]"#)]
#[case::deeply_nested(r#"[[[[[1]]]]]"#)]
#[case::mixed_escapes(r#""line1\nline2\ttab\"quote\"""#)]
#[case::scientific_notation(r#"[1e10,-1.5e-3,0.0,-0.0]"#)]
#[case::unicode_escape_bmp(r#""éè""#)]
#[case::empty_containers(r#"{"a":[],"b":{}}"#)]
#[case::whitespace_heavy("  {\n  \"a\"  :  1  ,\n  \"b\"  :  2\n}  ")]
fn parses_without_error(#[case] input: &str) {
    StreamingParser::parse_str(input, ParserOptions::new())
        .unwrap_or_else(|e| panic!("expected {input:?} to parse, got {e}"));
}

#[rstest]
#[case::trailing_comma_in_array("[1,2,]")]
#[case::trailing_comma_in_object(r#"{"a":1,}"#)]
#[case::unquoted_key(r#"{a:1}"#)]
#[case::single_quoted_string("{'a':1}")]
#[case::bare_word("hello")]
#[case::double_decimal_point("1.2.3")]
#[case::control_char_in_string("\"a\u{0008}b\"")]
fn rejects_malformed_input(#[case] input: &str) {
    assert!(StreamingParser::parse_str(input, ParserOptions::new()).is_err());
}
