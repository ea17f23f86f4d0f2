//! Test-only modules: table-driven end-to-end scenarios, property-based
//! invariants, and indented-serialization snapshots.

extern crate std;

mod properties;
mod scenarios;
mod snapshots;

use crate::{ParserOptions, StreamingParser, Value};

pub(crate) fn parse_one(input: &str) -> Value {
    let mut values = StreamingParser::parse_str(input, ParserOptions::new())
        .unwrap_or_else(|e| panic!("failed to parse {input:?}: {e}"));
    assert_eq!(values.len(), 1, "expected exactly one root value in {input:?}");
    values.remove(0)
}

#[test]
fn empty_array_round_trips() {
    let v = parse_one("[]");
    assert_eq!(v, Value::Array(alloc::vec::Vec::new()));
    assert_eq!(v.to_compact_string(), "[]");
}

#[test]
fn empty_object_round_trips() {
    let v = parse_one("{}");
    assert_eq!(v, Value::Object(crate::Map::new()));
    assert_eq!(v.to_compact_string(), "{}");
}

#[test]
fn whitespace_only_between_roots_is_insignificant() {
    let values = StreamingParser::parse_str("  1   2\t\n3  ", ParserOptions::new()).unwrap();
    assert_eq!(
        values,
        alloc::vec![
            Value::Number(1.0),
            Value::Number(2.0),
            Value::Number(3.0)
        ]
    );
}

#[test]
fn empty_stream_yields_no_values() {
    let values = StreamingParser::parse_str("", ParserOptions::new()).unwrap();
    assert!(values.is_empty());
}

#[test]
fn mid_token_stream_is_parsing_incomplete() {
    let mut parser = StreamingParser::new(ParserOptions::new());
    parser.feed_str("{\"a\":tru").unwrap();
    let err = parser.finish().unwrap_err();
    assert!(matches!(err.kind(), crate::SyntaxError::ParsingIncomplete(2)));
}

#[test]
fn mismatched_literal_is_rejected_immediately() {
    let err = StreamingParser::parse_str("nul!", ParserOptions::new()).unwrap_err();
    assert!(matches!(
        err.kind(),
        crate::SyntaxError::LiteralMismatch {
            expected: 'l',
            found: '!'
        }
    ));
}

#[test]
fn bare_complete_number_at_eof_still_parses() {
    // A number has no terminating character of its own, so end-of-input is
    // the only "terminator" it will ever see for a bare top-level numeral.
    let v = parse_one("42");
    assert_eq!(v, Value::Number(42.0));
}

#[test]
fn trailing_decimal_point_at_eof_is_parsing_incomplete() {
    let mut parser = StreamingParser::new(ParserOptions::new());
    parser.feed_str("1.").unwrap();
    let err = parser.finish().unwrap_err();
    assert!(matches!(err.kind(), crate::SyntaxError::ParsingIncomplete(1)));
}

#[test]
fn integer_boundary_succeeds_then_overflows() {
    let v = parse_one("9223372036854775807");
    assert_eq!(v, Value::Number(9_223_372_036_854_775_807.0));

    let err = StreamingParser::parse_str("9223372036854775808", ParserOptions::new()).unwrap_err();
    assert_eq!(*err.kind(), crate::SyntaxError::IntegerOverflow);
}

#[test]
fn duplicate_keys_are_rejected() {
    let err = StreamingParser::parse_str(r#"{"a":1,"a":2}"#, ParserOptions::new()).unwrap_err();
    assert!(matches!(err.kind(), crate::SyntaxError::DuplicateKey(k) if k == "a"));
}

#[test]
fn out_of_range_index_is_a_dom_error() {
    let v = parse_one("[1,2,3]");
    assert!(matches!(
        v.get_index(10),
        Err(crate::DomError::OutOfRange { index: 10, len: 3 })
    ));
}

#[test]
fn number_equality_follows_ieee_semantics() {
    assert_eq!(Value::Number(0.0), Value::Number(-0.0));
    assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
}

#[test]
fn unicode_surrogate_pair_decodes_to_one_scalar() {
    // U+1F600 GRINNING FACE, fed as the `\uXXXX` surrogate pair a JSON
    // encoder would actually emit, not the already-decoded character: this
    // exercises the escape sub-parser's surrogate-combining states.
    let escaped = "\"\\ud83d\\ude00\"";
    let v = parse_one(escaped);
    assert_eq!(v, Value::String(std::string::String::from("\u{1F600}")));
}

#[test]
fn unpaired_high_surrogate_is_rejected() {
    let err = StreamingParser::parse_str(r#""\ud83d""#, ParserOptions::new()).unwrap_err();
    assert_eq!(*err.kind(), crate::SyntaxError::InvalidUnicodeEscape);
}

#[test]
fn pre_order_visits_root_then_descendants_depth_first() {
    let v = parse_one(r#"{"a":[1,2],"b":3}"#);
    let texts: alloc::vec::Vec<_> = v.pre_order().map(Value::to_compact_string).collect();
    assert_eq!(
        texts,
        alloc::vec!["{\"a\":[1,2],\"b\":3}", "[1,2]", "1", "2", "3"]
    );
}

#[test]
fn scalar_pre_order_yields_exactly_itself() {
    let v = Value::Number(7.0);
    let texts: alloc::vec::Vec<_> = v.pre_order().collect();
    assert_eq!(texts, alloc::vec![&v]);
}

#[test]
fn number_from_str_accepts_a_well_formed_literal() {
    assert_eq!(Value::number_from_str("-12.5e3").unwrap(), Value::Number(-12500.0));
}

#[test]
fn number_from_str_rejects_trailing_garbage() {
    assert!(matches!(
        Value::number_from_str("12abc"),
        Err(crate::DomError::Value(ref s)) if s == "12abc"
    ));
}

#[test]
fn bool_from_str_accepts_exact_spellings_only() {
    assert_eq!(Value::bool_from_str("true").unwrap(), Value::True);
    assert_eq!(Value::bool_from_str("false").unwrap(), Value::False);
    assert!(matches!(
        Value::bool_from_str("True"),
        Err(crate::DomError::Value(ref s)) if s == "True"
    ));
}

#[test]
fn null_from_str_accepts_exact_spelling_only() {
    assert_eq!(Value::null_from_str("null").unwrap(), Value::Null);
    assert!(matches!(
        Value::null_from_str("nul"),
        Err(crate::DomError::Value(ref s)) if s == "nul"
    ));
}
