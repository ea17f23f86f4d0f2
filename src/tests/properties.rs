//! Property-based invariants over parsing, equality, and serialization.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use crate::{ParserOptions, StreamingParser, Value};

/// A restricted JSON value generator: deep enough to exercise nesting, but
/// bounded so `quickcheck` doesn't spend its budget on pathological depth.
#[derive(Clone, Debug)]
struct Doc(Value);

impl Arbitrary for Doc {
    fn arbitrary(g: &mut Gen) -> Self {
        Doc(arbitrary_value(g, 3))
    }
}

fn arbitrary_value(g: &mut Gen, depth: u8) -> Value {
    let choices: &[u8] = if depth == 0 { &[0, 1, 2, 3] } else { &[0, 1, 2, 3, 4, 5] };
    match *g.choose(choices).expect("choices is non-empty") {
        0 => Value::Null,
        1 => Value::True,
        2 => Value::False,
        3 => Value::Number(arbitrary_finite_f64(g)),
        4 => Value::Array(
            (0..u8::arbitrary(g) % 4)
                .map(|_| arbitrary_value(g, depth - 1))
                .collect(),
        ),
        5 => Value::Object(
            (0..u8::arbitrary(g) % 4)
                .map(|i| (alloc::format!("k{i}"), arbitrary_value(g, depth - 1)))
                .collect(),
        ),
        _ => Value::String(arbitrary_string(g)),
    }
}

fn arbitrary_finite_f64(g: &mut Gen) -> f64 {
    // Keep magnitudes within the integer-accumulator's range so the
    // round-trip through text never risks `IntegerOverflow` on reparse.
    let n = i32::arbitrary(g);
    f64::from(n) / 1000.0
}

fn arbitrary_string(g: &mut Gen) -> String {
    let len = u8::arbitrary(g) % 8;
    (0..len)
        .map(|_| *g.choose(&['a', 'b', 'c', ' ', '"', '\\', '\n']).unwrap())
        .collect()
}

fn round_trip_prop(doc: Doc) -> bool {
    let text = doc.0.to_compact_string();
    let parsed = StreamingParser::parse_str(&text, ParserOptions::new());
    match parsed {
        Ok(mut values) if values.len() == 1 => values.remove(0) == doc.0,
        _ => false,
    }
}

/// The round-trip property run with an explicit `QuickCheck` instance
/// rather than `#[quickcheck]`, so the case count can scale with the
/// environment: a quick pass locally, a thorough one in CI.
#[test]
fn compact_serialize_then_parse_round_trips() {
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    quickcheck::QuickCheck::new()
        .tests(tests)
        .quickcheck(round_trip_prop as fn(Doc) -> bool);
}

#[quickcheck]
fn equality_is_reflexive(doc: Doc) -> bool {
    // NaN is deliberately excluded: it is the one value that is never equal
    // to itself, by design (see `number_equality_follows_ieee_semantics`).
    doc.0 == doc.0
}

#[quickcheck]
fn equality_is_symmetric(a: Doc, b: Doc) -> bool {
    (a.0 == b.0) == (b.0 == a.0)
}

#[quickcheck]
fn pre_order_length_matches_node_count(doc: Doc) -> bool {
    doc.0.pre_order().count() == node_count(&doc.0)
}

fn node_count(v: &Value) -> usize {
    match v {
        Value::Array(arr) => 1 + arr.iter().map(node_count).sum::<usize>(),
        Value::Object(map) => 1 + map.values().map(node_count).sum::<usize>(),
        _ => 1,
    }
}

#[quickcheck]
fn integer_valued_numbers_serialize_without_dot_or_exponent(n: i32) -> bool {
    let text = Value::Number(f64::from(n)).to_compact_string();
    !text.contains('.') && !text.contains('e') && !text.contains('E')
}

#[quickcheck]
fn array_emplace_rejects_keyed_insertion(dummy: u8) -> bool {
    let _ = dummy;
    let mut arr = Value::Array(Vec::new());
    arr.emplace_object("k".to_string(), Value::Null).is_err()
}
