#![no_main]

use std::collections::BTreeMap;

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use pushjson::{ParserOptions, StreamingParser};
use serde_json::Value as JsonValue;

/// Generates a JSON document bounded to the subset this crate can represent
/// and round-trip: integer parts within `i64`'s range (the number
/// sub-parser's accumulator), no `NaN`/`Infinity`, and object keys
/// deduplicated before construction so a generated duplicate never masks a
/// real round-trip bug as a (correctly rejected) `AttributeNotUnique`.
fn arbitrary_value(u: &mut Unstructured<'_>, depth: u8) -> arbitrary::Result<JsonValue> {
    let tag: u8 = if depth == 0 {
        u.int_in_range(0..=4)?
    } else {
        u.int_in_range(0..=6)?
    };
    Ok(match tag {
        0 => JsonValue::Null,
        1 => JsonValue::Bool(bool::arbitrary(u)?),
        2 => {
            // `i64::MIN`'s magnitude (2^63) is one past what the number
            // sub-parser's accumulator accepts (it checks against `i64::MAX`
            // on the unsigned magnitude before applying the sign), so it is
            // excluded here rather than treated as a roundtrip failure.
            let n: i64 = u.int_in_range(i64::MIN + 1..=i64::MAX)?;
            JsonValue::from(n)
        }
        3 => {
            let mantissa: i32 = i32::arbitrary(u)?;
            let scaled = f64::from(mantissa) / 1000.0;
            JsonValue::from(scaled)
        }
        4 => JsonValue::String(arbitrary_string(u)?),
        5 => {
            let len = u.int_in_range(0u8..=4)?;
            let items = (0..len)
                .map(|_| arbitrary_value(u, depth - 1))
                .collect::<arbitrary::Result<Vec<_>>>()?;
            JsonValue::Array(items)
        }
        _ => {
            let len = u.int_in_range(0u8..=4)?;
            let mut map = BTreeMap::new();
            for i in 0..len {
                let key = arbitrary_string(u)?;
                let key = if key.is_empty() { format!("k{i}") } else { key };
                map.insert(key, arbitrary_value(u, depth - 1)?);
            }
            JsonValue::Object(map.into_iter().collect())
        }
    })
}

fn arbitrary_string(u: &mut Unstructured<'_>) -> arbitrary::Result<String> {
    let len = u.int_in_range(0u8..=8)?;
    let mut s = String::with_capacity(usize::from(len));
    for _ in 0..len {
        let c = *u.choose(&['a', 'b', ' ', '"', '\\', '\n', '\u{1F600}', '\u{7F}'])?;
        s.push(c);
    }
    Ok(s)
}

fn values_equal(a: &JsonValue, b: &JsonValue) -> bool {
    match (a, b) {
        (JsonValue::Number(a), JsonValue::Number(b)) => {
            a.as_f64().unwrap() == b.as_f64().unwrap()
        }
        (JsonValue::Array(a), JsonValue::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| values_equal(x, y))
        }
        (JsonValue::Object(a), JsonValue::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(k, v)| b.get(k).is_some_and(|bv| values_equal(v, bv)))
        }
        _ => a == b,
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(value) = arbitrary_value(&mut u, 4) else {
        return;
    };
    let text = serde_json::to_string(&value).expect("serde_json never fails on a JsonValue");

    let mut parser = StreamingParser::new(ParserOptions::new());
    for c in text.chars() {
        if parser.feed(c).is_err() {
            panic!("generated document failed to parse: {text}");
        }
    }
    let mut roots = match parser.finish() {
        Ok(roots) => roots,
        Err(e) => panic!("generated document left the parser incomplete: {text} ({e})"),
    };
    assert_eq!(roots.len(), 1, "expected exactly one root value: {text}");
    let parsed = roots.remove(0);
    let reserialized: JsonValue = serde_json::from_str(&parsed.to_compact_string())
        .expect("this crate's compact output is valid JSON");
    assert!(
        values_equal(&value, &reserialized),
        "round-trip mismatch: {value:?} != {reserialized:?} (text: {text})"
    );
});
