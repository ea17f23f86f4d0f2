//! The JSON value model: a closed sum of seven node kinds with uniform
//! key/index access, structural equality, visitor dispatch, and dual
//! (compact / indented) serialization.
//!
//! Unlike a `Value::Boolean(bool)` encoding, `True` and `False` are distinct
//! variants here, mirroring the seven concrete classes (`Null`, `True`,
//! `False`, `Number`, `String`, `Array`, `Object`) of the object model this
//! crate implements — a deliberate choice to keep the DOM's shape legible
//! against that design rather than collapsing it into a more "obvious" Rust
//! encoding.

use alloc::{
    collections::BTreeMap,
    format,
    string::{String, ToString},
    vec::Vec,
};
use core::fmt;

use crate::error::DomError;

/// An ordered sequence of owned child values, as held by [`Value::Array`].
pub type Array = Vec<Value>;
/// A mapping from string key to owned child value, as held by
/// [`Value::Object`]. Iteration order follows `BTreeMap`'s key order; callers
/// must not depend on insertion order.
pub type Map = BTreeMap<String, Value>;

/// A JSON value as defined by [RFC 8259](https://www.rfc-editor.org/rfc/rfc8259).
///
/// Each node exclusively owns its children: an `Array` owns its elements in
/// insertion order, an `Object` owns its entries under unique keys. Nodes are
/// mutated only through [`Value::emplace_array`] / [`Value::emplace_object`]
/// and through assignment to a location returned by [`Value::get_mut`] /
/// [`Value::get_index_mut`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The JSON `null` literal.
    Null,
    /// The JSON `true` literal.
    True,
    /// The JSON `false` literal.
    False,
    /// A JSON number, stored as a 64-bit float.
    ///
    /// Equality between two `Number`s uses `f64`'s native `PartialEq`, which
    /// already gives the semantics this crate requires: `+0.0 == -0.0`, and
    /// `NaN != NaN`.
    Number(f64),
    /// A JSON string, as a Unicode-scalar sequence.
    String(String),
    /// A JSON array of owned child values.
    Array(Array),
    /// A JSON object mapping unique string keys to owned child values.
    Object(Map),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        if b { Self::True } else { Self::False }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Self::Array(a)
    }
}

impl From<Map> for Value {
    fn from(m: Map) -> Self {
        Self::Object(m)
    }
}

impl Value {
    /// Returns `true` if the value is [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Value::True`] or [`Value::False`].
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::True | Self::False)
    }

    /// Returns `true` if the value is [`Value::Number`].
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`Value::String`].
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Value::Array`].
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Value::Object`].
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns `true` for the two aggregate variants, `Array` and `Object`.
    #[must_use]
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::Array(..) | Self::Object(..))
    }

    /// Looks up `key` on an `Object`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Type`] if `self` is not an `Object`, or
    /// [`DomError::AttributeMissing`] if the key is absent.
    pub fn get(&self, key: &str) -> Result<&Value, DomError> {
        match self {
            Self::Object(map) => map
                .get(key)
                .ok_or_else(|| DomError::AttributeMissing(key.to_string())),
            _ => Err(DomError::Type("key lookup on a non-object value")),
        }
    }

    /// Looks up `key` on an `Object`, returning a mutable location suitable
    /// for assignment.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Type`] if `self` is not an `Object`, or
    /// [`DomError::AttributeMissing`] if the key is absent.
    pub fn get_mut(&mut self, key: &str) -> Result<&mut Value, DomError> {
        match self {
            Self::Object(map) => map
                .get_mut(key)
                .ok_or_else(|| DomError::AttributeMissing(key.to_string())),
            _ => Err(DomError::Type("key lookup on a non-object value")),
        }
    }

    /// Looks up `index` on an `Array`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Type`] if `self` is not an `Array`, or
    /// [`DomError::OutOfRange`] if `index >= len()`.
    pub fn get_index(&self, index: usize) -> Result<&Value, DomError> {
        match self {
            Self::Array(arr) => arr.get(index).ok_or(DomError::OutOfRange {
                index,
                len: arr.len(),
            }),
            _ => Err(DomError::Type("index lookup on a non-array value")),
        }
    }

    /// Looks up `index` on an `Array`, returning a mutable location suitable
    /// for assignment.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Type`] if `self` is not an `Array`, or
    /// [`DomError::OutOfRange`] if `index >= len()`.
    pub fn get_index_mut(&mut self, index: usize) -> Result<&mut Value, DomError> {
        match self {
            Self::Array(arr) => {
                let len = arr.len();
                arr.get_mut(index).ok_or(DomError::OutOfRange { index, len })
            }
            _ => Err(DomError::Type("index lookup on a non-array value")),
        }
    }

    /// Returns the textual form of a scalar value: the canonical spelling
    /// for `Null`/`True`/`False`, the string's own content for `String`, and
    /// the shortest round-tripping decimal form for `Number`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Type`] if `self` is an aggregate (`Array` or
    /// `Object`).
    pub fn text(&self) -> Result<String, DomError> {
        match self {
            Self::Null => Ok(crate::literals::VALUE_NULL.to_string()),
            Self::True => Ok(crate::literals::VALUE_TRUE.to_string()),
            Self::False => Ok(crate::literals::VALUE_FALSE.to_string()),
            Self::Number(n) => Ok(format_number(*n)),
            Self::String(s) => Ok(s.clone()),
            Self::Array(_) | Self::Object(_) => {
                Err(DomError::Type("getValue() on an aggregate value"))
            }
        }
    }

    /// Parses `rep` as the textual form of a JSON number, i.e. exactly what
    /// [`Value::text`] would produce for a `Number`: an optional `-`, an
    /// integer part, an optional fraction, and an optional exponent.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Value`] if `rep` is not a valid number literal in
    /// its entirety (trailing characters after a valid prefix are rejected,
    /// not silently dropped).
    pub fn number_from_str(rep: &str) -> Result<Value, DomError> {
        let mut values = crate::parser::StreamingParser::parse_str(rep, crate::options::ParserOptions::new())
            .map_err(|_| DomError::Value(rep.to_string()))?;
        if values.len() == 1 && matches!(values[0], Self::Number(_)) {
            Ok(values.remove(0))
        } else {
            Err(DomError::Value(rep.to_string()))
        }
    }

    /// Parses `rep` as the textual form of a JSON boolean, i.e. exactly
    /// [`crate::literals::VALUE_TRUE`] or [`crate::literals::VALUE_FALSE`].
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Value`] if `rep` is neither spelling.
    pub fn bool_from_str(rep: &str) -> Result<Value, DomError> {
        if rep == crate::literals::VALUE_TRUE {
            Ok(Self::True)
        } else if rep == crate::literals::VALUE_FALSE {
            Ok(Self::False)
        } else {
            Err(DomError::Value(rep.to_string()))
        }
    }

    /// Parses `rep` as the textual form of a JSON null, i.e. exactly
    /// [`crate::literals::VALUE_NULL`].
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Value`] if `rep` is not that spelling.
    pub fn null_from_str(rep: &str) -> Result<Value, DomError> {
        if rep == crate::literals::VALUE_NULL {
            Ok(Self::Null)
        } else {
            Err(DomError::Value(rep.to_string()))
        }
    }

    /// Appends `value` to an `Array` in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::AggregateType`] if `self` is not an `Array`
    /// (i.e. a positional `emplace` was used on a non-array).
    pub fn emplace_array(&mut self, value: Value) -> Result<(), DomError> {
        match self {
            Self::Array(arr) => {
                arr.push(value);
                Ok(())
            }
            _ => Err(DomError::AggregateType(
                "positional emplace used on a non-array aggregate",
            )),
        }
    }

    /// Inserts `value` under `key` on an `Object`. The key must not already
    /// be present.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::AggregateType`] if `self` is not an `Object`, or
    /// [`DomError::AttributeNotUnique`] if `key` is already present.
    pub fn emplace_object(&mut self, key: String, value: Value) -> Result<(), DomError> {
        match self {
            Self::Object(map) => {
                if map.contains_key(&key) {
                    return Err(DomError::AttributeNotUnique(key));
                }
                map.insert(key, value);
                Ok(())
            }
            _ => Err(DomError::AggregateType(
                "keyed emplace used on a non-object aggregate",
            )),
        }
    }

    /// Writes the compact serialization of `self` (no whitespace) to `w`.
    pub fn write_compact<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        match self {
            Self::Null => w.write_str(crate::literals::VALUE_NULL),
            Self::True => w.write_str(crate::literals::VALUE_TRUE),
            Self::False => w.write_str(crate::literals::VALUE_FALSE),
            Self::Number(n) => w.write_str(&format_number(*n)),
            Self::String(s) => {
                w.write_char('"')?;
                write_escaped_string(s, w)?;
                w.write_char('"')
            }
            Self::Array(arr) => {
                w.write_char('[')?;
                for (i, v) in arr.iter().enumerate() {
                    if i > 0 {
                        w.write_char(',')?;
                    }
                    v.write_compact(w)?;
                }
                w.write_char(']')
            }
            Self::Object(map) => {
                w.write_char('{')?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        w.write_char(',')?;
                    }
                    w.write_char('"')?;
                    write_escaped_string(k, w)?;
                    w.write_str("\":")?;
                    v.write_compact(w)?;
                }
                w.write_char('}')
            }
        }
    }

    /// Writes the indented (human-readable) serialization of `self` to `w`.
    ///
    /// Arrays always render on a single line as `[ e1 , e2 , ... ]`; objects
    /// render one entry per line at two spaces of indentation per nesting
    /// level. Nesting depth is tracked through `indent`, which callers
    /// should pass as an empty `String`.
    pub fn write_indented<W: fmt::Write>(&self, w: &mut W, indent: &mut String) -> fmt::Result {
        match self {
            Self::Array(arr) => {
                w.write_str("[ ")?;
                for (i, v) in arr.iter().enumerate() {
                    if i > 0 {
                        w.write_str(" , ")?;
                    }
                    v.write_indented(w, indent)?;
                }
                w.write_str(" ]")
            }
            Self::Object(map) => {
                write!(w, "\n{indent}{{\n")?;
                indent.push_str("  ");
                let len = map.len();
                for (i, (k, v)) in map.iter().enumerate() {
                    w.write_str(indent)?;
                    w.write_char('"')?;
                    write_escaped_string(k, w)?;
                    w.write_str("\" : ")?;
                    v.write_indented(w, indent)?;
                    if i + 1 < len {
                        w.write_str(",\n")?;
                    } else {
                        w.write_char('\n')?;
                    }
                }
                indent.truncate(indent.len() - 2);
                write!(w, "{indent}}}")
            }
            _ => self.write_compact(w),
        }
    }

    /// Returns the compact serialization of `self` as an owned `String`.
    #[must_use]
    pub fn to_compact_string(&self) -> String {
        let mut out = String::new();
        self.write_compact(&mut out).expect("String write is infallible");
        out
    }

    /// Returns the indented serialization of `self` as an owned `String`.
    #[must_use]
    pub fn to_indented_string(&self) -> String {
        let mut out = String::new();
        let mut indent = String::new();
        self.write_indented(&mut out, &mut indent)
            .expect("String write is infallible");
        out
    }

    /// Returns a borrowing iterator over `self`'s children: the node itself
    /// for a scalar, or each child in order for an aggregate.
    #[must_use]
    pub fn begin(&self) -> Iter<'_> {
        match self {
            Self::Array(arr) => Iter::Array(arr.iter()),
            Self::Object(map) => Iter::Object(map.values()),
            other => Iter::Individual(Some(other)),
        }
    }

    /// Returns an already-exhausted iterator of the same kind [`Value::begin`]
    /// would return, present for parity with the original begin/end
    /// vocabulary.
    #[must_use]
    pub fn end(&self) -> Iter<'_> {
        match self {
            Self::Array(arr) => {
                let mut it = arr.iter();
                for _ in it.by_ref() {}
                Iter::Array(it)
            }
            Self::Object(map) => {
                let mut it = map.values();
                for _ in it.by_ref() {}
                Iter::Object(it)
            }
            _ => Iter::Individual(None),
        }
    }

    /// Identical to [`Value::begin`]; present for parity with the original
    /// const/non-const iterator vocabulary.
    #[must_use]
    pub fn cbegin(&self) -> Iter<'_> {
        self.begin()
    }

    /// Identical to [`Value::end`]; present for parity with the original
    /// const/non-const iterator vocabulary.
    #[must_use]
    pub fn cend(&self) -> Iter<'_> {
        self.end()
    }

    /// Dispatches to the matching read-only hook of `visitor`.
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            Self::Null => visitor.visit_null(),
            Self::True => visitor.visit_true(),
            Self::False => visitor.visit_false(),
            Self::Number(n) => visitor.visit_number(*n),
            Self::String(s) => visitor.visit_string(s),
            Self::Array(arr) => visitor.visit_array(arr),
            Self::Object(map) => visitor.visit_object(map),
        }
    }

    /// Dispatches to the matching mutating hook of `visitor`.
    pub fn accept_mut(&mut self, visitor: &mut dyn VisitorMut) {
        match self {
            Self::Null => visitor.visit_null(),
            Self::True => visitor.visit_true(),
            Self::False => visitor.visit_false(),
            Self::Number(n) => visitor.visit_number(n),
            Self::String(s) => visitor.visit_string(s),
            Self::Array(arr) => visitor.visit_array(arr),
            Self::Object(map) => visitor.visit_object(map),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_compact(f)
    }
}

/// A read-only visitor over [`Value`] variants.
///
/// Every hook defaults to a no-op, so a visitor need only override the
/// variants it cares about.
pub trait Visitor {
    /// Visits a `Null` value.
    fn visit_null(&mut self) {}
    /// Visits a `True` value.
    fn visit_true(&mut self) {}
    /// Visits a `False` value.
    fn visit_false(&mut self) {}
    /// Visits a `Number` value.
    fn visit_number(&mut self, _value: f64) {}
    /// Visits a `String` value.
    fn visit_string(&mut self, _value: &str) {}
    /// Visits an `Array` value.
    fn visit_array(&mut self, _value: &Array) {}
    /// Visits an `Object` value.
    fn visit_object(&mut self, _value: &Map) {}
}

/// A mutating visitor over [`Value`] variants.
///
/// Every hook defaults to a no-op, so a visitor need only override the
/// variants it cares about.
pub trait VisitorMut {
    /// Visits a `Null` value.
    fn visit_null(&mut self) {}
    /// Visits a `True` value.
    fn visit_true(&mut self) {}
    /// Visits a `False` value.
    fn visit_false(&mut self) {}
    /// Visits a `Number` value.
    fn visit_number(&mut self, _value: &mut f64) {}
    /// Visits a `String` value.
    fn visit_string(&mut self, _value: &mut String) {}
    /// Visits an `Array` value.
    fn visit_array(&mut self, _value: &mut Array) {}
    /// Visits an `Object` value.
    fn visit_object(&mut self, _value: &mut Map) {}
}

/// A borrowing iterator over a [`Value`]'s children.
///
/// A sum-typed iterator in place of the three distinct iterator classes
/// (`IndividualIterator`, `ArrayIterator`, `ObjectIterator`) of the object
/// model this replaces: one enum, three arms, no virtual dispatch.
#[derive(Debug, Clone)]
pub enum Iter<'a> {
    /// Wraps exactly one scalar value; yields it once then is exhausted.
    Individual(Option<&'a Value>),
    /// Wraps an in-order iterator over an `Array`'s elements.
    Array(core::slice::Iter<'a, Value>),
    /// Wraps an iterator over an `Object`'s values (keys are not exposed).
    Object(alloc::collections::btree_map::Values<'a, String, Value>),
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<&'a Value> {
        match self {
            Self::Individual(slot) => slot.take(),
            Self::Array(it) => it.next(),
            Self::Object(it) => it.next(),
        }
    }
}

/// Escapes control characters in a string for inclusion in a JSON string
/// literal, as the exact inverse of the parser's escape table plus a
/// `\u00XX` fallback for remaining control bytes.
pub(crate) fn write_escaped_string<W: fmt::Write>(src: &str, w: &mut W) -> fmt::Result {
    for c in src.chars() {
        match c {
            '"' => w.write_str("\\\"")?,
            '\\' => w.write_str("\\\\")?,
            '\u{8}' => w.write_str("\\b")?,
            '\u{c}' => w.write_str("\\f")?,
            '\n' => w.write_str("\\n")?,
            '\r' => w.write_str("\\r")?,
            '\t' => w.write_str("\\t")?,
            c if (c as u32) < 0x20 => write!(w, "\\u{:04x}", c as u32)?,
            c => w.write_char(c)?,
        }
    }
    Ok(())
}

/// Formats a finite `f64` as the shortest JSON number literal that
/// round-trips to the same value.
///
/// Integer-valued numbers that fit in a signed 64-bit integer serialize
/// without a decimal point or exponent, per the invariant on
/// [`Value::Number`]. Everything else uses Rust's round-trip-guaranteed
/// `Display`/`LowerExp` formatting, switching to scientific notation outside
/// a "reasonable" fixed-point range so that re-parsing a very large or very
/// small magnitude never overflows the parser's integer-part accumulator
/// (which is checked independently of any exponent).
pub(crate) fn format_number(v: f64) -> String {
    if v == 0.0 {
        return if v.is_sign_negative() {
            "-0".to_string()
        } else {
            "0".to_string()
        };
    }
    if !v.is_finite() {
        // Not a valid JSON literal; only reachable if a caller constructs a
        // `Value::Number` directly from a non-finite float rather than
        // through the parser, which never produces one.
        return if v.is_nan() {
            "NaN".to_string()
        } else if v > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    let abs = v.abs();
    if v.fract() == 0.0 && abs < 9_223_372_036_854_775_808.0 {
        return (v as i64).to_string();
    }
    if (1e-4..1e15).contains(&abs) {
        v.to_string()
    } else {
        format!("{v:e}")
    }
}
