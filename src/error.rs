//! Error taxonomy for the parser and the DOM.
//!
//! Every kind named in the design is a variant here rather than a distinct
//! type — callers match on [`ParserError`] or [`DomError`] the way the
//! original C++ implementation throws one of a fixed set of exception
//! classes.

use alloc::string::String;

use thiserror::Error;

/// Errors raised while feeding characters into a [`crate::StreamingParser`].
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind} at {line}:{column}")]
pub struct ParserError {
    pub(crate) kind: SyntaxError,
    /// 1-based line number of the character that triggered the error.
    pub line: usize,
    /// 0-based column (count of characters since the last newline) of the
    /// character that triggered the error.
    pub column: usize,
}

impl ParserError {
    /// The underlying syntax error, independent of its source position.
    #[must_use]
    pub fn kind(&self) -> &SyntaxError {
        &self.kind
    }
}

/// The kinds of syntax error the pushdown parser can raise.
///
/// These map 1:1 onto the exception classes of the design this crate
/// implements: `InvalidStartingSymbol`, `LiteralException`,
/// `IntegerOverflow`, `ValueError`, and `ParsingIncomplete`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// No sub-parser's first-symbol set matched the current character where
    /// a value was expected.
    #[error("invalid starting symbol '{0}'")]
    InvalidStartingSymbol(char),
    /// The next character did not match the expected position of `null`,
    /// `true`, or `false`.
    #[error("expected literal character '{expected}', found '{found}'")]
    LiteralMismatch {
        /// The character the literal matcher required next.
        expected: char,
        /// The character that was actually fed.
        found: char,
    },
    /// An integer or exponent accumulator would have overflowed a signed
    /// 64-bit integer.
    #[error("integer overflow while parsing a number")]
    IntegerOverflow,
    /// A `\uXXXX` escape, or the second half of a surrogate pair, was not
    /// four valid hex digits, or a low surrogate appeared without a
    /// preceding high surrogate.
    #[error("invalid unicode escape sequence")]
    InvalidUnicodeEscape,
    /// A character appeared inside a string literal that is not permitted
    /// unescaped (a bare `"`, `\`, or control character below `0x20`).
    #[error("invalid character '{0}' in string literal")]
    InvalidStringChar(char),
    /// [`crate::StreamingParser::finish`] was called while the state stack
    /// still had unfinished productions on it.
    #[error("parsing incomplete: {0} unfinished production(s) remain")]
    ParsingIncomplete(usize),
    /// A structural character (`:`, `,`, `]`, `}`) was expected but something
    /// else was found, or an escape letter following `\` was not one of the
    /// recognized short escapes or `u`.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    /// An object literal repeated a key that was already present.
    #[error("duplicate object key: {0}")]
    DuplicateKey(String),
}

/// Errors raised by DOM operations: uniform access, aggregate mutation, and
/// construction from a textual representation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomError {
    /// Key lookup was attempted on a non-`Object`, or index lookup on a
    /// non-`Array`, or `as_value` was called on an aggregate.
    #[error("type error: {0}")]
    Type(&'static str),
    /// `Object` key lookup found no entry for the given key.
    #[error("attribute missing: {0}")]
    AttributeMissing(String),
    /// `Object` insertion found the key already present.
    #[error("attribute not unique: {0}")]
    AttributeNotUnique(String),
    /// `Array` index lookup exceeded `len()`.
    #[error("index {index} out of range (len {len})")]
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// The length of the array at the time of the request.
        len: usize,
    },
    /// A textual representation failed the variant's validator (e.g. a
    /// string that does not parse as a float was used to construct a
    /// `Number`).
    #[error("value error: {0}")]
    Value(String),
    /// The wrong `emplace` overload was used: a key was given to an
    /// `Array`, or a positional value was given to an `Object`.
    #[error("aggregate type error: {0}")]
    AggregateType(&'static str),
}
