//! Named punctuation and reserved-word constants shared by the parser and the
//! serializer.
//!
//! Keeping these as named constants (rather than scattering character
//! literals through the state tables) is what lets the parser and the
//! serializer agree on exactly what a `{`, a `:`, or the spelling of `null`
//! is.

/// A whitespace byte as defined by RFC 8259 §2 (space, tab, LF, CR).
pub(crate) const WHITESPACE: [char; 4] = [' ', '\t', '\n', '\r'];

pub(crate) const BEGIN_ARRAY: char = '[';
pub(crate) const END_ARRAY: char = ']';
pub(crate) const BEGIN_OBJECT: char = '{';
pub(crate) const END_OBJECT: char = '}';
pub(crate) const NAME_SEPARATOR: char = ':';
pub(crate) const VALUE_SEPARATOR: char = ',';
pub(crate) const QUOTATION_MARK: char = '"';
pub(crate) const STRING_ESCAPE: char = '\\';
pub(crate) const STRING_UNICODE_ESCAPE: char = 'u';
pub(crate) const ZERO: char = '0';
pub(crate) const MINUS: char = '-';
pub(crate) const PLUS: char = '+';
pub(crate) const DECIMAL_POINT: char = '.';
pub(crate) const EXPONENT_UPPER: char = 'E';
pub(crate) const EXPONENT_LOWER: char = 'e';

pub(crate) const VALUE_NULL: &str = "null";
pub(crate) const VALUE_TRUE: &str = "true";
pub(crate) const VALUE_FALSE: &str = "false";

/// The escape letters recognized after a `\` inside a string, per RFC 8259
/// §7, excluding the `u` (unicode) escape which has its own sub-state.
pub(crate) const STRING_ESCAPES: [char; 8] = ['"', '\\', '/', 'b', 'f', 'n', 'r', 't'];

/// Maps an escape letter (the character following `\`) to the native
/// character it represents. Returns `None` for `u`, which is handled by a
/// dedicated state instead of a single substitution.
pub(crate) fn escape_to_native(c: char) -> Option<char> {
    Some(match c {
        '"' => '"',
        '\\' => '\\',
        '/' => '/',
        'b' => '\u{8}',
        'f' => '\u{c}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        _ => return None,
    })
}

/// Returns `true` if `c` is a byte permitted to appear unescaped inside a
/// JSON string: `0x20`, `0x21`, `0x23..=0x5B`, `0x5D..` — i.e. every scalar
/// value except `"`, `\`, and the control characters below `0x20`.
pub(crate) fn is_unescaped_string_char(c: char) -> bool {
    let cp = c as u32;
    cp == 0x20 || cp == 0x21 || (0x23..=0x5B).contains(&cp) || cp >= 0x5D
}

pub(crate) fn is_whitespace(c: char) -> bool {
    WHITESPACE.contains(&c)
}

pub(crate) fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}
