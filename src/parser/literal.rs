//! The `null` / `true` / `false` sub-parser.

use crate::error::SyntaxError;
use crate::value::Value;

use super::Step;

/// Matches one of the three reserved-word literals, one character at a
/// time, against the fixed spelling it was constructed with.
///
/// Mirrors a hex-free version of a position-counting literal matcher: no
/// backtracking, a single position counter, and three outcomes per
/// character (need more, done, reject).
pub(crate) struct LiteralFrame {
    expected: &'static str,
    position: usize,
    value: Value,
}

impl LiteralFrame {
    pub(crate) fn new(expected: &'static str, value: Value) -> Self {
        Self {
            expected,
            position: 0,
            value,
        }
    }

    pub(crate) fn step(&mut self, c: char) -> Result<Step, SyntaxError> {
        let expected_char = self
            .expected
            .chars()
            .nth(self.position)
            .expect("literal frame stepped past its own length");
        if c != expected_char {
            return Err(SyntaxError::LiteralMismatch {
                expected: expected_char,
                found: c,
            });
        }
        self.position += 1;
        if self.position == self.expected.chars().count() {
            Ok(Step::Done {
                value: self.value.clone(),
                reconsume: false,
            })
        } else {
            Ok(Step::Continue)
        }
    }
}
