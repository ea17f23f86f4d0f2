//! The JSON number sub-parser.
//!
//! A number has no fixed terminator: the sub-parser only discovers it is
//! done when it sees a character that cannot extend the numeral. That
//! character is never consumed here — [`Step::Done`] is returned with
//! `reconsume: true`, so the driver pops this frame and redelivers the same
//! character to whatever frame is revealed underneath. This is the one
//! production in the grammar where completion and consumption are
//! decoupled.

use crate::error::SyntaxError;
use crate::literals::{is_digit, DECIMAL_POINT, EXPONENT_LOWER, EXPONENT_UPPER, MINUS, PLUS, ZERO};
use crate::value::Value;

use super::Step;

enum NumState {
    Start,
    AfterMinus,
    IntegerZero,
    IntegerDigits,
    FractionFirstDigit,
    FractionDigits,
    ExponentSign,
    ExponentFirstDigit,
    ExponentDigits,
}

/// Accumulates the sign, integer part, fraction, and exponent of a JSON
/// number as they are fed in, one character at a time.
///
/// The integer part is accumulated in a signed 64-bit integer and checked
/// for overflow on every digit, independent of any fraction or exponent
/// that follows — a number whose integer part alone would not fit in an
/// `i64` is rejected even if the full value, read as a float, would have
/// been representable.
pub(crate) struct NumberFrame {
    state: NumState,
    negative: bool,
    int_value: i64,
    frac_value: f64,
    frac_scale: f64,
    exp_negative: bool,
    exp_value: i64,
}

impl NumberFrame {
    pub(crate) fn new() -> Self {
        Self {
            state: NumState::Start,
            negative: false,
            int_value: 0,
            frac_value: 0.0,
            frac_scale: 1.0,
            exp_negative: false,
            exp_value: 0,
        }
    }

    pub(crate) fn step(&mut self, c: char) -> Result<Step, SyntaxError> {
        match self.state {
            NumState::Start => {
                if c == MINUS {
                    self.negative = true;
                    self.state = NumState::AfterMinus;
                    Ok(Step::Continue)
                } else if c == ZERO {
                    self.state = NumState::IntegerZero;
                    Ok(Step::Continue)
                } else if is_digit(c) {
                    self.int_value = i64::from(digit_value(c));
                    self.state = NumState::IntegerDigits;
                    Ok(Step::Continue)
                } else {
                    unreachable!("the number frame is only ever pushed on '-' or a digit")
                }
            }
            NumState::AfterMinus => {
                if c == ZERO {
                    self.state = NumState::IntegerZero;
                    Ok(Step::Continue)
                } else if is_digit(c) {
                    self.int_value = i64::from(digit_value(c));
                    self.state = NumState::IntegerDigits;
                    Ok(Step::Continue)
                } else {
                    Err(SyntaxError::InvalidStartingSymbol(c))
                }
            }
            NumState::IntegerZero => self.after_integer(c),
            NumState::IntegerDigits => {
                if is_digit(c) {
                    self.int_value = self
                        .int_value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(i64::from(digit_value(c))))
                        .ok_or(SyntaxError::IntegerOverflow)?;
                    Ok(Step::Continue)
                } else {
                    self.after_integer(c)
                }
            }
            NumState::FractionFirstDigit => {
                if is_digit(c) {
                    self.accumulate_fraction(c);
                    self.state = NumState::FractionDigits;
                    Ok(Step::Continue)
                } else {
                    Err(SyntaxError::UnexpectedCharacter(c))
                }
            }
            NumState::FractionDigits => {
                if is_digit(c) {
                    self.accumulate_fraction(c);
                    Ok(Step::Continue)
                } else {
                    Ok(self.after_fraction(c))
                }
            }
            NumState::ExponentSign => {
                if c == PLUS {
                    self.exp_negative = false;
                    self.state = NumState::ExponentFirstDigit;
                    Ok(Step::Continue)
                } else if c == MINUS {
                    self.exp_negative = true;
                    self.state = NumState::ExponentFirstDigit;
                    Ok(Step::Continue)
                } else if is_digit(c) {
                    self.exp_value = i64::from(digit_value(c));
                    self.state = NumState::ExponentDigits;
                    Ok(Step::Continue)
                } else {
                    Err(SyntaxError::UnexpectedCharacter(c))
                }
            }
            NumState::ExponentFirstDigit => {
                if is_digit(c) {
                    self.exp_value = i64::from(digit_value(c));
                    self.state = NumState::ExponentDigits;
                    Ok(Step::Continue)
                } else {
                    Err(SyntaxError::UnexpectedCharacter(c))
                }
            }
            NumState::ExponentDigits => {
                if is_digit(c) {
                    self.exp_value = self
                        .exp_value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(i64::from(digit_value(c))))
                        .ok_or(SyntaxError::IntegerOverflow)?;
                    Ok(Step::Continue)
                } else {
                    Ok(self.finalize())
                }
            }
        }
    }

    fn after_integer(&mut self, c: char) -> Result<Step, SyntaxError> {
        if c == DECIMAL_POINT {
            self.state = NumState::FractionFirstDigit;
            Ok(Step::Continue)
        } else if c == EXPONENT_LOWER || c == EXPONENT_UPPER {
            self.state = NumState::ExponentSign;
            Ok(Step::Continue)
        } else {
            Ok(self.finalize())
        }
    }

    fn after_fraction(&mut self, c: char) -> Step {
        if c == EXPONENT_LOWER || c == EXPONENT_UPPER {
            self.state = NumState::ExponentSign;
            Step::Continue
        } else {
            self.finalize()
        }
    }

    fn accumulate_fraction(&mut self, c: char) {
        self.frac_scale *= 0.1;
        self.frac_value += f64::from(digit_value(c)) * self.frac_scale;
    }

    /// Finalizes this number as if end-of-input were a terminating
    /// character, but only if the accumulated digits already form a
    /// complete, valid number (e.g. not a bare `-`, a trailing `.`, or a
    /// trailing `e`). Used only by [`super::StreamingParser::finish`]: every
    /// other production is still `ParsingIncomplete` at end-of-input, but a
    /// number has no terminating character of its own to react to, so a
    /// well-formed one sitting at the end of the stream should not be
    /// rejected just because nothing followed it.
    pub(crate) fn finalize_if_complete(&self) -> Option<Value> {
        let complete = matches!(
            self.state,
            NumState::IntegerZero
                | NumState::IntegerDigits
                | NumState::FractionDigits
                | NumState::ExponentDigits
        );
        complete.then(|| match self.finalize() {
            Step::Done { value, .. } => value,
            Step::Continue | Step::Push(_) => unreachable!("finalize always returns Done"),
        })
    }

    fn finalize(&self) -> Step {
        // `powi` takes an `i32`; an exponent magnitude beyond that range
        // over- or underflows a finite `f64` regardless, so it is clamped
        // here rather than propagated as an error (the accumulator above
        // still rejects an exponent that would not fit in an `i64` at all).
        let exp = i32::try_from(self.exp_value).unwrap_or(i32::MAX);
        let magnitude =
            (self.int_value as f64 + self.frac_value) * 10f64.powi(if self.exp_negative { -exp } else { exp });
        let value = if self.negative { -magnitude } else { magnitude };
        Step::Done {
            value: Value::Number(value),
            reconsume: true,
        }
    }
}

fn digit_value(c: char) -> u8 {
    (c as u8) - b'0'
}
