//! The JSON array sub-parser.

use alloc::vec::Vec;

use crate::error::SyntaxError;
use crate::literals::{is_whitespace, BEGIN_ARRAY, END_ARRAY, VALUE_SEPARATOR};
use crate::value::Value;

use super::{dispatch_value, Step};

enum ArrState {
    /// Just consumed `[`; an element or `]` may come next.
    Start,
    /// An element was just received; `,` or `]` may come next.
    AfterValue,
    /// A `,` was just consumed; only an element may come next.
    AfterComma,
}

/// Parses a JSON array, from the opening `[` (fed as this frame's first
/// character) to the matching `]`.
pub(crate) struct ArrayFrame {
    items: Vec<Value>,
    state: ArrState,
    opened: bool,
}

impl ArrayFrame {
    pub(crate) fn new() -> Self {
        Self {
            items: Vec::new(),
            state: ArrState::Start,
            opened: false,
        }
    }

    pub(crate) fn step(&mut self, c: char) -> Result<Step, SyntaxError> {
        match self.state {
            ArrState::Start => {
                if !self.opened {
                    debug_assert_eq!(c, BEGIN_ARRAY);
                    self.opened = true;
                    return Ok(Step::Continue);
                }
                if is_whitespace(c) {
                    return Ok(Step::Continue);
                }
                if c == END_ARRAY {
                    return Ok(Step::Done {
                        value: Value::Array(core::mem::take(&mut self.items)),
                        reconsume: false,
                    });
                }
                Ok(Step::Push(dispatch_value(c)?))
            }
            ArrState::AfterValue => {
                if is_whitespace(c) {
                    Ok(Step::Continue)
                } else if c == VALUE_SEPARATOR {
                    self.state = ArrState::AfterComma;
                    Ok(Step::Continue)
                } else if c == END_ARRAY {
                    Ok(Step::Done {
                        value: Value::Array(core::mem::take(&mut self.items)),
                        reconsume: false,
                    })
                } else {
                    Err(SyntaxError::UnexpectedCharacter(c))
                }
            }
            ArrState::AfterComma => {
                if is_whitespace(c) {
                    Ok(Step::Continue)
                } else {
                    Ok(Step::Push(dispatch_value(c)?))
                }
            }
        }
    }

    pub(crate) fn receive(&mut self, value: Value) {
        self.items.push(value);
        self.state = ArrState::AfterValue;
    }
}
