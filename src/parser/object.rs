//! The JSON object sub-parser.

use alloc::string::String;

use crate::error::SyntaxError;
use crate::literals::{
    is_whitespace, BEGIN_OBJECT, END_OBJECT, NAME_SEPARATOR, QUOTATION_MARK, VALUE_SEPARATOR,
};
use crate::value::{Map, Value};

use super::{dispatch_value, Step};

enum ObjState {
    /// Just consumed `{`; a key (string) or `}` may come next.
    Start,
    /// A key string is in progress or was just received; `:` comes next.
    AfterKey,
    /// A `:` was just consumed; a value may come next.
    AfterColon,
    /// A value was just received; `,` or `}` may come next.
    AfterValue,
    /// A `,` was just consumed; only a key (string) may come next.
    AfterComma,
}

/// Parses a JSON object, from the opening `{` (fed as this frame's first
/// character) to the matching `}`.
pub(crate) struct ObjectFrame {
    map: Map,
    pending_key: Option<String>,
    state: ObjState,
    opened: bool,
}

impl ObjectFrame {
    pub(crate) fn new() -> Self {
        Self {
            map: Map::new(),
            pending_key: None,
            state: ObjState::Start,
            opened: false,
        }
    }

    pub(crate) fn step(&mut self, c: char) -> Result<Step, SyntaxError> {
        match self.state {
            ObjState::Start => {
                if !self.opened {
                    debug_assert_eq!(c, BEGIN_OBJECT);
                    self.opened = true;
                    return Ok(Step::Continue);
                }
                if is_whitespace(c) {
                    return Ok(Step::Continue);
                }
                if c == END_OBJECT {
                    return Ok(Step::Done {
                        value: Value::Object(core::mem::take(&mut self.map)),
                        reconsume: false,
                    });
                }
                if c == QUOTATION_MARK {
                    return Ok(Step::Push(dispatch_value(c)?));
                }
                Err(SyntaxError::InvalidStartingSymbol(c))
            }
            ObjState::AfterKey => {
                if is_whitespace(c) {
                    Ok(Step::Continue)
                } else if c == NAME_SEPARATOR {
                    self.state = ObjState::AfterColon;
                    Ok(Step::Continue)
                } else {
                    Err(SyntaxError::UnexpectedCharacter(c))
                }
            }
            ObjState::AfterColon => {
                if is_whitespace(c) {
                    Ok(Step::Continue)
                } else {
                    Ok(Step::Push(dispatch_value(c)?))
                }
            }
            ObjState::AfterValue => {
                if is_whitespace(c) {
                    Ok(Step::Continue)
                } else if c == VALUE_SEPARATOR {
                    self.state = ObjState::AfterComma;
                    Ok(Step::Continue)
                } else if c == END_OBJECT {
                    Ok(Step::Done {
                        value: Value::Object(core::mem::take(&mut self.map)),
                        reconsume: false,
                    })
                } else {
                    Err(SyntaxError::UnexpectedCharacter(c))
                }
            }
            ObjState::AfterComma => {
                if is_whitespace(c) {
                    Ok(Step::Continue)
                } else if c == QUOTATION_MARK {
                    Ok(Step::Push(dispatch_value(c)?))
                } else {
                    Err(SyntaxError::InvalidStartingSymbol(c))
                }
            }
        }
    }

    pub(crate) fn receive(&mut self, value: Value) -> Result<Option<Value>, SyntaxError> {
        match self.state {
            ObjState::Start | ObjState::AfterComma => {
                let Value::String(key) = value else {
                    unreachable!("only a string frame is ever pushed in key position")
                };
                if self.map.contains_key(&key) {
                    return Err(SyntaxError::DuplicateKey(key));
                }
                self.pending_key = Some(key);
                self.state = ObjState::AfterKey;
                Ok(None)
            }
            ObjState::AfterColon => {
                let key = self
                    .pending_key
                    .take()
                    .expect("a value was received without a pending key");
                self.map.insert(key, value);
                self.state = ObjState::AfterValue;
                Ok(None)
            }
            ObjState::AfterKey | ObjState::AfterValue => {
                unreachable!(
                    "no child frame is ever pushed while awaiting a separator character"
                )
            }
        }
    }
}
