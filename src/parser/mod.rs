//! A streaming, pushdown-automaton JSON parser.
//!
//! There is no lookahead buffer: [`StreamingParser::feed`] consumes exactly
//! one character and, internally, drives a stack of per-production frames
//! (whitespace skipping is folded into whichever frame is currently
//! expecting a token) until that character has been either stored or
//! deliberately left for the frame underneath to see again.
//!
//! The frame stack is a tagged sum (a [`Frame`] enum) rather than a stack of
//! boxed trait objects: every production is known at compile time, so there
//! is no need to pay for virtual dispatch to get the "stack of sub-parsers"
//! shape.

mod array;
mod literal;
mod number;
mod object;
mod string;

use alloc::vec::Vec;

use crate::error::{ParserError, SyntaxError};
use crate::literals::{
    is_digit, is_whitespace, BEGIN_ARRAY, BEGIN_OBJECT, MINUS, QUOTATION_MARK, VALUE_FALSE,
    VALUE_NULL, VALUE_TRUE,
};
use crate::options::ParserOptions;
use crate::value::Value;

use array::ArrayFrame;
use literal::LiteralFrame;
use number::NumberFrame;
use object::ObjectFrame;
use string::StringFrame;

/// The outcome of feeding one character to the frame on top of the stack.
pub(crate) enum Step {
    /// The character was consumed; stay on this frame.
    Continue,
    /// Push a new frame and redeliver the same character to it.
    Push(Frame),
    /// This frame is finished. `reconsume` is `true` when the triggering
    /// character was not part of this production (currently only true for
    /// [`NumberFrame`]) and must be redelivered to the frame revealed by the
    /// pop.
    Done { value: Value, reconsume: bool },
}

/// One entry in the parser's state stack: either the permanent root frame,
/// or a production in progress.
pub(crate) enum Frame {
    /// The base of the stack. Never popped; accepts a whitespace-separated
    /// sequence of values for as long as the parser lives.
    Root,
    Lit(LiteralFrame),
    Str(StringFrame),
    Num(NumberFrame),
    Arr(ArrayFrame),
    Obj(ObjectFrame),
}

impl Frame {
    fn step(&mut self, c: char) -> Result<Step, SyntaxError> {
        match self {
            Frame::Root => {
                if is_whitespace(c) {
                    Ok(Step::Continue)
                } else {
                    Ok(Step::Push(dispatch_value(c)?))
                }
            }
            Frame::Lit(l) => l.step(c),
            Frame::Str(s) => s.step(c),
            Frame::Num(n) => n.step(c),
            Frame::Arr(a) => a.step(c),
            Frame::Obj(o) => o.step(c),
        }
    }

    /// Incorporates a just-completed child's value. Returns `Some(value)`
    /// only for the root frame, signaling that a top-level value is ready
    /// for retrieval.
    fn receive(&mut self, value: Value) -> Result<Option<Value>, SyntaxError> {
        match self {
            Frame::Root => Ok(Some(value)),
            Frame::Arr(a) => {
                a.receive(value);
                Ok(None)
            }
            Frame::Obj(o) => o.receive(value),
            Frame::Lit(_) | Frame::Str(_) | Frame::Num(_) => {
                unreachable!("literal/string/number frames never have children")
            }
        }
    }
}

/// Chooses and pushes the sub-parser whose first-symbol set contains `c`,
/// wherever a JSON value is expected (the document root, an array element,
/// or an object's value position).
fn dispatch_value(c: char) -> Result<Frame, SyntaxError> {
    Ok(match c {
        QUOTATION_MARK => Frame::Str(StringFrame::new()),
        BEGIN_ARRAY => Frame::Arr(ArrayFrame::new()),
        BEGIN_OBJECT => Frame::Obj(ObjectFrame::new()),
        'n' => Frame::Lit(LiteralFrame::new(VALUE_NULL, Value::Null)),
        't' => Frame::Lit(LiteralFrame::new(VALUE_TRUE, Value::True)),
        'f' => Frame::Lit(LiteralFrame::new(VALUE_FALSE, Value::False)),
        c if c == MINUS || is_digit(c) => Frame::Num(NumberFrame::new()),
        other => return Err(SyntaxError::InvalidStartingSymbol(other)),
    })
}

/// A character-at-a-time JSON parser producing a sequence of [`Value`]s.
///
/// Feeding is unconditional on the document boundary: whitespace-separated
/// root values accumulate in an internal queue, drained with
/// [`StreamingParser::retrieve`]. A value can only be retrieved once the
/// state stack has returned to depth 1 (only [`Frame::Root`] remains) — the
/// same instant at which it was enqueued.
pub struct StreamingParser {
    stack: Vec<Frame>,
    results: Vec<Value>,
    line: usize,
    column: usize,
}

impl StreamingParser {
    /// Creates a parser ready to accept its first character.
    #[must_use]
    pub fn new(_options: ParserOptions) -> Self {
        Self {
            stack: alloc::vec![Frame::Root],
            results: Vec::new(),
            line: 1,
            column: 0,
        }
    }

    /// Feeds a single character into the parser.
    ///
    /// # Errors
    ///
    /// Returns a [`ParserError`] carrying the line/column of `c` if it
    /// violates the grammar at the current position.
    pub fn feed(&mut self, c: char) -> Result<(), ParserError> {
        loop {
            let top = self
                .stack
                .last_mut()
                .expect("the root frame is never popped");
            let step = top.step(c).map_err(|kind| self.error(kind))?;
            match step {
                Step::Continue => {
                    self.advance(c);
                    return Ok(());
                }
                Step::Push(frame) => {
                    self.stack.push(frame);
                    // Redeliver `c` to the frame just pushed.
                }
                Step::Done { value, reconsume } => {
                    self.stack.pop();
                    let parent = self
                        .stack
                        .last_mut()
                        .expect("the root frame is never popped");
                    let completed = parent.receive(value).map_err(|kind| self.error(kind))?;
                    if let Some(root_value) = completed {
                        self.results.push(root_value);
                    }
                    if reconsume {
                        // Redeliver `c` to the frame just revealed.
                        continue;
                    }
                    self.advance(c);
                    return Ok(());
                }
            }
        }
    }

    /// Feeds every character of `s` in order.
    ///
    /// # Errors
    ///
    /// See [`StreamingParser::feed`].
    pub fn feed_str(&mut self, s: &str) -> Result<(), ParserError> {
        for c in s.chars() {
            self.feed(c)?;
        }
        Ok(())
    }

    /// Removes and returns the oldest completed top-level value, if any.
    pub fn retrieve(&mut self) -> Option<Value> {
        if self.results.is_empty() {
            None
        } else {
            Some(self.results.remove(0))
        }
    }

    /// Consumes the parser, asserting that every production on the stack
    /// has completed, and returns every value retrieved so far plus any
    /// still queued.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::ParsingIncomplete`] if a production was left
    /// unfinished (e.g. the stream ended mid-string, or immediately after a
    /// number with no trailing delimiter for it to react to).
    pub fn finish(mut self) -> Result<Vec<Value>, ParserError> {
        // A number has no terminating character of its own; one sitting
        // unfinished-looking at the very end of the stream, with nothing
        // left to trigger its `reconsume`, gets one last chance here.
        if let Some(Frame::Num(n)) = self.stack.last() {
            if let Some(value) = n.finalize_if_complete() {
                self.stack.pop();
                let parent = self
                    .stack
                    .last_mut()
                    .expect("the root frame is never popped");
                if let Some(root_value) = parent
                    .receive(value)
                    .expect("a bare top-level or array/object-slot number never fails to receive")
                {
                    self.results.push(root_value);
                }
            }
        }
        if self.stack.len() != 1 {
            let unfinished = self.stack.len() - 1;
            return Err(self.error(SyntaxError::ParsingIncomplete(unfinished)));
        }
        Ok(core::mem::take(&mut self.results))
    }

    /// Parses `s` in its entirety, returning every top-level value found.
    ///
    /// # Errors
    ///
    /// See [`StreamingParser::feed`] and [`StreamingParser::finish`].
    pub fn parse_str(s: &str, options: ParserOptions) -> Result<Vec<Value>, ParserError> {
        let mut parser = Self::new(options);
        parser.feed_str(s)?;
        parser.finish()
    }

    /// Parses every character yielded by `iter`, returning every top-level
    /// value found.
    ///
    /// # Errors
    ///
    /// See [`StreamingParser::feed`] and [`StreamingParser::finish`].
    pub fn parse_iter<I: IntoIterator<Item = char>>(
        iter: I,
        options: ParserOptions,
    ) -> Result<Vec<Value>, ParserError> {
        let mut parser = Self::new(options);
        for c in iter {
            parser.feed(c)?;
        }
        parser.finish()
    }

    fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    fn error(&self, kind: SyntaxError) -> ParserError {
        ParserError {
            kind,
            line: self.line,
            column: self.column,
        }
    }
}
