//! A streaming, pushdown-automaton JSON parser paired with a polymorphic
//! in-memory value tree.
//!
//! Parsing is driven one character at a time through [`StreamingParser`],
//! with no internal lookahead buffer. Completed values are exposed as
//! [`Value`], a closed sum of the seven JSON node kinds, supporting uniform
//! key/index access, structural equality, visitor dispatch, compact and
//! indented serialization, and a pre-order traversal over a whole document.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod iter;
mod literals;
mod options;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use error::{DomError, ParserError, SyntaxError};
pub use iter::PreOrderIter;
pub use options::ParserOptions;
pub use parser::StreamingParser;
pub use value::{Array, Iter, Map, Value, Visitor, VisitorMut};
