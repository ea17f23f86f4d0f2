//! Parser configuration.

/// Configuration accepted by [`crate::StreamingParser::new`].
///
/// No flag is currently read by the core grammar loop — RFC 8259 whitespace
/// handling and multi-root acceptance are unconditional. This struct exists
/// so the constructor shape (`StreamingParser::new(options)`) doesn't need
/// to change the day a real knob (e.g. an arbitrary-precision number mode)
/// is added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct ParserOptions {}

impl ParserOptions {
    /// Returns the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
