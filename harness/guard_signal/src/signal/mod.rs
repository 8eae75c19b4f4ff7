//! The value raised when a defensive check fails.

use std::fmt;

use crate::report::render_error;

/// An immutable record of one failed defensive check.
///
/// Created exactly once per violation and consumed exactly once by the
/// matching probe validation; never mutated in between. The expression
/// and file fields are optional so that degenerate signals (missing or
/// empty text) can be represented and diagnosed distinctly, matching
/// the reporter's placeholder substitution.
///
/// The type is `Send + 'static`, so it can travel as a panic payload
/// from the failing check to the catch site.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AssertionSignal {
    expression: Option<String>,
    file: Option<String>,
    line: u32,
}

impl AssertionSignal {
    /// Create a well-formed signal from a failed expression, the source
    /// file it lives in, and its line number.
    pub fn new(expression: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        AssertionSignal {
            expression: Some(expression.into()),
            file: Some(file.into()),
            line,
        }
    }

    /// Assemble a signal from raw parts, including absent fields.
    ///
    /// Probe validation treats absent and empty fields as invalid; this
    /// constructor exists so tests can build such signals deliberately.
    pub fn from_parts(expression: Option<String>, file: Option<String>, line: u32) -> Self {
        AssertionSignal {
            expression,
            file,
            line,
        }
    }

    /// The textual condition that failed, if one was recorded.
    pub fn expression(&self) -> Option<&str> {
        self.expression.as_deref()
    }

    /// The source path where the check fired, if one was recorded.
    pub fn filename(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// The line number of the failed check. Zero marks a malformed signal.
    pub fn line_number(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for AssertionSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Same line the stderr reporter emits, without the trailing newline.
        let rendered = render_error(self.expression(), self.filename(), self.line);
        f.write_str(rendered.trim_end_matches('\n'))
    }
}
