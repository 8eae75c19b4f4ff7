//! The test author's declared expectation for a probed operation.

use std::fmt;

/// Error raised when an expectation code is neither `'P'` nor `'F'`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[error("invalid expected-result code: '{0}'")]
pub struct InvalidExpectedCode(pub char);

/// What the test author declared should happen to the operation under
/// test: either it completes normally (`Pass`) or a defensive check
/// fires (`Fail`).
///
/// Test drivers supply the single-character codes `'P'` and `'F'`; the
/// probe entry points parse them into this enum so validation is
/// exhaustive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expected {
    /// No assertion should fire (`'P'`).
    Pass,
    /// An assertion should fire (`'F'`).
    Fail,
}

impl Expected {
    /// Parse a single-character expectation code.
    pub fn from_code(code: char) -> Result<Self, InvalidExpectedCode> {
        match code {
            'P' => Ok(Expected::Pass),
            'F' => Ok(Expected::Fail),
            other => Err(InvalidExpectedCode(other)),
        }
    }

    /// The single-character code for this expectation.
    pub fn code(self) -> char {
        match self {
            Expected::Pass => 'P',
            Expected::Fail => 'F',
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Pass => write!(f, "pass"),
            Expected::Fail => write!(f, "fail"),
        }
    }
}

/// Check whether `code` is a recognized expectation code.
pub fn is_valid_expected(code: char) -> bool {
    Expected::from_code(code).is_ok()
}
