//! Stderr reporter for assertion failures.
//!
//! The output line has a fixed, contractual format:
//!
//! ```text
//! Assertion failed: {text}, file {file}, line {line}
//! ```
//!
//! Absent or empty fields are replaced with human-readable placeholder
//! text before formatting. This reporter writes to standard error; the
//! probe-rejection diagnostics elsewhere in the harness deliberately
//! write to standard output instead.

use std::io::{self, Write};

/// Placeholder for an expression that was never recorded.
pub const UNSPECIFIED_EXPRESSION: &str = "(* Unspecified Expression Text *)";
/// Placeholder for an expression recorded as the empty string.
pub const EMPTY_EXPRESSION: &str = "(* Empty Expression Text *)";
/// Placeholder for a file name that was never recorded.
pub const UNSPECIFIED_FILE: &str = "(* Unspecified File Name *)";
/// Placeholder for a file name recorded as the empty string.
pub const EMPTY_FILE: &str = "(* Empty File Name *)";

fn substitute<'a>(
    field: Option<&'a str>,
    unspecified: &'static str,
    empty: &'static str,
) -> &'a str {
    match field {
        None => unspecified,
        Some("") => empty,
        Some(text) => text,
    }
}

/// Render the assertion-failure line, including the trailing newline.
pub fn render_error(text: Option<&str>, file: Option<&str>, line: u32) -> String {
    let text = substitute(text, UNSPECIFIED_EXPRESSION, EMPTY_EXPRESSION);
    let file = substitute(file, UNSPECIFIED_FILE, EMPTY_FILE);
    format!("Assertion failed: {text}, file {file}, line {line}\n")
}

/// Write the assertion-failure line to standard error and flush it.
///
/// Cannot fail: write errors on stderr are ignored. The explicit flush
/// covers the case where stderr has been reopened as a buffered stream.
pub fn print_error(text: Option<&str>, file: Option<&str>, line: u32) {
    let mut stderr = io::stderr().lock();
    let _ = stderr.write_all(render_error(text, file, line).as_bytes());
    let _ = stderr.flush();
}
