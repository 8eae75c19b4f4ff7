//! Probe validation: declared expectation versus observed behavior.
//!
//! [`try_probe`] runs immediately before the operation under test and
//! answers whether the caller should expect it to complete normally.
//! [`catch_probe`] runs after a signal is caught and validates the
//! signal's content and origin against the expectation. The raw
//! variants skip signal inspection entirely; they rely solely on
//! whether control reached the catch point.
//!
//! Malformed invocations (unrecognized expectation codes, unparseable
//! file names) are diagnosed on standard output but never abort the
//! probe: every entry point still returns a boolean so the caller can
//! fail the test case.

use tracing::debug;

use guard_signal::report::print_error;
use guard_signal::{AssertionSignal, Expected};

use crate::component::extract_component_name;

/// Declare the expectation for the operation about to run.
///
/// Returns true iff `expected` is `'P'`, i.e. no assertion should fire;
/// the caller treats a normal completion as a pass in that case and is
/// responsible for the complementary case (a failure was expected but
/// none occurred). An unrecognized code is diagnosed on stdout and
/// treated as not-pass.
pub fn try_probe(expected: char) -> bool {
    match Expected::from_code(expected) {
        Ok(declared) => declared == Expected::Pass,
        Err(err) => {
            println!("{err} passed to try_probe");
            false
        }
    }
}

/// Validate a caught assertion signal against the declared expectation.
///
/// Returns true iff `expected` is `'F'`, the signal carries a
/// well-formed expression, file, and line, and, when
/// `component_file_name` is given, the signal originates from the same
/// component as the test driver. A `None` driver file matches any
/// origin, while a driver file that fails to parse is a hard validation
/// failure; that asymmetry is part of the contract.
///
/// Validation failures are reported before the result is computed: file
/// parse failures on stdout, and one assertion-failure line on stderr
/// covering any malformed signal content.
pub fn catch_probe(
    expected: char,
    signal: &AssertionSignal,
    component_file_name: Option<&str>,
) -> bool {
    // Validate every argument first so each problem is diagnosed, then
    // compute the result.
    let mut valid_arguments = true;

    let declared = match Expected::from_code(expected) {
        Ok(declared) => Some(declared),
        Err(err) => {
            println!("{err} passed to catch_probe");
            valid_arguments = false;
            None
        }
    };

    let signal_component = match signal.filename() {
        Some(file) => match extract_component_name(file) {
            Ok(component) => Some(component),
            Err(_) => {
                println!("bad component name in signal caught by catch_probe: {file}");
                valid_arguments = false;
                None
            }
        },
        None => None,
    };

    let expression = signal.expression();
    valid_arguments = valid_arguments
        && signal.line_number() > 0
        && expression.is_some_and(|text| !text.is_empty());

    let driver_component = match component_file_name {
        Some(file) => match extract_component_name(file) {
            Ok(component) => Some(component),
            Err(_) => {
                println!("bad component name for test driver in catch_probe: {file}");
                valid_arguments = false;
                None
            }
        },
        None => None,
    };

    if !valid_arguments {
        print_error(expression, signal.filename(), signal.line_number());
        return false;
    }

    if declared != Some(Expected::Fail) {
        debug!(%expected, "caught a signal but no failure was expected");
        return false;
    }

    // A `None` driver file matches any origin. When given, two
    // component files match iff their names are byte-for-byte equal,
    // regardless of path and suffix.
    if component_file_name.is_some() && driver_component != signal_component {
        debug!("signal origin does not match the test driver's component");
        return false;
    }

    true
}

/// Raw counterpart of [`try_probe`] for builds where a failed check
/// terminates the process instead of raising a catchable signal.
pub fn try_probe_raw(expected: char) -> bool {
    match Expected::from_code(expected) {
        Ok(declared) => declared == Expected::Pass,
        Err(err) => {
            println!("{err} passed to try_probe_raw");
            false
        }
    }
}

/// Raw counterpart of [`catch_probe`]: no signal object exists, so only
/// the expectation code is validated. Reaching the catch point at all
/// is the evidence that a check fired.
pub fn catch_probe_raw(expected: char) -> bool {
    match Expected::from_code(expected) {
        Ok(declared) => declared == Expected::Fail,
        Err(err) => {
            println!("{err} passed to catch_probe_raw");
            false
        }
    }
}
