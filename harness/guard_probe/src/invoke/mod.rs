//! One-shot wrappers around an operation under probe.
//!
//! [`probe_invoke`] brackets the operation: the expectation is declared
//! up front, the operation runs under `catch_unwind`, and any caught
//! [`AssertionSignal`] is handed to `catch_probe` for full content and
//! origin validation. [`probe_invoke_raw`] catches the same signals but
//! validates nothing beyond the expectation code; reaching the catch
//! point is the whole observation. Use the raw form when the signal's
//! file name does not follow the component convention, e.g. signals
//! raised by [`guard_assert!`](guard_signal::guard_assert) from Rust
//! call sites.
//!
//! Panics that are not assertion signals are not ours to judge and are
//! resumed untouched.

use std::panic::{self, UnwindSafe};

use tracing::debug;

use guard_signal::AssertionSignal;

use crate::probe::{catch_probe, catch_probe_raw, try_probe, try_probe_raw};

/// Run `op` and report whether its behavior matched the expectation.
///
/// `expected` is the test author's code (`'P'` or `'F'`);
/// `component_file_name`, when given, is the test driver's component
/// file, cross-checked against the origin of any caught signal (`None`
/// matches any origin). Returns true iff the observed behavior (normal
/// completion, or a caught and well-formed signal) agrees with the
/// declared expectation.
pub fn probe_invoke<F>(expected: char, component_file_name: Option<&str>, op: F) -> bool
where
    F: FnOnce() + UnwindSafe,
{
    let expect_pass = try_probe(expected);

    match panic::catch_unwind(op) {
        Ok(()) => {
            debug!(%expected, "operation completed without raising");
            expect_pass
        }
        Err(payload) => match payload.downcast::<AssertionSignal>() {
            Ok(caught) => {
                debug!(%expected, signal = %caught, "caught an assertion signal");
                catch_probe(expected, &caught, component_file_name)
            }
            Err(payload) => panic::resume_unwind(payload),
        },
    }
}

/// Raw counterpart of [`probe_invoke`]: a caught signal's content and
/// origin are not inspected, only whether one was caught at all.
pub fn probe_invoke_raw<F>(expected: char, op: F) -> bool
where
    F: FnOnce() + UnwindSafe,
{
    let expect_pass = try_probe_raw(expected);

    match panic::catch_unwind(op) {
        Ok(()) => expect_pass,
        Err(payload) => {
            if payload.downcast_ref::<AssertionSignal>().is_none() {
                panic::resume_unwind(payload);
            }
            debug!(%expected, "caught an assertion signal (raw)");
            catch_probe_raw(expected)
        }
    }
}

/// Probe an operation expected to complete without tripping any
/// defensive check. No signal inspection beyond catching it.
#[macro_export]
macro_rules! probe_pass {
    ($op:expr) => {
        $crate::probe_invoke_raw('P', || {
            $op;
        })
    };
}

/// Probe an operation expected to trip a defensive check. Any caught
/// signal satisfies the expectation, wherever it originated.
#[macro_export]
macro_rules! probe_fail {
    ($op:expr) => {
        $crate::probe_invoke_raw('F', || {
            $op;
        })
    };
}

/// Like [`probe_pass!`], but with full signal validation: the test
/// driver's component file is cross-checked against the origin of an
/// unexpectedly caught signal.
#[macro_export]
macro_rules! probe_pass_from {
    ($driver:expr, $op:expr) => {
        $crate::probe_invoke('P', Some($driver), || {
            $op;
        })
    };
}

/// Like [`probe_fail!`], but with full signal validation: the caught
/// signal must be well-formed and originate from the same component as
/// the given test driver file.
#[macro_export]
macro_rules! probe_fail_from {
    ($driver:expr, $op:expr) => {
        $crate::probe_invoke('F', Some($driver), || {
            $op;
        })
    };
}
