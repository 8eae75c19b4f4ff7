//! The terminal action of a failed defensive check in a test run.

use std::panic;
use std::process;

use crate::report::print_error;
use crate::AssertionSignal;

/// How a failed defensive check surfaces during a test run.
///
/// `Recoverable` raises the [`AssertionSignal`] as a catchable panic
/// payload so a probe at the catch site can validate it. `Fatal` is for
/// builds that cannot unwind: the failure is reported to stderr and the
/// process is terminated abnormally, with no recovery.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FailurePolicy {
    /// Raise a catchable signal for `catch_probe` to intercept.
    Recoverable,
    /// Report to stderr and abort the process.
    Fatal,
}

impl FailurePolicy {
    /// The policy matching the current build's panic strategy:
    /// `Recoverable` when the build unwinds, `Fatal` under
    /// `panic = "abort"`.
    pub const fn for_build() -> Self {
        if cfg!(panic = "unwind") {
            FailurePolicy::Recoverable
        } else {
            FailurePolicy::Fatal
        }
    }
}

impl Default for FailurePolicy {
    fn default() -> Self {
        Self::for_build()
    }
}

/// Terminate the operation under test after a defensive check failed.
///
/// Never returns. Under [`FailurePolicy::Recoverable`] the signal
/// becomes a panic payload and control transfers to the nearest
/// `catch_unwind`; under [`FailurePolicy::Fatal`] the failure line is
/// written to stderr and the process aborts without unwinding.
pub fn fail_test_driver(signal: AssertionSignal, policy: FailurePolicy) -> ! {
    match policy {
        FailurePolicy::Recoverable => panic::panic_any(signal),
        FailurePolicy::Fatal => {
            print_error(signal.expression(), signal.filename(), signal.line_number());
            process::abort();
        }
    }
}

/// A defensive check wired into the test harness.
///
/// When the condition is false, raises an [`AssertionSignal`] built from
/// the stringified condition and the call site's file and line, using
/// the policy matching the current build. Intended to guard invariants
/// in code whose enforcement behavior is itself under test.
#[macro_export]
macro_rules! guard_assert {
    ($cond:expr) => {
        if !$cond {
            $crate::fail_test_driver(
                $crate::AssertionSignal::new(stringify!($cond), file!(), line!()),
                $crate::FailurePolicy::for_build(),
            );
        }
    };
}
