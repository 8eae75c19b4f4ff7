//! Core value types for verifying that defensive checks fire.
//!
//! A defensive check that trips during a test run raises an
//! [`AssertionSignal`] carrying the failed expression, the source file,
//! and the line number. The probe machinery in `guard_probe` intercepts
//! the signal and validates it against the test author's declared
//! expectation.
//!
//! This crate is the leaf of the harness: it defines the signal itself,
//! the closed [`Expected`] and [`BuildSpec`] code sets, the stderr
//! reporter, and [`fail_test_driver`], which is the one diverging path
//! in the whole facility.

mod build_spec;
mod expected;
mod fail;
pub mod report;
mod signal;

pub use build_spec::{is_valid_assert_build, BuildSpec, ParseBuildSpecError};
pub use expected::{is_valid_expected, Expected, InvalidExpectedCode};
pub use fail::{fail_test_driver, FailurePolicy};
pub use signal::AssertionSignal;
