//! Probes that verify defensive checks fire when, and only when, they
//! should.
//!
//! A test that exercises a defensive check brackets the operation under
//! test with a probe: [`try_probe`] records the author's expectation
//! (`'P'` for pass, `'F'` for fail), the operation runs, and if a
//! [`guard_signal::AssertionSignal`] is caught, [`catch_probe`]
//! validates its origin and textual content against that expectation.
//!
//! The origin check parses component file names: `pkg/comp.h`,
//! `pkg/comp.cpp`, and `pkg/comp.t.cpp` all name the component `comp`,
//! so a check fired from a component's header matches a test driver
//! named after the same component.
//!
//! [`probe_invoke`] wraps the whole sequence, catching the signal with
//! `catch_unwind` and validating it in full; the
//! [`probe_pass_from!`]/[`probe_fail_from!`] macros build on it. The raw
//! forms skip signal inspection: [`probe_invoke_raw`] and the bare
//! [`probe_pass!`]/[`probe_fail!`] macros observe only whether a signal
//! was caught, and [`try_probe_raw`]/[`catch_probe_raw`] serve builds
//! where a failed check aborts instead of unwinding, so no signal object
//! exists at all.

mod component;
mod invoke;
mod probe;

pub use component::{extract_component_name, ComponentName, ComponentNameError};
pub use invoke::{probe_invoke, probe_invoke_raw};
pub use probe::{catch_probe, catch_probe_raw, try_probe, try_probe_raw};

// The signal types travel with the probes; re-export so harness code
// needs a single dependency.
pub use guard_signal::{
    fail_test_driver, guard_assert, is_valid_assert_build, is_valid_expected, AssertionSignal,
    BuildSpec, Expected, FailurePolicy, InvalidExpectedCode, ParseBuildSpecError,
};
