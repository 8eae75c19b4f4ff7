//! The closed set of assertion-enforcement build levels.

use std::fmt;
use std::str::FromStr;

/// Error raised when a build-spec string is not one of the six
/// recognized codes.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[error("unrecognized assert-build spec: {0:?}")]
pub struct ParseBuildSpecError(pub String);

/// Which assertion-enforcement level a build was configured with.
///
/// The string codes are fixed at build time in the system under test;
/// the harness only needs to recognize them to decide whether probes
/// are meaningful. The `2` forms are the second-level variants of each
/// category.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BuildSpec {
    /// `"S"`: safe-mode checks enforced.
    Safe,
    /// `"S2"`: safe-mode level 2.
    Safe2,
    /// `"A"`: standard assertions enforced.
    Assert,
    /// `"A2"`: standard assertions level 2.
    Assert2,
    /// `"O"`: opt-mode checks only.
    Opt,
    /// `"O2"`: opt-mode level 2.
    Opt2,
}

impl BuildSpec {
    /// The canonical string code for this level.
    pub fn as_str(self) -> &'static str {
        match self {
            BuildSpec::Safe => "S",
            BuildSpec::Safe2 => "S2",
            BuildSpec::Assert => "A",
            BuildSpec::Assert2 => "A2",
            BuildSpec::Opt => "O",
            BuildSpec::Opt2 => "O2",
        }
    }

    /// Whether this is one of the level-2 variants.
    pub fn is_level_two(self) -> bool {
        matches!(self, BuildSpec::Safe2 | BuildSpec::Assert2 | BuildSpec::Opt2)
    }
}

impl FromStr for BuildSpec {
    type Err = ParseBuildSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(BuildSpec::Safe),
            "S2" => Ok(BuildSpec::Safe2),
            "A" => Ok(BuildSpec::Assert),
            "A2" => Ok(BuildSpec::Assert2),
            "O" => Ok(BuildSpec::Opt),
            "O2" => Ok(BuildSpec::Opt2),
            other => Err(ParseBuildSpecError(other.to_owned())),
        }
    }
}

impl fmt::Display for BuildSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check whether `spec` names a recognized assert-build level.
///
/// Accepts exactly `"S"`, `"S2"`, `"A"`, `"A2"`, `"O"`, `"O2"`; rejects
/// everything else, including the empty string.
pub fn is_valid_assert_build(spec: &str) -> bool {
    spec.parse::<BuildSpec>().is_ok()
}
