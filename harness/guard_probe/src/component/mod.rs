//! Component-name extraction from source file paths.
//!
//! A component file is a file ending in `.h`, `.cpp`, or `.t.cpp`; the
//! component name is the file name minus that suffix and any leading
//! directory path. `pkg/vector.h`, `pkg/vector.cpp`, and
//! `pkg/vector.t.cpp` all belong to the component `vector`.
//!
//! Extraction inspects trailing bytes only, never scanning forward: the
//! suffix is classified backward character by character, then the
//! nearest path separator bounds the name on the left.

use std::fmt;

/// Why a path was rejected as a component file name.
///
/// Each rejection path carries a distinct message; the extractor prints
/// it to standard output (deliberately not stderr, which is reserved
/// for the assertion-failure reporter).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum ComponentNameError {
    /// Shorter than the shortest possible component file name (`x.h`).
    #[error("filename is too short")]
    TooShort,
    /// Ends in `h` but the preceding byte is not a dot.
    #[error("filename is not a header")]
    NotAHeader,
    /// Ends in `p` but is too short to carry a `.cpp` suffix.
    #[error("filename is not long enough for a .cpp")]
    TooShortForCpp,
    /// Ends in `p` but the trailing bytes do not spell `.cpp`; the
    /// payload records which backward comparison failed.
    #[error("filename is not a .cpp({0})")]
    NotACpp(u8),
    /// The trailing byte matches no recognized suffix.
    #[error("filename is not recognized")]
    Unrecognized,
}

/// A borrowed view of the component name inside a path string.
///
/// Borrows from the path passed to [`extract_component_name`] and must
/// not outlive it; it is never stored past the validation call that
/// produced it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ComponentName<'a> {
    name: &'a str,
}

impl ComponentName<'_> {
    /// The component name as a string slice.
    pub fn as_str(&self) -> &str {
        self.name
    }

    /// Length of the component name in bytes.
    pub fn len(&self) -> usize {
        self.name.len()
    }

    /// Whether the name is empty (the original convention admits paths
    /// like `pkg/.h`, whose component name is empty).
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

impl fmt::Display for ComponentName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl PartialEq<&str> for ComponentName<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

#[cfg(windows)]
const fn is_path_separator(byte: u8) -> bool {
    matches!(byte, b'/' | b':' | b'\\')
}

#[cfg(not(windows))]
const fn is_path_separator(byte: u8) -> bool {
    byte == b'/'
}

/// Extract the component name from a component file path.
///
/// Returns a borrowed [`ComponentName`] on success. On rejection,
/// prints the reason to standard output and returns the corresponding
/// [`ComponentNameError`]. Two component files match if their extracted
/// names compare equal byte for byte, regardless of path or suffix.
pub fn extract_component_name(path: &str) -> Result<ComponentName<'_>, ComponentNameError> {
    parse(path).inspect_err(|err| println!("{err}"))
}

fn parse(path: &str) -> Result<ComponentName<'_>, ComponentNameError> {
    let bytes = path.as_bytes();
    let len = bytes.len();
    if len < 3 {
        return Err(ComponentNameError::TooShort);
    }

    // Classify the suffix backward; `end` lands on the dot that starts
    // the stripped suffix.
    let end = match bytes[len - 1] {
        b'h' => {
            if bytes[len - 2] != b'.' {
                return Err(ComponentNameError::NotAHeader);
            }
            len - 2
        }
        b'p' => {
            if len < 5 {
                return Err(ComponentNameError::TooShortForCpp);
            }
            if bytes[len - 2] != b'p' {
                return Err(ComponentNameError::NotACpp(1));
            }
            if bytes[len - 3] != b'c' {
                return Err(ComponentNameError::NotACpp(2));
            }
            if bytes[len - 4] != b'.' {
                return Err(ComponentNameError::NotACpp(3));
            }
            let dot = len - 4;
            // A `.t` infix two bytes further back folds into the
            // stripped suffix, but only when the dot sits past index 2.
            if dot > 2 && bytes[dot - 1] == b't' && bytes[dot - 2] == b'.' {
                dot - 2
            } else {
                dot
            }
        }
        _ => return Err(ComponentNameError::Unrecognized),
    };

    // The name starts after the nearest path separator, or at the
    // beginning of the string when there is none.
    let start = bytes[..end]
        .iter()
        .rposition(|&b| is_path_separator(b))
        .map_or(0, |sep| sep + 1);

    Ok(ComponentName {
        name: &path[start..end],
    })
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
