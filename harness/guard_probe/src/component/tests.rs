use super::*;
use pretty_assertions::assert_eq;

// === Recognized suffixes ===

#[test]
fn header_strips_dot_h() {
    let name = extract_component_name("vector.h").unwrap();
    assert_eq!(name, "vector");
    assert_eq!(name.len(), 6);
}

#[test]
fn implementation_strips_dot_cpp() {
    let name = extract_component_name("vector.cpp").unwrap();
    assert_eq!(name, "vector");
}

#[test]
fn test_driver_strips_dot_t_dot_cpp() {
    let name = extract_component_name("vector.t.cpp").unwrap();
    assert_eq!(name, "vector");
}

#[test]
fn all_three_suffixes_yield_the_same_name() {
    let header = extract_component_name("pkg/comp.h").unwrap();
    let body = extract_component_name("pkg/comp.cpp").unwrap();
    let driver = extract_component_name("pkg/comp.t.cpp").unwrap();
    assert_eq!(header, body);
    assert_eq!(body, driver);
    assert_eq!(driver, "comp");
}

// === Leading paths ===

#[test]
fn leading_directories_are_stripped() {
    assert_eq!(extract_component_name("a/b/x.h").unwrap(), "x");
    assert_eq!(extract_component_name("a/b/x.cpp").unwrap(), "x");
    assert_eq!(extract_component_name("a/b/x.t.cpp").unwrap(), "x");
}

#[test]
fn name_runs_from_string_start_without_separator() {
    assert_eq!(extract_component_name("standalone.cpp").unwrap(), "standalone");
}

#[cfg(not(windows))]
#[test]
fn backslash_is_not_a_separator_on_posix() {
    assert_eq!(extract_component_name("a\\b\\x.h").unwrap(), "a\\b\\x");
}

#[cfg(windows)]
#[test]
fn backslash_and_drive_colon_separate_on_windows() {
    assert_eq!(extract_component_name("a\\b\\x.h").unwrap(), "x");
    assert_eq!(extract_component_name("c:x.h").unwrap(), "x");
}

// === Rejections ===

#[test]
fn too_short_paths_are_rejected() {
    assert_eq!(extract_component_name(""), Err(ComponentNameError::TooShort));
    assert_eq!(extract_component_name("x"), Err(ComponentNameError::TooShort));
    assert_eq!(extract_component_name(".h"), Err(ComponentNameError::TooShort));
}

#[test]
fn trailing_h_without_dot_is_rejected() {
    assert_eq!(
        extract_component_name("path"),
        Err(ComponentNameError::NotAHeader)
    );
}

#[test]
fn short_p_suffixed_paths_are_rejected() {
    assert_eq!(
        extract_component_name("x.p"),
        Err(ComponentNameError::TooShortForCpp)
    );
}

#[test]
fn misspelled_cpp_suffixes_are_rejected_stepwise() {
    assert_eq!(
        extract_component_name("file.cxp"),
        Err(ComponentNameError::NotACpp(1))
    );
    assert_eq!(
        extract_component_name("file.xpp"),
        Err(ComponentNameError::NotACpp(2))
    );
    assert_eq!(
        extract_component_name("filecpp"),
        Err(ComponentNameError::NotACpp(3))
    );
}

#[test]
fn unrecognized_suffixes_are_rejected() {
    assert_eq!(
        extract_component_name("file.txt"),
        Err(ComponentNameError::Unrecognized)
    );
    assert_eq!(
        extract_component_name("file.rs"),
        Err(ComponentNameError::Unrecognized)
    );
}

#[test]
fn rejection_messages_are_distinct() {
    let messages = [
        ComponentNameError::TooShort.to_string(),
        ComponentNameError::NotAHeader.to_string(),
        ComponentNameError::TooShortForCpp.to_string(),
        ComponentNameError::NotACpp(1).to_string(),
        ComponentNameError::NotACpp(2).to_string(),
        ComponentNameError::NotACpp(3).to_string(),
        ComponentNameError::Unrecognized.to_string(),
    ];
    for (i, a) in messages.iter().enumerate() {
        for b in &messages[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// === Edge shapes the original convention admits ===

#[test]
fn empty_component_name_is_accepted() {
    let name = extract_component_name("pkg/.h").unwrap();
    assert_eq!(name, "");
    assert!(name.is_empty());
}

#[test]
fn dot_t_infix_is_only_folded_past_the_leading_bytes() {
    // The infix dot sits at index 2 or earlier, so `.t` stays part of
    // the component name rather than the suffix.
    assert_eq!(extract_component_name(".t.cpp").unwrap(), ".t");
    // One byte further along, the infix folds into the suffix.
    assert_eq!(extract_component_name("ab.t.cpp").unwrap(), "ab");
}

#[test]
fn multibyte_names_survive_slicing() {
    assert_eq!(extract_component_name("pkg/größe.h").unwrap(), "größe");
}

mod properties {
    use super::super::{extract_component_name, ComponentNameError};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn recognized_suffixes_round_trip(
            name in "[a-z][a-z0-9_]{0,24}",
            dirs in proptest::collection::vec("[a-z]{1,8}", 0..4),
            suffix in prop_oneof![Just(".h"), Just(".cpp"), Just(".t.cpp")],
        ) {
            let mut path = String::new();
            for dir in &dirs {
                path.push_str(dir);
                path.push('/');
            }
            path.push_str(&name);
            path.push_str(suffix);

            let extracted = extract_component_name(&path);
            prop_assert!(extracted.is_ok());
            prop_assert_eq!(extracted.map(|c| c.as_str().to_owned()), Ok(name));
        }

        #[test]
        fn suffix_free_paths_never_parse(stem in "[a-z/]{3,32}") {
            // No trailing 'h' or 'p', so no recognized suffix applies.
            let path = format!("{stem}x");
            prop_assert_eq!(
                extract_component_name(&path),
                Err(ComponentNameError::Unrecognized)
            );
        }
    }
}
