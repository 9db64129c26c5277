//! Principle module - legal doctrines shared between cases

use serde::{Deserialize, Serialize};

/// Derive the graph identifier of a principle from its display name
///
/// The name is lower-cased and every run of whitespace is replaced with a
/// single underscore. Leading and trailing whitespace is not trimmed, so
/// `" Privacy"` and `"Privacy"` map to different identifiers; ingestion
/// relies on this exact rule to resolve repeated names to the same node.
///
/// # Examples
///
/// ```
/// use precedent_domain::principle_id;
///
/// assert_eq!(principle_id("Data Privacy"), "data_privacy");
/// assert_eq!(principle_id("data   privacy"), "data_privacy");
/// assert_eq!(principle_id("Stare\tDecisis"), "stare_decisis");
/// ```
pub fn principle_id(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut id = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for ch in lowered.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                id.push('_');
                in_whitespace = true;
            }
        } else {
            id.push(ch);
            in_whitespace = false;
        }
    }

    id
}

/// A legal principle node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principle {
    /// Slug derived from the display name
    pub id: String,

    /// Display name as first supplied
    pub name: String,
}

impl Principle {
    /// Create a principle from its display name
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: principle_id(&name),
            name,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn whitespace_run() -> impl Strategy<Value = String> {
        prop::collection::vec(prop_oneof![Just(' '), Just('\t'), Just('\n')], 1..4)
            .prop_map(|chars| chars.into_iter().collect())
    }

    proptest! {
        /// Property: casing and whitespace variants of the same words share an id
        #[test]
        fn test_whitespace_and_case_variants_share_id(
            words in prop::collection::vec("[A-Za-z]{1,8}", 1..5),
            gaps in prop::collection::vec(whitespace_run(), 4),
            upper in any::<bool>(),
        ) {
            let canonical = words.join(" ");

            let mut variant = String::new();
            for (idx, word) in words.iter().enumerate() {
                if idx > 0 {
                    variant.push_str(&gaps[idx - 1]);
                }
                if upper {
                    variant.push_str(&word.to_uppercase());
                } else {
                    variant.push_str(word);
                }
            }

            prop_assert_eq!(principle_id(&canonical), principle_id(&variant));
        }

        /// Property: derived ids contain no whitespace and are stable
        #[test]
        fn test_id_has_no_whitespace(name in "\\PC{0,32}") {
            let id = principle_id(&name);
            prop_assert!(!id.chars().any(char::is_whitespace));
            prop_assert_eq!(principle_id(&name), id);
        }
    }
}
