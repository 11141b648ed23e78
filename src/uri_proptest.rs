//! Property-based tests for URI conversion and catalog serialization.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::catalog::Catalog;
    use crate::uri::{decode, encode};
    use proptest::prelude::*;
    use std::path::PathBuf;

    /// Absolute paths made of printable segments, whitespace included.
    fn path_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-zA-Z0-9 \t\n_.,&'<>\"()\\-]{1,12}", 1..5)
            .prop_filter("segments must not be dot-only", |segments| {
                segments.iter().all(|s| s != "." && s != "..")
            })
            .prop_map(|segments| format!("/{}", segments.join("/")))
    }

    proptest! {
        /// Property: decode inverts encode
        #[test]
        fn decode_inverts_encode(path in path_strategy()) {
            let path = PathBuf::from(path);
            prop_assert_eq!(decode(&encode(&path)), path);
        }

        /// Property: encode keeps the path text after the scheme untouched
        #[test]
        fn encode_is_literal(path in path_strategy()) {
            let encoded = encode(PathBuf::from(&path).as_path());
            prop_assert_eq!(encoded, format!("file://{}", path));
        }

        /// Property: text without the scheme passes through decode unchanged
        #[test]
        fn decode_passes_through_without_scheme(text in "[a-z/ ]{0,20}") {
            prop_assert_eq!(decode(&text), PathBuf::from(&text));
        }

        /// Property: a serialized catalog loads back equal
        #[test]
        fn catalog_document_round_trips(paths in prop::collection::vec(path_strategy(), 0..8)) {
            let catalog = Catalog::new(paths);
            let xml = catalog.to_xml_string().unwrap();
            prop_assert_eq!(Catalog::from_xml_str(&xml).unwrap(), catalog);
        }

        /// Property: reversing two or more distinct paths breaks equality
        #[test]
        fn reversal_breaks_equality(
            paths in prop::collection::hash_set(path_strategy(), 2..6)
        ) {
            let forward: Vec<String> = paths.into_iter().collect();
            let backward: Vec<String> = forward.iter().rev().cloned().collect();
            prop_assert_ne!(Catalog::new(forward), Catalog::new(backward));
        }
    }
}
