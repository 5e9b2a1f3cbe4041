/// Property-based tests using proptest
/// Tests invariants of the candidate username generator.
use leetcode_user_api::candidates::{generate_candidates, MAX_CANDIDATES};
use leetcode_user_api::models::profile_id;
use proptest::prelude::*;
use std::collections::HashSet;

// Property: generation should never panic, whatever the keyword
proptest! {
    #[test]
    fn generation_never_panics(keyword in "\\PC*") {
        let _ = generate_candidates(&keyword);
    }

    #[test]
    fn candidate_count_is_bounded(keyword in "\\PC{0,20}") {
        let candidates = generate_candidates(&keyword);
        prop_assert!(candidates.len() <= MAX_CANDIDATES);
    }

    #[test]
    fn candidates_are_unique(keyword in "[a-zA-Z ]{0,12}") {
        let candidates = generate_candidates(&keyword);
        let unique: HashSet<&String> = candidates.iter().collect();
        prop_assert_eq!(unique.len(), candidates.len());
    }

    #[test]
    fn generation_is_deterministic(keyword in "\\PC{0,16}") {
        let first = generate_candidates(&keyword);
        let second = generate_candidates(&keyword);
        prop_assert_eq!(first, second);
    }
}

// Property: keywords containing whitespace always produce joined variants
proptest! {
    #[test]
    fn whitespace_keywords_produce_join_variants(
        first in "[a-z]{1,6}",
        second in "[a-z]{1,6}"
    ) {
        let keyword = format!("{} {}", first, second);
        let candidates = generate_candidates(&keyword);

        let joined = format!("{}{}", first, second);
        let underscored = format!("{}_{}", first, second);
        let dashed = format!("{}-{}", first, second);

        prop_assert!(candidates.contains(&joined), "missing {}", joined);
        prop_assert!(candidates.contains(&underscored), "missing {}", underscored);
        prop_assert!(candidates.contains(&dashed), "missing {}", dashed);
    }

    #[test]
    fn exact_keyword_is_always_first(keyword in "[a-zA-Z][a-zA-Z ]{0,10}") {
        let candidates = generate_candidates(&keyword);
        prop_assert_eq!(candidates.first().map(String::as_str), Some(keyword.as_str()));
    }
}

// Property: derived profile ids are stable hexadecimal strings
proptest! {
    #[test]
    fn profile_ids_are_stable_hex(username in "\\PC{0,24}") {
        let id = profile_id(&username);
        prop_assert_eq!(id.clone(), profile_id(&username));
        prop_assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        prop_assert!(!id.is_empty());
    }
}
