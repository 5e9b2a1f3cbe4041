use std::collections::HashSet;

/// Hard cap on candidate usernames generated per keyword.
pub const MAX_CANDIDATES: usize = 200;

/// Generates plausible LeetCode usernames for a search keyword.
///
/// Deterministic: the same keyword always yields the same ordered list.
/// Output is deduplicated preserving first occurrence and capped at
/// [`MAX_CANDIDATES`] entries.
pub fn generate_candidates(keyword: &str) -> Vec<String> {
    let lower = keyword.to_lowercase().trim().to_string();
    let upper = keyword.to_uppercase().trim().to_string();
    let capitalized = capitalize_first(keyword);

    let mut usernames: Vec<String> = Vec::new();

    // Exact matches
    usernames.push(keyword.to_string());
    usernames.push(lower.clone());
    usernames.push(upper);
    usernames.push(capitalized.clone());

    // Variations without spaces
    if keyword.contains(char::is_whitespace) {
        let no_space: String = keyword.split_whitespace().collect();
        usernames.push(no_space.clone());
        usernames.push(no_space.to_lowercase());
        usernames.push(no_space.to_uppercase());

        let underscore = keyword.split_whitespace().collect::<Vec<_>>().join("_");
        usernames.push(underscore.clone());
        usernames.push(underscore.to_lowercase());

        let dash = keyword.split_whitespace().collect::<Vec<_>>().join("-");
        usernames.push(dash.clone());
        usernames.push(dash.to_lowercase());
    }

    // Number variations (0-100)
    for i in 0..=100 {
        usernames.push(format!("{}{}", lower, i));
        usernames.push(format!("{}{}", capitalized, i));
        if i < 10 {
            usernames.push(format!("{}0{}", lower, i));
        }
    }

    // Year variations (1990-2025)
    for year in 1990..=2025 {
        usernames.push(format!("{}{}", lower, year));
    }

    // Underscore and dash patterns
    let short_prefix: String = lower.chars().take(4).collect();
    usernames.push(format!("{}_{}", lower, lower));
    usernames.push(format!("{}-{}", lower, lower));
    usernames.push(format!("{}_123", lower));
    usernames.push(format!("{}_{}", lower, short_prefix));

    // Common suffixes
    for suffix in [
        "_dev",
        "_code",
        "_coder",
        "_leetcode",
        "_algo",
        "_cp",
        "123",
        "456",
        "789",
    ] {
        usernames.push(format!("{}{}", lower, suffix));
    }

    // First few chars patterns
    if keyword.chars().count() >= 4 {
        let prefix: String = lower.chars().take(4).collect();
        for i in 0..20 {
            usernames.push(format!("{}{}", prefix, i));
        }
    }

    let mut seen = HashSet::new();
    usernames.retain(|u| seen.insert(u.clone()));
    usernames.truncate(MAX_CANDIDATES);
    usernames
}

/// Uppercases the first character and lowercases the rest.
/// Safe on empty input and multi-byte characters.
fn capitalize_first(keyword: &str) -> String {
    let mut chars = keyword.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_casing_seeds() {
        let candidates = generate_candidates("Alice");
        assert!(candidates.contains(&"Alice".to_string()));
        assert!(candidates.contains(&"alice".to_string()));
        assert!(candidates.contains(&"ALICE".to_string()));
    }

    #[test]
    fn whitespace_keyword_gets_join_variants() {
        let candidates = generate_candidates("Jane Doe");
        assert!(candidates.contains(&"JaneDoe".to_string()));
        assert!(candidates.contains(&"janedoe".to_string()));
        assert!(candidates.contains(&"JANEDOE".to_string()));
        assert!(candidates.contains(&"Jane_Doe".to_string()));
        assert!(candidates.contains(&"jane_doe".to_string()));
        assert!(candidates.contains(&"Jane-Doe".to_string()));
        assert!(candidates.contains(&"jane-doe".to_string()));
    }

    #[test]
    fn numeric_and_year_suffixes_present() {
        let candidates = generate_candidates("bob");
        assert!(candidates.contains(&"bob0".to_string()));
        assert!(candidates.contains(&"Bob7".to_string()));
        assert!(candidates.contains(&"bob00".to_string()));
        assert!(candidates.contains(&"bob09".to_string()));
    }

    #[test]
    fn capped_at_max_candidates() {
        let candidates = generate_candidates("somebody");
        assert!(candidates.len() <= MAX_CANDIDATES);
    }

    #[test]
    fn no_duplicates() {
        let candidates = generate_candidates("Jane Doe");
        let unique: HashSet<_> = candidates.iter().collect();
        assert_eq!(unique.len(), candidates.len());
    }

    #[test]
    fn empty_keyword_does_not_panic() {
        let candidates = generate_candidates("");
        assert!(!candidates.is_empty());
        assert!(candidates.len() <= MAX_CANDIDATES);
    }

    #[test]
    fn short_keyword_uses_own_length_for_structural_prefix() {
        let candidates = generate_candidates("ab");
        // No 4-char slice exists for "ab"; the structural pattern falls back
        // to the whole keyword.
        assert!(candidates.contains(&"ab_ab".to_string()));
        assert!(candidates.contains(&"ab-ab".to_string()));
    }

    #[test]
    fn multibyte_keyword_does_not_panic() {
        let candidates = generate_candidates("Ödül Yılmaz");
        assert!(candidates.len() <= MAX_CANDIDATES);
    }
}
