//! Skill normalization.
//!
//! Every comparison in the engine happens over tokens produced here. The same
//! rules apply to user input and to catalog requirement strings: split on
//! commas, trim, lower-case, drop empties, deduplicate. No stemming, no
//! synonym resolution ("js" and "javascript" stay distinct tokens).

use crate::models::career::SkillSet;

/// Normalizes a raw comma-separated skill string into a `SkillSet`.
pub fn normalize_input(raw: &str) -> SkillSet {
    raw.split(',')
        .filter_map(normalize_token)
        .collect()
}

/// Normalizes a list of pre-selected skill labels (the multi-select path).
pub fn normalize_labels<S: AsRef<str>>(labels: &[S]) -> SkillSet {
    labels
        .iter()
        .filter_map(|label| normalize_token(label.as_ref()))
        .collect()
}

/// Tokenizes a requirement string preserving catalog order, duplicates
/// collapsed. Used when building `CareerProfile` records.
pub fn tokenize_ordered(raw: &str) -> Vec<String> {
    let mut seen = SkillSet::new();
    let mut tokens = Vec::new();
    for token in raw.split(',').filter_map(normalize_token) {
        if seen.insert(token.clone()) {
            tokens.push(token);
        }
    }
    tokens
}

fn normalize_token(raw: &str) -> Option<String> {
    let token = raw.trim().to_lowercase();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_trims_and_lowercases() {
        let skills = normalize_input("  Python , SQL,HTML ");
        assert_eq!(skills.len(), 3);
        assert!(skills.contains("python"));
        assert!(skills.contains("sql"));
        assert!(skills.contains("html"));
    }

    #[test]
    fn test_drops_empty_tokens() {
        let skills = normalize_input("python,, ,sql,");
        assert_eq!(skills.len(), 2);
    }

    #[test]
    fn test_empty_input_yields_empty_set() {
        assert!(normalize_input("").is_empty());
        assert!(normalize_input("  ,  , ").is_empty());
    }

    #[test]
    fn test_deduplicates_case_insensitively() {
        let skills = normalize_input("Python, python, PYTHON");
        assert_eq!(skills.len(), 1);
    }

    #[test]
    fn test_multi_word_skills_stay_whole_tokens() {
        let skills = normalize_input("Machine Learning, Deep Learning");
        assert!(skills.contains("machine learning"));
        assert!(skills.contains("deep learning"));
        assert!(!skills.contains("learning"));
    }

    #[test]
    fn test_no_synonym_resolution() {
        let skills = normalize_input("JS, JavaScript");
        assert_eq!(skills.len(), 2);
    }

    #[test]
    fn test_normalize_labels_matches_input_path() {
        let from_labels = normalize_labels(&["Python", " SQL ", ""]);
        let from_input = normalize_input("Python, SQL,");
        assert_eq!(from_labels, from_input);
    }

    #[test]
    fn test_tokenize_ordered_preserves_catalog_order() {
        let tokens = tokenize_ordered("Python, Machine Learning, Statistics, SQL, python");
        assert_eq!(
            tokens,
            vec!["python", "machine learning", "statistics", "sql"]
        );
    }
}
