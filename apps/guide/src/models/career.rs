use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A set of normalized skill tokens (trimmed, lower-cased, no empties).
///
/// `BTreeSet` keeps iteration order stable so gap listings, vocabulary, and
/// report output are deterministic for identical inputs.
pub type SkillSet = BTreeSet<String>;

/// One career in the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerProfile {
    /// Unique within the catalog.
    pub name: String,
    /// Normalized skill tokens in catalog order, duplicates collapsed.
    pub required_skills: Vec<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learn_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
}

impl CareerProfile {
    /// The requirement list as a set, for overlap and gap computations.
    pub fn required_set(&self) -> SkillSet {
        self.required_skills.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_set_collapses_to_set() {
        let profile = CareerProfile {
            name: "Data Scientist".to_string(),
            required_skills: vec![
                "python".to_string(),
                "machine learning".to_string(),
                "statistics".to_string(),
                "sql".to_string(),
            ],
            description: "Analyze data and build predictive ML models.".to_string(),
            image: None,
            learn_link: None,
            salary: None,
        };
        let set = profile.required_set();
        assert_eq!(set.len(), 4);
        assert!(set.contains("machine learning"));
    }

    #[test]
    fn test_profile_serde_round_trip_skips_empty_metadata() {
        let profile = CareerProfile {
            name: "Web Developer".to_string(),
            required_skills: vec!["html".to_string(), "css".to_string()],
            description: "Develop responsive websites.".to_string(),
            image: None,
            learn_link: Some("https://example.com/webdev".to_string()),
            salary: None,
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("salary"));
        assert!(json.contains("learn_link"));
        let back: CareerProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
