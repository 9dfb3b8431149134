//! Output data models for one analysis run.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::career::{CareerProfile, SkillSet};

/// Qualitative fit label derived by thresholding the combined score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitBand {
    ExcellentFit,
    GoodFit,
    NeedsImprovement,
}

impl FitBand {
    pub fn label(&self) -> &'static str {
        match self {
            FitBand::ExcellentFit => "Excellent Fit",
            FitBand::GoodFit => "Good Fit",
            FitBand::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for FitBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One career scored against the user's skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub career: CareerProfile,
    /// Percentage of the career's required skills covered by the user, 0 to 100.
    pub lexical_score: f64,
    /// TF-IDF cosine similarity against the career's requirement list, 0 to 100.
    pub vector_score: f64,
    /// Weighted blend of the two, 0 to 100. Drives ranking and banding.
    pub combined_score: f64,
    pub band: FitBand,
    /// Required skills the user does not have.
    pub missing_skills: SkillSet,
}

/// All careers scored and sorted descending by combined score.
///
/// Ties preserve catalog insertion order so output is deterministic for
/// identical inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatches {
    pub user_skills: SkillSet,
    pub results: Vec<MatchResult>,
}

impl RankedMatches {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// The best `n` matches, fewer when the catalog is smaller.
    pub fn top(&self, n: usize) -> &[MatchResult] {
        &self.results[..self.results.len().min(n)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result(name: &str, combined: f64) -> MatchResult {
        MatchResult {
            career: CareerProfile {
                name: name.to_string(),
                required_skills: vec![],
                description: String::new(),
                image: None,
                learn_link: None,
                salary: None,
            },
            lexical_score: combined,
            vector_score: combined,
            combined_score: combined,
            band: FitBand::NeedsImprovement,
            missing_skills: SkillSet::new(),
        }
    }

    #[test]
    fn test_band_labels() {
        assert_eq!(FitBand::ExcellentFit.label(), "Excellent Fit");
        assert_eq!(FitBand::GoodFit.label(), "Good Fit");
        assert_eq!(FitBand::NeedsImprovement.label(), "Needs Improvement");
    }

    #[test]
    fn test_band_serde_snake_case() {
        let json = serde_json::to_string(&FitBand::ExcellentFit).unwrap();
        assert_eq!(json, r#""excellent_fit""#);
    }

    #[test]
    fn test_top_caps_at_result_count() {
        let ranked = RankedMatches {
            user_skills: SkillSet::new(),
            results: vec![make_result("A", 80.0), make_result("B", 40.0)],
        };
        assert_eq!(ranked.top(3).len(), 2);
        assert_eq!(ranked.top(1).len(), 1);
        assert_eq!(ranked.top(1)[0].career.name, "A");
    }
}
