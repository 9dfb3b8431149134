//! Lexical coverage scorer.
//!
//! Scores a career by the fraction of its required skills the user already
//! has. Extra user skills that the career does not ask for are ignored, so
//! the score reads as coverage from the career's perspective.

use crate::models::career::SkillSet;

/// `100 * |user ∩ required| / |required|`, or 0 when nothing is required.
///
/// Pure and total: every finite input pair produces a value in [0, 100].
pub fn coverage_score(user: &SkillSet, required: &SkillSet) -> f64 {
    if required.is_empty() {
        return 0.0;
    }
    let matched = required.intersection(user).count();
    100.0 * matched as f64 / required.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalizer::normalize_input;

    #[test]
    fn test_full_coverage_scores_100() {
        let user = normalize_input("python, machine learning, statistics, sql, extra");
        let required = normalize_input("python, machine learning, statistics, sql");
        assert_eq!(coverage_score(&user, &required), 100.0);
    }

    #[test]
    fn test_disjoint_sets_score_0() {
        let user = normalize_input("figma, ux research");
        let required = normalize_input("python, sql");
        assert_eq!(coverage_score(&user, &required), 0.0);
    }

    #[test]
    fn test_empty_required_scores_0() {
        let user = normalize_input("python");
        assert_eq!(coverage_score(&user, &SkillSet::new()), 0.0);
    }

    #[test]
    fn test_partial_coverage() {
        // 2 of 4 required skills covered.
        let user = normalize_input("Python, SQL, HTML");
        let required = normalize_input("python, machine learning, statistics, sql");
        assert!((coverage_score(&user, &required) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_one_of_five() {
        let user = normalize_input("Python, SQL, HTML");
        let required = normalize_input("html, css, javascript, react, git");
        assert!((coverage_score(&user, &required) - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_irrelevant_user_skills_do_not_dilute() {
        let required = normalize_input("python, sql");
        let focused = normalize_input("python, sql");
        let broad = normalize_input("python, sql, html, css, react, git");
        assert_eq!(
            coverage_score(&focused, &required),
            coverage_score(&broad, &required)
        );
    }

    #[test]
    fn test_score_bounded() {
        let user = normalize_input("a, b, c");
        let required = normalize_input("a, b, c, d, e");
        let score = coverage_score(&user, &required);
        assert!((0.0..=100.0).contains(&score));
    }
}
