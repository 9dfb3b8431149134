//! TF-IDF vector scorer.
//!
//! Builds a term-weighted vector space over the catalog and scores the user's
//! skills by cosine similarity against each career. Each document is one
//! career's requirement list treated as a bag of skill tokens; the vocabulary
//! is the union of tokens across all careers. Rare skills weigh more than
//! skills every career asks for, which complements the raw-coverage view of
//! the lexical scorer.

use std::collections::HashMap;

use tracing::debug;

use crate::models::career::{CareerProfile, SkillSet};

/// A fitted vector space over one catalog.
///
/// Fit once per analysis pass; the catalog never mutates underneath it.
pub struct TfidfSpace {
    /// Sorted union of skill tokens across all careers.
    vocabulary: Vec<String>,
    /// Token to vocabulary column.
    index: HashMap<String, usize>,
    /// Smoothed inverse document frequency per vocabulary column.
    idf: Vec<f64>,
    /// One L2-normalized vector per career, in catalog order.
    doc_vectors: Vec<Vec<f64>>,
}

impl TfidfSpace {
    /// Builds the vocabulary, IDF weights, and per-career vectors.
    pub fn fit(profiles: &[CareerProfile]) -> Self {
        let doc_sets: Vec<SkillSet> = profiles.iter().map(CareerProfile::required_set).collect();

        let vocabulary: Vec<String> = doc_sets
            .iter()
            .flatten()
            .cloned()
            .collect::<SkillSet>()
            .into_iter()
            .collect();
        let index: HashMap<String, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(column, token)| (token.clone(), column))
            .collect();

        // Smoothed IDF: ln((1 + n) / (1 + df)) + 1. Never zero or negative,
        // so every vocabulary token keeps some weight.
        let doc_count = doc_sets.len();
        let idf: Vec<f64> = vocabulary
            .iter()
            .map(|token| {
                let df = doc_sets.iter().filter(|set| set.contains(token)).count();
                (((1 + doc_count) as f64) / ((1 + df) as f64)).ln() + 1.0
            })
            .collect();

        let doc_vectors: Vec<Vec<f64>> = doc_sets
            .iter()
            .map(|set| {
                let mut vector = vec![0.0; vocabulary.len()];
                // Requirement lists are deduplicated sets, so term frequency
                // is 0 or 1 and the vector is the IDF profile of the career.
                for token in set {
                    if let Some(&column) = index.get(token) {
                        vector[column] = idf[column];
                    }
                }
                l2_normalize(&mut vector);
                vector
            })
            .collect();

        debug!(
            careers = doc_count,
            vocabulary = vocabulary.len(),
            "fitted tf-idf space"
        );

        Self {
            vocabulary,
            index,
            idf,
            doc_vectors,
        }
    }

    /// Cosine similarity of the user's skills against every career, scaled to
    /// [0, 100], in catalog order.
    ///
    /// User tokens outside the catalog vocabulary are ignored. With fewer
    /// than two careers the IDF weighting degenerates; per contract this
    /// returns 0 for every entry rather than failing.
    pub fn score_user(&self, user: &SkillSet) -> Vec<f64> {
        if self.doc_vectors.len() < 2 {
            return vec![0.0; self.doc_vectors.len()];
        }

        let mut user_vector = vec![0.0; self.vocabulary.len()];
        let mut in_vocabulary = 0usize;
        for token in user {
            if let Some(&column) = self.index.get(token) {
                user_vector[column] = self.idf[column];
                in_vocabulary += 1;
            }
        }
        if in_vocabulary == 0 {
            // No overlap with the vocabulary at all: every similarity is 0.
            return vec![0.0; self.doc_vectors.len()];
        }
        l2_normalize(&mut user_vector);

        self.doc_vectors
            .iter()
            .map(|doc| (dot(&user_vector, doc) * 100.0).clamp(0.0, 100.0))
            .collect()
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn l2_normalize(vector: &mut [f64]) {
    let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        for v in vector.iter_mut() {
            *v /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalizer::{normalize_input, tokenize_ordered};

    fn make_profile(name: &str, skills: &str) -> CareerProfile {
        CareerProfile {
            name: name.to_string(),
            required_skills: tokenize_ordered(skills),
            description: String::new(),
            image: None,
            learn_link: None,
            salary: None,
        }
    }

    fn two_career_catalog() -> Vec<CareerProfile> {
        vec![
            make_profile("Data Scientist", "Python, Machine Learning, Statistics, SQL"),
            make_profile("Web Developer", "HTML, CSS, JavaScript, React, Git"),
        ]
    }

    #[test]
    fn test_vocabulary_is_sorted_union() {
        let space = TfidfSpace::fit(&two_career_catalog());
        assert_eq!(space.vocabulary().len(), 9);
        let mut sorted = space.vocabulary().to_vec();
        sorted.sort();
        assert_eq!(space.vocabulary(), sorted.as_slice());
    }

    #[test]
    fn test_scores_bounded_0_to_100() {
        let space = TfidfSpace::fit(&two_career_catalog());
        let scores = space.score_user(&normalize_input("Python, SQL, HTML"));
        for score in scores {
            assert!((0.0..=100.0).contains(&score), "score was {score}");
        }
    }

    #[test]
    fn test_identical_skill_set_scores_career_highest() {
        let space = TfidfSpace::fit(&two_career_catalog());
        let scores = space.score_user(&normalize_input("Python, Machine Learning, Statistics, SQL"));
        assert!((scores[0] - 100.0).abs() < 1e-9, "exact match was {}", scores[0]);
        assert!(scores[0] > scores[1]);
        assert_eq!(scores[1], 0.0);
    }

    #[test]
    fn test_more_overlap_never_scores_lower() {
        let space = TfidfSpace::fit(&two_career_catalog());
        let less = space.score_user(&normalize_input("Python, SQL"));
        let more = space.score_user(&normalize_input("Python, SQL, Statistics"));
        assert!(more[0] >= less[0]);
    }

    #[test]
    fn test_no_vocabulary_overlap_scores_all_zero() {
        let space = TfidfSpace::fit(&two_career_catalog());
        let scores = space.score_user(&normalize_input("Cooking, Carpentry"));
        assert_eq!(scores, vec![0.0, 0.0]);
    }

    #[test]
    fn test_single_career_catalog_degenerates_to_zero() {
        let catalog = vec![make_profile("Data Scientist", "Python, SQL")];
        let space = TfidfSpace::fit(&catalog);
        let scores = space.score_user(&normalize_input("Python, SQL"));
        assert_eq!(scores, vec![0.0]);
    }

    #[test]
    fn test_empty_catalog_yields_no_scores() {
        let space = TfidfSpace::fit(&[]);
        assert!(space.score_user(&normalize_input("Python")).is_empty());
    }

    #[test]
    fn test_career_with_empty_requirements_scores_zero() {
        let mut catalog = two_career_catalog();
        catalog.push(make_profile("Mystery Role", ""));
        let space = TfidfSpace::fit(&catalog);
        let scores = space.score_user(&normalize_input("Python, SQL"));
        assert_eq!(scores[2], 0.0);
    }

    #[test]
    fn test_distinctive_skills_weigh_more_than_common_ones() {
        // "python" appears in all three careers, "statistics" only in one.
        let catalog = vec![
            make_profile("Data Scientist", "Python, Statistics"),
            make_profile("Backend Developer", "Python, APIs"),
            make_profile("AI Engineer", "Python, NLP"),
        ];
        let space = TfidfSpace::fit(&catalog);
        let common_only = space.score_user(&normalize_input("Python"));
        let distinctive = space.score_user(&normalize_input("Statistics"));
        // The rare skill separates Data Scientist from the rest more sharply
        // than the shared one does.
        assert!(distinctive[0] > common_only[0]);
        assert_eq!(distinctive[1], 0.0);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let space = TfidfSpace::fit(&two_career_catalog());
        let user = normalize_input("Python, SQL, HTML");
        assert_eq!(space.score_user(&user), space.score_user(&user));
    }
}
