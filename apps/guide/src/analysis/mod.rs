//! The skill-matching pipeline.
//!
//! One `analyze` call runs the whole pass: normalize the user's input, score
//! every career lexically and in the TF-IDF space, blend the scores, band and
//! rank, and derive per-career skill gaps. The catalog is read-only; each
//! call produces a fresh, independently owned result set.

pub mod gaps;
pub mod lexical;
pub mod normalizer;
pub mod ranking;
pub mod vector;

use tracing::debug;

use crate::catalog::Catalog;
use crate::errors::AppError;
use crate::models::career::SkillSet;
use crate::models::matching::{MatchResult, RankedMatches};
use self::ranking::{BandThresholds, ScoringWeights};

/// Knobs for one analysis pass. Defaults reproduce the reference variant:
/// 0.7/0.3 hybrid weights, 80/60 band thresholds.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisOptions {
    pub weights: ScoringWeights,
    pub bands: BandThresholds,
}

/// Scores every catalog career against a raw comma-separated skill string.
///
/// Fails with [`AppError::EmptyUserSkills`] when no tokens survive
/// normalization, so callers can prompt for re-entry instead of rendering
/// meaningless scores. An empty catalog is not an error: the result is simply
/// empty.
pub fn analyze(
    catalog: &Catalog,
    raw_input: &str,
    options: &AnalysisOptions,
) -> Result<RankedMatches, AppError> {
    analyze_skills(catalog, normalizer::normalize_input(raw_input), options)
}

/// Same pipeline over an already-collected skill set (the multi-select path).
pub fn analyze_skills(
    catalog: &Catalog,
    user_skills: SkillSet,
    options: &AnalysisOptions,
) -> Result<RankedMatches, AppError> {
    if user_skills.is_empty() {
        return Err(AppError::EmptyUserSkills);
    }

    let profiles = catalog.profiles();
    let space = vector::TfidfSpace::fit(profiles);
    let vector_scores = space.score_user(&user_skills);

    let mut results: Vec<MatchResult> = profiles
        .iter()
        .zip(vector_scores)
        .map(|(profile, vector_score)| {
            let required = profile.required_set();
            let lexical_score = lexical::coverage_score(&user_skills, &required);
            let combined_score = ranking::combine(lexical_score, vector_score, &options.weights);
            MatchResult {
                missing_skills: gaps::missing_skills(&user_skills, &required),
                band: options.bands.band(combined_score),
                career: profile.clone(),
                lexical_score,
                vector_score,
                combined_score,
            }
        })
        .collect();

    ranking::rank_descending(&mut results, |r| r.combined_score);

    debug!(
        careers = results.len(),
        skills = user_skills.len(),
        "analysis pass complete"
    );

    Ok(RankedMatches {
        user_skills,
        results,
    })
}
