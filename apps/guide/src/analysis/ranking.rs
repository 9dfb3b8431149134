//! Hybrid scoring and ranking.
//!
//! Blends the lexical coverage score with the vector similarity score using
//! configurable weights, assigns fit bands, and sorts careers descending.
//! Every historical variant of this system is a configuration of this one
//! module rather than a separate code path.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::matching::FitBand;

/// Default influence of exact requirement coverage.
pub const DEFAULT_LEXICAL_WEIGHT: f64 = 0.7;
/// Default influence of distinctiveness-weighted similarity.
pub const DEFAULT_VECTOR_WEIGHT: f64 = 0.3;

/// Combined score at or above this is an Excellent Fit. A sibling variant
/// shipped with 85; that split stays a configuration choice.
pub const DEFAULT_EXCELLENT_THRESHOLD: f64 = 80.0;
/// Combined score at or above this (but below excellent) is a Good Fit. The
/// sibling variant used 70.
pub const DEFAULT_GOOD_THRESHOLD: f64 = 60.0;

/// Relative influence of the two scorers. Always stored normalized to sum 1.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub lexical: f64,
    pub vector: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            lexical: DEFAULT_LEXICAL_WEIGHT,
            vector: DEFAULT_VECTOR_WEIGHT,
        }
    }
}

impl ScoringWeights {
    /// Validates and normalizes a weight pair. Both must be non-negative and
    /// their sum positive; non-unit sums are scaled to 1.
    pub fn new(lexical: f64, vector: f64) -> Result<Self, AppError> {
        if !lexical.is_finite() || !vector.is_finite() || lexical < 0.0 || vector < 0.0 {
            return Err(AppError::InvalidWeights(format!(
                "weights must be non-negative, got lexical={lexical} vector={vector}"
            )));
        }
        let sum = lexical + vector;
        if sum <= 0.0 {
            return Err(AppError::InvalidWeights(
                "weights must sum to a positive value".to_string(),
            ));
        }
        Ok(Self {
            lexical: lexical / sum,
            vector: vector / sum,
        })
    }
}

/// Band cut points over the combined score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BandThresholds {
    pub excellent: f64,
    pub good: f64,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            excellent: DEFAULT_EXCELLENT_THRESHOLD,
            good: DEFAULT_GOOD_THRESHOLD,
        }
    }
}

impl BandThresholds {
    pub fn band(&self, combined_score: f64) -> FitBand {
        if combined_score >= self.excellent {
            FitBand::ExcellentFit
        } else if combined_score >= self.good {
            FitBand::GoodFit
        } else {
            FitBand::NeedsImprovement
        }
    }
}

/// Weighted blend of the two scores, clamped to [0, 100].
pub fn combine(lexical: f64, vector: f64, weights: &ScoringWeights) -> f64 {
    (weights.lexical * lexical + weights.vector * vector).clamp(0.0, 100.0)
}

/// Sorts index-score pairs descending by score, stable so that equal scores
/// keep catalog insertion order.
pub fn rank_descending<T>(results: &mut Vec<T>, score: impl Fn(&T) -> f64) {
    results.sort_by(|a, b| {
        score(b)
            .partial_cmp(&score(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
