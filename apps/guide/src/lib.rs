//! Career Guide: a skill-to-career matching engine.
//!
//! Feed it a catalog of career profiles and a set of self-reported skills;
//! it returns every career scored, banded, and ranked, with the skill gap
//! for each. Scoring blends exact requirement coverage with TF-IDF cosine
//! similarity over the catalog's skill vocabulary.

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod report;

pub use analysis::ranking::{BandThresholds, ScoringWeights};
pub use analysis::{analyze, analyze_skills, AnalysisOptions};
pub use catalog::Catalog;
pub use errors::AppError;
pub use models::career::{CareerProfile, SkillSet};
pub use models::matching::{FitBand, MatchResult, RankedMatches};
