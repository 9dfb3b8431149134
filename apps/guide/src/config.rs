use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::analysis::ranking::{
    BandThresholds, ScoringWeights, DEFAULT_EXCELLENT_THRESHOLD, DEFAULT_GOOD_THRESHOLD,
    DEFAULT_LEXICAL_WEIGHT, DEFAULT_VECTOR_WEIGHT,
};

/// Application configuration loaded from environment variables.
/// Every variable is optional; unset values fall back to the defaults of the
/// reference variant. CLI flags override whatever is resolved here.
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV catalog path; the built-in table is used when unset.
    pub catalog_path: Option<PathBuf>,
    pub weights: ScoringWeights,
    pub bands: BandThresholds,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let lexical = env_f64("LEXICAL_WEIGHT", DEFAULT_LEXICAL_WEIGHT)?;
        let vector = env_f64("VECTOR_WEIGHT", DEFAULT_VECTOR_WEIGHT)?;
        let weights = ScoringWeights::new(lexical, vector)
            .context("LEXICAL_WEIGHT / VECTOR_WEIGHT are not a valid weight pair")?;

        let bands = BandThresholds {
            excellent: env_f64("EXCELLENT_THRESHOLD", DEFAULT_EXCELLENT_THRESHOLD)?,
            good: env_f64("GOOD_THRESHOLD", DEFAULT_GOOD_THRESHOLD)?,
        };

        Ok(Config {
            catalog_path: std::env::var("CAREER_CATALOG").ok().map(PathBuf::from),
            weights,
            bands,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn env_f64(key: &str, default: f64) -> Result<f64> {
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<f64>()
            .with_context(|| format!("{key} must be a number, got '{value}'")),
        Err(_) => Ok(default),
    }
}
