//! CSV-backed catalog loading.
//!
//! Reads a career dataset with columns `Career`, `Required_Skills`,
//! `Description` and optional `Image`, `Learn_Link` (or `Learning_Link`),
//! `Salary`. The engine never parses files anywhere else; everything past
//! this boundary works on `CareerProfile` records.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::analysis::normalizer::tokenize_ordered;
use crate::catalog::Catalog;
use crate::errors::AppError;
use crate::models::career::CareerProfile;

#[derive(Debug, Deserialize)]
struct CareerRecord {
    #[serde(rename = "Career")]
    career: String,
    #[serde(rename = "Required_Skills")]
    required_skills: String,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(rename = "Image", default)]
    image: Option<String>,
    #[serde(rename = "Learn_Link", alias = "Learning_Link", default)]
    learn_link: Option<String>,
    #[serde(rename = "Salary", default)]
    salary: Option<String>,
}

/// Loads and validates a catalog CSV.
///
/// A row with an empty career name is a dataset error and aborts the load
/// with its row number; a row with an empty requirement list is kept (it
/// scores 0 everywhere, per the scorer contracts).
pub fn load_csv(path: &Path) -> Result<Catalog, AppError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut profiles = Vec::new();

    for (row, record) in reader.deserialize::<CareerRecord>().enumerate() {
        let record = record?;
        let name = record.career.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Catalog(format!(
                "{}: row {} has an empty career name",
                path.display(),
                row + 2 // 1-based, counting the header line
            )));
        }
        profiles.push(CareerProfile {
            name,
            required_skills: tokenize_ordered(&record.required_skills),
            description: record.description.trim().to_string(),
            image: non_empty(record.image),
            learn_link: non_empty(record.learn_link),
            salary: non_empty(record.salary).map(|s| tidy_salary(&s)),
        });
    }

    info!(careers = profiles.len(), path = %path.display(), "loaded career catalog");
    Ok(Catalog::new(profiles))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Normalizes salary figures the way the source dataset expects: en-dash
/// ranges become plain dashes and bare figures gain the dataset's rupee
/// marker.
fn tidy_salary(raw: &str) -> String {
    let normalized = raw.replace('\u{2013}', "-");
    if normalized.starts_with('\u{20b9}') {
        normalized
    } else {
        format!("\u{20b9}{normalized}")
    }
}
