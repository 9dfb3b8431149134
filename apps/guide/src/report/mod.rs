//! Plain-text career report.
//!
//! Carries the informational content of the downloadable report the original
//! interface offered: the user's skills, then the top matches with score,
//! band, description, and the skills still to learn. A presentation layer
//! can reflow this into richer formats.

use std::fmt::Write as _;
use std::path::Path;

use chrono::Local;

use crate::errors::AppError;
use crate::models::matching::RankedMatches;

/// How many careers the report details.
pub const REPORT_TOP_N: usize = 5;

/// Renders the full text report.
pub fn render_report(matches: &RankedMatches) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Career Recommendation Report");
    let _ = writeln!(out, "Generated: {}", Local::now().format("%Y-%m-%d"));
    let _ = writeln!(out);
    let _ = writeln!(out, "Your Skills: {}", join_skills(&matches.user_skills));
    let _ = writeln!(out);

    if matches.is_empty() {
        let _ = writeln!(out, "No careers in the catalog to score.");
        return out;
    }

    for result in matches.top(REPORT_TOP_N) {
        let _ = writeln!(
            out,
            "{} ({:.1}%) - {}",
            result.career.name, result.combined_score, result.band
        );
        let _ = writeln!(out, "  Description: {}", result.career.description);
        if result.missing_skills.is_empty() {
            let _ = writeln!(out, "  Skills to Learn: None! You are ready.");
        } else {
            let _ = writeln!(
                out,
                "  Skills to Learn: {}",
                join_skills(&result.missing_skills)
            );
        }
        if let Some(salary) = &result.career.salary {
            let _ = writeln!(out, "  Estimated Salary: {salary} per annum");
        }
        if let Some(link) = &result.career.learn_link {
            let _ = writeln!(out, "  Learning Resource: {link}");
        }
        let _ = writeln!(out);
    }

    out
}

/// Writes the report to a file.
pub fn write_report(matches: &RankedMatches, path: &Path) -> Result<(), AppError> {
    std::fs::write(path, render_report(matches))?;
    Ok(())
}

fn join_skills(skills: &crate::models::career::SkillSet) -> String {
    skills.iter().cloned().collect::<Vec<_>>().join(", ")
}
