//! Command-line surface: input collection and result rendering.
//!
//! Mirrors the actions of the original interface: analyze a skill set,
//! search careers by skill, and compare two careers. The engine behind it is
//! the `analysis` module; nothing here computes a score.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use dialoguer::{Input, MultiSelect};
use tracing::info;

use crate::analysis::ranking::ScoringWeights;
use crate::analysis::{analyze_skills, normalizer, AnalysisOptions};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::errors::AppError;
use crate::models::career::SkillSet;
use crate::models::matching::RankedMatches;
use crate::report;

#[derive(Parser)]
#[command(name = "career-guide")]
#[command(about = "Career recommendation with skill gap analysis", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Career catalog CSV (defaults to CAREER_CATALOG, then the built-in table)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score every career against your skills and show ranked matches
    Analyze {
        /// Comma-separated skills; prompts interactively when omitted
        #[arg(short, long)]
        skills: Option<String>,

        /// Pick skills from the catalog vocabulary instead of typing them
        #[arg(long)]
        pick: bool,

        /// How many top matches to highlight
        #[arg(long, default_value_t = 3)]
        top: usize,

        /// Override the lexical (coverage) weight
        #[arg(long)]
        lexical_weight: Option<f64>,

        /// Override the vector (similarity) weight
        #[arg(long)]
        vector_weight: Option<f64>,

        /// Write the full text report to this path
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Emit the ranked results as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List careers that require a given skill
    Search {
        /// Skill to look for (substring match over requirement tokens)
        skill: String,
    },

    /// Compare the requirement lists of two careers
    Compare {
        first: String,
        second: String,
    },
}

pub fn run(cli: Cli, config: Config) -> Result<()> {
    let catalog = load_catalog(cli.catalog.as_deref().or(config.catalog_path.as_deref()))?;

    match cli.command {
        Commands::Analyze {
            skills,
            pick,
            top,
            lexical_weight,
            vector_weight,
            report,
            json,
        } => {
            let user_skills = collect_skills(&catalog, skills.as_deref(), pick)?;

            let weights = match (lexical_weight, vector_weight) {
                (None, None) => config.weights,
                (lexical, vector) => ScoringWeights::new(
                    lexical.unwrap_or(config.weights.lexical),
                    vector.unwrap_or(config.weights.vector),
                )?,
            };
            let options = AnalysisOptions {
                weights,
                bands: config.bands,
            };

            let ranked = analyze_skills(&catalog, user_skills, &options)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                print!("{}", render_top_matches(&ranked, top));
                print!("{}", render_table(&ranked));
            }

            if let Some(path) = report {
                report::write_report(&ranked, &path)?;
                info!(path = %path.display(), "report written");
            }
        }

        Commands::Search { skill } => {
            let matches = catalog.search_by_skill(&skill);
            if matches.is_empty() {
                println!("No careers require '{skill}'.");
            } else {
                println!("Careers requiring '{skill}':");
                for profile in matches {
                    println!("  {} ({})", profile.name, profile.required_skills.join(", "));
                }
            }
        }

        Commands::Compare { first, second } => {
            print!("{}", render_comparison(&catalog, &first, &second)?);
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&std::path::Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::from_csv_path(path)
            .with_context(|| format!("failed to load catalog from {}", path.display())),
        None => Ok(Catalog::builtin()),
    }
}

/// Collects the user's skills via flag, multi-select, or free-text prompt.
fn collect_skills(catalog: &Catalog, skills: Option<&str>, pick: bool) -> Result<SkillSet> {
    if let Some(raw) = skills {
        return Ok(normalizer::normalize_input(raw));
    }

    if pick {
        let vocabulary = catalog.vocabulary();
        if vocabulary.is_empty() {
            bail!("the catalog has no skills to pick from");
        }
        let selected = MultiSelect::new()
            .with_prompt("Select your skills (space to toggle, enter to confirm)")
            .items(&vocabulary)
            .interact()?;
        let labels: Vec<&String> = selected.into_iter().map(|i| &vocabulary[i]).collect();
        return Ok(normalizer::normalize_labels(&labels));
    }

    let raw: String = Input::new()
        .with_prompt("Enter your skills (comma separated)")
        .allow_empty(true)
        .interact_text()?;
    Ok(normalizer::normalize_input(&raw))
}

fn render_top_matches(ranked: &RankedMatches, top: usize) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    let shown = ranked.top(top);
    if shown.is_empty() {
        let _ = writeln!(out, "No careers in the catalog to score.");
        return out;
    }

    let _ = writeln!(out, "Top {} Matches", shown.len());
    let _ = writeln!(out);
    for (position, result) in shown.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {}  [{}]  {:.1}%",
            position + 1,
            result.career.name,
            result.band,
            result.combined_score
        );
        let _ = writeln!(out, "   {}", result.career.description);
        if result.missing_skills.is_empty() {
            let _ = writeln!(out, "   You are ready!");
        } else {
            let missing: Vec<&str> = result
                .missing_skills
                .iter()
                .map(String::as_str)
                .collect();
            let _ = writeln!(out, "   Skills to learn: {}", missing.join(", "));
            if let Some(link) = &result.career.learn_link {
                let _ = writeln!(out, "   Learn: {link}");
            }
        }
        if let Some(salary) = &result.career.salary {
            let _ = writeln!(out, "   Estimated salary: {salary} per annum");
        }
        let _ = writeln!(out);
    }
    out
}

fn render_table(ranked: &RankedMatches) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    if ranked.is_empty() {
        return out;
    }

    let name_width = ranked
        .results
        .iter()
        .map(|r| r.career.name.len())
        .max()
        .unwrap_or(0)
        .max("Career".len());

    let _ = writeln!(
        out,
        "{:<name_width$}  {:>8}  {:>8}  {:>8}  Band",
        "Career", "Combined", "Lexical", "Vector"
    );
    for result in &ranked.results {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:>7.1}%  {:>7.1}%  {:>7.1}%  {}",
            result.career.name,
            result.combined_score,
            result.lexical_score,
            result.vector_score,
            result.band
        );
    }
    out
}

fn render_comparison(catalog: &Catalog, first: &str, second: &str) -> Result<String, AppError> {
    use std::fmt::Write as _;

    let a = catalog
        .get(first)
        .ok_or_else(|| AppError::UnknownCareer(first.to_string()))?;
    let b = catalog
        .get(second)
        .ok_or_else(|| AppError::UnknownCareer(second.to_string()))?;

    let set_a = a.required_set();
    let set_b = b.required_set();
    let shared: Vec<&str> = set_a.intersection(&set_b).map(String::as_str).collect();
    let only_a: Vec<&str> = set_a.difference(&set_b).map(String::as_str).collect();
    let only_b: Vec<&str> = set_b.difference(&set_a).map(String::as_str).collect();

    let mut out = String::new();
    let _ = writeln!(out, "{}: {}", a.name, a.required_skills.join(", "));
    let _ = writeln!(out, "{}: {}", b.name, b.required_skills.join(", "));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Shared skills: {}",
        if shared.is_empty() { "none".to_string() } else { shared.join(", ") }
    );
    let _ = writeln!(out, "Only {}: {}", a.name, join_or_none(&only_a));
    let _ = writeln!(out, "Only {}: {}", b.name, join_or_none(&only_b));
    Ok(out)
}

fn join_or_none(skills: &[&str]) -> String {
    if skills.is_empty() {
        "none".to_string()
    } else {
        skills.join(", ")
    }
}
