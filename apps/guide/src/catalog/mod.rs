//! The career catalog.
//!
//! Holds the loaded set of career profiles for the duration of one session.
//! Read-only after construction; analysis passes never mutate it. The default
//! catalog is the built-in table below; `loader` swaps in a CSV-backed one.

pub mod loader;

use std::collections::BTreeSet;
use std::path::Path;

use tracing::warn;

use crate::analysis::normalizer::tokenize_ordered;
use crate::errors::AppError;
use crate::models::career::CareerProfile;

/// The built-in career table: (name, required skills, description, icon,
/// learning link).
const BUILTIN_CAREERS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Data Scientist",
        "Python, Machine Learning, Statistics, SQL",
        "Analyze complex datasets and build predictive models.",
        "https://cdn-icons-png.flaticon.com/512/4712/4712109.png",
        "https://www.udemy.com/course/data-science/",
    ),
    (
        "Web Developer",
        "HTML, CSS, JavaScript, React, Git",
        "Develop interactive and responsive websites.",
        "https://cdn-icons-png.flaticon.com/512/2721/2721297.png",
        "https://www.udemy.com/course/web-development/",
    ),
    (
        "AI Engineer",
        "Python, Deep Learning, TensorFlow, NLP",
        "Build AI models using deep learning and NLP/Computer Vision.",
        "https://cdn-icons-png.flaticon.com/512/4712/4712035.png",
        "https://www.udemy.com/course/ai-engineer/",
    ),
    (
        "UI/UX Designer",
        "Adobe XD, Figma, UX Research, Graphic Design",
        "Design intuitive UI/UX for apps and websites.",
        "https://cdn-icons-png.flaticon.com/512/4207/4207253.png",
        "https://www.udemy.com/course/ui-ux/",
    ),
    (
        "Machine Learning Engineer",
        "Python, Machine Learning, TensorFlow, Scikit-learn",
        "Develop ML pipelines and optimize models.",
        "https://cdn-icons-png.flaticon.com/512/2103/2103832.png",
        "https://www.udemy.com/course/machine-learning/",
    ),
    (
        "Backend Developer",
        "Python, Java, Node.js, SQL, APIs, Git",
        "Develop and maintain backend systems and APIs.",
        "https://cdn-icons-png.flaticon.com/512/6213/6213731.png",
        "https://www.udemy.com/course/backend-development/",
    ),
    (
        "Frontend Developer",
        "HTML, CSS, JavaScript, React, UI Design",
        "Build frontend interfaces with modern frameworks.",
        "https://cdn-icons-png.flaticon.com/512/1055/1055687.png",
        "https://www.udemy.com/course/frontend-development/",
    ),
    (
        "Business Analyst",
        "Excel, SQL, Power BI, Business Analysis, Communication",
        "Analyze business data and provide actionable insights.",
        "https://cdn-icons-png.flaticon.com/512/2920/2920244.png",
        "https://www.udemy.com/course/business-analysis/",
    ),
    (
        "Software Tester",
        "Manual Testing, Automation Testing, Selenium, Test Cases",
        "Test software manually and with automation tools.",
        "https://cdn-icons-png.flaticon.com/512/3063/3063822.png",
        "https://www.udemy.com/course/software-testing/",
    ),
    (
        "Cloud Engineer",
        "AWS, Azure, Docker, Kubernetes, Cloud Computing",
        "Deploy cloud infrastructure and manage services.",
        "https://cdn-icons-png.flaticon.com/512/2933/2933978.png",
        "https://www.udemy.com/course/cloud-computing/",
    ),
    (
        "Cybersecurity Analyst",
        "Network Security, Firewall, Ethical Hacking, Python, Security Analysis",
        "Protect systems from cyber threats and vulnerabilities.",
        "https://cdn-icons-png.flaticon.com/512/2910/2910760.png",
        "https://www.udemy.com/course/cyber-security/",
    ),
];

/// The loaded set of career profiles. Owned for one session, never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    profiles: Vec<CareerProfile>,
}

impl Catalog {
    /// Wraps a profile list, keeping the first occurrence of any duplicated
    /// career name.
    pub fn new(profiles: Vec<CareerProfile>) -> Self {
        let mut seen = BTreeSet::new();
        let mut unique = Vec::with_capacity(profiles.len());
        for profile in profiles {
            if seen.insert(profile.name.to_lowercase()) {
                unique.push(profile);
            } else {
                warn!(career = %profile.name, "duplicate career name in catalog, keeping first");
            }
        }
        Self { profiles: unique }
    }

    /// The built-in career table.
    pub fn builtin() -> Self {
        let profiles = BUILTIN_CAREERS
            .iter()
            .map(|(name, skills, description, image, learn_link)| CareerProfile {
                name: (*name).to_string(),
                required_skills: tokenize_ordered(skills),
                description: (*description).to_string(),
                image: Some((*image).to_string()),
                learn_link: Some((*learn_link).to_string()),
                salary: None,
            })
            .collect();
        Self::new(profiles)
    }

    /// Loads a CSV-backed catalog.
    pub fn from_csv_path(path: &Path) -> Result<Self, AppError> {
        loader::load_csv(path)
    }

    pub fn profiles(&self) -> &[CareerProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Case-insensitive lookup by career name.
    pub fn get(&self, name: &str) -> Option<&CareerProfile> {
        self.profiles
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Sorted union of skill tokens across all careers. Drives the
    /// multi-select input surface.
    pub fn vocabulary(&self) -> Vec<String> {
        self.profiles
            .iter()
            .flat_map(|p| p.required_skills.iter().cloned())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    }

    /// Careers whose requirement list mentions the query, by substring over
    /// normalized tokens (the quick-search surface).
    pub fn search_by_skill(&self, query: &str) -> Vec<&CareerProfile> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.profiles
            .iter()
            .filter(|p| p.required_skills.iter().any(|s| s.contains(&needle)))
            .collect()
    }
}
