//! Static pattern tables for résumé field extraction.
//!
//! Every heuristic lives here as an ordered table so matching precedence is
//! explicit and testable in isolation. The keyword alternations match bare
//! substrings (no word boundaries), and the length thresholds are literal:
//! downstream scoring depends on them staying exactly as-is.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Section;

/// A heading line must be shorter than this (in characters) to count as a
/// section boundary. Longer lines are body text even if a keyword matches.
pub(crate) const MAX_HEADING_LEN: usize = 50;

/// Experience lines are kept only when strictly longer than this.
pub(crate) const MIN_EXPERIENCE_LEN: usize = 10;

/// Experience lines are kept only when strictly shorter than this.
pub(crate) const MAX_EXPERIENCE_LEN: usize = 100;

/// Section-heading keyword families, in tie-break order: when a line matches
/// several families, the first entry here wins.
pub(crate) static SECTION_HEADINGS: Lazy<Vec<(Section, Regex)>> = Lazy::new(|| {
    vec![
        (
            Section::Summary,
            Regex::new(r"(?i)(summary|profile|objective|about)").unwrap(),
        ),
        (
            Section::Experience,
            Regex::new(r"(?i)(experience|employment|work history|professional experience)").unwrap(),
        ),
        (
            Section::Education,
            Regex::new(r"(?i)(education|academic|qualifications)").unwrap(),
        ),
        (
            Section::Skills,
            Regex::new(r"(?i)(skills|competencies|technical skills|expertise)").unwrap(),
        ),
        (
            Section::Projects,
            Regex::new(r"(?i)(projects|portfolio)").unwrap(),
        ),
        (
            Section::Certifications,
            Regex::new(r"(?i)(certifications|certificates|licenses)").unwrap(),
        ),
        (
            Section::Achievements,
            Regex::new(r"(?i)(achievements|awards|honors|accomplishments)").unwrap(),
        ),
    ]
});

pub(crate) static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

pub(crate) static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?1?[-.\s]?)?\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})").unwrap()
});

pub(crate) static LINKEDIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)linkedin\.com/in/[\w-]+").unwrap());

/// Degree-keyword families. A line containing any of these substrings is
/// kept as an education line.
pub(crate) static DEGREES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)(bachelor|b\.?s\.?|b\.?a\.?|bs|ba)").unwrap(),
        Regex::new(r"(?i)(master|m\.?s\.?|m\.?a\.?|ms|ma|mba)").unwrap(),
        Regex::new(r"(?i)(phd|ph\.?d\.?|doctorate|doctoral)").unwrap(),
        Regex::new(r"(?i)(associate|a\.?s\.?|as)").unwrap(),
    ]
});

/// Job-title keyword families: role nouns, then seniority/domain adjectives.
pub(crate) static JOB_TITLES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)(engineer|developer|manager|analyst|director|consultant|specialist)")
            .unwrap(),
        Regex::new(r"(?i)(software|senior|junior|lead|principal|staff)").unwrap(),
    ]
});

/// Reference skill vocabulary. Output order of extracted skills follows this
/// list, not the order skills appear in the document.
pub(crate) const SKILL_VOCABULARY: &[&str] = &[
    "Python",
    "Java",
    "JavaScript",
    "C++",
    "C#",
    "SQL",
    "HTML",
    "CSS",
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Django",
    "Flask",
    "Spring",
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "Git",
    "Linux",
    "Machine Learning",
    "Data Science",
    "AI",
    "Deep Learning",
    "Project Management",
    "Agile",
    "Scrum",
    "Leadership",
    "Communication",
];
