//! Résumé parsing: converts a document on disk into a [`ParsedDocument`].
//!
//! [`parse`] is the sole entry point. Text extraction (by file extension) is
//! the only fallible step; the field structuring that follows is a pure
//! function of the extracted text and never fails, even on empty input.
//! Parsing is fully synchronous: one blocking read, then in-memory scanning.

mod extract;
mod fields;
mod patterns;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Text extraction failed for {path}: {source}")]
    ExtractionFailed {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ParseError {
    fn extraction_failed(
        path: &Path,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        ParseError::ExtractionFailed {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}

/// The fixed section vocabulary. Declaration order doubles as the heading
/// tie-break order and, through `Ord`, the map iteration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Achievements,
}

/// Contact fields found in the raw text. Each is the first match in scan
/// order, or `None`; never an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

/// Structured record derived from one résumé document. Immutable after
/// creation; every field is a deterministic function of `raw_text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub raw_text: String,
    pub sections: BTreeMap<Section, String>,
    pub contact_info: ContactInfo,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub experience: Vec<String>,
}

impl ParsedDocument {
    /// Structures already-extracted text. Pure and infallible: empty text
    /// yields a record with all-empty derived fields.
    pub fn from_text(raw_text: String) -> Self {
        let sections = fields::extract_sections(&raw_text);
        let contact_info = fields::extract_contact_info(&raw_text);
        let skills = fields::extract_skills(&raw_text);
        let education = fields::extract_education(&raw_text);
        let experience = fields::extract_experience(&raw_text);
        ParsedDocument {
            raw_text,
            sections,
            contact_info,
            skills,
            education,
            experience,
        }
    }
}

/// Parses the document at `path` into a [`ParsedDocument`].
///
/// Dispatches on the file extension (pdf, docx, txt, md). A readable file
/// that yields no text at all is an extraction failure, never a record with
/// empty `raw_text`.
pub fn parse(path: impl AsRef<Path>) -> Result<ParsedDocument, ParseError> {
    let path = path.as_ref();
    let raw_text = extract::extract_text(path)?;
    if raw_text.is_empty() {
        return Err(ParseError::extraction_failed(
            path,
            "document contains no extractable text",
        ));
    }
    let doc = ParsedDocument::from_text(raw_text);
    debug!(
        path = %path.display(),
        sections = doc.sections.len(),
        skills = doc.skills.len(),
        "resume parsed"
    );
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const RESUME: &str = "\
Jane Doe
jane.doe@example.com | (555) 123-4567 | linkedin.com/in/jane-doe

Summary
Engineering leader focused on developer platforms.

Experience
Senior Software Engineer at Initech (2019-2024)
Built CI pipelines in Python on AWS.

Education
BS Computer Science, State University

Skills
Python, SQL, Docker, Leadership
";

    #[test]
    fn test_parse_txt_returns_populated_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, RESUME).unwrap();

        let doc = parse(&path).unwrap();
        assert_eq!(doc.raw_text, RESUME.trim());
        assert_eq!(doc.contact_info.email.as_deref(), Some("jane.doe@example.com"));
        assert!(doc.sections.contains_key(&Section::Summary));
        assert!(doc.skills.contains(&"Python".to_string()));
        assert!(doc
            .experience
            .iter()
            .any(|l| l.contains("Senior Software Engineer")));
    }

    #[test]
    fn test_parse_missing_file_is_file_not_found() {
        let err = parse("definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, ParseError::FileNotFound(_)));
    }

    #[test]
    fn test_parse_unsupported_extension_names_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.rtf");
        std::fs::write(&path, "not actually parsed").unwrap();

        let err = parse(&path).unwrap_err();
        match err {
            ParseError::UnsupportedFormat(ext) => assert_eq!(ext, ".rtf"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_empty_file_is_extraction_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::File::create(&path).unwrap().flush().unwrap();

        let err = parse(&path).unwrap_err();
        assert!(matches!(err, ParseError::ExtractionFailed { .. }));
    }

    #[test]
    fn test_whitespace_only_file_is_extraction_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.md");
        std::fs::write(&path, "  \n\n \t\n").unwrap();

        let err = parse(&path).unwrap_err();
        assert!(matches!(err, ParseError::ExtractionFailed { .. }));
    }

    #[test]
    fn test_from_text_is_idempotent() {
        let first = ParsedDocument::from_text(RESUME.to_string());
        let second = ParsedDocument::from_text(RESUME.to_string());
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_text_on_empty_input_yields_empty_fields() {
        let doc = ParsedDocument::from_text(String::new());
        assert!(doc.sections.is_empty());
        assert_eq!(doc.contact_info, ContactInfo::default());
        assert!(doc.skills.is_empty());
        assert!(doc.education.is_empty());
        assert!(doc.experience.is_empty());
    }

    #[test]
    fn test_section_serializes_lowercase() {
        let json = serde_json::to_string(&Section::Certifications).unwrap();
        assert_eq!(json, "\"certifications\"");
    }
}
