//! Heuristic field extraction over raw résumé text.
//!
//! All functions here are pure: same text in, same fields out. They run on
//! whatever text they are given, including empty input.

use std::collections::BTreeMap;

use super::patterns::{
    DEGREES, EMAIL, JOB_TITLES, LINKEDIN, MAX_EXPERIENCE_LEN, MAX_HEADING_LEN, MIN_EXPERIENCE_LEN,
    PHONE, SECTION_HEADINGS, SKILL_VOCABULARY,
};
use super::{ContactInfo, Section};

/// Segments text into named sections by scanning for heading lines.
///
/// A heading is a non-blank line under [`MAX_HEADING_LEN`] characters that
/// matches a section keyword family; ties go to the first family in table
/// order. Body lines accumulate under the open section; lines before the
/// first heading are dropped, and a section whose body stayed empty is not
/// stored. A repeated heading overwrites the earlier body.
pub(crate) fn extract_sections(text: &str) -> BTreeMap<Section, String> {
    let mut sections = BTreeMap::new();
    let mut current: Option<Section> = None;
    let mut body: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(section) = match_heading(line) {
            flush(&mut sections, current, &mut body);
            current = Some(section);
        } else if current.is_some() {
            body.push(line);
        }
    }
    flush(&mut sections, current, &mut body);

    sections
}

fn match_heading(line: &str) -> Option<Section> {
    if line.chars().count() >= MAX_HEADING_LEN {
        return None;
    }
    SECTION_HEADINGS
        .iter()
        .find(|(_, pattern)| pattern.is_match(line))
        .map(|(section, _)| *section)
}

fn flush(sections: &mut BTreeMap<Section, String>, current: Option<Section>, body: &mut Vec<&str>) {
    if let Some(section) = current {
        if !body.is_empty() {
            sections.insert(section, body.join("\n"));
        }
    }
    body.clear();
}

/// First email, phone and LinkedIn handle in the text, scanning the whole
/// raw text once per field. Absent matches stay `None`.
pub(crate) fn extract_contact_info(text: &str) -> ContactInfo {
    ContactInfo {
        email: EMAIL.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE.find(text).map(|m| m.as_str().to_string()),
        linkedin: LINKEDIN.find(text).map(|m| m.as_str().to_string()),
    }
}

/// Skills from the reference vocabulary found anywhere in the text,
/// case-insensitively. Output follows vocabulary order, one entry each.
pub(crate) fn extract_skills(text: &str) -> Vec<String> {
    let haystack = text.to_uppercase();
    SKILL_VOCABULARY
        .iter()
        .filter(|skill| haystack.contains(&skill.to_uppercase()))
        .map(|skill| skill.to_string())
        .collect()
}

/// Lines matching any degree-keyword family, verbatim, in document order.
/// No deduplication, no length filter.
pub(crate) fn extract_education(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| DEGREES.iter().any(|pattern| pattern.is_match(line)))
        .map(|line| line.trim().to_string())
        .collect()
}

/// Lines in the 10..100 character band (exclusive at both ends) matching a
/// job-title keyword family, verbatim, in document order. No deduplication.
pub(crate) fn extract_experience(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let line = line.trim();
            let len = line.chars().count();
            let in_band = len > MIN_EXPERIENCE_LEN && len < MAX_EXPERIENCE_LEN;
            (in_band && JOB_TITLES.iter().any(|pattern| pattern.is_match(line)))
                .then(|| line.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_boundaries_split_on_headings() {
        let sections = extract_sections("Skills\nPython, SQL\nEducation\nBS Computer Science");
        assert_eq!(sections.get(&Section::Skills).map(String::as_str), Some("Python, SQL"));
        assert_eq!(
            sections.get(&Section::Education).map(String::as_str),
            Some("BS Computer Science")
        );
    }

    #[test]
    fn test_long_line_with_keyword_is_not_a_heading() {
        let text = "Experience\nmy professional experience has taught me that shipping early beats shipping perfect\nand shipping beats perfection";
        let sections = extract_sections(text);
        let body = sections.get(&Section::Experience).unwrap();
        assert!(body.contains("taught me"));
        assert!(body.contains("beats perfection"));
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn test_lines_before_first_heading_are_dropped() {
        let sections = extract_sections("Jane Doe\n555-123-4567\nSkills\nPython");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections.get(&Section::Skills).map(String::as_str), Some("Python"));
    }

    #[test]
    fn test_heading_tie_break_prefers_first_family() {
        // "Education and Work Experience" matches both the experience and
        // education families; table order puts experience first, so the line
        // opens an experience section.
        let sections = extract_sections("Education and Work Experience\nSenior roles since 2015");
        assert!(sections.contains_key(&Section::Experience));
        assert!(!sections.contains_key(&Section::Education));
    }

    #[test]
    fn test_heading_with_empty_body_is_not_stored() {
        let sections = extract_sections("Skills\nEducation\nBS Computer Science");
        assert!(!sections.contains_key(&Section::Skills));
        assert_eq!(
            sections.get(&Section::Education).map(String::as_str),
            Some("BS Computer Science")
        );
    }

    #[test]
    fn test_repeated_heading_overwrites_earlier_body() {
        let sections = extract_sections("Skills\nPython\nSkills\nRust");
        assert_eq!(sections.get(&Section::Skills).map(String::as_str), Some("Rust"));
    }

    #[test]
    fn test_blank_lines_are_skipped_inside_sections() {
        let sections = extract_sections("Summary\nFirst line.\n\n\nSecond line.");
        assert_eq!(
            sections.get(&Section::Summary).map(String::as_str),
            Some("First line.\nSecond line.")
        );
    }

    #[test]
    fn test_contact_info_takes_first_match_only() {
        let text = "Reach me at first@example.com or second@example.com\n(555) 123-4567 and (555) 999-0000";
        let contact = extract_contact_info(text);
        assert_eq!(contact.email.as_deref(), Some("first@example.com"));
        assert_eq!(contact.phone.as_deref(), Some("(555) 123-4567"));
        assert_eq!(contact.linkedin, None);
    }

    #[test]
    fn test_contact_info_absent_fields_are_none() {
        let contact = extract_contact_info("no contact details in this text");
        assert_eq!(contact, ContactInfo::default());
    }

    #[test]
    fn test_linkedin_handle_is_extracted() {
        let contact = extract_contact_info("see https://LinkedIn.com/in/jane-doe for more");
        assert_eq!(contact.linkedin.as_deref(), Some("LinkedIn.com/in/jane-doe"));
    }

    #[test]
    fn test_skills_follow_vocabulary_order_not_text_order() {
        let skills = extract_skills("I used AWS heavily and then picked up Python later.");
        assert_eq!(skills, vec!["Python".to_string(), "AWS".to_string()]);
    }

    #[test]
    fn test_skills_are_matched_case_insensitively_and_deduped() {
        let skills = extract_skills("python, PYTHON, and more python; also docker.");
        assert_eq!(skills, vec!["Python".to_string(), "Docker".to_string()]);
    }

    #[test]
    fn test_education_lines_kept_verbatim_without_dedup() {
        let text = "Bachelor of Science, 2015\nSomething unrelated\nBachelor of Science, 2015";
        let education = extract_education(text);
        assert_eq!(
            education,
            vec![
                "Bachelor of Science, 2015".to_string(),
                "Bachelor of Science, 2015".to_string()
            ]
        );
    }

    #[test]
    fn test_education_matches_are_substring_loose() {
        // The abbreviation alternates match bare substrings, so "as" inside
        // an ordinary word satisfies the associate family.
        let education = extract_education("was promoted twice");
        assert_eq!(education, vec!["was promoted twice".to_string()]);
    }

    #[test]
    fn test_experience_length_band_is_exclusive() {
        let nine = "engineer!";
        assert_eq!(nine.chars().count(), 9);
        let hundred = format!("Senior Software Engineer {}", "x".repeat(75));
        assert_eq!(hundred.chars().count(), 100);
        let fifty = "Senior Software Engineer, Platform Infrastructure";
        assert_eq!(fifty.chars().count(), 49);

        let text = format!("{nine}\n{hundred}\n{fifty}");
        let experience = extract_experience(&text);
        assert_eq!(experience, vec![fifty.to_string()]);
    }

    #[test]
    fn test_experience_requires_a_job_keyword() {
        let experience = extract_experience("organized the village bake sale in 2019");
        assert!(experience.is_empty());
    }

    #[test]
    fn test_experience_matches_seniority_family_too() {
        let experience = extract_experience("Senior member of the platform group");
        assert_eq!(experience, vec!["Senior member of the platform group".to_string()]);
    }

    #[test]
    fn test_experience_lines_are_trimmed_before_length_check() {
        let padded = format!("   {}   ", "x".repeat(98));
        // 98 trimmed characters sits inside the band but has no job keyword;
        // the same padding around a keyword line is kept trimmed.
        assert!(extract_experience(&padded).is_empty());

        let experience = extract_experience("   Lead Developer at Initech   ");
        assert_eq!(experience, vec!["Lead Developer at Initech".to_string()]);
    }
}
