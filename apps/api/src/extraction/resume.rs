//! Resume profile assembly and completeness validation.

use serde::Serialize;
use tracing::debug;

use crate::extraction::contact::extract_contact_info;
use crate::extraction::sections::{has_heading, segment, SectionKind, SECTION_KINDS};
use crate::extraction::{ExtractionError, ExtractionWarning};
use crate::models::resume::{ResumeProfile, UNKNOWN_CANDIDATE_NAME};

/// Minimum trimmed length, in characters, of an acceptable resume.
pub const MIN_RESUME_CHARS: usize = 50;
/// Below this the profile is flagged as probably truncated.
pub const SHORT_RESUME_CHARS: usize = 100;

const NAME_SCAN_LINES: usize = 5;
const MAX_NAME_WORDS: usize = 4;

/// Builds a profile from plain resume text. Too-short input is the only error.
pub fn parse_resume(text: &str) -> Result<ResumeProfile, ExtractionError> {
    let trimmed_length = text.trim().chars().count();
    if trimmed_length < MIN_RESUME_CHARS {
        return Err(ExtractionError::TextTooShort {
            length: trimmed_length,
        });
    }

    let profile = ResumeProfile {
        name: extract_name(text),
        contact_info: extract_contact_info(text),
        experience: segment(text, SectionKind::Experience),
        skills: segment(text, SectionKind::Skills),
        education: segment(text, SectionKind::Education),
        raw_text: text.to_string(),
        text_length: text.chars().count(),
    };

    debug!(
        "Parsed resume: {} experience, {} skills, {} education entries",
        profile.experience.len(),
        profile.skills.len(),
        profile.education.len()
    );

    Ok(profile)
}

/// The first of the first five non-empty lines that looks like a name: at
/// most four words, longer than two characters, no `@`, digits, parentheses,
/// `+` or `-`. Never fails.
pub fn extract_name(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(NAME_SCAN_LINES)
        .find(|line| is_name_like(line))
        .map(String::from)
        .unwrap_or_else(|| UNKNOWN_CANDIDATE_NAME.to_string())
}

fn is_name_like(line: &str) -> bool {
    line.split_whitespace().count() <= MAX_NAME_WORDS
        && line.chars().count() > 2
        && !line
            .chars()
            .any(|c| c.is_ascii_digit() || matches!(c, '@' | '(' | ')' | '+' | '-'))
}

/// Advisory completeness check. `is_valid == false` never blocks the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeValidation {
    pub is_valid: bool,
    pub warnings: Vec<ExtractionWarning>,
}

pub fn validate_resume(profile: &ResumeProfile) -> ResumeValidation {
    let mut warnings = Vec::new();
    let mut is_valid = true;

    if !profile.has_known_name() {
        warnings.push(ExtractionWarning::MissingName);
    }
    if profile.contact_info.email.is_none() {
        warnings.push(ExtractionWarning::MissingEmail);
    }
    if profile.experience.is_empty() {
        warnings.push(ExtractionWarning::MissingExperience);
        is_valid = false;
    }
    if profile.skills.is_empty() {
        warnings.push(ExtractionWarning::MissingSkills);
    }
    if profile.text_length < SHORT_RESUME_CHARS {
        warnings.push(ExtractionWarning::ShortText);
        is_valid = false;
    }

    warnings.extend(
        SECTION_KINDS
            .into_iter()
            .filter(|kind| !has_heading(&profile.raw_text, *kind))
            .map(ExtractionWarning::MissingSection),
    );

    ResumeValidation { is_valid, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "John Smith\njohn@x.com\nExperience\nSenior Engineer at Foo Inc 2019-2023\nSkills\nPython, Go\nEducation\nBS Computer Science";

    #[test]
    fn test_scenario_resume() {
        let profile = parse_resume(RESUME).unwrap();
        assert_eq!(profile.name, "John Smith");
        assert_eq!(profile.contact_info.email.as_deref(), Some("john@x.com"));
        assert_eq!(profile.experience.len(), 1);
        assert!(profile.experience[0].contains("Foo Inc"));
        assert_eq!(profile.skills, vec!["Python", "Go"]);
        assert!(profile.education.iter().any(|e| e == "BS Computer Science"));
        assert_eq!(profile.text_length, RESUME.chars().count());

        let validation = validate_resume(&profile);
        assert!(validation.is_valid);
        assert!(validation.warnings.is_empty(), "{:?}", validation.warnings);
    }

    #[test]
    fn test_too_short_is_an_error() {
        let err = parse_resume("  Jane Doe, engineer  ").unwrap_err();
        assert!(matches!(err, ExtractionError::TextTooShort { length: 18 }));
        assert!(parse_resume("").is_err());
    }

    #[test]
    fn test_length_boundary() {
        let padded_short = format!("  {}  ", "a".repeat(MIN_RESUME_CHARS - 1));
        assert!(parse_resume(&padded_short).is_err());
        assert!(parse_resume(&"a".repeat(MIN_RESUME_CHARS)).is_ok());
    }

    #[test]
    fn test_text_length_counts_raw_characters() {
        let text = format!("Zoë Müller\n{}", "é".repeat(60));
        let profile = parse_resume(&text).unwrap();
        assert_eq!(profile.text_length, text.chars().count());
        assert_eq!(profile.raw_text, text);
    }

    #[test]
    fn test_extract_name_skips_contact_lines() {
        let text = "\n\njohn@x.com\n555-1234\nJane Q Public\nEngineer";
        assert_eq!(extract_name(text), "Jane Q Public");
    }

    #[test]
    fn test_extract_name_defaults() {
        assert_eq!(extract_name(""), "Candidate Name");
        assert_eq!(extract_name("a@b.co\n(555) 1\n+44\nMary-Jane Watson\nOK"), "Candidate Name");
        assert_eq!(
            extract_name("one two three four five\nx@y.z\n1\n2\n3\nLate Name"),
            "Candidate Name"
        );
    }

    #[test]
    fn test_validation_warnings_for_sparse_resume() {
        let text = "Jane Doe\nSummary: Enthusiastic builder of tools and teams who likes Rust a lot.";
        let profile = parse_resume(text).unwrap();
        let validation = validate_resume(&profile);
        assert!(!validation.is_valid);
        assert_eq!(
            validation.warnings,
            vec![
                ExtractionWarning::MissingEmail,
                ExtractionWarning::MissingExperience,
                ExtractionWarning::MissingSkills,
                ExtractionWarning::ShortText,
                ExtractionWarning::MissingSection(SectionKind::Experience),
                ExtractionWarning::MissingSection(SectionKind::Skills),
                ExtractionWarning::MissingSection(SectionKind::Education),
            ]
        );
    }

    #[test]
    fn test_missing_name_and_skills_are_soft() {
        let text = "jane@example.com\n+1 555 123 4567\nlinkedin.com/in/jane-doe\n2024-01-01\n(remote)\n\
                    Experience\nACME CORP 2018-2022\nBuilt and operated the billing platform for three \
                    regions and a dozen product teams";
        let profile = parse_resume(text).unwrap();
        assert_eq!(profile.name, "Candidate Name");
        let validation = validate_resume(&profile);
        assert!(validation.is_valid);
        assert!(validation.warnings.contains(&ExtractionWarning::MissingName));
        assert!(validation.warnings.contains(&ExtractionWarning::MissingSkills));
    }
}
