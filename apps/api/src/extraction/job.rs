//! Job-posting metadata extraction and job-profile assembly.
//!
//! Each heuristic pass (employment type, experience level, location,
//! organization, requirements) is independent and falls back to a sentinel
//! instead of failing. Only missing required input is an error.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::extraction::contact::find_emails;
use crate::extraction::hiring_contact::HiringContactResolver;
use crate::extraction::listing_url::validate_listing_url;
use crate::extraction::normalize::{normalize, truncate_chars};
use crate::extraction::subject::resolve_subject;
use crate::extraction::ExtractionError;
use crate::models::job::{
    EmploymentType, JobContactInfo, JobProfile, MANUAL_ENTRY_SOURCE, NOT_SPECIFIED,
};

pub const COMPANY_NOT_FOUND: &str = "Company Not Found";
pub const DESCRIPTION_NOT_AVAILABLE: &str = "Job description not available";
pub const NO_DESCRIPTION_PROVIDED: &str = "No description provided";

pub const MAX_SCRAPED_DESCRIPTION_CHARS: usize = 2000;
/// Scraped descriptions this short are page chrome, not a description.
const MIN_SCRAPED_DESCRIPTION_CHARS: usize = 50;
const MIN_SCRAPED_TITLE_CHARS: usize = 4;
const MIN_SCRAPED_COMPANY_CHARS: usize = 2;
const MIN_SCRAPED_LOCATION_CHARS: usize = 3;

const MIN_LOCATION_CHARS: usize = 3;
const MAX_LOCATION_CHARS: usize = 50;

/// Placeholder domain stem when no usable company name is known.
const PLACEHOLDER_COMPANY_STEM: &str = "company";

static EMPLOYMENT_PATTERNS: LazyLock<Vec<(EmploymentType, Regex)>> = LazyLock::new(|| {
    [
        (EmploymentType::FullTime, r"(?i)\b(?:full[- ]?time|permanent)\b"),
        (EmploymentType::PartTime, r"(?i)\bpart[- ]?time\b"),
        (
            EmploymentType::Contract,
            r"(?i)\b(?:contract|contractor|freelance|temporary|fixed[- ]term)\b",
        ),
        (
            EmploymentType::Internship,
            r"(?i)\b(?:internship|intern|co-op|apprenticeship)\b",
        ),
    ]
    .into_iter()
    .map(|(kind, pattern)| (kind, Regex::new(pattern).unwrap()))
    .collect()
});

static YEARS_OF_EXPERIENCE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\b(\d{1,2})\s*(?:\+|(?:-|–|to)\s*\d{1,2})?\s*\+?\s*(?:years?|yrs?)\b[^.\n]{0,40}?\bexperience",
        r"(?i)\bexperience\s*(?:of|:)?\s*(\d{1,2})\s*\+?\s*(?:years?|yrs?)\b",
        r"(?i)\b(?:minimum|at\s+least)\s+(?:of\s+)?(\d{1,2})\s*\+?\s*(?:years?|yrs?)\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static LOCATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\bwork\s+from\s+([^\n.;|]+)",
        r"(?i)\blocation\s*:\s*([^\n.;|]+)",
        r"(?i)\boffice\s*:\s*([^\n.;|]+)",
        r"(?i)\bbased\s+in\s+([^\n.;|]+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static ORGANIZATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\b((?:[A-Z][\w&]*[ \t]+){1,4}(?:Team|Department|Division|Inc|Corporation|Corp|Ltd|Company))\b",
        r"(?i:\bjoin)[ \t]+(?:(?i:the|our)[ \t]+)?([A-Z][\w&]*(?:[ \t]+[A-Z][\w&]*){0,3}(?:[ \t]+(?i:team))?)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static NON_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w]").unwrap());

const ORGANIZATION_LEADING_FILLERS: &[&str] = &["join", "the", "our", "your", "this", "a", "an"];
const ORGANIZATION_SUFFIXES: &[&str] = &[
    "team",
    "department",
    "division",
    "inc",
    "corporation",
    "corp",
    "ltd",
    "company",
];

/// How requirement sentences are cut out of a description. Free-typed and
/// scraped descriptions use different rules on purpose.
#[derive(Debug, Clone, Copy)]
pub struct RequirementRules {
    pub separators: &'static [char],
    pub keywords: &'static [&'static str],
    pub min_chars: usize,
    pub max_chars: usize,
    pub max_items: usize,
}

impl RequirementRules {
    /// Pasted descriptions: short bullet-ish lines, hyphen bullets common.
    pub const MANUAL: RequirementRules = RequirementRules {
        separators: &['.', '•', '\n', '-'],
        keywords: &[
            "required",
            "must have",
            "experience",
            "skill",
            "knowledge",
            "years",
            "minimum",
        ],
        min_chars: 10,
        max_chars: 200,
        max_items: 8,
    };

    /// Scraped descriptions: section-labelled, noisier, so longer sentences only.
    pub const SCRAPED: RequirementRules = RequirementRules {
        separators: &['.', '•', '\n'],
        keywords: &[
            "requirements",
            "qualifications",
            "must have",
            "required",
            "experience",
            "skills",
            "education",
            "preferred",
        ],
        min_chars: 20,
        max_chars: 200,
        max_items: 10,
    };
}

/// Fields derived from posting text alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobMetadata {
    pub location: String,
    pub organization: String,
    pub requirements: Vec<String>,
    pub employment_type: EmploymentType,
    pub experience_level: String,
}

/// Metadata for free-typed posting text.
pub fn extract_job_metadata(text: &str, fallback_company: &str) -> JobMetadata {
    extract_job_metadata_with(text, fallback_company, &RequirementRules::MANUAL)
}

pub fn extract_job_metadata_with(
    text: &str,
    fallback_company: &str,
    rules: &RequirementRules,
) -> JobMetadata {
    JobMetadata {
        location: extract_location(text),
        organization: detect_organization(text).unwrap_or_else(|| fallback_company.to_string()),
        requirements: extract_requirements(text, rules),
        employment_type: detect_employment_type(text),
        experience_level: classify_experience_level(text),
    }
}

/// First matching type in the order Full-time, Part-time, Contract,
/// Internship. Present text with no keyword defaults to Full-time.
pub fn detect_employment_type(text: &str) -> EmploymentType {
    if text.trim().is_empty() {
        return EmploymentType::NotSpecified;
    }
    parse_employment_label(text).unwrap_or_default()
}

/// Reads an employment-type label such as "Full-Time" or "Contract role".
pub fn parse_employment_label(label: &str) -> Option<EmploymentType> {
    EMPLOYMENT_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(label))
        .map(|(kind, _)| *kind)
}

/// "Entry Level (N years)" for N ≤ 2, "Mid Level" for 3–5, "Senior Level"
/// above 5, or "Not Specified" without a year count.
pub fn classify_experience_level(text: &str) -> String {
    let Some(years) = find_required_years(text) else {
        return NOT_SPECIFIED.to_string();
    };

    let level = match years {
        0..=2 => "Entry Level",
        3..=5 => "Mid Level",
        _ => "Senior Level",
    };
    let unit = if years == 1 { "year" } else { "years" };
    format!("{level} ({years} {unit})")
}

fn find_required_years(text: &str) -> Option<u32> {
    YEARS_OF_EXPERIENCE_PATTERNS.iter().find_map(|re| {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    })
}

pub fn extract_location(text: &str) -> String {
    LOCATION_PATTERNS
        .iter()
        .find_map(|re| {
            re.captures_iter(text)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str().trim())
                .find(|loc| {
                    (MIN_LOCATION_CHARS..=MAX_LOCATION_CHARS).contains(&loc.chars().count())
                })
        })
        .map(String::from)
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

/// A team, division or company phrase named in the posting.
pub fn detect_organization(text: &str) -> Option<String> {
    ORGANIZATION_PATTERNS.iter().find_map(|re| {
        re.captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .find_map(|m| clean_organization(m.as_str()))
    })
}

fn clean_organization(phrase: &str) -> Option<String> {
    let words: Vec<&str> = phrase
        .split_whitespace()
        .skip_while(|w| ORGANIZATION_LEADING_FILLERS.contains(&w.to_lowercase().as_str()))
        .collect();

    match words.as_slice() {
        [] => None,
        [only] if ORGANIZATION_SUFFIXES.contains(&only.to_lowercase().as_str()) => None,
        _ => Some(words.join(" ")),
    }
}

pub fn extract_requirements(text: &str, rules: &RequirementRules) -> Vec<String> {
    text.split(rules.separators)
        .map(normalize)
        .filter(|sentence| {
            let length = sentence.chars().count();
            let lower = sentence.to_lowercase();
            (rules.min_chars..=rules.max_chars).contains(&length)
                && rules.keywords.iter().any(|kw| lower.contains(kw))
        })
        .take(rules.max_items)
        .collect()
}

/// Lower-cased company name with non-word characters removed, usable as a
/// domain stem.
fn company_domain_stem(company: &str) -> Option<String> {
    let stem = NON_WORD_RE.replace_all(&company.to_lowercase(), "").into_owned();
    (!stem.is_empty() && company != COMPANY_NOT_FOUND).then_some(stem)
}

/// Guessed mailboxes for a company when the posting lists none.
pub fn fallback_contact_emails(company: &str) -> Vec<String> {
    match company_domain_stem(company) {
        Some(stem) => ["careers", "hr", "jobs"]
            .iter()
            .map(|mailbox| format!("{mailbox}@{stem}.com"))
            .collect(),
        None => vec![format!("careers@{PLACEHOLDER_COMPANY_STEM}.com")],
    }
}

/// Manual entry guesses a single careers mailbox.
fn manual_contact_emails(company: &str) -> Vec<String> {
    let stem = company_domain_stem(company).unwrap_or_else(|| PLACEHOLDER_COMPANY_STEM.to_string());
    vec![format!("careers@{stem}.com")]
}

async fn resolve_job_contact(
    text: &str,
    resolver: &HiringContactResolver,
    fallback_emails: impl FnOnce() -> Vec<String>,
) -> JobContactInfo {
    let emails = find_emails(text);
    let resolution = resolver.resolve(text, &emails).await;
    let contact_email = emails.into_iter().next();

    let suggested_emails = match &contact_email {
        Some(email) => vec![email.clone()],
        None => fallback_emails(),
    };

    JobContactInfo {
        hiring_manager: resolution.display_name().to_string(),
        contact_email,
        suggested_subject: resolve_subject(text),
        suggested_emails,
    }
}

/// Job details typed in by the applicant.
#[derive(Debug, Clone, Deserialize)]
pub struct ManualJobInput {
    pub job_title: String,
    pub company_name: String,
    #[serde(default)]
    pub job_description: Option<String>,
}

pub async fn build_manual_job_profile(
    input: &ManualJobInput,
    resolver: &HiringContactResolver,
) -> Result<JobProfile, ExtractionError> {
    let job_title = input.job_title.trim();
    if job_title.is_empty() {
        return Err(ExtractionError::MissingField("job_title"));
    }
    let company = input.company_name.trim();
    if company.is_empty() {
        return Err(ExtractionError::MissingField("company_name"));
    }

    let description = input
        .job_description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty());
    let text = description.unwrap_or_default();

    let metadata = extract_job_metadata(text, company);
    let contact_info = resolve_job_contact(text, resolver, || manual_contact_emails(company)).await;

    debug!(
        "Manual job profile built: {} at {} ({} requirements)",
        job_title,
        company,
        metadata.requirements.len()
    );

    Ok(JobProfile {
        job_title: job_title.to_string(),
        company: company.to_string(),
        organization: metadata.organization,
        location: metadata.location,
        description: description.unwrap_or(NO_DESCRIPTION_PROVIDED).to_string(),
        requirements: metadata.requirements,
        employment_type: metadata.employment_type,
        experience_level: metadata.experience_level,
        contact_info,
        source: MANUAL_ENTRY_SOURCE.to_string(),
    })
}

/// Raw per-field text handed over by the page scraper. Any field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScrapedJobFields {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub employment_type: Option<String>,
    /// Whole-page text, searched for contact details when present.
    #[serde(default)]
    pub page_text: Option<String>,
}

/// Normalized scraped field, if it is long enough to be real content.
fn scraped_field(value: Option<&str>, min_chars: usize) -> Option<String> {
    value
        .map(normalize)
        .filter(|v| v.chars().count() >= min_chars)
}

pub async fn build_scraped_job_profile(
    fields: &ScrapedJobFields,
    resolver: &HiringContactResolver,
) -> Result<JobProfile, ExtractionError> {
    let listing = validate_listing_url(&fields.url)?;

    let job_title = scraped_field(fields.title.as_deref(), MIN_SCRAPED_TITLE_CHARS).ok_or_else(|| {
        ExtractionError::IncompleteScrape(
            "could not extract a job title; check the URL or use manual entry".to_string(),
        )
    })?;

    let raw_description = fields.description.as_deref().unwrap_or_default();
    let description = scraped_field(Some(raw_description), MIN_SCRAPED_DESCRIPTION_CHARS)
        .map(|d| truncate_chars(&d, MAX_SCRAPED_DESCRIPTION_CHARS))
        .unwrap_or_else(|| DESCRIPTION_NOT_AVAILABLE.to_string());

    let company = scraped_field(fields.company.as_deref(), MIN_SCRAPED_COMPANY_CHARS)
        .or_else(|| detect_organization(raw_description))
        .unwrap_or_else(|| COMPANY_NOT_FOUND.to_string());

    let metadata = extract_job_metadata_with(raw_description, &company, &RequirementRules::SCRAPED);

    let location = scraped_field(fields.location.as_deref(), MIN_SCRAPED_LOCATION_CHARS)
        .unwrap_or(metadata.location);
    let employment_type = fields
        .employment_type
        .as_deref()
        .and_then(parse_employment_label)
        .unwrap_or(metadata.employment_type);

    let contact_text = fields.page_text.as_deref().unwrap_or(raw_description);
    let contact_info =
        resolve_job_contact(contact_text, resolver, || fallback_contact_emails(&company)).await;

    info!(
        "Scraped job profile built: {} at {} (job id: {})",
        job_title,
        company,
        listing.job_id.as_deref().unwrap_or("none")
    );

    Ok(JobProfile {
        job_title,
        company,
        organization: metadata.organization,
        location,
        description,
        requirements: metadata.requirements,
        employment_type,
        experience_level: metadata.experience_level,
        contact_info,
        source: listing.url.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Employment type ──────────────────────────────────────────────────────

    #[test]
    fn test_employment_type_keywords() {
        assert_eq!(detect_employment_type("This is a full-time role"), EmploymentType::FullTime);
        assert_eq!(detect_employment_type("Part time position, 20h/week"), EmploymentType::PartTime);
        assert_eq!(detect_employment_type("A 6-month contract"), EmploymentType::Contract);
        assert_eq!(detect_employment_type("Summer internship in Berlin"), EmploymentType::Internship);
    }

    #[test]
    fn test_employment_type_defaults() {
        assert_eq!(detect_employment_type("We are hiring engineers"), EmploymentType::FullTime);
        assert_eq!(detect_employment_type("Build internal tools"), EmploymentType::FullTime);
        assert_eq!(detect_employment_type(""), EmploymentType::NotSpecified);
        assert_eq!(detect_employment_type("  \n "), EmploymentType::NotSpecified);
    }

    #[test]
    fn test_employment_type_order_prefers_full_time() {
        assert_eq!(
            detect_employment_type("Full-time internship with mentoring"),
            EmploymentType::FullTime
        );
    }

    #[test]
    fn test_parse_employment_label() {
        assert_eq!(parse_employment_label("Full-Time"), Some(EmploymentType::FullTime));
        assert_eq!(parse_employment_label("Contract"), Some(EmploymentType::Contract));
        assert_eq!(parse_employment_label("Mid-Senior level"), None);
    }

    // ── Experience level ─────────────────────────────────────────────────────

    #[test]
    fn test_experience_level_bands() {
        assert!(classify_experience_level("3 years experience").contains("Mid Level"));
        assert!(classify_experience_level("7+ years experience").contains("Senior Level"));
        assert!(classify_experience_level("1 year experience").contains("Entry Level"));
        assert_eq!(classify_experience_level("Great team, good snacks"), "Not Specified");
    }

    #[test]
    fn test_experience_level_carries_year_count() {
        assert_eq!(classify_experience_level("1 year experience"), "Entry Level (1 year)");
        assert_eq!(
            classify_experience_level("3-5 years of professional experience"),
            "Mid Level (3 years)"
        );
        assert_eq!(
            classify_experience_level("Experience: 10 years in finance"),
            "Senior Level (10 years)"
        );
        assert_eq!(
            classify_experience_level("Minimum 2 years in Rust"),
            "Entry Level (2 years)"
        );
    }

    // ── Location ─────────────────────────────────────────────────────────────

    #[test]
    fn test_location_prefixes() {
        assert_eq!(extract_location("Location: Berlin, Germany\nApply now"), "Berlin, Germany");
        assert_eq!(extract_location("We are based in Austin. Hybrid."), "Austin");
        assert_eq!(extract_location("Office: 12 Main St; ask reception"), "12 Main St");
        assert_eq!(extract_location("You may work from anywhere in the EU"), "anywhere in the EU");
    }

    #[test]
    fn test_location_length_band() {
        assert_eq!(extract_location("Location: NY"), "Not Specified");
        let long = format!("Location: {}", "x".repeat(60));
        assert_eq!(extract_location(&long), "Not Specified");
        assert_eq!(extract_location(""), "Not Specified");
    }

    // ── Organization ─────────────────────────────────────────────────────────

    #[test]
    fn test_organization_detection() {
        assert_eq!(
            detect_organization("Join the Payments Platform Team to build ledgers").as_deref(),
            Some("Payments Platform Team")
        );
        assert_eq!(
            detect_organization("You will report into Globex Corporation leadership").as_deref(),
            Some("Globex Corporation")
        );
        assert_eq!(
            detect_organization("come join our Infrastructure team").as_deref(),
            Some("Infrastructure team")
        );
    }

    #[test]
    fn test_organization_filler_only_rejected() {
        assert_eq!(detect_organization("Welcome to Our Team"), None);
        let meta = extract_job_metadata("Nothing organizational here", "Initech");
        assert_eq!(meta.organization, "Initech");
    }

    // ── Requirements ─────────────────────────────────────────────────────────

    #[test]
    fn test_manual_requirements() {
        let text = "Must have 5 years of Rust experience. Knowledge of Kubernetes is a plus. \
                    We offer great snacks. Ok";
        assert_eq!(
            extract_requirements(text, &RequirementRules::MANUAL),
            vec![
                "Must have 5 years of Rust experience",
                "Knowledge of Kubernetes is a plus"
            ]
        );
    }

    #[test]
    fn test_requirement_rules_differ_by_source() {
        let text = "Skills: Go\nRequirements: strong written communication";
        assert_eq!(
            extract_requirements(text, &RequirementRules::MANUAL),
            vec!["Skills: Go"]
        );
        assert_eq!(
            extract_requirements(text, &RequirementRules::SCRAPED),
            vec!["Requirements: strong written communication"]
        );
    }

    #[test]
    fn test_requirements_capped() {
        let text: String = (0..12)
            .map(|i| format!("Requirement {i}: experience with system {i}.\n"))
            .collect();
        assert_eq!(extract_requirements(&text, &RequirementRules::MANUAL).len(), 8);
        assert_eq!(extract_requirements(&text, &RequirementRules::SCRAPED).len(), 10);
    }

    // ── Contact suggestions ──────────────────────────────────────────────────

    #[test]
    fn test_fallback_contact_emails() {
        assert_eq!(
            fallback_contact_emails("Acme Technologies, Inc."),
            vec![
                "careers@acmetechnologiesinc.com",
                "hr@acmetechnologiesinc.com",
                "jobs@acmetechnologiesinc.com"
            ]
        );
        assert_eq!(fallback_contact_emails(COMPANY_NOT_FOUND), vec!["careers@company.com"]);
        assert_eq!(fallback_contact_emails(""), vec!["careers@company.com"]);
    }

    // ── Manual profiles ──────────────────────────────────────────────────────

    fn manual(title: &str, company: &str, description: Option<&str>) -> ManualJobInput {
        ManualJobInput {
            job_title: title.to_string(),
            company_name: company.to_string(),
            job_description: description.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_manual_requires_title_and_company() {
        let resolver = HiringContactResolver::heuristic_only();
        let err = build_manual_job_profile(&manual("  ", "Acme", None), &resolver)
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::MissingField("job_title")));
        let err = build_manual_job_profile(&manual("Engineer", "", None), &resolver)
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::MissingField("company_name")));
    }

    #[tokio::test]
    async fn test_manual_without_description() {
        let resolver = HiringContactResolver::heuristic_only();
        let profile = build_manual_job_profile(&manual("Data Analyst", "Acme Co", None), &resolver)
            .await
            .unwrap();
        assert_eq!(profile.description, NO_DESCRIPTION_PROVIDED);
        assert_eq!(profile.employment_type, EmploymentType::NotSpecified);
        assert_eq!(profile.experience_level, "Not Specified");
        assert_eq!(profile.location, "Not Specified");
        assert_eq!(profile.organization, "Acme Co");
        assert_eq!(profile.source, "Manual Entry");
        assert_eq!(profile.contact_info.hiring_manager, "Hiring Manager");
        assert_eq!(profile.contact_info.suggested_emails, vec!["careers@acmeco.com"]);
        assert!(profile.requirements.is_empty());
    }

    #[tokio::test]
    async fn test_manual_with_contact_in_description() {
        let resolver = HiringContactResolver::heuristic_only();
        let description = "We need 4 years of experience with Python.\n\
                           Questions? Email dixitnahar18@gmail.com";
        let profile = build_manual_job_profile(
            &manual("Backend Engineer", "Acme", Some(description)),
            &resolver,
        )
        .await
        .unwrap();
        assert_eq!(profile.contact_info.hiring_manager, "Dixit Nahar");
        assert_eq!(
            profile.contact_info.contact_email.as_deref(),
            Some("dixitnahar18@gmail.com")
        );
        assert_eq!(profile.contact_info.suggested_emails, vec!["dixitnahar18@gmail.com"]);
        assert!(profile.experience_level.starts_with("Mid Level"));
        assert_eq!(profile.employment_type, EmploymentType::FullTime);
    }

    #[tokio::test]
    async fn test_manual_profile_is_deterministic() {
        let resolver = HiringContactResolver::heuristic_only();
        let input = manual(
            "Senior Rust Engineer",
            "Initech",
            Some("Contract role. Minimum 6 years experience required.\n- Knowledge of Tokio"),
        );
        let first = build_manual_job_profile(&input, &resolver).await.unwrap();
        let second = build_manual_job_profile(&input, &resolver).await.unwrap();
        assert_eq!(first.requirements, second.requirements);
        assert_eq!(first.employment_type, second.employment_type);
        assert_eq!(first.experience_level, second.experience_level);
        assert_eq!(first, second);
    }

    // ── Scraped profiles ─────────────────────────────────────────────────────

    const LISTING_URL: &str = "https://www.linkedin.com/jobs/view/12345/";

    fn scraped(description: &str) -> ScrapedJobFields {
        ScrapedJobFields {
            url: LISTING_URL.to_string(),
            title: Some("Senior Rust Engineer".to_string()),
            company: Some("Acme Technologies".to_string()),
            description: Some(description.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_scraped_profile_from_description() {
        let resolver = HiringContactResolver::heuristic_only();
        let fields = scraped(
            "Location: Remote, EU\n\
             We are hiring a Senior Rust Engineer.\n\
             Requirements: 5+ years of experience with Rust and distributed systems\n\
             This is a contract position.\n\
             Reach out to Priya Raman at priya.raman@acme.io",
        );
        let profile = build_scraped_job_profile(&fields, &resolver).await.unwrap();

        assert_eq!(profile.job_title, "Senior Rust Engineer");
        assert_eq!(profile.company, "Acme Technologies");
        assert_eq!(profile.location, "Remote, EU");
        assert_eq!(profile.employment_type, EmploymentType::Contract);
        assert_eq!(profile.experience_level, "Mid Level (5 years)");
        assert_eq!(profile.requirements.len(), 1);
        assert!(profile.requirements[0].contains("distributed systems"));
        assert_eq!(profile.contact_info.hiring_manager, "Priya Raman");
        assert_eq!(profile.contact_info.suggested_emails, vec!["priya.raman@acme.io"]);
        assert!(profile.contact_info.suggested_subject.is_some());
        assert_eq!(profile.source, LISTING_URL);
        assert!(profile.description.chars().count() <= MAX_SCRAPED_DESCRIPTION_CHARS);
    }

    #[tokio::test]
    async fn test_scraped_description_truncated() {
        let resolver = HiringContactResolver::heuristic_only();
        let fields = scraped(&"Build reliable systems with us. ".repeat(200));
        let profile = build_scraped_job_profile(&fields, &resolver).await.unwrap();
        assert_eq!(profile.description.chars().count(), MAX_SCRAPED_DESCRIPTION_CHARS);
    }

    #[tokio::test]
    async fn test_scraped_defaults_and_fallback_emails() {
        let resolver = HiringContactResolver::heuristic_only();
        let fields = ScrapedJobFields {
            url: LISTING_URL.to_string(),
            title: Some("Platform Engineer".to_string()),
            company: Some("Acme Technologies".to_string()),
            ..Default::default()
        };
        let profile = build_scraped_job_profile(&fields, &resolver).await.unwrap();
        assert_eq!(profile.description, DESCRIPTION_NOT_AVAILABLE);
        assert_eq!(profile.location, "Not Specified");
        assert_eq!(profile.contact_info.hiring_manager, "Hiring Manager");
        assert_eq!(profile.contact_info.contact_email, None);
        assert_eq!(
            profile.contact_info.suggested_emails,
            vec![
                "careers@acmetechnologies.com",
                "hr@acmetechnologies.com",
                "jobs@acmetechnologies.com"
            ]
        );
    }

    #[tokio::test]
    async fn test_scraped_company_falls_back() {
        let resolver = HiringContactResolver::heuristic_only();
        let fields = ScrapedJobFields {
            url: LISTING_URL.to_string(),
            title: Some("Platform Engineer".to_string()),
            description: Some("Help us scale. Join the Payments Team and own the ledger service end to end.".to_string()),
            ..Default::default()
        };
        let profile = build_scraped_job_profile(&fields, &resolver).await.unwrap();
        assert_eq!(profile.company, "Payments Team");

        let fields = ScrapedJobFields {
            url: LISTING_URL.to_string(),
            title: Some("Platform Engineer".to_string()),
            ..Default::default()
        };
        let profile = build_scraped_job_profile(&fields, &resolver).await.unwrap();
        assert_eq!(profile.company, COMPANY_NOT_FOUND);
        assert_eq!(profile.contact_info.suggested_emails, vec!["careers@company.com"]);
    }

    #[tokio::test]
    async fn test_scraped_employment_label_honoured() {
        let resolver = HiringContactResolver::heuristic_only();
        let mut fields = scraped("A long description of a full-time role with plenty of detail here.");
        fields.employment_type = Some("Part-Time".to_string());
        let profile = build_scraped_job_profile(&fields, &resolver).await.unwrap();
        assert_eq!(profile.employment_type, EmploymentType::PartTime);

        fields.employment_type = Some("Mid-Senior level".to_string());
        let profile = build_scraped_job_profile(&fields, &resolver).await.unwrap();
        assert_eq!(profile.employment_type, EmploymentType::FullTime);
    }

    #[tokio::test]
    async fn test_scraped_short_title_is_incomplete() {
        let resolver = HiringContactResolver::heuristic_only();
        let mut fields = scraped("whatever");
        fields.title = Some(" QA ".to_string());
        let err = build_scraped_job_profile(&fields, &resolver).await.unwrap_err();
        assert!(matches!(err, ExtractionError::IncompleteScrape(_)));
    }

    #[tokio::test]
    async fn test_scraped_rejects_non_listing_url() {
        let resolver = HiringContactResolver::heuristic_only();
        let mut fields = scraped("whatever");
        fields.url = "https://example.com/jobs/view/1".to_string();
        let err = build_scraped_job_profile(&fields, &resolver).await.unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidListingUrl(_)));
    }
}
