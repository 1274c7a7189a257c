//! Subject-line resolution for the outreach email.
//!
//! Explicit instructions ("Subject: ...", "use subject ...") win, then quoted or
//! bracketed phrases, then capitalized "... Position"/"... Role" phrases. Every
//! candidate must pass `validate_subject`. When nothing survives, a subject is
//! composed from a detected company and job title.

use std::sync::LazyLock;

use regex::Regex;

const MIN_SUBJECT_CHARS: usize = 5;
const MAX_SUBJECT_CHARS: usize = 100;

const JOB_KEYWORDS: &[&str] = &[
    "job",
    "application",
    "applying",
    "position",
    "role",
    "opportunity",
    "opening",
    "vacancy",
    "engineer",
    "developer",
    "manager",
    "analyst",
    "designer",
    "scientist",
    "consultant",
    "architect",
    "intern",
    "specialist",
    "candidate",
    "hiring",
];

/// A subject consisting only of one of these says nothing.
const GENERIC_SUBJECTS: &[&str] = &["job application", "application", "position", "role"];

static REJECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:please|thank\s+you|regards|sincerely|best|looking\s+forward)\b").unwrap()
});

static EXPLICIT_SUBJECT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#"(?im)\b(?:use|keep|mention|write|put|with)[ \t]+(?:the[ \t]+|this[ \t]+)?(?:email[ \t]+)?subject(?:[ \t]+line)?[ \t]*(?:as|:|-|–)?[ \t]*["'“‘]?([^"”’\n]+)"#,
        r#"(?im)\bemail[ \t]+subject(?:[ \t]+line)?[ \t]*[:\-–][ \t]*["'“‘]?([^"”’\n]+)"#,
        r#"(?im)\bsubject(?:[ \t]+line)?[ \t]*:[ \t]*["'“‘]?([^"”’\n]+)"#,
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static QUOTED_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#""([^"\n]{5,100})""#,
        r#"“([^”\n]{5,100})”"#,
        r#"\[([^\]\n]{5,100})\]"#,
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static CAPITALIZED_JOB_PHRASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b((?:[A-Z][\w&+#/-]*[ \t]+){1,6}(?:Job|Application|Position|Role|Opportunity))\b",
    )
    .unwrap()
});

static COMPANY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\b([A-Z][\w&]*(?:[ \t]+[A-Z][\w&]*){0,3}[ \t]+(?:Inc|Corp|Corporation|Ltd|LLC|Technologies|Labs|Solutions|Systems|Group))\b",
        r"(?:\bat|\bjoin)[ \t]+([A-Z][\w&]*(?:[ \t]+[A-Z][\w&]*){0,2})",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static JOB_TITLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\b((?:(?:Senior|Junior|Lead|Staff|Principal)[ \t]+)?(?:[A-Z][\w+#]*[ \t]+){0,2}(?:Engineer|Developer|Manager|Analyst|Designer|Scientist|Consultant|Architect|Intern|Specialist|Administrator))\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Extracts a subject line the posting asks for, or composes one.
pub fn resolve_subject(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }
    find_stated_subject(text).or_else(|| synthesize_subject(text))
}

fn find_stated_subject(text: &str) -> Option<String> {
    let explicit = EXPLICIT_SUBJECT_PATTERNS.iter();
    let quoted = QUOTED_PATTERNS.iter();
    let capitalized = std::iter::once(&*CAPITALIZED_JOB_PHRASE_RE);

    explicit.chain(quoted).chain(capitalized).find_map(|re| {
        re.captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .find_map(|m| validate_subject(m.as_str()))
    })
}

/// Length 5–100, names something job-related, carries no sign-off or plea,
/// and is more than a bare generic word.
pub fn validate_subject(candidate: &str) -> Option<String> {
    let cleaned = candidate
        .trim()
        .trim_matches(|c: char| matches!(c, '"' | '\'' | '“' | '”' | '‘' | '’'))
        .trim_end_matches(['.', ',', ';'])
        .trim();

    let length = cleaned.chars().count();
    if !(MIN_SUBJECT_CHARS..=MAX_SUBJECT_CHARS).contains(&length) {
        return None;
    }

    let lower = cleaned.to_lowercase();
    if !JOB_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return None;
    }
    if REJECT_RE.is_match(cleaned) || GENERIC_SUBJECTS.contains(&lower.as_str()) {
        return None;
    }

    Some(cleaned.to_string())
}

/// "{company} {title} Application", degrading to whichever half was found.
fn synthesize_subject(text: &str) -> Option<String> {
    let company = first_capture(&COMPANY_PATTERNS, text);
    let title = first_capture(&JOB_TITLE_PATTERNS, text);

    match (company, title) {
        (Some(company), Some(title)) => Some(format!("{company} {title} Application")),
        (Some(company), None) => Some(format!("{company} Job Application")),
        (None, Some(title)) => Some(format!("{title} Application")),
        (None, None) => None,
    }
}

fn first_capture(patterns: &[Regex], text: &str) -> Option<String> {
    patterns.iter().find_map(|re| {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    })
}
