//! Hiring-contact resolution — infers the person to address from a posting.
//!
//! Ordered fallback chain; each stage runs only when every earlier one came up
//! empty:
//!
//! 1. explicit phrases in the text ("reach out to Jane Doe", "Jane Doe <jane@..>")
//! 2. the local-part of a non-generic email address:
//!    separator split → camel-case split → first-name dictionary → balanced split
//! 3. an optional external `NameInferrer`, bounded by a timeout; its failures are
//!    logged and swallowed
//!
//! `None` means "use a generic title"; callers address the letter to
//! "Hiring Manager".

use std::sync::Arc;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::extraction::first_names::longest_prefix_match;
use crate::extraction::name_inference::NameInferrer;
use crate::extraction::normalize::truncate_chars;
use crate::models::job::DEFAULT_HIRING_MANAGER;

/// Literal answer the external inferrer gives when it cannot tell.
pub const UNCERTAIN_SENTINEL: &str = "UNCERTAIN";

const CONTEXT_SNIPPET_CHARS: usize = 500;
const MAX_INFERRED_NAME_CHARS: usize = 50;

/// Local-parts containing any of these belong to a mailbox, not a person.
const GENERIC_LOCAL_SUBSTRINGS: &[&str] = &[
    "noreply",
    "no-reply",
    "donotreply",
    "do-not-reply",
    "info",
    "contact",
    "careers",
    "jobs",
];
/// Too short to match as a substring ("christopher"); matched at the start of
/// each separator-delimited segment, so `hrteam` and `team.hr` are generic.
const GENERIC_SEGMENT_PREFIXES: &[&str] = &["hr"];

/// Words that show up capitalized next to the trigger phrases but are never
/// part of a person's name.
const NON_NAME_WORDS: &[&str] = &[
    "about", "acquisition", "analyst", "and", "application", "apply", "at", "benefits", "best",
    "careers", "company", "contact", "dear", "department", "description", "designer",
    "details", "developer", "director", "education", "email", "engineer", "experience", "for",
    "full", "hiring", "human", "inc", "information", "job", "jobs", "join", "junior", "lead",
    "location", "manager", "now", "or", "our", "overview", "part", "please", "position",
    "qualifications", "recruiter", "regards", "remote", "requirements", "resources",
    "responsibilities", "role", "senior", "sincerely", "skills", "software", "summary",
    "talent", "team", "thank", "thanks", "the", "time", "to", "today", "us", "with", "you",
];

static EXPLICIT_NAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    const NAME: &str = r"([A-Z][a-zA-Z]+[ \t]+[A-Z][a-zA-Z]+)";
    [
        format!(r"(?i:\bcontact)[ \t]+{NAME}"),
        format!(r"(?i:\breach[ \t]+out[ \t]+to)[ \t]+{NAME}"),
        format!(r"(?i:\bhiring[ \t]+manager)[ \t]*[:\-–]?[ \t]*{NAME}"),
        format!(r"(?i:\bspeak[ \t]+with)[ \t]+{NAME}"),
        format!(r"(?i:\brecruiter)[ \t]*[:\-–]?[ \t]*{NAME}"),
        format!(r"{NAME}[ \t]*[<(\[][ \t]*[A-Za-z0-9._%+-]+@"),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// A line holding nothing but two capitalized words. Tried after every
/// trigger phrase.
static BARE_NAME_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*([A-Z][a-z]+[ \t]+[A-Z][a-z]+)[ \t\r]*$").unwrap()
});

/// Posting section titles that look like a bare name line ("Tech Stack",
/// "Why Acme"). Only consulted for bare lines.
const HEADING_WORDS: &[&str] = &[
    "apply", "benefits", "culture", "data", "engineering", "learning", "machine", "mission",
    "offer", "perks", "platform", "product", "stack", "tech", "values", "we", "what", "who",
    "why", "work",
];

/// Which stage produced the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provenance {
    ExplicitPattern,
    EmailSeparator,
    CamelCase,
    DictionaryMatch,
    BalancedSplit,
    ExternalInference,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResolution {
    pub name: Option<String>,
    pub provenance: Provenance,
}

impl ContactResolution {
    fn found(name: String, provenance: Provenance) -> Self {
        debug!("Hiring contact resolved via {:?}: {}", provenance, name);
        Self {
            name: Some(name),
            provenance,
        }
    }

    fn unresolved() -> Self {
        Self {
            name: None,
            provenance: Provenance::None,
        }
    }

    /// The resolved name, or the generic "Hiring Manager" title.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_HIRING_MANAGER)
    }
}

/// Runs the resolution chain, consulting the external inferrer (if any) last.
#[derive(Clone)]
pub struct HiringContactResolver {
    inferrer: Option<Arc<dyn NameInferrer>>,
    timeout: Duration,
}

impl HiringContactResolver {
    pub fn new(inferrer: Option<Arc<dyn NameInferrer>>, timeout: Duration) -> Self {
        Self { inferrer, timeout }
    }

    /// A resolver that never leaves the process.
    pub fn heuristic_only() -> Self {
        Self::new(None, Duration::ZERO)
    }

    pub async fn resolve(&self, text: &str, emails: &[String]) -> ContactResolution {
        let resolution = resolve_without_inference(text, emails);
        if resolution.name.is_some() {
            return resolution;
        }

        let Some(inferrer) = &self.inferrer else {
            return resolution;
        };
        let Some(local) = emails
            .iter()
            .filter_map(|email| local_part(email))
            .find(|local| !is_generic_local_part(local))
        else {
            return resolution;
        };

        match self.infer(inferrer.as_ref(), local, text).await {
            Some(name) => ContactResolution::found(name, Provenance::ExternalInference),
            None => ContactResolution::unresolved(),
        }
    }

    async fn infer(&self, inferrer: &dyn NameInferrer, local: &str, text: &str) -> Option<String> {
        let snippet = truncate_chars(text, CONTEXT_SNIPPET_CHARS);
        match tokio::time::timeout(self.timeout, inferrer.infer_name(local, &snippet)).await {
            Ok(Ok(answer)) => accept_inferred_name(&answer),
            Ok(Err(e)) => {
                warn!("Name inference failed for '{}': {}", local, e);
                None
            }
            Err(_) => {
                warn!(
                    "Name inference for '{}' timed out after {}ms",
                    local,
                    self.timeout.as_millis()
                );
                None
            }
        }
    }
}

/// Stages 1 and 2: explicit text patterns, then email local-parts in order.
pub fn resolve_without_inference(text: &str, emails: &[String]) -> ContactResolution {
    if let Some(name) = extract_explicit_name(text) {
        return ContactResolution::found(name, Provenance::ExplicitPattern);
    }

    emails
        .iter()
        .filter_map(|email| local_part(email))
        .filter(|local| !is_generic_local_part(local))
        .find_map(name_from_local_part)
        .map(|(name, provenance)| ContactResolution::found(name, provenance))
        .unwrap_or_else(ContactResolution::unresolved)
}

pub fn extract_explicit_name(text: &str) -> Option<String> {
    EXPLICIT_NAME_PATTERNS
        .iter()
        .find_map(|re| {
            re.captures_iter(text)
                .filter_map(|caps| caps.get(1))
                .find_map(|m| validate_person_name(m.as_str()))
        })
        .or_else(|| {
            BARE_NAME_LINE_RE
                .captures_iter(text)
                .filter_map(|caps| caps.get(1))
                .filter(|m| !is_heading_phrase(m.as_str()))
                .find_map(|m| validate_person_name(m.as_str()))
        })
}

fn is_heading_phrase(phrase: &str) -> bool {
    phrase
        .split_whitespace()
        .any(|word| HEADING_WORDS.contains(&word.to_lowercase().as_str()))
}

/// Exactly two alphabetic tokens of at least two letters, neither a role or
/// heading word.
fn validate_person_name(candidate: &str) -> Option<String> {
    let tokens: Vec<&str> = candidate.split_whitespace().collect();
    let [first, last] = tokens.as_slice() else {
        return None;
    };
    let plausible = |token: &str| {
        token.chars().count() >= 2
            && token.chars().all(char::is_alphabetic)
            && !NON_NAME_WORDS.contains(&token.to_lowercase().as_str())
    };
    (plausible(*first) && plausible(*last)).then(|| format!("{first} {last}"))
}

fn local_part(email: &str) -> Option<&str> {
    email
        .split_once('@')
        .map(|(local, _)| local)
        .filter(|local| !local.is_empty())
}

pub fn is_generic_local_part(local: &str) -> bool {
    let lower = local.to_lowercase();
    if GENERIC_LOCAL_SUBSTRINGS.iter().any(|g| lower.contains(g)) {
        return true;
    }
    lower
        .split(['.', '_', '-', '+'])
        .map(|segment| segment.trim_end_matches(|c: char| c.is_ascii_digit()))
        .any(|segment| GENERIC_SEGMENT_PREFIXES.iter().any(|p| segment.starts_with(p)))
}

/// Stage 2 on a single local-part.
pub fn name_from_local_part(local: &str) -> Option<(String, Provenance)> {
    let stripped = local.trim_end_matches(|c: char| c.is_ascii_digit());

    let parts: Vec<&str> = stripped
        .split(['.', '_', '-'])
        .filter(|p| !p.is_empty())
        .collect();
    if let [first, last] = parts.as_slice() {
        if let Some(name) = compose_name(first, last) {
            return Some((name, Provenance::EmailSeparator));
        }
    }

    if has_embedded_capital(stripped) {
        if let [first, last] = split_camel_case(stripped).as_slice() {
            if let Some(name) = compose_name(first, last) {
                return Some((name, Provenance::CamelCase));
            }
        }
    }

    let lower = stripped.to_lowercase();
    if let Some((first, len)) = longest_prefix_match(&lower) {
        let rest = &lower[len..];
        if rest.chars().count() >= 2 {
            if let Some(name) = compose_name(first, rest) {
                return Some((name, Provenance::DictionaryMatch));
            }
        }
    }

    balanced_split(&lower)
        .and_then(|(first, last)| compose_name(&first, &last))
        .map(|name| (name, Provenance::BalancedSplit))
}

fn has_embedded_capital(s: &str) -> bool {
    s.chars().skip(1).any(char::is_uppercase)
}

fn split_camel_case(s: &str) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    for c in s.chars() {
        if c.is_uppercase() || parts.is_empty() {
            parts.push(String::new());
        }
        if let Some(current) = parts.last_mut() {
            current.push(c);
        }
    }
    parts
}

/// Splits at the position in `3..min(8, len - 2)` whose halves are both
/// alphabetic, at least 3 long, and closest in length. Ties go to the earliest
/// split.
pub fn balanced_split(s: &str) -> Option<(String, String)> {
    let chars: Vec<char> = s.chars().collect();
    let upper = chars.len().saturating_sub(2).min(8);

    (3..upper)
        .filter_map(|i| {
            let (left, right) = chars.split_at(i);
            let usable = |half: &[char]| half.len() >= 3 && half.iter().all(|c| c.is_alphabetic());
            (usable(left) && usable(right)).then(|| (i, left.len().abs_diff(right.len())))
        })
        .min_by_key(|&(_, diff)| diff)
        .map(|(i, _)| {
            (
                chars[..i].iter().collect(),
                chars[i..].iter().collect(),
            )
        })
}

fn compose_name(first: &str, last: &str) -> Option<String> {
    let valid = |part: &str| part.chars().count() >= 2 && part.chars().all(char::is_alphabetic);
    (valid(first) && valid(last)).then(|| format!("{} {}", capitalize(first), capitalize(last)))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Accepts an inferred answer only when it is two alphabetic tokens, under 50
/// characters, and not the uncertainty sentinel.
fn accept_inferred_name(answer: &str) -> Option<String> {
    let answer = answer.trim();
    if answer.eq_ignore_ascii_case(UNCERTAIN_SENTINEL)
        || answer.chars().count() >= MAX_INFERRED_NAME_CHARS
    {
        return None;
    }
    let tokens: Vec<&str> = answer.split_whitespace().collect();
    match tokens.as_slice() {
        [first, last]
            if first.chars().all(char::is_alphabetic) && last.chars().all(char::is_alphabetic) =>
        {
            Some(format!("{first} {last}"))
        }
        _ => None,
    }
}
