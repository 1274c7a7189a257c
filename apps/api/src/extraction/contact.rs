//! Contact-field extraction: email, phone and social profile handles.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::resume::ContactInfo;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}\b").unwrap());
// Shape only: optional leading +, then 8-15 digits/spaces/parens/hyphens.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?[1-9]?[\d ()\-]{8,15}").unwrap());
static LINKEDIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)linkedin\.com/in/[\w\-]+").unwrap());
static GITHUB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)github\.com/[\w\-]+").unwrap());

/// Runs each contact pattern independently and keeps the first match per field.
pub fn extract_contact_info(text: &str) -> ContactInfo {
    ContactInfo {
        email: first_match(&EMAIL_RE, text),
        phone: find_phone(text),
        linkedin: first_match(&LINKEDIN_RE, text),
        github: first_match(&GITHUB_RE, text),
    }
}

/// Every email address in `text`, in order of appearance.
pub fn find_emails(text: &str) -> Vec<String> {
    EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

// A run of spaces or hyphens has the right shape but carries no number.
fn find_phone(text: &str) -> Option<String> {
    PHONE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .find(|candidate| candidate.chars().any(|c| c.is_ascii_digit()))
        .map(String::from)
}

fn first_match(re: &Regex, text: &str) -> Option<String> {
    re.find(text).map(|m| m.as_str().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_all_fields() {
        let text = "Jane Doe\njane.doe@example.com | +1 (555) 123-4567\n\
                    linkedin.com/in/jane-doe github.com/janedoe";
        let info = extract_contact_info(text);
        assert_eq!(info.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(info.phone.as_deref(), Some("+1 (555) 123-4567"));
        assert_eq!(info.linkedin.as_deref(), Some("linkedin.com/in/jane-doe"));
        assert_eq!(info.github.as_deref(), Some("github.com/janedoe"));
    }

    #[test]
    fn test_missing_fields_are_absent() {
        let info = extract_contact_info("No contact details here at all");
        assert!(info.email.is_none());
        assert!(info.phone.is_none());
        assert!(info.linkedin.is_none());
        assert!(info.github.is_none());
    }

    #[test]
    fn test_email_requires_at_sign() {
        assert!(extract_contact_info("john.example.com").email.is_none());
        assert!(find_emails("contact us at example dot com").is_empty());
    }

    #[test]
    fn test_first_email_wins() {
        let info = extract_contact_info("first@a.io then second@b.io");
        assert_eq!(info.email.as_deref(), Some("first@a.io"));
    }

    #[test]
    fn test_find_emails_in_order() {
        let emails = find_emails("careers@acme.com or jane.smith@acme.com");
        assert_eq!(emails, vec!["careers@acme.com", "jane.smith@acme.com"]);
    }

    #[test]
    fn test_phone_skips_digitless_runs() {
        let info = extract_contact_info("----------------\nPhone: 555 010 9999");
        assert_eq!(info.phone.as_deref(), Some("555 010 9999"));
    }

    #[test]
    fn test_phone_does_not_cross_lines() {
        let info = extract_contact_info("Call 555-123-4567\n(ext 12)");
        assert_eq!(info.phone.as_deref(), Some("555-123-4567"));
    }
}
