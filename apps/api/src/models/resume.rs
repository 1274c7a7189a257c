use serde::{Deserialize, Serialize};

/// Placeholder returned when no line of the resume looks like a name.
pub const UNKNOWN_CANDIDATE_NAME: &str = "Candidate Name";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// Structured view of a resume, built once per submission.
///
/// `text_length` always equals the character count of `raw_text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub name: String,
    pub contact_info: ContactInfo,
    /// At most 5 entries, in document order.
    pub experience: Vec<String>,
    /// At most 15 entries, deduplicated.
    pub skills: Vec<String>,
    /// At most 3 entries.
    pub education: Vec<String>,
    pub raw_text: String,
    pub text_length: usize,
}

impl ResumeProfile {
    pub fn has_known_name(&self) -> bool {
        !self.name.trim().is_empty() && self.name != UNKNOWN_CANDIDATE_NAME
    }
}
