use std::fmt;

use serde::{Deserialize, Serialize};

pub const NOT_SPECIFIED: &str = "Not Specified";
pub const MANUAL_ENTRY_SOURCE: &str = "Manual Entry";
pub const DEFAULT_HIRING_MANAGER: &str = "Hiring Manager";

/// Closed set of employment types a posting can be classified into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Internship,
    #[serde(rename = "Not Specified")]
    NotSpecified,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Internship => "Internship",
            EmploymentType::NotSpecified => NOT_SPECIFIED,
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who to address and how to reach them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobContactInfo {
    /// Resolved person name, or "Hiring Manager" when none was found.
    pub hiring_manager: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_subject: Option<String>,
    pub suggested_emails: Vec<String>,
}

impl JobContactInfo {
    pub fn has_named_contact(&self) -> bool {
        self.hiring_manager != DEFAULT_HIRING_MANAGER
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobProfile {
    pub job_title: String,
    pub company: String,
    /// Team, division or company named in the posting; the company when none is.
    pub organization: String,
    pub location: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub employment_type: EmploymentType,
    pub experience_level: String,
    pub contact_info: JobContactInfo,
    /// Listing URL, or "Manual Entry".
    pub source: String,
}
