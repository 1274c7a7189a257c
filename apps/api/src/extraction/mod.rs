pub mod contact;
pub mod document;
pub mod first_names;
pub mod handlers;
pub mod hiring_contact;
pub mod job;
pub mod listing_url;
pub mod name_inference;
pub mod normalize;
pub mod prompts;
pub mod resume;
pub mod sections;
pub mod subject;

use serde::Serialize;
use thiserror::Error;

use crate::extraction::resume::MIN_RESUME_CHARS;
use crate::extraction::sections::SectionKind;

/// Hard failures of the extraction core: required input is missing or unusable.
/// "Not found" conditions are never errors; they produce defaults or warnings.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("resume text is too short ({length} characters, need at least {min})", min = MIN_RESUME_CHARS)]
    TextTooShort { length: usize },

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid listing URL: {0}")]
    InvalidListingUrl(String),

    #[error("incomplete scrape: {0}")]
    IncompleteScrape(String),

    #[error("{0}")]
    UnsupportedDocument(String),

    #[error("{0}")]
    DocumentRead(String),
}

/// Soft findings collected while validating a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionWarning {
    #[error("Could not extract candidate name")]
    MissingName,

    #[error("Could not extract email address")]
    MissingEmail,

    #[error("Could not extract work experience")]
    MissingExperience,

    #[error("Could not extract skills")]
    MissingSkills,

    #[error("Resume text seems too short")]
    ShortText,

    #[error("No {0} section heading found")]
    MissingSection(SectionKind),
}
