//! Application-material generation — orchestrates the cover letter and email.
//!
//! Flow: build prompts from the resolved profiles → LLM cover letter →
//!       LLM email → pin recipient and required subject → quality pass.
//!
//! Candidate name and hiring contact are already resolved by extraction;
//! nothing here re-derives them.

use std::sync::LazyLock;
use std::time::Instant;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::GenerationConfig;
use crate::errors::AppError;
use crate::extraction::job::fallback_contact_emails;
use crate::generation::prompts::{
    COVER_LETTER_PROMPT_TEMPLATE, COVER_LETTER_SYSTEM_TEMPLATE, EMAIL_PROMPT_TEMPLATE,
    EMAIL_SYSTEM_TEMPLATE,
};
use crate::generation::tone::Tone;
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, PERSONALIZATION_INSTRUCTION};
use crate::llm_client::LlmClient;
use crate::models::job::JobProfile;
use crate::models::resume::ResumeProfile;

const COVER_LETTER_MAX_TOKENS: u32 = 2000;
const EMAIL_MAX_TOKENS: u32 = 1500;

const PROMPT_EXPERIENCE_ENTRIES: usize = 2;
const PROMPT_SKILLS: usize = 8;
const PROMPT_REQUIREMENTS: usize = 5;
const EMAIL_SKILLS: usize = 5;
const TOP_EXPERIENCE_CHARS: usize = 100;

const NOT_PROVIDED: &str = "Not provided";

/// Compliance score for text outside its word-count band.
const OFF_TARGET_SCORE: f32 = 0.7;

static QUANTIFIED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+[%+$]|\b\d+\s+(?:years?|months?)\b").unwrap());

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverLetterContent {
    pub salutation: String,
    pub opening_paragraph: String,
    pub body_paragraph_1: String,
    pub body_paragraph_2: String,
    pub closing_paragraph: String,
    pub signature_line: String,
    #[serde(default)]
    pub personalization_elements: Vec<String>,
}

impl CoverLetterContent {
    pub fn paragraphs(&self) -> [&str; 4] {
        [
            &self.opening_paragraph,
            &self.body_paragraph_1,
            &self.body_paragraph_2,
            &self.closing_paragraph,
        ]
    }

    /// Words in the four paragraphs; salutation and signature excluded.
    pub fn word_count(&self) -> usize {
        self.paragraphs().iter().map(|p| count_words(p)).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailDraft {
    pub to_email: String,
    pub subject_line: String,
    pub greeting: String,
    pub body_paragraph_1: String,
    pub body_paragraph_2: String,
    pub closing_paragraph: String,
    pub signature: String,
}

impl EmailDraft {
    /// Words in the body; greeting and signature excluded.
    pub fn word_count(&self) -> usize {
        [
            &self.body_paragraph_1,
            &self.body_paragraph_2,
            &self.closing_paragraph,
        ]
        .iter()
        .map(|p| count_words(p))
        .sum()
    }
}

/// Deterministic checks over the generated text. No LLM involvement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityMetrics {
    pub cover_letter_word_count: usize,
    pub email_word_count: usize,
    pub cover_letter_within_target: bool,
    pub email_within_target: bool,
    /// Mean word-count compliance: 1.0 inside the band, 0.7 outside.
    pub professional_standard_score: f32,
    /// Quantified claims such as "30%" or "3 years".
    pub specific_examples_count: usize,
    pub personalization_elements_count: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    pub resume: ResumeProfile,
    pub job: JobProfile,
    #[serde(default)]
    pub tone: Tone,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub cover_letter: CoverLetterContent,
    pub email: EmailDraft,
    pub quality: QualityMetrics,
    pub tone: Tone,
    pub warnings: Vec<String>,
    pub generation_time_ms: u64,
}

/// A system prompt and user prompt pair.
#[derive(Debug, Clone)]
pub struct PromptPair {
    pub system: String,
    pub prompt: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Generates the cover letter and the outreach email for one application.
///
/// Any LLM failure stops the pipeline as a `generation` stage failure.
pub async fn generate_application_materials(
    llm: &LlmClient,
    request: &GenerationRequest,
    config: &GenerationConfig,
) -> Result<GenerationResult, AppError> {
    let started = Instant::now();
    let GenerationRequest { resume, job, tone } = request;

    info!(
        "Generating {} cover letter for {} ({} at {})",
        tone, resume.name, job.job_title, job.company
    );
    let cover_prompts = build_cover_letter_prompts(resume, job, *tone, config);
    let cover_letter: CoverLetterContent = llm
        .call_json(&cover_prompts.prompt, &cover_prompts.system, COVER_LETTER_MAX_TOKENS)
        .await
        .map_err(|e| AppError::stage_failed("generation", format!("Cover letter generation failed: {e}")))?;

    if !job.contact_info.has_named_contact() {
        info!("No named hiring contact for {}; using generic salutation", job.company);
    }
    info!("Generating outreach email to {}", job.contact_info.hiring_manager);
    let email_prompts = build_email_prompts(resume, job, *tone, config);
    let mut email: EmailDraft = llm
        .call_json(&email_prompts.prompt, &email_prompts.system, EMAIL_MAX_TOKENS)
        .await
        .map_err(|e| AppError::stage_failed("generation", format!("Email draft generation failed: {e}")))?;

    let mut warnings = pin_email_contact(&mut email, job);
    let quality = assess_quality(&cover_letter, &email, config);
    warnings.extend(word_count_warnings(&quality, config));
    for warning in &warnings {
        warn!("Generation warning: {warning}");
    }

    let generation_time_ms = started.elapsed().as_millis() as u64;
    info!(
        "Generated application materials in {}ms ({} cover letter words, {} email words)",
        generation_time_ms, quality.cover_letter_word_count, quality.email_word_count
    );

    Ok(GenerationResult {
        cover_letter,
        email,
        quality,
        tone: *tone,
        warnings,
        generation_time_ms,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt building
// ────────────────────────────────────────────────────────────────────────────

fn personalization_instruction(resume: &ResumeProfile, job: &JobProfile) -> String {
    PERSONALIZATION_INSTRUCTION
        .replace("{candidate_name}", &resume.name)
        .replace("{hiring_manager}", &job.contact_info.hiring_manager)
}

fn bullet_list(items: &[String], limit: usize) -> String {
    if items.is_empty() {
        return format!("- {NOT_PROVIDED}");
    }
    items
        .iter()
        .take(limit)
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn joined_or_default(items: &[String], limit: usize, separator: &str) -> String {
    if items.is_empty() {
        return NOT_PROVIDED.to_string();
    }
    items.iter().take(limit).cloned().collect::<Vec<_>>().join(separator)
}

pub fn build_cover_letter_prompts(
    resume: &ResumeProfile,
    job: &JobProfile,
    tone: Tone,
    config: &GenerationConfig,
) -> PromptPair {
    let min_words = config.cover_letter_min_words.to_string();
    let max_words = config.cover_letter_max_words.to_string();

    let system = COVER_LETTER_SYSTEM_TEMPLATE
        .replace("{personalization_instruction}", &personalization_instruction(resume, job))
        .replace("{tone_instruction}", tone.instructions())
        .replace("{min_words}", &min_words)
        .replace("{max_words}", &max_words)
        .replace("{json_only_instruction}", JSON_ONLY_INSTRUCTION);

    let prompt = COVER_LETTER_PROMPT_TEMPLATE
        .replace("{candidate_name}", &resume.name)
        .replace(
            "{candidate_email}",
            resume.contact_info.email.as_deref().unwrap_or(NOT_PROVIDED),
        )
        .replace("{job_title}", &job.job_title)
        .replace("{company}", &job.company)
        .replace("{organization}", &job.organization)
        .replace("{location}", &job.location)
        .replace("{hiring_manager}", &job.contact_info.hiring_manager)
        .replace("{requirements}", &bullet_list(&job.requirements, PROMPT_REQUIREMENTS))
        .replace(
            "{experience}",
            &joined_or_default(&resume.experience, PROMPT_EXPERIENCE_ENTRIES, " | "),
        )
        .replace("{skills}", &joined_or_default(&resume.skills, PROMPT_SKILLS, ", "))
        .replace("{min_words}", &min_words)
        .replace("{max_words}", &max_words);

    PromptPair { system, prompt }
}

pub fn build_email_prompts(
    resume: &ResumeProfile,
    job: &JobProfile,
    tone: Tone,
    config: &GenerationConfig,
) -> PromptPair {
    let suggested_subject = job.contact_info.suggested_subject.as_deref();
    let subject_instruction = match suggested_subject {
        Some(subject) => format!("IMPORTANT: Use this EXACT subject line: '{subject}'"),
        None => format!(
            "Create a clear subject line with the job title and the candidate's name ({})",
            resume.name
        ),
    };
    let required_subject = suggested_subject
        .map(|subject| format!("REQUIRED_SUBJECT: {subject}\n"))
        .unwrap_or_default();

    let system = EMAIL_SYSTEM_TEMPLATE
        .replace("{personalization_instruction}", &personalization_instruction(resume, job))
        .replace("{subject_instruction}", &subject_instruction)
        .replace("{tone}", tone.as_str())
        .replace("{min_words}", &config.email_min_words.to_string())
        .replace("{max_words}", &config.email_max_words.to_string())
        .replace("{json_only_instruction}", JSON_ONLY_INSTRUCTION);

    let top_experience: String = resume
        .experience
        .first()
        .map(|entry| entry.chars().take(TOP_EXPERIENCE_CHARS).collect())
        .unwrap_or_else(|| "Relevant experience".to_string());

    let prompt = EMAIL_PROMPT_TEMPLATE
        .replace("{candidate_name}", &resume.name)
        .replace(
            "{candidate_email}",
            resume.contact_info.email.as_deref().unwrap_or(NOT_PROVIDED),
        )
        .replace(
            "{candidate_phone}",
            resume.contact_info.phone.as_deref().unwrap_or(NOT_PROVIDED),
        )
        .replace("{job_title}", &job.job_title)
        .replace("{company}", &job.company)
        .replace("{recipient}", &recipient_email(job))
        .replace("{hiring_manager}", &job.contact_info.hiring_manager)
        .replace("{required_subject}", &required_subject)
        .replace("{skills}", &joined_or_default(&resume.skills, EMAIL_SKILLS, ", "))
        .replace("{top_experience}", &top_experience);

    PromptPair { system, prompt }
}

/// The posting's contact email, else the first suggested mailbox.
pub fn recipient_email(job: &JobProfile) -> String {
    job.contact_info
        .contact_email
        .clone()
        .or_else(|| job.contact_info.suggested_emails.first().cloned())
        .or_else(|| fallback_contact_emails(&job.company).into_iter().next())
        .unwrap_or_default()
}

/// Forces the recipient and, when the posting demands one, the exact subject.
/// Returns a warning for every field the model got wrong.
pub fn pin_email_contact(email: &mut EmailDraft, job: &JobProfile) -> Vec<String> {
    let mut warnings = Vec::new();

    let recipient = recipient_email(job);
    if email.to_email.trim() != recipient {
        if !email.to_email.trim().is_empty() {
            warnings.push(format!(
                "Replaced generated recipient '{}' with '{recipient}'",
                email.to_email
            ));
        }
        email.to_email = recipient;
    }

    if let Some(subject) = &job.contact_info.suggested_subject {
        if email.subject_line.trim() != subject {
            warnings.push(format!(
                "Generated subject '{}' did not match the required subject; restored it",
                email.subject_line
            ));
            email.subject_line = subject.clone();
        }
    }

    warnings
}

// ────────────────────────────────────────────────────────────────────────────
// Quality assessment
// ────────────────────────────────────────────────────────────────────────────

fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn assess_quality(
    cover_letter: &CoverLetterContent,
    email: &EmailDraft,
    config: &GenerationConfig,
) -> QualityMetrics {
    let cover_letter_word_count = cover_letter.word_count();
    let email_word_count = email.word_count();

    let cover_letter_within_target = (config.cover_letter_min_words..=config.cover_letter_max_words)
        .contains(&cover_letter_word_count);
    let email_within_target =
        (config.email_min_words..=config.email_max_words).contains(&email_word_count);

    let compliance = |within: bool| if within { 1.0 } else { OFF_TARGET_SCORE };
    let professional_standard_score =
        (compliance(cover_letter_within_target) + compliance(email_within_target)) / 2.0;

    let specific_examples_count = cover_letter
        .paragraphs()
        .iter()
        .map(|p| QUANTIFIED_RE.find_iter(p).count())
        .sum();

    QualityMetrics {
        cover_letter_word_count,
        email_word_count,
        cover_letter_within_target,
        email_within_target,
        professional_standard_score,
        specific_examples_count,
        personalization_elements_count: cover_letter.personalization_elements.len(),
    }
}

fn word_count_warnings(quality: &QualityMetrics, config: &GenerationConfig) -> Vec<String> {
    let mut warnings = Vec::new();
    if !quality.cover_letter_within_target {
        warnings.push(format!(
            "Cover letter is {} words; target is {}-{}",
            quality.cover_letter_word_count,
            config.cover_letter_min_words,
            config.cover_letter_max_words
        ));
    }
    if !quality.email_within_target {
        warnings.push(format!(
            "Email body is {} words; target is {}-{}",
            quality.email_word_count, config.email_min_words, config.email_max_words
        ));
    }
    warnings
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
