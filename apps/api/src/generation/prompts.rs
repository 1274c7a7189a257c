// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for cover letters.
/// Replace: {personalization_instruction}, {tone_instruction}, {min_words}, {max_words},
///          {json_only_instruction}
pub const COVER_LETTER_SYSTEM_TEMPLATE: &str = "You are an expert professional writer specializing in cover letters. \
    Create a compelling, personalized cover letter that demonstrates clear alignment between \
    the candidate's background and the job requirements.

{personalization_instruction}

TONE: {tone_instruction}
LENGTH: {min_words}-{max_words} words across the four paragraphs.

{json_only_instruction}";

/// Cover letter prompt template.
/// Replace: {candidate_name}, {candidate_email}, {job_title}, {company}, {organization},
///          {location}, {hiring_manager}, {requirements}, {experience}, {skills},
///          {min_words}, {max_words}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"CANDIDATE: {candidate_name}
EMAIL: {candidate_email}
JOB: {job_title} at {company}
TEAM: {organization}
LOCATION: {location}
HIRING_MANAGER: {hiring_manager}

JOB REQUIREMENTS:
{requirements}

CANDIDATE BACKGROUND:
Experience: {experience}
Skills: {skills}

Write a cover letter with exactly 4 paragraphs:
1. Opening: express interest in the specific position
2. Body 1: the most relevant experience, with specific examples
3. Body 2: additional qualifications and achievements
4. Closing: call to action and professional close

Keep it to {min_words}-{max_words} words in total. Return a JSON object with this EXACT schema:
{
  "salutation": "Dear ...,",
  "opening_paragraph": "...",
  "body_paragraph_1": "...",
  "body_paragraph_2": "...",
  "closing_paragraph": "...",
  "signature_line": "Sincerely, {candidate_name}",
  "personalization_elements": ["specific detail tying the candidate to this role"]
}"#;

/// System prompt for the outreach email.
/// Replace: {personalization_instruction}, {subject_instruction}, {tone}, {min_words},
///          {max_words}, {json_only_instruction}
pub const EMAIL_SYSTEM_TEMPLATE: &str = "You are an expert at writing professional job application emails. \
    Create a concise, compelling email that accompanies a job application.

{personalization_instruction}

REQUIREMENTS:
- Professional business email format
- {min_words}-{max_words} words in the body, excluding greeting and signature
- {subject_instruction}
- Mention the attached resume and cover letter
- Include a call to action
- Tone: {tone}

{json_only_instruction}";

/// Outreach email prompt template.
/// Replace: {candidate_name}, {candidate_email}, {candidate_phone}, {job_title}, {company},
///          {recipient}, {hiring_manager}, {required_subject}, {skills}, {top_experience}
pub const EMAIL_PROMPT_TEMPLATE: &str = r#"CANDIDATE: {candidate_name}
EMAIL: {candidate_email}
PHONE: {candidate_phone}
JOB: {job_title} at {company}
RECIPIENT: {recipient}
HIRING_MANAGER: {hiring_manager}
{required_subject}
TOP QUALIFICATIONS:
- {skills}
- {top_experience}

Return a JSON object with this EXACT schema:
{
  "to_email": "{recipient}",
  "subject_line": "...",
  "greeting": "Dear ...,",
  "body_paragraph_1": "...",
  "body_paragraph_2": "...",
  "closing_paragraph": "...",
  "signature": "Best regards,\n{candidate_name}"
}"#;
