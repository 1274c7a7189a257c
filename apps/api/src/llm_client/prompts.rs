// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Appended to every system prompt whose answer is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Addressing rules shared by every piece of applicant-facing text.
/// Replace: {candidate_name}, {hiring_manager}
pub const PERSONALIZATION_INSTRUCTION: &str = "IMPORTANT PERSONALIZATION REQUIREMENTS:
- Use the candidate's name: {candidate_name}
- Address the hiring manager: {hiring_manager}
- If the hiring manager is \"Hiring Manager\", use \"Dear Hiring Manager\"
- If the hiring manager has a specific name, use \"Dear [Name]\"
- Reference the candidate by name in the body for personalization";
