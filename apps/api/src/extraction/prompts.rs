// Prompt constants for the extraction module's single LLM touchpoint.

/// System prompt for name inference — one line of plain text, no commentary.
pub const NAME_INFERENCE_SYSTEM: &str = "You infer people's names from email addresses. \
    Respond with exactly one line of plain text. \
    Do NOT include explanations, punctuation, or quotes.";

/// Name inference prompt. Replace `{local_part}` and `{context}` before sending.
pub const NAME_INFERENCE_PROMPT_TEMPLATE: &str = r#"An email address found in a job posting starts with "{local_part}" (the part before the @).

Job posting excerpt:
{context}

Who is this mailbox likely to belong to?
- If the local-part clearly encodes a person's first and last name, reply with the name as "First Last".
- If it is a team mailbox, initials only, or you are not confident, reply with exactly: UNCERTAIN"#;
