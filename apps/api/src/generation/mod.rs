// Application-material generation: cover letter and outreach email.
// All LLM calls go through llm_client — no direct Anthropic API calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod tone;
