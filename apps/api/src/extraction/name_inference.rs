//! External name inference — the optional last stage of hiring-contact
//! resolution. Pluggable so tests and deployments without an API key can swap
//! or drop it.

use async_trait::async_trait;

use crate::extraction::prompts::{NAME_INFERENCE_PROMPT_TEMPLATE, NAME_INFERENCE_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};

/// Short answers only: "First Last" or the sentinel.
const NAME_INFERENCE_MAX_TOKENS: u32 = 20;

/// Text-in/text-out capability that guesses a person's name from an email
/// local-part. Answers are untrusted; the resolver validates them.
#[async_trait]
pub trait NameInferrer: Send + Sync {
    async fn infer_name(&self, local_part: &str, context: &str) -> Result<String, LlmError>;
}

/// `NameInferrer` backed by the shared LLM client.
pub struct LlmNameInferrer(pub LlmClient);

#[async_trait]
impl NameInferrer for LlmNameInferrer {
    async fn infer_name(&self, local_part: &str, context: &str) -> Result<String, LlmError> {
        let prompt = build_name_inference_prompt(local_part, context);
        self.0
            .complete_text(&prompt, NAME_INFERENCE_SYSTEM, NAME_INFERENCE_MAX_TOKENS)
            .await
    }
}

fn build_name_inference_prompt(local_part: &str, context: &str) -> String {
    NAME_INFERENCE_PROMPT_TEMPLATE
        .replace("{local_part}", local_part)
        .replace("{context}", context)
}
