use std::sync::Arc;

use crate::config::Config;
use crate::extraction::hiring_contact::HiringContactResolver;
use crate::extraction::name_inference::{LlmNameInferrer, NameInferrer};
use crate::llm_client::{LlmClient, LlmError};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// `None` when no API key is configured; generation is then unavailable.
    pub llm: Option<LlmClient>,
    pub resolver: HiringContactResolver,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, LlmError> {
        let llm = config
            .anthropic_api_key
            .clone()
            .map(|key| LlmClient::new(key, config.generation.model.clone()))
            .transpose()?;

        let inferrer = llm
            .clone()
            .map(|client| Arc::new(LlmNameInferrer(client)) as Arc<dyn NameInferrer>);
        let resolver = HiringContactResolver::new(inferrer, config.name_inference_timeout);

        Ok(Self {
            config,
            llm,
            resolver,
        })
    }
}
