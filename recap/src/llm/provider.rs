use std::sync::Arc;

use crate::config::{parse_llm_provider_model, LlmConfig};
use crate::error::Result;
use crate::llm::api::LlmApiClient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LlmBackend {
    Groq,
    OpenAI,
    OpenRouter,
    Ollama,
    LmStudio,
    OpenAICompatible { base_url: String },
}

impl LlmBackend {
    pub fn name(&self) -> &'static str {
        match self {
            LlmBackend::Groq => "groq",
            LlmBackend::OpenAI => "openai",
            LlmBackend::OpenRouter => "openrouter",
            LlmBackend::Ollama => "ollama",
            LlmBackend::LmStudio => "lmstudio",
            LlmBackend::OpenAICompatible { .. } => "openai-compatible",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CompletionOptions {
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

/// Process-wide handle on the chat completion model.
///
/// Built once at startup and cloned into every component that talks to the
/// model; clones share the underlying HTTP client.
#[derive(Clone)]
pub struct LlmProvider {
    backend: LlmBackend,
    config: Arc<LlmConfig>,
    client: LlmApiClient,
}

impl std::fmt::Debug for LlmProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmProvider")
            .field("backend", &self.backend)
            .field("model", &self.config.model)
            .finish()
    }
}

impl LlmProvider {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let (provider, _model) = parse_llm_provider_model(&config.model);

        let backend = match provider.to_lowercase().as_str() {
            "groq" => LlmBackend::Groq,
            "openai" => LlmBackend::OpenAI,
            "openrouter" => LlmBackend::OpenRouter,
            "ollama" => LlmBackend::Ollama,
            "lmstudio" => LlmBackend::LmStudio,
            _ => match &config.base_url {
                Some(base_url) => LlmBackend::OpenAICompatible {
                    base_url: base_url.clone(),
                },
                None => LlmBackend::Groq,
            },
        };

        let client = LlmApiClient::new(config)?;

        Ok(Self {
            backend,
            config: Arc::new(config.clone()),
            client,
        })
    }

    pub fn backend(&self) -> &LlmBackend {
        &self.backend
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Model identifier sent on the wire, without the provider prefix.
    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// Options every meeting prompt is sent with.
    pub fn default_options(&self) -> CompletionOptions {
        CompletionOptions {
            temperature: Some(self.config.temperature),
            max_tokens: self.config.max_tokens,
        }
    }

    pub async fn complete(
        &self,
        prompt: &str,
        options: Option<&CompletionOptions>,
    ) -> Result<String> {
        self.client.complete(prompt, options).await
    }
}
