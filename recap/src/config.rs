use std::env;
use std::path::PathBuf;

use crate::error::{RecapError, Result};

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

fn parse_env_opt<T: std::str::FromStr>(var: &str) -> Option<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Ignoring.", val, var, e);
                None
            }
        },
        Err(_) => None,
    }
}

/// Read a variable, treating an empty or whitespace-only value as unset.
fn non_empty_env(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub const DEFAULT_LLM_MODEL: &str = "groq/llama3-70b-8192";
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_PORT: u16 = 8501;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 200 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound for upload and form bodies.
    pub max_upload_bytes: usize,
}

/// LLM configuration for the chat completion model
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// `provider/model`, e.g. `groq/llama3-70b-8192`.
    pub model: String,
    pub api_key: String,
    pub base_url: Option<String>,
    /// `None` leaves requests without a deadline.
    pub timeout_secs: Option<u64>,
    pub temperature: f32,
    /// Completion length cap; `None` lets the provider decide.
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: env::temp_dir(),
        }
    }
}

impl LlmConfig {
    /// Configuration with defaults for everything but the credential.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            model: DEFAULT_LLM_MODEL.to_string(),
            api_key: api_key.into(),
            base_url: None,
            timeout_secs: None,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: None,
        }
    }
}

impl Config {
    /// Build the configuration from process environment variables.
    ///
    /// The API credential is mandatory: `LLM_API_KEY` is preferred and
    /// `GROQ_API_KEY` is accepted as a fallback. Without either the server
    /// refuses to start.
    pub fn from_env() -> Result<Self> {
        let api_key = non_empty_env("LLM_API_KEY")
            .or_else(|| non_empty_env("GROQ_API_KEY"))
            .ok_or_else(|| {
                RecapError::Config(
                    "LLM_API_KEY (or GROQ_API_KEY) is missing. Please check your .env file."
                        .to_string(),
                )
            })?;

        let server = ServerConfig {
            host: env::var("RECAP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_env_or("RECAP_PORT", DEFAULT_PORT),
            max_upload_bytes: parse_env_or("RECAP_MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES),
        };

        let llm = LlmConfig {
            model: non_empty_env("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            api_key,
            base_url: non_empty_env("LLM_BASE_URL"),
            timeout_secs: parse_env_opt("LLM_TIMEOUT"),
            temperature: parse_env_or("LLM_TEMPERATURE", DEFAULT_TEMPERATURE),
            max_tokens: parse_env_opt("LLM_MAX_TOKENS"),
        };

        let report = ReportConfig {
            output_dir: non_empty_env("REPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(env::temp_dir),
        };

        Ok(Self {
            server,
            llm,
            report,
        })
    }
}

/// Known LLM providers that use OpenAI-compatible APIs
pub const KNOWN_LLM_PROVIDERS: &[&str] = &["groq", "openai", "openrouter", "ollama", "lmstudio"];

/// Parse an LLM model name into (provider, model) tuple.
pub fn parse_llm_provider_model(model: &str) -> (&str, &str) {
    if let Some((prefix, rest)) = model.split_once('/') {
        let prefix_lower = prefix.to_lowercase();
        if KNOWN_LLM_PROVIDERS.contains(&prefix_lower.as_str()) {
            return (prefix, rest);
        }
    }
    // Default to treating the whole string as a local model
    ("local", model)
}
