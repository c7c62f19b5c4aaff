use crate::error::Result;
use crate::llm::{prompts, LlmProvider};

/// Produces the free-text meeting summary.
#[derive(Debug, Clone)]
pub struct Summarizer {
    llm: LlmProvider,
}

impl Summarizer {
    pub fn new(llm: LlmProvider) -> Self {
        Self { llm }
    }

    /// Summarize a transcript. An empty transcript is still sent.
    pub async fn summarize(&self, transcript: &str) -> Result<String> {
        let prompt = prompts::summary_prompt(transcript);
        let options = self.llm.default_options();

        tracing::debug!(
            transcript_len = transcript.len(),
            model = self.llm.model(),
            "Requesting meeting summary"
        );

        let content = self.llm.complete(&prompt, Some(&options)).await?;
        Ok(content.trim().to_string())
    }
}
