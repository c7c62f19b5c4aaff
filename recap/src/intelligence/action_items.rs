use chrono::{DateTime, Local};
use serde_json::Value;

use crate::error::{ActionItemParseError, Result};
use crate::llm::{prompts, LlmProvider};
use crate::models::ActionItem;

use super::deadline::normalize_deadlines;

/// Asks the model for action items and turns its answer into typed records.
#[derive(Debug, Clone)]
pub struct ActionItemExtractor {
    llm: LlmProvider,
}

impl ActionItemExtractor {
    pub fn new(llm: LlmProvider) -> Self {
        Self { llm }
    }

    /// Extract action items, resolving deadlines against the current time.
    pub async fn extract(&self, transcript: &str) -> Result<Vec<ActionItem>> {
        self.extract_at(transcript, Local::now()).await
    }

    pub async fn extract_at(
        &self,
        transcript: &str,
        now: DateTime<Local>,
    ) -> Result<Vec<ActionItem>> {
        let prompt = prompts::action_items_prompt(transcript);
        let options = self.llm.default_options();

        let content = self.llm.complete(&prompt, Some(&options)).await?;
        let items = parse_action_items(&content).map_err(|error| {
            tracing::error!(
                response_len = content.len(),
                response_preview = %content.chars().take(100).collect::<String>(),
                error = %error,
                "Failed to parse action items"
            );
            error
        })?;

        tracing::debug!(count = items.len(), "Action items parsed");
        Ok(normalize_deadlines(items, now))
    }
}

/// Parse the model's answer strictly as a JSON array of action items.
///
/// Every element must carry `person`, `action` and `deadline` as strings.
/// The whole answer is rejected on the first bad element.
pub fn parse_action_items(
    content: &str,
) -> std::result::Result<Vec<ActionItem>, ActionItemParseError> {
    let value: Value =
        serde_json::from_str(content).map_err(ActionItemParseError::MalformedJson)?;

    let elements = match value {
        Value::Array(elements) => elements,
        other => {
            return Err(ActionItemParseError::NotAnArray {
                found: json_kind(&other),
            })
        }
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            serde_json::from_value::<ActionItem>(element)
                .map_err(|source| ActionItemParseError::InvalidItem { index, source })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
