//! Prompt templates for the meeting analysis calls.
//!
//! Both templates embed the transcript verbatim at the end of the prompt.

/// Build the prompt asking for a free-text meeting summary.
///
/// # Example
/// ```
/// use recap::llm::prompts::summary_prompt;
///
/// let prompt = summary_prompt("Alice: let's ship on Friday.");
/// assert!(prompt.contains("ship on Friday"));
/// ```
pub fn summary_prompt(transcript: &str) -> String {
    format!(
        r#"Summarize the following meeting transcript in a concise and informative way.
Highlight the key discussion points, decisions made, and important takeaways.

Transcript:
{transcript}"#
    )
}

/// Build the prompt asking for a JSON array of action items.
///
/// The model is told to answer with objects carrying exactly `person`,
/// `action` and `deadline`, leaving `deadline` empty when none is mentioned.
pub fn action_items_prompt(transcript: &str) -> String {
    format!(
        r#"You are an AI that extracts structured action items from meeting transcripts.
Identify action items, responsible persons, and deadlines where available.
Return the output as a JSON list with these keys: 'person', 'action', and 'deadline'.

Ensure the deadline is extracted accurately. If no deadline is mentioned, leave it empty.

Respond with valid JSON only. Example format:
[
  {{"person": "Alice", "action": "Send the quarterly report", "deadline": "next Friday"}},
  {{"person": "Bob", "action": "Book the venue", "deadline": ""}}
]

Transcript:
{transcript}"#
    )
}
