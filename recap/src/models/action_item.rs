use serde::{Deserialize, Serialize};

/// Sentinel stored in place of a deadline the date parser could not read.
pub const UNCLEAR_DEADLINE: &str = "Unclear deadline";

/// One follow-up task extracted from a meeting.
///
/// All three fields are required when deserializing model output; a missing
/// key is a validation error rather than an empty default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ActionItem {
    pub person: String,
    pub action: String,
    /// `YYYY-MM-DD`, [`UNCLEAR_DEADLINE`], or empty when none was mentioned.
    pub deadline: String,
}

impl ActionItem {
    pub fn new(
        person: impl Into<String>,
        action: impl Into<String>,
        deadline: impl Into<String>,
    ) -> Self {
        Self {
            person: person.into(),
            action: action.into(),
            deadline: deadline.into(),
        }
    }

    /// Line used for the item in the PDF report.
    pub fn report_line(&self) -> String {
        format!(
            "- {}: {} (Deadline: {})",
            self.person, self.action, self.deadline
        )
    }
}
