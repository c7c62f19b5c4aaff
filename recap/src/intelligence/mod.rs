pub mod action_items;
pub mod deadline;
pub mod summarizer;

pub use action_items::{parse_action_items, ActionItemExtractor};
pub use deadline::{normalize_deadline, normalize_deadlines, parse_deadline};
pub use summarizer::Summarizer;
