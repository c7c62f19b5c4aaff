use crate::models::ActionItem;

pub const REPORT_TITLE: &str = "Meeting Summary Report";
pub const SUMMARY_HEADING: &str = "Summary:";
pub const ACTION_ITEMS_HEADING: &str = "Key Action Items:";

/// One vertical element of the report, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Centered bold title.
    Title(String),
    Heading(String),
    /// Word-wrapped body text; embedded newlines start new lines.
    Paragraph(String),
    Spacer,
}

/// The fixed report template filled with one analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLayout {
    pub blocks: Vec<Block>,
}

impl ReportLayout {
    pub fn build(summary: &str, action_items: &[ActionItem]) -> Self {
        let mut blocks = vec![
            Block::Title(REPORT_TITLE.to_string()),
            Block::Spacer,
            Block::Heading(SUMMARY_HEADING.to_string()),
            Block::Paragraph(summary.to_string()),
            Block::Spacer,
            Block::Heading(ACTION_ITEMS_HEADING.to_string()),
        ];
        blocks.extend(
            action_items
                .iter()
                .map(|item| Block::Paragraph(item.report_line())),
        );

        Self { blocks }
    }

    /// Plain-text rendering, one block per line, spacers as blank lines.
    pub fn to_text(&self) -> String {
        self.blocks
            .iter()
            .map(|block| match block {
                Block::Title(text) | Block::Heading(text) | Block::Paragraph(text) => text.as_str(),
                Block::Spacer => "",
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Greedy word wrap at `max_chars` columns.
///
/// Existing line breaks are kept, blank lines survive as empty strings and
/// words longer than a line are split.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        let raw_line = raw_line.trim_end_matches('\r');
        let mut current = String::new();
        let mut current_len = 0usize;

        for word in raw_line.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > max_chars {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(max_chars);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let needed = if current_len == 0 {
                word.len()
            } else {
                current_len + 1 + word.len()
            };

            if needed > max_chars && current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }

            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current_len += word.len();
            current.extend(word);
        }

        lines.push(current);
    }

    lines
}
