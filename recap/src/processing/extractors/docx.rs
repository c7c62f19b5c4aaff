use super::{ExtractedContent, MediaType};
use crate::error::{RecapError, Result};

pub struct DocxExtractor;

impl DocxExtractor {
    /// Concatenate body paragraphs in document order, one per line.
    ///
    /// Empty paragraphs are kept as empty lines. Tables are not body
    /// paragraphs and are skipped.
    pub fn extract(bytes: &[u8]) -> Result<ExtractedContent> {
        let docx = docx_rs::read_docx(bytes)
            .map_err(|e| RecapError::Extraction(format!("DOCX parse error: {e}")))?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                docx_rs::DocumentChild::Paragraph(paragraph) => {
                    Some(Self::paragraph_text(paragraph))
                }
                _ => None,
            })
            .collect();

        Ok(ExtractedContent::new(paragraphs.join("\n"), MediaType::Docx))
    }

    fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
        let mut content = String::new();
        Self::push_children(&paragraph.children, &mut content);
        content
    }

    /// Runs and hyperlinks (whose children are runs again) in order.
    fn push_children(children: &[docx_rs::ParagraphChild], content: &mut String) {
        for child in children {
            match child {
                docx_rs::ParagraphChild::Run(run) => Self::push_run(run, content),
                docx_rs::ParagraphChild::Hyperlink(link) => {
                    Self::push_children(&link.children, content)
                }
                _ => {}
            }
        }
    }

    fn push_run(run: &docx_rs::Run, content: &mut String) {
        for run_child in &run.children {
            match run_child {
                docx_rs::RunChild::Text(text) => content.push_str(&text.text),
                docx_rs::RunChild::Tab(_) => content.push('\t'),
                docx_rs::RunChild::Break(_) => content.push('\n'),
                _ => {}
            }
        }
    }
}
