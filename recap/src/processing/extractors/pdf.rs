use super::{ExtractedContent, MediaType};
use crate::error::{RecapError, Result};

pub struct PdfExtractor;

impl PdfExtractor {
    pub fn extract(bytes: &[u8]) -> Result<ExtractedContent> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| RecapError::Extraction(format!("PDF extraction failed: {e}")))?;

        tracing::debug!(pages = pages.len(), "PDF text layer read");

        Ok(ExtractedContent::new(
            Self::join_pages(pages),
            MediaType::Pdf,
        ))
    }

    /// Join page texts with newlines, dropping pages without a text layer.
    pub fn join_pages<I, S>(pages: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        pages
            .into_iter()
            .filter_map(|page| {
                let text = page.as_ref().trim_matches(|c| c == '\n' || c == '\r');
                if text.trim().is_empty() {
                    None
                } else {
                    Some(text.to_string())
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
