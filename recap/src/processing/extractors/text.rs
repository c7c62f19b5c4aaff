use super::{ExtractedContent, MediaType};
use crate::error::{RecapError, Result};

pub struct TextExtractor;

impl TextExtractor {
    /// Decode the upload as UTF-8, verbatim. Invalid bytes are an error.
    pub fn extract(bytes: &[u8]) -> Result<ExtractedContent> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| RecapError::Extraction(format!("Text is not valid UTF-8: {e}")))?;

        Ok(ExtractedContent::new(text.to_string(), MediaType::Text))
    }
}
