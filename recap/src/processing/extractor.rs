use crate::error::{RecapError, Result};
use crate::processing::extractors::{
    DocxExtractor, ExtractedContent, MediaType, PdfExtractor, TextExtractor,
};

/// Turns an uploaded transcript into plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentExtractor;

impl DocumentExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract text from an upload of a known type.
    ///
    /// Returns `Ok(None)` when the type is not one of text, PDF or DOCX;
    /// that case is not an error.
    pub fn extract(
        &self,
        bytes: &[u8],
        content_type: Option<&str>,
        file_name: Option<&str>,
    ) -> Result<Option<ExtractedContent>> {
        let Some(media_type) = MediaType::from_upload(content_type, file_name) else {
            tracing::debug!(
                content_type = content_type.unwrap_or("<none>"),
                file_name = file_name.unwrap_or("<none>"),
                "Unsupported upload type, no text extracted"
            );
            return Ok(None);
        };

        self.extract_as(bytes, media_type).map(Some)
    }

    pub fn extract_as(&self, bytes: &[u8], media_type: MediaType) -> Result<ExtractedContent> {
        let extracted = match media_type {
            MediaType::Text => TextExtractor::extract(bytes)?,
            MediaType::Pdf => PdfExtractor::extract(bytes)?,
            MediaType::Docx => DocxExtractor::extract(bytes)?,
        };

        tracing::info!(
            media_type = media_type.mime(),
            bytes = bytes.len(),
            words = extracted.word_count,
            "Transcript extracted"
        );

        Ok(extracted)
    }

    /// Run [`DocumentExtractor::extract`] on a blocking worker thread.
    pub async fn extract_upload(
        &self,
        bytes: Vec<u8>,
        content_type: Option<String>,
        file_name: Option<String>,
    ) -> Result<Option<ExtractedContent>> {
        let extractor = *self;
        run_blocking(move || {
            extractor.extract(&bytes, content_type.as_deref(), file_name.as_deref())
        })
        .await
    }
}

/// Run a decoder on the blocking pool. A panic inside the decoder ends that
/// worker only and comes back as an internal error.
async fn run_blocking<T, F>(task: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| RecapError::Internal(format!("Extraction task failed: {e}")))?
}
