use serde::{Deserialize, Serialize};

use crate::processing::ExtractedContent;

/// Response body for `POST /v1/transcripts:extract`.
///
/// `supported` is `false` when the upload is not text, PDF or DOCX; the
/// transcript is then empty, mirroring the browser preview.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractTranscriptResponse {
    pub file_name: Option<String>,
    /// Media type the upload was decoded as, when supported.
    pub media_type: Option<String>,
    pub supported: bool,
    pub transcript: String,
    pub word_count: usize,
}

impl ExtractTranscriptResponse {
    pub fn from_content(file_name: Option<String>, content: Option<ExtractedContent>) -> Self {
        match content {
            Some(content) => Self {
                file_name,
                media_type: Some(content.media_type.mime().to_string()),
                supported: true,
                word_count: content.word_count,
                transcript: content.text,
            },
            None => Self {
                file_name,
                media_type: None,
                supported: false,
                transcript: String::new(),
                word_count: 0,
            },
        }
    }
}
