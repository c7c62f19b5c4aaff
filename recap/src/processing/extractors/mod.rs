use serde::Serialize;

/// Upload formats the transcript extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Text,
    Pdf,
    Docx,
}

impl MediaType {
    pub const TEXT_MIME: &'static str = "text/plain";
    pub const PDF_MIME: &'static str = "application/pdf";
    pub const DOCX_MIME: &'static str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

    pub fn mime(&self) -> &'static str {
        match self {
            MediaType::Text => Self::TEXT_MIME,
            MediaType::Pdf => Self::PDF_MIME,
            MediaType::Docx => Self::DOCX_MIME,
        }
    }

    /// Match a declared media type, ignoring parameters and case.
    pub fn from_mime(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            Self::TEXT_MIME => Some(MediaType::Text),
            Self::PDF_MIME => Some(MediaType::Pdf),
            Self::DOCX_MIME => Some(MediaType::Docx),
            _ => None,
        }
    }

    /// Resolve the type of an upload.
    ///
    /// The declared type wins. Only when the browser declares nothing useful
    /// (missing or `application/octet-stream`) is the file name consulted.
    pub fn from_upload(content_type: Option<&str>, file_name: Option<&str>) -> Option<Self> {
        let declared = content_type
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .filter(|value| !value.eq_ignore_ascii_case("application/octet-stream"));

        match declared {
            Some(content_type) => Self::from_mime(content_type),
            None => file_name
                .and_then(|name| mime_guess::from_path(name).first())
                .and_then(|guess| Self::from_mime(guess.essence_str())),
        }
    }
}

#[derive(Debug)]
pub struct ExtractedContent {
    pub text: String,
    pub media_type: MediaType,
    pub word_count: usize,
}

impl ExtractedContent {
    pub fn new(text: String, media_type: MediaType) -> Self {
        let word_count = text.split_whitespace().count();
        Self {
            text,
            media_type,
            word_count,
        }
    }
}

pub mod docx;
pub mod pdf;
pub mod text;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use text::TextExtractor;
