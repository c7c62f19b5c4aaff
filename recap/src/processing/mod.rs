mod extractor;

pub mod extractors;

pub use extractor::DocumentExtractor;
pub use extractors::{ExtractedContent, MediaType};
