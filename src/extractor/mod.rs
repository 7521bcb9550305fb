pub mod page_extractor;

pub use page_extractor::{heading_text, ExtractionResult, Heading, HeadingLevel, PageExtractor};
