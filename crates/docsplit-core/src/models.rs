use serde::{Deserialize, Serialize};

/// One page of PDF content as produced by the page source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page {
    /// 1-indexed PDF page number
    pub number: u32,
    /// Extracted text content
    pub text: String,
    /// Document-level metadata, identical across pages of one document
    pub metadata: PageMetadata,
}

/// Metadata from the PDF Info dictionary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub keywords: Vec<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
}

/// One semantically coherent piece of text produced by the splitter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chunk {
    /// Text payload
    pub text: String,
    /// Number of sentences merged into this chunk
    pub sentences: usize,
}
