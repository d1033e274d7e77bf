//! PDF extraction configuration

use serde::{Deserialize, Serialize};

use crate::validation::Validate;

/// Configuration for PDF page extraction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PdfConfig {
    /// Drop pages whose extracted text is blank
    ///
    /// Retained pages keep their original PDF page numbers.
    #[serde(default)]
    pub skip_empty_pages: bool,

    /// Collapse whitespace runs in extracted page text
    ///
    /// Extraction inserts line breaks at layout boundaries; enabling this
    /// joins them into single spaces.
    #[serde(default)]
    pub normalize_whitespace: bool,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            skip_empty_pages: false,
            normalize_whitespace: false,
        }
    }
}

impl Validate for PdfConfig {
    fn validate(&self) -> crate::error::Result<()> {
        // Both fields are plain booleans; nothing to check beyond types.
        Ok(())
    }
}
