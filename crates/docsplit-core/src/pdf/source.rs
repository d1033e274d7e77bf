//! Delegated PDF parsing via lopdf

use std::path::{Path, PathBuf};

use lopdf::{Document, Object};
use tracing::{debug, warn};

use super::{PageSource, PdfError};
use crate::models::{Page, PageMetadata};
use docsplit_config::PdfConfig;

/// Page source backed by `lopdf`.
///
/// Parsing, page enumeration, and text extraction are all delegated to the
/// library; this type only shapes the output into [`Page`] records and
/// applies the configured post-processing.
pub struct LopdfSource {
    path: PathBuf,
    config: PdfConfig,
}

impl LopdfSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_config(path, PdfConfig::default())
    }

    pub fn with_config(path: impl Into<PathBuf>, config: PdfConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PageSource for LopdfSource {
    fn load_and_split(&self) -> Result<Vec<Page>, PdfError> {
        let doc = Document::load(&self.path).map_err(|e| PdfError::Load {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        let metadata = extract_metadata(&doc);
        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        debug!(
            path = %self.path.display(),
            pages = page_numbers.len(),
            "extracting text per page"
        );

        let mut pages = Vec::with_capacity(page_numbers.len());
        for number in page_numbers {
            let mut text = doc.extract_text(&[number]).map_err(|e| PdfError::Extract {
                page: number,
                message: e.to_string(),
            })?;

            if self.config.normalize_whitespace {
                text = text.split_whitespace().collect::<Vec<_>>().join(" ");
            }

            if text.trim().is_empty() {
                warn!(page = number, "page has no extractable text");
                if self.config.skip_empty_pages {
                    continue;
                }
            }

            pages.push(Page {
                number,
                text,
                metadata: metadata.clone(),
            });
        }

        Ok(pages)
    }
}

/// Pull document metadata out of the Info dictionary, if present.
fn extract_metadata(doc: &Document) -> PageMetadata {
    let mut metadata = PageMetadata::default();

    let info = doc
        .trailer
        .get(b"Info")
        .ok()
        .and_then(|obj| match obj {
            Object::Reference(id) => doc.get_object(*id).ok(),
            other => Some(other),
        })
        .and_then(|obj| obj.as_dict().ok());

    if let Some(dict) = info {
        metadata.title = info_string(dict, b"Title");
        metadata.author = info_string(dict, b"Author");
        metadata.subject = info_string(dict, b"Subject");
        metadata.creator = info_string(dict, b"Creator");
        metadata.producer = info_string(dict, b"Producer");
        if let Some(keywords) = info_string(dict, b"Keywords") {
            metadata.keywords = keywords
                .split([',', ';'])
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect();
        }
    }

    metadata
}

fn info_string(dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    dict.get(key)
        .ok()
        .and_then(|obj| obj.as_str().ok())
        .and_then(|bytes| std::str::from_utf8(bytes).ok())
        .map(|s| s.to_string())
}
