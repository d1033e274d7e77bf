//! PDF loading and page splitting
//!
//! [`PageLoader`] is a thin accessor over a delegated [`PageSource`]: it
//! runs the parse once, caches the resulting page sequence, and exposes
//! 1-indexed bounds-checked access plus a count. The default source is
//! [`LopdfSource`], which delegates parsing to `lopdf`.

mod source;

pub use source::LopdfSource;

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::models::Page;
use docsplit_config::PdfConfig;

/// Errors from the page loader and its delegated source
#[derive(Debug, Error)]
pub enum PdfError {
    /// Accessor called before `load_and_split()`
    #[error("the PDF has not been loaded yet; call load_and_split() first")]
    NotLoaded,

    /// Page number outside the cached page sequence
    #[error("page number {number} is out of range; valid range is 1 to {total}")]
    PageOutOfRange { number: usize, total: usize },

    /// The delegated parser failed to open the document
    #[error("failed to load PDF {path}: {message}")]
    Load { path: PathBuf, message: String },

    /// The delegated parser failed to extract a page
    #[error("failed to extract text from page {page}: {message}")]
    Extract { page: u32, message: String },
}

/// Delegated PDF parsing/splitting capability.
///
/// One call produces the whole ordered page sequence. Implemented by
/// [`LopdfSource`]; tests substitute doubles.
pub trait PageSource: Send + Sync {
    fn load_and_split(&self) -> Result<Vec<Page>, PdfError>;
}

/// Loads a PDF, splits it into pages, and serves them by page number.
pub struct PageLoader {
    source: Box<dyn PageSource>,
    pages: Option<Vec<Page>>,
}

impl PageLoader {
    /// Create a loader for the PDF at `path` with default extraction
    /// settings. No I/O happens until [`PageLoader::load_and_split`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_source(Box::new(LopdfSource::new(path)))
    }

    /// Create a loader for the PDF at `path` with explicit extraction
    /// settings.
    pub fn with_config(path: impl Into<PathBuf>, config: PdfConfig) -> Self {
        Self::with_source(Box::new(LopdfSource::with_config(path, config)))
    }

    /// Create a loader over an arbitrary page source.
    pub fn with_source(source: Box<dyn PageSource>) -> Self {
        Self {
            source,
            pages: None,
        }
    }

    /// Parse the document and split it into pages, caching the result.
    ///
    /// Calling this again re-runs the parse and overwrites the cache; the
    /// previously returned sequence is discarded, not merged.
    pub fn load_and_split(&mut self) -> Result<&[Page], PdfError> {
        let pages = self.source.load_and_split()?;
        debug!(pages = pages.len(), "loaded and split document");
        Ok(self.pages.insert(pages))
    }

    /// Get a page by its 1-indexed position in the cached sequence.
    pub fn get_page(&self, page_number: usize) -> Result<&Page, PdfError> {
        let pages = self.pages.as_ref().ok_or(PdfError::NotLoaded)?;
        if page_number < 1 || page_number > pages.len() {
            return Err(PdfError::PageOutOfRange {
                number: page_number,
                total: pages.len(),
            });
        }
        Ok(&pages[page_number - 1])
    }

    /// Total number of loaded pages.
    pub fn total_pages(&self) -> Result<usize, PdfError> {
        let pages = self.pages.as_ref().ok_or(PdfError::NotLoaded)?;
        Ok(pages.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PageMetadata;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn page(number: u32, text: &str) -> Page {
        Page {
            number,
            text: text.to_string(),
            metadata: PageMetadata::default(),
        }
    }

    struct StubSource {
        pages: Vec<Page>,
    }

    impl PageSource for StubSource {
        fn load_and_split(&self) -> Result<Vec<Page>, PdfError> {
            Ok(self.pages.clone())
        }
    }

    struct FailingSource;

    impl PageSource for FailingSource {
        fn load_and_split(&self) -> Result<Vec<Page>, PdfError> {
            Err(PdfError::Load {
                path: PathBuf::from("broken.pdf"),
                message: "not a PDF".to_string(),
            })
        }
    }

    /// Returns one page whose text counts how many times the parse ran.
    struct CountingSource {
        calls: AtomicUsize,
    }

    impl PageSource for CountingSource {
        fn load_and_split(&self) -> Result<Vec<Page>, PdfError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(vec![page(1, &format!("parse {}", call))])
        }
    }

    fn three_page_loader() -> PageLoader {
        PageLoader::with_source(Box::new(StubSource {
            pages: vec![page(1, "first"), page(2, "second"), page(3, "third")],
        }))
    }

    #[test]
    fn test_get_page_before_load_fails() {
        let loader = three_page_loader();
        assert!(matches!(loader.get_page(1), Err(PdfError::NotLoaded)));
        assert!(matches!(loader.get_page(99), Err(PdfError::NotLoaded)));
    }

    #[test]
    fn test_total_pages_before_load_fails() {
        let loader = three_page_loader();
        assert!(matches!(loader.total_pages(), Err(PdfError::NotLoaded)));
    }

    #[test]
    fn test_three_page_scenario() {
        let mut loader = three_page_loader();
        let pages = loader.load_and_split().unwrap();
        assert_eq!(pages.len(), 3);

        assert_eq!(loader.total_pages().unwrap(), 3);
        assert_eq!(loader.get_page(1).unwrap().text, "first");
        assert_eq!(loader.get_page(3).unwrap().text, "third");
        assert!(matches!(
            loader.get_page(4),
            Err(PdfError::PageOutOfRange { number: 4, total: 3 })
        ));
    }

    #[test]
    fn test_every_valid_page_number_maps_to_position() {
        let mut loader = three_page_loader();
        let expected: Vec<Page> = loader.load_and_split().unwrap().to_vec();
        for (i, want) in expected.iter().enumerate() {
            assert_eq!(loader.get_page(i + 1).unwrap(), want);
        }
    }

    #[test]
    fn test_page_zero_is_out_of_range() {
        let mut loader = three_page_loader();
        loader.load_and_split().unwrap();
        assert!(matches!(
            loader.get_page(0),
            Err(PdfError::PageOutOfRange { number: 0, total: 3 })
        ));
    }

    #[test]
    fn test_out_of_range_message_states_bounds() {
        let mut loader = three_page_loader();
        loader.load_and_split().unwrap();
        let err = loader.get_page(4).unwrap_err();
        assert_eq!(
            err.to_string(),
            "page number 4 is out of range; valid range is 1 to 3"
        );
    }

    #[test]
    fn test_source_failure_propagates() {
        let mut loader = PageLoader::with_source(Box::new(FailingSource));
        assert!(matches!(loader.load_and_split(), Err(PdfError::Load { .. })));
        // Cache stays unset after a failed load
        assert!(matches!(loader.total_pages(), Err(PdfError::NotLoaded)));
    }

    #[test]
    fn test_reload_refreshes_cache() {
        let mut loader = PageLoader::with_source(Box::new(CountingSource {
            calls: AtomicUsize::new(0),
        }));
        loader.load_and_split().unwrap();
        assert_eq!(loader.get_page(1).unwrap().text, "parse 1");

        loader.load_and_split().unwrap();
        assert_eq!(loader.get_page(1).unwrap().text, "parse 2");
        assert_eq!(loader.total_pages().unwrap(), 1);
    }
}
