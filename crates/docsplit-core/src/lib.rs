//! Core building blocks for docsplit
//!
//! Two independent components:
//! - [`pdf::PageLoader`] loads a PDF, splits it into pages, and exposes
//!   1-indexed bounds-checked access over the cached page sequence.
//! - [`chunking::SemanticChunking`] splits raw text into semantically
//!   coherent chunks using an injected embedding model, with 0-indexed
//!   bounds-checked access over a caller-held chunk sequence.
//!
//! Both delegate the actual parsing/splitting to a collaborator behind a
//! trait seam, so callers can substitute test doubles.

pub mod chunking;
pub mod models;
pub mod pdf;
pub mod traits;

pub use chunking::{ChunkError, SemanticChunking};
pub use models::{Chunk, Page, PageMetadata};
pub use pdf::{PageLoader, PageSource, PdfError};
pub use traits::Embedder;
