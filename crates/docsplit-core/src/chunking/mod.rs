//! Semantic text chunking
//!
//! [`SemanticChunking`] is a thin accessor over the delegated
//! [`SemanticSplitter`]: configure it with an embedding model and a
//! breakpoint threshold type, split text into chunks, and read the result
//! back with 0-indexed bounds-checked access. The chunk sequence is held by
//! the caller, not cached here; each split call is independent.

pub mod breakpoints;
pub mod segmenter;
mod semantic;

pub use docsplit_config::{BreakpointThresholdType, ChunkingConfig};
pub use segmenter::SentenceSplitter;
pub use semantic::SemanticSplitter;

use std::sync::Arc;

use thiserror::Error;

use crate::models::Chunk;
use crate::traits::Embedder;

/// Errors from the chunking wrapper and its delegated splitter
#[derive(Debug, Error)]
pub enum ChunkError {
    /// Chunk index outside the supplied chunk sequence
    #[error("{}", out_of_range_message(.index, .total))]
    ChunkOutOfRange { index: usize, total: usize },

    /// The injected embedding model failed
    #[error("embedding failed: {0}")]
    Embedding(anyhow::Error),

    /// The embedding model returned the wrong number of vectors
    #[error("embedding count mismatch: got {got}, expected {expected}")]
    EmbeddingCountMismatch { got: usize, expected: usize },
}

fn out_of_range_message(index: &usize, total: &usize) -> String {
    if *total == 0 {
        format!("chunk index {} is out of range; no chunks available", index)
    } else {
        format!(
            "chunk index {} is out of range for {} chunks; valid range is 0 to {}",
            index,
            total,
            total - 1
        )
    }
}

/// Splits text into semantically coherent chunks via an injected embedding
/// model.
pub struct SemanticChunking {
    splitter: SemanticSplitter,
}

impl SemanticChunking {
    /// Configure a chunker with the given embedding model and breakpoint
    /// threshold type. Pure configuration, no I/O.
    pub fn new(embedder: Arc<dyn Embedder>, threshold_type: BreakpointThresholdType) -> Self {
        Self::with_config(
            embedder,
            ChunkingConfig {
                breakpoint_threshold_type: threshold_type,
                ..ChunkingConfig::default()
            },
        )
    }

    /// Configure a chunker with full control over the chunking settings.
    pub fn with_config(embedder: Arc<dyn Embedder>, config: ChunkingConfig) -> Self {
        Self {
            splitter: SemanticSplitter::new(embedder, config),
        }
    }

    /// Split `text` into an ordered chunk sequence.
    ///
    /// The result is not cached; keep it around for the accessors below.
    pub fn split_text(&self, text: &str) -> Result<Vec<Chunk>, ChunkError> {
        self.splitter.split(text)
    }

    /// Text payload of the chunk at the given 0-indexed position.
    pub fn get_chunk<'a>(&self, chunks: &'a [Chunk], index: usize) -> Result<&'a str, ChunkError> {
        chunks
            .get(index)
            .map(|chunk| chunk.text.as_str())
            .ok_or(ChunkError::ChunkOutOfRange {
                index,
                total: chunks.len(),
            })
    }

    /// Number of chunks in the supplied sequence.
    pub fn total_chunks(&self, chunks: &[Chunk]) -> usize {
        chunks.len()
    }
}
