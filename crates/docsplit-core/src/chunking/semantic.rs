//! The delegated semantic splitter
//!
//! Embeds sentences via the injected [`Embedder`], measures the cosine
//! distance between consecutive embeddings, and starts a new chunk wherever
//! the distance jumps above the configured breakpoint cutoff.

use std::sync::Arc;

use tracing::{debug, warn};

use super::breakpoints::{breakpoint_threshold, cosine_similarity};
use super::segmenter::SentenceSplitter;
use super::ChunkError;
use crate::models::Chunk;
use crate::traits::Embedder;
use docsplit_config::ChunkingConfig;

/// Embedding-based text splitter.
pub struct SemanticSplitter {
    embedder: Arc<dyn Embedder>,
    config: ChunkingConfig,
    segmenter: SentenceSplitter,
}

impl SemanticSplitter {
    pub fn new(embedder: Arc<dyn Embedder>, config: ChunkingConfig) -> Self {
        Self {
            embedder,
            config,
            segmenter: SentenceSplitter::new(),
        }
    }

    pub fn config(&self) -> &ChunkingConfig {
        &self.config
    }

    /// Split `text` into semantically coherent chunks.
    ///
    /// Blank input produces no chunks; a single sentence is returned as one
    /// chunk without consulting the embedder.
    pub fn split(&self, text: &str) -> Result<Vec<Chunk>, ChunkError> {
        let sentences = self.segmenter.split(text);
        if sentences.is_empty() {
            warn!("input has no sentences; producing no chunks");
            return Ok(Vec::new());
        }
        if sentences.len() == 1 {
            warn!("input has a single sentence; returning it as one chunk");
            return Ok(vec![Chunk {
                text: sentences.into_iter().next().unwrap_or_default(),
                sentences: 1,
            }]);
        }

        let merged = merge_with_buffer(&sentences, self.config.buffer_size);
        let embeddings = self
            .embedder
            .embed_batch(&merged)
            .map_err(ChunkError::Embedding)?;
        if embeddings.len() != merged.len() {
            return Err(ChunkError::EmbeddingCountMismatch {
                got: embeddings.len(),
                expected: merged.len(),
            });
        }

        let distances: Vec<f32> = embeddings
            .windows(2)
            .map(|pair| 1.0 - cosine_similarity(&pair[0], &pair[1]))
            .collect();
        let cutoff = breakpoint_threshold(
            &distances,
            self.config.breakpoint_threshold_type,
            self.config.threshold_amount(),
        );
        debug!(
            sentences = sentences.len(),
            threshold_type = %self.config.breakpoint_threshold_type,
            cutoff,
            "computed breakpoint cutoff"
        );

        let mut chunks = Vec::new();
        let mut start = 0;
        for (i, distance) in distances.iter().enumerate() {
            if *distance > cutoff {
                chunks.push(make_chunk(&sentences[start..=i]));
                start = i + 1;
            }
        }
        chunks.push(make_chunk(&sentences[start..]));

        debug!(chunks = chunks.len(), "split text into chunks");
        Ok(chunks)
    }
}

/// Combine each sentence with up to `buffer` neighbors on each side.
///
/// The merged strings are what gets embedded; boundaries are still placed
/// between the original sentences.
fn merge_with_buffer(sentences: &[String], buffer: usize) -> Vec<String> {
    (0..sentences.len())
        .map(|i| {
            let lo = i.saturating_sub(buffer);
            let hi = (i + buffer).min(sentences.len() - 1);
            sentences[lo..=hi].join(" ")
        })
        .collect()
}

fn make_chunk(sentences: &[String]) -> Chunk {
    Chunk {
        text: sentences.join(" "),
        sentences: sentences.len(),
    }
}
