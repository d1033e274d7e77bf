use anyhow::Result;

/// Capability for turning text into vector embeddings.
///
/// Supplied by the caller; this crate never implements a model itself.
pub trait Embedder: Send + Sync {
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }
}
