//! Configuration type definitions

mod chunking;
mod pdf;

pub use chunking::{BreakpointThresholdType, ChunkingConfig};
pub use pdf::PdfConfig;

use crate::validation::Validate;
use serde::{Deserialize, Serialize};

/// Main configuration struct aggregating all settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Semantic chunking settings
    #[serde(default)]
    pub chunking: ChunkingConfig,

    /// PDF extraction settings
    #[serde(default)]
    pub pdf: PdfConfig,
}

impl Validate for Config {
    fn validate(&self) -> crate::error::Result<()> {
        self.chunking.validate()?;
        self.pdf.validate()?;
        Ok(())
    }
}
