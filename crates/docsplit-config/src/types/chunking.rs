//! Semantic chunking configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::validation::{validate_positive, validate_range, Validate};

/// Configuration for semantic chunking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChunkingConfig {
    /// Statistical method used to turn embedding distances into chunk
    /// boundaries
    #[serde(default)]
    pub breakpoint_threshold_type: BreakpointThresholdType,

    /// Threshold amount for the selected method
    ///
    /// Interpretation depends on the method:
    /// - percentile: percentile of the distance distribution (0-100]
    /// - standard_deviation: multiplier on the standard deviation
    /// - interquartile: multiplier on the interquartile range
    ///
    /// When unset, the per-method default applies.
    #[serde(default)]
    pub breakpoint_threshold_amount: Option<f64>,

    /// Neighbor sentences merged into each sentence before embedding
    ///
    /// Smooths out single-sentence noise. 0 embeds each sentence alone.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

/// Statistical method for deciding chunk boundaries from embedding-distance
/// jumps
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BreakpointThresholdType {
    /// Break above the Nth percentile of distances (default amount: 95.0)
    Percentile,
    /// Break above mean + N standard deviations (default amount: 3.0)
    StandardDeviation,
    /// Break above mean + N interquartile ranges (default amount: 1.5)
    Interquartile,
}

impl BreakpointThresholdType {
    /// Default threshold amount for this method
    pub fn default_amount(&self) -> f64 {
        match self {
            BreakpointThresholdType::Percentile => 95.0,
            BreakpointThresholdType::StandardDeviation => 3.0,
            BreakpointThresholdType::Interquartile => 1.5,
        }
    }
}

impl Default for BreakpointThresholdType {
    fn default() -> Self {
        BreakpointThresholdType::Percentile
    }
}

impl FromStr for BreakpointThresholdType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "percentile" => Ok(Self::Percentile),
            "standard_deviation" => Ok(Self::StandardDeviation),
            "interquartile" => Ok(Self::Interquartile),
            _ => Err(ConfigError::ValidationError {
                field: "chunking.breakpoint_threshold_type".to_string(),
                message: format!(
                    "unknown threshold type '{}'. Use: percentile, standard_deviation, interquartile",
                    s
                ),
            }),
        }
    }
}

impl fmt::Display for BreakpointThresholdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Percentile => "percentile",
            Self::StandardDeviation => "standard_deviation",
            Self::Interquartile => "interquartile",
        };
        write!(f, "{}", name)
    }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            breakpoint_threshold_type: BreakpointThresholdType::default(),
            breakpoint_threshold_amount: None,
            buffer_size: default_buffer_size(),
        }
    }
}

impl ChunkingConfig {
    /// Threshold amount, falling back to the per-method default
    pub fn threshold_amount(&self) -> f64 {
        self.breakpoint_threshold_amount
            .unwrap_or_else(|| self.breakpoint_threshold_type.default_amount())
    }
}

impl Validate for ChunkingConfig {
    fn validate(&self) -> crate::error::Result<()> {
        if let Some(amount) = self.breakpoint_threshold_amount {
            match self.breakpoint_threshold_type {
                BreakpointThresholdType::Percentile => {
                    // Allowed interval is (0, 100]: a 0th-percentile cutoff
                    // would break at nearly every sentence gap.
                    validate_positive("chunking.breakpoint_threshold_amount", amount)?;
                    validate_range("chunking.breakpoint_threshold_amount", amount, 0.0, 100.0)?;
                }
                BreakpointThresholdType::StandardDeviation
                | BreakpointThresholdType::Interquartile => {
                    validate_positive("chunking.breakpoint_threshold_amount", amount)?;
                }
            }
        }
        Ok(())
    }
}

fn default_buffer_size() -> usize {
    1 // One neighbor each side, enough to damp single-sentence noise
}
