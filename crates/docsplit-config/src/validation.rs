//! Validation trait and helpers for configuration types

use crate::error::{ConfigError, Result};

/// Trait for validating configuration values
///
/// Implement this trait for any config type that needs validation beyond
/// type-level checks. Validation should provide helpful error messages.
pub trait Validate {
    /// Validate the configuration
    ///
    /// Returns `Ok(())` if validation passes, or a `ConfigError` describing
    /// what validation failed and why.
    fn validate(&self) -> Result<()>;
}

/// Helper function to validate value is within range (inclusive)
pub fn validate_range(field: impl Into<String>, value: f64, min: f64, max: f64) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(ConfigError::OutOfRange {
            field: field.into(),
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Helper function to validate value is strictly positive
pub fn validate_positive(field: impl Into<String>, value: f64) -> Result<()> {
    if value <= 0.0 {
        return Err(ConfigError::ValidationError {
            field: field.into(),
            message: format!("must be positive, got {}", value),
        });
    }
    Ok(())
}
