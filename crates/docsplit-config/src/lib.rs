//! Configuration management for docsplit
//!
//! This crate provides a validated configuration system with support for:
//! - Multiple formats (YAML, TOML, JSON)
//! - Config validation with helpful error messages
//! - Type-safe configuration structs
//!
//! # Example
//!
//! ```no_run
//! use docsplit_config::Config;
//!
//! // Load from default location (.docsplit.{yml,toml,json})
//! let config = Config::load()?;
//!
//! // Or load from specific file
//! let config = Config::from_file("path/to/config.toml")?;
//!
//! // Access config values
//! let threshold = config.chunking.breakpoint_threshold_type;
//! let buffer = config.chunking.buffer_size;
//! # Ok::<(), docsplit_config::ConfigError>(())
//! ```

pub mod error;
pub mod loader;
pub mod types;
pub mod validation;

// Re-export main types for convenience
pub use error::{ConfigError, Result};
pub use loader::ConfigFormat;
pub use types::*;

/// Trait for config validation
pub use validation::Validate;
