//! Configuration module for pagesift
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. All settings have defaults, so a configuration file is optional.
//!
//! # Example
//!
//! ```no_run
//! use pagesift::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("pagesift.toml")).unwrap();
//! println!("User agent: {}", config.client.user_agent());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{AnalysisConfig, ClientConfig, Config};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
