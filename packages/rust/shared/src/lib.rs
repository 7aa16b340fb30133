//! Shared types, error model, and configuration for bpdocs.
//!
//! This crate is the foundation depended on by all other bpdocs crates.
//! It provides:
//! - [`BpDocsError`] — the unified error type
//! - Domain types ([`BlueprintRecord`], [`AttributeDescriptor`], [`AttributeType`])
//! - Configuration ([`AppConfig`], [`SimulatorConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DEFAULT_FILTER, DEFAULT_HOST, DEFAULT_OUTPUT_PATH, DEFAULT_PORT,
    DEFAULT_TIMEOUT_MS, OutputConfig, SimulatorConfig, config_dir, config_file_path, load_config,
    load_config_from,
};
pub use error::{BpDocsError, Result};
pub use types::{AttributeDescriptor, AttributeType, BlueprintLibrary, BlueprintRecord};
