//! templacat is a minimal templating library.
//! It loads plain-text template fragments from files, substitutes
//! `{{%name%}}` placeholders with caller-supplied values and renders the
//! result. There are no loops, conditionals or filters.

/// Command-line interface module for the templacat binary
pub mod cli;

/// Configuration file handling
/// Supports JSON and YAML formats (templacat.json, templacat.yml, templacat.yaml)
pub mod config;

/// Common constants
pub mod constants;

/// The template engine
pub mod engine;

/// Error types and handling
pub mod error;

/// Template name resolution and file reading
pub mod loader;

/// Logger setup for the binary
pub mod logger;

/// Variables from `NAME=VALUE` arguments and JSON input
pub mod parser;

/// Placeholder grammar and substitution
pub mod placeholder;

pub use engine::TemplateEngine;
pub use error::{Error, Result};
pub use loader::{FileSystemLoader, MemoryLoader, TemplateLoader};
