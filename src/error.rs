//! Error handling for templacat.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use thiserror::Error;

/// Errors that can occur while loading templates, reading configuration
/// or running the command-line tool.
///
/// A template that simply does not exist is not an error for the library:
/// [`TemplateEngine::load_template`](crate::engine::TemplateEngine::load_template)
/// reports it as `Ok(false)`. Only the binary turns it into
/// [`Error::TemplateNotFound`].
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A template file exists but its contents could not be read
    #[error("Failed to read template '{path}': {source}.")]
    ReadError {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Template '{name}' not found (looked for '{path}').")]
    TemplateNotFound { name: String, path: String },

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// A `NAME=VALUE` argument that could not be split
    #[error("Invalid assignment '{0}', expected NAME=VALUE.")]
    InvalidAssignment(String),

    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}.")]
    YamlError(#[from] serde_yaml::Error),
}

/// Convenience type alias for Results with templacat's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
