//! Configuration handling for templacat.
//! An optional `templacat.json`, `templacat.yml` or `templacat.yaml` file
//! supplies the template directory, the extension and initial variables.

use crate::error::{Error, Result};
use crate::parser::values_to_strings;
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    directory: Option<String>,
    extension: Option<String>,
    #[serde(default)]
    variables: IndexMap<String, serde_json::Value>,
    #[serde(default)]
    templates: IndexMap<String, String>,
}

/// Parsed configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Template directory, if configured
    pub directory: Option<String>,
    /// Template extension, if configured
    pub extension: Option<String>,
    /// Variables set before any template is loaded
    pub variables: IndexMap<String, String>,
    /// Variables whose value is loaded from a template, as `name -> template`
    pub templates: IndexMap<String, String>,
}

/// Loads the first configuration file that exists in a directory.
///
/// # Arguments
/// * `dir` - Directory to look in
/// * `config_files` - Candidate file names, in order
///
/// # Returns
/// * `Result<Option<String>>` - Contents of the first file found, or `None`
pub fn load_config<P: AsRef<Path>>(dir: P, config_files: &[&str]) -> Result<Option<String>> {
    for file in config_files {
        let config_path = dir.as_ref().join(file);
        if config_path.is_file() {
            debug!("Loading configuration from {}", config_path.display());
            return Ok(Some(std::fs::read_to_string(&config_path)?));
        }
    }
    debug!("No configuration file found (tried: {})", config_files.join(", "));
    Ok(None)
}

/// Reads an explicitly named configuration file.
///
/// # Errors
/// * `Error::ConfigError` if the file does not exist
pub fn read_config_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::ConfigError(format!(
            "configuration file '{}' does not exist",
            path.display()
        )));
    }
    debug!("Loading configuration from {}", path.display());
    Ok(std::fs::read_to_string(path)?)
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither, has unknown keys, or
///   holds a variable that is not a scalar
pub fn parse_config(content: &str) -> Result<Config> {
    let raw: RawConfig = match serde_json::from_str(content) {
        Ok(raw) => raw,
        Err(_) => serde_yaml::from_str::<Option<RawConfig>>(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}")))?
            .unwrap_or_default(),
    };

    Ok(Config {
        directory: raw.directory,
        extension: raw.extension,
        variables: values_to_strings(raw.variables)?,
        templates: raw.templates,
    })
}
