//! The template engine: a text buffer plus a table of variables, rendered by
//! substituting `{{%name%}}` placeholders.

use crate::constants::{DEFAULT_DIRECTORY, DEFAULT_EXTENSION, RENDER_PASSES};
use crate::error::Result;
use crate::loader::{resolve_template_path, FileSystemLoader, TemplateLoader};
use crate::placeholder::{normalize_name, placeholder_names, strip, substitute};
use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Accumulates template text and variables, and renders them.
///
/// Templates are read from `{directory}/{name}.{extension}` through a
/// [`TemplateLoader`]. Variable names are case-insensitive.
///
/// # Example
/// ```
/// use templacat::engine::TemplateEngine;
/// use templacat::loader::MemoryLoader;
///
/// let loader = MemoryLoader::new()
///     .with_template("template/page.tpl", "<h1>{{%title%}}</h1>");
/// let mut engine = TemplateEngine::with_loader("template", "tpl", loader);
///
/// assert!(engine.load_template("page", None).unwrap());
/// engine.set_variable("Title", "Hello");
/// assert_eq!(engine.render(), "<h1>Hello</h1>");
/// ```
#[derive(Debug, Clone)]
pub struct TemplateEngine<L = FileSystemLoader> {
    directory: PathBuf,
    extension: String,
    buffer: String,
    variables: HashMap<String, String>,
    loader: L,
}

impl TemplateEngine<FileSystemLoader> {
    /// Creates an engine reading templates from the file system.
    ///
    /// The directory is not checked until a template is loaded.
    pub fn new<P: Into<PathBuf>, S: Into<String>>(directory: P, extension: S) -> Self {
        Self::with_loader(directory, extension, FileSystemLoader::new())
    }
}

impl Default for TemplateEngine<FileSystemLoader> {
    fn default() -> Self {
        Self::new(DEFAULT_DIRECTORY, DEFAULT_EXTENSION)
    }
}

impl<L: TemplateLoader> TemplateEngine<L> {
    /// Creates an engine reading templates through `loader`.
    pub fn with_loader<P: Into<PathBuf>, S: Into<String>>(
        directory: P,
        extension: S,
        loader: L,
    ) -> Self {
        Self {
            directory: directory.into(),
            extension: extension.into(),
            buffer: String::new(),
            variables: HashMap::new(),
            loader,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The accumulated template text, before substitution.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Location a template name resolves to.
    ///
    /// Only the last path segment of `file_name` is used, and a trailing
    /// `.{extension}` is dropped, so `"page"`, `"page.tpl"` and
    /// `"sub/page.tpl"` all resolve to `{directory}/page.tpl`.
    pub fn template_path(&self, file_name: &str) -> PathBuf {
        resolve_template_path(&self.directory, &self.extension, file_name)
    }

    /// Loads a template into the buffer, or into a variable.
    ///
    /// # Arguments
    /// * `file_name` - Template name, see [`TemplateEngine::template_path`]
    /// * `target` - Variable receiving the contents; `None` appends them to
    ///   the buffer instead
    ///
    /// # Returns
    /// * `Ok(true)` - The template was loaded
    /// * `Ok(false)` - No template exists at the resolved location; nothing
    ///   was changed
    ///
    /// # Errors
    /// * `Error::ReadError` if the template exists but cannot be read
    pub fn load_template(&mut self, file_name: &str, target: Option<&str>) -> Result<bool> {
        let path = self.template_path(file_name);
        let Some(contents) = self.loader.read(&path)? else {
            debug!("Template '{}' does not exist.", path.display());
            return Ok(false);
        };

        match target {
            Some(name) => {
                debug!("Loaded '{}' into variable '{}'.", path.display(), name);
                self.set_variable(name, contents);
            }
            None => {
                debug!("Loaded '{}' into the buffer.", path.display());
                self.buffer.push_str(&contents);
            }
        }
        Ok(true)
    }

    /// Sets a variable, replacing any previous value under the same name in
    /// any letter case.
    pub fn set_variable<N: AsRef<str>, S: Into<String>>(&mut self, name: N, content: S) {
        self.variables.insert(normalize_name(name.as_ref()), content.into());
    }

    /// Looks up a variable, ignoring letter case.
    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(&normalize_name(name)).map(String::as_str)
    }

    /// Iterates over all variables as `(lowercase name, value)`.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Names of placeholders in the buffer that have no variable set.
    ///
    /// Placeholders introduced by variable values are not inspected.
    pub fn missing_variables(&self) -> Vec<String> {
        placeholder_names(&self.buffer)
            .into_iter()
            .filter(|name| !self.variables.contains_key(name))
            .collect()
    }

    /// Renders the buffer with all placeholders substituted.
    ///
    /// Substitution runs exactly twice, so a variable may itself contain
    /// placeholders one level deep. Placeholders without a value, and any
    /// still left after the second pass, render as the empty string.
    pub fn render(&self) -> String {
        let mut output = self.buffer.clone();
        for _ in 0..RENDER_PASSES {
            output = substitute(&output, &self.variables).into_owned();
        }
        strip(&output).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::MemoryLoader;

    fn engine() -> TemplateEngine<MemoryLoader> {
        TemplateEngine::with_loader("template", "tpl", MemoryLoader::new())
    }

    #[test]
    fn test_default_configuration() {
        let engine: TemplateEngine = TemplateEngine::default();
        assert_eq!(engine.directory(), Path::new("template"));
        assert_eq!(engine.extension(), "tpl");
        assert_eq!(engine.buffer(), "");
        assert_eq!(engine.variables().count(), 0);
    }

    #[test]
    fn test_variable_keys_are_lowercase() {
        let mut engine = engine();
        engine.set_variable("MiXeD", "1");
        let keys: Vec<&str> = engine.variables().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["mixed"]);
        assert_eq!(engine.variable("MIXED"), Some("1"));
    }

    #[test]
    fn test_render_does_not_mutate() {
        let mut engine = engine();
        engine.buffer.push_str("{{%a%}}");
        engine.set_variable("a", "x");
        assert_eq!(engine.render(), "x");
        assert_eq!(engine.buffer(), "{{%a%}}");
        assert_eq!(engine.render(), "x");
    }

    #[test]
    fn test_missing_variables() {
        let mut engine = engine();
        engine.buffer.push_str("{{%title%}} {{%Body%}} {{%footer%}}");
        engine.set_variable("title", "T");
        assert_eq!(engine.missing_variables(), vec!["body".to_string(), "footer".to_string()]);
    }
}
