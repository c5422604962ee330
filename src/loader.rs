//! Template file loading for templacat.
//! Resolves template names to file locations and reads them through a
//! [`TemplateLoader`], which lets the engine run against the file system or
//! against templates held in memory.

use crate::error::{Error, Result};
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{is_separator, Path, PathBuf};

/// Trait for reading template files.
pub trait TemplateLoader {
    /// Reads the full contents of the template at `path`.
    ///
    /// Templates are text: a file that is not valid UTF-8 is a read error.
    ///
    /// # Returns
    /// * `Ok(Some(contents))` - The template exists and was read
    /// * `Ok(None)` - Nothing readable as a template exists at `path`
    ///
    /// # Errors
    /// * `Error::ReadError` if the template exists but cannot be read,
    ///   including when it is not valid UTF-8
    fn read(&self, path: &Path) -> Result<Option<String>>;
}

/// Loader for templates on the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSystemLoader;

impl FileSystemLoader {
    /// Creates a new FileSystemLoader instance.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateLoader for FileSystemLoader {
    /// Anything that is not a regular file reads as `None`, including a path
    /// whose directory part is itself a file. There is no separate existence
    /// check before the read.
    fn read(&self, path: &Path) -> Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            // Only regular files are templates.
            Err(_) if !path.is_file() => Ok(None),
            Err(source) => {
                Err(Error::ReadError { path: path.display().to_string(), source })
            }
        }
    }
}

/// Loader serving templates from memory, keyed by their resolved path.
#[derive(Debug, Default, Clone)]
pub struct MemoryLoader {
    templates: HashMap<PathBuf, String>,
}

impl MemoryLoader {
    /// Creates an empty MemoryLoader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a template, replacing any previous one at the same path.
    pub fn insert<P: Into<PathBuf>, S: Into<String>>(&mut self, path: P, contents: S) {
        self.templates.insert(path.into(), contents.into());
    }

    /// Builder-style variant of [`MemoryLoader::insert`].
    pub fn with_template<P: Into<PathBuf>, S: Into<String>>(
        mut self,
        path: P,
        contents: S,
    ) -> Self {
        self.insert(path, contents);
        self
    }
}

impl TemplateLoader for MemoryLoader {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        Ok(self.templates.get(path).cloned())
    }
}

impl<L: TemplateLoader + ?Sized> TemplateLoader for &L {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        (**self).read(path)
    }
}

/// Reduces a template name to the base name used for resolution.
///
/// Everything up to the last path separator is dropped (`/`, and also `\`
/// on Windows), then a trailing `.{extension}` is removed unless nothing
/// would be left in front of it.
///
/// # Example
/// ```
/// use templacat::loader::template_base_name;
///
/// assert_eq!(template_base_name("sub/dir/page.tpl", "tpl"), "page");
/// assert_eq!(template_base_name("page", "tpl"), "page");
/// ```
pub fn template_base_name<'a>(file_name: &'a str, extension: &str) -> &'a str {
    let trimmed = file_name.trim_end_matches(is_separator);
    let base = match trimmed.rfind(is_separator) {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    };

    if extension.is_empty() {
        return base;
    }
    match base.strip_suffix(extension).and_then(|rest| rest.strip_suffix('.')) {
        Some(stem) if !stem.is_empty() => stem,
        _ => base,
    }
}

/// Builds `{directory}/{base name}.{extension}` for a template name.
pub fn resolve_template_path<P: AsRef<Path>>(
    directory: P,
    extension: &str,
    file_name: &str,
) -> PathBuf {
    let base = template_base_name(file_name, extension);
    let path = directory.as_ref().join(format!("{base}.{extension}"));
    debug!("Template '{}' resolves to '{}'.", file_name, path.display());
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_base_name() {
        assert_eq!(template_base_name("name", "tpl"), "name");
        assert_eq!(template_base_name("name.tpl", "tpl"), "name");
        assert_eq!(template_base_name("sub/dir/name.tpl", "tpl"), "name");
        assert_eq!(template_base_name("sub/name/", "tpl"), "name");
        assert_eq!(template_base_name("../../etc/passwd", "tpl"), "passwd");
    }

    #[cfg(windows)]
    #[test]
    fn test_template_base_name_backslash_separator() {
        assert_eq!(template_base_name("sub\\name.tpl", "tpl"), "name");
    }

    #[cfg(not(windows))]
    #[test]
    fn test_template_base_name_backslash_is_part_of_name() {
        assert_eq!(template_base_name("sub\\name.tpl", "tpl"), "sub\\name");
    }

    #[test]
    fn test_template_base_name_keeps_partial_extension() {
        assert_eq!(template_base_name("nametpl", "tpl"), "nametpl");
        assert_eq!(template_base_name("name.html", "tpl"), "name.html");
        assert_eq!(template_base_name(".tpl", "tpl"), ".tpl");
        assert_eq!(template_base_name("name.tpl.tpl", "tpl"), "name.tpl");
    }

    #[test]
    fn test_resolve_template_path() {
        let expected = PathBuf::from("views").join("page.html");
        assert_eq!(resolve_template_path("views", "html", "page"), expected);
        assert_eq!(resolve_template_path("views", "html", "a/b/page.html"), expected);
    }

    #[test]
    fn test_memory_loader() {
        let loader = MemoryLoader::new().with_template("template/a.tpl", "A");
        assert_eq!(loader.read(Path::new("template/a.tpl")).unwrap(), Some("A".to_string()));
        assert_eq!(loader.read(Path::new("template/b.tpl")).unwrap(), None);
    }
}
