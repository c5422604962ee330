//! Common constants used throughout templacat.

/// Directory templates are read from when none is configured
pub const DEFAULT_DIRECTORY: &str = "template";

/// Extension of template files, without the leading dot
pub const DEFAULT_EXTENSION: &str = "tpl";

/// Supported configuration file names, in lookup order
pub const CONFIG_FILES: [&str; 3] = ["templacat.json", "templacat.yml", "templacat.yaml"];

/// Number of substitution passes performed by a render
pub const RENDER_PASSES: usize = 2;
