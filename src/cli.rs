//! Command-line interface implementation for templacat.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for templacat.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "templacat: render {{%name%}} placeholders in template files",
    long_about = None
)]
pub struct Args {
    /// Templates appended to the output, in order
    #[arg(value_name = "TEMPLATE")]
    pub templates: Vec<String>,

    /// Directory containing the template files [default: template]
    #[arg(short, long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Extension of the template files, without the dot [default: tpl]
    #[arg(short, long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Set a variable (can be repeated)
    #[arg(short = 'D', long = "var", value_name = "NAME=VALUE")]
    pub vars: Vec<String>,

    /// Load a template into a variable (can be repeated)
    #[arg(short = 't', long = "template-var", value_name = "NAME=TEMPLATE")]
    pub template_vars: Vec<String>,

    /// Configuration file to use instead of looking for templacat.{json,yml,yaml}
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Read a JSON object of variables from stdin
    #[arg(short, long)]
    pub stdin: bool,

    /// Write the rendered text to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for argument errors
pub fn get_args() -> Args {
    Args::parse()
}
