//! templacat's main application entry point.
//! Parses arguments, gathers variables from the config file, stdin and the
//! command line, loads the requested templates and prints the result.

use std::path::{Path, PathBuf};

use templacat::{
    cli::{get_args, Args},
    config::{load_config, parse_config, read_config_file, Config},
    constants::{CONFIG_FILES, DEFAULT_DIRECTORY, DEFAULT_EXTENSION},
    error::{default_error_handler, Error, Result},
    logger::init_logger,
    parser::{parse_assignment, read_variables},
    TemplateEngine,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Returns the explicit config file if given, otherwise the first config file
/// found in the current directory.
fn get_config(path: Option<&Path>) -> Result<Config> {
    let content = match path {
        Some(path) => Some(read_config_file(path)?),
        None => load_config(".", &CONFIG_FILES)?,
    };
    match content {
        Some(content) => parse_config(&content),
        None => Ok(Config::default()),
    }
}

/// Loads a template that must exist.
fn require_template(
    engine: &mut TemplateEngine,
    name: &str,
    target: Option<&str>,
) -> Result<()> {
    if engine.load_template(name, target)? {
        Ok(())
    } else {
        Err(Error::TemplateNotFound {
            name: name.to_string(),
            path: engine.template_path(name).display().to_string(),
        })
    }
}

fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the configuration file, if any
/// 2. Creates the engine from flags, config and defaults
/// 3. Sets variables from the config, stdin and `--var`
/// 4. Loads `--template-var` templates into variables
/// 5. Loads the positional templates into the buffer
/// 6. Renders to stdout or `--output`
fn run(args: Args) -> Result<()> {
    let config = get_config(args.config.as_deref())?;

    let directory = args
        .directory
        .or_else(|| config.directory.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIRECTORY));
    let extension = args
        .extension
        .or(config.extension)
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

    let mut engine = TemplateEngine::new(directory, extension);

    for (name, value) in &config.variables {
        engine.set_variable(name, value.as_str());
    }
    for (name, template) in &config.templates {
        require_template(&mut engine, template, Some(name.as_str()))?;
    }

    if args.stdin {
        for (name, value) in read_variables(std::io::stdin().lock())? {
            engine.set_variable(name, value);
        }
    }

    for assignment in &args.template_vars {
        let (name, template) = parse_assignment(assignment)?;
        require_template(&mut engine, &template, Some(name.as_str()))?;
    }

    for assignment in &args.vars {
        let (name, value) = parse_assignment(assignment)?;
        engine.set_variable(name, value);
    }

    for template in &args.templates {
        require_template(&mut engine, template, None)?;
    }

    for name in engine.missing_variables() {
        log::warn!("No value for placeholder '{}'.", name);
    }

    let rendered = engine.render();
    match args.output {
        Some(path) => {
            write_file(&rendered, &path)?;
            log::info!("Wrote '{}'.", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
