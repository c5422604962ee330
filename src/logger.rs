/// Initializes `env_logger` for the binary.
///
/// `verbose` lowers the filter to `Debug`; otherwise only warnings and
/// errors are shown.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();
}
