//! Logger initialization for the ezpresso application.

/// Configures env_logger from the `--verbose` flag.
///
/// Verbose runs log at Debug (template resolution, fallback diagnostics),
/// everything else at Info.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();
}
