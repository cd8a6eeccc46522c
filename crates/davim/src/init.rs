//! Logging setup.

/// Initializes `env_logger` for davim's `log` output.
///
/// Verbosity is controlled by `RUST_LOG`. Safe to call more than once; only
/// the first call installs the logger.
pub fn init_logging() {
    if env_logger::try_init().is_ok() {
        log::debug!("davim logging initialized");
    }
}
