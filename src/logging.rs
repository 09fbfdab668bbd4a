//! Logging setup.
//!
//! Messages go to stderr through `env_logger`, so they never mix with
//! command output on stdout.

use log::LevelFilter;

/// Initialize the global logger.
///
/// `RUST_LOG` is honored; without it only warnings and errors are shown,
/// or everything down to debug when `verbose` is set.
pub fn init(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level(verbose).as_str()),
    );

    if verbose {
        builder.filter_module("rundist", LevelFilter::Debug);
    }

    // A second call (e.g. from tests) leaves the first logger in place
    let _ = builder.format_timestamp(None).try_init();
}

const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(false), LevelFilter::Warn);
        assert_eq!(default_level(true), LevelFilter::Debug);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
        log::debug!("logger initialized");
    }
}
