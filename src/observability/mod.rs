//! Logging setup and crash reporting.
//!
//! Call [`init_logging`] and [`install_panic_hook`] once at startup, before
//! any command runs.

pub mod panic_hook;

pub use panic_hook::install_panic_hook;

use log::LevelFilter;

/// Map a `-v` count to a log level. Without flags only warnings are shown.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialise `env_logger`. `RUST_LOG`, when set, takes precedence.
pub fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for_verbosity(verbosity))
        .format_timestamp(None)
        .format_target(false)
        .parse_env("RUST_LOG");

    // A second init (tests, embedding) keeps the existing logger
    let _ = builder.try_init();
}
