// triex/src/logger.rs
//! Logging setup for the `triex` binary.
//!
//! Logs go to stderr through `env_logger`. `RUST_LOG` is honoured unless an
//! explicit level is passed (from `--debug` or `--quiet`).

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes the global logger. Safe to call more than once; later calls
/// are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));

    if let Some(level) = level {
        builder.filter_level(level);
    }

    builder
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init()
        .ok();
}
