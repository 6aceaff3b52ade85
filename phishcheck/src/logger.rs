//! Logging setup for the phishcheck binary.
//!
//! Libraries only talk to the `log` facade; this is the single place a
//! backend (`env_logger`, writing to stderr) is installed.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes the global logger.
///
/// `RUST_LOG` is honoured unless `level_override` is given. Calling this more
/// than once is harmless; later calls are ignored.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).target(Target::Stderr);

    let _ = builder.try_init();
}
