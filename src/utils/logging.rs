//! Logger setup. The terminal is owned by the game screen, so log output
//! goes to `~/.mazechase/mazechase.log` instead of stderr.

use super::persistence::data_path;
use crate::core::constants::LOG_FILE_NAME;
use env_logger::{Env, Target};
use std::fs::OpenOptions;

/// Installs the global logger, filtered by `RUST_LOG` (default `warn`).
///
/// Returns false if the log file could not be opened; the game then runs
/// without logging.
pub fn init_logging() -> bool {
    let file = data_path(LOG_FILE_NAME).and_then(|path| {
        OpenOptions::new().create(true).append(true).open(path)
    });
    let file = match file {
        Ok(file) => file,
        Err(_) => return false,
    };

    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .is_ok()
}
