//! Utility modules: persistence paths and logging.

pub mod logging;
pub mod persistence;

pub use logging::init_logging;
