//! Level loading: the text format, on-disk level sets, and built-in levels.

pub mod parse;
pub mod source;
pub mod types;

pub use parse::parse_level;
pub use source::{DirLevelSource, LevelSource, MemoryLevels};
pub use types::{Level, LevelError, MalformedReason};
