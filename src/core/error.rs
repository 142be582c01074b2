//! Top-level failure type returned to the binary.

use crate::level::LevelError;
use std::fmt;
use std::io;

/// Anything that stops the game loop other than reaching game over.
#[derive(Debug)]
pub enum GameError {
    /// A level could not be loaded or counted.
    Level(LevelError),
    /// Terminal input or output failed.
    Io(io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Level(e) => write!(f, "level error: {}", e),
            GameError::Io(e) => write!(f, "terminal error: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Level(e) => Some(e),
            GameError::Io(e) => Some(e),
        }
    }
}

impl From<LevelError> for GameError {
    fn from(e: LevelError) -> Self {
        GameError::Level(e)
    }
}

impl From<io::Error> for GameError {
    fn from(e: io::Error) -> Self {
        GameError::Io(e)
    }
}
