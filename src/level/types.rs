//! Loaded level data and level loading failures.

use crate::grid::Grid;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// A freshly parsed level: its grid and the player's spawn cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub grid: Grid,
    /// Linear index of the spawn marker. The grid holds `Player` there.
    pub spawn: usize,
}

/// Why a level's text was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// No rows at all.
    Empty,
    /// A row's width differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the level alphabet.
    UnknownGlyph { row: usize, col: usize, glyph: char },
    /// Number of spawn markers found; exactly one is required.
    SpawnCount(usize),
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::Empty => write!(f, "no rows"),
            MalformedReason::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} is {} cells wide, expected {}",
                row, found, expected
            ),
            MalformedReason::UnknownGlyph { row, col, glyph } => {
                write!(f, "unknown character {:?} at row {}, column {}", glyph, row, col)
            }
            MalformedReason::SpawnCount(n) => {
                write!(f, "expected exactly one spawn marker, found {}", n)
            }
        }
    }
}

/// A level could not be produced. The active grid is never replaced on error.
#[derive(Debug)]
pub enum LevelError {
    /// The level directory could not be listed.
    DirectoryUnavailable { path: PathBuf, source: io::Error },
    /// A level file could not be read.
    Unavailable { path: PathBuf, source: io::Error },
    /// No level with this index exists in the set.
    NotFound { index: usize },
    /// The level text does not describe a valid grid.
    Malformed {
        level: usize,
        reason: MalformedReason,
    },
    /// The level set is empty.
    NoLevels,
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::DirectoryUnavailable { path, source } => {
                write!(f, "failed to open directory {}: {}", path.display(), source)
            }
            LevelError::Unavailable { path, source } => {
                write!(f, "failed to open file {}: {}", path.display(), source)
            }
            LevelError::NotFound { index } => write!(f, "level {} does not exist", index),
            LevelError::Malformed { level, reason } => {
                write!(f, "level {} is malformed: {}", level, reason)
            }
            LevelError::NoLevels => write!(f, "no levels available"),
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelError::DirectoryUnavailable { source, .. }
            | LevelError::Unavailable { source, .. } => Some(source),
            _ => None,
        }
    }
}
