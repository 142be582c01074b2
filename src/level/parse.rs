//! Level text format: fixed-width rows over the cell alphabet.

use super::types::{Level, LevelError, MalformedReason};
use crate::grid::{CellKind, Grid};

/// Parses one level's text into a grid.
///
/// Trailing blank lines are ignored; every other row must be as wide as the
/// first. The text must contain exactly one spawn marker.
pub fn parse_level(text: &str, level: usize) -> Result<Level, LevelError> {
    let malformed = |reason| LevelError::Malformed { level, reason };

    let mut rows: Vec<&str> = text.lines().collect();
    while rows.last().is_some_and(|r| r.is_empty()) {
        rows.pop();
    }
    if rows.is_empty() {
        return Err(malformed(MalformedReason::Empty));
    }

    let width = rows[0].chars().count();
    if width == 0 {
        return Err(malformed(MalformedReason::Empty));
    }

    let mut cells = Vec::with_capacity(width * rows.len());
    for (row, line) in rows.iter().enumerate() {
        let found = line.chars().count();
        if found != width {
            return Err(malformed(MalformedReason::Ragged {
                row,
                expected: width,
                found,
            }));
        }
        for (col, glyph) in line.chars().enumerate() {
            let kind = CellKind::from_glyph(glyph)
                .ok_or_else(|| malformed(MalformedReason::UnknownGlyph { row, col, glyph }))?;
            cells.push(kind);
        }
    }

    let grid = Grid::from_cells(width, rows.len(), cells);
    let spawns = grid.indexes_of(CellKind::Player);
    if spawns.len() != 1 {
        return Err(malformed(MalformedReason::SpawnCount(spawns.len())));
    }

    Ok(Level {
        spawn: spawns[0],
        grid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_small_level() {
        let text = "#####\n#P O#\n# D #\n#####\n";
        let level = parse_level(text, 0).unwrap();
        assert_eq!(level.grid.width(), 5);
        assert_eq!(level.grid.height(), 4);
        assert_eq!(level.spawn, level.grid.to_index(1, 1));
        assert_eq!(level.grid.cell_at(level.spawn), CellKind::Player);
        assert_eq!(level.grid.count_cells(CellKind::Coin), 1);
        assert_eq!(level.grid.count_cells(CellKind::Door), 1);
    }

    #[test]
    fn test_accepts_crlf_and_trailing_blank_lines() {
        let text = "###\r\n#P#\r\n###\r\n\r\n\n";
        let level = parse_level(text, 0).unwrap();
        assert_eq!(level.grid.height(), 3);
        assert_eq!(level.grid.width(), 3);
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let err = parse_level("####\n#P#\n####", 3).unwrap_err();
        assert!(matches!(
            err,
            LevelError::Malformed {
                level: 3,
                reason: MalformedReason::Ragged {
                    row: 1,
                    expected: 4,
                    found: 3
                }
            }
        ));
    }

    #[test]
    fn test_rejects_unknown_glyph() {
        let err = parse_level("###\n#P?\n###", 0).unwrap_err();
        assert!(matches!(
            err,
            LevelError::Malformed {
                reason: MalformedReason::UnknownGlyph {
                    row: 1,
                    col: 2,
                    glyph: '?'
                },
                ..
            }
        ));
    }

    #[test]
    fn test_requires_exactly_one_spawn() {
        let none = parse_level("###\n# #\n###", 0).unwrap_err();
        assert!(matches!(
            none,
            LevelError::Malformed {
                reason: MalformedReason::SpawnCount(0),
                ..
            }
        ));
        let two = parse_level("####\n#PP#\n####", 0).unwrap_err();
        assert!(matches!(
            two,
            LevelError::Malformed {
                reason: MalformedReason::SpawnCount(2),
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_empty_text() {
        assert!(matches!(
            parse_level("\n\n", 0),
            Err(LevelError::Malformed {
                reason: MalformedReason::Empty,
                ..
            })
        ));
    }
}
