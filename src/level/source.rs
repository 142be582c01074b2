//! Where levels come from: a directory of `level<N>.txt` files or memory.

use super::parse::parse_level;
use super::types::{Level, LevelError};
use crate::core::constants::{LEVEL_FILE_EXTENSION, LEVEL_FILE_PREFIX};
use std::fs;
use std::path::{Path, PathBuf};

/// An ordered set of levels addressed by index from 0.
pub trait LevelSource {
    /// Number of levels in the set.
    fn level_count(&self) -> Result<usize, LevelError>;

    /// Loads and parses level `index`.
    fn load_level(&self, index: usize) -> Result<Level, LevelError>;
}

/// Levels stored as `level0.txt`, `level1.txt`, ... in one directory.
#[derive(Debug, Clone)]
pub struct DirLevelSource {
    dir: PathBuf,
}

impl DirLevelSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding level `index`.
    pub fn level_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!(
            "{}{}.{}",
            LEVEL_FILE_PREFIX, index, LEVEL_FILE_EXTENSION
        ))
    }
}

/// True for names of the form `level<digits>.txt`.
fn is_level_file_name(name: &str) -> bool {
    name.strip_prefix(LEVEL_FILE_PREFIX)
        .and_then(|rest| rest.strip_suffix(LEVEL_FILE_EXTENSION))
        .and_then(|rest| rest.strip_suffix('.'))
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
}

impl LevelSource for DirLevelSource {
    fn level_count(&self) -> Result<usize, LevelError> {
        let unavailable = |source| LevelError::DirectoryUnavailable {
            path: self.dir.clone(),
            source,
        };

        let mut count = 0;
        for entry in fs::read_dir(&self.dir).map_err(unavailable)? {
            let entry = entry.map_err(unavailable)?;
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if is_file && is_level_file_name(&entry.file_name().to_string_lossy()) {
                count += 1;
            }
        }
        Ok(count)
    }

    fn load_level(&self, index: usize) -> Result<Level, LevelError> {
        let path = self.level_path(index);
        let text = fs::read_to_string(&path)
            .map_err(|source| LevelError::Unavailable { path, source })?;
        let level = parse_level(&text, index)?;
        log::info!(
            "loaded level {} from {} ({}x{})",
            index,
            self.dir.display(),
            level.grid.width(),
            level.grid.height()
        );
        Ok(level)
    }
}

/// Levels held as text in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryLevels {
    levels: Vec<String>,
}

impl MemoryLevels {
    pub fn new<S: Into<String>>(levels: impl IntoIterator<Item = S>) -> Self {
        Self {
            levels: levels.into_iter().map(Into::into).collect(),
        }
    }

    /// The level set shipped with the game.
    pub fn builtin() -> Self {
        Self::new([
            include_str!("../../levels/level0.txt"),
            include_str!("../../levels/level1.txt"),
            include_str!("../../levels/level2.txt"),
        ])
    }
}

impl LevelSource for MemoryLevels {
    fn level_count(&self) -> Result<usize, LevelError> {
        Ok(self.levels.len())
    }

    fn load_level(&self, index: usize) -> Result<Level, LevelError> {
        let text = self
            .levels
            .get(index)
            .ok_or(LevelError::NotFound { index })?;
        parse_level(text, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
    use crate::grid::CellKind;

    /// A unique, empty scratch directory under the system temp dir.
    fn scratch_dir() -> PathBuf {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "mazechase-levels-{}-{}",
            std::process::id(),
            test_id
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_level_file_names() {
        assert!(is_level_file_name("level0.txt"));
        assert!(is_level_file_name("level12.txt"));
        assert!(!is_level_file_name("level.txt"));
        assert!(!is_level_file_name("levelA.txt"));
        assert!(!is_level_file_name("level1.txt.bak"));
        assert!(!is_level_file_name("notes.txt"));
    }

    #[test]
    fn test_directory_source_counts_and_loads() {
        let dir = scratch_dir();
        fs::write(dir.join("level0.txt"), "###\n#P#\n###\n").unwrap();
        fs::write(dir.join("level1.txt"), "####\n#P #\n####\n").unwrap();
        fs::write(dir.join("README"), "not a level").unwrap();

        let source = DirLevelSource::new(&dir);
        assert_eq!(source.level_count().unwrap(), 2);
        let level = source.load_level(1).unwrap();
        assert_eq!(level.grid.width(), 4);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_directory_is_reported() {
        let source = DirLevelSource::new("/definitely/not/a/real/level/dir");
        assert!(matches!(
            source.level_count(),
            Err(LevelError::DirectoryUnavailable { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = scratch_dir();
        let source = DirLevelSource::new(&dir);
        match source.load_level(4) {
            Err(LevelError::Unavailable { path, .. }) => {
                assert!(path.ends_with("level4.txt"))
            }
            other => panic!("expected Unavailable, got {:?}", other),
        }
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_memory_levels_out_of_range() {
        let levels = MemoryLevels::new(["###\n#P#\n###"]);
        assert_eq!(levels.level_count().unwrap(), 1);
        assert!(levels.load_level(0).is_ok());
        assert!(matches!(
            levels.load_level(1),
            Err(LevelError::NotFound { index: 1 })
        ));
    }

    #[test]
    fn test_builtin_levels_are_valid() {
        let levels = MemoryLevels::builtin();
        let count = levels.level_count().unwrap();
        assert_eq!(count, 3);
        for i in 0..count {
            let level = levels.load_level(i).unwrap();
            assert_eq!(level.grid.width(), DEFAULT_GRID_WIDTH);
            assert_eq!(level.grid.height(), DEFAULT_GRID_HEIGHT);
            assert_eq!(level.grid.count_cells(CellKind::Door), 1, "level {}", i);
            // Status row stays solid wall
            assert!(level.grid.row(0).iter().all(|&c| c == CellKind::Wall));
        }
    }
}
