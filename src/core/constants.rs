// Level-file alphabet
pub const WALL_GLYPH: char = '#';
pub const FLOOR_GLYPH: char = ' ';
pub const COIN_GLYPH: char = 'O';
pub const ENEMY_GLYPH: char = 'X';
pub const SPAWN_GLYPH: char = 'P';
pub const DOOR_GLYPH: char = 'D';

// Built-in level dimensions
pub const DEFAULT_GRID_WIDTH: usize = 30;
pub const DEFAULT_GRID_HEIGHT: usize = 31;

// Per-level population
pub const COINS_PER_LEVEL: usize = 10;
pub const ENEMIES_PER_LEVEL: usize = 1;

// Frame pacing
pub const FRAME_INTERVAL_MS: u64 = 50;

// Files under ~/.mazechase/
pub const DATA_DIR_NAME: &str = ".mazechase";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "mazechase.log";

// Level directory naming: level0.txt, level1.txt, ...
pub const LEVEL_FILE_PREFIX: &str = "level";
pub const LEVEL_FILE_EXTENSION: &str = "txt";
