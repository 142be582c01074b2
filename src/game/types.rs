//! Game state data structures.

use crate::core::constants::{COINS_PER_LEVEL, ENEMIES_PER_LEVEL};
use crate::grid::{CellKind, Grid, Point};
use crate::level::Level;
use crate::pathfinding::OpenSetKind;
use serde::{Deserialize, Serialize};

/// Difficulty tiers, easiest first. Only enemy speed differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
    VeryHard,
    Nightmare,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::VeryHard,
        Difficulty::Nightmare,
    ];

    /// Ticks between enemy steps (lower = faster enemies).
    pub fn enemy_delay(&self) -> u64 {
        match self {
            Self::Easy => 7,
            Self::Medium => 5,
            Self::Hard => 3,
            Self::VeryHard => 2,
            Self::Nightmare => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::VeryHard => "Very Hard",
            Self::Nightmare => "Nightmare",
        }
    }

    /// Case-insensitive lookup; accepts `very-hard`, `veryhard` and `very_hard`.
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL.into_iter().find(|d| {
            d.name()
                .chars()
                .filter(|c| *c != ' ')
                .flat_map(char::to_lowercase)
                .eq(key.chars())
        })
    }
}

/// Cardinal movement direction; also the player's facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The (dx, dy) delta for this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// The player's position and the last direction they tried to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub x: usize,
    pub y: usize,
    pub facing: Direction,
}

impl Player {
    pub fn point(&self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

/// Why the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// An enemy reached the player.
    Caught,
    /// The door on the last level was crossed.
    Finished,
    /// The player quit.
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    GameOver(GameOverReason),
}

/// Simulation parameters fixed for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Enemies step on ticks where `counter % enemy_delay == 0`.
    pub enemy_delay: u64,
    pub coins_per_level: usize,
    pub enemies_per_level: usize,
    pub open_set: OpenSetKind,
}

impl Rules {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            enemy_delay: difficulty.enemy_delay(),
            ..Self::default()
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            enemy_delay: Difficulty::default().enemy_delay(),
            coins_per_level: COINS_PER_LEVEL,
            enemies_per_level: ENEMIES_PER_LEVEL,
            open_set: OpenSetKind::default(),
        }
    }
}

/// Everything the simulation owns between ticks.
#[derive(Debug, Clone)]
pub struct GameState {
    pub rules: Rules,
    pub phase: GamePhase,

    /// The active level's grid; replaced wholesale on level change.
    pub grid: Grid,
    pub player: Player,
    /// Grid index the player is committed to.
    pub player_index: usize,
    /// Grid index the player occupied before this tick's move.
    pub previous_index: usize,
    /// Exit door, recorded and masked on the first tick of a level.
    pub door_index: Option<usize>,

    // Progress
    pub score: u32,
    pub coins_remaining: usize,
    /// Zero-based index of the active level.
    pub level: usize,
    pub level_count: usize,

    /// Ticks since the active level started.
    pub tick_counter: u64,
}

impl GameState {
    /// State for a freshly loaded level, before any entities are placed.
    pub fn from_level(level: Level, level_index: usize, level_count: usize, rules: Rules) -> Self {
        let (x, y) = level.grid.to_coord(level.spawn);
        Self {
            rules,
            phase: GamePhase::Playing,
            grid: level.grid,
            player: Player {
                x,
                y,
                facing: Direction::Up,
            },
            player_index: level.spawn,
            previous_index: level.spawn,
            door_index: None,
            score: 0,
            coins_remaining: rules.coins_per_level,
            level: level_index,
            level_count,
            tick_counter: 0,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver(_))
    }

    pub fn is_last_level(&self) -> bool {
        self.level + 1 >= self.level_count
    }

    /// Current enemy cells, in increasing index order.
    pub fn enemy_indexes(&self) -> Vec<usize> {
        self.grid.indexes_of(CellKind::Enemy)
    }
}
