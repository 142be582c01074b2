//! End-of-game summary printed once the terminal is restored.

use crate::game::{GameOverReason, GamePhase, GameState};
use std::fmt;

/// Final results of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreReport {
    /// One-based level the game ended on.
    pub level_reached: usize,
    pub level_count: usize,
    /// Coins collected over the whole run.
    pub coins: u32,
    pub reason: GameOverReason,
}

impl ScoreReport {
    /// Report for a state that has reached game over.
    ///
    /// A state still in play is reported as quit.
    pub fn from_state(state: &GameState) -> Self {
        let reason = match state.phase {
            GamePhase::GameOver(reason) => reason,
            GamePhase::Playing => GameOverReason::Quit,
        };
        Self {
            level_reached: state.level + 1,
            level_count: state.level_count,
            coins: state.score,
            reason,
        }
    }

    pub fn reason_text(&self) -> &'static str {
        match self.reason {
            GameOverReason::Caught => "Caught by an enemy",
            GameOverReason::Finished => "Escaped through the final door",
            GameOverReason::Quit => "Quit",
        }
    }
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GAME OVER")?;
        writeln!(f, "{}", self.reason_text())?;
        writeln!(f, "Levels played: {}/{}", self.level_reached, self.level_count)?;
        write!(f, "Coins collected: {}", self.coins)
    }
}
