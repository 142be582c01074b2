//! The frame-paced driver around [`game_tick`].
//!
//! One frame is: sample input, run one tick, present the state, then wait
//! for the frame interval. Input, presentation and the wait are all
//! injected so the whole loop runs headless in tests.

use super::error::GameError;
use crate::game::{game_tick, quit_game, Direction, GameState};
use crate::level::LevelSource;
use crate::ui::score_report::ScoreReport;
use rand::Rng;
use std::io;
use std::time::Duration;

/// What the player asked for on one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Move(Direction),
    Quit,
    None,
}

/// Polled once per frame for the currently requested action.
pub trait InputSource {
    fn sample(&mut self) -> io::Result<GameInput>;
}

/// Receives the state after every tick.
pub trait FrameSink {
    fn present(&mut self, state: &GameState) -> io::Result<()>;
}

/// Runs ticks until the game ends and returns the final report.
///
/// `sleep` is called between frames with `interval`; it is not called after
/// the final frame.
pub fn run_game<L, R, I, S, W>(
    mut state: GameState,
    levels: &L,
    rng: &mut R,
    input: &mut I,
    sink: &mut S,
    interval: Duration,
    mut sleep: W,
) -> Result<ScoreReport, GameError>
where
    L: LevelSource + ?Sized,
    R: Rng + ?Sized,
    I: InputSource + ?Sized,
    S: FrameSink + ?Sized,
    W: FnMut(Duration),
{
    sink.present(&state)?;

    while !state.is_over() {
        let intent = match input.sample()? {
            GameInput::Move(direction) => Some(direction),
            GameInput::Quit => {
                quit_game(&mut state);
                break;
            }
            GameInput::None => None,
        };

        game_tick(&mut state, intent, levels, rng)?;
        sink.present(&state)?;

        if !state.is_over() {
            sleep(interval);
        }
    }

    Ok(ScoreReport::from_state(&state))
}
