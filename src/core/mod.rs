//! Constants, the top-level error type, and the frame-paced game loop.

pub mod constants;
pub mod error;
pub mod game_loop;

pub use error::GameError;
pub use game_loop::{run_game, FrameSink, GameInput, InputSource};
