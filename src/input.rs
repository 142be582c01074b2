//! Keyboard input for the maze screen.
//!
//! The terminal delivers key events, but the game samples one action per
//! frame. Each sample drains every pending event; the last movement key
//! wins and a quit key overrides everything.

use crate::core::game_loop::{GameInput, InputSource};
use crate::game::Direction;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// Maps one key press to a game action.
pub fn map_key(key: KeyEvent) -> GameInput {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return GameInput::Quit;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => GameInput::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            GameInput::Move(Direction::Down)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            GameInput::Move(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            GameInput::Move(Direction::Right)
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => GameInput::Quit,
        _ => GameInput::None,
    }
}

/// Folds a frame's worth of inputs into the single action for the tick.
pub fn resolve_frame(inputs: impl IntoIterator<Item = GameInput>) -> GameInput {
    let mut chosen = GameInput::None;
    for input in inputs {
        match input {
            GameInput::Quit => return GameInput::Quit,
            GameInput::Move(_) => chosen = input,
            GameInput::None => {}
        }
    }
    chosen
}

/// Reads pending crossterm key events without blocking.
#[derive(Debug, Default)]
pub struct KeyPoller;

impl KeyPoller {
    pub fn new() -> Self {
        Self
    }

    fn drain(&mut self) -> io::Result<Vec<GameInput>> {
        let mut inputs = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    inputs.push(map_key(key));
                }
            }
        }
        Ok(inputs)
    }
}

impl InputSource for KeyPoller {
    fn sample(&mut self) -> io::Result<GameInput> {
        Ok(resolve_frame(self.drain()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_and_wasd_move() {
        assert_eq!(map_key(key(KeyCode::Up)), GameInput::Move(Direction::Up));
        assert_eq!(map_key(key(KeyCode::Char('w'))), GameInput::Move(Direction::Up));
        assert_eq!(map_key(key(KeyCode::Char('a'))), GameInput::Move(Direction::Left));
        assert_eq!(map_key(key(KeyCode::Char('S'))), GameInput::Move(Direction::Down));
        assert_eq!(map_key(key(KeyCode::Right)), GameInput::Move(Direction::Right));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(key(KeyCode::Esc)), GameInput::Quit);
        assert_eq!(map_key(key(KeyCode::Char('q'))), GameInput::Quit);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            GameInput::Quit
        );
        assert_eq!(map_key(key(KeyCode::Char('c'))), GameInput::None);
    }

    #[test]
    fn test_last_move_wins() {
        let frame = [
            GameInput::Move(Direction::Up),
            GameInput::None,
            GameInput::Move(Direction::Left),
        ];
        assert_eq!(resolve_frame(frame), GameInput::Move(Direction::Left));
        assert_eq!(resolve_frame([]), GameInput::None);
    }

    #[test]
    fn test_quit_overrides_moves() {
        let frame = [
            GameInput::Move(Direction::Up),
            GameInput::Quit,
            GameInput::Move(Direction::Down),
        ];
        assert_eq!(resolve_frame(frame), GameInput::Quit);
    }
}
