//! Terminal presentation: the maze view, glyph table and score report.

pub mod glyphs;
pub mod map_scene;
pub mod score_report;

use crate::core::game_loop::FrameSink;
use crate::game::GameState;
use crossterm::cursor::Show;
use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use glyphs::GlyphTable;
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Draws every frame to a ratatui terminal.
pub struct TerminalSink<B: Backend> {
    terminal: Terminal<B>,
    glyphs: GlyphTable,
}

impl<B: Backend> TerminalSink<B> {
    pub fn new(terminal: Terminal<B>, glyphs: GlyphTable) -> Self {
        Self { terminal, glyphs }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> FrameSink for TerminalSink<B> {
    fn present(&mut self, state: &GameState) -> io::Result<()> {
        let glyphs = &self.glyphs;
        self.terminal.draw(|frame| {
            let area = frame.size();
            map_scene::render_map_scene(frame, area, state, glyphs);
        })?;
        Ok(())
    }
}

/// Runs `restore` when dropped, so early returns and panics still undo
/// terminal setup.
pub struct RestoreGuard<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> RestoreGuard<F> {
    pub fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnOnce()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Each step is attempted even if an earlier one fails.
pub fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        log::warn!("failed to leave raw mode: {}", e);
    }
    let mut stdout = io::stdout();
    if let Err(e) = stdout.execute(LeaveAlternateScreen) {
        log::warn!("failed to leave alternate screen: {}", e);
    }
    if let Err(e) = stdout.execute(Show) {
        log::warn!("failed to show cursor: {}", e);
    }
}
