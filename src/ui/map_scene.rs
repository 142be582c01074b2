//! The maze view: status line, grid and the game-over banner.

use super::glyphs::GlyphTable;
use crate::game::{GameOverReason, GamePhase, GameState};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Text shown in place of grid row 0.
pub fn status_line(state: &GameState) -> String {
    format!(
        "Coins: {} Score: {} Level: {}/{}",
        state.coins_remaining,
        state.score,
        state.level + 1,
        state.level_count
    )
}

/// Row `y` of the grid as plain symbols. Row 0 yields the status line.
pub fn row_text(state: &GameState, glyphs: &GlyphTable, y: usize) -> String {
    if y == 0 {
        return status_line(state);
    }
    state
        .grid
        .row(y)
        .iter()
        .map(|&kind| glyphs.glyph_for(kind, state.player.facing).symbol)
        .collect()
}

/// Every grid row as styled lines, status line first.
pub fn map_lines(state: &GameState, glyphs: &GlyphTable) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(state.grid.height());
    lines.push(Line::from(Span::styled(
        status_line(state),
        Style::default().fg(Color::White),
    )));

    for y in 1..state.grid.height() {
        let spans: Vec<Span<'static>> = state
            .grid
            .row(y)
            .iter()
            .map(|&kind| {
                let glyph = glyphs.glyph_for(kind, state.player.facing);
                Span::styled(glyph.symbol.to_string(), glyph.style)
            })
            .collect();
        lines.push(Line::from(spans));
    }
    lines
}

/// Draws the maze centred in `area`.
pub fn render_map_scene(frame: &mut Frame, area: Rect, state: &GameState, glyphs: &GlyphTable) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Maze Chase ");

    let want_w = (state.grid.width() as u16).saturating_add(2);
    let want_h = (state.grid.height() as u16).saturating_add(2);
    let width = want_w.min(area.width);
    let height = want_h.min(area.height);
    let board = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    let inner = block.inner(board);
    frame.render_widget(block, board);
    frame.render_widget(Paragraph::new(map_lines(state, glyphs)), inner);

    if let GamePhase::GameOver(reason) = state.phase {
        render_game_over_banner(frame, board, reason);
    }
}

fn render_game_over_banner(frame: &mut Frame, area: Rect, reason: GameOverReason) {
    let (message, color) = match reason {
        GameOverReason::Caught => ("Caught!", Color::LightRed),
        GameOverReason::Finished => ("You escaped!", Color::LightGreen),
        GameOverReason::Quit => ("Quit", Color::Gray),
    };

    let height: u16 = 3.min(area.height);
    let banner = Rect::new(
        area.x,
        area.y + (area.height - height) / 2,
        area.width,
        height,
    );
    frame.render_widget(Clear, banner);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(banner);
    frame.render_widget(block, banner);

    let line = Line::from(vec![
        Span::styled(
            "GAME OVER",
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - "),
        Span::styled(message, Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), inner);
}
