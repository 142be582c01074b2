//! Cell kind to on-screen symbol mapping.

use crate::game::Direction;
use crate::grid::CellKind;
use ratatui::style::{Color, Modifier, Style};

/// One drawable symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub symbol: char,
    pub style: Style,
}

impl Glyph {
    pub const fn new(symbol: char, style: Style) -> Self {
        Self { symbol, style }
    }
}

/// Immutable presentation table handed to the renderer.
///
/// The player symbol is picked by facing, so no glyph state lives outside
/// the game state.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphTable {
    pub wall: Glyph,
    pub floor: Glyph,
    pub coin: Glyph,
    pub enemy: Glyph,
    pub door: Glyph,
    pub player_up: Glyph,
    pub player_down: Glyph,
    pub player_left: Glyph,
    pub player_right: Glyph,
}

impl Default for GlyphTable {
    fn default() -> Self {
        let player = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        Self {
            wall: Glyph::new('#', Style::default().fg(Color::Blue)),
            floor: Glyph::new(' ', Style::default()),
            coin: Glyph::new('O', Style::default().fg(Color::LightYellow)),
            enemy: Glyph::new(
                'X',
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ),
            door: Glyph::new('D', Style::default().fg(Color::Green)),
            player_up: Glyph::new('▲', player),
            player_down: Glyph::new('▼', player),
            player_left: Glyph::new('◄', player),
            player_right: Glyph::new('►', player),
        }
    }
}

impl GlyphTable {
    /// Symbol for a cell; the player cell uses `facing`.
    pub fn glyph_for(&self, kind: CellKind, facing: Direction) -> Glyph {
        match kind {
            CellKind::Wall => self.wall,
            CellKind::Floor => self.floor,
            CellKind::Coin => self.coin,
            CellKind::Enemy => self.enemy,
            CellKind::Door => self.door,
            CellKind::Player => match facing {
                Direction::Up => self.player_up,
                Direction::Down => self.player_down,
                Direction::Left => self.player_left,
                Direction::Right => self.player_right,
            },
        }
    }
}
