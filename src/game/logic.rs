//! Chase game logic: the per-tick step and its building blocks.
//!
//! One tick runs, in order: door lock (first tick of a level), coin count,
//! player move, enemy step (on the cadence), collisions, door/level
//! transition, and finally the player commit that writes the player glyph
//! onto the grid.

use super::types::*;
use crate::grid::{place_entities, CellKind, Grid, Point};
use crate::level::{LevelError, LevelSource};
use crate::pathfinding::{find_path, OpenSetKind};
use rand::Rng;

/// Something that happened during a tick, for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickEvent {
    /// The attempted move ran into a wall; only facing changed.
    PlayerBlocked { facing: Direction },
    /// An enemy stepped from one cell to the next.
    EnemyMoved { from: usize, to: usize },
    /// The player picked up a coin.
    CoinCollected { index: usize },
    /// All coins are gone and the door is now open.
    DoorUnlocked { index: usize },
    /// The player crossed the door into a new level.
    LevelAdvanced { level: usize },
    /// The game ended this tick.
    GameOver { reason: GameOverReason },
}

/// Result of one tick.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    pub events: Vec<TickEvent>,
}

impl TickResult {
    pub fn has(&self, pred: impl Fn(&TickEvent) -> bool) -> bool {
        self.events.iter().any(pred)
    }
}

/// Starts a game on the first level of `levels` and populates it.
pub fn start_game<L, R>(levels: &L, rules: Rules, rng: &mut R) -> Result<GameState, LevelError>
where
    L: LevelSource + ?Sized,
    R: Rng + ?Sized,
{
    let level_count = levels.level_count()?;
    if level_count == 0 {
        return Err(LevelError::NoLevels);
    }
    let level = levels.load_level(0)?;
    let mut state = GameState::from_level(level, 0, level_count, rules);
    populate_level(&mut state, rng);
    log::info!(
        "game started: {} levels, enemy delay {}",
        level_count,
        rules.enemy_delay
    );
    Ok(state)
}

/// Scatters the level's coins, then its enemies.
pub fn populate_level<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) {
    place_entities(
        &mut state.grid,
        CellKind::Coin,
        state.rules.coins_per_level,
        rng,
    );
    if state.rules.enemies_per_level > 0 {
        place_entities(
            &mut state.grid,
            CellKind::Enemy,
            state.rules.enemies_per_level,
            rng,
        );
    }
}

/// Records the level's door and masks every door marker as wall.
///
/// With several markers the last one in index order becomes the exit.
pub fn lock_door(state: &mut GameState) {
    let doors = state.grid.indexes_of(CellKind::Door);
    for &idx in &doors {
        state.grid.set_cell(idx, CellKind::Wall);
    }
    state.door_index = doors.last().copied();
    if let Some(idx) = state.door_index {
        log::debug!("level {} door at {} locked", state.level, idx);
    }
}

/// Opens the recorded door. Returns true if the cell changed.
pub fn unlock_door(state: &mut GameState) -> bool {
    match state.door_index {
        Some(idx) if state.grid.cell_at(idx) == CellKind::Wall => {
            state.grid.set_cell(idx, CellKind::Floor);
            log::debug!("level {} door at {} unlocked", state.level, idx);
            true
        }
        _ => false,
    }
}

/// Applies a movement intent to the player's coordinate.
///
/// A wall (or the grid edge) cancels the move entirely; facing still turns
/// toward the attempted direction. Returns false if the move was blocked.
pub fn move_player(state: &mut GameState, intent: Direction) -> bool {
    state.player.facing = intent;

    let (dx, dy) = intent.delta();
    let target = Point::new(state.player.x as i32 + dx, state.player.y as i32 + dy);
    match state.grid.kind_at(target) {
        Some(CellKind::Wall) | None => false,
        Some(_) => {
            state.player.x = target.x as usize;
            state.player.y = target.y as usize;
            true
        }
    }
}

/// Steps every enemy one cell along its shortest path to `target`.
///
/// Enemies move in increasing index order. An enemy whose next cell already
/// holds an enemy stays put, so earlier enemies win contested cells.
pub fn move_enemies(grid: &mut Grid, target: Point, open_set: OpenSetKind) -> Vec<TickEvent> {
    let mut events = Vec::new();
    for from in grid.indexes_of(CellKind::Enemy) {
        let path = find_path(grid, grid.point_of(from), target, open_set);
        let Some(&next) = path.get(1) else {
            continue;
        };
        let Some(to) = grid.index_of(next) else {
            continue;
        };
        if grid.cell_at(to) == CellKind::Enemy {
            continue;
        }
        grid.set_cell(from, CellKind::Floor);
        grid.set_cell(to, CellKind::Enemy);
        log::debug!("enemy {} -> {}", from, to);
        events.push(TickEvent::EnemyMoved { from, to });
    }
    events
}

/// Loads the next level and resets per-level state.
///
/// On failure nothing is modified.
fn advance_level<L, R>(state: &mut GameState, levels: &L, rng: &mut R) -> Result<(), LevelError>
where
    L: LevelSource + ?Sized,
    R: Rng + ?Sized,
{
    let next = state.level + 1;
    let level = levels.load_level(next)?;
    let (x, y) = level.grid.to_coord(level.spawn);

    state.grid = level.grid;
    state.player.x = x;
    state.player.y = y;
    state.player_index = level.spawn;
    state.previous_index = level.spawn;
    state.door_index = None;
    state.level = next;
    state.coins_remaining = state.rules.coins_per_level;
    state.tick_counter = 0;
    populate_level(state, rng);

    log::info!("advanced to level {} of {}", next + 1, state.level_count);
    Ok(())
}

fn end_game(state: &mut GameState, reason: GameOverReason, result: &mut TickResult) {
    state.phase = GamePhase::GameOver(reason);
    result.events.push(TickEvent::GameOver { reason });
    log::info!(
        "game over ({:?}) on level {} with score {}",
        reason,
        state.level + 1,
        state.score
    );
}

/// Ends the game at the player's request.
pub fn quit_game(state: &mut GameState) {
    if !state.is_over() {
        state.phase = GamePhase::GameOver(GameOverReason::Quit);
        log::info!("player quit on level {}", state.level + 1);
    }
}

/// Advances the simulation by one tick.
///
/// `intent` is the movement sampled from input this tick. A level load
/// failure while crossing the door is returned as an error and leaves the
/// current grid in place.
pub fn game_tick<L, R>(
    state: &mut GameState,
    intent: Option<Direction>,
    levels: &L,
    rng: &mut R,
) -> Result<TickResult, LevelError>
where
    L: LevelSource + ?Sized,
    R: Rng + ?Sized,
{
    let mut result = TickResult::default();
    if state.is_over() {
        return Ok(result);
    }

    if state.tick_counter == 0 {
        lock_door(state);
    }
    state.tick_counter += 1;

    state.coins_remaining = state.grid.count_cells(CellKind::Coin);

    // Player intent
    state.previous_index = state.player_index;
    if let Some(direction) = intent {
        if !move_player(state, direction) {
            result
                .events
                .push(TickEvent::PlayerBlocked { facing: direction });
        }
    }
    state.player_index = state.grid.to_index(state.player.x, state.player.y);

    // Enemies step on the cadence
    if state.tick_counter % state.rules.enemy_delay.max(1) == 0 {
        let moves = move_enemies(&mut state.grid, state.player.point(), state.rules.open_set);
        result.events.extend(moves);
    }

    // Collisions
    match state.grid.cell_at(state.player_index) {
        CellKind::Enemy => {
            end_game(state, GameOverReason::Caught, &mut result);
            return Ok(result);
        }
        CellKind::Coin => {
            state.score += 1;
            state.coins_remaining = state.coins_remaining.saturating_sub(1);
            result.events.push(TickEvent::CoinCollected {
                index: state.player_index,
            });
        }
        _ => {}
    }

    // Door and level transition
    if state.coins_remaining == 0 {
        if unlock_door(state) {
            if let Some(index) = state.door_index {
                result.events.push(TickEvent::DoorUnlocked { index });
            }
        }

        if state.door_index == Some(state.player_index) {
            if state.is_last_level() {
                end_game(state, GameOverReason::Finished, &mut result);
                return Ok(result);
            }
            advance_level(state, levels, rng)?;
            result.events.push(TickEvent::LevelAdvanced { level: state.level });
        }
    }

    commit_player(state);
    Ok(result)
}

/// Writes the player onto the grid, vacating the previous cell.
///
/// The previous cell is only cleared while it still holds the player, so an
/// enemy that stepped into it this tick is kept.
fn commit_player(state: &mut GameState) {
    if state.grid.cell_at(state.previous_index) == CellKind::Player {
        state.grid.set_cell(state.previous_index, CellKind::Floor);
    }
    state.grid.set_cell(state.player_index, CellKind::Player);
}
