//! Random scattering of coins and enemies onto free floor.

use super::types::{CellKind, Grid};
use rand::seq::SliceRandom;
use rand::Rng;

/// True when `index` may receive a placed entity.
///
/// Row 0 is the status line and never hosts gameplay entities. Door
/// markers are kept clear so every level keeps its exit.
pub fn is_eligible(grid: &Grid, index: usize) -> bool {
    if index < grid.width() {
        return false;
    }
    !matches!(
        grid.cell_at(index),
        CellKind::Wall | CellKind::Enemy | CellKind::Player | CellKind::Coin | CellKind::Door
    )
}

/// Indexes of all cells eligible for placement, in increasing order.
pub fn eligible_cells(grid: &Grid) -> Vec<usize> {
    (grid.width()..grid.len())
        .filter(|&idx| is_eligible(grid, idx))
        .collect()
}

/// Sets up to `count` distinct eligible cells to `kind`, chosen uniformly.
///
/// Returns how many cells were set. Fewer than `count` is not an error.
pub fn place_entities<R: Rng + ?Sized>(
    grid: &mut Grid,
    kind: CellKind,
    count: usize,
    rng: &mut R,
) -> usize {
    let mut cells = eligible_cells(grid);
    cells.shuffle(rng);

    let placed = count.min(cells.len());
    for &idx in &cells[..placed] {
        grid.set_cell(idx, kind);
    }

    if placed < count {
        log::warn!(
            "only {} of {} {:?} cells could be placed",
            placed,
            count,
            kind
        );
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn bordered(width: usize, height: usize) -> Grid {
        let mut grid = Grid::new(width, height, CellKind::Floor);
        for y in 0..height {
            for x in 0..width {
                if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                    let idx = grid.to_index(x, y);
                    grid.set_cell(idx, CellKind::Wall);
                }
            }
        }
        grid
    }

    #[test]
    fn test_places_exact_count() {
        let mut grid = bordered(10, 10);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let placed = place_entities(&mut grid, CellKind::Coin, 10, &mut rng);
        assert_eq!(placed, 10);
        assert_eq!(grid.count_cells(CellKind::Coin), 10);
    }

    #[test]
    fn test_partial_placement_when_short_of_cells() {
        let mut grid = bordered(4, 4);
        // 2x2 interior, one taken by the player
        let spawn = grid.to_index(1, 1);
        grid.set_cell(spawn, CellKind::Player);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let placed = place_entities(&mut grid, CellKind::Coin, 10, &mut rng);
        assert_eq!(placed, 3);
        assert_eq!(grid.count_cells(CellKind::Coin), 3);
        assert_eq!(grid.cell_at(spawn), CellKind::Player);
    }

    #[test]
    fn test_never_places_in_status_row() {
        // Open grid so row 0 would otherwise be eligible
        let mut grid = Grid::new(6, 3, CellKind::Floor);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let placed = place_entities(&mut grid, CellKind::Coin, 100, &mut rng);
        assert_eq!(placed, 12);
        assert!(grid.row(0).iter().all(|&c| c == CellKind::Floor));
    }

    #[test]
    fn test_excludes_occupied_cells() {
        let mut grid = bordered(8, 8);
        let enemy = grid.to_index(3, 3);
        let player = grid.to_index(4, 4);
        grid.set_cell(enemy, CellKind::Enemy);
        grid.set_cell(player, CellKind::Player);
        let before = grid.clone();

        let mut rng = ChaCha8Rng::seed_from_u64(11);
        place_entities(&mut grid, CellKind::Coin, 20, &mut rng);

        for idx in grid.indexes_of(CellKind::Coin) {
            assert!(idx >= grid.width());
            assert_eq!(before.cell_at(idx), CellKind::Floor);
        }
        assert_eq!(grid.cell_at(enemy), CellKind::Enemy);
        assert_eq!(grid.cell_at(player), CellKind::Player);
    }

    #[test]
    fn test_second_call_skips_first_call_cells() {
        let mut grid = bordered(5, 5);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        place_entities(&mut grid, CellKind::Coin, 5, &mut rng);
        place_entities(&mut grid, CellKind::Enemy, 10, &mut rng);
        // 9 interior cells: 5 coins then the remaining 4 enemies
        assert_eq!(grid.count_cells(CellKind::Coin), 5);
        assert_eq!(grid.count_cells(CellKind::Enemy), 4);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let mut a = bordered(12, 12);
        let mut b = bordered(12, 12);
        place_entities(&mut a, CellKind::Coin, 8, &mut ChaCha8Rng::seed_from_u64(99));
        place_entities(&mut b, CellKind::Coin, 8, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_door_survives_placement() {
        // Only the door and one floor cell are free below the status row
        let mut grid = Grid::new(3, 2, CellKind::Wall);
        let door = grid.to_index(1, 1);
        let floor = grid.to_index(2, 1);
        grid.set_cell(door, CellKind::Door);
        grid.set_cell(floor, CellKind::Floor);
        assert!(!is_eligible(&grid, door));
        assert_eq!(eligible_cells(&grid), vec![floor]);

        let mut rng = ChaCha8Rng::seed_from_u64(15);
        let placed = place_entities(&mut grid, CellKind::Coin, 2, &mut rng);
        assert_eq!(placed, 1);
        assert_eq!(grid.cell_at(door), CellKind::Door);
        assert_eq!(grid.cell_at(floor), CellKind::Coin);
    }
}
