//! Cell kinds, grid points, and the flat grid buffer.

use crate::core::constants::{
    COIN_GLYPH, DOOR_GLYPH, ENEMY_GLYPH, FLOOR_GLYPH, SPAWN_GLYPH, WALL_GLYPH,
};

/// The exclusive content of one grid cell. Entities never stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Wall,
    Floor,
    Coin,
    Enemy,
    Player,
    Door,
}

impl CellKind {
    pub const ALL: [CellKind; 6] = [
        CellKind::Wall,
        CellKind::Floor,
        CellKind::Coin,
        CellKind::Enemy,
        CellKind::Player,
        CellKind::Door,
    ];

    /// Maps a level-file character to its cell kind.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            WALL_GLYPH => Some(Self::Wall),
            FLOOR_GLYPH => Some(Self::Floor),
            COIN_GLYPH => Some(Self::Coin),
            ENEMY_GLYPH => Some(Self::Enemy),
            SPAWN_GLYPH => Some(Self::Player),
            DOOR_GLYPH => Some(Self::Door),
            _ => None,
        }
    }

    /// The level-file character for this kind.
    pub fn glyph(&self) -> char {
        match self {
            Self::Wall => WALL_GLYPH,
            Self::Floor => FLOOR_GLYPH,
            Self::Coin => COIN_GLYPH,
            Self::Enemy => ENEMY_GLYPH,
            Self::Player => SPAWN_GLYPH,
            Self::Door => DOOR_GLYPH,
        }
    }
}

/// A grid coordinate used as a pathfinding key.
///
/// Ordering is x first, then y. The A* open set relies on this order to
/// break fScore ties, so the field order must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance.
    pub fn manhattan(&self, other: Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Rectangular map of cells addressed by `idx = y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellKind>,
}

impl Grid {
    /// A `width` x `height` grid filled with `fill`.
    pub fn new(width: usize, height: usize, fill: CellKind) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// Builds a grid from a row-major cell buffer.
    ///
    /// Panics if `cells.len() != width * height`.
    pub fn from_cells(width: usize, height: usize, cells: Vec<CellKind>) -> Self {
        assert_eq!(
            cells.len(),
            width * height,
            "cell buffer does not match {}x{} grid",
            width,
            height
        );
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    /// Row `y` as a slice.
    pub fn row(&self, y: usize) -> &[CellKind] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Kind of the cell at `index`. Panics when out of range.
    pub fn cell_at(&self, index: usize) -> CellKind {
        assert!(
            index < self.cells.len(),
            "grid index {} out of range (len {})",
            index,
            self.cells.len()
        );
        self.cells[index]
    }

    /// Kind of the cell at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<CellKind> {
        self.cells.get(index).copied()
    }

    /// Overwrites the cell at `index`. Panics when out of range.
    pub fn set_cell(&mut self, index: usize, kind: CellKind) {
        assert!(
            index < self.cells.len(),
            "grid index {} out of range (len {})",
            index,
            self.cells.len()
        );
        self.cells[index] = kind;
    }

    /// Linear index of `(x, y)`. Panics when the coordinate is off the grid.
    pub fn to_index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "coordinate ({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// `(x, y)` of a linear index. Panics when out of range.
    pub fn to_coord(&self, index: usize) -> (usize, usize) {
        assert!(
            index < self.cells.len(),
            "grid index {} out of range (len {})",
            index,
            self.cells.len()
        );
        let x = index % self.width;
        let y = (index - x) / self.width;
        (x, y)
    }

    /// True when `(x, y)` lies on the grid.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Linear index of a point, or `None` when it lies off the grid.
    pub fn index_of(&self, point: Point) -> Option<usize> {
        if self.contains(point.x, point.y) {
            Some(point.y as usize * self.width + point.x as usize)
        } else {
            None
        }
    }

    pub fn point_of(&self, index: usize) -> Point {
        let (x, y) = self.to_coord(index);
        Point::new(x as i32, y as i32)
    }

    /// Kind at a point; `None` off the grid.
    pub fn kind_at(&self, point: Point) -> Option<CellKind> {
        self.index_of(point).map(|idx| self.cells[idx])
    }

    /// Number of cells holding `kind`.
    pub fn count_cells(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Indexes of every cell holding `kind`, in increasing order.
    pub fn indexes_of(&self, kind: CellKind) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &c)| c == kind)
            .map(|(i, _)| i)
            .collect()
    }
}
