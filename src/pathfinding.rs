//! A* shortest-path search on the live grid.
//!
//! Enemies re-run this search from scratch every time they move, so it is the
//! hot path of the simulation. Movement is 4-connected with unit cost and a
//! Manhattan heuristic.
//!
//! Walls and coins are both impassable: enemies route around coins rather
//! than over them.
//!
//! # Open-set selection
//!
//! The node expanded next is the open node with the lowest fScore; ties go to
//! the smallest [`Point`] in (x, y) order. Both [`OpenSetKind`] variants apply
//! exactly this rule, so they return identical paths. Changing the tie rule
//! changes enemy trajectories whenever several shortest routes exist.

use crate::grid::{CellKind, Grid, Point};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap, HashMap, HashSet};

/// Data structure backing the A* open set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OpenSetKind {
    /// Ordered set scanned linearly for the lowest fScore.
    #[default]
    LinearScan,
    /// Min-heap keyed on `(fScore, point)` with lazy deletion.
    BinaryHeap,
}

/// Whether an enemy may step onto a cell of this kind.
pub fn is_walkable(kind: CellKind) -> bool {
    !matches!(kind, CellKind::Wall | CellKind::Coin)
}

/// Manhattan distance heuristic.
pub fn heuristic(a: Point, b: Point) -> u32 {
    a.manhattan(b)
}

/// Walkable orthogonal neighbours of `p`, in left, right, up, down order.
///
/// Bounds are exclusive on both axes: `0 <= x < width`, `0 <= y < height`.
pub fn neighbours(grid: &Grid, p: Point) -> Vec<Point> {
    [
        Point::new(p.x - 1, p.y),
        Point::new(p.x + 1, p.y),
        Point::new(p.x, p.y - 1),
        Point::new(p.x, p.y + 1),
    ]
    .into_iter()
    .filter(|&n| grid.kind_at(n).is_some_and(is_walkable))
    .collect()
}

enum OpenSet {
    Linear(BTreeSet<Point>),
    Heap {
        heap: BinaryHeap<Reverse<(u32, Point)>>,
        members: HashSet<Point>,
    },
}

impl OpenSet {
    fn new(kind: OpenSetKind) -> Self {
        match kind {
            OpenSetKind::LinearScan => OpenSet::Linear(BTreeSet::new()),
            OpenSetKind::BinaryHeap => OpenSet::Heap {
                heap: BinaryHeap::new(),
                members: HashSet::new(),
            },
        }
    }

    /// Adds `p`, or records its improved fScore if already open.
    fn push(&mut self, p: Point, f: u32) {
        match self {
            OpenSet::Linear(set) => {
                set.insert(p);
            }
            OpenSet::Heap { heap, members } => {
                heap.push(Reverse((f, p)));
                members.insert(p);
            }
        }
    }

    /// Removes and returns the open node with the lowest fScore.
    fn pop_lowest(&mut self, f_score: &HashMap<Point, u32>) -> Option<Point> {
        match self {
            OpenSet::Linear(set) => {
                let mut best: Option<(u32, Point)> = None;
                // BTreeSet iterates in Point order, so the strict `<` keeps the
                // smallest point among equal fScores.
                for &p in set.iter() {
                    let f = f_score.get(&p).copied().unwrap_or(u32::MAX);
                    if best.map_or(true, |(lowest, _)| f < lowest) {
                        best = Some((f, p));
                    }
                }
                let (_, p) = best?;
                set.remove(&p);
                Some(p)
            }
            OpenSet::Heap { heap, members } => {
                while let Some(Reverse((f, p))) = heap.pop() {
                    // Skip entries superseded by a later improvement
                    if members.contains(&p) && f_score.get(&p) == Some(&f) {
                        members.remove(&p);
                        return Some(p);
                    }
                }
                None
            }
        }
    }
}

/// Shortest walkable path from `start` to `goal`, both inclusive.
///
/// Returns `[start]` when `start == goal` and an empty vector when the goal
/// cannot be reached around the current obstacles.
pub fn find_path(grid: &Grid, start: Point, goal: Point, kind: OpenSetKind) -> Vec<Point> {
    let mut open = OpenSet::new(kind);
    let mut came_from: HashMap<Point, Point> = HashMap::new();
    let mut g_score: HashMap<Point, u32> = HashMap::new();
    let mut f_score: HashMap<Point, u32> = HashMap::new();

    g_score.insert(start, 0);
    f_score.insert(start, heuristic(start, goal));
    open.push(start, heuristic(start, goal));

    while let Some(current) = open.pop_lowest(&f_score) {
        if current == goal {
            return reconstruct_path(&came_from, current);
        }

        let current_g = g_score[&current];
        for next in neighbours(grid, current) {
            let tentative_g = current_g + 1;
            let improves = g_score.get(&next).map_or(true, |&g| tentative_g < g);
            if improves {
                let f = tentative_g + heuristic(next, goal);
                came_from.insert(next, current);
                g_score.insert(next, tentative_g);
                f_score.insert(next, f);
                open.push(next, f);
            }
        }
    }

    Vec::new()
}

fn reconstruct_path(came_from: &HashMap<Point, Point>, mut current: Point) -> Vec<Point> {
    let mut path = vec![current];
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
