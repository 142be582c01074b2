//! Maze Chase - a terminal coin-collecting maze game.
//!
//! The library holds the whole engine (grid, placement, pathfinding, tick
//! logic, levels and the frame loop) so it can be driven headless; the
//! binary only wires it to a real terminal.

pub mod build_info;
pub mod config;
pub mod core;
pub mod game;
pub mod grid;
pub mod input;
pub mod level;
pub mod pathfinding;
pub mod ui;
pub mod utils;
