//! Grid model: cell kinds, coordinates, and random entity placement.

pub mod placement;
pub mod types;

pub use placement::{eligible_cells, is_eligible, place_entities};
pub use types::{CellKind, Grid, Point};
