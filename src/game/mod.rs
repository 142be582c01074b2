//! Chase simulation: player, enemies, coins, and the level door.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
