//! Game value, optimal mixed strategies, and their sanity check.
mod player;
mod solution;
mod strategy;
mod verdict;

pub use player::*;
pub use solution::*;
pub use strategy::*;
pub use verdict::*;
