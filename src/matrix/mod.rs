//! Game matrix store.
//!
//! Holds the payoff matrix handed to the simplex engine, validated once at
//! construction, plus a handful of preset example games.
mod matrix;
mod preset;

pub use matrix::*;
pub use preset::*;
