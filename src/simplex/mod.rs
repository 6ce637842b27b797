//! Simplex engine for the dual program of a matrix game.
//!
//! - [`Tableau`]: dual program in standard form, with its basis
//! - [`Variable`]: basis variable, `y_j` or `s_i`
//! - [`Pivot`]: pivot element chosen by the most-negative-coefficient rule
//! - [`History`]: every intermediate tableau, plus a navigation cursor
//! - [`Outcome`]: how a bounded run ended
//! - [`Solver`]: session state tying the above together
mod history;
mod outcome;
mod pivot;
mod solver;
mod tableau;
mod variable;

pub use history::*;
pub use outcome::*;
pub use pivot::*;
pub use solver::*;
pub use tableau::*;
pub use variable::*;
