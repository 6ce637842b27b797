//! Plain-text presentation of formulations, tableaux, and results.
mod formulation;
mod frame;
mod report;

pub use formulation::*;
pub use frame::*;
pub use report::*;
