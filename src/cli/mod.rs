//! Interactive terminal front end.
mod args;
mod cli;
mod command;

pub use args::*;
pub use cli::*;
pub use command::*;
