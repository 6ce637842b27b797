//! Persisted presentation state.
mod session;

pub use session::*;
