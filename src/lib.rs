//! Two-player zero-sum matrix games, solved with the simplex method.
//!
//! A payoff matrix is turned into the dual linear program of the column
//! player, written as a simplex tableau, and pivoted to optimality. Every
//! intermediate tableau is retained so a presentation layer can step through
//! the solution one pivot at a time.
//!
//! # Module Structure
//!
//! - `matrix`: Game matrix store and preset example games
//! - `simplex`: Tableau, pivoting loop, iteration history, solver state
//! - `strategy`: Game value, mixed strategies, post-hoc sanity check
//! - `render`: Plain-text rendering of formulations, tableaux, results
//! - `session`: Persisted presentation state with expiry
//! - `cli`: Interactive stepper (feature `cli`)
#![allow(dead_code)]

pub mod matrix;
pub mod render;
pub mod session;
pub mod simplex;
pub mod strategy;

#[cfg(feature = "cli")]
pub mod cli;

pub use matrix::*;
pub use render::*;
pub use session::*;
pub use simplex::*;
pub use strategy::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Payoffs, tableau cells, and game values.
pub type Utility = f64;
/// Mixed strategy weights.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// SIMPLEX PARAMETERS
// ============================================================================
/// Maximum pivots per solve. Bounds the work done on the caller's thread.
pub const SIMPLEX_ITERATIONS: usize = 10;
/// Game value reported when the objective row holds no positive value.
/// Kept for compatibility; it has no game-theoretic derivation.
pub const FALLBACK_VALUE: Utility = 0.5;

// ============================================================================
// STRATEGY EXTRACTION
// ============================================================================
/// Allowed deviation of a strategy's total mass from 1.
pub const STRATEGY_TOLERANCE: Probability = 0.01;
/// Decimal places kept after normalizing a strategy.
pub const STRATEGY_PRECISION: i32 = 3;

// ============================================================================
// SESSION PERSISTENCE
// ============================================================================
/// Saved sessions older than this are discarded on load.
pub const SESSION_EXPIRY: std::time::Duration = std::time::Duration::from_secs(60 * 60);
/// Default location of the saved session.
pub const SESSION_FILE: &str = ".simplex/session.json";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
