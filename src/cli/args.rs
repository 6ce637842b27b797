use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Step through the simplex solution of a zero-sum matrix game", long_about = None)]
pub struct Args {
    /// Payoff matrix, rows separated by ';' (e.g. "3 1; 0 4")
    pub matrix: Option<String>,
    /// Start from a preset game instead
    #[arg(long, conflicts_with = "matrix")]
    pub preset: Option<String>,
    /// Maximum pivots per solve
    #[arg(long, default_value_t = crate::SIMPLEX_ITERATIONS)]
    pub limit: usize,
    /// Where the current game is saved between runs
    #[arg(long, default_value = crate::SESSION_FILE)]
    pub session: PathBuf,
}
