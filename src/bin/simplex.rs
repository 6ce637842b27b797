//! Simplex Stepper Binary
//!
//! Enter or load a payoff matrix, then walk the simplex tableau one pivot at a time.

use clap::Parser;
use zerosum::*;

fn main() -> anyhow::Result<()> {
    log();
    cli::CLI::try_from(cli::Args::parse())?.run()
}
