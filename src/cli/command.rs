use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub enum Command {
    #[command(about = "Blank payoff matrix of the given size")]
    New {
        #[arg(required = true)]
        rows: usize,
        #[arg(required = true)]
        cols: usize,
    },
    #[command(about = "Enter a payoff matrix, rows separated by ';'")]
    Set {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        payoffs: Vec<String>,
    },
    #[command(about = "Load a preset game", alias = "load")]
    Preset {
        #[arg(required = true)]
        name: String,
    },
    #[command(about = "List the preset games")]
    Presets,
    #[command(about = "Show the formulation and the initial tableau")]
    Start,
    #[command(about = "Step to the next iteration", alias = "n")]
    Next,
    #[command(about = "Step to the previous iteration", alias = "p")]
    Prev,
    #[command(about = "Solve to the end and show the results", alias = "solve")]
    Auto,
    #[command(about = "Show the current matrix and iteration")]
    Show,
}
