//! Interactive stepper for the simplex solution of a matrix game.
use super::*;
use crate::*;
use clap::Parser;
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

pub struct CLI {
    matrix: Matrix,
    solver: Option<Solver>,
    limit: usize,
    session: PathBuf,
}

impl TryFrom<Args> for CLI {
    type Error = anyhow::Error;
    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let matrix = match (args.matrix.as_deref(), args.preset.as_deref()) {
            (Some(matrix), _) => Matrix::try_from(matrix)?,
            (None, Some(preset)) => Matrix::from(Preset::try_from(preset)?),
            (None, None) => Session::load(&args.session)
                .inspect_err(|e| log::warn!("could not restore session: {}", e))
                .ok()
                .flatten()
                .unwrap_or_else(|| Matrix::from(Preset::Skewed)),
        };
        Ok(Self {
            matrix,
            solver: None,
            limit: args.limit,
            session: args.session,
        })
    }
}

impl CLI {
    pub fn run(mut self) -> anyhow::Result<()> {
        log::info!("entering simplex stepper");
        println!("{}", self.matrix);
        loop {
            print!("> ");
            let ref mut input = String::new();
            std::io::stdout().flush()?;
            if std::io::stdin().read_line(input)? == 0 {
                break;
            }
            match input.trim() {
                "" => continue,
                "quit" => break,
                "exit" => break,
                input => match self.handle(input) {
                    Err(e) => eprintln!("{}", e.to_string().red()),
                    Ok(_) => continue,
                },
            }
        }
        Ok(())
    }
    fn handle(&mut self, input: &str) -> anyhow::Result<()> {
        match Command::try_parse_from(std::iter::once("> ").chain(input.split_whitespace()))? {
            Command::New { rows, cols } => self.replace(Matrix::zeros(rows, cols)?),
            Command::Set { payoffs } => self.replace(Matrix::try_from(payoffs.join(" ").as_str())?),
            Command::Preset { name } => self.replace(Matrix::from(Preset::try_from(name.as_str())?)),
            Command::Presets => Ok(Preset::all()
                .iter()
                .map(|preset| (preset, Matrix::from(*preset)))
                .for_each(|(preset, matrix)| {
                    println!("{} ({}×{})", preset.to_string().bold(), matrix.rows(), matrix.cols())
                })),
            Command::Start => self.start(),
            Command::Next => self.next(),
            Command::Prev => self.prev(),
            Command::Auto => self.auto(),
            Command::Show => self.show(),
        }
    }
    /// Swaps in a new game, dropping the solution in progress.
    fn replace(&mut self, matrix: Matrix) -> anyhow::Result<()> {
        self.matrix = matrix;
        self.solver = None;
        self.save();
        Ok(println!("{}", self.matrix))
    }
    fn start(&mut self) -> anyhow::Result<()> {
        let solver = Solver::from(self.matrix.clone()).with_limit(self.limit);
        println!("{}", Formulation::from(&self.matrix));
        println!("{}", Frame::from(&solver));
        self.solver = Some(solver);
        self.save();
        Ok(())
    }
    fn next(&mut self) -> anyhow::Result<()> {
        let solver = self.solver()?;
        if solver.advance() {
            Ok(println!("{}", Frame::from(&*solver)))
        } else if solver.solution().is_none() {
            Err(anyhow::anyhow!("no further iterations recorded, run auto to solve"))
        } else {
            Err(anyhow::anyhow!("already at the last iteration"))
        }
    }
    fn prev(&mut self) -> anyhow::Result<()> {
        let solver = self.solver()?;
        if solver.retreat() {
            Ok(println!("{}", Frame::from(&*solver)))
        } else {
            Err(anyhow::anyhow!("already at the initial tableau"))
        }
    }
    fn auto(&mut self) -> anyhow::Result<()> {
        let solver = self.solver()?;
        let ref solution = solver.solve().clone();
        println!("{}", Frame::from(&*solver));
        let report = Report::from(solution);
        println!("{}", report);
        if !report.verdict().is_valid() {
            eprintln!("{}", "solution failed the sanity check".red().bold());
        }
        Ok(())
    }
    fn show(&mut self) -> anyhow::Result<()> {
        println!("{}", self.matrix);
        if let Some(ref solver) = self.solver {
            println!("{}", Frame::from(solver));
        }
        Ok(())
    }
    fn solver(&mut self) -> anyhow::Result<&mut Solver> {
        self.solver
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("nothing to step through, run start first"))
    }
    fn save(&self) {
        if let Err(e) = Session::from(&self.matrix).save(&self.session) {
            log::warn!("could not save session: {}", e);
        }
    }
}
