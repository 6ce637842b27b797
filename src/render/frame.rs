use crate::*;

/// One tableau of the iteration history, headed by its position.
pub struct Frame<'a> {
    tableau: &'a Tableau,
    pivot: Option<Pivot>,
    cursor: usize,
    last: usize,
}

impl<'a> From<&'a Solver> for Frame<'a> {
    fn from(solver: &'a Solver) -> Self {
        let (cursor, last) = solver.info();
        let step = solver.history().current();
        Self {
            tableau: step.tableau(),
            pivot: step.pivot(),
            cursor,
            last,
        }
    }
}

impl std::fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "iteration {} of {}", self.cursor, self.last)?;
        match self.pivot {
            None if self.cursor == 0 => writeln!(
                f,
                "initial basis {}",
                self.tableau
                    .basis()
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            )?,
            None => {}
            Some(pivot) => writeln!(
                f,
                "pivot at row {}, column {}: {} entered the basis",
                pivot.row + 1,
                pivot.col + 1,
                self.tableau.variable(pivot.col)
            )?,
        }
        write!(f, "{}", self.tableau)
    }
}
