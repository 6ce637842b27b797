use crate::*;

/// Solved results with the outcome of the sanity check.
pub struct Report<'a> {
    solution: &'a Solution,
    verdict: Verdict,
}

impl<'a> From<&'a Solution> for Report<'a> {
    fn from(solution: &'a Solution) -> Self {
        Self {
            verdict: Verdict::from(solution),
            solution,
        }
    }
}

impl Report<'_> {
    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }
}

impl std::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "solution {}", self.solution.outcome())?;
        writeln!(f, "game value      v = {:.3}", self.solution.value())?;
        writeln!(f, "player A plays  p = {}", self.solution.row())?;
        writeln!(f, "player B plays  q = {}", self.solution.col())?;
        if !self.verdict.is_valid() {
            write!(f, "{}", self.verdict)?;
        }
        Ok(())
    }
}
