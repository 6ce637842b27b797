use crate::*;

/// The column player's linear program for a game, as text.
///
/// ```text
/// B minimizes v over q_1 .. q_n such that
///   3q_1 + 1q_2 <= v
///   0q_1 + 4q_2 <= v
///   q_1 + q_2 = 1
///   q_j >= 0
/// ```
///
/// followed by the substitution that yields the tableau.
pub struct Formulation<'a>(&'a Matrix);

impl<'a> From<&'a Matrix> for Formulation<'a> {
    fn from(matrix: &'a Matrix) -> Self {
        Self(matrix)
    }
}

impl Formulation<'_> {
    fn constraint(row: &[Utility]) -> String {
        row.iter()
            .enumerate()
            .map(|(j, a)| match j {
                0 => format!("{}q_{}", a, j + 1),
                _ if *a >= 0. => format!(" + {}q_{}", a, j + 1),
                _ => format!(" - {}q_{}", -a, j + 1),
            })
            .collect::<String>()
    }
}

impl std::fmt::Display for Formulation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.0.cols();
        writeln!(f, "payoff matrix A")?;
        write!(f, "{}", self.0)?;
        writeln!(f)?;
        writeln!(f, "player B minimizes v over q_1 .. q_{} such that", n)?;
        for row in self.0.payoffs() {
            writeln!(f, "  {} <= v", Self::constraint(row))?;
        }
        let total = (1..=n)
            .map(|j| format!("q_{}", j))
            .collect::<Vec<String>>()
            .join(" + ");
        writeln!(f, "  {} = 1", total)?;
        writeln!(f, "  q_j >= 0")?;
        writeln!(f)?;
        writeln!(f, "substitute y_j = q_j / v and maximize 1/v = y_1 + .. + y_{}", n)
    }
}
